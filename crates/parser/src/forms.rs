use formscan_core::FormDescriptor;
use tracing::debug;

use crate::dom::{DomNode, DomTree};

/// Walk a document tree and describe every `form` element, in source order.
///
/// Pre-order depth-first, children left to right. Traversal keeps
/// descending after a match, so nested forms (invalid markup, but it shows
/// up in the wild) each get their own descriptor.
pub fn extract_forms(tree: &DomTree) -> Vec<FormDescriptor> {
    let mut forms = Vec::new();
    for root in tree.roots() {
        collect_forms(root, &mut forms);
    }
    debug!(count = forms.len(), "form extraction finished");
    forms
}

fn collect_forms(node: &DomNode, out: &mut Vec<FormDescriptor>) {
    if node.is_element("form") {
        out.push(describe_form(node));
    }
    for child in node.children() {
        collect_forms(child, out);
    }
}

/// The method is the first `method` attribute, verbatim (empty when
/// absent). Inputs are scanned on direct children only: an `<input>`
/// buried in a wrapper element inside the form is not collected.
fn describe_form(form: &DomNode) -> FormDescriptor {
    let method = form.attr("method").unwrap_or("").to_string();

    let mut inputs = Vec::new();
    for child in form.children() {
        if child.is_element("input") {
            if let Some(name) = child.attr("name") {
                inputs.push(name.to_string());
            }
        }
    }

    FormDescriptor { method, inputs }
}
