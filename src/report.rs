use colored::Colorize;

use formscan_core::{FetchError, FormDescriptor};

/// Rendering boundary for the batch driver. All user-facing text, reports
/// and per-line diagnostics alike, flows through here to stdout.
pub trait Reporter {
    fn page(&mut self, url: &str, forms: &[FormDescriptor]);
    fn invalid_url(&mut self, line: &str);
    fn fetch_failure(&mut self, url: &str, err: &FetchError);
    fn scan_failure(&mut self, err: &std::io::Error);
}

const SEPARATOR: &str = "____________________________________________________";

/// `Form:` when the page has exactly one form, `Form N:` (1-based)
/// otherwise.
fn form_label(index: usize, total: usize) -> String {
    if total == 1 {
        "Form:".to_string()
    } else {
        format!("Form {}:", index + 1)
    }
}

/// Terminal renderer. Colors are applied at render time only; nothing
/// upstream knows about styling.
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn page(&mut self, url: &str, forms: &[FormDescriptor]) {
        println!("{}", url.green());
        println!("Found {} forms in this page.", forms.len());
        for (i, form) in forms.iter().enumerate() {
            println!("{}", form_label(i, forms.len()).yellow());
            println!("{} {}", "Method:".yellow(), form.method);
            for input in &form.inputs {
                println!("{} {}", "Input:".cyan(), input);
            }
            println!("\n\n{}\n", SEPARATOR);
        }
    }

    fn invalid_url(&mut self, line: &str) {
        println!("This is not a valid URL: {}", line);
    }

    fn fetch_failure(&mut self, url: &str, err: &FetchError) {
        println!("Error getting {}: {}", url, err);
    }

    fn scan_failure(&mut self, err: &std::io::Error) {
        println!("Error scanning URL list: {}", err);
    }
}
