pub mod dom;
pub mod forms;

pub use dom::{parse_document, DomNode, DomTree};
pub use forms::extract_forms;
