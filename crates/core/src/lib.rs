pub mod error;
pub mod types;

pub use error::FetchError;
pub use types::*;
