mod error;
mod file_path;
mod store;

pub use error::*;
pub(crate) use file_path::*;
pub use store::*;
