pub mod file_loader;
pub mod input_resolver;

pub use file_loader::*;
pub use input_resolver::*;
