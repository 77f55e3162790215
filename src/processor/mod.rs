pub mod catalog_extractor;
pub mod comparator;
pub mod listing_extractor;
pub mod url_validator;

pub use catalog_extractor::*;
pub use comparator::*;
pub use listing_extractor::*;
pub use url_validator::*;
