pub mod format;
pub mod table;
pub mod token_finder;

pub use format::Dialect;
pub use table::{underscores_to_spaces, TagTable, TagTableBuilder};
pub use token_finder::{TokenFinder, MISSING_COUNT};
