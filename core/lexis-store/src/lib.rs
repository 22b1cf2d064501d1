pub mod error;
pub mod lexicon;
mod rows;
mod schema;

pub use error::StoreError;
pub use lexicon::{Counts, Lexicon, Lookup, SelectOptions};
