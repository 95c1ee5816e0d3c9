//! Core data types: localities, keyword sets, errors.

pub mod error;
pub mod keyword_set;
pub mod locality;

pub use error::{KwError, KwResult};
pub use keyword_set::KeywordSet;
pub use locality::Locality;
