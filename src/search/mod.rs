//! Load search module
//!
//! One configurable search component backs both search endpoints; the
//! variants differ only in the `SearchOptions` they parse requests with.

mod executor;
mod models;

pub use executor::LoadSearch;
pub use models::{ParamError, SearchOptions, SearchParams, SearchRequest};
