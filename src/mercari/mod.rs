//! mercari.jp modules for query building, HTTP client, parsing, and data models.

pub mod client;
pub mod models;
pub mod parser;
pub mod query;
pub mod selectors;

pub use client::{FetchError, MercariClient, MercariSearch};
pub use models::{Item, SearchCondition};
pub use parser::{Parser, Selectable};
pub use query::build_url;
