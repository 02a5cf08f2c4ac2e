//! mercari-search - Fetch one mercari.jp search page and list its items
//!
//! Builds the search URL from a [`SearchCondition`], fetches the page once and
//! extracts every item card with CSS selectors.

pub mod commands;
pub mod config;
pub mod format;
pub mod mercari;

pub use config::Config;
pub use mercari::models::{Item, SearchCondition};
