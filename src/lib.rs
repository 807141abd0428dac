//! Scrapes the USPTO listing of patent term extensions granted under
//! 35 USC 156 into typed records.

pub mod error;
pub mod fetch;
pub mod parser;
pub mod record;

pub use error::{Error, ParseError, Result};
pub use fetch::{FetchConfig, Fetcher};
pub use parser::{extract, TableExtractor};
pub use record::{DateValue, Duration, DurationUnit, Extension, ExtensionRecord};

/// Fetch the listing page and extract every extension on it.
pub async fn fetch_extensions() -> Result<Vec<ExtensionRecord>> {
    fetch_extensions_with(&Fetcher::new()).await
}

/// Same as [`fetch_extensions`], through a caller-supplied fetcher.
pub async fn fetch_extensions_with(fetcher: &Fetcher) -> Result<Vec<ExtensionRecord>> {
    let html = fetcher.fetch().await?;
    let records = parser::extract(&html)?;
    Ok(records)
}
