use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("HTTP request failed: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Server responded {status}")]
    HttpStatus { status: u16 },
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// The page no longer has the shape the extractor expects.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Could not identify footnote symbol in {text:?}")]
    UnknownFootnote { text: String },
    #[error("Could not parse date {text:?}")]
    InvalidDate { text: String },
    #[error("Unexpected column {index} in extension row")]
    UnexpectedColumn { index: usize },
    #[error("Column {column} cannot hold a {kind} value")]
    ColumnType {
        column: &'static str,
        kind: &'static str,
    },
    #[error("Invalid selector {selector:?}: {reason}")]
    Selector { selector: String, reason: String },
}
