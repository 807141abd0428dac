use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

/// One row of the 35 USC 156 extension listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtensionRecord {
    pub patent: String,
    pub tradename: String,
    /// Original expiration date.
    pub original: Option<DateValue>,
    /// `None` when the cell held nothing but a footnote marker.
    pub extension: Option<Extension>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension_note: Option<String>,
    pub approval: Option<DateValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approval_note: Option<String>,
    /// Expiration date after the extension.
    pub extended: Option<DateValue>,
}

/// A coerced date cell: either a canonical date or text that was never a date
/// to begin with (e.g. "N/A").
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum DateValue {
    Date(NaiveDate),
    Raw(String),
}

impl fmt::Display for DateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateValue::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            DateValue::Raw(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Extension {
    Duration(Duration),
    /// Extension text with no recognizable "N days" / "N years" run.
    Text(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Duration {
    pub unit: DurationUnit,
    pub count: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DurationUnit {
    Day,
    Year,
}

// ── Tests ──
