use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use regex::Regex;

use crate::error::ParseError;
use crate::record::DateValue;

// Two-digit years go first: `%Y` would happily read "14" as the year 14.
// `%B` also accepts abbreviated month names when parsing.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%m/%d/%y",
    "%m/%d/%Y",
    "%m-%d-%Y",
    "%Y/%m/%d",
    "%d %B %Y",
    "%d %B, %Y",
    "%d-%B-%Y",
];

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

/// "12/09/2014 (interim)": a parenthesised remark after the date.
static TRAILING_REMARK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\([^()]*\)$").unwrap());
/// Bare year or year-month; the missing parts default to the first.
static PARTIAL_DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]{4})(?:-([0-9]{1,2}))?$").unwrap());

/// Coerce a date cell.
///
/// Empty text is `None`. Text that doesn't start with a digit is passed
/// through trimmed ("N/A", "Pending"). Anything else must parse as a date and
/// comes back as a canonical `YYYY-MM-DD` value.
pub fn to_iso8601(text: &str) -> Result<Option<DateValue>, ParseError> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }
    if !text.starts_with(|c: char| c.is_ascii_digit()) {
        return Ok(Some(DateValue::Raw(text.to_string())));
    }
    let date = TRAILING_REMARK_RE.replace(text, "");
    parse_date(&date)
        .map(|d| Some(DateValue::Date(d)))
        .ok_or_else(|| ParseError::InvalidDate {
            text: text.to_string(),
        })
}

fn parse_date(text: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
                .map(|dt| dt.date())
        })
        .or_else(|| {
            DateTime::parse_from_rfc3339(text)
                .ok()
                .map(|dt| dt.with_timezone(&Utc).date_naive())
        })
        .or_else(|| parse_partial(text))
}

fn parse_partial(text: &str) -> Option<NaiveDate> {
    let caps = PARTIAL_DATE_RE.captures(text)?;
    let year = caps[1].parse().ok()?;
    let month = match caps.get(2) {
        Some(m) => m.as_str().parse().ok()?,
        None => 1,
    };
    NaiveDate::from_ymd_opt(year, month, 1)
}
