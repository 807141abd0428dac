use std::sync::LazyLock;

use regex::Regex;

use crate::record::{Duration, DurationUnit};

pub struct DurationPattern {
    pub re: Regex,
    pub unit: DurationUnit,
}

/// Tried in order; the first pattern whose count parses wins.
pub static DURATION_PATTERNS: LazyLock<Vec<DurationPattern>> = LazyLock::new(|| {
    vec![
        DurationPattern {
            re: Regex::new(r"([0-9,]+) days").unwrap(),
            unit: DurationUnit::Day,
        },
        DurationPattern {
            re: Regex::new(r"([0-9,]+) years").unwrap(),
            unit: DurationUnit::Year,
        },
    ]
});

/// Find a "1,234 days" / "5 years" run anywhere in the extension text.
pub fn parse_extension(patterns: &[DurationPattern], text: &str) -> Option<Duration> {
    patterns.iter().find_map(|p| {
        let caps = p.re.captures(text)?;
        let count = caps[1].replace(',', "").parse::<u64>().ok()?;
        Some(Duration {
            unit: p.unit,
            count,
        })
    })
}
