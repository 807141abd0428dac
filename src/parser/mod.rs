pub mod dates;
pub mod duration;
pub mod footnotes;
pub mod schema;

use std::collections::HashMap;

use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, info};

use crate::error::ParseError;
use crate::record::{DateValue, Extension, ExtensionRecord};
use duration::{DurationPattern, DURATION_PATTERNS};
use footnotes::{FootnoteTable, APPROVAL_NOTE_PATTERNS, EXTENSION_NOTE_PATTERNS};
use schema::{Column, ColumnSpec, Transform, COLUMNS};

/// Turns the listing page into extension records.
///
/// All pattern and schema tables are fixed at construction; `extract` only
/// reads them.
pub struct TableExtractor {
    columns: &'static [ColumnSpec],
    extension_rows: Selector,
    footnote_rows: Selector,
    row_header: Selector,
    cell: Selector,
    extension_notes: &'static [Regex],
    approval_notes: &'static [Regex],
    durations: &'static [DurationPattern],
}

impl TableExtractor {
    pub fn new() -> Result<Self, ParseError> {
        Self::with_captions(schema::EXTENSIONS_CAPTION, schema::FOOTNOTES_CAPTION)
    }

    pub fn with_captions(extensions: &str, footnotes: &str) -> Result<Self, ParseError> {
        Ok(Self {
            columns: &COLUMNS,
            extension_rows: selector(&schema::rows_in(extensions))?,
            footnote_rows: selector(&schema::rows_in(footnotes))?,
            row_header: selector(schema::ROW_HEADER_SELECTOR)?,
            cell: selector(schema::CELL_SELECTOR)?,
            extension_notes: &EXTENSION_NOTE_PATTERNS,
            approval_notes: &APPROVAL_NOTE_PATTERNS,
            durations: &DURATION_PATTERNS,
        })
    }

    /// Parse `html` into records, in page order.
    ///
    /// A missing table yields no rows. A footnote row in an unknown format
    /// fails the whole extraction.
    pub fn extract(&self, html: &str) -> Result<Vec<ExtensionRecord>, ParseError> {
        let document = Html::parse_document(html);

        let footnotes = self.footnotes(&document)?;
        if footnotes.is_empty() {
            debug!("No footnotes on page");
        } else {
            info!("Found {} footnotes", footnotes.len());
        }

        let records = document
            .select(&self.extension_rows)
            .filter(|row| row.select(&self.row_header).next().is_some())
            .map(|row| self.record(row, &footnotes))
            .collect::<Result<Vec<_>, _>>()?;
        info!("Extracted {} extension rows", records.len());

        Ok(records)
    }

    fn footnotes(&self, document: &Html) -> Result<FootnoteTable, ParseError> {
        document
            .select(&self.footnote_rows)
            .map(|row| footnotes::parse_footnote(&element_text(row)))
            .collect()
    }

    fn record(&self, row: ElementRef, notes: &FootnoteTable) -> Result<ExtensionRecord, ParseError> {
        let mut cells: HashMap<Column, String> = HashMap::new();
        for (index, cell) in row.select(&self.cell).enumerate() {
            let spec = self
                .columns
                .get(index)
                .ok_or(ParseError::UnexpectedColumn { index })?;
            cells.insert(spec.column, element_text(cell).trim().to_string());
        }

        let mut record = ExtensionRecord::default();

        // Markers come off before the values are typed.
        let (mut extension, extension_note) =
            strip_note(cells.remove(&Column::Extension), self.extension_notes, notes);
        let (mut approval, approval_note) =
            strip_note(cells.remove(&Column::Approval), self.approval_notes, notes);
        record.extension_note = extension_note;
        record.approval_note = approval_note;

        for spec in self.columns {
            let text = match spec.column {
                Column::Extension => extension.take(),
                Column::Approval => approval.take(),
                column => cells.remove(&column),
            };
            if let Some(text) = text {
                let value = self.convert(spec.transform, text)?;
                store(&mut record, spec.column, value)?;
            }
        }

        Ok(record)
    }

    fn convert(&self, transform: Transform, text: String) -> Result<FieldValue, ParseError> {
        Ok(match transform {
            Transform::Text => FieldValue::Text(text),
            Transform::Date => FieldValue::Date(dates::to_iso8601(&text)?),
            Transform::Duration => FieldValue::Extension(
                match duration::parse_extension(self.durations, &text) {
                    Some(d) => Extension::Duration(d),
                    None => Extension::Text(text),
                },
            ),
        })
    }
}

/// A cell after its column's transform.
#[derive(Debug)]
enum FieldValue {
    Text(String),
    Date(Option<DateValue>),
    Extension(Extension),
}

impl FieldValue {
    fn kind(&self) -> &'static str {
        match self {
            FieldValue::Text(_) => "text",
            FieldValue::Date(_) => "date",
            FieldValue::Extension(_) => "extension",
        }
    }
}

fn store(record: &mut ExtensionRecord, column: Column, value: FieldValue) -> Result<(), ParseError> {
    match (column, value) {
        (Column::Patent, FieldValue::Text(t)) => record.patent = t,
        (Column::Tradename, FieldValue::Text(t)) => record.tradename = t,
        (Column::Original, FieldValue::Date(d)) => record.original = d,
        (Column::Approval, FieldValue::Date(d)) => record.approval = d,
        (Column::Extended, FieldValue::Date(d)) => record.extended = d,
        (Column::Extension, FieldValue::Extension(e)) => record.extension = Some(e),
        (column, value) => {
            return Err(ParseError::ColumnType {
                column: column.name(),
                kind: value.kind(),
            })
        }
    }
    Ok(())
}

/// Extract with the default captions and tables.
pub fn extract(html: &str) -> Result<Vec<ExtensionRecord>, ParseError> {
    TableExtractor::new()?.extract(html)
}

/// Returns the cell text (marker removed if it resolved) and the note body.
fn strip_note(
    text: Option<String>,
    patterns: &[Regex],
    notes: &FootnoteTable,
) -> (Option<String>, Option<String>) {
    let Some(text) = text else {
        return (None, None);
    };
    match footnotes::find_note(&text, patterns, notes) {
        Some(m) => (m.remainder, Some(m.note)),
        None => (Some(text), None),
    }
}

fn selector(css: &str) -> Result<Selector, ParseError> {
    Selector::parse(css).map_err(|e| ParseError::Selector {
        selector: css.to_string(),
        reason: e.to_string(),
    })
}

fn element_text(element: ElementRef) -> String {
    element.text().collect()
}

// ── Tests ──
