/// Caption (`title` attribute) of the table listing the extensions.
pub const EXTENSIONS_CAPTION: &str = " Listing of Patent Term Extensions under 35 USC 156.";
/// Caption of the table holding the footnote bodies.
pub const FOOTNOTES_CAPTION: &str =
    " Footnotes regarding information found in the 156 Extension Table";

/// Real data rows carry a row-header cell; section header rows don't.
pub const ROW_HEADER_SELECTOR: &str = "td[scope=row]";
pub const CELL_SELECTOR: &str = "td";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Patent,
    Tradename,
    Original,
    Extension,
    Approval,
    Extended,
}

impl Column {
    pub fn name(self) -> &'static str {
        match self {
            Column::Patent => "patent",
            Column::Tradename => "tradename",
            Column::Original => "original",
            Column::Extension => "extension",
            Column::Approval => "approval",
            Column::Extended => "extended",
        }
    }
}

/// How a cell's trimmed text becomes a field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    Text,
    Date,
    Duration,
}

#[derive(Debug, Clone, Copy)]
pub struct ColumnSpec {
    pub column: Column,
    pub transform: Transform,
}

/// Cell `i` of a data row maps to `COLUMNS[i]`.
pub static COLUMNS: [ColumnSpec; 6] = [
    ColumnSpec { column: Column::Patent, transform: Transform::Text },
    ColumnSpec { column: Column::Tradename, transform: Transform::Text },
    ColumnSpec { column: Column::Original, transform: Transform::Date },
    ColumnSpec { column: Column::Extension, transform: Transform::Duration },
    ColumnSpec { column: Column::Approval, transform: Transform::Date },
    ColumnSpec { column: Column::Extended, transform: Transform::Date },
];

/// Selector for every row of the table whose title equals `caption`.
pub fn rows_in(caption: &str) -> String {
    format!(r#"table[title="{}"] tr"#, caption.replace('"', "\\\""))
}
