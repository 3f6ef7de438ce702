//! CSV text -> header-keyed rows.
//!
//! Quoted fields (`"Korea, South"`) are handled by the `csv` crate. Rows may be
//! shorter or longer than the header; missing cells read as `""` and extra
//! cells are dropped, since the upstream feeds are not consistent about
//! trailing commas.

use std::fmt;

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CsvError {
    /// The text had no header row.
    Empty,
    /// The CSV reader rejected a record.
    Malformed { row: usize, message: String },
}

impl fmt::Display for CsvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CsvError::Empty => write!(f, "csv has no header row"),
            CsvError::Malformed { row, message } => write!(f, "csv row {row}: {message}"),
        }
    }
}

impl std::error::Error for CsvError {}

// ---------------------------------------------------------------------------
// Table
// ---------------------------------------------------------------------------

/// A parsed CSV document: one header row plus data rows of the same width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl CsvTable {
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Column index of `name` (exact match).
    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    pub fn rows(&self) -> impl Iterator<Item = RowView<'_>> + '_ {
        self.rows.iter().map(move |cells| RowView {
            headers: &self.headers,
            cells,
        })
    }
}

/// Borrowed view of one data row, addressable by header label or index.
#[derive(Debug, Clone, Copy)]
pub struct RowView<'a> {
    headers: &'a [String],
    cells: &'a [String],
}

impl<'a> RowView<'a> {
    pub fn get(&self, header: &str) -> Option<&'a str> {
        let (headers, cells) = (self.headers, self.cells);
        let i = headers.iter().position(|h| h == header)?;
        cells.get(i).map(String::as_str)
    }

    pub fn cell(&self, index: usize) -> &'a str {
        let cells = self.cells;
        cells.get(index).map(String::as_str).unwrap_or("")
    }

    pub fn width(&self) -> usize {
        self.cells.len()
    }

    /// `(header, value)` pairs in column order.
    pub fn entries(&self) -> impl Iterator<Item = (&'a str, &'a str)> + 'a {
        let (headers, cells) = (self.headers, self.cells);
        headers
            .iter()
            .enumerate()
            .map(move |(i, h)| (h.as_str(), cells.get(i).map(String::as_str).unwrap_or("")))
    }
}

/// Parse CSV text whose first row is a header.
pub fn parse_csv(src: &str) -> Result<CsvTable, CsvError> {
    let mut records = read_records(src)?.into_iter();
    let headers = match records.next() {
        Some(h) => h.into_iter().map(|s| s.trim().to_string()).collect::<Vec<_>>(),
        None => return Err(CsvError::Empty),
    };

    let width = headers.len();
    let rows = records
        .map(|mut cells| {
            cells.resize(width, String::new());
            cells
        })
        .collect();

    Ok(CsvTable { headers, rows })
}

/// Parse CSV text without header interpretation (every row, header included).
pub fn parse_records(src: &str) -> Result<Vec<Vec<String>>, CsvError> {
    read_records(src)
}

fn read_records(src: &str) -> Result<Vec<Vec<String>>, CsvError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(src.as_bytes());

    let mut out = Vec::new();
    for (i, rec) in rdr.records().enumerate() {
        let rec = rec.map_err(|e| CsvError::Malformed {
            row: i + 1,
            message: e.to_string(),
        })?;
        // Blank lines come through as a single empty field.
        if rec.len() == 1 && rec.get(0).is_some_and(|c| c.trim().is_empty()) {
            continue;
        }
        out.push(rec.iter().map(str::to_string).collect());
    }
    Ok(out)
}
