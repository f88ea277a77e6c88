//! Workbook ingestion and validation.
//!
//! calamine sits only at the very edge: sheets are converted into plain
//! [`SheetGrid`]s (header row + string cells) immediately after parsing,
//! so the selector, composer and the test suite never touch xlsx bytes.
//!
//! Validation fails fast and names exactly what was expected vs. found.

use std::io::Cursor;
use std::path::Path;

use calamine::{open_workbook_auto, open_workbook_auto_from_rs, Data, Range, Reader, Sheets};
use chrono::{NaiveDateTime, NaiveTime};
use tracing::debug;

use crate::error::ReportError;
use crate::selector::LABEL_COLUMNS;

/// Required sheet holding the insured members.
pub const CLIENT_SHEET: &str = "Client Details";
/// Required sheet holding the premium quotes.
pub const PREMIUM_SHEET: &str = "Premiums";

/// Required columns of the client sheet.
pub const CLIENT_COLUMNS: &[&str] = &["Client Name", "Relation", "DOB", "Age", "City", "Sum Assured"];

/// A parsed worksheet: one header row plus string-valued data rows.
#[derive(Debug, Clone, Default)]
pub struct SheetGrid {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl SheetGrid {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.headers.iter().any(|h| h == name)
    }

    /// Trimmed cell value by row index and column name. `None` when the
    /// column does not exist or the row is short.
    pub fn value(&self, row: usize, column: &str) -> Option<&str> {
        let idx = self.headers.iter().position(|h| h == column)?;
        self.rows.get(row)?.get(idx).map(|v| v.trim())
    }
}

/// One insured member from the client sheet. All fields are free text.
#[derive(Debug, Clone, Default)]
pub struct ClientRow {
    pub name: String,
    pub relation: String,
    pub dob: String,
    pub age: String,
    pub city: String,
    pub sum_assured: String,
}

/// Validated input workbook.
#[derive(Debug)]
pub struct QuoteWorkbook {
    pub clients: SheetGrid,
    pub premiums: SheetGrid,
}

impl QuoteWorkbook {
    /// Open a workbook from disk (.xlsx/.xlsm/.xls auto-detected).
    pub fn load(path: &Path) -> Result<Self, ReportError> {
        let workbook = open_workbook_auto(path)?;
        Self::from_reader(workbook)
    }

    /// Open a workbook from an in-memory upload.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ReportError> {
        let workbook = open_workbook_auto_from_rs(Cursor::new(bytes))?;
        Self::from_reader(workbook)
    }

    fn from_reader<RS: std::io::Read + std::io::Seek>(
        mut workbook: Sheets<RS>,
    ) -> Result<Self, ReportError> {
        let found: Vec<String> = workbook.sheet_names().to_vec();
        let missing: Vec<&str> = [CLIENT_SHEET, PREMIUM_SHEET]
            .into_iter()
            .filter(|s| !found.iter().any(|f| f == s))
            .collect();
        if !missing.is_empty() {
            return Err(ReportError::MissingSheets {
                missing: missing.join(", "),
                found: found.join(", "),
            });
        }

        let clients = grid_from_range(&workbook.worksheet_range(CLIENT_SHEET)?);
        let premiums = grid_from_range(&workbook.worksheet_range(PREMIUM_SHEET)?);
        Self::from_grids(clients, premiums)
    }

    /// Validate already-parsed grids. Entry point for tests and any
    /// non-Excel tabular source.
    pub fn from_grids(clients: SheetGrid, premiums: SheetGrid) -> Result<Self, ReportError> {
        let missing: Vec<&str> = CLIENT_COLUMNS
            .iter()
            .filter(|c| !clients.has_column(c))
            .copied()
            .collect();
        if !missing.is_empty() {
            return Err(ReportError::MissingColumns {
                sheet: CLIENT_SHEET.to_string(),
                missing: missing.join(", "),
            });
        }

        if !LABEL_COLUMNS.iter().any(|c| premiums.has_column(c)) {
            return Err(ReportError::NoPlanColumn {
                expected: LABEL_COLUMNS.join(", "),
            });
        }

        debug!(
            clients = clients.rows().len(),
            premiums = premiums.rows().len(),
            "workbook validated"
        );
        Ok(Self { clients, premiums })
    }

    /// Client rows in sheet order. Missing cells become empty strings.
    pub fn client_rows(&self) -> Vec<ClientRow> {
        (0..self.clients.rows().len())
            .map(|i| {
                let get = |col: &str| {
                    self.clients
                        .value(i, col)
                        .unwrap_or_default()
                        .to_string()
                };
                ClientRow {
                    name: get("Client Name"),
                    relation: get("Relation"),
                    dob: get("DOB"),
                    age: get("Age"),
                    city: get("City"),
                    sum_assured: get("Sum Assured"),
                }
            })
            .collect()
    }
}

/// Convert a calamine range into a string grid. The first row is the
/// header row; fully empty data rows are dropped.
fn grid_from_range(range: &Range<Data>) -> SheetGrid {
    let mut rows = range.rows();
    let headers: Vec<String> = match rows.next() {
        Some(header) => header.iter().map(cell_to_string).collect(),
        None => return SheetGrid::default(),
    };

    let data: Vec<Vec<String>> = rows
        .map(|row| row.iter().map(cell_to_string).collect::<Vec<String>>())
        .filter(|row: &Vec<String>| row.iter().any(|c| !c.trim().is_empty()))
        .collect();

    SheetGrid::new(headers, data)
}

fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty | Data::Error(_) => String::new(),
        Data::String(s) => s.trim().to_string(),
        Data::Float(f) => format_number(*f),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => dt.as_datetime().map(format_datetime).unwrap_or_default(),
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
    }
}

/// Excel stores integers as floats; render 12500.0 as "12500".
fn format_number(f: f64) -> String {
    if f.fract() == 0.0 && f.abs() < 1e15 {
        format!("{}", f as i64)
    } else {
        f.to_string()
    }
}

fn format_datetime(dt: NaiveDateTime) -> String {
    if dt.time() == NaiveTime::MIN {
        dt.format("%d-%m-%Y").to_string()
    } else {
        dt.format("%d-%m-%Y %H:%M").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client_grid() -> SheetGrid {
        SheetGrid::new(
            vec![
                "Client Name".into(),
                "Relation".into(),
                "DOB".into(),
                "Age".into(),
                "City".into(),
                "Sum Assured".into(),
            ],
            vec![vec![
                "Ravi Kumar".into(),
                "Self".into(),
                "01-01-1990".into(),
                "35".into(),
                "Pune".into(),
                "10 Lakh".into(),
            ]],
        )
    }

    fn premium_grid() -> SheetGrid {
        SheetGrid::new(
            vec!["Plan Name".into(), "1 Yr Premium".into()],
            vec![vec!["HDFC ERGO Optima Secure".into(), "12500".into()]],
        )
    }

    #[test]
    fn test_valid_grids_pass() {
        let wb = QuoteWorkbook::from_grids(client_grid(), premium_grid()).unwrap();
        let clients = wb.client_rows();
        assert_eq!(clients.len(), 1);
        assert_eq!(clients[0].name, "Ravi Kumar");
        assert_eq!(clients[0].city, "Pune");
    }

    #[test]
    fn test_missing_client_columns_are_enumerated() {
        let clients = SheetGrid::new(vec!["Client Name".into(), "Age".into()], vec![]);
        let err = QuoteWorkbook::from_grids(clients, premium_grid()).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("Client Details"), "{msg}");
        assert!(msg.contains("Relation"), "{msg}");
        assert!(msg.contains("DOB"), "{msg}");
        assert!(msg.contains("Sum Assured"), "{msg}");
        assert!(!msg.contains("Age,"), "present column listed: {msg}");
    }

    #[test]
    fn test_no_plan_column_lists_accepted_names() {
        let premiums = SheetGrid::new(vec!["1 Yr Premium".into()], vec![]);
        let err = QuoteWorkbook::from_grids(client_grid(), premiums).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("Plan Name"), "{msg}");
        assert!(msg.contains("Insurance Company"), "{msg}");
        assert!(msg.contains("Product"), "{msg}");
    }

    #[test]
    fn test_value_lookup_trims_and_bounds_checks() {
        let grid = premium_grid();
        assert_eq!(grid.value(0, "Plan Name"), Some("HDFC ERGO Optima Secure"));
        assert_eq!(grid.value(0, "No Such Column"), None);
        assert_eq!(grid.value(5, "Plan Name"), None);
    }

    #[test]
    fn test_number_formatting() {
        assert_eq!(format_number(12500.0), "12500");
        assert_eq!(format_number(12500.5), "12500.5");
        assert_eq!(format_number(0.0), "0");
    }
}
