//! Premium-row qualification and the inclusion list.
//!
//! Scans the Premiums sheet, keeps rows that actually carry a quote,
//! resolves each label against the registry, and produces the
//! deduplicated, order-preserving set of plans the report covers.

use tracing::info;

use crate::registry::{self, PlanRecord};
use crate::resolver;
use crate::workbook::SheetGrid;

/// Label columns in extraction priority order; first non-empty wins.
pub const LABEL_COLUMNS: &[&str] = &[
    "Plan Name",
    "Plan",
    "Insurance Company",
    "Insurer",
    "Company",
    "Product",
];

/// Tenure premium columns, in table order.
pub const PREMIUM_COLUMNS: &[&str] = &["1 Yr Premium", "2 Yr Premium", "3 Yr Premium"];

/// A plan the report includes: either resolved to the registry or kept
/// as the raw spreadsheet label. Both branches must be handled by the
/// composer - an unmapped plan surfaces with a sentinel, it never vanishes.
#[derive(Debug, Clone)]
pub enum PlanRef {
    Canonical(&'static PlanRecord),
    Raw(String),
}

impl PlanRef {
    /// Text shown in column headers and the advisory table.
    pub fn display_name(&self) -> &str {
        match self {
            PlanRef::Canonical(plan) => plan.name,
            PlanRef::Raw(label) => label,
        }
    }

    /// Registry record, when the plan resolved.
    pub fn record(&self) -> Option<&'static PlanRecord> {
        match self {
            PlanRef::Canonical(plan) => Some(plan),
            PlanRef::Raw(_) => None,
        }
    }
}

/// One qualifying premium row, in sheet order.
#[derive(Debug, Clone)]
pub struct QuotedRow {
    /// Raw label as it appeared in the sheet (may be empty when no label
    /// cell was populated at all).
    pub label: String,
    /// 1/2/3-year premium display values; blank and "0" normalize to "".
    pub premiums: [String; 3],
}

/// Result of scanning the Premiums sheet.
#[derive(Debug)]
pub struct Selection {
    /// Qualifying rows in sheet order. Drives the premium table.
    pub quoted: Vec<QuotedRow>,
    /// Deduplicated inclusion list. Drives the feature matrix and the
    /// advisory table. Never empty: defaults to the full registry.
    pub included: Vec<PlanRef>,
}

/// Scan the premium sheet and build the selection.
pub fn select(premiums: &SheetGrid) -> Selection {
    let mut quoted = Vec::new();
    let mut included: Vec<PlanRef> = Vec::new();

    for row in 0..premiums.rows().len() {
        if !has_premium(premiums, row) {
            continue;
        }

        let label = extract_label(premiums, row).unwrap_or_default();
        quoted.push(QuotedRow {
            label: label.clone(),
            premiums: premium_values(premiums, row),
        });

        let plan_ref = match resolver::resolve(&label) {
            Some(plan) => PlanRef::Canonical(plan),
            None if !label.is_empty() => PlanRef::Raw(label),
            None => continue,
        };
        if !included
            .iter()
            .any(|p| p.display_name() == plan_ref.display_name())
        {
            included.push(plan_ref);
        }
    }

    if included.is_empty() {
        // The report must never be section-empty; show every plan.
        info!("no quoted plans found, defaulting to the full registry");
        included = registry::all_plans().iter().map(PlanRef::Canonical).collect();
    }

    info!(
        quoted = quoted.len(),
        included = included.len(),
        "premium selection complete"
    );
    Selection { quoted, included }
}

/// A row qualifies when any premium-like column (header containing
/// "prem", case-insensitive) parses as a positive number, or - fallback -
/// holds text other than ""/"0"/"NA".
pub fn has_premium(grid: &SheetGrid, row: usize) -> bool {
    for header in grid.headers() {
        if !header.to_lowercase().contains("prem") {
            continue;
        }
        let Some(value) = grid.value(row, header) else {
            continue;
        };
        match value.parse::<f64>() {
            Ok(amount) if amount > 0.0 => return true,
            Ok(_) => {}
            Err(_) => {
                if !matches!(value.to_uppercase().as_str(), "" | "0" | "NA") {
                    return true;
                }
            }
        }
    }
    false
}

/// First non-empty label column, else the first non-empty cell of the row.
fn extract_label(grid: &SheetGrid, row: usize) -> Option<String> {
    for column in LABEL_COLUMNS {
        if let Some(value) = grid.value(row, column) {
            if !value.is_empty() {
                return Some(value.to_string());
            }
        }
    }
    grid.rows()
        .get(row)?
        .iter()
        .map(|c| c.trim())
        .find(|c| !c.is_empty())
        .map(str::to_string)
}

/// Tenure premiums, normalized for display: empty and "0" become blank.
fn premium_values(grid: &SheetGrid, row: usize) -> [String; 3] {
    let mut values: [String; 3] = Default::default();
    for (slot, column) in values.iter_mut().zip(PREMIUM_COLUMNS) {
        let raw = grid.value(row, column).unwrap_or_default();
        if raw != "0" {
            *slot = raw.to_string();
        }
    }
    values
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(headers: &[&str], rows: &[&[&str]]) -> SheetGrid {
        SheetGrid::new(
            headers.iter().map(|h| h.to_string()).collect(),
            rows.iter()
                .map(|r| r.iter().map(|c| c.to_string()).collect())
                .collect(),
        )
    }

    #[test]
    fn test_zero_and_na_premiums_are_excluded() {
        let premiums = grid(
            &["Plan Name", "1 Yr Premium", "2 Yr Premium"],
            &[
                &["HDFC ERGO", "0", ""],
                &["Care Supreme", "NA", "0"],
                &["Tata AIG", "", ""],
            ],
        );
        let selection = select(&premiums);
        assert!(selection.quoted.is_empty());
        // Empty scan defaults to the full registry.
        assert_eq!(selection.included.len(), registry::all_plans().len());
    }

    #[test]
    fn test_positive_premium_qualifies() {
        let premiums = grid(
            &["Plan Name", "1 Yr Premium"],
            &[&["HDFC ERGO Optima", "12500"], &["Care Supreme", "0"]],
        );
        let selection = select(&premiums);
        assert_eq!(selection.quoted.len(), 1);
        assert_eq!(selection.included.len(), 1);
        assert_eq!(selection.included[0].display_name(), "HDFC ERGO – Optima Secure");
    }

    #[test]
    fn test_textual_premium_qualifies_via_fallback() {
        let premiums = grid(
            &["Plan Name", "1 Yr Premium"],
            &[&["Tata AIG Medicare", "on request"]],
        );
        let selection = select(&premiums);
        assert_eq!(selection.quoted.len(), 1);
        assert_eq!(selection.included[0].display_name(), "Tata AIG – Medicare Select");
    }

    #[test]
    fn test_dedup_preserves_first_occurrence_order() {
        let premiums = grid(
            &["Plan Name", "1 Yr Premium"],
            &[
                &["Care Supreme 10L", "9000"],
                &["HDFC ERGO Optima", "12500"],
                &["care supreme 25L", "15000"],
            ],
        );
        let selection = select(&premiums);
        assert_eq!(selection.quoted.len(), 3);
        let names: Vec<&str> = selection.included.iter().map(|p| p.display_name()).collect();
        assert_eq!(names, vec!["Care Health – Supreme", "HDFC ERGO – Optima Secure"]);
    }

    #[test]
    fn test_unresolved_label_is_kept_raw() {
        let premiums = grid(
            &["Plan Name", "1 Yr Premium"],
            &[&["XYZ Insurance Unknown Plan", "9999"]],
        );
        let selection = select(&premiums);
        assert_eq!(selection.included.len(), 1);
        assert!(selection.included[0].record().is_none());
        assert_eq!(selection.included[0].display_name(), "XYZ Insurance Unknown Plan");
    }

    #[test]
    fn test_label_falls_back_to_first_non_empty_cell() {
        let premiums = grid(
            &["Notes", "Quote", "1 Yr Premium"],
            &[&["", "Niva Aspire", "8000"]],
        );
        let selection = select(&premiums);
        assert_eq!(selection.quoted[0].label, "Niva Aspire");
        assert_eq!(selection.included[0].display_name(), "Niva Bupa – Aspire Platinum");
    }

    #[test]
    fn test_premium_display_values_blank_out_zero() {
        let premiums = grid(
            &["Plan Name", "1 Yr Premium", "2 Yr Premium", "3 Yr Premium"],
            &[&["HDFC ERGO", "12500", "0", ""]],
        );
        let selection = select(&premiums);
        assert_eq!(selection.quoted[0].premiums, ["12500".to_string(), String::new(), String::new()]);
    }
}
