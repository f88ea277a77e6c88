//! Report composition.
//!
//! Takes the client roster, the premium selection and the logo provider
//! and deterministically assembles the document: header block, client
//! table, premium table, feature matrix, advisory table, advisor note.
//! Section order and cell content are fixed; only the inclusion list
//! varies between reports.

use std::path::{Path, PathBuf};

use chrono::Local;
use tracing::info;

use crate::document::{Cell, Document, Paragraph, Table};
use crate::error::ReportError;
use crate::html;
use crate::logos::LogoProvider;
use crate::registry::{self, FEATURES, HIGHLIGHTED_FEATURE};
use crate::resolver;
use crate::selector::{self, PlanRef, Selection};
use crate::workbook::{ClientRow, QuoteWorkbook};

/// Placeholder for feature cells of plans that never resolved.
pub const MAPPING_REQUIRED: &str = "<Mapping required>";

const HEADER_FILL: &str = "00A36C";
const FEATURE_LABEL_FILL: &str = "EAF6EA";
const HIGHLIGHT_FILL: &str = "FFF68F";

/// Approximate pixel widths (1.0" = 96px).
const FEATURE_COL_WIDTH: u32 = 211;
const PLAN_COL_WIDTH: u32 = 134;
const ADVISORY_PLAN_WIDTH: u32 = 192;
const ADVISORY_TEXT_WIDTH: u32 = 384;

/// Generate a report from a workbook on disk. When `dest` is `None` the
/// output name is derived from the first client's name. Returns the path
/// actually written.
pub fn generate_from_path(
    input: &Path,
    dest: Option<&Path>,
    logo_dir: &Path,
) -> Result<PathBuf, ReportError> {
    let workbook = QuoteWorkbook::load(input)?;
    generate(&workbook, dest, logo_dir)
}

/// Generate a report from uploaded workbook bytes.
pub fn generate_from_bytes(
    bytes: &[u8],
    dest: Option<&Path>,
    logo_dir: &Path,
) -> Result<PathBuf, ReportError> {
    let workbook = QuoteWorkbook::from_bytes(bytes)?;
    generate(&workbook, dest, logo_dir)
}

fn generate(
    workbook: &QuoteWorkbook,
    dest: Option<&Path>,
    logo_dir: &Path,
) -> Result<PathBuf, ReportError> {
    let clients = workbook.client_rows();
    let selection = selector::select(&workbook.premiums);
    let logos = LogoProvider::new(logo_dir);

    let document = compose(&clients, &selection, &logos);
    let dest = match dest {
        Some(path) => path.to_path_buf(),
        None => PathBuf::from(default_output_name(&clients)),
    };
    write_artifact(&document, &dest)?;

    info!(
        clients = clients.len(),
        plans = selection.included.len(),
        dest = %dest.display(),
        "report generated"
    );
    Ok(dest)
}

/// Render and persist the artifact. Parent directories are created as
/// needed; a write failure is fatal and leaves no partial artifact
/// behind.
pub fn write_artifact(document: &Document, dest: &Path) -> Result<(), ReportError> {
    if let Some(parent) = dest.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let rendered = html::render(document);
    std::fs::write(dest, rendered)?;
    Ok(())
}

/// Default artifact name, derived from the first client's name sanitized
/// to alphanumerics, spaces and underscores (spaces become underscores).
pub fn default_output_name(clients: &[ClientRow]) -> String {
    let client_name = clients
        .first()
        .map(|c| c.name.as_str())
        .filter(|n| !n.trim().is_empty())
        .unwrap_or("Client");
    let safe: String = client_name
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == ' ' || *c == '_')
        .collect();
    format!("Health_Quote_{}.html", safe.trim().replace(' ', "_"))
}

/// Assemble the full document. Pure: no I/O besides logo reads.
pub fn compose(clients: &[ClientRow], selection: &Selection, logos: &LogoProvider) -> Document {
    let mut document = Document::new();

    document.push_paragraph(Paragraph::bold("🏥 Health Insurance Quote"));
    document.push_paragraph(Paragraph::plain(format!(
        "Prepared by your trusted advisor – {}",
        Local::now().format("%d-%m-%Y")
    )));

    document.push_paragraph(Paragraph::bold("👤 Client Details"));
    document.push_table(client_table(clients));

    document.push_paragraph(Paragraph::bold("💰 Premium Summary"));
    document.push_table(premium_table(selection, logos));

    document.push_paragraph(Paragraph::bold("🩺 Feature Comparison (Selected Insurers)"));
    document.push_table(feature_matrix(&selection.included, logos));

    document.push_paragraph(Paragraph::bold("💬 Advisor’s Recommendation"));
    document.push_table(advisory_table(&selection.included, logos));

    document.push_paragraph(Paragraph::default().run("Advisor Note: ", true, false).run(
        "Choose the plan matching your family's long-term protection, maternity and travel \
         needs. Discuss OPD and worldwide rider options before purchase.",
        false,
        true,
    ));

    document
}

/// One row per insured member; zero members still renders one empty row.
fn client_table(clients: &[ClientRow]) -> Table {
    let mut table = Table::new();
    table.push_header_row(
        HEADER_FILL,
        &["Member No.", "Name", "Relation", "DOB", "Age", "City", "Sum Assured"],
    );

    if clients.is_empty() {
        table.push_row((0..7).map(|_| Cell::empty()).collect());
        return table;
    }

    for (i, client) in clients.iter().enumerate() {
        table.push_row(vec![
            Cell::text((i + 1).to_string()),
            Cell::text(&client.name),
            Cell::text(&client.relation),
            Cell::text(&client.dob),
            Cell::text(&client.age),
            Cell::text(&client.city),
            Cell::text(&client.sum_assured),
        ]);
    }
    table
}

/// One row per qualifying premium row, in sheet order. The label
/// cell carries the raw label (plus logo when the label resolves).
fn premium_table(selection: &Selection, logos: &LogoProvider) -> Table {
    let mut table = Table::new();
    table.push_header_row(
        HEADER_FILL,
        &["Insurer / Plan Name", "1 Year Premium", "2 Year Premium", "3 Year Premium"],
    );

    for quoted in &selection.quoted {
        let logo = resolver::resolve(&quoted.label)
            .map(PlanRef::Canonical)
            .and_then(|plan| logos.load(&plan));
        let label_cell = Cell::empty()
            .with_image(logo)
            .add_line(&quoted.label, true)
            .centered();

        let mut cells = vec![label_cell];
        cells.extend(quoted.premiums.iter().map(|p| Cell::text(p.as_str())));
        table.push_row(cells);
    }
    table
}

/// One header row (plan name plus optional logo) + exactly
/// `FEATURES.len()` data rows, whatever the inclusion list size.
/// Unresolved plans get the mapping-required sentinel in every feature
/// cell.
fn feature_matrix(included: &[PlanRef], logos: &LogoProvider) -> Table {
    let mut table = Table::new();
    table.col_widths = std::iter::once(FEATURE_COL_WIDTH)
        .chain(included.iter().map(|_| PLAN_COL_WIDTH))
        .collect();

    let mut header_row = vec![Cell::header("Feature", HEADER_FILL)];
    header_row.extend(included.iter().map(|plan| {
        Cell::header(plan.display_name(), HEADER_FILL)
            .with_image(logos.load(plan))
            .centered()
    }));
    table.push_row(header_row);

    for feature in FEATURES {
        let highlight = feature.name == HIGHLIGHTED_FEATURE;
        let label_fill = if highlight { HIGHLIGHT_FILL } else { FEATURE_LABEL_FILL };

        let mut row = vec![Cell::empty().add_line(feature.label(), true).with_fill(label_fill)];
        for plan in included {
            let text = match plan.record() {
                Some(record) => record.feature(feature.name).unwrap_or_default().to_string(),
                None => MAPPING_REQUIRED.to_string(),
            };
            let mut cell = Cell::text(text);
            if highlight {
                cell = cell.with_fill(HIGHLIGHT_FILL);
            }
            row.push(cell);
        }
        table.push_row(row);
    }
    table
}

/// One row per included plan with its curated highlights, or a pointer
/// back to the feature table when none are curated.
fn advisory_table(included: &[PlanRef], logos: &LogoProvider) -> Table {
    let mut table = Table::new();
    table.col_widths = vec![ADVISORY_PLAN_WIDTH, ADVISORY_TEXT_WIDTH];
    table.push_header_row(HEADER_FILL, &["Plan", "Why choose this plan (quick points)"]);

    for plan in included {
        let plan_cell = Cell::empty()
            .with_image(logos.load(plan))
            .add_line(plan.display_name(), true);

        let highlights = plan.record().and_then(|r| registry::highlights(r.name));
        let why_cell = match highlights {
            Some(points) => {
                let mut cell = Cell::empty();
                for point in points {
                    cell = cell.add_line(format!("• {point}"), false);
                }
                cell
            }
            None => Cell::text("See feature table above."),
        };

        table.push_row(vec![plan_cell, why_cell]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Block;
    use crate::workbook::SheetGrid;

    fn logos() -> LogoProvider {
        LogoProvider::new("/nonexistent/logos")
    }

    fn selection_for(labels_and_premiums: &[(&str, &str)]) -> Selection {
        let rows: Vec<Vec<String>> = labels_and_premiums
            .iter()
            .map(|(label, premium)| vec![label.to_string(), premium.to_string()])
            .collect();
        let grid = SheetGrid::new(vec!["Plan Name".into(), "1 Yr Premium".into()], rows);
        selector::select(&grid)
    }

    fn tables(document: &Document) -> Vec<&Table> {
        document
            .blocks
            .iter()
            .filter_map(|b| match b {
                Block::Table(t) => Some(t),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_document_has_four_tables_in_order() {
        let selection = selection_for(&[("HDFC ERGO", "12500")]);
        let document = compose(&[], &selection, &logos());
        assert_eq!(tables(&document).len(), 4);
    }

    #[test]
    fn test_client_table_with_zero_rows_has_one_empty_data_row() {
        let table = client_table(&[]);
        assert_eq!(table.rows.len(), 2);
        let data_row = &table.rows[1];
        assert_eq!(data_row.cells.len(), 7);
        assert!(data_row.cells.iter().all(|c| c.lines.is_empty()));
    }

    #[test]
    fn test_feature_matrix_row_count_is_fixed() {
        for selection in [
            selection_for(&[("HDFC ERGO", "12500")]),
            selection_for(&[("HDFC ERGO", "12500"), ("Care Supreme", "9000")]),
            selection_for(&[]),
        ] {
            let matrix = feature_matrix(&selection.included, &logos());
            // One header row plus one row per feature.
            assert_eq!(matrix.rows.len(), 1 + FEATURES.len());
            for row in &matrix.rows {
                assert_eq!(row.cells.len(), 1 + selection.included.len());
            }
        }
    }

    #[test]
    fn test_empty_selection_defaults_matrix_to_full_registry() {
        let selection = selection_for(&[]);
        let matrix = feature_matrix(&selection.included, &logos());
        assert_eq!(
            matrix.rows[0].cells.len(),
            1 + registry::all_plans().len()
        );
    }

    #[test]
    fn test_unmapped_plan_column_is_all_sentinel() {
        let selection = selection_for(&[("XYZ Insurance Unknown Plan", "9999")]);
        let matrix = feature_matrix(&selection.included, &logos());

        assert_eq!(
            matrix.rows[0].cells[1].lines[0].text,
            "XYZ Insurance Unknown Plan"
        );
        for row in &matrix.rows[1..] {
            assert_eq!(row.cells[1].lines[0].text, MAPPING_REQUIRED);
        }
    }

    #[test]
    fn test_unique_features_row_is_highlighted() {
        let selection = selection_for(&[("HDFC ERGO", "12500")]);
        let matrix = feature_matrix(&selection.included, &logos());

        let unique_row = matrix
            .rows
            .iter()
            .find(|r| r.cells[0].lines.first().is_some_and(|l| l.text.contains("Unique Features")))
            .unwrap();
        for cell in &unique_row.cells {
            assert_eq!(cell.fill.as_deref(), Some(HIGHLIGHT_FILL));
        }

        let other_row = matrix
            .rows
            .iter()
            .find(|r| r.cells[0].lines.first().is_some_and(|l| l.text.contains("Room Rent")))
            .unwrap();
        assert_eq!(other_row.cells[0].fill.as_deref(), Some(FEATURE_LABEL_FILL));
        assert_eq!(other_row.cells[1].fill, None);
    }

    #[test]
    fn test_advisory_round_trip_for_hdfc_label() {
        let selection = selection_for(&[("HDFC ERGO Optima Secure 10L", "12500")]);
        let advisory = advisory_table(&selection.included, &logos());

        assert_eq!(advisory.rows.len(), 2);
        let row = &advisory.rows[1];
        assert_eq!(row.cells[0].lines[0].text, "HDFC ERGO – Optima Secure");
        let bullets: Vec<&str> = row.cells[1].lines.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(
            bullets,
            vec!["• 2X cover from Day 1", "• Health check-up included"]
        );
    }

    #[test]
    fn test_advisory_fallback_line_for_unmapped_plan() {
        let selection = selection_for(&[("XYZ Insurance Unknown Plan", "9999")]);
        let advisory = advisory_table(&selection.included, &logos());
        assert_eq!(advisory.rows[1].cells[1].lines[0].text, "See feature table above.");
    }

    #[test]
    fn test_premium_cells_never_render_zero() {
        let grid = SheetGrid::new(
            vec![
                "Plan Name".into(),
                "1 Yr Premium".into(),
                "2 Yr Premium".into(),
                "3 Yr Premium".into(),
            ],
            vec![vec!["HDFC ERGO".into(), "12500".into(), "0".into(), "".into()]],
        );
        let selection = selector::select(&grid);
        let table = premium_table(&selection, &logos());

        let row = &table.rows[1];
        assert_eq!(row.cells[1].lines[0].text, "12500");
        assert_eq!(row.cells[2].lines[0].text, "");
        assert_eq!(row.cells[3].lines[0].text, "");
    }

    #[test]
    fn test_default_output_name_sanitizes_client_name() {
        let client = ClientRow {
            name: "Ravi Kumar (Sr.)".into(),
            ..ClientRow::default()
        };
        assert_eq!(default_output_name(&[client]), "Health_Quote_Ravi_Kumar_Sr.html");
        assert_eq!(default_output_name(&[]), "Health_Quote_Client.html");
    }
}
