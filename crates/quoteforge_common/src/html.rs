//! Standalone-HTML renderer for [`Document`].
//!
//! Inline styles only (the artifact is opened as a single file), images
//! embedded as base64 data URIs, single-line black borders on every
//! table, per the document's styling flags.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;

use crate::document::{Block, Cell, Document, Paragraph, Table};

const BODY_STYLE: &str = "font-family: Calibri, Arial, sans-serif; font-size: 14px; margin: 24px;";
const TABLE_STYLE: &str = "border-collapse: collapse; margin: 8px 0;";
const CELL_STYLE: &str = "border: 1px solid #000; padding: 4px 6px; vertical-align: top;";

/// Render the document to a complete HTML page.
pub fn render(document: &Document) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    out.push_str("<title>Health Insurance Quote</title>\n</head>\n");
    out.push_str(&format!("<body style=\"{BODY_STYLE}\">\n"));

    for block in &document.blocks {
        match block {
            Block::Paragraph(p) => render_paragraph(&mut out, p),
            Block::Table(t) => render_table(&mut out, t),
        }
    }

    out.push_str("</body>\n</html>\n");
    out
}

fn render_paragraph(out: &mut String, paragraph: &Paragraph) {
    out.push_str("<p>");
    for run in &paragraph.runs {
        let mut text = escape(&run.text);
        if run.italic {
            text = format!("<em>{text}</em>");
        }
        if run.bold {
            text = format!("<strong>{text}</strong>");
        }
        out.push_str(&text);
    }
    out.push_str("</p>\n");
}

fn render_table(out: &mut String, table: &Table) {
    out.push_str(&format!("<table style=\"{TABLE_STYLE}\">\n"));
    if !table.col_widths.is_empty() {
        out.push_str("<colgroup>");
        for width in &table.col_widths {
            out.push_str(&format!("<col style=\"width: {width}px;\">"));
        }
        out.push_str("</colgroup>\n");
    }

    for row in &table.rows {
        out.push_str("<tr>");
        for cell in &row.cells {
            render_cell(out, cell);
        }
        out.push_str("</tr>\n");
    }
    out.push_str("</table>\n");
}

fn render_cell(out: &mut String, cell: &Cell) {
    let mut style = String::from(CELL_STYLE);
    if let Some(fill) = &cell.fill {
        style.push_str(&format!(" background-color: #{fill};"));
    }
    if cell.white_bold {
        style.push_str(" color: #fff; font-weight: bold;");
    }
    if cell.centered {
        style.push_str(" text-align: center;");
    }
    out.push_str(&format!("<td style=\"{style}\">"));

    if let Some(image) = &cell.image {
        let encoded = BASE64.encode(&image.bytes);
        out.push_str(&format!(
            "<div><img src=\"data:{};base64,{}\" style=\"width: 96px;\" alt=\"\"></div>",
            image.mime, encoded
        ));
    }
    for line in &cell.lines {
        let text = escape(&line.text);
        if line.bold && !cell.white_bold {
            out.push_str(&format!("<div><strong>{text}</strong></div>"));
        } else {
            out.push_str(&format!("<div>{text}</div>"));
        }
    }

    out.push_str("</td>");
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
