//! Rich-text document model consumed by the composer.
//!
//! Deliberately small: paragraphs with styled runs, and tables with
//! filled/bordered cells, optional inline images, and fixed column
//! widths. Rendering to a concrete format lives in [`crate::html`].

/// An ordered sequence of blocks.
#[derive(Debug, Default)]
pub struct Document {
    pub blocks: Vec<Block>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_paragraph(&mut self, paragraph: Paragraph) {
        self.blocks.push(Block::Paragraph(paragraph));
    }

    pub fn push_table(&mut self, table: Table) {
        self.blocks.push(Block::Table(table));
    }
}

#[derive(Debug)]
pub enum Block {
    Paragraph(Paragraph),
    Table(Table),
}

/// A paragraph of styled runs.
#[derive(Debug, Default)]
pub struct Paragraph {
    pub runs: Vec<Run>,
}

impl Paragraph {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            runs: vec![Run {
                text: text.into(),
                bold: false,
                italic: false,
            }],
        }
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            runs: vec![Run {
                text: text.into(),
                bold: true,
                italic: false,
            }],
        }
    }

    pub fn run(mut self, text: impl Into<String>, bold: bool, italic: bool) -> Self {
        self.runs.push(Run {
            text: text.into(),
            bold,
            italic,
        });
        self
    }
}

#[derive(Debug)]
pub struct Run {
    pub text: String,
    pub bold: bool,
    pub italic: bool,
}

/// A bordered table. Column widths are pixels; when absent the renderer
/// auto-sizes.
#[derive(Debug, Default)]
pub struct Table {
    pub rows: Vec<TableRow>,
    pub col_widths: Vec<u32>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_row(&mut self, cells: Vec<Cell>) {
        self.rows.push(TableRow { cells });
    }

    /// Header row: every cell filled and white-bold.
    pub fn push_header_row(&mut self, fill: &str, titles: &[&str]) {
        let cells = titles.iter().map(|t| Cell::header(*t, fill)).collect();
        self.rows.push(TableRow { cells });
    }
}

#[derive(Debug)]
pub struct TableRow {
    pub cells: Vec<Cell>,
}

/// A table cell: optional fill, optional inline image, text lines.
#[derive(Debug, Default)]
pub struct Cell {
    pub fill: Option<String>,
    /// White bold text on a dark fill (header styling).
    pub white_bold: bool,
    pub image: Option<InlineImage>,
    pub lines: Vec<CellText>,
    pub centered: bool,
}

impl Cell {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self {
            lines: vec![CellText {
                text: text.into(),
                bold: false,
            }],
            ..Self::default()
        }
    }

    pub fn header(text: impl Into<String>, fill: &str) -> Self {
        Self {
            fill: Some(fill.to_string()),
            white_bold: true,
            lines: vec![CellText {
                text: text.into(),
                bold: true,
            }],
            ..Self::default()
        }
    }

    pub fn with_fill(mut self, fill: &str) -> Self {
        self.fill = Some(fill.to_string());
        self
    }

    pub fn with_image(mut self, image: Option<InlineImage>) -> Self {
        self.image = image;
        self
    }

    pub fn centered(mut self) -> Self {
        self.centered = true;
        self
    }

    pub fn add_line(mut self, text: impl Into<String>, bold: bool) -> Self {
        self.lines.push(CellText {
            text: text.into(),
            bold,
        });
        self
    }
}

#[derive(Debug)]
pub struct CellText {
    pub text: String,
    pub bold: bool,
}

/// Image bytes plus their MIME type, ready for embedding.
#[derive(Debug, Clone)]
pub struct InlineImage {
    pub bytes: Vec<u8>,
    pub mime: &'static str,
}
