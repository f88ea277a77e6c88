//! QuoteForge core - turns a client roster + premium quotes workbook
//! into a multi-section plan comparison document.
//!
//! Pipeline: raw sheet rows -> label resolver -> inclusion selector ->
//! report composer -> rendered artifact. The plan registry is static
//! read-only data; everything per-invocation is owned by the call.

pub mod composer;
pub mod document;
pub mod error;
pub mod html;
pub mod logos;
pub mod registry;
pub mod resolver;
pub mod selector;
pub mod workbook;

pub use composer::{generate_from_bytes, generate_from_path, MAPPING_REQUIRED};
pub use error::ReportError;
pub use logos::LogoProvider;
pub use selector::{PlanRef, Selection};
pub use workbook::{ClientRow, QuoteWorkbook, SheetGrid};
