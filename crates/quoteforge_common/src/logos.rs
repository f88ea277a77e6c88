//! Insurer logo lookup.
//!
//! Logos live as loose files in a configured directory, named by slug.
//! Absence is never an error - the report simply renders without the
//! image.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::document::InlineImage;
use crate::selector::PlanRef;

const LOGO_EXTENSIONS: &[(&str, &str)] = &[
    ("png", "image/png"),
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("webp", "image/webp"),
];

/// Probes a directory for plan logos.
#[derive(Debug, Clone)]
pub struct LogoProvider {
    dir: PathBuf,
}

impl LogoProvider {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// First existing file matching the plan's slug, across the known
    /// image extensions.
    pub fn find(&self, plan: &PlanRef) -> Option<PathBuf> {
        let slug = match plan {
            PlanRef::Canonical(record) => record.logo_slug.to_string(),
            PlanRef::Raw(label) => slugify(label),
        };
        for (ext, _) in LOGO_EXTENSIONS {
            let candidate = self.dir.join(format!("{slug}.{ext}"));
            if candidate.exists() {
                return Some(candidate);
            }
        }
        None
    }

    /// Load the logo ready for embedding. Any read failure degrades to
    /// `None`; a broken logo file must never abort report generation.
    pub fn load(&self, plan: &PlanRef) -> Option<InlineImage> {
        let path = self.find(plan)?;
        match std::fs::read(&path) {
            Ok(bytes) => Some(InlineImage {
                bytes,
                mime: mime_for(&path),
            }),
            Err(e) => {
                debug!("logo {} unreadable, skipping: {}", path.display(), e);
                None
            }
        }
    }
}

fn mime_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default()
        .to_lowercase();
    LOGO_EXTENSIONS
        .iter()
        .find(|(e, _)| *e == ext)
        .map(|(_, mime)| *mime)
        .unwrap_or("application/octet-stream")
}

/// Lower-case, non-alphanumerics to underscores - the fallback slug for
/// labels that never resolved to a registry entry.
fn slugify(label: &str) -> String {
    label
        .chars()
        .map(|c| if c.is_alphanumeric() { c.to_ascii_lowercase() } else { '_' })
        .collect()
}
