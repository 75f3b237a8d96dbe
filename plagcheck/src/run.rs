use std::path::PathBuf;

use text_similarity::{format_percentage, similarity};

use crate::error::{Role, RunError};
use crate::files::{ensure_exists, read_document, write_result};
use crate::report::Report;

/// Paths taking part in one comparison.
#[derive(Debug, Clone)]
pub struct Documents {
    pub original: PathBuf,
    pub compared: PathBuf,
    pub output: PathBuf,
}

/// Compares both documents and writes the formatted percentage to the output path.
///
/// Both inputs are checked before anything is read, and nothing is written unless
/// both were read successfully.
pub fn run(documents: &Documents, report: &mut impl Report) -> Result<f64, RunError> {
    ensure_exists(Role::Original, &documents.original)?;
    ensure_exists(Role::Compared, &documents.compared)?;

    let original = read_document(&documents.original)?;
    let compared = read_document(&documents.compared)?;
    report.debug(&format!(
        "Comparing {} ({} chars) with {} ({} chars)",
        documents.original.display(),
        original.chars().count(),
        documents.compared.display(),
        compared.chars().count(),
    ));

    let score = similarity(&original, &compared);
    let formatted = format_percentage(score);
    write_result(&documents.output, &formatted)?;

    report.info(&format!("Similarity {formatted} written to {}", documents.output.display()));
    Ok(score)
}
