use std::path::Path;

use crate::data::filter::filter_by_target;
use crate::data::loader::load;
use crate::error::{Error, Result};
use crate::normalize::add_base_sample_column;
use crate::summary::{summarize_duplicates, SummaryTable};

// ---------------------------------------------------------------------------
// Pipeline orchestrator
// ---------------------------------------------------------------------------

/// Load a qPCR CSV and return replicate-collapsed Cq statistics for one
/// target.
///
/// Stages run strictly in sequence: load → required-column check
/// (`Target`, `Sample`, `Cq`, in that order) → target filter →
/// normalization → aggregation. A target with no matching rows
/// short-circuits to an empty [`SummaryTable`]; that is a valid result,
/// not an error, so callers should check `is_empty()` rather than match
/// on `Err`.
///
/// This is the main entry point; the stage functions stay public for
/// unit-level use and composition.
pub fn summarize_target_from_file(path: &Path, target: &str) -> Result<SummaryTable> {
    let table = load(path)?;

    // Validate required columns early for clearer errors.
    for col in ["Target", "Sample", "Cq"] {
        if !table.has_column(col) {
            return Err(Error::MissingColumn(col.to_string()));
        }
    }

    let filtered = filter_by_target(&table, target);
    log::info!(
        "target '{target}': {} of {} rows selected",
        filtered.len(),
        table.len()
    );
    if filtered.is_empty() {
        return Ok(SummaryTable::default());
    }

    let with_base = add_base_sample_column(&filtered)?;
    summarize_duplicates(&with_base)
}
