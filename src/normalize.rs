use crate::data::model::{Table, Value};
use crate::error::{Error, Result};

// ---------------------------------------------------------------------------
// Sample-name normalization
// ---------------------------------------------------------------------------

/// Remove the technical-replicate suffix from a sample name.
///
/// Strips exactly one trailing `_<digits>` segment; a name without such a
/// suffix comes back unchanged. Only the final segment is removed, so
/// `"A_1_2"` becomes `"A_1"`, not `"A"`.
///
/// ```
/// use qpcr_analyzer::clean_sample_name;
///
/// assert_eq!(clean_sample_name("KC_sample1_1"), "KC_sample1");
/// assert_eq!(clean_sample_name("Control"), "Control");
/// assert_eq!(clean_sample_name("X_12"), "X");
/// ```
pub fn clean_sample_name(name: &str) -> String {
    let digits = name
        .chars()
        .rev()
        .take_while(|c| c.is_ascii_digit())
        .count();
    if digits > 0 {
        // ASCII digits are one byte each, so this slices on a char boundary.
        let run_start = name.len() - digits;
        if name[..run_start].ends_with('_') {
            return name[..run_start - 1].to_string();
        }
    }
    name.to_string()
}

// ---------------------------------------------------------------------------
// Table-level wrapper
// ---------------------------------------------------------------------------

/// Return a copy of `table` with a derived `base_sample` column holding the
/// normalized name of each row's `Sample` cell.
///
/// Fails with [`Error::MissingColumn`] when the table has no `Sample`
/// column. Non-string `Sample` cells are normalized via their textual form.
pub fn add_base_sample_column(table: &Table) -> Result<Table> {
    if !table.has_column("Sample") {
        return Err(Error::MissingColumn("Sample".to_string()));
    }

    let mut columns = table.columns.clone();
    if !table.has_column("base_sample") {
        columns.push("base_sample".to_string());
    }

    let rows = table
        .rows
        .iter()
        .map(|row| {
            let base = match row.get("Sample") {
                Some(Value::String(s)) => Value::String(clean_sample_name(s)),
                Some(Value::Null) | None => Value::Null,
                Some(other) => Value::String(clean_sample_name(&other.to_string())),
            };
            row.with_cell("base_sample", base)
        })
        .collect();

    Ok(Table::new(columns, rows))
}
