use std::collections::BTreeMap;

use serde::Serialize;

use crate::data::model::{Table, Value};
use crate::error::{Error, Result};

// ---------------------------------------------------------------------------
// Welford accumulator – one per biological sample
// ---------------------------------------------------------------------------

/// Running mean / sum-of-squared-deviations accumulator (Welford's method),
/// so aggregation stays a single linear pass over the rows.
#[derive(Debug, Clone, Default)]
struct CqAccumulator {
    n: usize,
    mean: f64,
    m2: f64,
}

impl CqAccumulator {
    fn push(&mut self, cq: f64) {
        self.n += 1;
        let delta = cq - self.mean;
        self.mean += delta / self.n as f64;
        self.m2 += delta * (cq - self.mean);
    }

    fn mean(&self) -> f64 {
        self.mean
    }

    /// Sample standard deviation (divisor n − 1). NaN for a single
    /// measurement: with one replicate there is no spread to estimate,
    /// and callers rely on NaN rather than an error here.
    fn std(&self) -> f64 {
        if self.n < 2 {
            return f64::NAN;
        }
        (self.m2 / (self.n - 1) as f64).sqrt()
    }
}

// ---------------------------------------------------------------------------
// Summary table
// ---------------------------------------------------------------------------

/// Per-sample Cq statistics for one biological sample.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRow {
    pub base_sample: String,
    pub mean_cq: f64,
    /// Sample standard deviation; NaN when `n_reps == 1`.
    pub std_cq: f64,
    pub n_reps: usize,
}

/// The aggregation result: one row per distinct `base_sample`, sorted by
/// sample name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SummaryTable {
    pub rows: Vec<SummaryRow>,
}

impl SummaryTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Look up the summary for one sample by name.
    pub fn row(&self, base_sample: &str) -> Option<&SummaryRow> {
        self.rows.iter().find(|r| r.base_sample == base_sample)
    }
}

// ---------------------------------------------------------------------------
// Aggregation
// ---------------------------------------------------------------------------

/// Collapse technical replicates: group rows by `base_sample` and compute
/// mean, sample standard deviation, and replicate count of `Cq` per group.
///
/// Grouping keys compare as exact strings; output rows are sorted by
/// `base_sample`. Rows whose `base_sample` cell is null are dropped from
/// the grouping. The input table is not modified.
///
/// Fails with [`Error::MissingColumn`] when `base_sample` or `Cq` is
/// absent, and with [`Error::NonNumeric`] when a `Cq` cell is not a number.
pub fn summarize_duplicates(table: &Table) -> Result<SummaryTable> {
    for col in ["base_sample", "Cq"] {
        if !table.has_column(col) {
            return Err(Error::MissingColumn(col.to_string()));
        }
    }

    // BTreeMap keeps groups sorted by sample name.
    let mut groups: BTreeMap<String, CqAccumulator> = BTreeMap::new();

    for row in &table.rows {
        let key = match row.get("base_sample") {
            Some(Value::Null) | None => continue,
            Some(v) => v.to_string(),
        };
        let cq = row
            .get("Cq")
            .and_then(Value::as_f64)
            .ok_or_else(|| Error::NonNumeric {
                column: "Cq".to_string(),
                value: row.get("Cq").map(Value::to_string).unwrap_or_default(),
            })?;
        groups.entry(key).or_default().push(cq);
    }

    let rows = groups
        .into_iter()
        .map(|(base_sample, acc)| SummaryRow {
            base_sample,
            mean_cq: acc.mean(),
            std_cq: acc.std(),
            n_reps: acc.n,
        })
        .collect();

    Ok(SummaryTable { rows })
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::data::model::Row;

    fn table_of(rows: &[(&str, f64)]) -> Table {
        let rows = rows
            .iter()
            .map(|(base, cq)| {
                Row::new(BTreeMap::from([
                    ("base_sample".to_string(), Value::String((*base).into())),
                    ("Cq".to_string(), Value::Float(*cq)),
                ]))
            })
            .collect();
        Table::new(vec!["base_sample".into(), "Cq".into()], rows)
    }

    #[test]
    fn computes_mean_and_count_per_group() {
        let summary = summarize_duplicates(&table_of(&[
            ("KC_sample1", 20.0),
            ("KC_sample1", 22.0),
            ("Control", 18.0),
        ]))
        .unwrap();

        let kc = summary.row("KC_sample1").unwrap();
        assert!((kc.mean_cq - 21.0).abs() < 1e-12);
        assert_eq!(kc.n_reps, 2);

        let control = summary.row("Control").unwrap();
        assert!((control.mean_cq - 18.0).abs() < 1e-12);
        assert_eq!(control.n_reps, 1);
    }

    #[test]
    fn std_is_sample_convention() {
        let summary =
            summarize_duplicates(&table_of(&[("A", 20.0), ("A", 22.0)])).unwrap();
        // divisor n − 1: sqrt(((20-21)^2 + (22-21)^2) / 1) = sqrt(2)
        let std = summary.row("A").unwrap().std_cq;
        assert!((std - 2.0_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn singleton_group_has_nan_std_not_an_error() {
        let summary = summarize_duplicates(&table_of(&[("Control", 18.0)])).unwrap();
        let control = summary.row("Control").unwrap();
        assert_eq!(control.n_reps, 1);
        assert!(control.std_cq.is_nan());
    }

    #[test]
    fn output_is_sorted_by_sample_name() {
        let summary = summarize_duplicates(&table_of(&[
            ("Zeta", 20.0),
            ("Alpha", 21.0),
            ("Mid", 22.0),
        ]))
        .unwrap();
        let order: Vec<&str> = summary.rows.iter().map(|r| r.base_sample.as_str()).collect();
        assert_eq!(order, vec!["Alpha", "Mid", "Zeta"]);
    }

    #[test]
    fn missing_columns_are_reported_by_name() {
        let no_base = Table::new(vec!["Cq".into()], Vec::new());
        assert_eq!(
            summarize_duplicates(&no_base).unwrap_err().missing_column(),
            Some("base_sample")
        );

        let no_cq = Table::new(vec!["base_sample".into()], Vec::new());
        assert_eq!(
            summarize_duplicates(&no_cq).unwrap_err().missing_column(),
            Some("Cq")
        );
    }

    #[test]
    fn non_numeric_cq_is_an_error() {
        let rows = vec![Row::new(BTreeMap::from([
            ("base_sample".to_string(), Value::String("A".into())),
            ("Cq".to_string(), Value::String("n/a".into())),
        ]))];
        let table = Table::new(vec!["base_sample".into(), "Cq".into()], rows);

        let err = summarize_duplicates(&table).unwrap_err();
        assert!(matches!(err, Error::NonNumeric { ref column, .. } if column == "Cq"));
    }

    #[test]
    fn integer_cq_cells_are_widened() {
        let rows = vec![Row::new(BTreeMap::from([
            ("base_sample".to_string(), Value::String("A".into())),
            ("Cq".to_string(), Value::Integer(21)),
        ]))];
        let table = Table::new(vec!["base_sample".into(), "Cq".into()], rows);

        let summary = summarize_duplicates(&table).unwrap();
        assert!((summary.row("A").unwrap().mean_cq - 21.0).abs() < 1e-12);
    }

    #[test]
    fn welford_matches_two_pass_result() {
        let values = [19.7, 20.1, 20.4, 19.9, 20.0, 20.3];
        let mut acc = CqAccumulator::default();
        for v in values {
            acc.push(v);
        }

        let mean: f64 = values.iter().sum::<f64>() / values.len() as f64;
        let var: f64 = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>()
            / (values.len() - 1) as f64;

        assert!((acc.mean() - mean).abs() < 1e-12);
        assert!((acc.std() - var.sqrt()).abs() < 1e-12);
    }
}
