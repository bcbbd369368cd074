use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

// ---------------------------------------------------------------------------
// Value – a single cell of the table
// ---------------------------------------------------------------------------

/// A dynamically-typed cell value mirroring common CSV dtypes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    String(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    /// Empty cell.
    Null,
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => write!(f, "{s}"),
            Value::Integer(i) => write!(f, "{i}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Null => write!(f, "<null>"),
        }
    }
}

impl Value {
    /// Interpret the cell as an `f64` measurement, widening integers.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(v) => Some(*v),
            Value::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Interpret the cell as text. Only genuine string cells qualify;
    /// a cell that parsed as a number is not silently stringified.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Row – one record of the table
// ---------------------------------------------------------------------------

/// A single table record: column name → cell value. Read-only after load.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    cells: BTreeMap<String, Value>,
}

impl Row {
    pub fn new(cells: BTreeMap<String, Value>) -> Self {
        Row { cells }
    }

    /// Cell lookup by column name.
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.cells.get(column)
    }

    /// A copy of this row extended with one derived cell.
    pub fn with_cell(&self, column: &str, value: Value) -> Row {
        let mut cells = self.cells.clone();
        cells.insert(column.to_string(), value);
        Row { cells }
    }
}

// ---------------------------------------------------------------------------
// Table – the complete loaded dataset
// ---------------------------------------------------------------------------

/// An ordered sequence of rows with a fixed, ordered set of column names.
///
/// Constructed once per load; every pipeline step that changes content
/// returns a fresh `Table` and leaves its input untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    /// Column names in file order (derived columns appended at the end).
    pub columns: Vec<String>,
    /// All records, in file order.
    pub rows: Vec<Row>,
}

impl Table {
    pub fn new(columns: Vec<String>, rows: Vec<Row>) -> Self {
        Table { columns, rows }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Whether a column of this name exists (exact, case-sensitive).
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn as_f64_widens_integers() {
        assert_eq!(Value::Float(20.5).as_f64(), Some(20.5));
        assert_eq!(Value::Integer(21).as_f64(), Some(21.0));
        assert_eq!(Value::String("21".into()).as_f64(), None);
        assert_eq!(Value::Null.as_f64(), None);
    }

    #[test]
    fn as_str_rejects_non_string_cells() {
        assert_eq!(Value::String("Actb".into()).as_str(), Some("Actb"));
        assert_eq!(Value::Integer(5).as_str(), None);
    }

    #[test]
    fn with_cell_leaves_original_row_intact() {
        let row = Row::new(BTreeMap::from([(
            "Sample".to_string(),
            Value::String("KC_sample1_1".into()),
        )]));
        let extended = row.with_cell("base_sample", Value::String("KC_sample1".into()));

        assert!(row.get("base_sample").is_none());
        assert_eq!(
            extended.get("base_sample"),
            Some(&Value::String("KC_sample1".into()))
        );
    }
}
