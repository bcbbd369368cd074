/// Data layer: core table types, loading, and filtering.
///
/// Architecture:
/// ```text
///      .csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader  │  parse file → Table
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Table   │  Vec<Row>, ordered column names
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter  │  select rows for one Target → new Table
///   └──────────┘
/// ```
pub mod filter;
pub mod loader;
pub mod model;
