//! qPCR replicate summarizer.
//!
//! Reduces raw qPCR instrument output to per-sample statistics:
//! * load a qPCR CSV (`Target`, `Sample`, `Cq` columns, case-sensitive)
//! * filter rows for a single target gene
//! * merge technical duplicates (e.g. `KC_sample1_1` and `KC_sample1_2`)
//! * compute mean Cq, sample standard deviation, and replicate count
//!
//! The whole flow is [`summarize_target_from_file`]; the individual stages
//! are exported for direct use.

pub mod data;
pub mod error;
pub mod normalize;
pub mod pipeline;
pub mod summary;

pub use data::filter::filter_by_target;
pub use data::loader::load;
pub use data::model::{Row, Table, Value};
pub use error::{Error, Result};
pub use normalize::{add_base_sample_column, clean_sample_name};
pub use pipeline::summarize_target_from_file;
pub use summary::{summarize_duplicates, SummaryRow, SummaryTable};
