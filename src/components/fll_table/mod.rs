//! Column headers and field tables of the lineage summary.

mod header;
mod table;

pub use header::{ColumnKind, FllHeader};
pub use table::FllTable;
