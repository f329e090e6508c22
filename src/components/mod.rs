//! UI components.

pub mod fll_table;
pub mod lineage_summary;
