//! Lineage data model and the context that supplies it to the summary view.

mod context;
mod types;

pub use context::{provide_lineage, use_lineage};
pub use types::{Field, FieldId, FieldSet, LineageSnapshot, Link};
