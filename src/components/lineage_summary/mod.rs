//! The lineage summary view and its link drawing engine.

mod component;
mod config;
mod debounce;
mod error;
pub mod geometry;
mod redraw;
mod surface;

pub use component::LineageSummary;
pub use config::{EndpointCenter, LinkPalette, SummaryConfig};
pub use debounce::{Debouncer, ResizeSubscription, Timer, WindowTimer};
pub use error::{DrawError, Result};
pub use redraw::{RedrawReport, draw_link, redraw, select_field};
pub use surface::{DomSurface, DrawSurface, OVERLAY_ID, Primitive, ROW_CLASS};
