//! Lightweight chart layer: handles owned by canvas slots, rendered as HTML/SVG.

mod color;
pub mod geometry;
mod handle;
mod view;

pub use color::hex_to_rgba;
pub use handle::{CanvasSlot, ChartConfig, ChartHandle, ChartKind, ChartOptions, Dataset};
pub use view::ChartCanvas;
