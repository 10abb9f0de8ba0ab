//! Rasterizes reconstructed cuboid wireframes onto frame images.

pub mod config;
pub mod draw;
pub mod error;

pub use config::{line_width_for, RenderConfig};
pub use draw::{draw_figures, render_shapes, RenderReport, ShapeFailure};
pub use error::RenderError;
