pub mod color;
pub mod cuboid;
pub mod error;
pub mod figure;
pub mod frames;
pub mod geom;
pub mod model;
pub mod polyline;

pub use error::{Error, Result};
