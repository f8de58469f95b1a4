//! Signoff Render Library
//!
//! Surfaces that turn rasterized ink primitives into concrete output.

pub mod surface;
pub mod svg;

pub use surface::{replay, InkSurface};
pub use svg::SvgSurface;
