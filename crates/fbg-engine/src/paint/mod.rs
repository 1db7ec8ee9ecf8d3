//! Paint model.
//!
//! The rasterizer only knows solid 8-bit RGB colors; how the three channels
//! land in memory is decided by the surface's `PixelFormat`.

mod color;

pub use color::Color;
