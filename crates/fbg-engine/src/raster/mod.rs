//! Software rasterizer.
//!
//! Stateless routines that draw into a [`Framebuffer`](crate::surface::Framebuffer);
//! nothing here touches the onscreen region. `Surface` exposes the same
//! operations as methods.
//!
//! Bounds policy: addressable pixels are `[0, width) x [0, height)`.
//! `draw_pixel` reports anything else as `RasterError::OutOfBounds`; the
//! composite primitives drop off-surface pixels, rows and spans. Coordinates
//! are never clamped.
//!
//! Fill routines encode the color once, write one row, and replicate it with
//! bulk copies:
//! - `clear`: first scanline, then whole-scanline copies
//! - `fill_box`: top span, then span copies
//! - `fill_triangle`: one `ScanlinePattern` sliced per row

mod clear;
mod line;
mod pattern;
mod pixel;
mod rect;
mod triangle;

pub use clear::clear;
pub use line::{draw_line, draw_line_points};
pub use pixel::draw_pixel;
pub use rect::{draw_box, fill_box};
pub use triangle::{draw_triangle, fill_triangle, fill_triangle_points};
