//! Integer pixel geometry.
//!
//! Canonical space:
//! - Device pixels
//! - Origin top-left
//! - +X right, +Y down

mod point;
mod rect;

pub use point::Point;
pub use rect::Rect;
