//! fbg engine crate.
//!
//! Software rasterizer that draws into an offscreen buffer and presents whole
//! frames to a display region handed out by a [`device::SurfaceProvider`].
//!
//! ```rust,ignore
//! use fbg_engine::device::{DisplayInfo, MemoryDisplay};
//! use fbg_engine::paint::Color;
//! use fbg_engine::surface::Surface;
//!
//! let mut display = MemoryDisplay::new(DisplayInfo::xrgb8888(640, 480));
//! let mut surface = Surface::create(&mut display)?;
//! surface.clear(Color::black());
//! surface.fill_triangle(10, 10, 200, 40, 60, 300, Color::new(255, 128, 0));
//! surface.present()?;
//! surface.destroy();
//! ```

pub mod coords;
pub mod device;
pub mod error;
pub mod logging;
pub mod paint;
pub mod raster;
pub mod surface;
pub mod time;

pub use error::{RasterError, SurfaceError};
