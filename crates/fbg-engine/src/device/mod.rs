//! Display device boundary.
//!
//! This module is responsible for:
//! - the Surface Provider contract (`SurfaceProvider`, `DisplayRegion`)
//! - turning raw display metadata into a validated `PixelFormat`
//! - an in-process provider (`MemoryDisplay`) for headless use and tests

mod format;
mod info;
mod memory;
mod provider;

pub use format::{EncodedColor, PixelFormat};
pub use info::DisplayInfo;
pub use memory::{LostHandle, MemoryDisplay, MemoryRegion};
pub use provider::{Acquisition, DisplayRegion, SurfaceProvider};
