//! Error types surfaced by the engine.
//!
//! Nothing here is retried internally; every failure goes straight back to the
//! caller.

use std::io;

/// Failure while creating or presenting a [`Surface`](crate::surface::Surface).
#[derive(Debug, thiserror::Error)]
pub enum SurfaceError {
    /// The provider could not hand out the display, or handed out metadata
    /// that does not describe a usable surface.
    #[error("display acquisition failed: {0}")]
    Acquisition(#[source] anyhow::Error),

    /// The offscreen buffer could not be allocated. The onscreen region has
    /// already been released when this is returned.
    #[error("failed to allocate a {bytes} byte offscreen buffer")]
    Allocation { bytes: usize },

    /// The onscreen region rejected the frame copy.
    #[error("present failed: {0}")]
    Io(#[from] io::Error),
}

/// Failure of a single-pixel drawing call.
#[derive(Debug, Copy, Clone, Eq, PartialEq, thiserror::Error)]
pub enum RasterError {
    /// The coordinate lies outside `[0, width) x [0, height)`. Nothing was written.
    #[error("pixel ({x}, {y}) is outside the {width}x{height} surface")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: usize,
        height: usize,
    },
}
