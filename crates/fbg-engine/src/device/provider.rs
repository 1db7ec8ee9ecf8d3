use std::io;

use anyhow::Result;

use super::DisplayInfo;

/// Writable display memory handed out by a [`SurfaceProvider`].
///
/// The engine never reads from a region; it only overwrites it wholesale
/// when a frame is presented.
pub trait DisplayRegion {
    /// Mapped length in bytes.
    fn len(&self) -> usize;

    /// Mutable view of the mapped bytes.
    ///
    /// Fails once the mapping has become invalid (device lost, mode changed
    /// behind our back, ...).
    fn bytes_mut(&mut self) -> io::Result<&mut [u8]>;
}

/// Result of a successful acquisition: metadata plus the writable region.
#[derive(Debug)]
pub struct Acquisition<R> {
    pub info: DisplayInfo,
    pub region: R,
}

/// External capability that owns a display device.
///
/// Contract:
/// - `acquire` grants exclusive write access (switching the device into
///   graphics presentation if it needs to)
/// - every region returned by `acquire` is passed back to `release` exactly
///   once, which undoes whatever `acquire` did
pub trait SurfaceProvider {
    type Region: DisplayRegion;

    fn acquire(&mut self) -> Result<Acquisition<Self::Region>>;

    fn release(&mut self, region: Self::Region);
}
