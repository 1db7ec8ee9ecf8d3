use std::cell::Cell;
use std::io;
use std::rc::Rc;

use anyhow::{bail, Context, Result};

use super::{Acquisition, DisplayInfo, DisplayRegion, SurfaceProvider};

/// Heap-backed display.
///
/// Behaves like a real device from the engine's point of view: the video
/// memory is handed out on `acquire`, taken back on `release`, and can be
/// made to fail either step. Useful headless and in tests.
#[derive(Debug)]
pub struct MemoryDisplay {
    info: DisplayInfo,

    /// Video memory. `None` while a surface holds it.
    vram: Option<Vec<u8>>,

    lost: Rc<Cell<bool>>,
    fail_next_acquire: Option<String>,

    acquire_count: usize,
    release_count: usize,
}

impl MemoryDisplay {
    /// Creates a display whose video memory matches `info` and starts zeroed.
    ///
    /// `info` is reported verbatim; invalid metadata surfaces at
    /// `Surface::create` just like it would with a misbehaving driver.
    pub fn new(info: DisplayInfo) -> Self {
        let len = info.buffer_len().unwrap_or(0);
        Self::with_memory(info, vec![0; len])
    }

    /// Creates a display backed by caller-supplied video memory, which may be
    /// shorter or longer than `info` describes.
    pub fn with_memory(info: DisplayInfo, vram: Vec<u8>) -> Self {
        Self {
            info,
            vram: Some(vram),
            lost: Rc::new(Cell::new(false)),
            fail_next_acquire: None,
            acquire_count: 0,
            release_count: 0,
        }
    }

    #[inline]
    pub fn info(&self) -> DisplayInfo {
        self.info
    }

    /// Makes the next `acquire` fail with `reason`.
    pub fn fail_next_acquire(&mut self, reason: impl Into<String>) {
        self.fail_next_acquire = Some(reason.into());
    }

    /// Handle that can invalidate the mapping while a surface holds it.
    pub fn lost_handle(&self) -> LostHandle {
        LostHandle(Rc::clone(&self.lost))
    }

    /// Video memory as last presented. `None` while acquired.
    pub fn video_memory(&self) -> Option<&[u8]> {
        self.vram.as_deref()
    }

    #[inline]
    pub fn is_acquired(&self) -> bool {
        self.vram.is_none()
    }

    #[inline]
    pub fn acquire_count(&self) -> usize {
        self.acquire_count
    }

    #[inline]
    pub fn release_count(&self) -> usize {
        self.release_count
    }
}

impl SurfaceProvider for MemoryDisplay {
    type Region = MemoryRegion;

    fn acquire(&mut self) -> Result<Acquisition<MemoryRegion>> {
        if let Some(reason) = self.fail_next_acquire.take() {
            bail!("memory display refused acquisition: {reason}");
        }

        let bytes = self
            .vram
            .take()
            .context("memory display is already acquired")?;

        self.lost.set(false);
        self.acquire_count += 1;

        Ok(Acquisition {
            info: self.info,
            region: MemoryRegion {
                bytes,
                lost: Rc::clone(&self.lost),
            },
        })
    }

    fn release(&mut self, region: MemoryRegion) {
        debug_assert!(self.vram.is_none(), "released a region that was never acquired");
        self.vram = Some(region.bytes);
        self.release_count += 1;
    }
}

/// Video memory on loan from a [`MemoryDisplay`].
#[derive(Debug)]
pub struct MemoryRegion {
    bytes: Vec<u8>,
    lost: Rc<Cell<bool>>,
}

impl DisplayRegion for MemoryRegion {
    fn len(&self) -> usize {
        self.bytes.len()
    }

    fn bytes_mut(&mut self) -> io::Result<&mut [u8]> {
        if self.lost.get() {
            return Err(io::Error::new(
                io::ErrorKind::BrokenPipe,
                "memory display mapping was lost",
            ));
        }
        Ok(&mut self.bytes)
    }
}

/// Invalidates the mapping of an acquired [`MemoryDisplay`].
#[derive(Debug, Clone)]
pub struct LostHandle(Rc<Cell<bool>>);

impl LostHandle {
    pub fn mark_lost(&self) {
        self.0.set(true);
    }
}
