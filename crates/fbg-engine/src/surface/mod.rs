//! Double-buffered drawing surface.
//!
//! `Framebuffer` is the offscreen draw target: an owned byte buffer addressed
//! through its `PixelFormat`. `Surface` pairs it with the onscreen region of a
//! display and copies whole frames across on `present`.

mod framebuffer;
mod surface;

pub use framebuffer::Framebuffer;
pub use surface::Surface;
