//! Time subsystem.
//!
//! Presentation bookkeeping: how many frames a surface has shown and at what
//! rate. `Surface::present` ticks its clock once per successful copy.

mod frame_clock;

pub use frame_clock::{FrameClock, FrameStats};
