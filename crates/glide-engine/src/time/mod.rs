//! Time subsystem.
//!
//! Frame timing utilities decoupled from any platform runtime. Intended
//! usage: one `FrameClock` per render loop, ticked once per presented frame;
//! consumers that animate use the absolute `now` of each snapshot and measure
//! elapsed time themselves rather than counting ticks.

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
