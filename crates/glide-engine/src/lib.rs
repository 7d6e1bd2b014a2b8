//! Glide engine crate.
//!
//! Renderer-agnostic primitives shared by the indicator UI layer and host
//! applications: geometry, color, the recorded draw stream, and frame timing.

pub mod coords;
pub mod logging;
pub mod paint;
pub mod scene;
pub mod time;
