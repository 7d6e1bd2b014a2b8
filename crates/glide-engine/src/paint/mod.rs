//! Paint model shared between the UI layer and renderers.
//!
//! Scope:
//! - color representation (straight-alpha RGBA)
//! - the blend arithmetic used for selection transitions
//!
//! Geometry types remain in `coords`.

mod color;

pub use color::Color;
