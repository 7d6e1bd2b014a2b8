//! Built-in drawer variants.

pub mod base;
pub mod extended_line;

pub use base::BaseDrawer;
pub use extended_line::ExtendedLineDrawer;

/// Vertical padding added around the row in preferred content sizes.
pub(crate) const EXTRA_VERTICAL_PADDING: f32 = 16.0;
