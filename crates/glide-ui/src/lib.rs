//! Glide UI — an animated paging indicator on top of `glide-engine`.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use glide_ui::prelude::*;
//!
//! let mut indicator = PageIndicator::new(IndicatorStyle::new().spacing(6.0));
//! indicator.set_page_count(5, &mut host);
//!
//! // Gesture tracking (no animation):
//! indicator.set_offset(scroll_fraction, &mut host);
//!
//! // Discrete jump (animated over 0.2 s):
//! indicator.set_page(3, frame_time.now, &mut host);
//!
//! // While the indicator holds a ticker registration, call once per refresh:
//! indicator.on_frame(frame_time.now, &mut host);
//!
//! // In the host's render pass:
//! let mut painter = Painter::new(&mut draw_list);
//! indicator.paint(&mut painter, view_rect);
//! ```
//!
//! The host side is two small contracts: [`host::IndicatorHost`] (redraw
//! marking + ticker registration) and whatever renderer consumes the engine's
//! `DrawList`.
//!
//! # Custom shape families
//!
//! Implement [`drawer::Drawer`] and hand it to
//! [`indicator::PageIndicator::with_drawer`]:
//!
//! ```rust,ignore
//! pub struct CircleDrawer { /* your fields */ }
//!
//! impl Drawer for CircleDrawer {
//!     // state accessors, content_size, paint …
//! }
//!
//! let indicator = PageIndicator::with_drawer(Box::new(CircleDrawer::new(style)));
//! ```

pub mod animator;
pub mod drawer;
pub mod drawers;
pub mod host;
pub mod indicator;
pub mod layout;
pub mod painter;
pub mod style;

/// Everything a host application needs to embed the indicator.
pub mod prelude {
    pub use crate::animator::{Animator, Tick};
    pub use crate::drawer::Drawer;
    pub use crate::drawers::{BaseDrawer, ExtendedLineDrawer};
    pub use crate::host::{IndicatorHost, TickerId};
    pub use crate::indicator::PageIndicator;
    pub use crate::painter::Painter;
    pub use crate::style::IndicatorStyle;

    // Re-export the engine primitives every embedder touches.
    pub use glide_engine::coords::{Rect, Vec2};
    pub use glide_engine::paint::Color;
    pub use glide_engine::scene::{Border, DrawCmd, DrawList};
    pub use glide_engine::time::{FrameClock, FrameTime};
}
