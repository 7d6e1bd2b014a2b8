use glide_engine::coords::{Rect, Vec2};

use crate::drawer::Drawer;
use crate::painter::Painter;
use crate::style::IndicatorStyle;

use super::EXTRA_VERTICAL_PADDING;

/// Indicator state plus a no-op paint.
///
/// Useful on its own as an invisible placeholder, and composed by the other
/// drawer variants for its state handling.
pub struct BaseDrawer {
    pub(crate) style: IndicatorStyle,
    pub(crate) page_count: usize,
    pub(crate) current_item: f32,
}

impl BaseDrawer {
    pub fn new(style: IndicatorStyle) -> Self {
        Self {
            style,
            page_count: 0,
            current_item: 0.0,
        }
    }

    pub fn style(&self) -> &IndicatorStyle {
        &self.style
    }

    /// Fractional part of the current item: how far through the transition
    /// into the next integer page.
    #[inline]
    pub(crate) fn progress(&self) -> f32 {
        self.current_item - self.current_item.floor()
    }

    /// Number of slots considered per render pass: one past the last page
    /// index, covering the trailing-edge partial item.
    #[inline]
    pub(crate) fn slot_count(&self) -> usize {
        self.page_count + 1
    }
}

impl Drawer for BaseDrawer {
    fn current_item(&self) -> f32 {
        self.current_item
    }

    fn set_current_item(&mut self, value: f32) {
        self.current_item = value;
    }

    fn item_size(&self) -> Vec2 {
        self.style.item_size
    }

    fn set_item_size(&mut self, size: Vec2) {
        self.style.item_size = size;
    }

    fn page_count(&self) -> usize {
        self.page_count
    }

    fn set_page_count(&mut self, count: usize) {
        self.page_count = count;
    }

    fn content_size(&self) -> Vec2 {
        let gaps = self.page_count as f32 - 1.0;
        Vec2::new(
            gaps * self.style.item_size.x + gaps * self.style.spacing,
            self.style.item_size.y + EXTRA_VERTICAL_PADDING,
        )
    }

    fn paint(&self, _painter: &mut Painter, _rect: Rect) {}
}
