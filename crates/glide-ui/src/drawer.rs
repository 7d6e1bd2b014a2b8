use glide_engine::coords::{Rect, Vec2};

use crate::painter::Painter;

/// Drawing strategy for one indicator shape family.
///
/// Implementations own the indicator state — the fractional current item,
/// item size, and page count — and emit draw commands for it on demand.
/// [`PageIndicator`](crate::indicator::PageIndicator) holds a boxed `Drawer`,
/// so shape families are swappable at runtime.
///
/// Degenerate state is not a fault: a zero page count paints empty (or nearly
/// so), and `current_item` is never clamped against `page_count` — callers
/// own range sanity, which keeps overscroll-style tracking possible.
pub trait Drawer {
    /// Fractional index of the active item. Integer values denote a settled
    /// page; non-integer values an in-progress transition.
    fn current_item(&self) -> f32;
    fn set_current_item(&mut self, value: f32);

    /// Width and height of one unselected item.
    fn item_size(&self) -> Vec2;
    fn set_item_size(&mut self, size: Vec2);

    /// Total number of pages represented by the indicator.
    fn page_count(&self) -> usize;
    fn set_page_count(&mut self, count: usize);

    /// Preferred (intrinsic) size of the whole indicator row.
    fn content_size(&self) -> Vec2;

    /// Emits draw commands for the current visual state into `rect`.
    ///
    /// `rect` is the space allocated by the host's render pass; the drawer
    /// centers its row inside it.
    fn paint(&self, painter: &mut Painter, rect: Rect);
}
