use glide_engine::coords::Rect;
use glide_engine::paint::Color;
use glide_engine::scene::{Border, DrawList, ZIndex};

/// Drawing surface passed to [`Drawer::paint`](crate::drawer::Drawer::paint).
///
/// Wraps the engine's `DrawList`; each call lands one z-layer above the
/// previous one, so later draws paint on top.
pub struct Painter<'a> {
    draw_list: &'a mut DrawList,
    z: i32,
}

impl<'a> Painter<'a> {
    pub fn new(draw_list: &'a mut DrawList) -> Self {
        Self { draw_list, z: 0 }
    }

    /// Rounded rectangle with optional border.
    ///
    /// Pass `radius = 0.0` for sharp corners. Pass `border = None` for no
    /// stroke.
    pub fn fill_rounded_rect(
        &mut self,
        rect: Rect,
        radius: f32,
        color: Color,
        border: Option<Border>,
    ) {
        debug_assert!(rect.is_finite(), "fill_rounded_rect: non-finite rect {rect:?}");

        let z = self.next_z();
        self.draw_list.push_rounded_rect(z, rect, radius, color, border);
    }

    #[inline]
    fn next_z(&mut self) -> ZIndex {
        let z = ZIndex::new(self.z);
        self.z += 1;
        z
    }
}
