use glide_engine::coords::{Rect, Vec2};

use crate::drawer::Drawer;
use crate::layout;
use crate::painter::Painter;
use crate::style::IndicatorStyle;

use super::EXTRA_VERTICAL_PADDING;
use super::base::BaseDrawer;

/// The animated "extended line" style.
///
/// The selected item is a widened pill that stretches while traveling and
/// contracts as it settles; the slot two past the departure point morphs in
/// the opposite direction, so the hand-off between neighboring pages is
/// continuous for every fractional position.
pub struct ExtendedLineDrawer {
    base: BaseDrawer,
}

impl ExtendedLineDrawer {
    pub fn new(style: IndicatorStyle) -> Self {
        Self {
            base: BaseDrawer::new(style),
        }
    }

    pub fn style(&self) -> &IndicatorStyle {
        self.base.style()
    }

    /// Width of the selected pill: one step wider than a plain item at rest,
    /// contracting toward the plain width as the transition progresses.
    fn selected_item_width(&self) -> f32 {
        let style = &self.base.style;
        style.item_size.x + (1.0 - self.base.progress()) * style.step()
    }

    /// Unselected pass: every slot except the two covered by the selected
    /// pill, with the trailing-edge neighbor morphing back to an ordinary
    /// item.
    fn paint_slots(&self, painter: &mut Painter, rect: Rect) {
        let style = &self.base.style;
        let item = style.item_size;
        let step = style.step();
        let slots = self.base.slot_count();

        let current = self.base.current_item;
        let floor_index = current.floor() as i64;
        let progress = self.base.progress();

        let top = rect.origin.y + layout::center_y(rect.size.y, item.y);

        for index in 0..=self.base.page_count {
            let index = index as i64;

            // These two slots are rendered by the selected-item pass.
            if index == floor_index || index == floor_index + 1 {
                continue;
            }

            let (x, width, color) = if index == floor_index + 2 {
                // Morphing neighbor: slides backward toward its slot while
                // widening, and fades from selected back to unselected.
                let color = style.item_color * (1.0 - progress)
                    + style.selected_item_color * progress;
                let position = (current + 2.0).floor() - progress;
                let x = layout::center_x(rect.size.x, position, item.x, style.spacing, slots);
                let widen = step - (1.0 - progress) * step;
                (x, item.x + widen, color)
            } else {
                let x = layout::center_x(rect.size.x, index as f32, item.x, style.spacing, slots);
                (x, item.x, style.item_color)
            };

            painter.fill_rounded_rect(
                Rect::new(rect.origin.x + x, top, width, item.y),
                style.corner_radius,
                color,
                None,
            );
        }
    }

    /// Selected pass: one pill spanning from the floor position, drawn above
    /// the slot pass.
    fn paint_current_item(&self, painter: &mut Painter, rect: Rect) {
        let style = &self.base.style;
        let current = self.base.current_item;
        let progress = self.base.progress();

        // Note: blend direction is the reverse of the neighbor pass.
        let color =
            style.item_color * progress + style.selected_item_color * (1.0 - progress);

        if current >= 0.0 {
            let item = style.item_size;
            let x = layout::center_x(
                rect.size.x,
                current.floor(),
                item.x,
                style.spacing,
                self.base.slot_count(),
            );
            let top = rect.origin.y + layout::center_y(rect.size.y, item.y);

            painter.fill_rounded_rect(
                Rect::new(rect.origin.x + x, top, self.selected_item_width(), item.y),
                style.corner_radius,
                color,
                None,
            );
        }
    }
}

impl Drawer for ExtendedLineDrawer {
    fn current_item(&self) -> f32 {
        self.base.current_item
    }

    fn set_current_item(&mut self, value: f32) {
        self.base.current_item = value;
    }

    fn item_size(&self) -> Vec2 {
        self.base.style.item_size
    }

    fn set_item_size(&mut self, size: Vec2) {
        self.base.style.item_size = size;
    }

    fn page_count(&self) -> usize {
        self.base.page_count
    }

    fn set_page_count(&mut self, count: usize) {
        self.base.page_count = count;
    }

    fn content_size(&self) -> Vec2 {
        let style = &self.base.style;
        let gaps = self.base.page_count as f32 - 1.0;
        Vec2::new(
            self.selected_item_width() + gaps * style.item_size.x + gaps * style.spacing,
            style.item_size.y + EXTRA_VERTICAL_PADDING,
        )
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        self.paint_slots(painter, rect);
        self.paint_current_item(painter, rect);
    }
}

impl Default for ExtendedLineDrawer {
    fn default() -> Self {
        Self::new(IndicatorStyle::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use glide_engine::scene::{DrawCmd, DrawList, RoundedRectCmd};

    const VIEW: Rect = Rect::new(0.0, 0.0, 200.0, 40.0);

    fn drawer(page_count: usize, current_item: f32) -> ExtendedLineDrawer {
        let mut d = ExtendedLineDrawer::new(IndicatorStyle::new());
        d.set_page_count(page_count);
        d.set_current_item(current_item);
        d
    }

    fn painted(drawer: &ExtendedLineDrawer, rect: Rect) -> Vec<RoundedRectCmd> {
        let mut draw_list = DrawList::new();
        let mut painter = Painter::new(&mut draw_list);
        drawer.paint(&mut painter, rect);
        draw_list
            .items()
            .iter()
            .map(|item| {
                let DrawCmd::RoundedRect(cmd) = &item.cmd;
                cmd.clone()
            })
            .collect()
    }

    /// Expected left edge for an integer slot with default style in VIEW:
    /// position * 20 - 6 * 19 / 2 + 100.
    fn slot_x(position: f32) -> f32 {
        position * 20.0 - 57.0 + 100.0
    }

    // ── settled state ─────────────────────────────────────────────────────

    #[test]
    fn settled_render_skips_covered_slots_and_draws_selected_last() {
        let cmds = painted(&drawer(5, 2.0), VIEW);

        // Slots 0, 1, 4, 5 (2 and 3 are covered), then the selected pill.
        assert_eq!(cmds.len(), 5);

        assert_abs_diff_eq!(cmds[0].rect.origin.x, slot_x(0.0), epsilon = 1e-3);
        assert_abs_diff_eq!(cmds[1].rect.origin.x, slot_x(1.0), epsilon = 1e-3);
        assert_abs_diff_eq!(cmds[2].rect.origin.x, slot_x(4.0), epsilon = 1e-3);
        assert_abs_diff_eq!(cmds[3].rect.origin.x, slot_x(5.0), epsilon = 1e-3);

        // At zero progress the morphing neighbor is back to plain width.
        assert_abs_diff_eq!(cmds[2].rect.size.x, 16.0, epsilon = 1e-3);

        // Selected pill: starts at slot 2, one step wider than an item.
        let selected = &cmds[4];
        assert_abs_diff_eq!(selected.rect.origin.x, slot_x(2.0), epsilon = 1e-3);
        assert_abs_diff_eq!(selected.rect.size.x, 36.0, epsilon = 1e-3);

        // All items sit on the vertical midline.
        for cmd in &cmds {
            assert_abs_diff_eq!(cmd.rect.origin.y, 18.5, epsilon = 1e-3);
            assert_abs_diff_eq!(cmd.rect.size.y, 3.0, epsilon = 1e-3);
        }
    }

    #[test]
    fn settled_selected_color_is_fully_selected_blend() {
        let cmds = painted(&drawer(5, 2.0), VIEW);
        let selected = cmds.last().unwrap();

        // item * 0 + selected * 1: RGB of the selected color, alphas averaged.
        assert_abs_diff_eq!(selected.color.r, 0.0, epsilon = 1e-4);
        assert_abs_diff_eq!(selected.color.g, 0.0, epsilon = 1e-4);
        assert_abs_diff_eq!(selected.color.b, 1.0, epsilon = 1e-4);
        assert_abs_diff_eq!(selected.color.a, 0.9, epsilon = 1e-4);
    }

    // ── mid-transition ────────────────────────────────────────────────────

    #[test]
    fn mid_transition_morphing_neighbor_slides_and_widens() {
        // current = 2.5: slots 2 and 3 covered, slot 4 is the morpher.
        let cmds = painted(&drawer(5, 2.5), VIEW);
        assert_eq!(cmds.len(), 5);

        let morpher = &cmds[2];
        // Position (2.5 + 2).floor() - 0.5 = 3.5.
        assert_abs_diff_eq!(morpher.rect.origin.x, slot_x(3.5), epsilon = 1e-3);
        // Width item + (step - 0.5 * step) = 16 + 10.
        assert_abs_diff_eq!(morpher.rect.size.x, 26.0, epsilon = 1e-3);

        let selected = &cmds[4];
        assert_abs_diff_eq!(selected.rect.origin.x, slot_x(2.0), epsilon = 1e-3);
        assert_abs_diff_eq!(selected.rect.size.x, 26.0, epsilon = 1e-3);
    }

    #[test]
    fn mid_transition_blend_directions_meet_at_half() {
        // At progress 0.5 the opposite blend orders coincide.
        let cmds = painted(&drawer(5, 2.5), VIEW);
        let morpher = &cmds[2];
        let selected = &cmds[4];

        assert_abs_diff_eq!(morpher.color.r, selected.color.r, epsilon = 1e-4);
        assert_abs_diff_eq!(morpher.color.g, selected.color.g, epsilon = 1e-4);
        assert_abs_diff_eq!(morpher.color.b, selected.color.b, epsilon = 1e-4);

        // Halfway between light gray and blue.
        assert_abs_diff_eq!(morpher.color.b, 0.5 * 0.667 + 0.5, epsilon = 1e-4);
    }

    // ── degenerate and out-of-range state ─────────────────────────────────

    #[test]
    fn zero_pages_renders_only_the_selected_pill() {
        let cmds = painted(&drawer(0, 0.0), VIEW);
        assert_eq!(cmds.len(), 1);
        assert_abs_diff_eq!(cmds[0].rect.size.x, 36.0, epsilon = 1e-3);
    }

    #[test]
    fn negative_position_suppresses_the_selected_pill() {
        // floor(-1.0) = -1 covers slots -1 and 0, so slot 0 is skipped and
        // slot 1 morphs; no selected pill below zero.
        let cmds = painted(&drawer(3, -1.0), VIEW);
        assert_eq!(cmds.len(), 3);

        let widest = cmds
            .iter()
            .map(|c| c.rect.size.x)
            .fold(f32::MIN, f32::max);
        assert!(widest <= 16.0 + 1e-3);
    }

    #[test]
    fn out_of_range_position_still_paints() {
        // current well past the last page: formulas stay defined, no panic.
        let cmds = painted(&drawer(3, 7.25), VIEW);
        assert!(!cmds.is_empty());
    }

    // ── content size ──────────────────────────────────────────────────────

    #[test]
    fn content_size_matches_closed_form_when_settled() {
        let d = drawer(5, 2.0);
        let size = d.content_size();
        // selected width 36 + 4 gaps of (16 + 4)
        assert_abs_diff_eq!(size.x, 36.0 + 4.0 * 16.0 + 4.0 * 4.0, epsilon = 1e-3);
        assert_abs_diff_eq!(size.y, 3.0 + 16.0, epsilon = 1e-3);
    }

    #[test]
    fn content_size_grows_with_page_count() {
        let mut previous = drawer(1, 0.0).content_size().x;
        for n in 2..8 {
            let width = drawer(n, 0.0).content_size().x;
            assert!(width > previous);
            previous = width;
        }
    }
}
