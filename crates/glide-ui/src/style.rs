use glide_engine::coords::Vec2;
use glide_engine::paint::Color;

/// Visual configuration for a paging indicator.
///
/// Built once by the host and handed to a drawer at construction; replace the
/// drawer to reconfigure.
///
/// # Example
/// ```rust,ignore
/// IndicatorStyle::new()
///     .spacing(6.0)
///     .item_width(12.0)
///     .selected_item_color(Color::new(1.0, 0.35, 0.1, 1.0))
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorStyle {
    /// Width and height of one unselected item. Default `16 × 3`.
    pub item_size: Vec2,
    /// Gap between neighboring items. Default `4.0`.
    pub spacing: f32,
    /// Corner radius applied to every item. Default `2.0`.
    pub corner_radius: f32,
    /// Fill for unselected items. Default light gray.
    pub item_color: Color,
    /// Fill for the selected item. Default blue at 0.8 alpha.
    pub selected_item_color: Color,
}

impl IndicatorStyle {
    pub fn new() -> Self {
        Self {
            item_size: Vec2::new(16.0, 3.0),
            spacing: 4.0,
            corner_radius: 2.0,
            item_color: Color::new(0.667, 0.667, 0.667, 1.0),
            selected_item_color: Color::new(0.0, 0.0, 1.0, 0.8),
        }
    }

    pub fn item_size(mut self, v: Vec2) -> Self {
        self.item_size = v;
        self
    }

    pub fn item_width(mut self, v: f32) -> Self {
        self.item_size.x = v;
        self
    }

    pub fn item_height(mut self, v: f32) -> Self {
        self.item_size.y = v;
        self
    }

    pub fn spacing(mut self, v: f32) -> Self {
        self.spacing = v;
        self
    }

    pub fn corner_radius(mut self, v: f32) -> Self {
        self.corner_radius = v;
        self
    }

    pub fn item_color(mut self, v: Color) -> Self {
        self.item_color = v;
        self
    }

    pub fn selected_item_color(mut self, v: Color) -> Self {
        self.selected_item_color = v;
        self
    }

    /// Distance between the left edges of two neighboring slots.
    #[inline]
    pub(crate) fn step(&self) -> f32 {
        self.spacing + self.item_size.x
    }
}

impl Default for IndicatorStyle {
    fn default() -> Self {
        Self::new()
    }
}
