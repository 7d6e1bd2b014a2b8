//! Shared slot geometry for indicator drawers.
//!
//! Pure functions of the container size and the fractional slot position, so
//! drawer variants compose them instead of inheriting a base layout. All
//! coordinates are relative to the container's origin.

/// Horizontal offset of the left edge of the slot at fractional `position`.
///
/// Centers the whole row of `slot_count` virtual slots inside the container,
/// then offsets to the requested slot. `position` may be fractional or out of
/// `[0, slot_count)`; the result stays linear in it.
pub fn center_x(
    container_width: f32,
    position: f32,
    item_width: f32,
    spacing: f32,
    slot_count: usize,
) -> f32 {
    let dot_position = position * (item_width + spacing);
    let mid_x = container_width / 2.0;
    // Half-row width uses (spacing - 1), not spacing. Deliberate: every
    // existing layout is pixel-exact against this centering.
    let half_row = (slot_count as f32 * (item_width + (spacing - 1.0))) / 2.0;

    dot_position - half_row + mid_x
}

/// Vertical offset of the top edge of an item centered on the container
/// midline.
pub fn center_y(container_height: f32, item_height: f32) -> f32 {
    container_height / 2.0 - item_height / 2.0
}
