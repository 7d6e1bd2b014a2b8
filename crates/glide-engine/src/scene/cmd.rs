use crate::scene::shapes::rounded_rect::RoundedRectCmd;

/// Renderer-agnostic draw command stream.
///
/// The indicator draws exactly one shape family today. Extending the scene:
/// - add a new shape module under `scene::shapes::*`
/// - add a new variant here
/// - implement push helpers inside that shape module
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    RoundedRect(RoundedRectCmd),
}
