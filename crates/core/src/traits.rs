//! Capabilities composed per entity type instead of a shared base type.

use crate::geom::Rect;

/// Something the resolver can push against.
///
/// `previous_rect` is where the shape was at the start of the tick; static
/// geometry returns its `rect` unchanged.
pub trait Collidable {
    fn rect(&self) -> Rect;
    fn previous_rect(&self) -> Rect;
}

/// Something the external renderer can place on screen.
pub trait Drawable {
    fn visual_rect(&self) -> Rect;
}

/// Frame-stepped sprite sheet state.
pub trait Animated {
    /// Advance using the monotonic clock, once per displayed frame.
    fn advance(&mut self, now: f64);
    fn frame(&self) -> usize;
}
