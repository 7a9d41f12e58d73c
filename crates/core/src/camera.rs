use serde::{Deserialize, Serialize};

use crate::geom::{Rect, Vec2};

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Divisor applied to the remaining distance each update; 1 snaps.
    pub smoothness: f32,
    /// Size of the low-res render target the scroll is computed for.
    pub viewport: Vec2,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self { smoothness: 180.0, viewport: Vec2::new(320.0, 180.0) }
    }
}

/// Eases the scroll so the followed rect drifts to the viewport center.
#[derive(Copy, Clone, Debug, Default)]
pub struct Camera {
    pub scroll: Vec2,
    config: CameraConfig,
}

impl Camera {
    pub fn new(config: CameraConfig) -> Self {
        Self { scroll: Vec2::ZERO, config }
    }

    /// Place the target at the center immediately (level start, respawn).
    pub fn snap_to(&mut self, follow: &Rect) {
        self.scroll = Vec2::new(
            follow.center_x() - 0.5 * self.config.viewport.x,
            follow.center_y() - 0.5 * self.config.viewport.y,
        );
    }

    /// One easing step, run once per displayed frame.
    pub fn update(&mut self, follow: &Rect) {
        let s = self.config.smoothness.max(1.0);
        let half = Vec2::new(0.5 * self.config.viewport.x, 0.5 * self.config.viewport.y);
        self.scroll.x += (follow.center_x() - (self.scroll.x + half.x)) / s;
        self.scroll.y += (follow.center_y() - (self.scroll.y + half.y)) / s;
    }

    pub fn apply(&self, rect: &Rect) -> Rect {
        apply_scroll(rect, self.scroll)
    }
}

/// World rect -> screen rect.
pub fn apply_scroll(rect: &Rect, scroll: Vec2) -> Rect {
    rect.translated(-scroll.x, -scroll.y)
}
