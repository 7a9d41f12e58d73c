use serde::{Deserialize, Serialize};

use crate::geom::{rects_intersect, Rect};
use crate::params::WrapMode;
use crate::traits::{Animated, Collidable, Drawable};

/// Immovable collision rectangle.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StaticTile {
    pub rect: Rect,
}

impl StaticTile {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { rect: Rect::new(x, y, w, h) }
    }
}

impl From<Rect> for StaticTile {
    fn from(rect: Rect) -> Self {
        Self { rect }
    }
}

impl Collidable for StaticTile {
    #[inline]
    fn rect(&self) -> Rect {
        self.rect
    }

    #[inline]
    fn previous_rect(&self) -> Rect {
        self.rect
    }
}

impl Drawable for StaticTile {
    fn visual_rect(&self) -> Rect {
        self.rect
    }
}

/// Bob speed in radians per second of the collectible's draw offset.
const BOB_RATE: f64 = 5.0;
/// Peak bob offset in pixels.
const BOB_AMPLITUDE: f64 = 1.2;

/// Grid-placed pickup. Not collidable; only its draw position moves.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Collectible {
    pub rect: Rect,
    pub value: u32,
    #[serde(skip)]
    bob: f32,
}

impl Collectible {
    pub const DEFAULT_VALUE: u32 = 10;

    pub fn new(rect: Rect, value: u32) -> Self {
        Self { rect, value, bob: 0.0 }
    }

    /// Vertical draw offset at monotonic time `now`.
    pub fn bob_offset(now: f64) -> f32 {
        ((now * BOB_RATE).sin() * BOB_AMPLITUDE) as f32
    }

    pub fn bob(&self) -> f32 {
        self.bob
    }
}

impl Drawable for Collectible {
    fn visual_rect(&self) -> Rect {
        self.rect.translated(0.0, self.bob)
    }
}

impl Animated for Collectible {
    fn advance(&mut self, now: f64) {
        self.bob = Self::bob_offset(now);
    }

    fn frame(&self) -> usize {
        0
    }
}

/// First pair of tiles that overlap, if any. The resolver is single-pass and
/// assumes tiles never overlap each other.
pub fn find_overlap(tiles: &[StaticTile]) -> Option<(usize, usize)> {
    for (i, a) in tiles.iter().enumerate() {
        for (j, b) in tiles.iter().enumerate().skip(i + 1) {
            if rects_intersect(&a.rect, &b.rect) {
                return Some((i, j));
            }
        }
    }
    None
}

/// Returns the new left edge for a rect of width `w` in a world `world_w` wide.
pub fn wrap_horizontal(mode: WrapMode, left: f32, w: f32, world_w: f32) -> f32 {
    match mode {
        WrapMode::Off => left,
        WrapMode::Edge => {
            if left < -w {
                world_w
            } else if left > world_w {
                -w
            } else {
                left
            }
        }
        WrapMode::Center => {
            let center = left + 0.5 * w;
            center.rem_euclid(world_w) - 0.5 * w
        }
        WrapMode::Clamp => left.max(0.0).min((world_w - w).max(0.0)),
    }
}
