use serde::{Deserialize, Serialize};

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle, `(x, y)` is the top-left corner and +y points down.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        self.x + 0.5 * self.w
    }

    #[inline]
    pub fn center_y(&self) -> f32 {
        self.y + 0.5 * self.h
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    // Edge setters move the rect, they never resize it.

    #[inline]
    pub fn set_left(&mut self, v: f32) {
        self.x = v;
    }

    #[inline]
    pub fn set_right(&mut self, v: f32) {
        self.x = v - self.w;
    }

    #[inline]
    pub fn set_top(&mut self, v: f32) {
        self.y = v;
    }

    #[inline]
    pub fn set_bottom(&mut self, v: f32) {
        self.y = v - self.h;
    }

    /// Grow (or shrink, with negative amounts) around the center.
    pub fn inflate(&self, dw: f32, dh: f32) -> Rect {
        Rect {
            x: self.x - 0.5 * dw,
            y: self.y - 0.5 * dh,
            w: self.w + dw,
            h: self.h + dh,
        }
    }

    #[inline]
    pub fn translated(&self, dx: f32, dy: f32) -> Rect {
        Rect { x: self.x + dx, y: self.y + dy, ..*self }
    }
}

#[inline]
pub fn rects_intersect(a: &Rect, b: &Rect) -> bool {
    a.x < b.x + b.w && a.x + a.w > b.x && a.y < b.y + b.h && a.y + a.h > b.y
}
