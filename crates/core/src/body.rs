use crate::geom::{Rect, Vec2};
use crate::jump::JumpPhase;
use crate::params::Params;
use crate::traits::{Collidable, Drawable};

/// The player's physics state. One per level/respawn.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Body {
    pub(crate) rect: Rect,
    pub(crate) previous_rect: Rect,
    pub(crate) visual: Rect,
    pub(crate) hit_inset: Vec2,

    pub(crate) velocity: Vec2,
    pub(crate) is_grounded: bool,

    pub(crate) jump_requested: bool,
    pub(crate) jump_count: u32,
    pub(crate) last_jump_time: f64,
}

impl Body {
    /// Place the visual rect's top-left at `spawn`; the hit rect sits inside it.
    pub fn new(params: &Params, spawn: Vec2) -> Self {
        let visual = Rect::new(spawn.x, spawn.y, params.body_size.x, params.body_size.y);
        let rect = visual.inflate(-2.0 * params.hit_inset.x, -2.0 * params.hit_inset.y);
        Self::from_hit_rect(rect, params.hit_inset)
    }

    /// Build directly from a hit rect (its top-left is the body position).
    pub fn from_hit_rect(rect: Rect, hit_inset: Vec2) -> Self {
        let mut body = Self {
            rect,
            previous_rect: rect,
            visual: rect,
            hit_inset,
            velocity: Vec2::ZERO,
            is_grounded: false,
            jump_requested: false,
            jump_count: 0,
            last_jump_time: f64::NEG_INFINITY,
        };
        body.sync_visual();
        body
    }

    pub fn position(&self) -> Vec2 {
        self.rect.position()
    }

    pub fn hit_rect(&self) -> Rect {
        self.rect
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn is_grounded(&self) -> bool {
        self.is_grounded
    }

    pub fn jump_count(&self) -> u32 {
        self.jump_count
    }

    pub fn last_jump_time(&self) -> f64 {
        self.last_jump_time
    }

    pub fn jump_requested(&self) -> bool {
        self.jump_requested
    }

    pub fn phase(&self) -> JumpPhase {
        JumpPhase::of(self)
    }

    /// Edge-triggered; consumed by the next integration whether or not it is granted.
    pub fn request_jump(&mut self) {
        self.jump_requested = true;
    }

    pub fn set_position(&mut self, p: Vec2) {
        self.rect.x = p.x;
        self.rect.y = p.y;
        self.sync_visual();
    }

    pub fn set_velocity(&mut self, v: Vec2) {
        self.velocity = v;
    }

    /// Start-of-tick snapshot used for side disambiguation.
    pub(crate) fn begin_tick(&mut self) {
        self.previous_rect = self.rect;
    }

    pub(crate) fn sync_visual(&mut self) {
        self.visual = self.rect.inflate(2.0 * self.hit_inset.x, 2.0 * self.hit_inset.y);
    }

    pub(crate) fn land(&mut self, keep_velocity: bool) {
        self.is_grounded = true;
        self.jump_count = 0;
        if !keep_velocity {
            self.velocity.y = 0.0;
        }
    }
}

impl Collidable for Body {
    fn rect(&self) -> Rect {
        self.rect
    }

    fn previous_rect(&self) -> Rect {
        self.previous_rect
    }
}

impl Drawable for Body {
    fn visual_rect(&self) -> Rect {
        self.visual
    }
}
