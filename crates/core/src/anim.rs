use serde::{Deserialize, Serialize};

use crate::body::Body;
use crate::traits::Animated;

/// Sheet frames advance at this rate regardless of the display rate.
pub const FRAME_INTERVAL: f64 = 1.0 / 20.0;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimState {
    Idle,
    Run,
    Jump,
    DoubleJump,
    Fall,
}

impl AnimState {
    /// Pick the sheet from the body's final state for this tick.
    pub fn select(body: &Body) -> Self {
        let v = body.velocity();
        if v.y > 0.0 {
            AnimState::Fall
        } else if v.y < 0.0 {
            if body.jump_count() > 1 {
                AnimState::DoubleJump
            } else {
                AnimState::Jump
            }
        } else if v.x != 0.0 {
            AnimState::Run
        } else {
            AnimState::Idle
        }
    }
}

/// Frames per sheet, normally sheet width / frame width.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameCounts {
    pub idle: usize,
    pub run: usize,
    pub jump: usize,
    pub double_jump: usize,
    pub fall: usize,
}

impl FrameCounts {
    pub fn get(&self, state: AnimState) -> usize {
        let n = match state {
            AnimState::Idle => self.idle,
            AnimState::Run => self.run,
            AnimState::Jump => self.jump,
            AnimState::DoubleJump => self.double_jump,
            AnimState::Fall => self.fall,
        };
        n.max(1)
    }
}

impl Default for FrameCounts {
    fn default() -> Self {
        Self { idle: 11, run: 12, jump: 1, double_jump: 6, fall: 1 }
    }
}

#[derive(Clone, Debug)]
pub struct Animator {
    counts: FrameCounts,
    state: AnimState,
    frame: usize,
    last_frame_at: f64,
    flipped: bool,
}

impl Animator {
    pub fn new(counts: FrameCounts) -> Self {
        Self {
            counts,
            state: AnimState::Idle,
            frame: 0,
            last_frame_at: 0.0,
            flipped: false,
        }
    }

    pub fn state(&self) -> AnimState {
        self.state
    }

    /// Mirror the sheet horizontally. Sticks to the last direction moved.
    pub fn flipped(&self) -> bool {
        self.flipped
    }

    /// Fixed-rate half: choose the sheet and facing from the body.
    pub fn sync(&mut self, body: &Body) {
        self.state = AnimState::select(body);
        let vx = body.velocity().x;
        if vx < 0.0 {
            self.flipped = true;
        } else if vx > 0.0 {
            self.flipped = false;
        }
        self.wrap_frame();
    }

    fn wrap_frame(&mut self) {
        if self.frame + 1 > self.counts.get(self.state) {
            self.frame = 0;
        }
    }
}

impl Default for Animator {
    fn default() -> Self {
        Self::new(FrameCounts::default())
    }
}

impl Animated for Animator {
    fn advance(&mut self, now: f64) {
        if now - self.last_frame_at > FRAME_INTERVAL {
            self.frame += 1;
            self.last_frame_at = now;
        }
        self.wrap_frame();
    }

    fn frame(&self) -> usize {
        self.frame
    }
}
