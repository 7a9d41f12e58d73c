//! Debug overlay model. Rendering text is the host's job; this only decides
//! what the overlay says and how often it changes.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::anim::AnimState;
use crate::body::Body;
use crate::geom::Vec2;
use crate::input::{Action, KeyBindings};
use crate::jump::JumpPhase;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HudConfig {
    pub update_interval: f64,
    pub fps_window: usize,
    pub visible: bool,
}

impl Default for HudConfig {
    fn default() -> Self {
        Self { update_interval: 0.1, fps_window: 30, visible: true }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DebugField {
    FrameTime,
    Fps,
    Position,
    Velocity,
    Grounded,
    Jumps,
    Anim,
}

impl DebugField {
    pub const ALL: [DebugField; 7] = [
        DebugField::FrameTime,
        DebugField::Fps,
        DebugField::Position,
        DebugField::Velocity,
        DebugField::Grounded,
        DebugField::Jumps,
        DebugField::Anim,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DebugField::FrameTime => "\u{394}",
            DebugField::Fps => "\u{2211}",
            DebugField::Position => "pos",
            DebugField::Velocity => "vel",
            DebugField::Grounded => "grounded",
            DebugField::Jumps => "jumps",
            DebugField::Anim => "anim",
        }
    }

    pub fn unit(self) -> Option<&'static str> {
        match self {
            DebugField::FrameTime => Some("ms"),
            _ => None,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DebugSnapshot {
    pub frame_ms: f32,
    pub fps: u32,
    pub position: Vec2,
    pub velocity: Vec2,
    pub grounded: bool,
    pub phase: JumpPhase,
    pub anim: AnimState,
}

impl DebugSnapshot {
    pub fn value(&self, field: DebugField) -> String {
        match field {
            DebugField::FrameTime => format!("{:.2}", self.frame_ms),
            DebugField::Fps => self.fps.to_string(),
            DebugField::Position => format!("{:.1}, {:.1}", self.position.x, self.position.y),
            DebugField::Velocity => format!("{:.1}, {:.1}", self.velocity.x, self.velocity.y),
            DebugField::Grounded => self.grounded.to_string(),
            DebugField::Jumps => match self.phase {
                JumpPhase::Grounded => "0".into(),
                JumpPhase::Airborne(n) => n.to_string(),
            },
            DebugField::Anim => format!("{:?}", self.anim),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum HudLine {
    Field { field: DebugField, text: String },
    Heading(&'static str),
    Binding { action: Action, key: String },
    Separator,
}

impl HudLine {
    /// Display text, `None` for a blank spacer row.
    pub fn text(&self) -> Option<String> {
        match self {
            HudLine::Field { field, text } => {
                Some(format!("{} {}{}", field.label(), text, field.unit().unwrap_or("")))
            }
            HudLine::Heading(h) => Some((*h).to_string()),
            HudLine::Binding { action, key } => {
                let key = if key == " " { "SPACE".to_string() } else { key.to_uppercase() };
                Some(format!("{}: {}", action.name().to_uppercase(), key))
            }
            HudLine::Separator => None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct DebugHud {
    config: HudConfig,
    visible: bool,
    last_update_at: f64,
    fps_samples: VecDeque<u32>,
    snapshot: Option<DebugSnapshot>,
    lines: Vec<HudLine>,
}

impl DebugHud {
    pub fn new(config: HudConfig) -> Self {
        Self {
            config,
            visible: config.visible,
            last_update_at: f64::NEG_INFINITY,
            fps_samples: VecDeque::with_capacity(config.fps_window),
            snapshot: None,
            lines: Vec::new(),
        }
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn toggle(&mut self) {
        self.visible = !self.visible;
        log::debug!("debug overlay {}", if self.visible { "on" } else { "off" });
    }

    pub fn snapshot(&self) -> Option<&DebugSnapshot> {
        self.snapshot.as_ref()
    }

    pub fn lines(&self) -> &[HudLine] {
        &self.lines
    }

    /// Refresh at most once per `update_interval`. Returns whether the lines changed.
    pub fn update(
        &mut self,
        now: f64,
        frame_dt: f64,
        body: &Body,
        anim: AnimState,
        bindings: &KeyBindings,
    ) -> bool {
        if now - self.last_update_at < self.config.update_interval {
            return false;
        }
        self.last_update_at = now;

        let fps = if frame_dt > 0.0 { (1.0 / frame_dt).floor() as u32 } else { 0 };
        self.fps_samples.push_back(fps);
        while self.fps_samples.len() > self.config.fps_window.max(1) {
            self.fps_samples.pop_front();
        }
        let mean = self.fps_samples.iter().map(|&f| u64::from(f)).sum::<u64>()
            / self.fps_samples.len() as u64;

        let snapshot = DebugSnapshot {
            frame_ms: (frame_dt * 1000.0) as f32,
            fps: mean as u32,
            position: body.position(),
            velocity: body.velocity(),
            grounded: body.is_grounded(),
            phase: body.phase(),
            anim,
        };

        self.lines.clear();
        for field in DebugField::ALL {
            self.lines.push(HudLine::Field { field, text: snapshot.value(field) });
        }
        self.lines.push(HudLine::Separator);
        self.lines.push(HudLine::Heading("MOVEMENTS"));
        for action in [Action::Jump, Action::Right, Action::Left] {
            self.lines.push(HudLine::Binding { action, key: bindings.key(action).to_string() });
        }
        self.lines.push(HudLine::Separator);
        self.lines.push(HudLine::Heading("MISC"));
        self.lines.push(HudLine::Binding {
            action: Action::Debug,
            key: bindings.key(Action::Debug).to_string(),
        });

        self.snapshot = Some(snapshot);
        true
    }
}

impl Default for DebugHud {
    fn default() -> Self {
        Self::new(HudConfig::default())
    }
}
