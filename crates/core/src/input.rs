use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

bitflags::bitflags! {
    /// Held state of the logical actions for one frame.
    #[repr(transparent)]
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Buttons: u8 {
        const LEFT  = 1 << 0;
        const RIGHT = 1 << 1;
        const JUMP  = 1 << 2;
        const DEBUG = 1 << 3;
    }
}

/// What the physics tick sees: resolved levels and edges, never key codes.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    pub left: bool,
    pub right: bool,
    pub jump_pressed: bool,
    pub debug_toggled: bool,
}

impl InputSnapshot {
    /// -1, 0 or 1. Opposite directions cancel out.
    #[inline]
    pub fn horizontal(&self) -> f32 {
        (self.right as i32 - self.left as i32) as f32
    }
}

/// Turns held buttons into edge-triggered snapshots.
#[derive(Copy, Clone, Debug, Default)]
pub struct InputTracker {
    held: Buttons,
}

impl InputTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, buttons: Buttons) -> InputSnapshot {
        let pressed = buttons & !self.held;
        self.held = buttons;
        InputSnapshot {
            left: buttons.contains(Buttons::LEFT),
            right: buttons.contains(Buttons::RIGHT),
            jump_pressed: pressed.contains(Buttons::JUMP),
            debug_toggled: pressed.contains(Buttons::DEBUG),
        }
    }

    pub fn held(&self) -> Buttons {
        self.held
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    Left,
    Right,
    Jump,
    Debug,
}

impl Action {
    pub const ALL: [Action; 4] = [Action::Left, Action::Right, Action::Jump, Action::Debug];

    pub fn name(self) -> &'static str {
        match self {
            Action::Left => "left",
            Action::Right => "right",
            Action::Jump => "jump",
            Action::Debug => "debug",
        }
    }

    pub fn button(self) -> Buttons {
        match self {
            Action::Left => Buttons::LEFT,
            Action::Right => Buttons::RIGHT,
            Action::Jump => Buttons::JUMP,
            Action::Debug => Buttons::DEBUG,
        }
    }
}

/// Logical action -> physical key name. Key names are whatever the host
/// windowing layer reports, compared case-insensitively.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub left: String,
    pub right: String,
    pub jump: String,
    pub debug: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            left: "a".into(),
            right: "d".into(),
            jump: "space".into(),
            debug: "f3".into(),
        }
    }
}

impl KeyBindings {
    pub fn key(&self, action: Action) -> &str {
        match action {
            Action::Left => &self.left,
            Action::Right => &self.right,
            Action::Jump => &self.jump,
            Action::Debug => &self.debug,
        }
    }

    pub fn action_for(&self, key: &str) -> Option<Action> {
        Action::ALL
            .into_iter()
            .find(|a| self.key(*a).eq_ignore_ascii_case(key))
    }

    /// Resolve the set of currently held keys.
    pub fn buttons<'a, I>(&self, held_keys: I) -> Buttons
    where
        I: IntoIterator<Item = &'a str>,
    {
        held_keys
            .into_iter()
            .filter_map(|k| self.action_for(k))
            .fold(Buttons::empty(), |acc, a| acc | a.button())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for action in Action::ALL {
            let key = self.key(action).to_ascii_lowercase();
            if key.is_empty() {
                return Err(ConfigError::invalid("keybinds", format!("{} is unbound", action.name())));
            }
            if !seen.insert(key) {
                return Err(ConfigError::invalid(
                    "keybinds",
                    format!("{:?} is bound to more than one action", self.key(action)),
                ));
            }
        }
        Ok(())
    }
}
