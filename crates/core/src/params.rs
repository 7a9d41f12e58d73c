use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::geom::Vec2;

/// How the hit rect is kept inside the world horizontally after each tick.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WrapMode {
    Off,
    /// Leaving past one edge re-enters at the other (left < -w, left > world_w).
    #[default]
    Edge,
    /// Torus on the rect's center x.
    Center,
    Clamp,
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Params {
    // Horizontal
    pub speed: f32,

    // Vertical
    pub gravity: f32,
    pub max_velocity: Vec2,

    // Jump
    pub jump_force: f32,
    pub max_jumps: u32,
    pub jump_cooldown: f32,

    // Body
    pub body_size: Vec2,
    /// Per-side margin between the visual rect and the smaller hit rect.
    pub hit_inset: Vec2,

    // World
    pub world_w: f32,
    pub wrap_mode: WrapMode,
    pub ground_plane: Option<f32>,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            speed: 140.0,

            gravity: 1200.0,
            max_velocity: Vec2::new(600.0, 600.0),

            jump_force: 320.0,
            max_jumps: 2,
            jump_cooldown: 0.2,

            body_size: Vec2::new(32.0, 32.0),
            hit_inset: Vec2::new(4.0, 2.0),

            world_w: 320.0,
            wrap_mode: WrapMode::Edge,
            ground_plane: None,
        }
    }
}

impl Params {
    /// Params as JSON with matching field names; missing fields keep their defaults.
    pub fn from_json_str(src: &str) -> Result<Self, ConfigError> {
        let params: Self = serde_json::from_str(src)?;
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let finite_non_negative = [
            ("physics.speed", self.speed),
            ("physics.gravity", self.gravity),
            ("physics.jump_force", self.jump_force),
            ("physics.jump_cooldown", self.jump_cooldown),
            ("physics.max_velocity.x", self.max_velocity.x),
            ("physics.max_velocity.y", self.max_velocity.y),
            ("physics.hit_inset.x", self.hit_inset.x),
            ("physics.hit_inset.y", self.hit_inset.y),
        ];
        for (field, v) in finite_non_negative {
            if !v.is_finite() || v < 0.0 {
                return Err(ConfigError::invalid(field, format!("{v} must be finite and >= 0")));
            }
        }
        if self.body_size.x <= 2.0 * self.hit_inset.x || self.body_size.y <= 2.0 * self.hit_inset.y {
            return Err(ConfigError::invalid(
                "physics.body_size",
                "must be larger than twice the hit inset on both axes",
            ));
        }
        if self.max_jumps == 0 {
            return Err(ConfigError::invalid("physics.max_jumps", "must be at least 1"));
        }
        if self.wrap_mode != WrapMode::Off && !(self.world_w.is_finite() && self.world_w > 0.0) {
            return Err(ConfigError::invalid("physics.world_w", "must be > 0 when wrapping"));
        }
        if let Some(y) = self.ground_plane {
            if !y.is_finite() {
                return Err(ConfigError::invalid("physics.ground_plane", "must be finite"));
            }
        }
        Ok(())
    }

    /// Width/height of the hit rect.
    pub fn hit_size(&self) -> Vec2 {
        Vec2::new(
            self.body_size.x - 2.0 * self.hit_inset.x,
            self.body_size.y - 2.0 * self.hit_inset.y,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{Params, WrapMode};
    use crate::error::ConfigError;
    use crate::geom::Vec2;

    #[test]
    fn json_params_fill_in_defaults() {
        let p = Params::from_json_str(r#"{"speed": 90.0, "wrap_mode": "clamp"}"#).unwrap();
        assert_eq!(p.speed, 90.0);
        assert_eq!(p.wrap_mode, WrapMode::Clamp);
        assert_eq!(p.gravity, Params::default().gravity);

        assert!(matches!(Params::from_json_str("{\"speed\": "), Err(ConfigError::Json(_))));
        assert!(matches!(
            Params::from_json_str(r#"{"max_jumps": 0}"#),
            Err(ConfigError::InvalidValue { field: "physics.max_jumps", .. })
        ));
    }

    #[test]
    fn defaults_are_valid() {
        let p = Params::default();
        p.validate().unwrap();
        assert_eq!(p.hit_size(), Vec2::new(24.0, 28.0));
    }

    #[test]
    fn inset_swallowing_the_body_is_rejected() {
        let p = Params { hit_inset: Vec2::new(16.0, 2.0), ..Params::default() };
        let err = p.validate().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { field: "physics.body_size", .. }));
    }

    #[test]
    fn negative_gravity_is_rejected() {
        let p = Params { gravity: -1.0, ..Params::default() };
        assert!(p.validate().is_err());
    }

    #[test]
    fn wrap_needs_world_width() {
        let p = Params { world_w: 0.0, ..Params::default() };
        assert!(p.validate().is_err());
        let p = Params { world_w: 0.0, wrap_mode: WrapMode::Off, ..Params::default() };
        assert!(p.validate().is_ok());
    }
}
