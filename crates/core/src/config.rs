use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::camera::CameraConfig;
use crate::clock::FIXED_DT;
use crate::error::ConfigError;
use crate::hud::HudConfig;
use crate::input::KeyBindings;
use crate::params::Params;

const fn default_fixed_dt() -> f32 {
    FIXED_DT
}
const fn default_max_ticks_per_frame() -> u32 {
    5
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimingConfig {
    /// Physics tick in seconds (default 1/50).
    #[serde(default = "default_fixed_dt")]
    pub fixed_dt: f32,

    /// Ticks run per displayed frame before the backlog is dropped.
    #[serde(default = "default_max_ticks_per_frame")]
    pub max_ticks_per_frame: u32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            fixed_dt: default_fixed_dt(),
            max_ticks_per_frame: default_max_ticks_per_frame(),
        }
    }
}

/// Everything a session needs besides the level itself.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Level asset, relative paths resolved against the config file.
    pub level: Option<PathBuf>,
    pub physics: Params,
    pub timing: TimingConfig,
    pub camera: CameraConfig,
    pub hud: HudConfig,
    pub keybinds: KeyBindings,
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.physics.validate()?;
        self.keybinds.validate()?;
        if !(self.timing.fixed_dt.is_finite() && self.timing.fixed_dt > 0.0) {
            return Err(ConfigError::invalid(
                "timing.fixed_dt",
                format!("{} (must be > 0)", self.timing.fixed_dt),
            ));
        }
        if self.timing.max_ticks_per_frame == 0 {
            return Err(ConfigError::invalid("timing.max_ticks_per_frame", "must be at least 1"));
        }
        if !(self.camera.smoothness >= 1.0) {
            return Err(ConfigError::invalid("camera.smoothness", "must be >= 1"));
        }
        if !(self.hud.update_interval >= 0.0) {
            return Err(ConfigError::invalid("hud.update_interval", "must be >= 0"));
        }
        Ok(())
    }

    pub fn from_toml_str(src: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(src)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let mut config = Self::from_toml_str(&content)?;
        if let (Some(level), Some(dir)) = (config.level.as_mut(), path.parent()) {
            if level.is_relative() {
                *level = dir.join(&*level);
            }
        }
        log::debug!("loaded config {}: {:?}", path.display(), config);
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::Vec2;
    use crate::params::WrapMode;
    use std::io::Write;

    #[test]
    fn empty_document_is_all_defaults() {
        let config = GameConfig::from_toml_str("").unwrap();
        assert_eq!(config, GameConfig::default());
        assert_eq!(config.timing.fixed_dt, 1.0 / 50.0);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = GameConfig::from_toml_str(
            r#"
            [physics]
            gravity = 900.0
            max_velocity = { x = 300.0, y = 700.0 }
            wrap_mode = "center"
            ground_plane = 180.0

            [keybinds]
            jump = "w"
            "#,
        )
        .unwrap();
        assert_eq!(config.physics.gravity, 900.0);
        assert_eq!(config.physics.speed, 140.0);
        assert_eq!(config.physics.max_velocity, Vec2::new(300.0, 700.0));
        assert_eq!(config.physics.wrap_mode, WrapMode::Center);
        assert_eq!(config.physics.ground_plane, Some(180.0));
        assert_eq!(config.keybinds.jump, "w");
        assert_eq!(config.keybinds.left, "a");
    }

    #[test]
    fn invalid_values_are_rejected() {
        let err = GameConfig::from_toml_str("[timing]\nfixed_dt = 0.0\n").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { field: "timing.fixed_dt", .. }));

        let err = GameConfig::from_toml_str("[physics]\nmax_jumps = 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { field: "physics.max_jumps", .. }));

        let err = GameConfig::from_toml_str("[physics]\ngravity = \"lots\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn level_path_is_relative_to_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("game.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(f, "level = \"levels/dev.txt\"").unwrap();

        let config = GameConfig::from_file(&path).unwrap();
        assert_eq!(config.level, Some(dir.path().join("levels/dev.txt")));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = GameConfig::from_file("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
