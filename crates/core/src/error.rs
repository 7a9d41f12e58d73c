use thiserror::Error;

/// Top-level error type. The physics step itself never fails; only the
/// loading edges (configuration and level assets) do.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Level error: {0}")]
    Level(#[from] LevelError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: &'static str, message: String },
}

impl ConfigError {
    pub(crate) fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        ConfigError::InvalidValue { field, message: message.into() }
    }
}

#[derive(Debug, Error)]
pub enum LevelError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image decode error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Unknown tile glyph {glyph:?} at row {row}, column {col}")]
    UnknownGlyph { glyph: char, row: usize, col: usize },

    #[error("Unknown tile color {rgba:?} at pixel ({x}, {y})")]
    UnknownColor { rgba: [u8; 4], x: u32, y: u32 },

    #[error("Level has no spawn marker")]
    MissingSpawn,

    #[error("Level has more than one spawn marker (second at row {row}, column {col})")]
    DuplicateSpawn { row: usize, col: usize },

    #[error("Level is empty")]
    Empty,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_from_level_error() {
        let err: Error = LevelError::MissingSpawn.into();
        assert!(matches!(err, Error::Level(_)));
        assert_eq!(err.to_string(), "Level error: Level has no spawn marker");
    }

    #[test]
    fn config_error_display_messages() {
        assert_eq!(
            ConfigError::invalid("physics.gravity", "must be finite").to_string(),
            "Invalid value for physics.gravity: must be finite"
        );
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.toml");
        let err: Error = ConfigError::from(io).into();
        assert!(matches!(err, Error::Config(ConfigError::Io(_))));
    }

    #[test]
    fn level_error_display_messages() {
        assert_eq!(
            LevelError::UnknownGlyph { glyph: '?', row: 2, col: 7 }.to_string(),
            "Unknown tile glyph '?' at row 2, column 7"
        );
        assert_eq!(
            LevelError::DuplicateSpawn { row: 1, col: 3 }.to_string(),
            "Level has more than one spawn marker (second at row 1, column 3)"
        );
    }
}
