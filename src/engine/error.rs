use crate::input::LoadError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Local validation failures reported synchronously by the playback controller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlaybackError {
    #[error("nothing to read: the text contains no tokens")]
    EmptyText,

    #[error("a reading session is already active")]
    AlreadyRunning,

    #[error("invalid value for {field}: {value}")]
    InvalidConfigValue { field: &'static str, value: String },
}

/// Failure to begin a session from a [`TextSource`](crate::input::TextSource).
#[derive(Error, Debug)]
pub enum StartError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Playback(#[from] PlaybackError),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error(transparent)]
    Invalid(#[from] PlaybackError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_message() {
        assert_eq!(
            PlaybackError::EmptyText.to_string(),
            "nothing to read: the text contains no tokens"
        );
    }

    #[test]
    fn test_invalid_config_value_message() {
        let err = PlaybackError::InvalidConfigValue {
            field: "wpm",
            value: "5000".to_string(),
        };
        assert_eq!(err.to_string(), "invalid value for wpm: 5000");
    }

    #[test]
    fn test_start_error_is_transparent() {
        let err: StartError = PlaybackError::EmptyText.into();
        assert_eq!(err.to_string(), PlaybackError::EmptyText.to_string());
    }

    #[test]
    fn test_config_error_wraps_playback_error() {
        let err: ConfigError = PlaybackError::AlreadyRunning.into();
        assert!(matches!(
            err,
            ConfigError::Invalid(PlaybackError::AlreadyRunning)
        ));
    }
}
