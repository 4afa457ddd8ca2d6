// Configuration for the pacing engine and the terminal front-end.
// Timing defaults reproduce the classic chunk-reader heuristics.

use crate::engine::error::{ConfigError, PlaybackError};
use serde::Deserialize;
use std::fmt;
use std::ops::RangeInclusive;
use std::path::Path;
use std::str::FromStr;

/// How a multi-token chunk's delay is aggregated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DelayMode {
    /// Apply the length and punctuation heuristics to the joined chunk text.
    WholeChunk,
    /// Apply the heuristics to each token and take the arithmetic mean.
    #[default]
    PerWordAverage,
}

impl FromStr for DelayMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "whole-chunk" | "whole" => Ok(DelayMode::WholeChunk),
            "per-word-average" | "average" => Ok(DelayMode::PerWordAverage),
            other => Err(format!(
                "unknown delay mode '{}' (expected whole-chunk or per-word-average)",
                other
            )),
        }
    }
}

impl fmt::Display for DelayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DelayMode::WholeChunk => write!(f, "whole-chunk"),
            DelayMode::PerWordAverage => write!(f, "per-word-average"),
        }
    }
}

/// Timing configuration for the delay model and playback controller.
#[derive(Debug, Clone, PartialEq)]
pub struct TimingConfig {
    /// Words per minute reading speed (default 300)
    pub wpm: u32,

    /// Minimum and maximum allowed WPM
    pub wpm_range: RangeInclusive<u32>,

    /// Step applied by the speed up/down keys
    pub wpm_step: u32,

    /// Tokens shown per chunk (default 1)
    pub chunk_size: usize,
    pub chunk_size_range: RangeInclusive<usize>,

    /// Chunk text longer than this gets `long_word_penalty` (default 8 chars, 1.5x)
    pub long_word_threshold: usize,
    pub long_word_penalty: f64,

    /// Chunk text longer than this gets `medium_word_penalty` (default 6 chars, 1.25x)
    pub medium_word_threshold: usize,
    pub medium_word_penalty: f64,

    /// Ordered punctuation table; the first entry found in a chunk wins.
    pub punctuation_multipliers: Vec<(char, f64)>,

    pub delay_mode: DelayMode,
}

pub const DEFAULT_PUNCTUATION_MULTIPLIERS: [(char, f64); 9] = [
    ('.', 2.0),
    ('!', 2.0),
    ('?', 2.0),
    (',', 1.5),
    (';', 1.5),
    (':', 1.5),
    ('-', 1.2),
    ('(', 1.2),
    (')', 1.2),
];

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            wpm: 300,
            wpm_range: 100..=1000,
            wpm_step: 25,
            chunk_size: 1,
            chunk_size_range: 1..=5,
            long_word_threshold: 8,
            long_word_penalty: 1.5,
            medium_word_threshold: 6,
            medium_word_penalty: 1.25,
            punctuation_multipliers: DEFAULT_PUNCTUATION_MULTIPLIERS.to_vec(),
            delay_mode: DelayMode::default(),
        }
    }
}

impl TimingConfig {
    pub fn clamp_wpm(&self, wpm: u32) -> u32 {
        wpm.clamp(*self.wpm_range.start(), *self.wpm_range.end())
    }

    /// Out-of-range chunk sizes fall back to 1.
    pub fn sanitize_chunk_size(&self, chunk_size: usize) -> usize {
        if self.chunk_size_range.contains(&chunk_size) {
            chunk_size
        } else {
            1
        }
    }

    /// Parses user input for the chunk size; anything unusable becomes 1.
    pub fn parse_chunk_size(&self, input: &str) -> usize {
        input
            .trim()
            .parse::<usize>()
            .map(|n| self.sanitize_chunk_size(n))
            .unwrap_or(1)
    }

    pub fn validate(&self) -> Result<(), PlaybackError> {
        if !self.wpm_range.contains(&self.wpm) {
            return Err(PlaybackError::InvalidConfigValue {
                field: "wpm",
                value: self.wpm.to_string(),
            });
        }
        if !self.chunk_size_range.contains(&self.chunk_size) {
            return Err(PlaybackError::InvalidConfigValue {
                field: "chunk_size",
                value: self.chunk_size.to_string(),
            });
        }
        if self.wpm_step == 0 {
            return Err(PlaybackError::InvalidConfigValue {
                field: "wpm_step",
                value: "0".to_string(),
            });
        }
        Ok(())
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    timing: TimingSection,
    theme: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct TimingSection {
    wpm: Option<u32>,
    wpm_step: Option<u32>,
    chunk_size: Option<usize>,
    delay_mode: Option<DelayMode>,
}

/// Master configuration combining timing and presentation settings
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub timing: TimingConfig,
    pub theme: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timing: TimingConfig::default(),
            theme: "dark".to_string(),
        }
    }
}

impl Config {
    /// Parses a TOML document, layering every present key over the defaults.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(source)?;
        let mut config = Config::default();

        if let Some(wpm) = file.timing.wpm {
            config.timing.wpm = wpm;
        }
        if let Some(step) = file.timing.wpm_step {
            config.timing.wpm_step = step;
        }
        if let Some(chunk_size) = file.timing.chunk_size {
            config.timing.chunk_size = chunk_size;
        }
        if let Some(mode) = file.timing.delay_mode {
            config.timing.delay_mode = mode;
        }
        if let Some(theme) = file.theme {
            config.theme = theme;
        }

        config.timing.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TimingConfig::default();
        assert_eq!(config.wpm, 300);
        assert_eq!(config.chunk_size, 1);
        assert_eq!(config.wpm_range, 100..=1000);
        assert_eq!(config.delay_mode, DelayMode::PerWordAverage);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_punctuation_table_order() {
        let config = TimingConfig::default();
        let chars: String = config
            .punctuation_multipliers
            .iter()
            .map(|(c, _)| *c)
            .collect();
        assert_eq!(chars, ".!?,;:-()");
    }

    #[test]
    fn test_clamp_wpm() {
        let config = TimingConfig::default();
        assert_eq!(config.clamp_wpm(50), 100);
        assert_eq!(config.clamp_wpm(450), 450);
        assert_eq!(config.clamp_wpm(5000), 1000);
    }

    #[test]
    fn test_sanitize_chunk_size() {
        let config = TimingConfig::default();
        assert_eq!(config.sanitize_chunk_size(3), 3);
        assert_eq!(config.sanitize_chunk_size(0), 1);
        assert_eq!(config.sanitize_chunk_size(6), 1);
    }

    #[test]
    fn test_parse_chunk_size() {
        let config = TimingConfig::default();
        assert_eq!(config.parse_chunk_size(" 4 "), 4);
        assert_eq!(config.parse_chunk_size("abc"), 1);
        assert_eq!(config.parse_chunk_size("-2"), 1);
        assert_eq!(config.parse_chunk_size("9"), 1);
    }

    #[test]
    fn test_validate_rejects_out_of_range_wpm() {
        let config = TimingConfig {
            wpm: 20,
            ..TimingConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(PlaybackError::InvalidConfigValue {
                field: "wpm",
                value: "20".to_string()
            })
        );
    }

    #[test]
    fn test_delay_mode_from_str() {
        assert_eq!("whole-chunk".parse(), Ok(DelayMode::WholeChunk));
        assert_eq!("Average".parse(), Ok(DelayMode::PerWordAverage));
        assert!("fastest".parse::<DelayMode>().is_err());
    }

    #[test]
    fn test_config_from_toml_layers_over_defaults() {
        let config = Config::from_toml_str(
            r#"
            theme = "sepia"

            [timing]
            wpm = 450
            delay_mode = "whole-chunk"
            "#,
        )
        .unwrap();
        assert_eq!(config.theme, "sepia");
        assert_eq!(config.timing.wpm, 450);
        assert_eq!(config.timing.chunk_size, 1);
        assert_eq!(config.timing.delay_mode, DelayMode::WholeChunk);
    }

    #[test]
    fn test_config_from_empty_toml() {
        assert_eq!(Config::from_toml_str("").unwrap(), Config::default());
    }

    #[test]
    fn test_config_rejects_invalid_chunk_size() {
        let result = Config::from_toml_str("[timing]\nchunk_size = 9\n");
        assert!(matches!(
            result,
            Err(ConfigError::Invalid(PlaybackError::InvalidConfigValue {
                field: "chunk_size",
                ..
            }))
        ));
    }

    #[test]
    fn test_config_rejects_unknown_keys() {
        let result = Config::from_toml_str("[timing]\nspeed = 9\n");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}
