use crate::engine::config::{DelayMode, TimingConfig};
use crate::reading::token::Token;
use std::fmt;

/// Nominal seconds per word before any adjustment.
pub fn base_delay_seconds(wpm: u32) -> f64 {
    60.0 / wpm.max(1) as f64
}

fn get_length_multiplier(text: &str, config: &TimingConfig) -> f64 {
    let len = text.chars().count();
    if len > config.long_word_threshold {
        config.long_word_penalty
    } else if len > config.medium_word_threshold {
        config.medium_word_penalty
    } else {
        1.0
    }
}

/// Walks the punctuation table in order and returns the multiplier of the
/// first entry present anywhere in `text`. Marks never stack.
fn get_punctuation_multiplier(text: &str, config: &TimingConfig) -> f64 {
    config
        .punctuation_multipliers
        .iter()
        .find(|(mark, _)| text.contains(*mark))
        .map(|&(_, multiplier)| multiplier)
        .unwrap_or(1.0)
}

/// Display duration in seconds for a chunk's joined text.
pub fn delay_for(chunk_text: &str, base_delay: f64, chunk_size: usize, config: &TimingConfig) -> f64 {
    let base_delay = base_delay.max(0.0);
    if chunk_text.is_empty() {
        return base_delay;
    }

    let delay = base_delay
        * chunk_size.max(1) as f64
        * get_length_multiplier(chunk_text, config)
        * get_punctuation_multiplier(chunk_text, config);
    delay.max(0.0)
}

/// Delay for the tokens making up one chunk, aggregated per `config.delay_mode`.
pub fn chunk_delay(tokens: &[Token], base_delay: f64, chunk_size: usize, config: &TimingConfig) -> f64 {
    if tokens.is_empty() {
        return base_delay.max(0.0);
    }

    match config.delay_mode {
        DelayMode::WholeChunk => {
            let text = tokens
                .iter()
                .map(Token::as_str)
                .collect::<Vec<_>>()
                .join(" ");
            delay_for(&text, base_delay, chunk_size, config)
        }
        DelayMode::PerWordAverage => {
            let total: f64 = tokens
                .iter()
                .map(|token| delay_for(token.as_str(), base_delay, chunk_size, config))
                .sum();
            total / tokens.len() as f64
        }
    }
}

/// Estimated reading time left, split for `m:ss` display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimeRemaining {
    pub minutes: u64,
    pub seconds: u64,
}

impl TimeRemaining {
    pub fn zero() -> Self {
        Self::default()
    }
}

impl fmt::Display for TimeRemaining {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.minutes, self.seconds)
    }
}

/// `(tokens_remaining / chunk_size) * (60 / wpm)` minutes, truncated into
/// whole minutes and whole seconds.
pub fn time_remaining(tokens_remaining: usize, chunk_size: usize, wpm: u32) -> TimeRemaining {
    let chunks = tokens_remaining as f64 / chunk_size.max(1) as f64;
    let total_minutes = chunks * base_delay_seconds(wpm);
    let minutes = total_minutes.trunc();
    let seconds = ((total_minutes - minutes) * 60.0).trunc();
    TimeRemaining {
        minutes: minutes as u64,
        seconds: seconds as u64,
    }
}
