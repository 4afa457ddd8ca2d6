use crate::engine::config::TimingConfig;
use crate::reading::cursor::{ChunkCursor, ChunkWindow};
use crate::reading::timing::{base_delay_seconds, chunk_delay, time_remaining, TimeRemaining};
use crate::reading::token::Token;
use std::time::Duration;

/// Tokens, cursor and pacing settings for a single reading session.
pub struct ReadingState {
    pub tokens: Vec<Token>,
    cursor: ChunkCursor,
    pub wpm: u32,
    config: TimingConfig,
}

impl ReadingState {
    pub fn new(tokens: Vec<Token>, config: TimingConfig) -> Self {
        let wpm = config.clamp_wpm(config.wpm);
        let chunk_size = config.sanitize_chunk_size(config.chunk_size);
        Self {
            tokens,
            cursor: ChunkCursor::new(chunk_size),
            wpm,
            config,
        }
    }

    pub fn new_with_default_config(tokens: Vec<Token>) -> Self {
        Self::new(tokens, TimingConfig::default())
    }

    pub fn current_index(&self) -> usize {
        self.cursor.index()
    }

    pub fn chunk_size(&self) -> usize {
        self.cursor.chunk_size()
    }

    pub fn total_tokens(&self) -> usize {
        self.tokens.len()
    }

    pub fn current_window(&self) -> ChunkWindow {
        self.cursor.window(&self.tokens)
    }

    pub fn current_tokens(&self) -> &[Token] {
        self.cursor.current_tokens(&self.tokens)
    }

    /// Dwell time for the chunk under the cursor, from the current WPM.
    pub fn current_chunk_delay(&self) -> Duration {
        let seconds = chunk_delay(
            self.current_tokens(),
            base_delay_seconds(self.wpm),
            self.chunk_size(),
            &self.config,
        );
        Duration::from_secs_f64(seconds.max(0.0))
    }

    /// Fraction of tokens before the cursor, in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        if self.tokens.is_empty() {
            return 0.0;
        }
        (self.current_index() as f64 / self.tokens.len() as f64).min(1.0)
    }

    pub fn time_remaining(&self) -> TimeRemaining {
        let remaining = self.tokens.len().saturating_sub(self.current_index());
        time_remaining(remaining, self.chunk_size(), self.wpm)
    }

    pub fn is_finished(&self) -> bool {
        self.cursor.is_finished(self.tokens.len())
    }

    pub fn advance(&mut self) {
        self.cursor.advance();
    }

    pub fn reset(&mut self) {
        self.cursor.reset();
    }

    pub fn set_wpm(&mut self, wpm: u32) {
        self.wpm = self.config.clamp_wpm(wpm);
    }

    pub fn adjust_wpm(&mut self, delta: i32) {
        let new_wpm = (self.wpm as i64 + delta as i64).max(0) as u32;
        self.set_wpm(new_wpm);
    }

    pub fn set_chunk_size(&mut self, chunk_size: usize) {
        let chunk_size = self.config.sanitize_chunk_size(chunk_size);
        self.cursor.set_chunk_size(chunk_size);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reading::tokenizer::tokenize_text;

    fn state_for(text: &str) -> ReadingState {
        ReadingState::new_with_default_config(tokenize_text(text))
    }

    #[test]
    fn test_new_with_default_config() {
        let state = state_for("test");
        assert_eq!(state.wpm, 300);
        assert_eq!(state.current_index(), 0);
        assert_eq!(state.chunk_size(), 1);
    }

    #[test]
    fn test_new_clamps_config_values() {
        let config = TimingConfig {
            wpm: 20,
            chunk_size: 12,
            ..TimingConfig::default()
        };
        let state = ReadingState::new(tokenize_text("a b"), config);
        assert_eq!(state.wpm, 100);
        assert_eq!(state.chunk_size(), 1);
    }

    #[test]
    fn test_current_window() {
        let state = state_for("Hello, world!");
        let window = state.current_window();
        assert_eq!(window.previous, "");
        assert_eq!(window.current, "Hello");
        assert_eq!(window.next, ",");
    }

    #[test]
    fn test_advance() {
        let mut state = state_for("hello world");
        state.advance();
        assert_eq!(state.current_index(), 1);
        assert_eq!(state.current_window().current, "world");
        state.advance();
        assert!(state.is_finished());
    }

    #[test]
    fn test_current_chunk_delay() {
        let mut state = state_for("a");
        state.set_wpm(600);
        let delay = state.current_chunk_delay().as_secs_f64();
        assert!((delay - 0.1).abs() < 1e-6, "got {}", delay);
    }

    #[test]
    fn test_dynamic_wpm_changes_delay() {
        let mut state = state_for("hello");
        let at_300 = state.current_chunk_delay();
        state.adjust_wpm(300);
        assert_eq!(state.wpm, 600);
        let at_600 = state.current_chunk_delay();
        assert!(at_600 < at_300);
    }

    #[test]
    fn test_adjust_wpm_clamps() {
        let mut state = state_for("test");
        state.adjust_wpm(-1000);
        assert_eq!(state.wpm, 100);
        state.adjust_wpm(5000);
        assert_eq!(state.wpm, 1000);
    }

    #[test]
    fn test_set_chunk_size_invalid_defaults_to_one() {
        let mut state = state_for("a b c");
        state.set_chunk_size(3);
        assert_eq!(state.chunk_size(), 3);
        state.set_chunk_size(0);
        assert_eq!(state.chunk_size(), 1);
    }

    #[test]
    fn test_progress_and_time_remaining() {
        let mut state = state_for("one two three four");
        state.set_wpm(120);
        assert_eq!(state.progress(), 0.0);
        // (4 / 1) * (60 / 120) = 2.0
        assert_eq!(state.time_remaining().to_string(), "2:00");
        state.advance();
        state.advance();
        assert_eq!(state.progress(), 0.5);
        assert_eq!(state.time_remaining().to_string(), "1:00");
    }

    #[test]
    fn test_progress_empty_tokens() {
        let state = ReadingState::new_with_default_config(vec![]);
        assert_eq!(state.progress(), 0.0);
        assert!(state.is_finished());
    }

    #[test]
    fn test_reset() {
        let mut state = state_for("a b c");
        state.advance();
        state.reset();
        assert_eq!(state.current_index(), 0);
    }
}
