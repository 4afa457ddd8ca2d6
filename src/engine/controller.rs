use crate::engine::config::TimingConfig;
use crate::engine::error::{PlaybackError, StartError};
use crate::engine::scheduler::{publish_session_end, run_session, Control};
use crate::engine::sink::{PlaybackState, RenderSink, StopReason};
use crate::input::TextSource;
use crate::reading::{tokenize_text, ReadingState};
use log::{info, warn};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

/// Owns the reading session and its background run loop.
///
/// All methods are meant to be called from the presentation thread. Speed
/// and chunk-size changes are accepted in any state and apply from the next
/// chunk on.
pub struct PlaybackController {
    config: TimingConfig,
    control: Arc<Control>,
    sink: Arc<dyn RenderSink>,
    session: Option<JoinHandle<()>>,
}

impl PlaybackController {
    pub fn new(config: TimingConfig, sink: Arc<dyn RenderSink>) -> Self {
        let wpm = config.clamp_wpm(config.wpm);
        let chunk_size = config.sanitize_chunk_size(config.chunk_size);
        Self {
            config,
            control: Arc::new(Control::new(wpm, chunk_size)),
            sink,
            session: None,
        }
    }

    pub fn config(&self) -> &TimingConfig {
        &self.config
    }

    pub fn state(&self) -> PlaybackState {
        self.control.lock().state
    }

    /// Index of the next token the run loop will display.
    pub fn position(&self) -> usize {
        self.control.lock().position
    }

    pub fn total_tokens(&self) -> usize {
        self.control.lock().total_tokens
    }

    pub fn wpm(&self) -> u32 {
        self.control.lock().wpm
    }

    pub fn chunk_size(&self) -> usize {
        self.control.lock().chunk_size
    }

    /// Pulls text from `source` and starts reading it from the beginning.
    pub fn start(&mut self, source: &mut dyn TextSource) -> Result<(), StartError> {
        if self.state().is_active() {
            return Err(PlaybackError::AlreadyRunning.into());
        }
        let text = source.get_text()?;
        info!("starting session from {}", source.describe());
        self.start_text(&text)?;
        Ok(())
    }

    /// Starts reading `text` from the first token.
    pub fn start_text(&mut self, text: &str) -> Result<(), PlaybackError> {
        if self.state().is_active() {
            return Err(PlaybackError::AlreadyRunning);
        }

        let tokens = tokenize_text(text);
        if tokens.is_empty() {
            return Err(PlaybackError::EmptyText);
        }

        // A session that finished on its own may still be unwinding.
        self.reap_session();

        let total_tokens = tokens.len();
        let mut config = self.config.clone();
        {
            let mut shared = self.control.lock();
            config.wpm = shared.wpm;
            config.chunk_size = shared.chunk_size;
            shared.state = PlaybackState::Running;
            shared.position = 0;
            shared.total_tokens = total_tokens;
            self.sink.on_state_change(PlaybackState::Running);
        }

        let reading = ReadingState::new(tokens, config);
        let control = Arc::clone(&self.control);
        let sink = Arc::clone(&self.sink);
        self.session = Some(thread::spawn(move || run_session(reading, control, sink)));
        Ok(())
    }

    /// Returns `true` if the session went from Running to Paused.
    pub fn pause(&mut self) -> bool {
        self.transition(PlaybackState::Running, PlaybackState::Paused)
    }

    /// Returns `true` if the session went from Paused to Running.
    pub fn resume(&mut self) -> bool {
        self.transition(PlaybackState::Paused, PlaybackState::Running)
    }

    pub fn toggle_pause(&mut self) -> PlaybackState {
        if !self.pause() {
            self.resume();
        }
        self.state()
    }

    fn transition(&mut self, from: PlaybackState, to: PlaybackState) -> bool {
        let mut shared = self.control.lock();
        if shared.state != from {
            return false;
        }
        shared.state = to;
        self.sink.on_state_change(to);
        self.control.notify();
        info!("playback {} at token {}", to, shared.position);
        true
    }

    /// Halts the run loop and resets position, progress and time remaining.
    /// A no-op when nothing is running. The loop has exited when this returns.
    pub fn stop(&mut self) {
        {
            let mut shared = self.control.lock();
            if !shared.state.is_active() {
                drop(shared);
                self.reap_session();
                return;
            }
            shared.state = PlaybackState::Stopped;
            shared.position = 0;
            self.control.notify();
        }

        self.reap_session();

        let mut shared = self.control.lock();
        publish_session_end(self.sink.as_ref(), StopReason::User);
        shared.state = PlaybackState::Idle;
        self.sink.on_state_change(PlaybackState::Idle);
        info!("reading session stopped");
    }

    /// Sets the reading speed, clamped to the configured range. Returns the
    /// value actually applied.
    pub fn set_speed(&mut self, wpm: u32) -> u32 {
        let applied = self.config.clamp_wpm(wpm);
        if applied != wpm {
            warn!("wpm {} out of range, using {}", wpm, applied);
        }
        let mut shared = self.control.lock();
        shared.wpm = applied;
        self.control.notify();
        applied
    }

    pub fn adjust_wpm(&mut self, delta: i32) -> u32 {
        let current = self.wpm() as i64;
        let target = (current + delta as i64).clamp(0, u32::MAX as i64) as u32;
        self.set_speed(target)
    }

    /// Sets tokens per chunk; out-of-range values fall back to 1. Returns the
    /// value actually applied.
    pub fn set_chunk_size(&mut self, chunk_size: usize) -> usize {
        let applied = self.config.sanitize_chunk_size(chunk_size);
        if applied != chunk_size {
            warn!("chunk size {} out of range, using {}", chunk_size, applied);
        }
        let mut shared = self.control.lock();
        shared.chunk_size = applied;
        self.control.notify();
        applied
    }

    fn reap_session(&mut self) {
        if let Some(handle) = self.session.take() {
            if handle.join().is_err() {
                warn!("run loop panicked");
            }
        }
    }
}

impl Drop for PlaybackController {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::sink::{ChannelSink, NullSink, PlaybackEvent};
    use crate::input::InlineText;
    use std::sync::mpsc::Receiver;
    use std::time::Duration;

    fn controller_with_events(wpm: u32) -> (PlaybackController, Receiver<PlaybackEvent>) {
        let (sink, receiver) = ChannelSink::new();
        let config = TimingConfig {
            wpm,
            ..TimingConfig::default()
        };
        (PlaybackController::new(config, Arc::new(sink)), receiver)
    }

    fn next_chunk(receiver: &Receiver<PlaybackEvent>) -> String {
        loop {
            match receiver.recv_timeout(Duration::from_secs(5)) {
                Ok(PlaybackEvent::ChunkUpdate(window)) => return window.current,
                Ok(_) => continue,
                Err(e) => panic!("no chunk update: {}", e),
            }
        }
    }

    #[test]
    fn test_new_controller_is_idle() {
        let controller = PlaybackController::new(TimingConfig::default(), Arc::new(NullSink));
        assert_eq!(controller.state(), PlaybackState::Idle);
        assert_eq!(controller.position(), 0);
        assert_eq!(controller.wpm(), 300);
        assert_eq!(controller.chunk_size(), 1);
    }

    #[test]
    fn test_start_whitespace_only_fails() {
        let (mut controller, receiver) = controller_with_events(300);
        assert_eq!(controller.start_text("   "), Err(PlaybackError::EmptyText));
        assert_eq!(controller.state(), PlaybackState::Idle);
        assert!(receiver.try_recv().is_err());
    }

    #[test]
    fn test_start_from_source_reports_load_errors() {
        struct Broken;
        impl TextSource for Broken {
            fn get_text(&mut self) -> Result<String, crate::input::LoadError> {
                Err(crate::input::LoadError::Clipboard("unavailable".to_string()))
            }
            fn describe(&self) -> String {
                "broken".to_string()
            }
        }

        let mut controller = PlaybackController::new(TimingConfig::default(), Arc::new(NullSink));
        let result = controller.start(&mut Broken);
        assert!(matches!(result, Err(StartError::Load(_))));
        assert_eq!(controller.state(), PlaybackState::Idle);
    }

    #[test]
    fn test_start_while_running_fails() {
        let (mut controller, _receiver) = controller_with_events(100);
        controller.start_text("one two three four").unwrap();
        assert_eq!(
            controller.start_text("again"),
            Err(PlaybackError::AlreadyRunning)
        );
        controller.pause();
        assert!(matches!(
            controller.start(&mut InlineText::new("again")),
            Err(StartError::Playback(PlaybackError::AlreadyRunning))
        ));
        controller.stop();
    }

    #[test]
    fn test_stop_from_idle_is_noop() {
        let (mut controller, receiver) = controller_with_events(300);
        controller.stop();
        controller.stop();
        assert_eq!(controller.state(), PlaybackState::Idle);
        assert!(receiver.try_recv().is_err());
    }

    #[test]
    fn test_stop_resets_position_and_returns_to_idle() {
        let (mut controller, receiver) = controller_with_events(100);
        controller.start_text("one two three four five").unwrap();
        assert_eq!(next_chunk(&receiver), "one");

        controller.stop();
        assert_eq!(controller.state(), PlaybackState::Idle);
        assert_eq!(controller.position(), 0);

        let tail: Vec<PlaybackEvent> = receiver.try_iter().collect();
        assert!(tail.contains(&PlaybackEvent::SessionEnded(StopReason::User)));
        assert!(tail.contains(&PlaybackEvent::Progress(0.0)));
        assert_eq!(tail.last(), Some(&PlaybackEvent::StateChange(PlaybackState::Idle)));
        assert!(!tail
            .iter()
            .any(|event| matches!(event, PlaybackEvent::ChunkUpdate(_))));
    }

    #[test]
    fn test_pause_and_resume_transitions() {
        let (mut controller, _receiver) = controller_with_events(100);
        assert!(!controller.pause());
        assert!(!controller.resume());

        controller.start_text("one two three").unwrap();
        assert!(controller.pause());
        assert_eq!(controller.state(), PlaybackState::Paused);
        assert!(!controller.pause());
        assert!(controller.resume());
        assert_eq!(controller.state(), PlaybackState::Running);
        assert_eq!(controller.toggle_pause(), PlaybackState::Paused);
        assert_eq!(controller.toggle_pause(), PlaybackState::Running);
        controller.stop();
    }

    #[test]
    fn test_set_speed_clamps() {
        let mut controller = PlaybackController::new(TimingConfig::default(), Arc::new(NullSink));
        assert_eq!(controller.set_speed(50), 100);
        assert_eq!(controller.set_speed(2000), 1000);
        assert_eq!(controller.set_speed(420), 420);
        assert_eq!(controller.wpm(), 420);
        assert_eq!(controller.adjust_wpm(-25), 395);
        assert_eq!(controller.adjust_wpm(-5000), 100);
    }

    #[test]
    fn test_set_chunk_size_defaults_invalid_to_one() {
        let mut controller = PlaybackController::new(TimingConfig::default(), Arc::new(NullSink));
        assert_eq!(controller.set_chunk_size(4), 4);
        assert_eq!(controller.chunk_size(), 4);
        assert_eq!(controller.set_chunk_size(0), 1);
        assert_eq!(controller.set_chunk_size(6), 1);
    }

    #[test]
    fn test_drop_stops_running_session() {
        let (mut controller, receiver) = controller_with_events(100);
        controller.start_text("one two three four five").unwrap();
        assert_eq!(next_chunk(&receiver), "one");
        drop(controller);

        let tail: Vec<PlaybackEvent> = receiver.try_iter().collect();
        assert!(tail.contains(&PlaybackEvent::SessionEnded(StopReason::User)));
    }
}
