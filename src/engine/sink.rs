//! Render Sink seam between the pacing engine and whatever presents it.
//!
//! The engine only ever calls into a [`RenderSink`]; it never reads back
//! from it. [`ChannelSink`] turns those calls into [`PlaybackEvent`]s so
//! the presentation thread can drain them at its own pace.

use crate::reading::{ChunkWindow, TimeRemaining};
use std::fmt;
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Mutex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    #[default]
    Idle,
    Running,
    Paused,
    Stopped,
}

impl PlaybackState {
    /// Running or Paused: a session exists and owns a run loop.
    pub fn is_active(self) -> bool {
        matches!(self, PlaybackState::Running | PlaybackState::Paused)
    }
}

impl fmt::Display for PlaybackState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PlaybackState::Idle => "idle",
            PlaybackState::Running => "running",
            PlaybackState::Paused => "paused",
            PlaybackState::Stopped => "stopped",
        };
        f.write_str(label)
    }
}

/// Why a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    User,
    Finished,
}

pub trait RenderSink: Send + Sync {
    fn on_chunk_update(&self, window: &ChunkWindow);

    /// Fraction of the text already passed, in `[0, 1]`.
    fn on_progress(&self, fraction: f64);

    fn on_time_remaining(&self, remaining: TimeRemaining);

    fn on_state_change(&self, state: PlaybackState);

    fn on_session_end(&self, _reason: StopReason) {}
}

#[derive(Debug, Clone, PartialEq)]
pub enum PlaybackEvent {
    ChunkUpdate(ChunkWindow),
    Progress(f64),
    TimeRemaining(TimeRemaining),
    StateChange(PlaybackState),
    SessionEnded(StopReason),
}

/// Forwards every callback as a [`PlaybackEvent`] over an mpsc channel.
pub struct ChannelSink {
    sender: Mutex<Sender<PlaybackEvent>>,
}

impl ChannelSink {
    pub fn new() -> (Self, Receiver<PlaybackEvent>) {
        let (sender, receiver) = mpsc::channel();
        (
            Self {
                sender: Mutex::new(sender),
            },
            receiver,
        )
    }

    fn send(&self, event: PlaybackEvent) {
        // A dropped receiver just means nobody is watching anymore.
        if let Ok(sender) = self.sender.lock() {
            let _ = sender.send(event);
        }
    }
}

impl RenderSink for ChannelSink {
    fn on_chunk_update(&self, window: &ChunkWindow) {
        self.send(PlaybackEvent::ChunkUpdate(window.clone()));
    }

    fn on_progress(&self, fraction: f64) {
        self.send(PlaybackEvent::Progress(fraction));
    }

    fn on_time_remaining(&self, remaining: TimeRemaining) {
        self.send(PlaybackEvent::TimeRemaining(remaining));
    }

    fn on_state_change(&self, state: PlaybackState) {
        self.send(PlaybackEvent::StateChange(state));
    }

    fn on_session_end(&self, reason: StopReason) {
        self.send(PlaybackEvent::SessionEnded(reason));
    }
}

/// Discards everything.
pub struct NullSink;

impl RenderSink for NullSink {
    fn on_chunk_update(&self, _window: &ChunkWindow) {}
    fn on_progress(&self, _fraction: f64) {}
    fn on_time_remaining(&self, _remaining: TimeRemaining) {}
    fn on_state_change(&self, _state: PlaybackState) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_sink_forwards_events_in_order() {
        let (sink, receiver) = ChannelSink::new();
        let window = ChunkWindow {
            previous: String::new(),
            current: "Hello".to_string(),
            next: ",".to_string(),
        };

        sink.on_state_change(PlaybackState::Running);
        sink.on_chunk_update(&window);
        sink.on_progress(0.25);
        sink.on_time_remaining(TimeRemaining {
            minutes: 1,
            seconds: 5,
        });
        sink.on_session_end(StopReason::Finished);

        let events: Vec<PlaybackEvent> = receiver.try_iter().collect();
        assert_eq!(
            events,
            vec![
                PlaybackEvent::StateChange(PlaybackState::Running),
                PlaybackEvent::ChunkUpdate(window),
                PlaybackEvent::Progress(0.25),
                PlaybackEvent::TimeRemaining(TimeRemaining {
                    minutes: 1,
                    seconds: 5
                }),
                PlaybackEvent::SessionEnded(StopReason::Finished),
            ]
        );
    }

    #[test]
    fn test_channel_sink_ignores_dropped_receiver() {
        let (sink, receiver) = ChannelSink::new();
        drop(receiver);
        sink.on_progress(1.0);
    }

    #[test]
    fn test_playback_state_is_active() {
        assert!(PlaybackState::Running.is_active());
        assert!(PlaybackState::Paused.is_active());
        assert!(!PlaybackState::Idle.is_active());
        assert!(!PlaybackState::Stopped.is_active());
    }
}
