//! Background run loop that paces chunks onto a [`RenderSink`].
//!
//! Playback state, WPM, chunk size and the published position live in a
//! single mutex-guarded [`Shared`] block. The controller mutates it from the
//! presentation thread and signals the condition variable; the loop reads a
//! fresh snapshot before every chunk and sleeps on the same condition
//! variable, so pause and stop wake it immediately instead of waiting out
//! the current dwell.
//!
//! Every sink callback is made while the lock is held, so observers see one
//! total order of events: no chunk update arrives after a `Paused` or
//! `Stopped` notification. Sinks must never call back into the controller.

use crate::engine::sink::{PlaybackState, RenderSink, StopReason};
use crate::reading::{ReadingState, TimeRemaining};
use log::{debug, info};
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Shared {
    pub state: PlaybackState,
    pub wpm: u32,
    pub chunk_size: usize,
    /// Index of the next token to display.
    pub position: usize,
    pub total_tokens: usize,
}

pub(crate) struct Control {
    shared: Mutex<Shared>,
    wake: Condvar,
}

impl Control {
    pub fn new(wpm: u32, chunk_size: usize) -> Self {
        Self {
            shared: Mutex::new(Shared {
                state: PlaybackState::Idle,
                wpm,
                chunk_size,
                position: 0,
                total_tokens: 0,
            }),
            wake: Condvar::new(),
        }
    }

    /// Ignores poisoning: every field is a plain value.
    pub fn lock(&self) -> MutexGuard<'_, Shared> {
        self.shared.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn notify(&self) {
        self.wake.notify_all();
    }

    /// Locks the shared block, first blocking for as long as the session is
    /// paused.
    fn lock_unpaused(&self) -> MutexGuard<'_, Shared> {
        let guard = self.lock();
        self.wake
            .wait_while(guard, |shared| shared.state == PlaybackState::Paused)
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Sleeps for `delay`, waking early as soon as the state leaves `Running`.
    fn dwell(&self, delay: Duration) {
        let guard = self.lock();
        let _ = self
            .wake
            .wait_timeout_while(guard, delay, |shared| {
                shared.state == PlaybackState::Running
            })
            .unwrap_or_else(PoisonError::into_inner);
    }
}

/// Publishes the reset display state shared by user stops and natural
/// completion. Called with the lock held.
pub(crate) fn publish_session_end(sink: &dyn RenderSink, reason: StopReason) {
    sink.on_state_change(PlaybackState::Stopped);
    sink.on_progress(0.0);
    sink.on_time_remaining(TimeRemaining::zero());
    sink.on_session_end(reason);
}

/// Drives one session until it finishes or is stopped.
pub(crate) fn run_session(
    mut reading: ReadingState,
    control: Arc<Control>,
    sink: Arc<dyn RenderSink>,
) {
    info!(
        "reading session started: {} tokens, chunk size {}, {} wpm",
        reading.total_tokens(),
        reading.chunk_size(),
        reading.wpm
    );

    loop {
        let delay = {
            let mut shared = control.lock_unpaused();
            if shared.state != PlaybackState::Running {
                debug!("run loop exiting in state {}", shared.state);
                return;
            }

            if reading.is_finished() {
                shared.state = PlaybackState::Stopped;
                shared.position = 0;
                publish_session_end(sink.as_ref(), StopReason::Finished);
                shared.state = PlaybackState::Idle;
                sink.on_state_change(PlaybackState::Idle);
                control.notify();
                info!("reading session finished");
                return;
            }

            reading.set_wpm(shared.wpm);
            reading.set_chunk_size(shared.chunk_size);

            let window = reading.current_window();
            let delay = reading.current_chunk_delay();
            debug!(
                "chunk at {}/{}: {:?} for {:?}",
                reading.current_index(),
                reading.total_tokens(),
                window.current,
                delay
            );

            sink.on_chunk_update(&window);
            sink.on_progress(reading.progress());
            sink.on_time_remaining(reading.time_remaining());

            reading.advance();
            shared.position = reading.current_index().min(reading.total_tokens());
            delay
        };

        control.dwell(delay);
    }
}
