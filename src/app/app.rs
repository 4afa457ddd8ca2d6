use super::event::AppEvent;
use super::mode::AppMode;
use super::render_state::RenderState;
use crate::engine::{
    ChannelSink, Config, PlaybackController, PlaybackError, PlaybackEvent, PlaybackState,
    StopReason,
};
use crate::input::{ClipboardText, FileText, InlineText, TextSource};
use crate::reading::{ChunkWindow, TimeRemaining};
use crate::ui::theme::{Theme, THEME_NAMES};
use log::{info, warn};
use std::sync::mpsc::Receiver;
use std::sync::Arc;

pub const HELP_TEXT: &str = "Enter: start/continue | @file | @@ clipboard | :wpm N | :chunk N | :theme NAME | :q";

/// Front-end state: owns the playback controller and mirrors what its
/// render sink has published so far.
pub struct App {
    mode: AppMode,
    controller: PlaybackController,
    events: Receiver<PlaybackEvent>,
    source: Option<Box<dyn TextSource>>,
    window: ChunkWindow,
    progress: f64,
    time_remaining: TimeRemaining,
    theme: String,
    input: String,
    status: Option<String>,
}

impl App {
    pub fn new(config: &Config) -> Self {
        let (sink, events) = ChannelSink::new();
        Self {
            mode: AppMode::Command,
            controller: PlaybackController::new(config.timing.clone(), Arc::new(sink)),
            events,
            source: None,
            window: ChunkWindow::default(),
            progress: 0.0,
            time_remaining: TimeRemaining::zero(),
            theme: config.theme.clone(),
            input: String::new(),
            status: Some(HELP_TEXT.to_string()),
        }
    }

    pub fn mode(&self) -> AppMode {
        self.mode
    }

    pub fn controller(&self) -> &PlaybackController {
        &self.controller
    }

    pub fn set_source(&mut self, source: Box<dyn TextSource>) {
        self.source = Some(source);
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::LoadFile(path) => self.read_from(Box::new(FileText::new(path))),
            AppEvent::LoadClipboard => self.read_from(Box::new(ClipboardText)),
            AppEvent::ReadText(text) => self.read_from(Box::new(InlineText::new(text))),
            AppEvent::Start => {
                if self.controller.state() == PlaybackState::Paused {
                    self.controller.resume();
                } else {
                    self.start_reading();
                }
            }
            AppEvent::SetWpm(value) => match value.trim().parse::<u32>() {
                Ok(wpm) => {
                    let applied = self.controller.set_speed(wpm);
                    self.status = Some(format!("WPM: {}", applied));
                }
                Err(_) => {
                    warn!("rejected wpm input {:?}", value);
                    self.status = Some(format!("Invalid WPM: {}", value));
                }
            },
            AppEvent::SetChunkSize(value) => {
                let chunk_size = self.controller.config().parse_chunk_size(&value);
                let applied = self.controller.set_chunk_size(chunk_size);
                self.status = Some(format!("Words per display: {}", applied));
            }
            AppEvent::SetTheme(name) => {
                let name = name.trim().to_ascii_lowercase();
                if Theme::by_name(&name).is_some() {
                    self.status = Some(format!("Theme: {}", name));
                    self.theme = name;
                } else {
                    self.status = Some(format!(
                        "Unknown theme: {} (try {})",
                        name,
                        THEME_NAMES.join(", ")
                    ));
                }
            }
            AppEvent::Quit => {
                self.controller.stop();
                self.mode = AppMode::Quit;
            }
            AppEvent::Help => {
                self.status = Some(HELP_TEXT.to_string());
            }
            AppEvent::InvalidCommand(input) => {
                self.status = Some(format!("Unknown command: {}", input));
            }
        }
        self.drain_playback_events();
    }

    /// Keys while the reader is on screen.
    pub fn handle_keypress(&mut self, c: char) {
        match c {
            ' ' => {
                self.controller.toggle_pause();
            }
            's' => self.controller.stop(),
            'q' => self.handle_event(AppEvent::Quit),
            '+' | '=' => {
                let step = self.controller.config().wpm_step as i32;
                self.controller.adjust_wpm(step);
            }
            '-' | '_' => {
                let step = self.controller.config().wpm_step as i32;
                self.controller.adjust_wpm(-step);
            }
            '1'..='5' => {
                let chunk_size = c.to_digit(10).map(|d| d as usize).unwrap_or(1);
                self.controller.set_chunk_size(chunk_size);
            }
            _ => {}
        }
        self.drain_playback_events();
    }

    pub fn stop_reading(&mut self) {
        self.controller.stop();
        self.drain_playback_events();
    }

    /// Switches to `source` and starts it. While a session is live the
    /// current source is kept and the request is refused.
    fn read_from(&mut self, source: Box<dyn TextSource>) {
        if self.controller.state().is_active() {
            warn!("ignoring {} while a session is active", source.describe());
            self.status = Some(PlaybackError::AlreadyRunning.to_string());
            return;
        }
        self.set_source(source);
        self.start_reading();
    }

    pub fn start_reading(&mut self) {
        let Some(source) = self.source.as_mut() else {
            self.status = Some("Please enter or load some text first.".to_string());
            return;
        };

        match self.controller.start(&mut **source) {
            Ok(()) => {
                self.status = None;
                self.mode = AppMode::Reading;
            }
            Err(e) => {
                warn!("could not start reading: {}", e);
                self.status = Some(e.to_string());
            }
        }
        self.drain_playback_events();
    }

    /// Applies every event the run loop has published since the last call.
    pub fn drain_playback_events(&mut self) {
        while let Ok(event) = self.events.try_recv() {
            match event {
                PlaybackEvent::ChunkUpdate(window) => self.window = window,
                PlaybackEvent::Progress(fraction) => self.progress = fraction,
                PlaybackEvent::TimeRemaining(remaining) => self.time_remaining = remaining,
                PlaybackEvent::StateChange(state) => self.apply_state(state),
                PlaybackEvent::SessionEnded(reason) => {
                    self.window = ChunkWindow::default();
                    self.status = Some(match reason {
                        StopReason::Finished => "Finished.".to_string(),
                        StopReason::User => "Stopped.".to_string(),
                    });
                    info!("session ended: {:?}", reason);
                }
            }
        }
    }

    fn apply_state(&mut self, state: PlaybackState) {
        if self.mode == AppMode::Quit {
            return;
        }
        self.mode = match state {
            PlaybackState::Running => AppMode::Reading,
            PlaybackState::Paused => AppMode::Paused,
            PlaybackState::Idle | PlaybackState::Stopped => AppMode::Command,
        };
    }

    pub fn push_input(&mut self, c: char) {
        self.input.push(c);
    }

    pub fn pop_input(&mut self) {
        self.input.pop();
    }

    pub fn take_input(&mut self) -> String {
        std::mem::take(&mut self.input)
    }

    pub fn get_render_state(&self) -> RenderState {
        RenderState {
            mode: self.mode,
            window: self.window.clone(),
            progress: self.progress,
            time_remaining: self.time_remaining,
            wpm: self.controller.wpm(),
            chunk_size: self.controller.chunk_size(),
            theme: self.theme.clone(),
            input: self.input.clone(),
            status: self.status.clone(),
        }
    }
}
