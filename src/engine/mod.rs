pub mod config;
pub mod controller;
pub mod error;
mod scheduler;
pub mod sink;

pub use config::{Config, DelayMode, TimingConfig};
pub use controller::PlaybackController;
pub use error::{ConfigError, PlaybackError, StartError};
pub use sink::{ChannelSink, NullSink, PlaybackEvent, PlaybackState, RenderSink, StopReason};
