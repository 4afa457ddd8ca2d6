use crate::app::mode::AppMode;
use crate::reading::{ChunkWindow, TimeRemaining};

/// Snapshot of everything the UI needs to draw one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderState {
    pub mode: AppMode,
    pub window: ChunkWindow,
    /// Fraction of the text passed, `0.0..=1.0`
    pub progress: f64,
    pub time_remaining: TimeRemaining,
    pub wpm: u32,
    pub chunk_size: usize,
    pub theme: String,
    pub input: String,
    pub status: Option<String>,
}

impl RenderState {
    /// Create an empty render state for when no text is loaded
    pub fn empty(mode: AppMode) -> Self {
        Self {
            mode,
            window: ChunkWindow::default(),
            progress: 0.0,
            time_remaining: TimeRemaining::zero(),
            wpm: 0,
            chunk_size: 1,
            theme: String::new(),
            input: String::new(),
            status: None,
        }
    }

    /// `(filled, total)` cells for a progress bar of `width` cells.
    pub fn progress_cells(&self, width: usize) -> (usize, usize) {
        let filled = (self.progress.clamp(0.0, 1.0) * width as f64) as usize;
        (filled.min(width), width)
    }
}
