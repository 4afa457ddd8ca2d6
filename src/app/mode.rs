/// Which screen the terminal front-end shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppMode {
    /// Command deck: load text, tweak settings, start reading.
    #[default]
    Command,
    Reading,
    Paused,
    Quit,
}

impl AppMode {
    pub fn shows_reader(self) -> bool {
        matches!(self, AppMode::Reading | AppMode::Paused)
    }
}
