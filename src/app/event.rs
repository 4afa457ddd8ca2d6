/// Application events
#[derive(Debug, PartialEq, Clone)]
pub enum AppEvent {
    LoadFile(String),
    LoadClipboard,
    /// Read text typed straight into the command deck.
    ReadText(String),
    /// Start a new session, or continue a paused one.
    Start,
    SetWpm(String),
    SetChunkSize(String),
    SetTheme(String),
    Quit,
    Help,
    InvalidCommand(String),
}
