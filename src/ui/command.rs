//! Command parsing for the TUI command deck
//!
//! Parses user input in Command mode, supporting:
//! - empty line → start reading (or continue a paused session)
//! - `:q` or `:quit` → Quit command
//! - `:h` or `:help` → Help command
//! - `:wpm N` → set reading speed
//! - `:chunk N` → set words per chunk
//! - `:theme NAME` → switch colour theme
//! - `@filename.txt` → Load file command
//! - `@@` → Load clipboard
//! - anything else → read the typed text itself

use crate::app::AppEvent;

/// Commands that can be parsed from command deck input
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Start,
    Quit,
    Help,
    Wpm(String),
    Chunk(String),
    Theme(String),
    LoadFile(String),
    LoadClipboard,
    ReadText(String),
    Unknown(String),
}

/// Parse command deck input string into a Command
pub fn parse_command(input: &str) -> Command {
    let input = input.trim();

    if input.is_empty() {
        return Command::Start;
    }

    // Handle system commands starting with ':'
    if let Some(cmd) = input.strip_prefix(':') {
        let (name, argument) = match cmd.split_once(char::is_whitespace) {
            Some((name, argument)) => (name, argument.trim()),
            None => (cmd, ""),
        };
        match (name, argument) {
            ("q" | "quit", "") => Command::Quit,
            ("h" | "help", "") => Command::Help,
            ("wpm" | "w", arg) if !arg.is_empty() => Command::Wpm(arg.to_string()),
            ("chunk" | "c", arg) if !arg.is_empty() => Command::Chunk(arg.to_string()),
            ("theme" | "t", arg) if !arg.is_empty() => Command::Theme(arg.to_string()),
            _ => Command::Unknown(input.to_string()),
        }
    } else if let Some(rest) = input.strip_prefix('@') {
        let filename = rest.trim();
        if filename.is_empty() || filename == "@" {
            Command::LoadClipboard
        } else {
            Command::LoadFile(filename.to_string())
        }
    } else {
        Command::ReadText(input.to_string())
    }
}

/// Convert a parsed command into an AppEvent
///
/// This is the translation layer between command deck input and App core.
pub fn command_to_app_event(command: Command) -> AppEvent {
    match command {
        Command::Start => AppEvent::Start,
        Command::Quit => AppEvent::Quit,
        Command::Help => AppEvent::Help,
        Command::Wpm(value) => AppEvent::SetWpm(value),
        Command::Chunk(value) => AppEvent::SetChunkSize(value),
        Command::Theme(name) => AppEvent::SetTheme(name),
        Command::LoadFile(path) => AppEvent::LoadFile(path),
        Command::LoadClipboard => AppEvent::LoadClipboard,
        Command::ReadText(text) => AppEvent::ReadText(text),
        Command::Unknown(input) => AppEvent::InvalidCommand(input),
    }
}
