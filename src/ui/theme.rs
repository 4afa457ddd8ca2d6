use ratatui::style::Color;

pub const THEME_NAMES: [&str; 3] = ["dark", "light", "sepia"];

/// Colour palette for the reader and command deck.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub accent: Color,
    pub dimmed: Color,
    pub surface: Color,
    pub progress: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::dark()
    }
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            background: Color::Rgb(0x2E, 0x34, 0x40),
            text: Color::Rgb(0xD8, 0xDE, 0xE9),
            accent: Color::Rgb(0x88, 0xC0, 0xD0),
            dimmed: Color::Rgb(0x4C, 0x56, 0x6A),
            surface: Color::Rgb(0x3B, 0x42, 0x52),
            progress: Color::Rgb(0x88, 0xC0, 0xD0),
        }
    }

    pub fn light() -> Self {
        Self {
            background: Color::Rgb(0xEC, 0xEF, 0xF4),
            text: Color::Rgb(0x2E, 0x34, 0x40),
            accent: Color::Rgb(0x88, 0xC0, 0xD0),
            dimmed: Color::Rgb(0x4C, 0x56, 0x6A),
            surface: Color::Rgb(0xE6, 0xE6, 0xE6),
            progress: Color::Rgb(0x2E, 0x34, 0x40),
        }
    }

    pub fn sepia() -> Self {
        Self {
            background: Color::Rgb(0xF0, 0xE6, 0xD2),
            text: Color::Rgb(0x2E, 0x34, 0x30),
            accent: Color::Rgb(0xA0, 0x52, 0x2D),
            dimmed: Color::Rgb(0x6B, 0x6B, 0x6B),
            surface: Color::Rgb(0xD2, 0xB4, 0x8C),
            progress: Color::Rgb(0x2E, 0x34, 0x30),
        }
    }

    /// Looks up a palette by name, case-insensitively.
    pub fn by_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "dark" => Some(Self::dark()),
            "light" => Some(Self::light()),
            "sepia" => Some(Self::sepia()),
            _ => None,
        }
    }

    /// Like [`Theme::by_name`], falling back to dark for unknown names.
    pub fn named(name: &str) -> Self {
        Self::by_name(name).unwrap_or_default()
    }
}
