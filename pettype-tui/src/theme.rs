//! Dark and light themes for the pettype TUI.

use std::fmt;
use std::str::FromStr;

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

/// Which palette is active. Toggled at runtime, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Dark => "dark",
            ThemeMode::Light => "light",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dark" => Ok(ThemeMode::Dark),
            "light" => Ok(ThemeMode::Light),
            other => Err(format!("unknown theme '{other}' (expected 'dark' or 'light')")),
        }
    }
}

/// Colors and text styles used by every view.
#[derive(Debug, Clone)]
pub struct Theme {
    pub mode: ThemeMode,

    // Base colors
    pub bg: Color,
    pub fg: Color,
    pub accent: Color,
    pub success: Color,
    pub warning: Color,
    pub muted: Color,

    // UI element colors
    pub border: Color,
    pub selection: Color,
    pub gauge: Color,

    // Text styles
    pub bold: Style,
    pub dim: Style,
    pub italic: Style,
}

impl Theme {
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => dark(),
            ThemeMode::Light => light(),
        }
    }

    /// The other palette.
    pub fn toggled(&self) -> Self {
        Self::for_mode(self.mode.toggled())
    }

    /// Base style: theme foreground on theme background.
    pub fn base(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }
}

impl Default for Theme {
    fn default() -> Self {
        dark()
    }
}

fn styles(fg: Color) -> (Style, Style, Style) {
    (
        Style::default().fg(fg).add_modifier(Modifier::BOLD),
        Style::default().fg(fg).add_modifier(Modifier::DIM),
        Style::default().fg(fg).add_modifier(Modifier::ITALIC),
    )
}

/// Warm dark palette.
pub fn dark() -> Theme {
    let fg = Color::Rgb(238, 232, 222); // #eee8de
    let (bold, dim, italic) = styles(fg);

    Theme {
        mode: ThemeMode::Dark,
        bg: Color::Rgb(28, 26, 30), // #1c1a1e
        fg,
        accent: Color::Rgb(255, 170, 92),   // #ffaa5c
        success: Color::Rgb(126, 214, 146), // #7ed692
        warning: Color::Rgb(240, 120, 120), // #f07878
        muted: Color::Rgb(140, 134, 146),   // #8c8692
        border: Color::Rgb(70, 64, 76),     // #46404c
        selection: Color::Rgb(62, 48, 40),  // #3e3028
        gauge: Color::Rgb(255, 170, 92),    // #ffaa5c
        bold,
        dim,
        italic,
    }
}

/// Paper-white light palette.
pub fn light() -> Theme {
    let fg = Color::Rgb(40, 36, 44); // #28242c
    let (bold, dim, italic) = styles(fg);

    Theme {
        mode: ThemeMode::Light,
        bg: Color::Rgb(250, 247, 240), // #faf7f0
        fg,
        accent: Color::Rgb(214, 104, 24),    // #d66818
        success: Color::Rgb(46, 140, 74),    // #2e8c4a
        warning: Color::Rgb(196, 52, 52),    // #c43434
        muted: Color::Rgb(120, 114, 126),    // #78727e
        border: Color::Rgb(206, 198, 186),   // #cec6ba
        selection: Color::Rgb(255, 226, 196), // #ffe2c4
        gauge: Color::Rgb(214, 104, 24),     // #d66818
        bold,
        dim,
        italic,
    }
}
