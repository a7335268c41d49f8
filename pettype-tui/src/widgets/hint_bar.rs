//! Key hint bar shown along the bottom of every screen.
//!
//! Lists the keys that do something on the current screen, followed by the
//! latest status message (e.g. "Copied to clipboard").

use pettype_core::Screen;
use ratatui::{
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::Theme;

/// A key and what it does.
pub type Hint = (&'static str, &'static str);

/// Single-line bar of key hints plus an optional status message.
#[derive(Debug, Clone, Default)]
pub struct HintBarWidget {
    pub hints: Vec<Hint>,
    pub status: Option<String>,
}

impl HintBarWidget {
    /// Hints for the keys bound on `screen`.
    pub fn for_screen(screen: Screen) -> Self {
        let mut hints: Vec<Hint> = match screen {
            Screen::Start => vec![("Enter", "start")],
            Screen::Quiz => vec![("j/k", "move"), ("Enter", "choose"), ("1-9", "pick")],
            Screen::Loading => vec![],
            Screen::Result => vec![("j/k", "scroll"), ("r", "restart"), ("s", "share")],
        };
        hints.push(("t", "theme"));
        hints.push(("q", "quit"));
        Self {
            hints,
            status: None,
        }
    }

    #[must_use]
    pub fn with_status(mut self, status: Option<String>) -> Self {
        self.status = status;
        self
    }

    pub fn to_paragraph(&self, theme: &Theme) -> Paragraph<'_> {
        let mut spans = Vec::new();
        for (i, (key, label)) in self.hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(*key, Style::default().fg(theme.accent)));
            spans.push(Span::styled(format!(" {label}"), Style::default().fg(theme.muted)));
        }
        if let Some(status) = &self.status {
            spans.push(Span::raw("   "));
            spans.push(Span::styled(status.as_str(), Style::default().fg(theme.success)));
        }
        Paragraph::new(Line::from(spans)).style(theme.base())
    }
}
