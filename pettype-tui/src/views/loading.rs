//! Loading view - bouncing dots while the result is prepared.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::traits::ViewRenderer;
use crate::App;

const DOTS: usize = 3;
const MAX_HEIGHT: u16 = 2;
/// Height of a dot over one bounce, one entry per tick.
const BOUNCE: [u16; 6] = [0, 1, 2, 2, 1, 0];
/// Ticks between neighbouring dots.
const PHASE: u64 = 2;

/// Height above the baseline of each dot at `tick`.
pub fn dot_heights(tick: u64) -> [u16; DOTS] {
    let mut heights = [0; DOTS];
    for (i, h) in heights.iter_mut().enumerate() {
        let step = tick.wrapping_add(i as u64 * PHASE) % BOUNCE.len() as u64;
        *h = BOUNCE[step as usize];
    }
    heights
}

#[derive(Debug, Clone, Default)]
pub struct LoadingView;

impl ViewRenderer for LoadingView {
    fn render(&self, frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let heights = dot_heights(app.ticks);

        let mut lines: Vec<Line> = (0..=MAX_HEIGHT)
            .rev()
            .map(|row| {
                let spans: Vec<Span> = heights
                    .iter()
                    .flat_map(|h| {
                        let dot = if *h == row { "●" } else { " " };
                        [
                            Span::styled(dot, theme.bold.fg(theme.accent)),
                            Span::raw("  "),
                        ]
                    })
                    .collect();
                Line::from(spans)
            })
            .collect();
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("Sniffing out your pet...", theme.italic)));

        let [_, body, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(lines.len() as u16),
            Constraint::Fill(1),
        ])
        .areas(area);

        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), body);
    }

    fn title(&self) -> &str {
        "Loading"
    }
}
