//! Start view - the landing screen.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::traits::ViewRenderer;
use crate::App;

#[derive(Debug, Clone, Default)]
pub struct StartView;

impl ViewRenderer for StartView {
    fn render(&self, frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let block = Block::default()
            .title(self.title())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [_, body, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(7),
            Constraint::Fill(1),
        ])
        .areas(inner);

        let questions = app.controller.questions().len();
        let lines = vec![
            Line::from(Span::styled("Which pet are you?", theme.bold.fg(theme.accent))),
            Line::from(""),
            Line::from(Span::styled(
                format!("Answer {questions} quick questions and meet your inner animal."),
                Style::default().fg(theme.fg),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", theme.dim),
                Span::styled("Enter", theme.bold),
                Span::styled(" to start", theme.dim),
            ]),
        ];

        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, body);
    }

    fn title(&self) -> &str {
        "pettype"
    }
}
