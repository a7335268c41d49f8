//! Quiz view - progress, the current prompt and its options.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

use super::traits::ViewRenderer;
use crate::App;

#[derive(Debug, Clone, Default)]
pub struct QuizView;

impl ViewRenderer for QuizView {
    fn render(&self, frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let Some(question) = app.controller.current_question() else {
            return;
        };
        let index = app.controller.state().question_index();
        let total = app.controller.questions().len();

        let [gauge_area, prompt_area, options_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Min(0),
        ])
        .areas(area);

        let gauge = Gauge::default()
            .block(
                Block::default()
                    .title(self.title())
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.border)),
            )
            .gauge_style(Style::default().fg(theme.gauge).bg(theme.bg))
            .ratio(app.controller.progress().clamp(0.0, 1.0))
            .label(format!("Question {} of {}", index + 1, total));
        frame.render_widget(gauge, gauge_area);

        let prompt = Paragraph::new(Line::from(Span::styled(
            question.prompt.as_str(),
            theme.bold,
        )))
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::NONE));
        frame.render_widget(prompt, prompt_area);

        let items: Vec<ListItem> = question
            .options
            .iter()
            .enumerate()
            .map(|(i, option)| {
                let selected = i == app.cursor;
                let marker = if selected { "▸ " } else { "  " };
                let style = if selected {
                    Style::default()
                        .fg(theme.accent)
                        .bg(theme.selection)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(theme.fg)
                };
                ListItem::new(Line::from(vec![
                    Span::styled(marker, style),
                    Span::styled(format!("{}. ", i + 1), theme.dim),
                    Span::styled(option.text.as_str(), style),
                ]))
            })
            .collect();

        let list = List::new(items).block(
            Block::default()
                .title("Options")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border)),
        );
        frame.render_widget(list, options_area);
    }

    fn title(&self) -> &str {
        "Quiz"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::{buffer_text, test_app};
    use ratatui::{Terminal, backend::TestBackend};

    #[tokio::test]
    async fn quiz_view_shows_prompt_and_numbered_options() {
        let mut app = test_app();
        app.controller.start();
        let prompt = app.controller.current_question().unwrap().prompt.clone();

        let mut terminal = Terminal::new(TestBackend::new(100, 24)).unwrap();
        terminal
            .draw(|f| QuizView.render(f, f.area(), &app))
            .unwrap();

        let content = buffer_text(terminal.backend().buffer());
        assert!(content.contains(&prompt));
        assert!(content.contains("1. "));
        assert!(content.contains("2. "));
        assert!(content.contains("Question 1 of"));
    }

    #[test]
    fn quiz_view_outside_quiz_draws_nothing() {
        let app = test_app();
        let mut terminal = Terminal::new(TestBackend::new(40, 10)).unwrap();
        terminal
            .draw(|f| QuizView.render(f, f.area(), &app))
            .unwrap();
        assert!(buffer_text(terminal.backend().buffer()).trim().is_empty());
    }
}
