//! Result view - the resolved pet and its write-up.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use pettype_core::{ResultEntry, TypeCode};

use super::traits::ViewRenderer;
use crate::{App, Theme};

/// Lines making up the result body.
pub fn result_lines<'a>(entry: &'a ResultEntry, code: TypeCode, theme: &Theme) -> Vec<Line<'a>> {
    let heading = theme.bold.fg(theme.accent);
    let mut lines = vec![
        Line::from(Span::styled(
            entry.title.as_str(),
            heading.add_modifier(Modifier::UNDERLINED),
        )),
        Line::from(Span::styled(format!("Type {code}"), theme.dim)),
    ];
    if !entry.hashtags.is_empty() {
        lines.push(Line::from(Span::styled(
            entry.hashtags.join(" "),
            Style::default().fg(theme.success),
        )));
    }
    lines.push(Line::from(""));

    for bullet in &entry.description {
        lines.push(Line::from(format!("• {bullet}")));
    }

    push_list(&mut lines, "Likes", entry.likes.as_deref(), heading);
    push_list(&mut lines, "Dislikes", entry.dislikes.as_deref(), heading);

    if let Some(matches) = &entry.matches {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("Best match", heading)));
        lines.push(Line::from(vec![
            Span::styled(matches.best.name.as_str(), Style::default().fg(theme.success)),
            Span::raw(": "),
            Span::raw(matches.best.description.as_str()),
        ]));
        lines.push(Line::from(Span::styled("Worst match", heading)));
        lines.push(Line::from(vec![
            Span::styled(matches.worst.name.as_str(), Style::default().fg(theme.warning)),
            Span::raw(": "),
            Span::raw(matches.worst.description.as_str()),
        ]));
    }

    if let Some(illustration) = &entry.illustration {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("Illustration: {illustration}"),
            theme.italic,
        )));
    }

    lines
}

fn push_list<'a>(
    lines: &mut Vec<Line<'a>>,
    heading: &'a str,
    items: Option<&'a [String]>,
    style: Style,
) {
    let Some(items) = items else {
        return;
    };
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(heading, style)));
    for item in items {
        lines.push(Line::from(format!("  - {item}")));
    }
}

/// Largest scroll offset that still leaves text in a bordered `area`.
///
/// Wrapping is estimated by display width, so word-wrapped text may run a
/// line or two longer.
pub fn max_scroll(lines: &[Line], area: Rect) -> u16 {
    let width = usize::from(area.width.saturating_sub(2)).max(1);
    let height = usize::from(area.height.saturating_sub(2));
    let rows: usize = lines.iter().map(|line| line.width().div_ceil(width).max(1)).sum();
    u16::try_from(rows.saturating_sub(height)).unwrap_or(u16::MAX)
}

#[derive(Debug, Clone, Default)]
pub struct ResultView;

impl ViewRenderer for ResultView {
    fn render(&self, frame: &mut Frame, area: Rect, app: &App) {
        let (Some(code), Some(entry)) = (app.controller.state().resolved(), app.controller.result())
        else {
            return;
        };

        let lines = result_lines(entry, code, &app.theme);
        let limit = max_scroll(&lines, area);
        app.scroll_limit.set(limit);

        let paragraph = Paragraph::new(lines)
            .style(Style::default().fg(app.theme.fg))
            .wrap(Wrap { trim: false })
            .scroll((app.scroll.min(limit), 0))
            .block(
                Block::default()
                    .title(self.title())
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(app.theme.border)),
            );
        frame.render_widget(paragraph, area);
    }

    fn title(&self) -> &str {
        "Your pet"
    }
}
