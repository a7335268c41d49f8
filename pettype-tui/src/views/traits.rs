//! Trait implemented by every screen view.

use ratatui::{Frame, layout::Rect};

use crate::App;

/// A view that renders one quiz screen.
pub trait ViewRenderer {
    /// Render the view into `area`.
    fn render(&self, frame: &mut Frame, area: Rect, app: &App);

    /// Title shown in the view border.
    fn title(&self) -> &str;
}
