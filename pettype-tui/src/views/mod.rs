//! One view per quiz screen.

mod loading;
mod quiz;
mod result;
mod start;
mod traits;

use pettype_core::Screen;

pub use loading::LoadingView;
pub use quiz::QuizView;
pub use result::ResultView;
pub use start::StartView;
pub use traits::ViewRenderer;

/// Renderer for `screen`.
pub fn view_for(screen: Screen) -> Box<dyn ViewRenderer> {
    match screen {
        Screen::Start => Box::new(StartView),
        Screen::Quiz => Box::new(QuizView),
        Screen::Loading => Box::new(LoadingView),
        Screen::Result => Box::new(ResultView),
    }
}
