//! Terminal UI for pettype.
//!
//! Renders the quiz screens with ratatui and crossterm and forwards key
//! presses to a [`pettype_core::SessionController`].

mod app;
mod clipboard;
mod keybindings;
mod terminal;
mod theme;
mod views;
mod widgets;

pub use app::App;
pub use clipboard::{ClipboardError, copy_to_clipboard};
pub use keybindings::{Action, KeyBindings};
pub use terminal::{PetTerminal, install_panic_hook, restore_terminal, setup_terminal};
pub use theme::{Theme, ThemeMode, dark, light};
pub use views::{LoadingView, QuizView, ResultView, StartView, ViewRenderer, view_for};
pub use widgets::{Hint, HintBarWidget};
