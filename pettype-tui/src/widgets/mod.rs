//! Reusable widgets.

mod hint_bar;

pub use hint_bar::{Hint, HintBarWidget};
