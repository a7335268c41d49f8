//! Terminal setup and teardown.

use std::io::{self, Stdout};
use std::panic;

use crossterm::{
    cursor, execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

/// The terminal type used throughout the TUI.
pub type PetTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Enable raw mode, enter the alternate screen and hide the cursor.
///
/// Pair with [`restore_terminal`] on exit.
pub fn setup_terminal() -> io::Result<PetTerminal> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

/// Leave raw mode and the alternate screen, showing the cursor again.
pub fn restore_terminal(terminal: &mut PetTerminal) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Restore the terminal before the default panic output is printed.
///
/// Call once at startup, before [`setup_terminal`].
pub fn install_panic_hook() {
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, cursor::Show);
        original_hook(panic_info);
    }));
}
