//! Terminal setup and teardown.

use std::io::{self, IsTerminal, Stdout};

use crossterm::{
    cursor, execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::{BowlError, Result};

/// Type alias for our terminal backend.
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Owns the terminal while the ordering screen is up and puts it back into
/// normal mode when dropped, including on panic unwinds.
pub struct TerminalGuard {
    terminal: Tui,
    restored: bool,
}

impl TerminalGuard {
    /// Enters raw mode and the alternate screen.
    ///
    /// # Errors
    ///
    /// Returns [`BowlError::Io`] if stdout is not a TTY or the terminal
    /// cannot be switched.
    pub fn enter() -> Result<Self> {
        if !io::stdout().is_terminal() {
            return Err(BowlError::Io(
                "bowlr requires an interactive terminal (TTY)".to_string(),
            ));
        }

        enable_raw_mode().map_err(|e| BowlError::Io(format!("failed to enable raw mode: {e}")))?;

        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen, cursor::Hide) {
            let _ = disable_raw_mode();
            return Err(BowlError::Io(format!(
                "failed to enter alternate screen: {e}"
            )));
        }

        match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(terminal) => Ok(Self {
                terminal,
                restored: false,
            }),
            Err(e) => {
                let _ = execute!(io::stdout(), LeaveAlternateScreen, cursor::Show);
                let _ = disable_raw_mode();
                Err(BowlError::Io(format!("failed to create terminal: {e}")))
            }
        }
    }

    pub fn terminal(&mut self) -> &mut Tui {
        &mut self.terminal
    }

    /// Leaves the alternate screen and disables raw mode.
    ///
    /// # Errors
    ///
    /// Returns [`BowlError::Io`] if the terminal cannot be restored.
    pub fn restore(mut self) -> Result<()> {
        self.restored = true;
        restore(&mut self.terminal)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if !self.restored {
            let _ = restore(&mut self.terminal);
        }
    }
}

fn restore(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode().map_err(|e| BowlError::Io(e.to_string()))?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, cursor::Show)
        .map_err(|e| BowlError::Io(e.to_string()))?;
    Ok(())
}
