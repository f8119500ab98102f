//! `TerminalSession`: raw-mode and alternate-screen guard.
//!
//! The renderer never opens or configures the terminal itself. Callers
//! that drive a real TTY enter a session first and let it restore the
//! terminal when dropped, even on early return or panic unwinding.

use crossterm::{
    cursor, execute,
    style::ResetColor,
    terminal::{self, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};

/// RAII guard over terminal setup.
#[derive(Debug)]
pub struct TerminalSession {
    alternate_screen: bool,
}

impl TerminalSession {
    /// Enable raw mode, optionally enter the alternate screen, and clear it.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal setup fails. Raw mode is disabled
    /// again before returning in that case.
    pub fn enter(alternate_screen: bool) -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let session = Self { alternate_screen };

        let mut stdout = io::stdout();
        if alternate_screen {
            execute!(stdout, EnterAlternateScreen)?;
        }
        execute!(stdout, terminal::Clear(ClearType::All), cursor::MoveTo(0, 0))?;

        #[cfg(feature = "tracing")]
        tracing::debug!(alternate_screen, "terminal session entered");

        Ok(session)
    }

    /// Current terminal size as (columns, rows).
    ///
    /// # Errors
    ///
    /// Returns an error if the size cannot be queried.
    pub fn size() -> io::Result<(u16, u16)> {
        terminal::size()
    }

    /// Whether the alternate screen was entered.
    pub const fn alternate_screen(&self) -> bool {
        self.alternate_screen
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let mut stdout = io::stdout();
        let _ = execute!(stdout, ResetColor, cursor::Show);
        if self.alternate_screen {
            let _ = execute!(stdout, LeaveAlternateScreen);
        }
        let _ = stdout.flush();
        let _ = terminal::disable_raw_mode();

        #[cfg(feature = "tracing")]
        tracing::debug!("terminal session restored");
    }
}
