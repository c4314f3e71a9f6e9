//! Terminal lifecycle
//!
//! [`TerminalSession`] owns raw mode, the alternate screen and mouse capture
//! for as long as it lives. Dropping it puts the terminal back, whichever way
//! the UI loop ended. A panic hook does the same when the process aborts
//! instead of unwinding.

use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout, Write};
use std::sync::OnceLock;

pub struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    pub fn new() -> io::Result<Self> {
        install_panic_hook();
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen, EnableMouseCapture) {
            restore(&mut io::stdout());
            return Err(e);
        }
        match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(terminal) => Ok(Self { terminal }),
            Err(e) => {
                restore(&mut io::stdout());
                Err(e)
            }
        }
    }

    pub fn terminal_mut(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        restore(self.terminal.backend_mut());
    }
}

/// Chains a hook that restores the terminal before the previous hook reports
/// the panic. Returns `false` when a hook was already installed.
fn install_panic_hook() -> bool {
    static HOOK: OnceLock<()> = OnceLock::new();
    let mut installed = false;
    HOOK.get_or_init(|| {
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            restore(&mut io::stdout());
            previous(info);
        }));
        installed = true;
    });
    installed
}

/// Best effort: a failure here leaves nothing better to do.
fn restore<W: Write>(out: &mut W) {
    let _ = disable_raw_mode();
    let _ = execute!(out, LeaveAlternateScreen, DisableMouseCapture, Show);
    let _ = out.flush();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panic_hook_is_installed_once() {
        install_panic_hook();
        assert!(!install_panic_hook());
        assert!(!install_panic_hook());
    }

    #[test]
    fn test_restore_leaves_alternate_screen() {
        let mut out = Vec::new();
        restore(&mut out);
        let written = String::from_utf8_lossy(&out);
        assert!(written.contains("\x1b[?1049l"));
        assert!(written.contains("\x1b[?25h"));
    }
}
