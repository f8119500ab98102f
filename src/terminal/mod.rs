//! Terminal module: everything that knows about the real terminal.
//!
//! - [`OutputBuffer`]: ANSI encoders over a reusable byte buffer
//! - [`TerminalState`]: cache of what was last emitted
//! - [`TerminalSession`]: raw mode / alternate screen guard

mod output;
mod session;
mod state;

pub use output::OutputBuffer;
pub use session::TerminalSession;
pub use state::{ModeFlags, TerminalState};
