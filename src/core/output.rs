//! Typed terminal output commands and a single output gate.
//!
//! Invariant: all terminal writes must flow through `OutputGate::flush(..)`.

use crate::core::terminal::Terminal;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminalCmd {
    /// Raw text or control sequences to be written to the terminal.
    Bytes(String),

    HideCursor,
    ShowCursor,

    /// Alternate screen buffer, so the shell scrollback survives the menu.
    AltScreenEnter,
    AltScreenLeave,

    /// Move home and erase the whole screen.
    ClearScreen,
}

impl TerminalCmd {
    pub fn bytes(data: impl Into<String>) -> Self {
        Self::Bytes(data.into())
    }

    fn as_str(&self) -> &str {
        match self {
            TerminalCmd::Bytes(data) => data,
            TerminalCmd::HideCursor => "\x1b[?25l",
            TerminalCmd::ShowCursor => "\x1b[?25h",
            TerminalCmd::AltScreenEnter => "\x1b[?1049h",
            TerminalCmd::AltScreenLeave => "\x1b[?1049l",
            TerminalCmd::ClearScreen => "\x1b[H\x1b[2J",
        }
    }
}

#[derive(Debug, Default)]
pub struct OutputGate {
    cmds: Vec<TerminalCmd>,
}

impl OutputGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, cmd: TerminalCmd) {
        self.cmds.push(cmd);
    }

    pub fn extend<I>(&mut self, cmds: I)
    where
        I: IntoIterator<Item = TerminalCmd>,
    {
        self.cmds.extend(cmds);
    }

    pub fn is_empty(&self) -> bool {
        self.cmds.is_empty()
    }

    /// Flush buffered commands to the terminal as one write.
    ///
    /// This is the single write gate: `Terminal::write(..)` must not be called
    /// from anywhere else.
    pub fn flush<T: Terminal>(&mut self, term: &mut T) {
        if self.cmds.is_empty() {
            return;
        }
        let mut buffer = String::new();
        for cmd in self.cmds.drain(..) {
            buffer.push_str(cmd.as_str());
        }
        term.write(&buffer);
    }
}
