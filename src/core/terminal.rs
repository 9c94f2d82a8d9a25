//! Terminal trait and lifecycle helpers.

/// Minimal terminal interface for the menu runtime.
pub trait Terminal {
    /// Start the terminal with input and resize handlers.
    ///
    /// `on_input` receives one key sequence per call. Implementations drop `on_input` once the
    /// input stream reaches end of file, so owners of channel senders captured by the handler
    /// observe the disconnect.
    fn start(
        &mut self,
        on_input: Box<dyn FnMut(String) + Send>,
        on_resize: Box<dyn FnMut() + Send>,
    ) -> std::io::Result<()>;

    /// Stop the terminal and restore state.
    fn stop(&mut self) -> std::io::Result<()>;

    /// Drain stdin before exiting to prevent key release leakage over slow connections.
    fn drain_input(&mut self, max_ms: u64, idle_ms: u64);

    /// Write output to the terminal.
    fn write(&mut self, data: &str);

    /// Terminal dimensions.
    fn columns(&self) -> u16;
    fn rows(&self) -> u16;
}

/// Owns a started terminal; drains input and stops it on drop.
pub struct TerminalGuard<T: Terminal> {
    terminal: T,
    active: bool,
    max_drain_ms: u64,
    idle_drain_ms: u64,
}

impl<T: Terminal> TerminalGuard<T> {
    /// Create a guard with default drain timings (max 1000ms, idle 50ms).
    pub fn new(terminal: T) -> Self {
        Self {
            terminal,
            active: false,
            max_drain_ms: 1000,
            idle_drain_ms: 50,
        }
    }

    /// Adjust drain timings.
    pub fn set_drain_timings(&mut self, max_ms: u64, idle_ms: u64) {
        self.max_drain_ms = max_ms;
        self.idle_drain_ms = idle_ms;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn start(
        &mut self,
        on_input: Box<dyn FnMut(String) + Send>,
        on_resize: Box<dyn FnMut() + Send>,
    ) -> std::io::Result<()> {
        self.terminal.start(on_input, on_resize)?;
        self.active = true;
        Ok(())
    }

    /// Drain pending input and stop the terminal. Idempotent.
    pub fn stop(&mut self) -> std::io::Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        self.terminal
            .drain_input(self.max_drain_ms, self.idle_drain_ms);
        self.terminal.stop()
    }

    pub fn terminal(&self) -> &T {
        &self.terminal
    }

    pub fn terminal_mut(&mut self) -> &mut T {
        &mut self.terminal
    }
}

impl<T: Terminal> Drop for TerminalGuard<T> {
    fn drop(&mut self) {
        let _ = self.stop();
    }
}
