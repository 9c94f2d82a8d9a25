//! Blocking select menu over a raw-mode terminal.
//!
//! [`TerminalMenu`] starts the terminal on first use and keeps it running across menus, so a
//! key typed while the caller is busy (for example while a fetch is in flight) is delivered to
//! the next menu instead of being lost. Input arrives on the terminal's reader thread and is
//! forwarded through a channel; when the terminal drops its input handler at end of file the
//! channel disconnects and the pending [`SelectionSurface::select`] returns `Ok(None)`.

use std::fmt;
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::sync::Arc;
use std::time::Duration;

use log::debug;

use crate::core::component::Component;
use crate::core::keybindings::MenuKeybindingsManager;
use crate::core::output::{OutputGate, TerminalCmd};
use crate::core::terminal::{Terminal, TerminalGuard};
use crate::core::text::utils::{normalize_to_single_line, truncate_to_width};
use crate::widgets::{AcceptKind, PreviewPane, SelectList, SelectListEvent, SelectListTheme};

const INPUT_POLL: Duration = Duration::from_millis(100);
pub const DEFAULT_PREVIEW_ROWS: usize = 8;
const MIN_LIST_ROWS: usize = 3;
const HINT: &str = "↑/↓ move · enter select · ← back · q quit";

type PreviewFn<'a> = Box<dyn Fn(usize) -> String + 'a>;

/// One menu to present: a title, the entry labels and optional extras.
pub struct MenuRequest<'a> {
    title: String,
    labels: Vec<String>,
    status: Option<String>,
    preview: Option<PreviewFn<'a>>,
}

impl<'a> MenuRequest<'a> {
    pub fn new(title: impl Into<String>, labels: Vec<String>) -> Self {
        Self {
            title: title.into(),
            labels,
            status: None,
            preview: None,
        }
    }

    /// A one-line message shown under the title.
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Preview text for the entry at a given index, shown while it is highlighted.
    pub fn with_preview<F>(mut self, preview: F) -> Self
    where
        F: Fn(usize) -> String + 'a,
    {
        self.preview = Some(Box::new(preview));
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn has_preview(&self) -> bool {
        self.preview.is_some()
    }

    /// Preview text for `index`, or `None` without a provider or for an index past the end.
    pub fn preview(&self, index: usize) -> Option<String> {
        if index >= self.labels.len() {
            return None;
        }
        self.preview.as_ref().map(|preview| preview(index))
    }
}

impl fmt::Debug for MenuRequest<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MenuRequest")
            .field("title", &self.title)
            .field("labels", &self.labels)
            .field("status", &self.status)
            .field("has_preview", &self.preview.is_some())
            .finish()
    }
}

/// The accepted entry and the key class used to accept it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuSelection {
    pub index: usize,
    pub accept: AcceptKind,
}

/// Presents a list and blocks until the user accepts an entry.
pub trait SelectionSurface {
    /// `Ok(None)` means the input stream closed or the user dismissed the menu.
    fn select(&mut self, request: &MenuRequest<'_>) -> io::Result<Option<MenuSelection>>;
}

impl<S: SelectionSurface + ?Sized> SelectionSurface for &mut S {
    fn select(&mut self, request: &MenuRequest<'_>) -> io::Result<Option<MenuSelection>> {
        (**self).select(request)
    }
}

impl<S: SelectionSurface + ?Sized> SelectionSurface for Box<S> {
    fn select(&mut self, request: &MenuRequest<'_>) -> io::Result<Option<MenuSelection>> {
        (**self).select(request)
    }
}

struct MenuInput {
    keys: Receiver<String>,
    resized: Arc<AtomicBool>,
}

enum InputEvent {
    Key(String),
    Resize,
    Idle,
    Closed,
}

pub struct TerminalMenu<T: Terminal> {
    guard: TerminalGuard<T>,
    keybindings: MenuKeybindingsManager,
    preview_rows: usize,
    styled: bool,
    input: Option<MenuInput>,
}

impl<T: Terminal> TerminalMenu<T> {
    pub fn new(terminal: T) -> Self {
        Self {
            guard: TerminalGuard::new(terminal),
            keybindings: MenuKeybindingsManager::default(),
            preview_rows: DEFAULT_PREVIEW_ROWS,
            styled: true,
            input: None,
        }
    }

    pub fn with_preview_rows(mut self, rows: usize) -> Self {
        self.preview_rows = rows;
        self
    }

    pub fn with_keybindings(mut self, keybindings: MenuKeybindingsManager) -> Self {
        self.keybindings = keybindings;
        self
    }

    /// Render without ANSI styling.
    pub fn with_plain_theme(mut self) -> Self {
        self.styled = false;
        self
    }

    pub fn with_drain_timings(mut self, max_ms: u64, idle_ms: u64) -> Self {
        self.guard.set_drain_timings(max_ms, idle_ms);
        self
    }

    pub fn terminal(&self) -> &T {
        self.guard.terminal()
    }

    /// Leave the alternate screen and restore the terminal. Idempotent.
    pub fn close(&mut self) -> io::Result<()> {
        if self.input.take().is_none() {
            return Ok(());
        }
        let mut output = OutputGate::new();
        output.extend([TerminalCmd::ShowCursor, TerminalCmd::AltScreenLeave]);
        output.flush(self.guard.terminal_mut());
        debug!("menu terminal stopped");
        self.guard.stop()
    }

    fn ensure_started(&mut self) -> io::Result<()> {
        if self.input.is_some() {
            return Ok(());
        }

        let (sender, keys) = mpsc::channel();
        let resized = Arc::new(AtomicBool::new(false));
        let resize_flag = Arc::clone(&resized);
        self.guard.start(
            Box::new(move |data| {
                let _ = sender.send(data);
            }),
            Box::new(move || resize_flag.store(true, Ordering::SeqCst)),
        )?;

        let mut output = OutputGate::new();
        output.extend([TerminalCmd::AltScreenEnter, TerminalCmd::HideCursor]);
        output.flush(self.guard.terminal_mut());
        self.input = Some(MenuInput { keys, resized });
        debug!("menu terminal started");
        Ok(())
    }

    fn next_input(&self) -> InputEvent {
        let Some(input) = self.input.as_ref() else {
            return InputEvent::Closed;
        };
        if input.resized.swap(false, Ordering::SeqCst) {
            return InputEvent::Resize;
        }
        match input.keys.recv_timeout(INPUT_POLL) {
            Ok(key) => InputEvent::Key(key),
            Err(RecvTimeoutError::Timeout) => InputEvent::Idle,
            Err(RecvTimeoutError::Disconnected) => InputEvent::Closed,
        }
    }

    fn paint(&self, code: &str, text: &str) -> String {
        if self.styled {
            format!("\x1b[{code}m{text}\x1b[0m")
        } else {
            text.to_string()
        }
    }

    fn list_theme(&self) -> SelectListTheme {
        if self.styled {
            SelectListTheme::default()
        } else {
            SelectListTheme::plain()
        }
    }

    fn render_frame(
        &mut self,
        request: &MenuRequest<'_>,
        list: &mut SelectList,
        preview: &mut PreviewPane,
    ) {
        let width = usize::from(self.guard.terminal().columns()).max(1);
        let rows = usize::from(self.guard.terminal().rows());
        let clip = |text: &str| truncate_to_width(&normalize_to_single_line(text), width, "…", false);

        let mut lines = vec![self.paint("1", &clip(request.title()))];
        if let Some(status) = request.status() {
            lines.push(self.paint("33", &clip(status)));
        }
        lines.push(String::new());

        let show_preview = request.has_preview() && !list.is_empty() && preview.max_rows() > 0;
        let preview_height = if show_preview {
            preview.max_rows() + 3
        } else {
            0
        };
        // Header, preview, the scroll indicator row and the two footer rows.
        let reserved = lines.len() + preview_height + 3;
        list.set_max_visible(rows.saturating_sub(reserved).max(MIN_LIST_ROWS));
        lines.extend(list.render(width));

        if show_preview {
            if let Some(index) = list.selected_index() {
                preview.set_text(request.preview(index).unwrap_or_default());
                lines.push(String::new());
                lines.extend(preview.render(width));
            }
        }

        lines.push(String::new());
        lines.push(self.paint("2", &clip(HINT)));

        let mut output = OutputGate::new();
        output.push(TerminalCmd::ClearScreen);
        output.push(TerminalCmd::bytes(lines.join("\r\n")));
        output.flush(self.guard.terminal_mut());
    }
}

impl<T: Terminal> SelectionSurface for TerminalMenu<T> {
    fn select(&mut self, request: &MenuRequest<'_>) -> io::Result<Option<MenuSelection>> {
        self.ensure_started()?;

        let mut list = SelectList::new(
            request.labels().to_vec(),
            MIN_LIST_ROWS,
            self.list_theme(),
            self.keybindings.clone(),
        );
        let border = if self.styled {
            Box::new(|text: &str| format!("\x1b[2m{text}\x1b[0m")) as Box<dyn Fn(&str) -> String>
        } else {
            Box::new(|text: &str| text.to_string())
        };
        let mut preview = PreviewPane::new(self.preview_rows).with_border_style(border);
        self.render_frame(request, &mut list, &mut preview);

        loop {
            match self.next_input() {
                InputEvent::Key(key) => {
                    list.handle_input(&key);
                    match list.take_event() {
                        Some(SelectListEvent::Accepted { index, accept }) => {
                            debug!("menu {:?} accepted {index} ({accept:?})", request.title());
                            return Ok(Some(MenuSelection { index, accept }));
                        }
                        Some(SelectListEvent::Cancelled) => {
                            debug!("menu {:?} dismissed", request.title());
                            return Ok(None);
                        }
                        None => self.render_frame(request, &mut list, &mut preview),
                    }
                }
                InputEvent::Resize => self.render_frame(request, &mut list, &mut preview),
                InputEvent::Idle => {}
                InputEvent::Closed => {
                    debug!("menu input closed");
                    return Ok(None);
                }
            }
        }
    }
}

impl<T: Terminal> Drop for TerminalMenu<T> {
    fn drop(&mut self) {
        let _ = self.close();
    }
}

#[cfg(test)]
mod tests {
    use super::MenuRequest;

    #[test]
    fn preview_is_none_past_the_end_or_without_provider() {
        let labels = vec!["a".to_string(), "b".to_string()];
        let request = MenuRequest::new("t", labels.clone());
        assert!(!request.has_preview());
        assert_eq!(request.preview(0), None);

        let bodies = ["first", "second"];
        let request = MenuRequest::new("t", labels).with_preview(|index| bodies[index].to_string());
        assert_eq!(request.preview(1).as_deref(), Some("second"));
        assert_eq!(request.preview(2), None);
    }

    #[test]
    fn status_is_optional() {
        let request = MenuRequest::new("t", Vec::new());
        assert_eq!(request.status(), None);
        let request = request.with_status("saved");
        assert_eq!(request.status(), Some("saved"));
    }
}
