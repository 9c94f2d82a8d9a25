//! SelectList widget.

use crate::core::component::Component;
use crate::core::keybindings::{MenuAction, MenuKeybindingsManager};
use crate::core::text::utils::{normalize_to_single_line, truncate_to_width};
use crate::core::text::width::visible_width;

/// How the user confirmed the highlighted entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AcceptKind {
    Select,
    Back,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectListEvent {
    Accepted { index: usize, accept: AcceptKind },
    Cancelled,
}

pub struct SelectListTheme {
    pub selected_text: Box<dyn Fn(&str) -> String>,
    pub scroll_info: Box<dyn Fn(&str) -> String>,
    pub no_match: Box<dyn Fn(&str) -> String>,
}

impl SelectListTheme {
    /// Plain theme with no styling, used by tests and dumb terminals.
    pub fn plain() -> Self {
        Self {
            selected_text: Box::new(|text| text.to_string()),
            scroll_info: Box::new(|text| text.to_string()),
            no_match: Box::new(|text| text.to_string()),
        }
    }
}

impl Default for SelectListTheme {
    fn default() -> Self {
        Self {
            selected_text: Box::new(|text| format!("\x1b[7m{text}\x1b[0m")),
            scroll_info: Box::new(|text| format!("\x1b[2m{text}\x1b[0m")),
            no_match: Box::new(|text| format!("\x1b[2m{text}\x1b[0m")),
        }
    }
}

pub struct SelectList {
    labels: Vec<String>,
    selected_index: usize,
    max_visible: usize,
    theme: SelectListTheme,
    keybindings: MenuKeybindingsManager,
    pending_event: Option<SelectListEvent>,
}

impl SelectList {
    pub fn new(
        labels: Vec<String>,
        max_visible: usize,
        theme: SelectListTheme,
        keybindings: MenuKeybindingsManager,
    ) -> Self {
        Self {
            labels,
            selected_index: 0,
            max_visible,
            theme,
            keybindings,
            pending_event: None,
        }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn selected_index(&self) -> Option<usize> {
        if self.labels.is_empty() {
            None
        } else {
            Some(self.selected_index)
        }
    }

    pub fn set_selected_index(&mut self, index: usize) {
        if self.labels.is_empty() {
            self.selected_index = 0;
        } else {
            self.selected_index = index.min(self.labels.len() - 1);
        }
    }

    pub fn set_max_visible(&mut self, max_visible: usize) {
        self.max_visible = max_visible;
    }

    /// Take the accept/cancel event produced by the last input, if any.
    pub fn take_event(&mut self) -> Option<SelectListEvent> {
        self.pending_event.take()
    }

    fn move_by(&mut self, delta: isize) {
        if self.labels.is_empty() {
            return;
        }
        let last = self.labels.len() - 1;
        self.selected_index = match delta {
            -1 if self.selected_index == 0 => last,
            1 if self.selected_index == last => 0,
            _ => self
                .selected_index
                .saturating_add_signed(delta)
                .min(last),
        };
    }

    fn page_size(&self) -> usize {
        self.max_visible.max(1)
    }

    fn render_line(&self, width: usize, label: &str, selected: bool) -> String {
        let label = normalize_to_single_line(label);
        let prefix = if selected { "→ " } else { "  " };
        let max_width = width.saturating_sub(visible_width(prefix));
        let truncated = truncate_to_width(&label, max_width, "…", false);
        if selected {
            (self.theme.selected_text)(&format!("{prefix}{truncated}"))
        } else {
            format!("{prefix}{truncated}")
        }
    }
}

impl Component for SelectList {
    fn render(&mut self, width: usize) -> Vec<String> {
        let mut lines = Vec::new();

        if self.labels.is_empty() {
            lines.push((self.theme.no_match)("  No entries"));
            return lines;
        }

        let max_visible = self.max_visible.max(1).min(self.labels.len());
        let half = max_visible / 2;
        let start_index = if self.labels.len() <= max_visible {
            0
        } else {
            let candidate = self.selected_index.saturating_sub(half);
            let max_start = self.labels.len() - max_visible;
            candidate.min(max_start)
        };
        let end_index = (start_index + max_visible).min(self.labels.len());

        for (idx, label) in self
            .labels
            .iter()
            .enumerate()
            .take(end_index)
            .skip(start_index)
        {
            lines.push(self.render_line(width, label, idx == self.selected_index));
        }

        if start_index > 0 || end_index < self.labels.len() {
            let scroll_text = format!("  ({}/{})", self.selected_index + 1, self.labels.len());
            let truncated = truncate_to_width(&scroll_text, width.saturating_sub(2), "", false);
            lines.push((self.theme.scroll_info)(&truncated));
        }

        lines
    }

    fn handle_input(&mut self, data: &str) {
        let Some(action) = self.keybindings.action_for(data) else {
            return;
        };

        match action {
            MenuAction::SelectUp => self.move_by(-1),
            MenuAction::SelectDown => self.move_by(1),
            MenuAction::SelectPageUp => {
                let target = self.selected_index.saturating_sub(self.page_size());
                self.set_selected_index(target);
            }
            MenuAction::SelectPageDown => {
                let target = self.selected_index.saturating_add(self.page_size());
                self.set_selected_index(target);
            }
            MenuAction::SelectFirst => self.set_selected_index(0),
            MenuAction::SelectLast => self.set_selected_index(usize::MAX),
            MenuAction::SelectConfirm => {
                // An empty list has nothing to select; only back and cancel apply.
                if !self.labels.is_empty() {
                    self.pending_event = Some(SelectListEvent::Accepted {
                        index: self.selected_index,
                        accept: AcceptKind::Select,
                    });
                }
            }
            MenuAction::SelectBack => {
                self.pending_event = Some(SelectListEvent::Accepted {
                    index: self.selected_index,
                    accept: AcceptKind::Back,
                });
            }
            MenuAction::SelectCancel => {
                self.pending_event = Some(SelectListEvent::Cancelled);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{AcceptKind, SelectList, SelectListEvent, SelectListTheme};
    use crate::core::component::Component;
    use crate::core::keybindings::MenuKeybindingsManager;

    fn list(labels: &[&str], max_visible: usize) -> SelectList {
        SelectList::new(
            labels.iter().map(|label| label.to_string()).collect(),
            max_visible,
            SelectListTheme::plain(),
            MenuKeybindingsManager::default(),
        )
    }

    #[test]
    fn select_list_navigates_and_wraps() {
        let mut list = list(&["one", "two", "three"], 2);

        assert_eq!(list.selected_index(), Some(0));

        list.handle_input("\x1b[B");
        assert_eq!(list.selected_index(), Some(1));

        list.handle_input("j");
        assert_eq!(list.selected_index(), Some(2));

        list.handle_input("\x1b[B");
        assert_eq!(list.selected_index(), Some(0));

        list.handle_input("\x1b[A");
        assert_eq!(list.selected_index(), Some(2));
    }

    #[test]
    fn enter_and_backspace_report_accept_kind() {
        let mut list = list(&["one", "two"], 5);

        list.handle_input("\x1b[B");
        list.handle_input("\r");
        assert_eq!(
            list.take_event(),
            Some(SelectListEvent::Accepted {
                index: 1,
                accept: AcceptKind::Select
            })
        );
        assert_eq!(list.take_event(), None);

        list.handle_input("\x7f");
        assert_eq!(
            list.take_event(),
            Some(SelectListEvent::Accepted {
                index: 1,
                accept: AcceptKind::Back
            })
        );

        list.handle_input("\x1b");
        assert_eq!(list.take_event(), Some(SelectListEvent::Cancelled));
    }

    #[test]
    fn empty_list_only_allows_back_and_cancel() {
        let mut list = list(&[], 5);

        list.handle_input("\r");
        assert_eq!(list.take_event(), None);

        list.handle_input("\x7f");
        assert_eq!(
            list.take_event(),
            Some(SelectListEvent::Accepted {
                index: 0,
                accept: AcceptKind::Back
            })
        );
        assert_eq!(list.render(20), vec!["  No entries".to_string()]);
    }

    #[test]
    fn render_scrolls_around_selection() {
        let mut list = list(&["a", "b", "c", "d", "e"], 3);
        list.set_selected_index(4);

        let lines = list.render(20);
        assert_eq!(
            lines,
            vec![
                "  c".to_string(),
                "  d".to_string(),
                "→ e".to_string(),
                "  (5/5)".to_string(),
            ]
        );
    }

    #[test]
    fn page_keys_clamp_to_bounds() {
        let mut list = list(&["a", "b", "c", "d", "e"], 2);

        list.handle_input("\x1b[6~");
        assert_eq!(list.selected_index(), Some(2));
        list.handle_input("\x1b[6~");
        list.handle_input("\x1b[6~");
        assert_eq!(list.selected_index(), Some(4));
        list.handle_input("\x1b[5~");
        assert_eq!(list.selected_index(), Some(2));
        list.handle_input("g");
        assert_eq!(list.selected_index(), Some(0));
    }

    #[test]
    fn long_labels_are_clipped_to_width() {
        let mut list = list(&["a very long label that does not fit"], 3);
        let lines = list.render(12);
        assert_eq!(lines, vec!["→ a very lo…".to_string()]);
    }
}
