//! Bordered preview pane for the highlighted menu entry.

use crate::core::component::Component;
use crate::core::text::utils::{truncate_to_width, wrap_to_width};

pub struct PreviewPane {
    text: String,
    max_rows: usize,
    border: Box<dyn Fn(&str) -> String>,
}

impl PreviewPane {
    /// `max_rows` bounds the content rows; the border adds two more.
    pub fn new(max_rows: usize) -> Self {
        Self {
            text: String::new(),
            max_rows,
            border: Box::new(|text| text.to_string()),
        }
    }

    pub fn with_border_style(mut self, border: Box<dyn Fn(&str) -> String>) -> Self {
        self.border = border;
        self
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn max_rows(&self) -> usize {
        self.max_rows
    }
}

impl Component for PreviewPane {
    fn render(&mut self, width: usize) -> Vec<String> {
        if width < 4 || self.max_rows == 0 {
            return Vec::new();
        }
        let inner = width - 4;

        let mut body = wrap_to_width(&self.text, inner);
        if body.len() > self.max_rows {
            body.truncate(self.max_rows);
            if let Some(last) = body.last_mut() {
                let clipped = truncate_to_width(last, inner.saturating_sub(1), "", false);
                *last = format!("{clipped}…");
            }
        }

        let horizontal = "─".repeat(width - 2);
        let mut lines = Vec::with_capacity(body.len() + 2);
        lines.push((self.border)(&format!("┌{horizontal}┐")));
        for line in body {
            let padded = truncate_to_width(&line, inner, "", true);
            lines.push(format!(
                "{} {padded} {}",
                (self.border)("│"),
                (self.border)("│")
            ));
        }
        lines.push((self.border)(&format!("└{horizontal}┘")));
        lines
    }
}
