//! The list widget seam and a plain-text implementation.
//!
//! Drawing, styling and input capture belong to the host's widget. The control
//! only hands it a [`ListView`] plus the passthrough settings it was configured
//! with, and never interprets those settings itself.

use super::helpers::{mark_ranges, truncate};
use super::viewmodel::ListView;
use std::collections::BTreeMap;

/// Passthrough key for the text shown when nothing is selected.
pub const PLACEHOLDER: &str = "placeholder";

/// Passthrough key limiting label width in [`TextList`].
pub const MAX_WIDTH: &str = "max_width";

const DEFAULT_PLACEHOLDER: &str = "Select...";

/// Renders list views. Implemented by the host's widget.
pub trait ListWidget {
    fn render(&mut self, view: &ListView, passthrough: &BTreeMap<String, String>);
}

/// Line-oriented widget for embedding in terminal output and for tests.
///
/// Produces the control line (selected label or placeholder), then, when the
/// menu is open, a search line and one line per visible option:
///
/// ```text
/// (GMT-10:00) Hawaii
/// / hawaii (1)
/// > * (GMT-10:00) [Hawaii]
/// ```
///
/// `>` marks the cursor, `*` the current value, brackets the search matches.
///
/// # Passthrough
///
/// - `placeholder`: control text when nothing is selected (default `Select...`)
/// - `max_width`: truncate labels to this many characters
#[derive(Debug, Clone, Default)]
pub struct TextList {
    lines: Vec<String>,
}

impl TextList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines produced by the last render.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Last render joined with newlines.
    #[must_use]
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

impl ListWidget for TextList {
    fn render(&mut self, view: &ListView, passthrough: &BTreeMap<String, String>) {
        let max_width = passthrough
            .get(MAX_WIDTH)
            .and_then(|s| s.parse::<usize>().ok());
        let fit = |text: &str| max_width.map_or_else(|| text.to_string(), |w| truncate(text, w));

        self.lines.clear();

        let control = view.selected_label.as_deref().map_or_else(
            || {
                passthrough
                    .get(PLACEHOLDER)
                    .map_or(DEFAULT_PLACEHOLDER, String::as_str)
                    .to_string()
            },
            fit,
        );
        self.lines.push(control);

        if !view.menu_open {
            return;
        }

        if !view.search_query.is_empty() {
            self.lines
                .push(format!("/ {} ({})", view.search_query, view.match_count));
        }

        if view.items.is_empty() {
            self.lines.push("  No options".to_string());
            return;
        }

        for item in &view.items {
            let cursor = if item.is_highlighted { '>' } else { ' ' };
            let current = if item.is_selected { '*' } else { ' ' };
            let label = match max_width {
                Some(width) if item.label.chars().count() > width => truncate(&item.label, width),
                _ => mark_ranges(&item.label, &item.highlight_ranges, "[", "]"),
            };
            self.lines.push(format!("{cursor} {current} {label}"));
        }
    }
}
