use crate::constants::{CHEVRON_COLLAPSED, CHEVRON_EXPANDED};

/// Collapsible reasoning attached to a bot entry. Starts collapsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThinkingPanel {
    content: String,
    expanded: bool,
}

impl ThinkingPanel {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            expanded: false,
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }

    /// Direction marker shown next to the toggle.
    pub fn indicator(&self) -> char {
        if self.expanded {
            CHEVRON_EXPANDED
        } else {
            CHEVRON_COLLAPSED
        }
    }
}
