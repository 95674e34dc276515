use crate::models::{Message, Sender};
use crate::thinking::ThinkingPanel;

/// One row of the visible log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatEntry {
    message: Message,
    shown: String,
    thinking: Option<ThinkingPanel>,
}

impl ChatEntry {
    pub fn message(&self) -> &Message {
        &self.message
    }

    pub fn sender(&self) -> Sender {
        self.message.sender
    }

    /// The part of the message text revealed so far.
    pub fn shown_text(&self) -> &str {
        &self.shown
    }

    pub fn is_fully_shown(&self) -> bool {
        self.shown.len() == self.message.text.len()
    }

    pub fn thinking(&self) -> Option<&ThinkingPanel> {
        self.thinking.as_ref()
    }
}

/// Append-only message log. Entries are addressed by their index, which is
/// stable because nothing is ever removed.
#[derive(Debug)]
pub struct ChatLog {
    entries: Vec<ChatEntry>,
    /// Lines scrolled back from the bottom; zero means pinned to the newest entry.
    scroll_back: u16,
    /// Lines above the visible window at the last render; caps `scroll_back`.
    max_scroll_back: u16,
}

impl Default for ChatLog {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatLog {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            scroll_back: 0,
            max_scroll_back: u16::MAX,
        }
    }

    /// Appends a fully visible message.
    pub fn push_message(&mut self, message: Message) -> usize {
        let shown = message.text.clone();
        self.push(ChatEntry {
            message,
            shown,
            thinking: None,
        })
    }

    /// Appends a message whose text starts hidden and is revealed later.
    pub fn push_hidden(&mut self, message: Message, thinking: Option<ThinkingPanel>) -> usize {
        self.push(ChatEntry {
            message,
            shown: String::new(),
            thinking,
        })
    }

    fn push(&mut self, entry: ChatEntry) -> usize {
        self.entries.push(entry);
        self.scroll_to_bottom();
        self.entries.len() - 1
    }

    /// Reveals one more character of the entry at `index`.
    /// Returns false if the entry is missing or already fully shown.
    pub fn reveal(&mut self, index: usize, ch: char) -> bool {
        let Some(entry) = self.entries.get_mut(index) else {
            return false;
        };
        if entry.is_fully_shown() {
            return false;
        }
        entry.shown.push(ch);
        self.scroll_to_bottom();
        true
    }

    /// Shows the whole text of the entry at `index` at once.
    pub fn complete(&mut self, index: usize) {
        if let Some(entry) = self.entries.get_mut(index) {
            entry.shown = entry.message.text.clone();
        }
    }

    pub fn entries(&self) -> &[ChatEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&ChatEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn toggle_thinking(&mut self, index: usize) -> Option<bool> {
        let panel = self.entries.get_mut(index)?.thinking.as_mut()?;
        panel.toggle();
        Some(panel.is_expanded())
    }

    /// Toggles the panel of the newest entry that has one.
    /// Returns the new expanded state.
    pub fn toggle_latest_thinking(&mut self) -> Option<bool> {
        let index = self.entries.iter().rposition(|e| e.thinking.is_some())?;
        self.toggle_thinking(index)
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll_back = 0;
    }

    pub fn scroll_up(&mut self) {
        self.scroll_back = self
            .scroll_back
            .saturating_add(1)
            .min(self.max_scroll_back);
    }

    /// Records how far the rendered content can scroll back and clamps the
    /// current position to it.
    pub fn set_max_scroll_back(&mut self, max: u16) {
        self.max_scroll_back = max;
        self.scroll_back = self.scroll_back.min(max);
    }

    pub fn scroll_down(&mut self) {
        self.scroll_back = self.scroll_back.saturating_sub(1);
    }

    pub fn scroll_back(&self) -> u16 {
        self.scroll_back
    }

    pub fn is_pinned(&self) -> bool {
        self.scroll_back == 0
    }
}
