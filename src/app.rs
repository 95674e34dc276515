use crate::client::SharedClient;
use crate::status_indicator::StatusIndicator;

/// Terminal-side state that is not part of the chat component itself.
pub struct App {
    pub client: SharedClient,
    /// Suggestion highlighted with Tab; Enter selects it.
    pub selected_suggestion: Option<usize>,
    pub status_indicator: StatusIndicator,
    pub should_quit: bool,
}

impl App {
    pub fn new(client: SharedClient) -> App {
        App {
            client,
            selected_suggestion: None,
            status_indicator: StatusIndicator::new(),
            should_quit: false,
        }
    }

    /// Moves the suggestion highlight forward, wrapping after the last one.
    pub fn next_suggestion(&mut self, count: usize) {
        if count == 0 {
            self.selected_suggestion = None;
            return;
        }
        self.selected_suggestion = Some(match self.selected_suggestion {
            Some(i) if i + 1 < count => i + 1,
            Some(_) => 0,
            None => 0,
        });
    }

    /// Moves the suggestion highlight backward, wrapping before the first one.
    pub fn previous_suggestion(&mut self, count: usize) {
        if count == 0 {
            self.selected_suggestion = None;
            return;
        }
        self.selected_suggestion = Some(match self.selected_suggestion {
            Some(0) | None => count - 1,
            Some(i) => (i - 1).min(count - 1),
        });
    }

    pub fn clear_suggestion(&mut self) {
        self.selected_suggestion = None;
    }
}
