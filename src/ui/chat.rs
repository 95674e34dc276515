use crate::chat_log::{ChatEntry, ChatLog};
use crate::constants::THINKING_TITLE;
use crate::models::Sender;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use textwrap::wrap;

const TYPING_FRAMES: [&str; 3] = ["●∙∙", "∙●∙", "∙∙●"];

pub fn draw_messages(
    f: &mut Frame<'_>,
    area: Rect,
    log: &mut ChatLog,
    pending: bool,
    frame: usize,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Chat")
        .style(Style::default().fg(Color::LightYellow).bg(Color::Black));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut lines = Vec::new();
    for entry in log.entries() {
        if !lines.is_empty() {
            lines.push(Line::from(""));
        }
        lines.extend(entry_lines(entry, inner.width));
    }
    if pending {
        if !lines.is_empty() {
            lines.push(Line::from(""));
        }
        lines.extend(typing_lines(frame));
    }

    log.set_max_scroll_back(max_scroll(lines.len(), inner.height));
    let scroll = scroll_offset(lines.len(), inner.height, log.scroll_back());
    f.render_widget(Paragraph::new(lines).scroll((scroll, 0)), inner);
}

/// Number of lines hidden above the window when pinned to the bottom.
pub fn max_scroll(total_lines: usize, height: u16) -> u16 {
    let total = u16::try_from(total_lines).unwrap_or(u16::MAX);
    total.saturating_sub(height)
}

/// Top line to show so that the view sits `scroll_back` lines above the bottom.
pub fn scroll_offset(total_lines: usize, height: u16, scroll_back: u16) -> u16 {
    max_scroll(total_lines, height).saturating_sub(scroll_back)
}

fn base_style(sender: Sender) -> Style {
    match sender {
        Sender::User => Style::default().fg(Color::Rgb(255, 223, 128)),
        Sender::Bot => Style::default().fg(Color::Rgb(144, 238, 144)),
    }
}

/// Renders one log entry as wrapped, styled lines.
pub fn entry_lines(entry: &ChatEntry, width: u16) -> Vec<Line<'static>> {
    let style = base_style(entry.sender());
    let indent = if entry.sender() == Sender::User { "  " } else { "" };
    let label = match entry.sender() {
        Sender::User => "You",
        Sender::Bot => "Assistant",
    };
    let wrap_width = (width as usize).saturating_sub(4 + indent.len()).max(1);

    let mut lines = vec![Line::from(vec![
        Span::styled(indent.to_string(), style),
        Span::styled("┌─ ".to_string(), style),
        Span::styled(label.to_string(), style.add_modifier(Modifier::BOLD)),
        Span::styled(" ".to_string(), style),
        Span::styled(
            entry.message().timestamp.format("%H:%M").to_string(),
            style.add_modifier(Modifier::DIM),
        ),
    ])];

    if let Some(panel) = entry.thinking() {
        let dim = Style::default().fg(Color::Gray);
        lines.push(Line::from(vec![
            Span::styled(indent.to_string(), style),
            Span::styled("│ ".to_string(), style),
            Span::styled(
                format!("{} {}", THINKING_TITLE, panel.indicator()),
                dim.add_modifier(Modifier::BOLD),
            ),
        ]));
        if panel.is_expanded() {
            for wrapped in wrap(panel.content(), wrap_width.saturating_sub(2).max(1)) {
                lines.push(Line::from(vec![
                    Span::styled(indent.to_string(), style),
                    Span::styled("│ ".to_string(), style),
                    Span::styled("▎ ".to_string(), Style::default().fg(Color::DarkGray)),
                    Span::styled(wrapped.into_owned(), dim.add_modifier(Modifier::ITALIC)),
                ]));
            }
        }
    }

    for text_line in entry.shown_text().split('\n') {
        for wrapped in wrap(text_line, wrap_width) {
            lines.push(Line::from(vec![
                Span::styled(indent.to_string(), style),
                Span::styled("│ ".to_string(), style),
                Span::styled(wrapped.into_owned(), style),
            ]));
        }
    }

    lines.push(Line::from(vec![
        Span::styled(indent.to_string(), style),
        Span::styled("╰─".to_string(), style),
    ]));
    lines
}

/// The placeholder shown while a request is pending.
pub fn typing_lines(frame: usize) -> Vec<Line<'static>> {
    let style = base_style(Sender::Bot).add_modifier(Modifier::DIM);
    vec![
        Line::from(Span::styled("┌─ Assistant".to_string(), style)),
        Line::from(vec![
            Span::styled("│ ".to_string(), style),
            Span::styled(TYPING_FRAMES[frame % TYPING_FRAMES.len()].to_string(), style),
        ]),
        Line::from(Span::styled("╰─".to_string(), style)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Message;
    use crate::thinking::ThinkingPanel;

    fn plain(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn scroll_offset_pins_to_bottom() {
        assert_eq!(scroll_offset(50, 10, 0), 40);
        assert_eq!(scroll_offset(50, 10, 5), 35);
        assert_eq!(scroll_offset(50, 10, 100), 0);
        assert_eq!(scroll_offset(5, 10, 0), 0);
        assert_eq!(max_scroll(50, 10), 40);
        assert_eq!(max_scroll(5, 10), 0);
    }

    #[test]
    fn user_entry_is_indented_and_framed() {
        let mut log = ChatLog::new();
        log.push_message(Message::user("Hello"));
        let lines = entry_lines(&log.entries()[0], 40);

        assert!(plain(&lines[0]).starts_with("  ┌─ You"));
        assert_eq!(plain(&lines[1]), "  │ Hello");
        assert_eq!(plain(lines.last().unwrap()), "  ╰─");
    }

    #[test]
    fn collapsed_thinking_shows_only_toggle() {
        let mut log = ChatLog::new();
        let idx = log.push_hidden(Message::bot("ok"), Some(ThinkingPanel::new("secret reasoning")));
        log.complete(idx);

        let rendered: Vec<String> = entry_lines(&log.entries()[0], 40).iter().map(plain).collect();
        assert!(rendered.iter().any(|l| l.contains("Thinking Process ▾")));
        assert!(!rendered.iter().any(|l| l.contains("secret reasoning")));

        log.toggle_thinking(idx);
        let rendered: Vec<String> = entry_lines(&log.entries()[0], 40).iter().map(plain).collect();
        assert!(rendered.iter().any(|l| l.contains("Thinking Process ▴")));
        assert!(rendered.iter().any(|l| l.contains("secret reasoning")));
    }

    #[test]
    fn only_revealed_text_is_rendered() {
        let mut log = ChatLog::new();
        let idx = log.push_hidden(Message::bot("Hi there"), None);
        log.reveal(idx, 'H');
        log.reveal(idx, 'i');

        let rendered: Vec<String> = entry_lines(&log.entries()[0], 40).iter().map(plain).collect();
        assert_eq!(rendered[1], "│ Hi");
    }

    #[test]
    fn long_text_wraps() {
        let mut log = ChatLog::new();
        log.push_message(Message::bot("one two three four five six seven"));
        let lines = entry_lines(&log.entries()[0], 14);
        assert!(lines.len() > 3);
    }

    #[test]
    fn typing_placeholder_animates() {
        let first: Vec<String> = typing_lines(0).iter().map(plain).collect();
        let second: Vec<String> = typing_lines(1).iter().map(plain).collect();
        assert_ne!(first[1], second[1]);
        assert_eq!(typing_lines(3)[1].spans[1].content, typing_lines(0)[1].spans[1].content);
    }
}
