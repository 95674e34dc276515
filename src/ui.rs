// src/ui.rs

pub mod chat;
pub mod footer;
pub mod header;
pub mod suggestions;

use crate::client::ChatClient;
use crate::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Draws the whole screen.
pub fn draw(f: &mut Frame<'_>, app: &App, client: &mut ChatClient) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header::header_height(client.welcome_visible())),
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(4),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(f.area());

    header::draw_header(f, chunks[0], client.welcome_visible());
    let pending = client.is_pending();
    chat::draw_messages(
        f,
        chunks[1],
        client.log_mut(),
        pending,
        app.status_indicator.frame(),
    );
    app.status_indicator.render(f, chunks[2]);
    suggestions::draw_suggestions(f, chunks[3], client.suggestions(), app.selected_suggestion);
    draw_input(f, chunks[4], client.input());
    footer::draw_footer(f, chunks[5]);
}

fn draw_input(f: &mut Frame<'_>, area: Rect, input: &str) {
    let prompt = Line::from(vec![
        Span::styled("→ ", Style::default().fg(Color::DarkGray)),
        Span::styled(input, Style::default().fg(Color::White)),
    ]);

    let visible_width = area.width.saturating_sub(4);
    let text_width = u16::try_from(input.width()).unwrap_or(u16::MAX);
    let scroll_offset = text_width.saturating_sub(visible_width);

    f.render_widget(
        Paragraph::new(prompt)
            .block(Block::default().borders(Borders::ALL).title("Ask"))
            .scroll((0, scroll_offset)),
        area,
    );

    let cursor_x = area.x + 3 + (text_width - scroll_offset);
    f.set_cursor_position((cursor_x, area.y + 1));
}
