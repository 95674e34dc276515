use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const TITLE: &str = "CV Chat Assistant";

/// Height needed by the header for the current welcome state.
pub fn header_height(welcome_visible: bool) -> u16 {
    if welcome_visible {
        5
    } else {
        1
    }
}

/// Draws the welcome banner before the first message, and a one-line title
/// afterwards.
pub fn draw_header(f: &mut Frame<'_>, area: Rect, welcome_visible: bool) {
    let title_style = Style::default()
        .fg(Color::LightGreen)
        .add_modifier(Modifier::BOLD);

    if !welcome_visible {
        f.render_widget(
            Paragraph::new(TITLE)
                .style(title_style)
                .alignment(Alignment::Center),
            area,
        );
        return;
    }

    let welcome = vec![
        Line::styled(format!("👋 Welcome to {}", TITLE), title_style),
        Line::from("Ask anything about the CV, or pick one of the suggested questions below."),
    ];
    let banner = Paragraph::new(welcome)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .style(Style::default().fg(Color::LightCyan).bg(Color::Black)),
        )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    f.render_widget(banner, area);
}
