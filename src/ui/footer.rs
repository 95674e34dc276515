use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Paragraph, Wrap},
    Frame,
};

const INSTRUCTIONS: &str =
    "Enter send · Tab pick suggestion · Ctrl+T thinking · PgUp/PgDn scroll · Esc quit";

pub fn draw_footer(f: &mut Frame<'_>, area: Rect) {
    let footer = Paragraph::new(INSTRUCTIONS)
        .style(Style::default().fg(Color::LightCyan))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    f.render_widget(footer, area);
}
