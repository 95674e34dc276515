use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw_suggestions(f: &mut Frame<'_>, area: Rect, suggestions: &[String], selected: Option<usize>) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Suggestions")
        .style(Style::default().fg(Color::LightMagenta).bg(Color::Black));

    let chips = Paragraph::new(suggestion_line(suggestions, selected))
        .block(block)
        .wrap(Wrap { trim: true });
    f.render_widget(chips, area);
}

/// One chip per question, the highlighted one inverted.
pub fn suggestion_line(suggestions: &[String], selected: Option<usize>) -> Line<'static> {
    let mut spans = Vec::with_capacity(suggestions.len() * 2);
    for (i, question) in suggestions.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        let style = if Some(i) == selected {
            Style::default()
                .fg(Color::Black)
                .bg(Color::LightMagenta)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        spans.push(Span::styled(format!("[{}]", question), style));
    }
    Line::from(spans)
}
