use ratatui::{prelude::*, widgets::*};

/// Renders a bordered text input field
pub fn render_input<'a>(
    content: &'a str,
    title: &'a str,
    is_focused: bool,
    is_editing: bool,
) -> Paragraph<'a> {
    let style = if is_focused && is_editing {
        Style::default().fg(Color::Yellow)
    } else if is_focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(style)
        .title(title);

    Paragraph::new(content).block(block)
}

/// Renders the screen tab bar
pub fn render_tabs<'a>(titles: &[&'a str], selected: usize) -> Tabs<'a> {
    let titles: Vec<Line> = titles.iter().map(|t| Line::from(*t)).collect();

    Tabs::new(titles)
        .select(selected)
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(Style::default().fg(Color::Yellow).bold())
        .divider("|")
}

/// Terminal column for a cursor byte offset. Byte indices overshoot the
/// column as soon as the text holds multi-byte characters, so count chars.
pub fn cursor_column(text: &str, byte_pos: usize) -> u16 {
    text.get(..byte_pos)
        .map(|s| s.chars().count())
        .unwrap_or_else(|| text.chars().count()) as u16
}

/// Renders the log sequence as divider-separated lines
pub fn log_lines(logs: &[String]) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for entry in logs {
        let style = if entry.starts_with("REQUEST:") {
            Style::default().fg(Color::Cyan)
        } else if entry.starts_with("RESPONSE:") || entry.starts_with("BODY:") {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::Red)
        };
        lines.push(Line::from(Span::styled(entry.clone(), style)));
        lines.push(Line::from(Span::styled(
            "────────────────────────────",
            Style::default().fg(Color::DarkGray),
        )));
    }
    lines
}
