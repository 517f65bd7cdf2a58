use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use super::input::Input;

pub(super) fn render_section(
    frame: &mut ratatui::Frame,
    title: &str,
    lines: Vec<Line<'_>>,
    scroll: u16,
    area: Rect,
) {
    let header = Span::styled(title.to_string(), Style::default().fg(Color::Yellow));
    let block = Block::default().borders(Borders::ALL).title(header);
    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0)),
        area,
    );
}

pub(super) fn label(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    ))
}

pub(super) fn dim(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default().fg(Color::Gray),
    ))
}

/// Multi-line text as individual lines; an empty string becomes `placeholder`.
pub(super) fn text_lines(text: &str, placeholder: &str) -> Vec<Line<'static>> {
    if text.is_empty() {
        return vec![dim(placeholder)];
    }
    text.lines().map(|l| Line::from(l.to_string())).collect()
}

/// A labelled field; the focused one shows a cursor block.
pub(super) fn field_line(name: &str, input: &Input, focused: bool) -> Line<'static> {
    let name_style = if focused {
        Style::default().fg(Color::Black).bg(Color::Cyan)
    } else {
        Style::default().fg(Color::Cyan)
    };
    let mut spans = vec![
        Span::styled(format!("{:<10}", name), name_style),
        Span::raw(" "),
    ];
    let shown = input.display();
    if focused {
        let (before, after): (String, String) = {
            let mut chars = shown.chars();
            let before = chars.by_ref().take(input.cursor).collect();
            (before, chars.collect())
        };
        let mut after = after.chars();
        let at = after.next().map(String::from).unwrap_or_else(|| " ".to_string());
        spans.push(Span::raw(before));
        spans.push(Span::styled(
            at,
            Style::default().add_modifier(Modifier::REVERSED),
        ));
        spans.push(Span::raw(after.collect::<String>()));
    } else {
        spans.push(Span::raw(shown));
    }
    Line::from(spans)
}
