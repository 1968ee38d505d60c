use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const BINDINGS: &[(&str, &str)] = &[
    ("Tab", "cycle pane: calendar → entry → list"),
    ("q / Ctrl+C", "quit"),
    ("?", "toggle this help"),
    ("", ""),
    ("h/l  ←/→", "calendar: previous / next day"),
    ("j/k  ↓/↑", "calendar: next / previous week"),
    ("[ / ]", "calendar: previous / next month"),
    ("t", "calendar: jump to today"),
    ("i / Enter", "calendar: start typing a task"),
    ("", ""),
    ("Enter", "entry: add task to the selected date"),
    ("Esc", "entry: back to the calendar"),
    ("", ""),
    ("j/k  ↓/↑", "list: move row selection"),
    ("Space / Enter", "list: toggle completion"),
    ("d / Del", "list: delete row (asks to confirm)"),
    ("Esc", "list: back to the calendar"),
];

/// Render the keybinding reference overlay
pub fn render(f: &mut Frame, area: Rect) {
    let width = 60.min(area.width);
    let height = (BINDINGS.len() as u16 + 4).min(area.height);
    let popup = Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    };

    f.render_widget(Clear, popup);

    let block = Block::default()
        .title("  Keybindings  ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Rgb(136, 192, 208))) // Nord cyan
        .border_type(ratatui::widgets::BorderType::Rounded)
        .style(Style::default().bg(Color::Rgb(46, 52, 64))); // Nord background

    let inner = block.inner(popup);
    f.render_widget(block, popup);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(inner);

    let lines: Vec<Line> = BINDINGS
        .iter()
        .map(|(key, action)| {
            Line::from(vec![
                Span::styled(
                    format!(" {key:>14}  "),
                    Style::default().fg(Color::Rgb(136, 192, 208)),
                ),
                Span::styled(*action, Style::default().fg(Color::Rgb(216, 222, 233))),
            ])
        })
        .collect();
    f.render_widget(Paragraph::new(lines), chunks[0]);

    let footer = Paragraph::new("press any key to close")
        .style(Style::default().fg(Color::Rgb(129, 161, 193)))
        .alignment(Alignment::Center);
    f.render_widget(footer, chunks[1]);
}
