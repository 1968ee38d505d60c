use crate::app::{App, Mode};
use crate::calendar::WEEKDAY_HEADER;
use chrono::{Datelike, Local};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the month calendar pane
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let is_focused = app.mode == Mode::Calendar;

    let border_style = if is_focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .title(format!("  {}  ", app.calendar.title()))
        .borders(Borders::ALL)
        .border_style(border_style)
        .border_type(ratatui::widgets::BorderType::Rounded);

    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut lines = Vec::new();

    // Weekday header
    let header_spans: Vec<Span> = WEEKDAY_HEADER
        .iter()
        .map(|day| {
            Span::styled(
                format!("{day} "),
                Style::default().fg(Color::Rgb(129, 161, 193)), // Nord frost
            )
        })
        .collect();
    lines.push(Line::from(header_spans));

    let selected = app.calendar.selected();
    let today = Local::now().date_naive();
    let same_month_as_today =
        selected.year() == today.year() && selected.month() == today.month();

    for week in app.calendar.grid() {
        let mut spans = Vec::new();
        for cell in week {
            match cell {
                Some(day) => {
                    let is_selected = day == selected.day();
                    let is_today = same_month_as_today && day == today.day();

                    let style = if is_selected {
                        Style::default()
                            .fg(Color::Rgb(46, 52, 64)) // Nord polar night
                            .bg(Color::Rgb(136, 192, 208)) // Nord cyan
                            .add_modifier(Modifier::BOLD)
                    } else if is_today {
                        Style::default()
                            .fg(Color::Rgb(163, 190, 140)) // Nord green
                            .add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(Color::Rgb(216, 222, 233)) // Nord snow storm
                    };

                    spans.push(Span::styled(format!("{day:>2}"), style));
                    spans.push(Span::raw(" "));
                }
                None => spans.push(Span::raw("   ")),
            }
        }
        lines.push(Line::from(spans));
    }

    f.render_widget(Paragraph::new(lines), inner);
}
