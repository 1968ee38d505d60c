use crate::app::{App, Mode};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the status bar
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let mode_text = match app.mode {
        Mode::Calendar => ("CALENDAR", Color::Green),
        Mode::Entry => ("ENTRY", Color::Yellow),
        Mode::List => ("LIST", Color::Cyan),
        Mode::Confirm => ("CONFIRM", Color::Magenta),
        Mode::Help => ("HELP", Color::Blue),
    };

    let done = app.tasks.iter().filter(|t| t.completed).count();

    let line = Line::from(vec![
        Span::styled(
            format!(" {} ", mode_text.0),
            Style::default()
                .fg(Color::Black)
                .bg(mode_text.1)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(
            " {} | {} task(s), {} done | Tab switch pane  ? help  q quit ",
            app.calendar.date_key(),
            app.tasks.len(),
            done
        )),
    ]);

    let paragraph = Paragraph::new(line).style(Style::default().bg(Color::Black));

    f.render_widget(paragraph, area);
}
