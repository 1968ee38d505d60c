mod calendar;
pub mod dialogs;
pub mod entry;
mod help;
mod statusbar;
mod tasklist;

use crate::app::{App, Mode, Notification, NotificationLevel};
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::Frame;

/// Main render function: calendar + entry on top, task list below,
/// status bar at the bottom, overlays last.
pub fn render(f: &mut Frame, app: &App) {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    let content_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(10), // Calendar + entry
            Constraint::Min(0),     // Task list
        ])
        .split(main_chunks[0]);

    let top_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(25), // Calendar
            Constraint::Min(0),     // Entry
        ])
        .split(content_chunks[0]);

    calendar::render(f, top_chunks[0], app);
    entry::render(f, top_chunks[1], app);
    tasklist::render(f, content_chunks[1], app);
    statusbar::render(f, main_chunks[1], app);

    // Overlays
    if let Some(dialog) = &app.dialog {
        dialogs::render_dialog(f, dialog);
    }

    if app.mode == Mode::Help {
        help::render(f, f.area());
    }

    if let Some(ref notification) = app.notification {
        render_notification(f, f.area(), notification);
    }
}

/// Render the notification bar along the top edge
fn render_notification(
    f: &mut Frame,
    area: ratatui::layout::Rect,
    notification: &Notification,
) {
    use ratatui::style::{Color, Modifier, Style};
    use ratatui::text::{Line, Span};
    use ratatui::widgets::{Block, Borders, Paragraph};

    let notification_area = ratatui::layout::Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: 3.min(area.height),
    };

    let (bg_color, fg_color, prefix) = match notification.level {
        NotificationLevel::Info => (Color::Blue, Color::White, "ℹ"),
        NotificationLevel::Success => (Color::Green, Color::White, "✓"),
        NotificationLevel::Warning => (Color::Yellow, Color::Black, "⚠"),
        NotificationLevel::Error => (Color::Red, Color::White, "✗"),
    };

    let content = Line::from(vec![
        Span::styled(
            format!(" {prefix} "),
            Style::default()
                .fg(fg_color)
                .bg(bg_color)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(&notification.message, Style::default().fg(fg_color)),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(bg_color))
        .style(Style::default().bg(bg_color));

    let paragraph = Paragraph::new(content).block(block);

    f.render_widget(paragraph, notification_area);
}
