use crate::app::{App, Mode};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Render the task list pane for the selected date
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let is_focused = app.mode == Mode::List || app.mode == Mode::Confirm;

    let border_style = if is_focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .title(format!("  Tasks for {}  ", app.calendar.date_key()))
        .borders(Borders::ALL)
        .border_style(border_style)
        .border_type(ratatui::widgets::BorderType::Rounded);

    let inner = block.inner(area);
    f.render_widget(block, area);

    if app.tasks.is_empty() {
        let empty = Paragraph::new("No tasks")
            .style(Style::default().fg(Color::Rgb(129, 161, 193))); // Nord frost
        f.render_widget(empty, inner);
        return;
    }

    let items: Vec<ListItem> = app
        .tasks
        .iter()
        .enumerate()
        .map(|(idx, task)| {
            let is_selected = is_focused && idx == app.selected_task;

            let checkbox = if task.completed { "[x] " } else { "[ ] " };
            let mut text_style = Style::default().fg(Color::Rgb(236, 239, 244)); // Nord snow storm
            if task.completed {
                // Strike-through styling for completed rows
                text_style = text_style
                    .fg(Color::Rgb(129, 161, 193))
                    .add_modifier(Modifier::CROSSED_OUT);
            }

            let line = Line::from(vec![
                Span::styled(
                    checkbox,
                    Style::default().fg(Color::Rgb(163, 190, 140)), // Nord green
                ),
                Span::styled(task.text.clone(), text_style),
            ]);

            let row_style = if is_selected {
                Style::default().bg(Color::Rgb(59, 66, 82)) // Nord highlight
            } else {
                Style::default()
            };

            ListItem::new(line).style(row_style)
        })
        .collect();

    let list = List::new(items);

    let mut list_state = ListState::default();
    list_state.select(Some(app.selected_task));
    f.render_stateful_widget(list, inner, &mut list_state);
}
