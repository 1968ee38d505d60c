use crate::app::{App, Mode};
use crate::ui::entry::EntryAction;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Handle keyboard input.
/// Returns Ok(false) when the application should exit. Store errors
/// propagate out to the event loop.
pub fn handle_key_input(app: &mut App, key: KeyEvent) -> Result<bool> {
    // Ctrl+C quits from anywhere
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Ok(false);
    }

    match app.mode {
        Mode::Calendar => handle_calendar_mode(app, key),
        Mode::Entry => handle_entry_mode(app, key),
        Mode::List => handle_list_mode(app, key),
        Mode::Confirm => handle_confirm_mode(app, key),
        Mode::Help => handle_help_mode(app, key),
    }
}

/// Calendar pane: every cursor movement is a date selection and
/// triggers one list query for the new date.
fn handle_calendar_mode(app: &mut App, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Char('q') => return Ok(false),
        KeyCode::Char('?') => open_help(app),
        KeyCode::Tab | KeyCode::Char('i') | KeyCode::Enter => app.mode = Mode::Entry,
        KeyCode::Char('h') | KeyCode::Left => {
            app.calendar.prev_day();
            app.on_date_selected()?;
        }
        KeyCode::Char('l') | KeyCode::Right => {
            app.calendar.next_day();
            app.on_date_selected()?;
        }
        KeyCode::Char('j') | KeyCode::Down => {
            app.calendar.next_week();
            app.on_date_selected()?;
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.calendar.prev_week();
            app.on_date_selected()?;
        }
        KeyCode::Char('[') | KeyCode::PageUp => {
            app.calendar.prev_month();
            app.on_date_selected()?;
        }
        KeyCode::Char(']') | KeyCode::PageDown => {
            app.calendar.next_month();
            app.on_date_selected()?;
        }
        KeyCode::Char('t') => {
            app.calendar.jump_to_today();
            app.on_date_selected()?;
        }
        _ => {}
    }
    Ok(true)
}

/// Entry field: most keys go to the textarea
fn handle_entry_mode(app: &mut App, key: KeyEvent) -> Result<bool> {
    if key.code == KeyCode::Tab {
        app.mode = Mode::List;
        return Ok(true);
    }

    match app.entry.handle_key(key) {
        EntryAction::Submit => app.on_add_submitted()?,
        EntryAction::Leave => app.mode = Mode::Calendar,
        EntryAction::Continue => {}
    }
    Ok(true)
}

/// Task list: row selection, toggle, delete
fn handle_list_mode(app: &mut App, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Char('q') => return Ok(false),
        KeyCode::Char('?') => open_help(app),
        KeyCode::Tab | KeyCode::Esc => app.mode = Mode::Calendar,
        KeyCode::Char('j') | KeyCode::Down => app.select_next_task(),
        KeyCode::Char('k') | KeyCode::Up => app.select_prev_task(),
        KeyCode::Char(' ') | KeyCode::Char('x') | KeyCode::Enter => app.on_row_toggle()?,
        KeyCode::Char('d') | KeyCode::Delete => app.on_row_delete(),
        _ => {}
    }
    Ok(true)
}

/// Confirm dialog: y/n, arrows to move between buttons
fn handle_confirm_mode(app: &mut App, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Char('y') => app.on_delete_confirmed()?,
        KeyCode::Char('n') | KeyCode::Esc => app.on_delete_declined(),
        KeyCode::Left
        | KeyCode::Right
        | KeyCode::Char('h')
        | KeyCode::Char('l')
        | KeyCode::Tab => {
            if let Some(dialog) = &mut app.dialog {
                dialog.toggle_selection();
            }
        }
        KeyCode::Enter => {
            let yes = app.dialog.as_ref().is_some_and(|d| d.yes_selected);
            if yes {
                app.on_delete_confirmed()?;
            } else {
                app.on_delete_declined();
            }
        }
        _ => {}
    }
    Ok(true)
}

/// Help overlay: any key closes it, returning to the pane it was
/// opened from
fn handle_help_mode(app: &mut App, _key: KeyEvent) -> Result<bool> {
    app.mode = app.saved_mode.take().unwrap_or(Mode::Calendar);
    Ok(true)
}

fn open_help(app: &mut App) {
    app.saved_mode = Some(app.mode);
    app.mode = Mode::Help;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::MonthCalendar;
    use crate::store::TaskStore;
    use crate::ui::entry::EntryField;
    use chrono::NaiveDate;

    fn test_app() -> App {
        let mut app = App {
            store: TaskStore::open_in_memory().unwrap(),
            calendar: MonthCalendar::new(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()),
            entry: EntryField::new(),
            tasks: Vec::new(),
            selected_task: 0,
            mode: Mode::Calendar,
            saved_mode: None,
            dialog: None,
            notification: None,
        };
        app.refresh().unwrap();
        app
    }

    fn press(app: &mut App, code: KeyCode) -> bool {
        handle_key_input(app, KeyEvent::new(code, KeyModifiers::NONE)).unwrap()
    }

    #[test]
    fn test_quit_keys() {
        let mut app = test_app();
        assert!(!press(&mut app, KeyCode::Char('q')));

        let mut app = test_app();
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(!handle_key_input(&mut app, ctrl_c).unwrap());
    }

    #[test]
    fn test_tab_cycles_panes() {
        let mut app = test_app();
        assert_eq!(app.mode, Mode::Calendar);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.mode, Mode::Entry);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.mode, Mode::List);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.mode, Mode::Calendar);
    }

    #[test]
    fn test_calendar_movement_refreshes_list() {
        let mut app = test_app();
        app.store.insert("02.01.2025", "Tomorrow's task").unwrap();
        assert!(app.tasks.is_empty());

        press(&mut app, KeyCode::Char('l'));
        assert_eq!(app.calendar.date_key(), "02.01.2025");
        assert_eq!(app.tasks.len(), 1);
    }

    #[test]
    fn test_typed_task_is_added_on_enter() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('i'));
        assert_eq!(app.mode, Mode::Entry);

        for c in "Buy milk".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.tasks.len(), 1);
        assert_eq!(app.tasks[0].text, "Buy milk");
        assert!(app.entry.content().is_empty());
    }

    #[test]
    fn test_blank_enter_adds_nothing() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('i'));
        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Enter);

        assert!(app.tasks.is_empty());
        assert!(app.store.list_for_date("01.01.2025").unwrap().is_empty());
    }

    #[test]
    fn test_list_toggle_and_delete_flow() {
        let mut app = test_app();
        app.store.insert("01.01.2025", "Target").unwrap();
        app.refresh().unwrap();
        app.mode = Mode::List;

        press(&mut app, KeyCode::Char(' '));
        assert!(app.tasks[0].completed);

        press(&mut app, KeyCode::Char('d'));
        assert_eq!(app.mode, Mode::Confirm);

        // 'n' declines, nothing deleted
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.mode, Mode::List);
        assert_eq!(app.tasks.len(), 1);

        // 'y' confirms
        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Char('y'));
        assert!(app.tasks.is_empty());
        assert!(app.store.list_for_date("01.01.2025").unwrap().is_empty());
    }

    #[test]
    fn test_confirm_enter_follows_button_selection() {
        let mut app = test_app();
        app.store.insert("01.01.2025", "Target").unwrap();
        app.refresh().unwrap();
        app.mode = Mode::List;

        press(&mut app, KeyCode::Char('d'));
        // "No" starts selected; Enter declines
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.tasks.len(), 1);

        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Left); // move to "Yes"
        press(&mut app, KeyCode::Enter);
        assert!(app.tasks.is_empty());
    }

    #[test]
    fn test_help_opens_and_closes() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('?'));
        assert_eq!(app.mode, Mode::Help);
        press(&mut app, KeyCode::Char('z'));
        assert_eq!(app.mode, Mode::Calendar);
    }

    #[test]
    fn test_help_returns_to_opening_pane() {
        let mut app = test_app();
        app.store.insert("01.01.2025", "one").unwrap();
        app.store.insert("01.01.2025", "two").unwrap();
        app.refresh().unwrap();
        app.mode = Mode::List;
        app.selected_task = 1;

        press(&mut app, KeyCode::Char('?'));
        assert_eq!(app.mode, Mode::Help);
        press(&mut app, KeyCode::Char('z'));

        // Back in the list with the row selection untouched
        assert_eq!(app.mode, Mode::List);
        assert_eq!(app.selected_task, 1);
    }
}
