use crate::calendar::MonthCalendar;
use crate::models::Task;
use crate::store::TaskStore;
use crate::ui::dialogs::ConfirmDialog;
use crate::ui::entry::EntryField;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Notification level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(dead_code)]
pub enum NotificationLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// Transient notification message
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub level: NotificationLevel,
    pub created_at: Instant,
}

impl Notification {
    /// Notifications disappear on their own after 3 seconds
    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed().as_secs() >= 3
    }
}

/// Which pane owns the keyboard
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    /// Calendar pane - moving the date cursor
    #[default]
    Calendar,
    /// Entry field - typing a new task
    Entry,
    /// Task list - selecting, toggling, deleting rows
    List,
    /// Delete confirmation dialog
    Confirm,
    /// Keybinding reference overlay
    Help,
}

/// Application state
pub struct App {
    /// Durable task storage, owned for the process lifetime
    pub store: TaskStore,
    /// Date selector
    pub calendar: MonthCalendar,
    /// New-task entry field
    pub entry: EntryField,
    /// Row snapshot for the selected date; never the source of truth,
    /// discarded and rebuilt on every refresh
    pub tasks: Vec<Task>,
    /// Selected row index into `tasks`
    pub selected_task: usize,
    /// Current input mode
    pub mode: Mode,
    /// Mode the help overlay was opened from, restored when it closes
    pub saved_mode: Option<Mode>,
    /// Pending delete confirmation, if any
    pub dialog: Option<ConfirmDialog>,
    /// Transient notification message
    pub notification: Option<Notification>,
}

impl App {
    /// Create the app around an opened store, restoring the last
    /// selected date and focused pane when a saved UI state exists.
    pub fn new(store: TaskStore) -> Result<Self> {
        let mut calendar = MonthCalendar::today();
        let mut mode = Mode::Calendar;
        if let Ok(state) = crate::state::load_state() {
            if let Some(date) = state.restore_date() {
                calendar.set_selected(date);
            }
            mode = state.focused_pane;
        }

        let mut app = Self {
            store,
            calendar,
            entry: EntryField::new(),
            tasks: Vec::new(),
            selected_task: 0,
            mode,
            saved_mode: None,
            dialog: None,
            notification: None,
        };
        app.refresh()?;
        Ok(app)
    }

    /// Handle keyboard input.
    /// Returns Ok(false) when the app should exit.
    pub fn handle_key(&mut self, key: crossterm::event::KeyEvent) -> Result<bool> {
        crate::input::handle_key_input(self, key)
    }

    /// Calendar cursor moved: re-query the list for the new date.
    pub fn on_date_selected(&mut self) -> Result<()> {
        self.refresh()
    }

    /// Entry submitted. Blank text is rejected with a warning and no
    /// store call; otherwise the trimmed text is inserted under the
    /// currently selected date and the entry is cleared.
    pub fn on_add_submitted(&mut self) -> Result<()> {
        let text = self.entry.content().trim().to_string();
        if text.is_empty() {
            self.show_notification(
                "Task text cannot be empty".to_string(),
                NotificationLevel::Warning,
            );
            return Ok(());
        }

        let date = self.calendar.date_key();
        self.store.insert(&date, &text)?;
        self.entry.clear();
        self.refresh()?;
        self.show_notification(format!("Task added for {date}"), NotificationLevel::Success);
        Ok(())
    }

    /// Toggle the selected row's completion flag. Writes the new value
    /// to the store, then restyles only that row in place; the next
    /// full refresh re-reads everything from the store anyway.
    pub fn on_row_toggle(&mut self) -> Result<()> {
        let (id, completed) = match self.tasks.get_mut(self.selected_task) {
            Some(task) => {
                task.completed = !task.completed;
                (task.id, task.completed)
            }
            None => return Ok(()),
        };
        self.store.set_completed(id, completed)?;
        Ok(())
    }

    /// Ask for confirmation before deleting the selected row.
    pub fn on_row_delete(&mut self) {
        if let Some(task) = self.tasks.get(self.selected_task) {
            self.dialog = Some(ConfirmDialog::delete_task(task.id, &task.text));
            self.mode = Mode::Confirm;
        }
    }

    /// Confirmation accepted: delete and refresh.
    pub fn on_delete_confirmed(&mut self) -> Result<()> {
        if let Some(dialog) = self.dialog.take() {
            self.store.delete(dialog.task_id)?;
            self.refresh()?;
            self.show_notification("Task deleted".to_string(), NotificationLevel::Info);
        }
        self.mode = Mode::List;
        Ok(())
    }

    /// Confirmation declined: nothing changes anywhere.
    pub fn on_delete_declined(&mut self) {
        self.dialog = None;
        self.mode = Mode::List;
    }

    /// Discard the row snapshot and rebuild it from the store for the
    /// selected date, clamping the row selection to the new length.
    pub fn refresh(&mut self) -> Result<()> {
        self.tasks = self.store.list_for_date(&self.calendar.date_key())?;
        if self.selected_task >= self.tasks.len() {
            self.selected_task = self.tasks.len().saturating_sub(1);
        }
        Ok(())
    }

    /// Move the row selection down
    pub fn select_next_task(&mut self) {
        if self.selected_task + 1 < self.tasks.len() {
            self.selected_task += 1;
        }
    }

    /// Move the row selection up
    pub fn select_prev_task(&mut self) {
        self.selected_task = self.selected_task.saturating_sub(1);
    }

    /// Show a notification message
    pub fn show_notification(&mut self, message: String, level: NotificationLevel) {
        self.notification = Some(Notification {
            message,
            level,
            created_at: Instant::now(),
        });
    }

    /// Clear an expired notification
    pub fn clear_expired_notification(&mut self) {
        if let Some(ref notification) = self.notification {
            if notification.is_expired() {
                self.notification = None;
            }
        }
    }
}
