use crate::app::{App, Mode};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tui_textarea::{CursorMove, TextArea};

/// Outcome of a key handled by the entry field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryAction {
    /// Keep editing
    Continue,
    /// Submit the current text
    Submit,
    /// Leave the entry field without submitting
    Leave,
}

/// Single-line task entry field
pub struct EntryField {
    textarea: TextArea<'static>,
}

impl EntryField {
    pub fn new() -> Self {
        let mut textarea = TextArea::default();
        textarea.set_placeholder_text("What needs doing?");
        textarea.set_placeholder_style(Style::default().fg(Color::Rgb(76, 86, 106)));
        textarea.set_cursor_line_style(Style::default());
        textarea.set_cursor_style(
            Style::default()
                .bg(Color::Rgb(136, 192, 208)) // Nord cyan
                .fg(Color::Rgb(46, 52, 64)),
        );
        textarea.set_style(Style::default().fg(Color::Rgb(236, 239, 244))); // Nord snow storm

        Self { textarea }
    }

    /// Current entry text
    pub fn content(&self) -> String {
        // Single line by construction: Enter submits instead of breaking
        self.textarea.lines().join(" ")
    }

    /// Replace the entry text, placing the cursor at the end
    pub fn set_content(&mut self, text: &str) {
        self.clear();
        self.textarea.insert_str(text);
    }

    /// Empty the field
    pub fn clear(&mut self) {
        self.textarea.select_all();
        self.textarea.cut();
    }

    /// Handle a key while the entry field owns the keyboard
    pub fn handle_key(&mut self, key: KeyEvent) -> EntryAction {
        // Ctrl+U wipes the line
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('u') {
            self.clear();
            return EntryAction::Continue;
        }

        match key.code {
            KeyCode::Enter => EntryAction::Submit,
            KeyCode::Esc => EntryAction::Leave,
            KeyCode::Char(c) => {
                self.textarea.insert_char(c);
                EntryAction::Continue
            }
            KeyCode::Backspace => {
                self.textarea.delete_char();
                EntryAction::Continue
            }
            KeyCode::Delete => {
                self.textarea.delete_next_char();
                EntryAction::Continue
            }
            KeyCode::Left => {
                self.textarea.move_cursor(CursorMove::Back);
                EntryAction::Continue
            }
            KeyCode::Right => {
                self.textarea.move_cursor(CursorMove::Forward);
                EntryAction::Continue
            }
            KeyCode::Home => {
                self.textarea.move_cursor(CursorMove::Head);
                EntryAction::Continue
            }
            KeyCode::End => {
                self.textarea.move_cursor(CursorMove::End);
                EntryAction::Continue
            }
            _ => EntryAction::Continue,
        }
    }
}

impl Default for EntryField {
    fn default() -> Self {
        Self::new()
    }
}

/// Render the entry pane
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let is_focused = app.mode == Mode::Entry;

    let border_style = if is_focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .title("  New task  ")
        .borders(Borders::ALL)
        .border_style(border_style)
        .border_type(ratatui::widgets::BorderType::Rounded);

    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Input line
            Constraint::Min(0),    // Hint
        ])
        .split(inner);

    f.render_widget(&app.entry.textarea, chunks[0]);

    let hint = if is_focused {
        "Enter to add  •  Esc to go back"
    } else {
        "Tab or i to start typing"
    };
    let hint_paragraph =
        Paragraph::new(hint).style(Style::default().fg(Color::Rgb(129, 161, 193))); // Nord frost
    f.render_widget(hint_paragraph, chunks[1]);
}
