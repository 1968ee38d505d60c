/// Month calendar model backing the date selector pane.
use chrono::{Datelike, Days, Local, NaiveDate};

/// Weekday header for the month grid, Monday first.
pub const WEEKDAY_HEADER: [&str; 7] = ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"];

/// Cursor over a month grid. Every movement is a "date selected" event;
/// the board refreshes its task list after each one.
pub struct MonthCalendar {
    selected: NaiveDate,
}

impl MonthCalendar {
    pub fn new(selected: NaiveDate) -> Self {
        Self { selected }
    }

    /// Calendar positioned on the local current date.
    pub fn today() -> Self {
        Self::new(Local::now().date_naive())
    }

    pub fn selected(&self) -> NaiveDate {
        self.selected
    }

    pub fn set_selected(&mut self, date: NaiveDate) {
        self.selected = date;
    }

    /// Storage key for the selected date, zero-padded `dd.mm.yyyy`.
    pub fn date_key(&self) -> String {
        self.selected.format("%d.%m.%Y").to_string()
    }

    /// Pane title, e.g. "March 2024".
    pub fn title(&self) -> String {
        self.selected.format("%B %Y").to_string()
    }

    pub fn prev_day(&mut self) {
        if let Some(date) = self.selected.pred_opt() {
            self.selected = date;
        }
    }

    pub fn next_day(&mut self) {
        if let Some(date) = self.selected.succ_opt() {
            self.selected = date;
        }
    }

    pub fn prev_week(&mut self) {
        self.selected = self
            .selected
            .checked_sub_days(Days::new(7))
            .unwrap_or(self.selected);
    }

    pub fn next_week(&mut self) {
        self.selected = self
            .selected
            .checked_add_days(Days::new(7))
            .unwrap_or(self.selected);
    }

    pub fn prev_month(&mut self) {
        self.selected = shift_month(self.selected, -1);
    }

    pub fn next_month(&mut self) {
        self.selected = shift_month(self.selected, 1);
    }

    pub fn jump_to_today(&mut self) {
        self.selected = Local::now().date_naive();
    }

    /// Week rows for the selected month, Monday-first. Cells outside the
    /// month are `None`.
    pub fn grid(&self) -> Vec<[Option<u32>; 7]> {
        let year = self.selected.year();
        let month = self.selected.month();
        let first = NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(self.selected);
        let lead = first.weekday().num_days_from_monday() as usize;

        let mut weeks = Vec::new();
        let mut week = [None; 7];
        let mut col = lead;
        for day in 1..=days_in_month(year, month) {
            week[col] = Some(day);
            col += 1;
            if col == 7 {
                weeks.push(week);
                week = [None; 7];
                col = 0;
            }
        }
        if col > 0 {
            weeks.push(week);
        }
        weeks
    }
}

/// Move `date` by `delta` months, clamping the day to the target
/// month's length (31 Mar − 1 month → 28/29 Feb).
fn shift_month(date: NaiveDate, delta: i32) -> NaiveDate {
    let mut year = date.year();
    let mut month = date.month() as i32 + delta;
    while month < 1 {
        month += 12;
        year -= 1;
    }
    while month > 12 {
        month -= 12;
        year += 1;
    }
    let month = month as u32;
    let day = date.day().min(days_in_month(year, month));
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(date)
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let first_of_next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    first_of_next
        .and_then(|d| d.pred_opt())
        .map(|d| d.day())
        .unwrap_or(28)
}
