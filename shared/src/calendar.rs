//! Navigation and view-mode state machine behind the date picker.

use chrono::{Datelike, Days, Months, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Years shown on one page of the year view.
pub const YEARS_PER_PAGE: i32 = 12;

const GRID_CELLS: usize = 42;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarView {
    Days,
    Months,
    Years,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DatePickerConfig {
    pub min_date: Option<NaiveDate>,
    pub max_date: Option<NaiveDate>,
    pub week_start: Weekday,
    pub display_format: String,
}

impl Default for DatePickerConfig {
    fn default() -> Self {
        Self {
            min_date: None,
            max_date: None,
            week_start: Weekday::Mon,
            display_format: "%d/%m/%Y".to_string(),
        }
    }
}

impl DatePickerConfig {
    pub fn is_selectable(&self, date: NaiveDate) -> bool {
        self.min_date.map_or(true, |min| date >= min) && self.max_date.map_or(true, |max| date <= max)
    }

    pub fn format(&self, date: NaiveDate) -> String {
        date.format(&self.display_format).to_string()
    }
}

/// Parse text typed into the picker's input using the display format.
///
/// ISO dates are accepted as well. Dates outside the configured range are
/// rejected.
pub fn parse_date_input(text: &str, config: &DatePickerConfig) -> Option<NaiveDate> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(text, &config.display_format)
        .or_else(|_| NaiveDate::parse_from_str(text, "%Y-%m-%d"))
        .ok()
        .filter(|date| config.is_selectable(*date))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub in_month: bool,
    pub selected: bool,
    pub today: bool,
    pub disabled: bool,
}

/// What the open picker shows. Owned by the rendering component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarState {
    view: CalendarView,
    cursor: NaiveDate,
    selected: Option<NaiveDate>,
    today: NaiveDate,
}

impl CalendarState {
    /// Open on the selected date's month, or today's.
    pub fn new(selected: Option<NaiveDate>, today: NaiveDate) -> Self {
        let anchor = selected.unwrap_or(today);
        Self {
            view: CalendarView::Days,
            cursor: first_of_month(anchor),
            selected,
            today,
        }
    }

    pub fn view(&self) -> CalendarView {
        self.view
    }

    /// First day of the month currently displayed.
    pub fn cursor(&self) -> NaiveDate {
        self.cursor
    }

    pub fn selected(&self) -> Option<NaiveDate> {
        self.selected
    }

    /// Page back. Stays put at the earliest representable date.
    pub fn previous(&mut self) {
        match self.cursor.checked_sub_months(self.page_span()) {
            Some(cursor) => self.cursor = cursor,
            None => log::debug!("cannot page before {}", self.cursor),
        }
    }

    /// Page forward. Stays put at the latest representable date.
    pub fn next(&mut self) {
        match self.cursor.checked_add_months(self.page_span()) {
            Some(cursor) => self.cursor = cursor,
            None => log::debug!("cannot page past {}", self.cursor),
        }
    }

    fn page_span(&self) -> Months {
        match self.view {
            CalendarView::Days => Months::new(1),
            CalendarView::Months => Months::new(12),
            CalendarView::Years => Months::new(12 * YEARS_PER_PAGE as u32),
        }
    }

    /// Days -> Months -> Years. The year view is the outermost.
    pub fn zoom_out(&mut self) {
        self.view = match self.view {
            CalendarView::Days => CalendarView::Months,
            CalendarView::Months | CalendarView::Years => CalendarView::Years,
        };
    }

    pub fn choose_year(&mut self, year: i32) {
        if let Some(date) = NaiveDate::from_ymd_opt(year, self.cursor.month(), 1) {
            self.cursor = date;
            self.view = CalendarView::Months;
        }
    }

    /// `month` is 1-based.
    pub fn choose_month(&mut self, month: u32) {
        if let Some(date) = NaiveDate::from_ymd_opt(self.cursor.year(), month, 1) {
            self.cursor = date;
            self.view = CalendarView::Days;
        }
    }

    /// Select a day. Returns the date when the config allows it.
    pub fn choose_day(&mut self, date: NaiveDate, config: &DatePickerConfig) -> Option<NaiveDate> {
        if !config.is_selectable(date) {
            log::debug!("date {} is outside the selectable range", date);
            return None;
        }
        self.selected = Some(date);
        self.cursor = first_of_month(date);
        self.view = CalendarView::Days;
        Some(date)
    }

    /// Jump back to today's month in the day view.
    pub fn go_to_today(&mut self) {
        self.cursor = first_of_month(self.today);
        self.view = CalendarView::Days;
    }

    /// Six weeks of days covering the displayed month, cut short at the ends
    /// of the representable date range.
    pub fn day_grid(&self, config: &DatePickerConfig) -> Vec<CalendarDay> {
        let lead = days_from_week_start(self.cursor.weekday(), config.week_start);
        let start = self.cursor.checked_sub_days(Days::new(lead)).unwrap_or(self.cursor);
        (0..GRID_CELLS as u64)
            .map_while(|offset| start.checked_add_days(Days::new(offset)))
            .map(|date| CalendarDay {
                date,
                in_month: date.month() == self.cursor.month() && date.year() == self.cursor.year(),
                selected: self.selected == Some(date),
                today: date == self.today,
                disabled: !config.is_selectable(date),
            })
            .collect()
    }

    /// Weekday column headers starting at the configured first day.
    pub fn weekday_headers(config: &DatePickerConfig) -> Vec<Weekday> {
        let mut day = config.week_start;
        (0..7)
            .map(|_| {
                let current = day;
                day = day.succ();
                current
            })
            .collect()
    }

    pub fn year_page(&self) -> Vec<i32> {
        let first = self.cursor.year().div_euclid(YEARS_PER_PAGE) * YEARS_PER_PAGE;
        (first..first + YEARS_PER_PAGE).collect()
    }

    pub fn heading(&self) -> String {
        match self.view {
            CalendarView::Days => self.cursor.format("%B %Y").to_string(),
            CalendarView::Months => self.cursor.year().to_string(),
            CalendarView::Years => {
                let page = self.year_page();
                let first = page.first().copied().unwrap_or_default();
                let last = page.last().copied().unwrap_or_default();
                format!("{first} – {last}")
            }
        }
    }
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

fn days_from_week_start(day: Weekday, week_start: Weekday) -> u64 {
    let offset = 7 + day.num_days_from_monday() - week_start.num_days_from_monday();
    u64::from(offset % 7)
}
