//! Pure view derivations over the in-memory task list.
//!
//! Every function here is a plain map of `(tasks, inputs) -> view data`:
//! no signals, no network, no clock reads. The widgets call these on each
//! render and the rules stay testable in isolation. "Today" is always a
//! parameter for the same reason.

use std::cmp::Ordering;

use chrono::{Datelike, Days, NaiveDate};

use crate::state::TaskItem;

/// List filter: everything, or completed tasks only.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Filter {
    #[default]
    All,
    Completed,
}

/// Sort applied to the filtered list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortMode {
    #[default]
    None,
    DueDate,
    Priority,
    Az,
}

impl SortMode {
    pub fn as_str(self) -> &'static str {
        match self {
            SortMode::None => "none",
            SortMode::DueDate => "dueDate",
            SortMode::Priority => "priority",
            SortMode::Az => "az",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "none" => Some(SortMode::None),
            "dueDate" => Some(SortMode::DueDate),
            "priority" => Some(SortMode::Priority),
            "az" => Some(SortMode::Az),
            _ => None,
        }
    }
}

/// Apply the list filter.
pub fn apply_filter(tasks: &[TaskItem], filter: Filter) -> Vec<TaskItem> {
    tasks
        .iter()
        .filter(|t| match filter {
            Filter::All => true,
            Filter::Completed => t.completed,
        })
        .cloned()
        .collect()
}

/// Sort the (already filtered) list. All sorts are stable, so ties keep
/// their relative order; in particular, dateless tasks under `DueDate` stay
/// in insertion order at the end.
pub fn sort_tasks(mut tasks: Vec<TaskItem>, mode: SortMode) -> Vec<TaskItem> {
    match mode {
        SortMode::None => {}
        SortMode::DueDate => tasks.sort_by(|a, b| {
            match (a.due_date.is_empty(), b.due_date.is_empty()) {
                (true, true) => Ordering::Equal,
                (true, false) => Ordering::Greater,
                (false, true) => Ordering::Less,
                // ISO dates compare chronologically as strings.
                (false, false) => a.due_date.cmp(&b.due_date),
            }
        }),
        SortMode::Priority => tasks.sort_by(|a, b| {
            a.priority
                .rank()
                .cmp(&b.priority.rank())
                .then_with(|| a.text.cmp(&b.text))
        }),
        SortMode::Az => tasks.sort_by(|a, b| a.text.cmp(&b.text)),
    }
    tasks
}

/// Parse a task's due date; empty or malformed values yield `None`.
pub fn parse_due_date(raw: &str) -> Option<NaiveDate> {
    if raw.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// Open tasks due within `[today, today + 2 days]`, soonest first.
pub fn upcoming_tasks(tasks: &[TaskItem], today: NaiveDate) -> Vec<TaskItem> {
    let horizon = today + Days::new(2);
    let mut dated: Vec<(NaiveDate, &TaskItem)> = tasks
        .iter()
        .filter(|t| !t.completed)
        .filter_map(|t| parse_due_date(&t.due_date).map(|d| (d, t)))
        .filter(|(date, _)| *date >= today && *date <= horizon)
        .collect();
    dated.sort_by_key(|(date, _)| *date);
    dated.into_iter().map(|(_, t)| t.clone()).collect()
}

/// One rendered day of the month grid.
#[derive(Clone, Debug, PartialEq)]
pub struct CalendarCell {
    pub day: u32,
    /// ISO `YYYY-MM-DD` for this day.
    pub date: String,
    /// Whether any task's due date equals this day exactly.
    pub has_tasks: bool,
}

/// Cells for one displayed month: leading `None` padding up to the first
/// weekday (Sunday-first, like the platform calendar), then one cell per
/// day.
pub fn month_cells(year: i32, month: u32, tasks: &[TaskItem]) -> Vec<Option<CalendarCell>> {
    let mut cells = Vec::new();
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return cells;
    };

    for _ in 0..first.weekday().num_days_from_sunday() {
        cells.push(None);
    }

    let mut day = 1;
    while let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
        let iso = date.format("%Y-%m-%d").to_string();
        let has_tasks = tasks.iter().any(|t| t.due_date == iso);
        cells.push(Some(CalendarCell {
            day,
            date: iso,
            has_tasks,
        }));
        day += 1;
    }
    cells
}

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Header label for a displayed month, e.g. "August 2026".
pub fn month_label(year: i32, month: u32) -> String {
    let name = match month {
        1..=12 => MONTH_NAMES[(month - 1) as usize],
        _ => "",
    };
    format!("{name} {year}")
}

pub fn prev_month(year: i32, month: u32) -> (i32, u32) {
    if month == 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}

pub fn next_month(year: i32, month: u32) -> (i32, u32) {
    if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    }
}

/// Tasks whose due date equals `date` exactly.
pub fn tasks_on(tasks: &[TaskItem], date: &str) -> Vec<TaskItem> {
    tasks.iter().filter(|t| t.due_date == date).cloned().collect()
}

/// Completed count, total count, and rounded completion percent.
pub fn progress(tasks: &[TaskItem]) -> (usize, usize, u32) {
    let total = tasks.len();
    let completed = tasks.iter().filter(|t| t.completed).count();
    let percent = if total == 0 {
        0
    } else {
        ((completed as f64 / total as f64) * 100.0).round() as u32
    };
    (completed, total, percent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::Priority;

    fn task(text: &str, completed: bool, priority: Priority, due_date: &str) -> TaskItem {
        TaskItem {
            id: format!("id-{text}"),
            text: text.to_string(),
            completed,
            priority,
            due_date: due_date.to_string(),
        }
    }

    fn texts(tasks: &[TaskItem]) -> Vec<&str> {
        tasks.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn completed_filter_keeps_only_completed_tasks() {
        let tasks = vec![
            task("a", false, Priority::Medium, ""),
            task("b", true, Priority::Medium, ""),
        ];
        assert_eq!(texts(&apply_filter(&tasks, Filter::All)), ["a", "b"]);
        assert_eq!(texts(&apply_filter(&tasks, Filter::Completed)), ["b"]);
    }

    #[test]
    fn priority_sort_orders_high_before_low() {
        let tasks = vec![
            task("B", false, Priority::Low, ""),
            task("A", false, Priority::High, ""),
        ];
        let sorted = sort_tasks(tasks, SortMode::Priority);
        assert_eq!(texts(&sorted), ["A", "B"]);
    }

    #[test]
    fn priority_sort_breaks_ties_alphabetically() {
        let tasks = vec![
            task("zebra", false, Priority::Medium, ""),
            task("apple", false, Priority::Medium, ""),
            task("mango", false, Priority::High, ""),
        ];
        let sorted = sort_tasks(tasks, SortMode::Priority);
        assert_eq!(texts(&sorted), ["mango", "apple", "zebra"]);
    }

    #[test]
    fn due_date_sort_puts_dateless_tasks_last() {
        let tasks = vec![
            task("aaa", false, Priority::Medium, ""),
            task("zzz", false, Priority::Medium, "2026-08-09"),
            task("mmm", false, Priority::Medium, "2026-08-08"),
        ];
        let sorted = sort_tasks(tasks, SortMode::DueDate);
        assert_eq!(texts(&sorted), ["mmm", "zzz", "aaa"]);
    }

    #[test]
    fn due_date_sort_keeps_dateless_order_stable() {
        let tasks = vec![
            task("second", false, Priority::Medium, ""),
            task("first", false, Priority::Medium, ""),
            task("dated", false, Priority::Medium, "2026-08-08"),
        ];
        let sorted = sort_tasks(tasks, SortMode::DueDate);
        assert_eq!(texts(&sorted), ["dated", "second", "first"]);
    }

    #[test]
    fn az_sort_is_alphabetical_and_none_preserves_order() {
        let tasks = vec![
            task("banana", false, Priority::Low, ""),
            task("apple", false, Priority::High, ""),
        ];
        assert_eq!(
            texts(&sort_tasks(tasks.clone(), SortMode::Az)),
            ["apple", "banana"]
        );
        assert_eq!(
            texts(&sort_tasks(tasks, SortMode::None)),
            ["banana", "apple"]
        );
    }

    #[test]
    fn upcoming_window_is_today_through_two_days_out() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 7).unwrap();
        let tasks = vec![
            task("today", false, Priority::Medium, "2026-08-07"),
            task("edge", false, Priority::Medium, "2026-08-09"),
            task("too-far", false, Priority::Medium, "2026-08-10"),
            task("yesterday", false, Priority::Medium, "2026-08-06"),
            task("done", true, Priority::Medium, "2026-08-08"),
            task("dateless", false, Priority::Medium, ""),
            task("garbled", false, Priority::Medium, "next tuesday"),
        ];
        let upcoming = upcoming_tasks(&tasks, today);
        assert_eq!(texts(&upcoming), ["today", "edge"]);
    }

    #[test]
    fn upcoming_is_sorted_by_date_ascending() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 7).unwrap();
        let tasks = vec![
            task("later", false, Priority::Medium, "2026-08-09"),
            task("sooner", false, Priority::Medium, "2026-08-07"),
        ];
        assert_eq!(texts(&upcoming_tasks(&tasks, today)), ["sooner", "later"]);
    }

    #[test]
    fn month_grid_pads_to_the_first_weekday() {
        // January 2024 started on a Monday: one leading empty cell.
        let cells = month_cells(2024, 1, &[]);
        assert_eq!(cells.len(), 1 + 31);
        assert!(cells[0].is_none());
        assert_eq!(cells[1].as_ref().unwrap().day, 1);
        assert_eq!(cells[1].as_ref().unwrap().date, "2024-01-01");

        // Leap year February.
        let feb = month_cells(2024, 2, &[]);
        let days = feb.iter().flatten().count();
        assert_eq!(days, 29);
    }

    #[test]
    fn calendar_flags_days_with_matching_due_dates() {
        let tasks = vec![task("due", false, Priority::Medium, "2024-01-15")];
        let cells = month_cells(2024, 1, &tasks);
        let flagged: Vec<u32> = cells
            .iter()
            .flatten()
            .filter(|c| c.has_tasks)
            .map(|c| c.day)
            .collect();
        assert_eq!(flagged, [15]);
    }

    #[test]
    fn task_due_today_reaches_upcoming_and_todays_cell() {
        // The client half of the login-to-calendar scenario: a freshly
        // created task due today must show up in both derived views.
        let today = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let tasks = vec![task("new", false, Priority::Medium, "2024-01-15")];

        assert_eq!(texts(&upcoming_tasks(&tasks, today)), ["new"]);

        let cells = month_cells(2024, 1, &tasks);
        let today_cell = cells
            .iter()
            .flatten()
            .find(|c| c.date == "2024-01-15")
            .unwrap();
        assert!(today_cell.has_tasks);

        assert_eq!(texts(&tasks_on(&tasks, "2024-01-15")), ["new"]);
    }

    #[test]
    fn month_navigation_wraps_at_year_boundaries() {
        assert_eq!(prev_month(2026, 1), (2025, 12));
        assert_eq!(next_month(2026, 12), (2027, 1));
        assert_eq!(next_month(2026, 8), (2026, 9));
        assert_eq!(month_label(2026, 8), "August 2026");
    }

    #[test]
    fn progress_counts_and_rounds() {
        assert_eq!(progress(&[]), (0, 0, 0));
        let tasks = vec![
            task("a", true, Priority::Medium, ""),
            task("b", false, Priority::Medium, ""),
            task("c", false, Priority::Medium, ""),
        ];
        assert_eq!(progress(&tasks), (1, 3, 33));
    }
}
