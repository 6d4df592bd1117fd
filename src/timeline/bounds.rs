use crate::project::Task;
use chrono::{Duration, NaiveDate};

/// Span used when there are no tasks to lay out
pub const EMPTY_RANGE_DAYS: i64 = 30;

/// Smallest grid the timeline will produce for a non-empty task set
pub const MIN_TOTAL_DAYS: i64 = 7;

/// Inclusive date range covering every task in the current view
///
/// `total_days` is the track length used by all position math. It can be
/// longer than `end_date - start_date + 1` because of the seven-day floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineBounds {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total_days: i64,
}

impl TimelineBounds {
    /// Whether `date` falls on the track, i.e. `[start, start + total_days)`
    pub fn contains(&self, date: NaiveDate) -> bool {
        let offset = self.days_from_start(date);
        offset >= 0 && offset < self.total_days
    }

    /// Whole days between the track origin and `date` (negative before it)
    pub fn days_from_start(&self, date: NaiveDate) -> i64 {
        (date - self.start_date).num_days()
    }
}

/// Compute the bounds for a set of tasks
///
/// # Arguments
/// * `tasks` - The visible task subset
/// * `today` - Anchor for the empty-state range
///
/// # Returns
/// `[today, today + 30]` with 30 days when `tasks` is empty, otherwise the
/// earliest and latest of every start/end date with at least 7 days.
pub fn compute_bounds(tasks: &[Task], today: NaiveDate) -> TimelineBounds {
    let dates = tasks.iter().flat_map(|t| [t.start_date, t.end_date]);
    let (Some(start_date), Some(end_date)) = (dates.clone().min(), dates.max()) else {
        return TimelineBounds {
            start_date: today,
            end_date: today + Duration::days(EMPTY_RANGE_DAYS),
            total_days: EMPTY_RANGE_DAYS,
        };
    };

    let span = (end_date - start_date).num_days() + 1;
    TimelineBounds {
        start_date,
        end_date,
        total_days: span.max(MIN_TOTAL_DAYS),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::TaskStatus;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn task(start: NaiveDate, end: NaiveDate) -> Task {
        Task {
            id: format!("{}-{}", start, end),
            title: "Task".to_string(),
            status: TaskStatus::NotStarted,
            assignee: String::new(),
            start_date: start,
            end_date: end,
            dependencies: Vec::new(),
            project_id: "p".to_string(),
        }
    }

    #[test]
    fn test_empty_tasks_use_thirty_day_fallback() {
        let today = date(2024, 3, 15);
        let bounds = compute_bounds(&[], today);
        assert_eq!(bounds.start_date, today);
        assert_eq!(bounds.end_date, date(2024, 4, 14));
        assert_eq!(bounds.total_days, 30);
    }

    #[test]
    fn test_short_span_is_floored_to_a_week() {
        let bounds = compute_bounds(&[task(date(2024, 1, 1), date(2024, 1, 3))], date(2030, 1, 1));
        assert_eq!(bounds.start_date, date(2024, 1, 1));
        assert_eq!(bounds.end_date, date(2024, 1, 3));
        assert_eq!(bounds.total_days, 7);
    }

    #[test]
    fn test_inverted_task_still_contributes_both_dates() {
        let bounds = compute_bounds(&[task(date(2024, 2, 10), date(2024, 2, 5))], date(2030, 1, 1));
        assert_eq!(bounds.start_date, date(2024, 2, 5));
        assert_eq!(bounds.end_date, date(2024, 2, 10));
    }

    #[test]
    fn test_contains_is_half_open() {
        let bounds = compute_bounds(&[task(date(2024, 1, 1), date(2024, 1, 3))], date(2030, 1, 1));
        assert!(bounds.contains(date(2024, 1, 1)));
        assert!(bounds.contains(date(2024, 1, 7)));
        assert!(!bounds.contains(date(2024, 1, 8)));
        assert!(!bounds.contains(date(2023, 12, 31)));
    }
}
