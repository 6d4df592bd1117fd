use super::bounds::TimelineBounds;
use crate::project::Task;
use chrono::NaiveDate;

/// Horizontal placement of one task bar on the 0–100 track
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaskLayout {
    /// Left edge, percent of the full track width
    pub left: f64,
    /// Bar width, percent of the full track width
    pub width: f64,
}

impl TaskLayout {
    /// Right edge, percent of the full track width
    pub fn right(&self) -> f64 {
        self.left + self.width
    }
}

/// Share of the track occupied by one column
pub fn column_width_percent(bounds: &TimelineBounds, step: i64) -> f64 {
    100.0 / (bounds.total_days as f64 / step as f64)
}

/// Percent offset of a date from the track origin
///
/// Not clamped: dates before the origin give negative values and dates past
/// the end give values over 100.
pub fn position_percent(bounds: &TimelineBounds, step: i64, date: NaiveDate) -> f64 {
    let days_from_start = bounds.days_from_start(date);
    (days_from_start as f64 / step as f64) * column_width_percent(bounds, step)
}

/// Inclusive duration of a task in days, at least one
pub fn duration_days(task: &Task) -> i64 {
    ((task.end_date - task.start_date).num_days() + 1).max(1)
}

/// Compute where a task's bar sits on the track
///
/// # Arguments
/// * `task` - Task to place
/// * `bounds` - Track origin and length
/// * `step` - Days per column (1 for day zoom, 7 for week zoom)
pub fn task_layout(task: &Task, bounds: &TimelineBounds, step: i64) -> TaskLayout {
    let column_width = column_width_percent(bounds, step);
    TaskLayout {
        left: position_percent(bounds, step, task.start_date),
        width: (duration_days(task) as f64 / step as f64) * column_width,
    }
}
