//! Timeline layout engine for the Gantt view
//!
//! Converts a task subset and a zoom level into a percentage-based grid.
//! Every function here is pure: the same tasks, zoom and `today` always give
//! the same output, and nothing is cached between renders.
//! - `bounds`: date range and track length
//! - `grid`: zoom levels and column generation
//! - `layout`: per-task left/width percentages
//! - `today`: today marker position
//! - `scroll`: one-shot auto-scroll toward the marker
//! - `status`: status to bar class mapping

mod bounds;
mod grid;
mod layout;
mod scroll;
mod status;
mod today;

pub use bounds::{EMPTY_RANGE_DAYS, MIN_TOTAL_DAYS, TimelineBounds, compute_bounds};
pub use grid::{TimelineColumn, Zoom, generate_columns};
pub use layout::{
    TaskLayout, column_width_percent, duration_days, position_percent, task_layout,
};
pub use scroll::{AutoScroll, ScrollCommand, ViewportExtent, centering_offset};
pub use status::{StatusClass, classify};
pub use today::today_marker;

use crate::project::Task;
use chrono::NaiveDate;

/// Everything a renderer needs to paint one Gantt frame
#[derive(Debug, Clone, PartialEq)]
pub struct Timeline {
    pub bounds: TimelineBounds,
    pub zoom: Zoom,
    pub columns: Vec<TimelineColumn>,
    /// Layout per task id, in input order
    pub layouts: Vec<(String, TaskLayout)>,
    pub today_marker: Option<f64>,
}

impl Timeline {
    /// Layout of a task by id
    pub fn layout_of(&self, task_id: &str) -> Option<TaskLayout> {
        self.layouts
            .iter()
            .find(|(id, _)| id == task_id)
            .map(|(_, layout)| *layout)
    }
}

/// Run the whole engine for one render
///
/// # Arguments
/// * `tasks` - Visible task subset (already filtered)
/// * `zoom` - Active zoom level
/// * `today` - Current date; injected so results are reproducible
pub fn compute_timeline(tasks: &[Task], zoom: Zoom, today: NaiveDate) -> Timeline {
    let bounds = compute_bounds(tasks, today);
    let step = zoom.step();
    let columns = generate_columns(&bounds, zoom);
    let layouts = tasks
        .iter()
        .map(|task| (task.id.clone(), task_layout(task, &bounds, step)))
        .collect();
    let today_marker = today_marker(&bounds, step, today);

    log::debug!(
        "event=timeline_computed tasks={} zoom={} start={} total_days={} columns={} today_visible={}",
        tasks.len(),
        zoom,
        bounds.start_date,
        bounds.total_days,
        columns.len(),
        today_marker.is_some()
    );

    Timeline {
        bounds,
        zoom,
        columns,
        layouts,
        today_marker,
    }
}
