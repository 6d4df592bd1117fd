//! Text renderer for the Gantt view
//!
//! Paints the layout engine's percentages onto a fixed-width character track.
//! Only the slice of each row that fits the viewport is built and printed. The renderer owns
//! all presentation; the engine output is never modified.

use crate::project::{Task, TaskStatus};
use crate::timeline::{AutoScroll, Timeline, ViewportExtent, classify};
use chrono::NaiveDate;

/// Width of the task title column
pub const LABEL_WIDTH: usize = 24;
/// Characters per grid column on the track
pub const CELL_WIDTH: usize = 7;
/// Visible track width when the client does not ask for one
pub const DEFAULT_VIEWPORT_WIDTH: usize = 84;

const GRID_CHAR: char = '·';
const TODAY_CHAR: char = '│';

/// Visible slice of the track, in characters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub offset: usize,
    pub width: usize,
}

/// Scroll state of the Gantt view across renders
///
/// Survives between tool calls so manual scrolling sticks until the today
/// marker moves. The client's requested window width is kept here too, so
/// every later render of the same view uses it.
#[derive(Debug, Clone, Default)]
pub struct GanttViewState {
    auto_scroll: AutoScroll,
    scroll_left: usize,
    viewport_width: Option<usize>,
}

impl GanttViewState {
    /// Forget scroll position, auto-scroll history and the requested width
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Start the view over: back to the origin, re-center on today at the
    /// next render. The requested width is kept.
    pub fn rewind(&mut self) {
        self.auto_scroll.reset();
        self.scroll_left = 0;
    }

    /// Window width to render with, falling back to `default_width`
    pub fn viewport_width(&self, default_width: usize) -> usize {
        self.viewport_width.unwrap_or(default_width).max(1)
    }

    /// Remember the client's window width
    ///
    /// A different width rewinds the view so the today marker is centered
    /// for the new window.
    pub fn set_viewport_width(&mut self, width: usize) {
        let width = width.max(1);
        if self.viewport_width != Some(width) {
            self.viewport_width = Some(width);
            self.rewind();
        }
    }

    /// Manual scroll by `delta` characters; clamped at the track origin
    pub fn scroll_by(&mut self, delta: i64) {
        self.scroll_left = if delta < 0 {
            self.scroll_left.saturating_sub(delta.unsigned_abs() as usize)
        } else {
            self.scroll_left.saturating_add(delta as usize)
        };
    }

    /// Settle the viewport for a freshly computed timeline
    ///
    /// Applies the auto-scroll command if the today marker moved, then clamps
    /// the offset so the window stays on the track.
    pub fn frame(&mut self, timeline: &Timeline, default_width: usize) -> Viewport {
        let track = track_width(timeline);
        let width = self.viewport_width(default_width).min(track.max(1));
        let extent = ViewportExtent {
            scroll_width: track as f64,
            client_width: width as f64,
        };
        if let Some(command) = self.auto_scroll.place(timeline.today_marker, extent) {
            log::debug!(
                "event=auto_scroll marker={:?} scroll_left={}",
                timeline.today_marker,
                command.scroll_left
            );
            self.scroll_left = command.scroll_left.round() as usize;
        }
        self.scroll_left = self.scroll_left.min(track.saturating_sub(width));
        Viewport {
            offset: self.scroll_left,
            width,
        }
    }
}

/// Full track width for a timeline, in characters
pub fn track_width(timeline: &Timeline) -> usize {
    timeline.columns.len() * CELL_WIDTH
}

/// Character index for a track percentage (not clamped)
fn to_char_index(percent: f64, track: usize) -> i64 {
    (percent / 100.0 * track as f64).round() as i64
}

fn fit(text: &str, width: usize) -> String {
    let mut out: String = text.chars().take(width.saturating_sub(1)).collect();
    while out.chars().count() < width {
        out.push(' ');
    }
    out
}

impl Viewport {
    fn end(&self) -> usize {
        self.offset + self.width
    }
}

/// Date and weekday header rows, built only for the columns in view
fn header_rows(timeline: &Timeline, today: NaiveDate, viewport: Viewport) -> (String, String) {
    let last = viewport.end().div_ceil(CELL_WIDTH).min(timeline.columns.len());
    let first = (viewport.offset / CELL_WIDTH).min(last);
    let mut dates = String::new();
    let mut weekdays = String::new();
    for column in &timeline.columns[first..last] {
        let mark = if column.is_today(today) { '*' } else { ' ' };
        dates.extend(format!("{:<6}{}", column.label(), mark).chars().take(CELL_WIDTH));
        weekdays.extend(format!("{:<7}", column.weekday_label()).chars().take(CELL_WIDTH));
    }
    let skip = viewport.offset - first * CELL_WIDTH;
    (
        dates.chars().skip(skip).take(viewport.width).collect(),
        weekdays.chars().skip(skip).take(viewport.width).collect(),
    )
}

/// Cells of one task row inside the viewport
///
/// Bar cells cover the today marker, which covers the grid dots.
fn task_cells(task: &Task, timeline: &Timeline, track: usize, viewport: Viewport) -> Vec<char> {
    let last = track.max(1) as i64 - 1;
    let marker = timeline
        .today_marker
        .map(|m| to_char_index(m, track).clamp(0, last));

    let bar = timeline.layout_of(&task.id).map(|layout| {
        let start = to_char_index(layout.left, track).clamp(0, track as i64);
        let mut end = to_char_index(layout.right(), track).clamp(0, track as i64);
        if end <= start && start < track as i64 {
            end = start + 1;
        }
        (start..end, classify(task.status).glyph())
    });

    (viewport.offset..viewport.end())
        .map(|i| {
            let idx = i as i64;
            match &bar {
                Some((range, glyph)) if range.contains(&idx) => *glyph,
                _ if marker == Some(idx) => TODAY_CHAR,
                _ if i % CELL_WIDTH == 0 => GRID_CHAR,
                _ => ' ',
            }
        })
        .collect()
}

/// Render one Gantt frame
///
/// # Arguments
/// * `tasks` - The tasks that were laid out, in row order
/// * `timeline` - Engine output for exactly those tasks
/// * `today` - Used for the header highlight
/// * `viewport` - Visible slice of the track
pub fn render_gantt(
    tasks: &[Task],
    timeline: &Timeline,
    today: NaiveDate,
    viewport: Viewport,
) -> String {
    let track = track_width(timeline);
    let bounds = &timeline.bounds;
    let mut out = format!(
        "Timeline {} → {} ({} days, zoom: {}, showing {}-{} of {})\n\n",
        bounds.start_date,
        bounds.end_date,
        bounds.total_days,
        timeline.zoom,
        viewport.offset,
        viewport.offset + viewport.width,
        track
    );

    let (dates, weekdays) = header_rows(timeline, today, viewport);
    out.push_str(&format!("{}│{}\n", fit("Task", LABEL_WIDTH), dates));
    out.push_str(&format!("{}│{}\n", fit("", LABEL_WIDTH), weekdays));
    out.push_str(&format!(
        "{}┼{}\n",
        "─".repeat(LABEL_WIDTH),
        "─".repeat(viewport.width)
    ));

    for task in tasks {
        let cells = task_cells(task, timeline, track, viewport);
        let row: String = cells.iter().collect();
        out.push_str(&format!("{}│{}\n", fit(&task.title, LABEL_WIDTH), row));
        if !task.assignee.is_empty() {
            let blank: String = cells
                .iter()
                .map(|c| if *c == TODAY_CHAR || *c == GRID_CHAR { *c } else { ' ' })
                .collect();
            out.push_str(&format!(
                "{}│{}\n",
                fit(&format!("  {}", task.assignee), LABEL_WIDTH),
                blank
            ));
        }
    }

    out.push('\n');
    out.push_str(&legend(timeline.today_marker.is_some()));
    out
}

/// Legend line; the today entry only appears while the marker is visible
pub fn legend(show_today: bool) -> String {
    let mut parts: Vec<String> = TaskStatus::ALL
        .iter()
        .map(|status| format!("{} {}", classify(*status).glyph(), status.label()))
        .collect();
    if show_today {
        parts.push(format!("{} Today", TODAY_CHAR));
    }
    format!("Legend: {}\n", parts.join("  "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timeline::{Zoom, compute_timeline};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn task(id: &str, start: NaiveDate, end: NaiveDate, status: TaskStatus) -> Task {
        Task {
            id: id.to_string(),
            title: format!("Task {}", id),
            status,
            assignee: "Lisa Brown".to_string(),
            start_date: start,
            end_date: end,
            dependencies: Vec::new(),
            project_id: "p".to_string(),
        }
    }

    #[test]
    fn test_bar_covers_its_share_of_the_track() {
        let tasks = vec![task("a", date(2024, 1, 1), date(2024, 1, 3), TaskStatus::Completed)];
        let timeline = compute_timeline(&tasks, Zoom::Day, date(2030, 1, 1));
        let track = track_width(&timeline);
        let full = Viewport { offset: 0, width: track };
        let cells = task_cells(&tasks[0], &timeline, track, full);
        assert_eq!(cells.len(), 49);
        assert_eq!(cells.iter().filter(|c| **c == '█').count(), 21);
    }

    #[test]
    fn test_today_marker_drawn_and_scrolled_into_view() {
        let tasks = vec![task("a", date(2024, 1, 1), date(2024, 1, 30), TaskStatus::InProgress)];
        let today = date(2024, 1, 21);
        let timeline = compute_timeline(&tasks, Zoom::Day, today);
        let mut state = GanttViewState::default();
        let viewport = state.frame(&timeline, 70);
        // Marker at 20/30 of 210 chars = 140; centered: 140 - 35
        assert_eq!(viewport.offset, 105);

        let frame = render_gantt(&tasks, &timeline, today, viewport);
        assert!(frame.contains("Jan 21*"));
        assert!(frame.contains("│ Today"));
    }

    #[test]
    fn test_manual_scroll_survives_rerender() {
        let tasks = vec![task("a", date(2024, 1, 1), date(2024, 1, 30), TaskStatus::NotStarted)];
        let today = date(2024, 1, 21);
        let timeline = compute_timeline(&tasks, Zoom::Day, today);
        let mut state = GanttViewState::default();
        state.frame(&timeline, 70);
        state.scroll_by(-100);
        assert_eq!(state.frame(&timeline, 70).offset, 5);
    }

    #[test]
    fn test_viewport_is_clamped_to_track() {
        let tasks = vec![task("a", date(2024, 1, 1), date(2024, 1, 3), TaskStatus::NotStarted)];
        let timeline = compute_timeline(&tasks, Zoom::Day, date(2030, 1, 1));
        let mut state = GanttViewState::default();
        state.scroll_by(500);
        let viewport = state.frame(&timeline, 84);
        assert_eq!(viewport, Viewport { offset: 0, width: 49 });
    }

    #[test]
    fn test_legend_omits_today_when_marker_hidden() {
        assert!(!legend(false).contains("Today"));
        assert!(legend(true).contains("Today"));
    }

    #[test]
    fn test_rewind_recenters_on_today() {
        let tasks = vec![task("a", date(2024, 1, 1), date(2024, 1, 30), TaskStatus::InProgress)];
        let today = date(2024, 1, 21);
        let timeline = compute_timeline(&tasks, Zoom::Day, today);
        let mut state = GanttViewState::default();
        state.frame(&timeline, 70);
        state.scroll_by(-100);
        state.rewind();
        assert_eq!(state.frame(&timeline, 70).offset, 105);
    }

    #[test]
    fn test_requested_width_sticks_until_reset() {
        let tasks = vec![task("a", date(2024, 1, 1), date(2024, 1, 30), TaskStatus::Completed)];
        let timeline = compute_timeline(&tasks, Zoom::Day, date(2030, 1, 1));
        let mut state = GanttViewState::default();
        state.set_viewport_width(35);
        state.scroll_by(7);
        assert_eq!(state.frame(&timeline, 84), Viewport { offset: 7, width: 35 });
        assert_eq!(state.frame(&timeline, 84).width, 35);

        state.reset();
        assert_eq!(state.frame(&timeline, 84), Viewport { offset: 0, width: 84 });
    }

    #[test]
    fn test_long_span_renders_only_the_viewport() {
        let tasks = vec![task("a", date(1900, 1, 1), date(2099, 12, 31), TaskStatus::Completed)];
        let timeline = compute_timeline(&tasks, Zoom::Day, date(2030, 1, 1));
        let mut state = GanttViewState::default();
        state.scroll_by(1_000_000);
        let viewport = state.frame(&timeline, 84);
        let frame = render_gantt(&tasks, &timeline, date(2030, 1, 1), viewport);
        for line in frame.lines().skip(2).take(4) {
            assert!(line.chars().count() <= LABEL_WIDTH + 1 + 84, "{}", line);
        }
        assert!(frame.contains("████"));
    }
}
