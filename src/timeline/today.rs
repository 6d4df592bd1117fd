use super::bounds::TimelineBounds;
use super::layout::position_percent;
use chrono::NaiveDate;

/// Percent position of `today` on the track
///
/// Returns `None` when today lies outside `[start, start + total_days)`, in
/// which case no marker is drawn and no auto-scroll happens.
pub fn today_marker(bounds: &TimelineBounds, step: i64, today: NaiveDate) -> Option<f64> {
    if !bounds.contains(today) {
        return None;
    }
    Some(position_percent(bounds, step, today))
}
