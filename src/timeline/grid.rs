use super::bounds::TimelineBounds;
use chrono::{Duration, NaiveDate};
use std::fmt;
use std::str::FromStr;

/// How many calendar days one grid column represents
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Zoom {
    #[default]
    Day,
    Week,
}

impl Zoom {
    /// Days per column
    pub fn step(&self) -> i64 {
        match self {
            Zoom::Day => 1,
            Zoom::Week => 7,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Zoom::Day => "day",
            Zoom::Week => "week",
        }
    }
}

impl fmt::Display for Zoom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Zoom {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "day" => Ok(Zoom::Day),
            "week" => Ok(Zoom::Week),
            _ => Err(format!("Invalid zoom '{}'. Valid options are: day, week", s)),
        }
    }
}

/// A grid column boundary on the timeline track
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineColumn {
    /// First day covered by the column
    pub date: NaiveDate,
}

impl TimelineColumn {
    /// Header label, e.g. "Jan 5"
    pub fn label(&self) -> String {
        self.date.format("%b %-d").to_string()
    }

    /// Weekday label, e.g. "Fri"
    pub fn weekday_label(&self) -> String {
        self.date.format("%a").to_string()
    }

    /// Whether this column starts on `today`
    pub fn is_today(&self, today: NaiveDate) -> bool {
        self.date == today
    }
}

/// Generate the ordered column start dates for `bounds` at `zoom`
///
/// Week columns are offsets of seven days from `bounds.start_date`; they are
/// not aligned to calendar weeks. The last column may cover a partial period.
pub fn generate_columns(bounds: &TimelineBounds, zoom: Zoom) -> Vec<TimelineColumn> {
    let step = zoom.step();
    (0..bounds.total_days)
        .step_by(step as usize)
        .map(|offset| TimelineColumn {
            date: bounds.start_date + Duration::days(offset),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds(total_days: i64) -> TimelineBounds {
        let start_date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        TimelineBounds {
            start_date,
            end_date: start_date + Duration::days(total_days - 1),
            total_days,
        }
    }

    #[test]
    fn test_day_zoom_has_one_column_per_day() {
        let columns = generate_columns(&bounds(20), Zoom::Day);
        assert_eq!(columns.len(), 20);
        assert_eq!(columns[19].date, NaiveDate::from_ymd_opt(2024, 1, 20).unwrap());
    }

    #[test]
    fn test_week_zoom_rounds_up_partial_week() {
        let columns = generate_columns(&bounds(20), Zoom::Week);
        assert_eq!(columns.len(), 3);
        let dates: Vec<u32> = columns.iter().map(|c| chrono::Datelike::day(&c.date)).collect();
        assert_eq!(dates, vec![1, 8, 15]);
    }

    #[test]
    fn test_columns_never_reach_track_end() {
        let b = bounds(15);
        let end = b.start_date + Duration::days(b.total_days);
        for zoom in [Zoom::Day, Zoom::Week] {
            assert!(generate_columns(&b, zoom).iter().all(|c| c.date < end));
        }
    }

    #[test]
    fn test_column_labels() {
        let column = TimelineColumn {
            date: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
        };
        assert_eq!(column.label(), "Jan 5");
        assert_eq!(column.weekday_label(), "Fri");
    }

    #[test]
    fn test_zoom_parsing() {
        assert_eq!("week".parse::<Zoom>(), Ok(Zoom::Week));
        assert!("month".parse::<Zoom>().is_err());
    }
}
