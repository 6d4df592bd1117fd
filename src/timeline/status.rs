use crate::project::TaskStatus;

/// Presentational class of a task bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusClass {
    Completed,
    InProgress,
    NotStarted,
}

impl StatusClass {
    /// Style class name used by renderers
    pub fn class_name(&self) -> &'static str {
        match self {
            StatusClass::Completed => "gantt-bar-completed",
            StatusClass::InProgress => "gantt-bar-in-progress",
            StatusClass::NotStarted => "gantt-bar-not-started",
        }
    }

    /// Fill character for text bars
    pub fn glyph(&self) -> char {
        match self {
            StatusClass::Completed => '█',
            StatusClass::InProgress => '▓',
            StatusClass::NotStarted => '░',
        }
    }
}

/// Map a status to its bar class. The status domain is closed, so there is
/// no fallback arm.
pub fn classify(status: TaskStatus) -> StatusClass {
    match status {
        TaskStatus::Completed => StatusClass::Completed,
        TaskStatus::InProgress => StatusClass::InProgress,
        TaskStatus::NotStarted => StatusClass::NotStarted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_status_has_distinct_class() {
        let classes: Vec<&str> = TaskStatus::ALL
            .iter()
            .map(|s| classify(*s).class_name())
            .collect();
        assert_eq!(
            classes,
            vec![
                "gantt-bar-completed",
                "gantt-bar-in-progress",
                "gantt-bar-not-started"
            ]
        );
    }
}
