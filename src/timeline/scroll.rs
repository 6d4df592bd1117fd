//! Auto-scroll toward the today marker
//!
//! The layout math knows nothing about the rendering surface. A surface
//! reports its extent, [`AutoScroll`] decides whether a placement is due and
//! hands back a [`ScrollCommand`] for the surface to apply.

/// Size of a scrollable rendering surface, in the surface's own units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportExtent {
    /// Width of the full scrollable track
    pub scroll_width: f64,
    /// Width of the visible window
    pub client_width: f64,
}

/// Instruction for the rendering surface to move its horizontal scroll
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollCommand {
    pub scroll_left: f64,
}

/// Scroll offset that centers `marker_percent` in the visible window
///
/// Floored at zero so a marker near the origin never scrolls past the start.
pub fn centering_offset(marker_percent: f64, extent: ViewportExtent) -> f64 {
    let position = marker_percent / 100.0 * extent.scroll_width;
    (position - extent.client_width / 2.0).max(0.0)
}

/// One-shot placement tracker
///
/// Emits a command only when the marker position differs from the last one
/// it placed. Between changes the user's own scrolling is left alone.
#[derive(Debug, Clone, Default)]
pub struct AutoScroll {
    last_marker: Option<f64>,
}

impl AutoScroll {
    /// Decide whether to scroll after a layout with `marker` was committed
    pub fn place(&mut self, marker: Option<f64>, extent: ViewportExtent) -> Option<ScrollCommand> {
        if marker == self.last_marker {
            return None;
        }
        self.last_marker = marker;
        marker.map(|percent| ScrollCommand {
            scroll_left: centering_offset(percent, extent),
        })
    }

    /// Forget the last placement so the next layout scrolls again
    pub fn reset(&mut self) {
        self.last_marker = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXTENT: ViewportExtent = ViewportExtent {
        scroll_width: 1000.0,
        client_width: 200.0,
    };

    #[test]
    fn test_centering_offset() {
        assert_eq!(centering_offset(50.0, EXTENT), 400.0);
        assert_eq!(centering_offset(5.0, EXTENT), 0.0);
    }

    #[test]
    fn test_places_once_per_marker_position() {
        let mut auto = AutoScroll::default();
        assert_eq!(
            auto.place(Some(50.0), EXTENT),
            Some(ScrollCommand { scroll_left: 400.0 })
        );
        assert_eq!(auto.place(Some(50.0), EXTENT), None);
        assert_eq!(
            auto.place(Some(60.0), EXTENT),
            Some(ScrollCommand { scroll_left: 500.0 })
        );
    }

    #[test]
    fn test_missing_marker_never_scrolls() {
        let mut auto = AutoScroll::default();
        assert_eq!(auto.place(None, EXTENT), None);
        auto.place(Some(20.0), EXTENT);
        assert_eq!(auto.place(None, EXTENT), None);
        // Marker coming back is a change again
        assert!(auto.place(Some(20.0), EXTENT).is_some());
    }

    #[test]
    fn test_reset_allows_replacement() {
        let mut auto = AutoScroll::default();
        auto.place(Some(50.0), EXTENT);
        auto.reset();
        assert!(auto.place(Some(50.0), EXTENT).is_some());
    }
}
