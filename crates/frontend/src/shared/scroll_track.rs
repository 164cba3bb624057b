//! Scroll-state math for the horizontally scrollable product rows.
//!
//! The carousel component reads raw numbers off the DOM (scroll offset,
//! client width, scroll width) and everything else is computed here, so the
//! edge logic stays host-testable.

/// Slack against sub-pixel rounding at either edge of the track; without it
/// the scroll affordances flicker near the boundaries.
pub const EDGE_TOLERANCE: f64 = 8.0;

/// Share of the visible row used as the paging step when no card can be
/// measured.
pub const PAGE_FALLBACK_FRACTION: f64 = 0.86;

/// One reading of a track's horizontal geometry.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollMetrics {
    /// Current horizontal scroll position.
    pub offset: f64,
    /// Visible width of the track.
    pub viewport: f64,
    /// Full scrollable width of the content.
    pub content: f64,
}

impl ScrollMetrics {
    pub fn max_offset(&self) -> f64 {
        (self.content - self.viewport).max(0.0)
    }

    /// True when the content meaningfully exceeds the viewport. A row with
    /// zero or one cards never overflows.
    pub fn has_overflow(&self) -> bool {
        self.max_offset() > EDGE_TOLERANCE
    }

    pub fn can_scroll_left(&self) -> bool {
        self.has_overflow() && self.offset > EDGE_TOLERANCE
    }

    pub fn can_scroll_right(&self) -> bool {
        self.has_overflow() && self.max_offset() - self.offset > EDGE_TOLERANCE
    }
}

/// Distance of one paging action: roughly one card (plus the inter-card gap)
/// in the given direction. Falls back to a fixed share of the viewport when
/// the row has no measurable card.
pub fn page_distance(card_width: Option<f64>, gap: f64, viewport: f64, direction: i32) -> f64 {
    let card = card_width.unwrap_or(viewport * PAGE_FALLBACK_FRACTION);
    (card + gap).floor() * f64::from(direction)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(offset: f64, viewport: f64, content: f64) -> ScrollMetrics {
        ScrollMetrics {
            offset,
            viewport,
            content,
        }
    }

    #[test]
    fn short_row_reports_no_overflow() {
        // Content narrower than the viewport: nothing to scroll.
        let m = metrics(0.0, 1200.0, 600.0);
        assert!(!m.has_overflow());
        assert!(!m.can_scroll_left());
        assert!(!m.can_scroll_right());
    }

    #[test]
    fn exact_fit_reports_no_overflow() {
        let m = metrics(0.0, 900.0, 900.0);
        assert!(!m.has_overflow());
        assert!(!m.can_scroll_left());
        assert!(!m.can_scroll_right());
    }

    #[test]
    fn sub_pixel_overflow_is_suppressed() {
        // Less than the tolerance counts as "fits in view".
        let m = metrics(0.0, 900.0, 900.0 + EDGE_TOLERANCE);
        assert!(!m.has_overflow());
    }

    #[test]
    fn at_start_only_right_is_enabled() {
        let m = metrics(0.0, 600.0, 1800.0);
        assert!(m.has_overflow());
        assert!(!m.can_scroll_left());
        assert!(m.can_scroll_right());
    }

    #[test]
    fn at_end_only_left_is_enabled() {
        let m = metrics(1200.0, 600.0, 1800.0);
        assert!(!m.can_scroll_right());
        assert!(m.can_scroll_left());
    }

    #[test]
    fn mid_track_enables_both() {
        let m = metrics(500.0, 600.0, 1800.0);
        assert!(m.can_scroll_left());
        assert!(m.can_scroll_right());
    }

    #[test]
    fn near_edges_within_tolerance_count_as_edges() {
        let m = metrics(EDGE_TOLERANCE, 600.0, 1800.0);
        assert!(!m.can_scroll_left());

        let m = metrics(1200.0 - EDGE_TOLERANCE, 600.0, 1800.0);
        assert!(!m.can_scroll_right());
    }

    #[test]
    fn page_distance_uses_card_and_gap() {
        assert_eq!(page_distance(Some(280.0), 16.0, 1200.0, 1), 296.0);
        assert_eq!(page_distance(Some(280.0), 16.0, 1200.0, -1), -296.0);
        // Fractional widths are floored before applying direction.
        assert_eq!(page_distance(Some(280.7), 16.0, 1200.0, 1), 296.0);
    }

    #[test]
    fn page_distance_falls_back_to_viewport_share() {
        let distance = page_distance(None, 0.0, 1000.0, 1);
        assert_eq!(distance, (1000.0 * PAGE_FALLBACK_FRACTION).floor());
    }
}
