//! Maps a scroll offset onto a tracked element's trigger range.

use std::ops::Range;

use web_sys::{window, HtmlElement};

/// Scroll offsets between which a tracked element's progress runs 0 → 1.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollRange {
    pub start: f64,
    pub end: f64,
}

impl ScrollRange {
    #[cfg(test)]
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Sticky-track range: starts when the element's top reaches the top of
    /// the viewport and ends when its bottom reaches the bottom.
    pub fn sticky_track(element_top: f64, element_height: f64, viewport_height: f64) -> Self {
        Self {
            start: element_top,
            end: element_top + element_height - viewport_height,
        }
    }

    pub fn is_degenerate(&self) -> bool {
        !(self.start.is_finite() && self.end.is_finite()) || self.end <= self.start
    }

    /// Normalized progress in [0, 1]. Degenerate ranges report 0.
    pub fn progress(&self, offset: f64) -> f64 {
        if self.is_degenerate() || !offset.is_finite() {
            return 0.0;
        }
        if offset >= self.end {
            return 1.0;
        }
        ((offset - self.start) / (self.end - self.start)).clamp(0.0, 1.0)
    }
}

/// Clamped linear interpolation of `value` from `input` onto `output`.
///
/// A zero-width input range acts as a step at `input.start`.
pub fn remap(value: f64, input: Range<f64>, output: Range<f64>) -> f64 {
    let span = input.end - input.start;
    let t = if span.abs() < f64::EPSILON {
        if value >= input.start { 1.0 } else { 0.0 }
    } else {
        ((value - input.start) / span).clamp(0.0, 1.0)
    };
    output.start + (output.end - output.start) * t
}

/// Absolute document top and rendered height of an element.
pub fn measure(element: &HtmlElement) -> (f64, f64) {
    let scroll_y = window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0);
    let rect = element.get_bounding_client_rect();
    (rect.top() + scroll_y, element.offset_height() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_exact() {
        let range = ScrollRange::new(1234.5, 9876.25);
        assert_eq!(range.progress(range.start), 0.0);
        assert_eq!(range.progress(range.end), 1.0);
    }

    #[test]
    fn progress_is_monotonic_and_bounded() {
        let range = ScrollRange::sticky_track(2000.0, 6000.0, 900.0);
        let mut last = -1.0;
        let mut offset = range.start - 500.0;
        while offset <= range.end + 500.0 {
            let p = range.progress(offset);
            assert!((0.0..=1.0).contains(&p));
            assert!(p >= last);
            last = p;
            offset += 37.0;
        }
    }

    #[test]
    fn clamps_outside_the_range() {
        let range = ScrollRange::new(100.0, 200.0);
        assert_eq!(range.progress(0.0), 0.0);
        assert_eq!(range.progress(150.0), 0.5);
        assert_eq!(range.progress(10_000.0), 1.0);
    }

    #[test]
    fn degenerate_geometry_is_zero() {
        assert_eq!(ScrollRange::new(500.0, 500.0).progress(600.0), 0.0);
        assert_eq!(ScrollRange::new(500.0, 100.0).progress(300.0), 0.0);
        // Element shorter than the viewport
        let short = ScrollRange::sticky_track(100.0, 400.0, 800.0);
        assert!(short.is_degenerate());
        assert_eq!(short.progress(200.0), 0.0);
        assert_eq!(ScrollRange::new(0.0, 100.0).progress(f64::NAN), 0.0);
    }

    #[test]
    fn remap_clamps_and_steps() {
        assert_eq!(remap(0.5, 0.0..1.0, 0.0..100.0), 50.0);
        assert_eq!(remap(2.0, 0.0..1.0, 0.0..100.0), 100.0);
        assert_eq!(remap(-1.0, 0.0..1.0, 10.0..20.0), 10.0);
        assert_eq!(remap(0.3, 0.3..0.3, 0.0..1.0), 1.0);
        assert_eq!(remap(0.29, 0.3..0.3, 0.0..1.0), 0.0);
    }
}
