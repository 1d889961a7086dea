//! Horizontal process timeline driven by vertical scroll progress.
//!
//! Steps sit left to right on a strip: a leading pad, one block (card + gap)
//! per step, the closing call-to-action and a short trailing pad. Progress
//! translates the strip left, fills the line and lights each node and card
//! once progress passes its threshold.

use crate::scroll::progress::remap;
use crate::viewport::{DeviceClass, ViewportState};

/// Width of the fade band just before a threshold.
pub const ACTIVATION_BAND: f64 = 0.005;
/// Progress span over which a card's bar fills after it activates.
pub const BAR_FILL_SPAN: f64 = 0.1;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepIcon {
    Search,
    Target,
    Code,
    Sparkles,
    Check,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TimelineStep {
    pub id: u32,
    pub phase: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: StepIcon,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimelineLayout {
    pub padding_start: f64,
    pub card_width: f64,
    pub gap: f64,
    pub cta_width: f64,
}

impl TimelineLayout {
    pub fn for_viewport(viewport: &ViewportState) -> Self {
        match viewport.device {
            DeviceClass::Desktop => Self {
                padding_start: 260.0,
                card_width: 450.0,
                gap: 300.0,
                cta_width: 600.0,
            },
            DeviceClass::Tablet => Self {
                padding_start: 80.0,
                card_width: 400.0,
                gap: 150.0,
                cta_width: 450.0,
            },
            DeviceClass::Mobile => Self {
                padding_start: 16.0,
                card_width: (viewport.width - 40.0).max(0.0),
                gap: 60.0,
                cta_width: (viewport.width - 40.0).clamp(0.0, 300.0),
            },
        }
    }

    pub fn block_width(&self) -> f64 {
        self.card_width + self.gap
    }

    /// Trailing pad, shorter than the leading one so the strip ends close to
    /// the right edge.
    pub fn end_padding(&self) -> f64 {
        self.padding_start / 4.0
    }

    pub fn total_width(&self, steps: usize) -> f64 {
        self.padding_start
            + steps as f64 * self.block_width()
            + self.cta_width
            + self.end_padding()
    }

    /// Node x positions: one before each card plus one past the last.
    pub fn node_positions(&self, steps: usize) -> Vec<f64> {
        (0..=steps)
            .map(|i| self.padding_start + i as f64 * self.block_width())
            .collect()
    }

    pub fn card_start(&self, index: usize) -> f64 {
        self.padding_start + index as f64 * self.block_width() + self.gap / 2.0
    }

    pub fn cta_center(&self, steps: usize) -> f64 {
        self.padding_start + steps as f64 * self.block_width() + self.cta_width / 2.0
    }
}

/// Activation thresholds for one layout, in progress space.
#[derive(Clone, Debug, PartialEq)]
pub struct ThresholdMap {
    pub nodes: Vec<f64>,
    pub cards: Vec<f64>,
}

impl ThresholdMap {
    /// Positions are normalized along the line running from the first node
    /// to the last.
    pub fn compute(layout: &TimelineLayout, steps: usize) -> Self {
        let positions = layout.node_positions(steps);
        let line_start = positions[0];
        let line_length = positions[positions.len() - 1] - line_start;
        let normalize = |x: f64| {
            if line_length > 0.0 {
                (x - line_start) / line_length
            } else {
                0.0
            }
        };
        Self {
            nodes: positions.iter().map(|x| normalize(*x)).collect(),
            cards: (0..steps).map(|i| normalize(layout.card_start(i))).collect(),
        }
    }
}

/// Everything needed to paint the horizontal timeline for one viewport.
#[derive(Clone, Debug, PartialEq)]
pub struct HorizontalTimeline {
    pub layout: TimelineLayout,
    pub thresholds: ThresholdMap,
    pub total_width: f64,
    pub line_start: f64,
    pub line_length: f64,
    pub max_scroll: f64,
    pub node_positions: Vec<f64>,
}

impl HorizontalTimeline {
    pub fn new(viewport: &ViewportState, steps: usize) -> Self {
        let layout = TimelineLayout::for_viewport(viewport);
        let node_positions = layout.node_positions(steps);
        let total_width = layout.total_width(steps);
        let line_start = node_positions[0];
        let line_length = node_positions[node_positions.len() - 1] - line_start;

        // Desktop stops when the strip's right edge meets the viewport's;
        // narrower layouts stop with the CTA centered.
        let max_scroll = if viewport.device.is_desktop() {
            (total_width - viewport.width).max(0.0)
        } else {
            (layout.cta_center(steps) - viewport.width / 2.0).max(0.0)
        };

        Self {
            thresholds: ThresholdMap::compute(&layout, steps),
            layout,
            total_width,
            line_start,
            line_length,
            max_scroll,
            node_positions,
        }
    }

    pub fn frame(&self, progress: f64) -> TimelineFrame {
        let progress = if progress.is_finite() { progress.clamp(0.0, 1.0) } else { 0.0 };
        TimelineFrame {
            translate_x: -progress * self.max_scroll,
            line_fill: progress * 100.0,
            nodes: self
                .thresholds
                .nodes
                .iter()
                .enumerate()
                .map(|(i, t)| if i == 0 { 1.0 } else { activation(progress, *t) })
                .collect(),
            cards: self
                .thresholds
                .cards
                .iter()
                .map(|t| CardFrame {
                    active: activation(progress, *t),
                    bar_fill: remap(progress, *t..*t + BAR_FILL_SPAN, 0.0..100.0),
                })
                .collect(),
        }
    }
}

/// 0 → 1 across the band just before `threshold`.
pub fn activation(progress: f64, threshold: f64) -> f64 {
    if progress >= threshold {
        return 1.0;
    }
    remap(progress, threshold - ACTIVATION_BAND..threshold, 0.0..1.0)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardFrame {
    /// 0 = dormant, 1 = lit.
    pub active: f64,
    /// Progress bar width in percent.
    pub bar_fill: f64,
}

/// Render-time values for one progress sample.
#[derive(Clone, Debug, PartialEq)]
pub struct TimelineFrame {
    pub translate_x: f64,
    pub line_fill: f64,
    pub nodes: Vec<f64>,
    pub cards: Vec<CardFrame>,
}

/// How the timeline is laid out for the current device class. Chosen once
/// per classification, so a resize that changes the class swaps the whole
/// strategy and drops its thresholds.
#[derive(Clone, Debug, PartialEq)]
pub enum TimelineStrategy {
    /// Scroll-jacked strip: vertical scroll drives horizontal motion.
    Horizontal(HorizontalTimeline),
    /// Plain vertical list with reveal-on-entry; no scroll-jacking.
    Stacked,
}

impl TimelineStrategy {
    pub fn select(viewport: &ViewportState, steps: usize) -> Self {
        match viewport.device {
            DeviceClass::Mobile => TimelineStrategy::Stacked,
            DeviceClass::Tablet | DeviceClass::Desktop => {
                TimelineStrategy::Horizontal(HorizontalTimeline::new(viewport, steps))
            }
        }
    }

    /// Frame for `progress`; the stacked list has nothing progress-driven.
    pub fn frame(&self, progress: f64) -> Option<TimelineFrame> {
        match self {
            TimelineStrategy::Horizontal(timeline) => Some(timeline.frame(progress)),
            TimelineStrategy::Stacked => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn desktop() -> ViewportState {
        ViewportState::new(1440.0, 900.0)
    }

    #[test]
    fn desktop_content_width_and_travel() {
        let timeline = HorizontalTimeline::new(&desktop(), 5);
        let expected = 260.0 + 5.0 * (450.0 + 300.0) + 600.0 + 65.0;
        assert_eq!(timeline.total_width, expected);

        let end = timeline.frame(1.0);
        assert_eq!(end.translate_x, -(expected - 1440.0));
        assert_eq!(timeline.frame(0.0).translate_x, 0.0);
    }

    #[test]
    fn thresholds_strictly_increase() {
        for width in [360.0, 800.0, 1100.0, 1440.0, 2560.0] {
            let layout = TimelineLayout::for_viewport(&ViewportState::new(width, 900.0));
            let map = ThresholdMap::compute(&layout, 5);
            for pair in map.nodes.windows(2) {
                assert!(pair[1] > pair[0], "nodes at width {}", width);
            }
            for pair in map.cards.windows(2) {
                assert!(pair[1] > pair[0], "cards at width {}", width);
            }
            assert_eq!(map.nodes[0], 0.0);
            assert_eq!(map.nodes[5], 1.0);
        }
    }

    #[test]
    fn narrow_layouts_stop_with_cta_centered() {
        let viewport = ViewportState::new(900.0, 1000.0);
        let timeline = HorizontalTimeline::new(&viewport, 5);
        let layout = timeline.layout;
        let expected = layout.cta_center(5) - 450.0;
        assert_eq!(timeline.max_scroll, expected);
        assert_eq!(timeline.frame(1.0).translate_x, -expected);
    }

    #[test]
    fn max_scroll_never_negative() {
        let viewport = ViewportState::new(20_000.0, 900.0);
        let timeline = HorizontalTimeline::new(&viewport, 5);
        assert_eq!(timeline.max_scroll, 0.0);
        assert_eq!(timeline.frame(1.0).translate_x, 0.0);
    }

    #[test]
    fn first_node_is_always_lit() {
        let timeline = HorizontalTimeline::new(&desktop(), 5);
        let frame = timeline.frame(0.0);
        assert_eq!(frame.nodes[0], 1.0);
        assert!(frame.nodes[1..].iter().all(|n| *n == 0.0));
        assert!(frame.cards.iter().all(|c| c.active == 0.0 && c.bar_fill == 0.0));
    }

    #[test]
    fn cards_light_at_their_threshold_and_fill_after() {
        let timeline = HorizontalTimeline::new(&desktop(), 5);
        let t = timeline.thresholds.cards[2];

        let before = timeline.frame(t - 0.01);
        assert_eq!(before.cards[2].active, 0.0);

        let at = timeline.frame(t);
        assert_eq!(at.cards[2].active, 1.0);
        assert_eq!(at.cards[2].bar_fill, 0.0);

        let halfway = timeline.frame(t + BAR_FILL_SPAN / 2.0);
        assert!((halfway.cards[2].bar_fill - 50.0).abs() < 1e-6);

        let done = timeline.frame(t + BAR_FILL_SPAN);
        assert_eq!(done.cards[2].bar_fill, 100.0);
    }

    #[test]
    fn out_of_range_progress_is_clamped() {
        let timeline = HorizontalTimeline::new(&desktop(), 5);
        assert_eq!(timeline.frame(7.0), timeline.frame(1.0));
        assert_eq!(timeline.frame(-3.0), timeline.frame(0.0));
        assert_eq!(timeline.frame(f64::NAN), timeline.frame(0.0));
    }

    #[test]
    fn switching_to_mobile_swaps_in_the_stacked_list() {
        let wide = TimelineStrategy::select(&desktop(), 5);
        assert!(matches!(wide, TimelineStrategy::Horizontal(_)));
        assert!(wide.frame(0.5).is_some());

        let narrow = TimelineStrategy::select(&ViewportState::new(600.0, 900.0), 5);
        assert_eq!(narrow, TimelineStrategy::Stacked);
        assert!(narrow.frame(0.5).is_none());
    }

    #[test]
    fn tablet_keeps_the_horizontal_strip() {
        let strategy = TimelineStrategy::select(&ViewportState::new(800.0, 1000.0), 5);
        match strategy {
            TimelineStrategy::Horizontal(t) => assert_eq!(t.layout.padding_start, 80.0),
            TimelineStrategy::Stacked => panic!("tablet should scroll horizontally"),
        }
    }

    #[test]
    fn mobile_layout_tracks_viewport_width() {
        let layout = TimelineLayout::for_viewport(&ViewportState::new(390.0, 800.0));
        assert_eq!(layout.card_width, 350.0);
        assert_eq!(layout.cta_width, 300.0);
        let tiny = TimelineLayout::for_viewport(&ViewportState::new(300.0, 800.0));
        assert_eq!(tiny.cta_width, 260.0);
    }
}
