//! Eased scroll position that trails the wheel-driven target.

/// Fraction of the remaining distance covered per animation frame.
pub const DEFAULT_LERP: f64 = 0.1;

/// Below this distance (px) the eased value snaps onto the target.
const SETTLE_EPSILON: f64 = 0.5;

#[derive(Clone, Debug, PartialEq)]
pub struct SmoothScroll {
    current: f64,
    target: f64,
    limit: f64,
    lerp: f64,
}

impl SmoothScroll {
    pub fn new(lerp: f64) -> Self {
        Self {
            current: 0.0,
            target: 0.0,
            limit: 0.0,
            lerp: lerp.clamp(0.01, 1.0),
        }
    }

    pub fn current(&self) -> f64 {
        self.current
    }

    #[cfg(test)]
    pub fn target(&self) -> f64 {
        self.target
    }

    #[cfg(test)]
    pub fn limit(&self) -> f64 {
        self.limit
    }

    /// Updates the scrollable limit (document height minus viewport height),
    /// pulling both positions back inside it.
    pub fn set_limit(&mut self, limit: f64) {
        self.limit = if limit.is_finite() { limit.max(0.0) } else { 0.0 };
        self.target = self.target.clamp(0.0, self.limit);
        self.current = self.current.clamp(0.0, self.limit);
    }

    /// Wheel input: moves the target, never the eased value.
    pub fn scroll_by(&mut self, delta: f64) {
        if delta.is_finite() {
            self.target = (self.target + delta).clamp(0.0, self.limit);
        }
    }

    pub fn scroll_to(&mut self, offset: f64, immediate: bool) {
        if !offset.is_finite() {
            return;
        }
        self.target = offset.clamp(0.0, self.limit);
        if immediate {
            self.current = self.target;
        }
    }

    /// Adopts a position reached by something else (keyboard, anchor jump).
    pub fn sync(&mut self, offset: f64) {
        self.scroll_to(offset, true);
    }

    /// Advances one frame and returns the eased position.
    pub fn tick(&mut self) -> f64 {
        let distance = self.target - self.current;
        if distance.abs() < SETTLE_EPSILON {
            self.current = self.target;
        } else {
            self.current += distance * self.lerp;
        }
        self.current
    }

    pub fn is_settled(&self) -> bool {
        self.current == self.target
    }
}

impl Default for SmoothScroll {
    fn default() -> Self {
        Self::new(DEFAULT_LERP)
    }
}

/// Converts a wheel delta to pixels according to its `deltaMode`.
pub fn wheel_delta_px(delta: f64, delta_mode: u32, viewport_height: f64) -> f64 {
    match delta_mode {
        1 => delta * 16.0, // lines
        2 => delta * viewport_height, // pages
        _ => delta,
    }
}

/// Whether the smooth driver should take over a wheel event. Pinch-zoom
/// arrives with `ctrlKey` set and sideways swipes carry no vertical delta;
/// both stay with the browser.
pub fn intercepts_wheel(ctrl_key: bool, delta_y: f64) -> bool {
    !ctrl_key && delta_y != 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eases_towards_target_and_settles() {
        let mut scroll = SmoothScroll::new(0.1);
        scroll.set_limit(5000.0);
        scroll.scroll_by(1000.0);

        let first = scroll.tick();
        assert!((first - 100.0).abs() < 1e-9);
        assert!(!scroll.is_settled());

        let mut last = first;
        for _ in 0..500 {
            let next = scroll.tick();
            assert!(next >= last);
            last = next;
        }
        assert!(scroll.is_settled());
        assert_eq!(scroll.current(), 1000.0);
    }

    #[test]
    fn target_is_clamped_to_limit() {
        let mut scroll = SmoothScroll::default();
        scroll.set_limit(300.0);
        scroll.scroll_by(1000.0);
        assert_eq!(scroll.target(), 300.0);
        scroll.scroll_by(-5000.0);
        assert_eq!(scroll.target(), 0.0);
    }

    #[test]
    fn immediate_scroll_skips_easing() {
        let mut scroll = SmoothScroll::default();
        scroll.set_limit(2000.0);
        scroll.scroll_to(1200.0, true);
        assert_eq!(scroll.current(), 1200.0);
        assert!(scroll.is_settled());
    }

    #[test]
    fn shrinking_limit_pulls_positions_back() {
        let mut scroll = SmoothScroll::default();
        scroll.set_limit(2000.0);
        scroll.sync(1800.0);
        scroll.set_limit(1000.0);
        assert_eq!(scroll.current(), 1000.0);
        assert_eq!(scroll.target(), 1000.0);
        scroll.set_limit(-20.0);
        assert_eq!(scroll.limit(), 0.0);
    }

    #[test]
    fn ignores_non_finite_input() {
        let mut scroll = SmoothScroll::default();
        scroll.set_limit(f64::INFINITY);
        assert_eq!(scroll.limit(), 0.0);
        scroll.set_limit(100.0);
        scroll.scroll_by(f64::NAN);
        scroll.scroll_to(f64::NAN, true);
        assert_eq!(scroll.target(), 0.0);
    }

    #[test]
    fn wheel_modes() {
        assert_eq!(wheel_delta_px(3.0, 0, 800.0), 3.0);
        assert_eq!(wheel_delta_px(3.0, 1, 800.0), 48.0);
        assert_eq!(wheel_delta_px(1.0, 2, 800.0), 800.0);
    }

    #[test]
    fn zoom_and_sideways_wheel_pass_through() {
        assert!(intercepts_wheel(false, 120.0));
        assert!(intercepts_wheel(false, -3.0));
        assert!(!intercepts_wheel(true, 120.0));
        assert!(!intercepts_wheel(false, 0.0));
    }
}
