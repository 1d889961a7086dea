//! The lantern that drifts across the services cards on desktop.
//!
//! Its pose is a scrubbed timeline over the services track: after a short
//! lead-in it swings right → left (dipping and growing), holds, swings back
//! left → right and settles slightly smaller. The stage is a CSS 3D layer;
//! world units are projected with the same 75° camera at z = 5 the scene was
//! designed around.

use std::cell::Cell;
use std::f64::consts::PI;
use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

const POS_RIGHT: f64 = 3.5;
const POS_LEFT: f64 = -3.5;
const BASE_Y: f64 = -1.5;
const DIP_Y: f64 = BASE_Y - 1.0;
const BASE_SCALE: f64 = 2.2;
const MAX_SCALE: f64 = 3.0;
const FINAL_SCALE: f64 = 2.6;

// Segment boundaries in timeline seconds
const LEAD_IN: f64 = 0.1;
const MOVE1: f64 = 0.8;
const HOLD1: f64 = 0.3;
const MOVE2: f64 = 0.9;
const HOLD2: f64 = 0.6;
const TOTAL: f64 = LEAD_IN + MOVE1 + HOLD1 + MOVE2 + HOLD2;

const IDLE_BOB: f64 = 0.15;
const IDLE_PERIOD_S: f64 = 2.5;

/// Half-height of the visible plane at the model's depth: 5 · tan(37.5°).
const HALF_VIEW_UNITS: f64 = 3.836_714_7;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LanternPose {
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub rotate_x: f64,
    pub rotate_y: f64,
    pub rotate_z: f64,
}

fn power1_in_out(t: f64) -> f64 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

fn power1_in(t: f64) -> f64 {
    t * t
}

fn sine_in_out(t: f64) -> f64 {
    -((PI * t).cos() - 1.0) / 2.0
}

fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

/// Local 0..1 position of `time` inside a segment.
fn segment(time: f64, start: f64, duration: f64) -> f64 {
    ((time - start) / duration).clamp(0.0, 1.0)
}

/// Down to the dip and back up over `duration`, each half eased.
fn dip(time: f64, start: f64, duration: f64) -> f64 {
    let half = duration / 2.0;
    if time < start + half {
        lerp(BASE_Y, DIP_Y, sine_in_out(segment(time, start, half)))
    } else {
        lerp(DIP_Y, BASE_Y, sine_in_out(segment(time, start + half, half)))
    }
}

impl LanternPose {
    /// Pose at scroll `progress` through the services track.
    pub fn at(progress: f64) -> Self {
        let progress = if progress.is_finite() { progress.clamp(0.0, 1.0) } else { 0.0 };
        let time = progress * TOTAL;
        let move1 = LEAD_IN;
        let move2 = LEAD_IN + MOVE1 + HOLD1;

        let t1 = power1_in_out(segment(time, move1, MOVE1));
        let t2 = power1_in_out(segment(time, move2, MOVE2));

        let (x, y, scale, rotate_x, rotate_y) = if time < move2 {
            (
                lerp(POS_RIGHT, POS_LEFT, t1),
                if time < move1 + MOVE1 { dip(time, move1, MOVE1) } else { BASE_Y },
                lerp(BASE_SCALE, MAX_SCALE, t1),
                lerp(0.0, 0.2, t1),
                lerp(PI * 2.0, PI * 1.5, t1),
            )
        } else {
            (
                lerp(POS_LEFT, POS_RIGHT, t2),
                if time < move2 + MOVE2 { dip(time, move2, MOVE2) } else { BASE_Y },
                lerp(MAX_SCALE, FINAL_SCALE, power1_in(segment(time, move2, MOVE2))),
                lerp(0.2, 0.1, t2),
                lerp(PI * 1.5, PI * 2.0, t2),
            )
        };

        Self {
            x,
            y,
            scale,
            rotate_x,
            rotate_y,
            rotate_z: 0.2,
        }
    }

    /// CSS transform for a viewport `height` px tall, with `bob` extra
    /// world units of idle float.
    pub fn css_transform(&self, height: f64, bob: f64) -> String {
        let px_per_unit = height / (HALF_VIEW_UNITS * 2.0);
        format!(
            "translate3d({:.2}px, {:.2}px, 0) rotateX({:.4}rad) rotateY({:.4}rad) rotateZ({:.4}rad) scale({:.4})",
            self.x * px_per_unit,
            -(self.y + bob) * px_per_unit,
            self.rotate_x,
            self.rotate_y,
            self.rotate_z,
            self.scale / BASE_SCALE,
        )
    }
}

/// Idle float, independent of scroll: eases up and back every period.
pub fn idle_bob(seconds: f64) -> f64 {
    let cycle = (seconds / IDLE_PERIOD_S).rem_euclid(2.0);
    let t = if cycle < 1.0 { cycle } else { 2.0 - cycle };
    IDLE_BOB * sine_in_out(t)
}

/// Glow pulse of the light inside the lantern, 0..1.
pub fn glow(seconds: f64) -> f64 {
    let t = seconds * 2.0;
    let intensity = 2.5 + t.sin() * 0.5;
    (intensity - 2.0).clamp(0.0, 1.0)
}

/// Owned state of one mounted lantern stage. Built by [`setup`], driven by
/// [`animate`] and released by [`teardown`].
pub struct LanternStage {
    layer: HtmlElement,
    visible: Rc<Cell<bool>>,
    observer: Option<IntersectionObserver>,
    _on_intersect: Option<Closure<dyn FnMut(Array)>>,
}

pub fn setup(layer: HtmlElement, container: &Element) -> LanternStage {
    let visible = Rc::new(Cell::new(true));
    let on_intersect = {
        let visible = visible.clone();
        Closure::wrap(Box::new(move |entries: Array| {
            for entry in entries.iter() {
                if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                    visible.set(entry.is_intersecting());
                }
            }
        }) as Box<dyn FnMut(Array)>)
    };

    // Keep painting from just before the section enters the viewport
    let options = IntersectionObserverInit::new();
    options.set_root_margin("200px");
    let observer = match IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &options) {
        Ok(observer) => {
            observer.observe(container);
            Some(observer)
        }
        Err(e) => {
            warn!("lantern visibility observer unavailable: {:?}", e);
            None
        }
    };

    debug!("lantern stage set up");
    LanternStage {
        layer,
        visible,
        observer,
        _on_intersect: Some(on_intersect),
    }
}

/// Paints one frame. Skipped while the section is off-screen.
pub fn animate(stage: &LanternStage, progress: f64, viewport_height: f64, seconds: f64) {
    if !stage.visible.get() {
        return;
    }
    let pose = LanternPose::at(progress);
    let style = stage.layer.style();
    let _ = style.set_property("transform", &pose.css_transform(viewport_height, idle_bob(seconds)));
    let _ = style.set_property("--lantern-glow", &format!("{:.3}", glow(seconds)));
}

pub fn teardown(stage: &LanternStage) {
    if let Some(observer) = stage.observer.as_ref() {
        observer.disconnect();
    }
    let _ = stage.layer.style().remove_property("transform");
    debug!("lantern stage disposed");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn starts_on_the_right() {
        let pose = LanternPose::at(0.0);
        assert_eq!(pose.x, POS_RIGHT);
        assert_eq!(pose.y, BASE_Y);
        assert_eq!(pose.scale, BASE_SCALE);
        assert!(close(pose.rotate_y, PI * 2.0));
    }

    #[test]
    fn holds_on_the_left_between_moves() {
        let hold = (LEAD_IN + MOVE1 + HOLD1 / 2.0) / TOTAL;
        let pose = LanternPose::at(hold);
        assert!(close(pose.x, POS_LEFT));
        assert!(close(pose.y, BASE_Y));
        assert!(close(pose.scale, MAX_SCALE));
        assert!(close(pose.rotate_y, PI * 1.5));
    }

    #[test]
    fn dips_halfway_through_the_first_move() {
        let pose = LanternPose::at((LEAD_IN + MOVE1 / 2.0) / TOTAL);
        assert!(close(pose.y, DIP_Y));
        assert!(close(pose.x, 0.0));
    }

    #[test]
    fn settles_back_on_the_right() {
        let pose = LanternPose::at(1.0);
        assert!(close(pose.x, POS_RIGHT));
        assert!(close(pose.y, BASE_Y));
        assert!(close(pose.scale, FINAL_SCALE));
        assert!(close(pose.rotate_x, 0.1));
        assert!(close(pose.rotate_y, PI * 2.0));
    }

    #[test]
    fn clamps_progress() {
        assert_eq!(LanternPose::at(-1.0), LanternPose::at(0.0));
        assert_eq!(LanternPose::at(5.0), LanternPose::at(1.0));
        assert_eq!(LanternPose::at(f64::NAN), LanternPose::at(0.0));
    }

    #[test]
    fn idle_bob_stays_in_range() {
        let mut t = 0.0;
        while t < 12.0 {
            let bob = idle_bob(t);
            assert!((0.0..=IDLE_BOB + 1e-12).contains(&bob));
            t += 0.1;
        }
        assert!(close(idle_bob(IDLE_PERIOD_S), IDLE_BOB));
        assert!(close(idle_bob(0.0), 0.0));
    }

    #[test]
    fn transform_projects_world_units() {
        let pose = LanternPose::at(0.0);
        let css = pose.css_transform(HALF_VIEW_UNITS * 2.0, 0.0);
        assert!(css.starts_with("translate3d(3.50px, 1.50px, 0)"));
        assert!(css.ends_with("scale(1.0000)"));
    }
}
