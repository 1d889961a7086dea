use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use web_sys::{window, HtmlElement};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config::LAYOUT_REFRESH_EVENT;
use crate::scroll::driver::{use_scroll_handle, use_scroll_listener, ScrollFrame};
use crate::scroll::progress::{measure, ScrollRange};
use crate::viewport::ViewportState;

const RESIZE_DEBOUNCE_MS: u32 = 200;
/// Late re-measures after mount, for fonts and images still settling.
const LATE_MEASURES_MS: [u32; 2] = [100, 500];

/// Progress through a sticky track measured against the current viewport.
pub fn track_progress(top: f64, height: f64, viewport_height: f64, offset: f64) -> f64 {
    ScrollRange::sticky_track(top, height, viewport_height).progress(offset)
}

/// Sticky-track scroll progress of the element behind `node`.
///
/// The tracked range is re-measured on mount, after late layout, on a
/// debounced resize, on layout-refresh events and on every scroll frame,
/// since content above the element may still be growing.
#[hook]
pub fn use_scroll_progress(node: NodeRef) -> f64 {
    let progress = use_state_eq(|| 0.0_f64);
    let handle = use_scroll_handle();

    let remeasure = {
        let node = node.clone();
        let progress = progress.clone();
        let handle = handle.clone();
        Rc::new(move || {
            let Some(element) = node.cast::<HtmlElement>() else { return };
            // Read live: the last emitted frame may predate a resize
            let viewport_height = ViewportState::read().height;
            let (top, height) = measure(&element);
            let offset = match handle.as_ref() {
                Some(handle) => handle.offset(),
                None => window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0),
            };
            progress.set(track_progress(top, height, viewport_height, offset));
        })
    };

    {
        let remeasure = remeasure.clone();
        use_effect_with_deps(
            move |_| {
                remeasure();
                let late: Vec<Timeout> = LATE_MEASURES_MS
                    .iter()
                    .map(|ms| {
                        let remeasure = remeasure.clone();
                        Timeout::new(*ms, move || remeasure())
                    })
                    .collect();
                move || drop(late)
            },
            (),
        );
    }

    {
        let remeasure = remeasure.clone();
        let pending: Rc<RefCell<Option<Timeout>>> = use_mut_ref(|| None);
        use_event_with_window("resize", move |_: Event| {
            let remeasure = remeasure.clone();
            // Replacing the pending timeout cancels it
            *pending.borrow_mut() = Some(Timeout::new(RESIZE_DEBOUNCE_MS, move || remeasure()));
        });
    }

    {
        let remeasure = remeasure.clone();
        use_event_with_window(LAYOUT_REFRESH_EVENT, move |_: Event| remeasure());
    }

    {
        let last_offset = use_mut_ref(|| f64::NAN);
        use_scroll_listener(move |frame: ScrollFrame| {
            let moved = *last_offset.borrow() != frame.offset;
            if moved {
                *last_offset.borrow_mut() = frame.offset;
                remeasure();
            }
        });
    }

    *progress
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewport_height_change_moves_the_track_end() {
        // 6000px track at 1000px, scrolled to 4000
        let portrait = track_progress(1000.0, 6000.0, 1000.0, 4000.0);
        let landscape = track_progress(1000.0, 6000.0, 400.0, 4000.0);
        assert_eq!(portrait, 0.6);
        assert!((landscape - 3000.0 / 5600.0).abs() < 1e-12);
        assert!(landscape < portrait);
    }

    #[test]
    fn zero_viewport_height_spans_the_whole_element() {
        let progress = track_progress(1000.0, 6000.0, 0.0, 4000.0);
        assert_eq!(progress, 0.5);
        assert!(track_progress(1000.0, 6000.0, 800.0, 7000.0) == 1.0);
    }
}
