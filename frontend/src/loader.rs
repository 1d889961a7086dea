//! Load sequencing behind the preloader: `Loading → Loaded → EffectsCleared`.
//!
//! The page leaves `Loading` only after the preloader's minimum on-screen
//! time has passed *and* the window reported its assets loaded. Scroll stays
//! locked until a short delay after `Loaded`, once the reveal zoom is done.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use gloo_timers::callback::Timeout;
use log::{debug, info};
use web_sys::{window, Event};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config::{
    EFFECTS_SETTLE_DELAY, LAYOUT_REFRESH_DELAY, LAYOUT_REFRESH_EVENT, PRELOADER_MIN_DURATION,
    SCROLL_LOCK_CLASS, SCROLL_UNLOCK_DELAY,
};
use crate::scroll::driver::{use_scroll_handle, ScrollHandle};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum LoadPhase {
    Loading,
    Loaded,
    EffectsCleared,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadEvent {
    MinimumElapsed,
    AssetsReady,
    ScrollUnlockElapsed,
    SettleElapsed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadAction {
    /// Entered `Loaded`: arm the unlock and settle timers.
    ScheduleReveal,
    UnlockScroll,
    /// Entered `EffectsCleared`: scroll mappers should re-measure.
    RefreshLayout,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadSequencer {
    phase: LoadPhase,
    minimum_elapsed: bool,
    assets_ready: bool,
    scroll_locked: bool,
}

impl Default for LoadSequencer {
    fn default() -> Self {
        Self {
            phase: LoadPhase::Loading,
            minimum_elapsed: false,
            assets_ready: false,
            scroll_locked: true,
        }
    }
}

impl LoadSequencer {
    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    #[cfg(test)]
    pub fn scroll_locked(&self) -> bool {
        self.scroll_locked
    }

    pub fn handle(&mut self, event: LoadEvent) -> Vec<LoadAction> {
        let mut actions = Vec::new();
        match (self.phase, event) {
            (LoadPhase::Loading, LoadEvent::MinimumElapsed) => self.minimum_elapsed = true,
            (LoadPhase::Loading, LoadEvent::AssetsReady) => self.assets_ready = true,
            (LoadPhase::Loaded, LoadEvent::ScrollUnlockElapsed) if self.scroll_locked => {
                self.scroll_locked = false;
                actions.push(LoadAction::UnlockScroll);
            }
            (LoadPhase::Loaded, LoadEvent::SettleElapsed) => {
                self.phase = LoadPhase::EffectsCleared;
                actions.push(LoadAction::RefreshLayout);
            }
            (LoadPhase::EffectsCleared, LoadEvent::ScrollUnlockElapsed) if self.scroll_locked => {
                self.scroll_locked = false;
                actions.push(LoadAction::UnlockScroll);
            }
            _ => {}
        }

        if self.phase == LoadPhase::Loading && self.minimum_elapsed && self.assets_ready {
            self.phase = LoadPhase::Loaded;
            actions.push(LoadAction::ScheduleReveal);
        }
        actions
    }
}

fn set_scroll_lock(locked: bool) {
    let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) else {
        return;
    };
    let classes = body.class_list();
    let _ = if locked {
        classes.add_1(SCROLL_LOCK_CLASS)
    } else {
        classes.remove_1(SCROLL_LOCK_CLASS)
    };
}

fn dispatch_layout_refresh() {
    let Some(win) = window() else { return };
    if let Ok(event) = Event::new(LAYOUT_REFRESH_EVENT) {
        let _ = win.dispatch_event(&event);
    }
}

fn document_complete() -> bool {
    window()
        .and_then(|w| w.document())
        .map(|d| d.ready_state() == "complete")
        .unwrap_or(true)
}

/// Everything the timers need to feed events back in.
struct LoadContext {
    phase: UseStateHandle<LoadPhase>,
    sequencer: RefCell<LoadSequencer>,
    timers: RefCell<Vec<Timeout>>,
    scroll: Option<ScrollHandle>,
}

impl LoadContext {
    fn lock_scroll(&self, locked: bool) {
        set_scroll_lock(locked);
        if let Some(scroll) = self.scroll.as_ref() {
            scroll.set_locked(locked);
        }
    }

    fn schedule(self: &Rc<Self>, delay: Duration, event: LoadEvent) {
        let ctx = self.clone();
        let timeout = Timeout::new(delay.as_millis() as u32, move || ctx.dispatch(event));
        self.timers.borrow_mut().push(timeout);
    }

    /// Feeds one event in and carries out whatever it asks for.
    fn dispatch(self: &Rc<Self>, event: LoadEvent) {
        let actions = self.sequencer.borrow_mut().handle(event);
        self.phase.set(self.sequencer.borrow().phase());
        for action in actions {
            debug!("load sequence {:?} -> {:?}", event, action);
            match action {
                LoadAction::ScheduleReveal => {
                    info!("preloader finished, revealing content");
                    self.schedule(SCROLL_UNLOCK_DELAY, LoadEvent::ScrollUnlockElapsed);
                    self.schedule(EFFECTS_SETTLE_DELAY, LoadEvent::SettleElapsed);
                }
                LoadAction::UnlockScroll => self.lock_scroll(false),
                LoadAction::RefreshLayout => {
                    let refresh = Timeout::new(LAYOUT_REFRESH_DELAY.as_millis() as u32, dispatch_layout_refresh);
                    self.timers.borrow_mut().push(refresh);
                }
            }
        }
    }
}

/// Drives a [`LoadSequencer`] from real timers and the window `load` event.
/// Returns the current phase.
#[hook]
pub fn use_load_sequence() -> LoadPhase {
    let phase = use_state_eq(|| LoadPhase::Loading);
    let scroll = use_scroll_handle();
    let ctx = {
        let phase = phase.clone();
        use_memo(
            move |_| {
                Rc::new(LoadContext {
                    phase,
                    sequencer: RefCell::new(LoadSequencer::default()),
                    timers: RefCell::new(Vec::new()),
                    scroll,
                })
            },
            (),
        )
    };

    {
        let ctx = (*ctx).clone();
        use_effect_with_deps(
            move |_| {
                ctx.lock_scroll(true);
                ctx.schedule(PRELOADER_MIN_DURATION, LoadEvent::MinimumElapsed);
                if document_complete() {
                    ctx.dispatch(LoadEvent::AssetsReady);
                }
                move || {
                    // Dropping the timeouts cancels them and releases their
                    // hold on the context
                    ctx.timers.borrow_mut().clear();
                    ctx.lock_scroll(false);
                }
            },
            (),
        );
    }

    {
        let ctx = (*ctx).clone();
        use_event_with_window("load", move |_: Event| ctx.dispatch(LoadEvent::AssetsReady));
    }

    *phase
}

/// Whether the preloader has stopped covering the page.
pub fn is_revealed(phase: LoadPhase) -> bool {
    phase >= LoadPhase::Loaded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn waits_for_both_minimum_time_and_assets() {
        let mut seq = LoadSequencer::default();
        assert_eq!(seq.phase(), LoadPhase::Loading);
        assert!(seq.scroll_locked());

        assert!(seq.handle(LoadEvent::AssetsReady).is_empty());
        assert_eq!(seq.phase(), LoadPhase::Loading);

        let actions = seq.handle(LoadEvent::MinimumElapsed);
        assert_eq!(actions, vec![LoadAction::ScheduleReveal]);
        assert_eq!(seq.phase(), LoadPhase::Loaded);
        assert!(seq.scroll_locked());
    }

    #[test]
    fn minimum_time_alone_does_not_reveal() {
        let mut seq = LoadSequencer::default();
        seq.handle(LoadEvent::MinimumElapsed);
        assert_eq!(seq.phase(), LoadPhase::Loading);
        assert_eq!(seq.handle(LoadEvent::AssetsReady), vec![LoadAction::ScheduleReveal]);
    }

    #[test]
    fn full_sequence_unlocks_then_clears_effects() {
        let mut seq = LoadSequencer::default();
        seq.handle(LoadEvent::AssetsReady);
        seq.handle(LoadEvent::MinimumElapsed);

        assert_eq!(seq.handle(LoadEvent::SettleElapsed), vec![LoadAction::RefreshLayout]);
        assert_eq!(seq.phase(), LoadPhase::EffectsCleared);
        assert!(seq.scroll_locked());

        assert_eq!(seq.handle(LoadEvent::ScrollUnlockElapsed), vec![LoadAction::UnlockScroll]);
        assert!(!seq.scroll_locked());
    }

    #[test]
    fn timers_firing_early_are_ignored() {
        let mut seq = LoadSequencer::default();
        assert!(seq.handle(LoadEvent::ScrollUnlockElapsed).is_empty());
        assert!(seq.handle(LoadEvent::SettleElapsed).is_empty());
        assert_eq!(seq.phase(), LoadPhase::Loading);
        assert!(seq.scroll_locked());
    }

    #[test]
    fn unlock_happens_once() {
        let mut seq = LoadSequencer::default();
        seq.handle(LoadEvent::AssetsReady);
        seq.handle(LoadEvent::MinimumElapsed);
        assert_eq!(seq.handle(LoadEvent::ScrollUnlockElapsed), vec![LoadAction::UnlockScroll]);
        assert!(seq.handle(LoadEvent::ScrollUnlockElapsed).is_empty());
        assert!(seq.handle(LoadEvent::AssetsReady).is_empty());
    }

    #[test]
    fn revealed_from_loaded_on() {
        assert!(!is_revealed(LoadPhase::Loading));
        assert!(is_revealed(LoadPhase::Loaded));
        assert!(is_revealed(LoadPhase::EffectsCleared));
    }
}
