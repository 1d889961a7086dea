use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::{debug, info};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{window, EventTarget, HtmlVideoElement, VisibilityState};

/// Events that count as user activation (or a chance to resume) on mobile
/// browsers that refuse muted autoplay up front.
const TRIGGERS: [(Target, &str); 4] = [
    (Target::Window, "touchstart"),
    (Target::Window, "click"),
    (Target::Window, "scroll"),
    (Target::Document, "visibilitychange"),
];

#[derive(Clone, Copy)]
enum Target {
    Window,
    Document,
}

fn event_target(target: Target) -> Option<EventTarget> {
    let win = window()?;
    match target {
        Target::Window => Some(win.into()),
        Target::Document => win.document().map(Into::into),
    }
}

struct Inner {
    video: HtmlVideoElement,
    confirmed: Cell<bool>,
    in_flight: Cell<bool>,
    listener: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl Inner {
    fn detach(&self) {
        let Some(listener) = self.listener.borrow_mut().take() else { return };
        for (target, event) in TRIGGERS {
            if let Some(target) = event_target(target) {
                let _ = target.remove_event_listener_with_callback(event, listener.as_ref().unchecked_ref());
            }
        }
    }
}

/// Keeps a muted background video playing. Rejected `play()` calls are
/// swallowed and retried on the next trigger event; once playback is
/// confirmed every trigger listener is removed.
pub struct AutoplayGuard {
    inner: Rc<Inner>,
}

impl AutoplayGuard {
    pub fn new(video: HtmlVideoElement) -> Self {
        // iOS only autoplays inline, muted media
        video.set_muted(true);
        video.set_default_muted(true);
        let _ = video.set_attribute("playsinline", "");
        let _ = video.set_attribute("webkit-playsinline", "");

        let inner = Rc::new(Inner {
            video,
            confirmed: Cell::new(false),
            in_flight: Cell::new(false),
            listener: RefCell::new(None),
        });

        let weak = Rc::downgrade(&inner);
        let listener = Closure::wrap(Box::new(move || {
            if let Some(inner) = weak.upgrade() {
                ensure_playing(&inner);
            }
        }) as Box<dyn FnMut()>);
        for (target, event) in TRIGGERS {
            if let Some(target) = event_target(target) {
                let _ = target.add_event_listener_with_callback(event, listener.as_ref().unchecked_ref());
            }
        }
        *inner.listener.borrow_mut() = Some(listener);

        let guard = Self { inner };
        guard.ensure_playing();
        guard
    }

    /// Idempotent: a no-op once playing or while an attempt is pending.
    pub fn ensure_playing(&self) {
        ensure_playing(&self.inner);
    }
}

impl Drop for AutoplayGuard {
    fn drop(&mut self) {
        self.inner.detach();
    }
}

fn ensure_playing(inner: &Rc<Inner>) {
    if inner.confirmed.get() || inner.in_flight.get() {
        return;
    }
    let hidden = window()
        .and_then(|w| w.document())
        .map(|d| d.visibility_state() == VisibilityState::Hidden)
        .unwrap_or(false);
    if hidden {
        return;
    }

    let promise = match inner.video.play() {
        Ok(promise) => promise,
        Err(e) => {
            debug!("video play() threw: {:?}", e);
            return;
        }
    };
    inner.in_flight.set(true);
    let inner = inner.clone();
    spawn_local(async move {
        let result = JsFuture::from(promise).await;
        inner.in_flight.set(false);
        match result {
            Ok(_) => {
                info!("hero video playing");
                inner.confirmed.set(true);
                inner.detach();
            }
            // Autoplay refused before user interaction; wait for a trigger
            Err(e) => debug!("autoplay deferred: {:?}", e),
        }
    });
}
