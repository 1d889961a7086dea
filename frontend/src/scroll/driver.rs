use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, AddEventListenerOptions, Element, ScrollBehavior, ScrollIntoViewOptions, WheelEvent};
use yew::prelude::*;

use crate::scroll::smooth::{intercepts_wheel, wheel_delta_px, SmoothScroll};
use crate::viewport::is_touch_device;

/// Scroll geometry as seen on one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollFrame {
    pub offset: f64,
    pub viewport_height: f64,
    pub document_height: f64,
}

impl ScrollFrame {
    pub fn limit(&self) -> f64 {
        (self.document_height - self.viewport_height).max(0.0)
    }

    fn sample(offset: f64) -> Self {
        let viewport_height = window()
            .and_then(|w| w.inner_height().ok())
            .and_then(|h| h.as_f64())
            .unwrap_or(0.0);
        let document_height = window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
            .map(|e| e.scroll_height() as f64)
            .unwrap_or(0.0);
        Self {
            offset,
            viewport_height,
            document_height,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollMode {
    /// Wheel input is intercepted and eased frame by frame.
    Emulated,
    /// Touch-class devices keep native compositor scrolling.
    Native,
}

type Listener = Rc<dyn Fn(ScrollFrame)>;

struct ScrollState {
    mode: ScrollMode,
    core: SmoothScroll,
    locked: bool,
    last: ScrollFrame,
    listeners: Vec<(usize, Listener)>,
    next_id: usize,
}

/// Shared handle onto the page's scroll position. Cheap to clone; every
/// clone talks to the same driver.
#[derive(Clone)]
pub struct ScrollHandle {
    state: Rc<RefCell<ScrollState>>,
}

impl PartialEq for ScrollHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }
}

impl ScrollHandle {
    pub fn new(mode: ScrollMode) -> Self {
        Self {
            state: Rc::new(RefCell::new(ScrollState {
                mode,
                core: SmoothScroll::default(),
                locked: false,
                last: ScrollFrame::default(),
                listeners: Vec::new(),
                next_id: 0,
            })),
        }
    }

    pub fn mode(&self) -> ScrollMode {
        self.state.borrow().mode
    }

    /// Current (eased, in emulated mode) scroll offset.
    pub fn offset(&self) -> f64 {
        let state = self.state.borrow();
        match state.mode {
            ScrollMode::Emulated => state.core.current(),
            ScrollMode::Native => native_scroll_y(),
        }
    }

    /// Latest frame delivered to subscribers.
    pub fn last_frame(&self) -> ScrollFrame {
        self.state.borrow().last
    }

    pub fn subscribe(&self, listener: impl Fn(ScrollFrame) + 'static) -> ScrollSubscription {
        let mut state = self.state.borrow_mut();
        let id = state.next_id;
        state.next_id += 1;
        state.listeners.push((id, Rc::new(listener)));
        ScrollSubscription {
            id,
            state: Rc::downgrade(&self.state),
        }
    }

    pub fn set_locked(&self, locked: bool) {
        self.state.borrow_mut().locked = locked;
    }

    pub fn is_locked(&self) -> bool {
        self.state.borrow().locked
    }

    pub fn scroll_to(&self, offset: f64, immediate: bool) {
        let mode = {
            let mut state = self.state.borrow_mut();
            state.core.scroll_to(offset, immediate);
            state.mode
        };
        let Some(win) = window() else { return };
        match mode {
            ScrollMode::Emulated if immediate => {
                win.scroll_to_with_x_and_y(0.0, self.offset());
                self.emit(ScrollFrame::sample(self.offset()));
            }
            // The frame loop carries the eased value there
            ScrollMode::Emulated => {}
            ScrollMode::Native => win.scroll_to_with_x_and_y(0.0, offset),
        }
    }

    /// Scrolls so the element matching `selector` sits at the top.
    pub fn scroll_to_selector(&self, selector: &str) {
        let Some(element) = query(selector) else {
            warn!("scroll target {} not found", selector);
            return;
        };
        match self.mode() {
            ScrollMode::Emulated => {
                let top = element.get_bounding_client_rect().top() + self.offset();
                self.scroll_to(top, false);
            }
            ScrollMode::Native => {
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                element.scroll_into_view_with_scroll_into_view_options(&options);
            }
        }
    }

    fn emit(&self, frame: ScrollFrame) {
        let listeners: Vec<Listener> = {
            let mut state = self.state.borrow_mut();
            state.last = frame;
            state.listeners.iter().map(|(_, l)| l.clone()).collect()
        };
        for listener in listeners {
            listener(frame);
        }
    }
}

/// Detaches its listener when dropped.
pub struct ScrollSubscription {
    id: usize,
    state: Weak<RefCell<ScrollState>>,
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        if let Some(state) = self.state.upgrade() {
            state.borrow_mut().listeners.retain(|(id, _)| *id != self.id);
        }
    }
}

fn native_scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

fn query(selector: &str) -> Option<Element> {
    window()?.document()?.query_selector(selector).ok().flatten()
}

/// Native mode: samples and emits on the next animation frame, at most once
/// per frame however many events ask.
fn emit_next_frame(handle: &ScrollHandle, ticking: &Rc<Cell<bool>>) {
    if ticking.replace(true) {
        return;
    }
    let handle = handle.clone();
    let ticking = ticking.clone();
    let on_frame = Closure::once_into_js(move || {
        ticking.set(false);
        handle.emit(ScrollFrame::sample(native_scroll_y()));
    });
    if let Some(win) = window() {
        let _ = win.request_animation_frame(on_frame.unchecked_ref());
    }
}

/// Browser wiring for a [`ScrollHandle`]: wheel/scroll listeners and the
/// animation-frame loop. Dropping it tears everything down.
pub struct ScrollDriver {
    wheel: Option<Closure<dyn FnMut(WheelEvent)>>,
    scroll: Closure<dyn FnMut()>,
    resize: Option<Closure<dyn FnMut()>>,
    frame: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
    frame_id: Rc<Cell<Option<i32>>>,
}

impl ScrollDriver {
    pub fn attach(handle: &ScrollHandle) -> Option<Self> {
        let win = window()?;
        let frame: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
        let frame_id = Rc::new(Cell::new(None));

        let start = ScrollFrame::sample(native_scroll_y());
        {
            let mut state = handle.state.borrow_mut();
            state.core.set_limit(start.limit());
            state.core.sync(start.offset);
            state.last = start;
        }

        let wheel = match handle.mode() {
            ScrollMode::Emulated => {
                let handle = handle.clone();
                let on_wheel = Closure::wrap(Box::new(move |e: WheelEvent| {
                    if !intercepts_wheel(e.ctrl_key(), e.delta_y()) {
                        return;
                    }
                    e.prevent_default();
                    if handle.is_locked() {
                        return;
                    }
                    let viewport_height = handle.last_frame().viewport_height;
                    let delta = wheel_delta_px(e.delta_y(), e.delta_mode(), viewport_height);
                    handle.state.borrow_mut().core.scroll_by(delta);
                }) as Box<dyn FnMut(WheelEvent)>);

                let options = AddEventListenerOptions::new();
                options.set_passive(false);
                if let Err(e) = win.add_event_listener_with_callback_and_add_event_listener_options(
                    "wheel",
                    on_wheel.as_ref().unchecked_ref(),
                    &options,
                ) {
                    warn!("failed to intercept wheel input: {:?}", e);
                }
                Some(on_wheel)
            }
            ScrollMode::Native => None,
        };

        // Native scroll: coalesced per frame on touch devices, and used to
        // pick up keyboard or anchor scrolling in emulated mode.
        let ticking = Rc::new(Cell::new(false));
        let scroll = {
            let handle = handle.clone();
            let ticking = ticking.clone();
            Closure::wrap(Box::new(move || {
                match handle.mode() {
                    ScrollMode::Native => emit_next_frame(&handle, &ticking),
                    ScrollMode::Emulated => {
                        let actual = native_scroll_y();
                        let mut state = handle.state.borrow_mut();
                        if state.core.is_settled() && (actual - state.core.current()).abs() > 1.0 {
                            debug!("resyncing smooth scroll to native offset {}", actual);
                            state.core.sync(actual);
                        }
                    }
                }
            }) as Box<dyn FnMut()>)
        };
        if let Err(e) = win.add_event_listener_with_callback("scroll", scroll.as_ref().unchecked_ref()) {
            warn!("failed to listen for scroll: {:?}", e);
        }

        // Emulated mode re-samples every frame; native mode only hears about
        // layout changes through resize, and needs a first frame to paint.
        let resize = match handle.mode() {
            ScrollMode::Native => {
                let on_resize = {
                    let handle = handle.clone();
                    Closure::wrap(Box::new(move || emit_next_frame(&handle, &ticking)) as Box<dyn FnMut()>)
                };
                if let Err(e) = win.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref()) {
                    warn!("failed to listen for resize: {:?}", e);
                }
                handle.emit(start);
                Some(on_resize)
            }
            ScrollMode::Emulated => None,
        };

        if handle.mode() == ScrollMode::Emulated {
            let handle = handle.clone();
            let frame_loop = frame.clone();
            let id_slot = frame_id.clone();
            *frame.borrow_mut() = Some(Closure::wrap(Box::new(move || {
                let sampled = ScrollFrame::sample(handle.offset());
                let (offset, moved) = {
                    let mut state = handle.state.borrow_mut();
                    state.core.set_limit(sampled.limit());
                    let before = state.core.current();
                    let after = state.core.tick();
                    (after, before != after)
                };
                if moved {
                    if let Some(win) = window() {
                        win.scroll_to_with_x_and_y(0.0, offset);
                    }
                }
                handle.emit(ScrollFrame { offset, ..sampled });

                if let Some(callback) = frame_loop.borrow().as_ref() {
                    if let Some(win) = window() {
                        id_slot.set(win.request_animation_frame(callback.as_ref().unchecked_ref()).ok());
                    }
                }
            }) as Box<dyn FnMut()>));
            if let Some(callback) = frame.borrow().as_ref() {
                frame_id.set(win.request_animation_frame(callback.as_ref().unchecked_ref()).ok());
            }
        }

        debug!("scroll driver attached in {:?} mode", handle.mode());
        Some(Self {
            wheel,
            scroll,
            resize,
            frame,
            frame_id,
        })
    }
}

impl Drop for ScrollDriver {
    fn drop(&mut self) {
        let Some(win) = window() else { return };
        if let Some(id) = self.frame_id.take() {
            let _ = win.cancel_animation_frame(id);
        }
        // Breaks the closure's reference to itself
        self.frame.borrow_mut().take();
        if let Some(wheel) = self.wheel.take() {
            let _ = win.remove_event_listener_with_callback("wheel", wheel.as_ref().unchecked_ref());
        }
        let _ = win.remove_event_listener_with_callback("scroll", self.scroll.as_ref().unchecked_ref());
        if let Some(resize) = self.resize.take() {
            let _ = win.remove_event_listener_with_callback("resize", resize.as_ref().unchecked_ref());
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ScrollProviderProps {
    pub children: Children,
}

/// Owns the page's scroll driver and shares its handle through context.
#[function_component(ScrollProvider)]
pub fn scroll_provider(props: &ScrollProviderProps) -> Html {
    let handle = use_memo(
        |_| {
            let mode = if is_touch_device() {
                ScrollMode::Native
            } else {
                ScrollMode::Emulated
            };
            ScrollHandle::new(mode)
        },
        (),
    );

    {
        let handle = (*handle).clone();
        use_effect_with_deps(
            move |_| {
                let driver = ScrollDriver::attach(&handle);
                move || drop(driver)
            },
            (),
        );
    }

    html! {
        <ContextProvider<ScrollHandle> context={(*handle).clone()}>
            { for props.children.iter() }
        </ContextProvider<ScrollHandle>>
    }
}

#[hook]
pub fn use_scroll_handle() -> Option<ScrollHandle> {
    use_context::<ScrollHandle>()
}

/// Calls `listener` on every scroll frame for as long as the component is
/// mounted.
#[hook]
pub fn use_scroll_listener<F>(listener: F)
where
    F: Fn(ScrollFrame) + 'static,
{
    let handle = use_scroll_handle();
    let latest = use_mut_ref(|| None::<Rc<dyn Fn(ScrollFrame)>>);
    // Always hold the newest closure so it sees this render's captures
    *latest.borrow_mut() = Some(Rc::new(listener));

    use_effect_with_deps(
        move |handle: &Option<ScrollHandle>| {
            let subscription = handle.as_ref().map(|handle| {
                handle.subscribe(move |frame| {
                    let current = latest.borrow().clone();
                    if let Some(listener) = current {
                        listener(frame);
                    }
                })
            });
            move || drop(subscription)
        },
        handle,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(offset: f64) -> ScrollFrame {
        ScrollFrame {
            offset,
            viewport_height: 800.0,
            document_height: 4000.0,
        }
    }

    #[test]
    fn dropped_subscription_stops_receiving_frames() {
        let handle = ScrollHandle::new(ScrollMode::Native);
        let first = Rc::new(RefCell::new(Vec::new()));
        let second = Rc::new(RefCell::new(Vec::new()));

        let sub_first = {
            let first = first.clone();
            handle.subscribe(move |f| first.borrow_mut().push(f.offset))
        };
        let sub_second = {
            let second = second.clone();
            handle.subscribe(move |f| second.borrow_mut().push(f.offset))
        };

        handle.emit(frame(10.0));
        assert_eq!(*first.borrow(), vec![10.0]);
        assert_eq!(*second.borrow(), vec![10.0]);

        drop(sub_first);
        handle.emit(frame(20.0));
        assert_eq!(*first.borrow(), vec![10.0]);
        assert_eq!(*second.borrow(), vec![10.0, 20.0]);
        assert_eq!(handle.last_frame(), frame(20.0));

        // Outliving the handle is fine
        drop(handle);
        drop(sub_second);
    }

    #[test]
    fn frame_limit_is_never_negative() {
        assert_eq!(frame(0.0).limit(), 3200.0);
        let short = ScrollFrame {
            offset: 0.0,
            viewport_height: 900.0,
            document_height: 600.0,
        };
        assert_eq!(short.limit(), 0.0);
    }
}
