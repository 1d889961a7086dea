use std::rc::Rc;

use web_sys::{HtmlElement, PointerEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::loader::{is_revealed, LoadPhase};
use crate::scroll::driver::{use_scroll_handle, use_scroll_listener, ScrollFrame};
use crate::scroll::scrollbar::{ScrollbarGeometry, ThumbDrag};

fn paint_thumb(thumb: &HtmlElement, height: f64, offset: f64) {
    let style = thumb.style();
    let _ = style.set_property("height", &format!("{}px", height));
    let _ = style.set_property("transform", &format!("translate3d(0, {}px, 0)", offset));
}

/// An active drag plus the geometry it started with.
#[derive(Clone, Copy)]
struct DragSession {
    drag: ThumbDrag,
    geometry: ScrollbarGeometry,
}

/// Track classes: the scrollbar stays out of sight behind the preloader.
pub fn track_class(phase: LoadPhase) -> Classes {
    classes!("custom-scrollbar-track", (!is_revealed(phase)).then_some("is-hidden"))
}

#[derive(Properties, PartialEq)]
pub struct CustomScrollbarProps {
    pub phase: LoadPhase,
}

/// Gold overlay scrollbar. Follows the scroll handle every frame and lets
/// the thumb be dragged; hidden while the page fits the viewport.
#[function_component(CustomScrollbar)]
pub fn custom_scrollbar(props: &CustomScrollbarProps) -> Html {
    let thumb = use_node_ref();
    let handle = use_scroll_handle();
    let session = use_mut_ref(|| None::<DragSession>);
    let dragging = use_state_eq(|| false);

    {
        let thumb = thumb.clone();
        let session = session.clone();
        use_scroll_listener(move |frame: ScrollFrame| {
            if session.borrow().is_some() {
                return;
            }
            let Some(thumb) = thumb.cast::<HtmlElement>() else { return };
            match ScrollbarGeometry::for_viewport(frame.viewport_height, frame.document_height) {
                Some(geometry) => paint_thumb(&thumb, geometry.thumb_height, geometry.thumb_offset(frame.offset)),
                None => paint_thumb(&thumb, 0.0, 0.0),
            }
        });
    }

    let onpointerdown = {
        let session = session.clone();
        let dragging = dragging.clone();
        let handle = handle.clone();
        Callback::from(move |e: PointerEvent| {
            let Some(handle) = handle.as_ref() else { return };
            let frame = handle.last_frame();
            // Nothing to drag when the page fits
            let Some(geometry) = ScrollbarGeometry::for_viewport(frame.viewport_height, frame.document_height) else {
                return;
            };
            e.prevent_default();
            e.stop_propagation();
            let start = geometry.thumb_offset(handle.offset());
            *session.borrow_mut() = Some(DragSession {
                drag: ThumbDrag::begin(e.client_y() as f64, start),
                geometry,
            });
            dragging.set(true);
        })
    };

    {
        let session = session.clone();
        let thumb = thumb.clone();
        let handle = handle.clone();
        use_event_with_window("pointermove", move |e: PointerEvent| {
            let Some(active) = *session.borrow() else { return };
            e.prevent_default();
            let offset = active.drag.offset_for(e.client_y() as f64, active.geometry.travel);
            if let Some(thumb) = thumb.cast::<HtmlElement>() {
                paint_thumb(&thumb, active.geometry.thumb_height, offset);
            }
            if let Some(handle) = handle.as_ref() {
                handle.scroll_to(active.geometry.scroll_for_thumb(offset), true);
            }
        });
    }

    {
        let release = Rc::new({
            let session = session.clone();
            let dragging = dragging.clone();
            move || {
                if session.borrow_mut().take().is_some() {
                    dragging.set(false);
                }
            }
        });
        let on_cancel = release.clone();
        use_event_with_window("pointerup", move |_: PointerEvent| release());
        use_event_with_window("pointercancel", move |_: PointerEvent| on_cancel());
    }

    html! {
        <div class={track_class(props.phase)}>
            <div
                ref={thumb}
                class={classes!("custom-scrollbar-thumb", dragging.then_some("is-dragging"))}
                {onpointerdown}
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_until_the_preloader_reveals_the_page() {
        assert!(track_class(LoadPhase::Loading).contains("is-hidden"));
        assert!(!track_class(LoadPhase::Loaded).contains("is-hidden"));
        assert!(!track_class(LoadPhase::EffectsCleared).contains("is-hidden"));
        assert!(track_class(LoadPhase::Loaded).contains("custom-scrollbar-track"));
    }
}
