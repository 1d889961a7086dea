use yew::prelude::*;
use yew_hooks::prelude::*;
use wasm_bindgen::JsValue;
use web_sys::{js_sys, window, Event};

use crate::config::{DESKTOP_MIN_WIDTH, TABLET_MIN_WIDTH};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeviceClass {
    Mobile,
    Tablet,
    Desktop,
}

impl DeviceClass {
    pub fn from_width(width: f64) -> Self {
        if width >= DESKTOP_MIN_WIDTH {
            DeviceClass::Desktop
        } else if width >= TABLET_MIN_WIDTH {
            DeviceClass::Tablet
        } else {
            DeviceClass::Mobile
        }
    }

    pub fn is_desktop(self) -> bool {
        self == DeviceClass::Desktop
    }

    /// File-name key used by the per-device hero assets.
    pub fn asset_key(self) -> &'static str {
        match self {
            DeviceClass::Mobile => "mobile",
            DeviceClass::Tablet => "tablet",
            DeviceClass::Desktop => "desktop",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportState {
    pub width: f64,
    pub height: f64,
    pub device: DeviceClass,
}

impl ViewportState {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            device: DeviceClass::from_width(width),
        }
    }

    /// Samples `innerWidth`/`innerHeight`. Falls back to a desktop-sized
    /// viewport when there is no window to ask.
    pub fn read() -> Self {
        let size = window().and_then(|w| {
            let width = w.inner_width().ok()?.as_f64()?;
            let height = w.inner_height().ok()?.as_f64()?;
            Some((width, height))
        });
        match size {
            Some((width, height)) => Self::new(width, height),
            None => Self::new(DESKTOP_MIN_WIDTH, 768.0),
        }
    }
}

/// True for devices whose primary input is touch. These keep native
/// compositor scrolling and skip the heavier effects.
pub fn is_touch_device() -> bool {
    let Some(win) = window() else { return false };
    let has_touch_events = js_sys::Reflect::has(&win, &JsValue::from_str("ontouchstart")).unwrap_or(false);
    has_touch_events || win.navigator().max_touch_points() > 0
}

/// Current viewport, reclassified synchronously on every `resize`.
#[hook]
pub fn use_viewport() -> ViewportState {
    let viewport = use_state_eq(ViewportState::read);

    {
        let viewport = viewport.clone();
        use_event_with_window("resize", move |_: Event| {
            viewport.set(ViewportState::read());
        });
    }

    *viewport
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_breakpoints() {
        assert_eq!(DeviceClass::from_width(320.0), DeviceClass::Mobile);
        assert_eq!(DeviceClass::from_width(767.9), DeviceClass::Mobile);
        assert_eq!(DeviceClass::from_width(768.0), DeviceClass::Tablet);
        assert_eq!(DeviceClass::from_width(1023.0), DeviceClass::Tablet);
        assert_eq!(DeviceClass::from_width(1024.0), DeviceClass::Desktop);
        assert_eq!(DeviceClass::from_width(2560.0), DeviceClass::Desktop);
    }

    #[test]
    fn viewport_state_carries_its_class() {
        let state = ViewportState::new(900.0, 700.0);
        assert_eq!(state.device, DeviceClass::Tablet);
        assert_eq!(state.device.asset_key(), "tablet");
    }
}
