use anyhow;
use tracing::debug;
use wasm_bindgen::JsValue;

use common::viewport::{Rect, ScrollState};

pub fn js_err(err: JsValue) -> anyhow::Error {
    anyhow::Error::msg(format!("{err:?}"))
}

pub fn window() -> anyhow::Result<web_sys::Window> {
    web_sys::window().ok_or_else(|| anyhow::Error::msg("no window"))
}

pub fn document() -> anyhow::Result<web_sys::Document> {
    window()?
        .document()
        .ok_or_else(|| anyhow::Error::msg("no document"))
}

pub fn body() -> anyhow::Result<web_sys::HtmlElement> {
    document()?
        .body()
        .ok_or_else(|| anyhow::Error::msg("no body"))
}

pub fn now() -> f64 {
    js_sys::Date::now()
}

pub fn scroll_state() -> ScrollState {
    let Ok(window) = window() else {
        return ScrollState::default();
    };

    let measure = |value: Result<JsValue, JsValue>| value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);

    ScrollState {
        scroll_y: window.scroll_y().unwrap_or(0.0),
        viewport_width: measure(window.inner_width()),
        viewport_height: measure(window.inner_height()),
    }
}

// the client rect of the element with this id, if it is in the document
pub fn element_rect(id: &str) -> Option<Rect> {
    let element = document().ok()?.get_element_by_id(id);

    let Some(element) = element else {
        debug!(id, "element not mounted yet");
        return None;
    };

    let rect = element.get_bounding_client_rect();
    Some(Rect::new(rect.left(), rect.top(), rect.width(), rect.height()))
}

// the page's absolute top offset of an element, for the scroll parallax formulas
pub fn element_top(id: &str, scroll_y: f64) -> Option<(f64, f64)> {
    element_rect(id).map(|rect| (rect.top + scroll_y, rect.height))
}

pub fn lock_scroll(locked: bool) -> anyhow::Result<()> {
    let overflow = if locked { "hidden" } else { "" };
    body()?
        .style()
        .set_property("overflow", overflow)
        .map_err(js_err)
}
