use dioxus::prelude::*;
use gloo_timers::callback::Timeout;
use tracing::{error, info};
use wasm_bindgen::JsValue;

use common::{
    THEME_TRANSITION_MS,
    theme::{self, DARK_CLASS, TRANSITION_CLASSES, Theme},
};

use crate::common::{dom, storage::LocalStore};

pub const TOGGLE_EVENT: &str = "darkModeToggled";

// THEME
//
// the one owner of the dark-mode flag.  it is read from storage once, on first use, and
// everything that depends on it renders from here
pub static THEME: GlobalSignal<Theme> = Signal::global(|| Theme::load(&LocalStore));

// mirrors the current theme onto the document root
pub fn apply_root_class(theme: Theme) -> anyhow::Result<()> {
    dom::document()?
        .document_element()
        .ok_or_else(|| anyhow::Error::msg("no document element"))?
        .class_list()
        .toggle_with_force(DARK_CLASS, theme.dark)
        .map_err(dom::js_err)?;
    Ok(())
}

fn dispatch_toggled(theme: Theme) -> anyhow::Result<()> {
    let detail = js_sys::Object::new();
    js_sys::Reflect::set(
        &detail,
        &JsValue::from_str("isDarkMode"),
        &JsValue::from_bool(theme.dark),
    )
    .map_err(dom::js_err)?;

    let init = web_sys::CustomEventInit::new();
    init.set_detail(&detail);

    let event = web_sys::CustomEvent::new_with_event_init_dict(TOGGLE_EVENT, &init)
        .map_err(dom::js_err)?;
    dom::window()?.dispatch_event(&event).map_err(dom::js_err)?;
    Ok(())
}

fn transition_body() -> anyhow::Result<()> {
    let classes = dom::body()?.class_list();
    classes
        .add_2(TRANSITION_CLASSES[0], TRANSITION_CLASSES[1])
        .map_err(dom::js_err)?;

    Timeout::new(THEME_TRANSITION_MS, move || {
        let _ = classes.remove_2(TRANSITION_CLASSES[0], TRANSITION_CLASSES[1]);
    })
    .forget();
    Ok(())
}

// shared by the desktop and mobile toggles
pub fn toggle_theme() {
    let next = theme::toggle(THEME(), &mut LocalStore);
    *THEME.write() = next;

    if let Err(err) = transition_body() {
        error!(%err, "failed to start theme transition");
    }

    match dispatch_toggled(next) {
        Ok(()) => info!(dark = next.dark, "dispatched {TOGGLE_EVENT}"),
        Err(err) => error!(%err, "failed to dispatch {TOGGLE_EVENT}"),
    }
}
