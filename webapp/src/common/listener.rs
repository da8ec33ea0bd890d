use std::rc::Rc;

use dioxus::prelude::*;
use futures::{StreamExt, channel::mpsc};
use tracing::warn;
use wasm_bindgen::{JsCast, closure::Closure};

use crate::common::dom;

// WindowListener
//
// a window event listener that is removed again when the guard is dropped
pub struct WindowListener {
    event: &'static str,
    callback: Closure<dyn FnMut(web_sys::Event)>,
}

impl WindowListener {
    pub fn new(
        event: &'static str,
        handler: impl FnMut(web_sys::Event) + 'static,
    ) -> anyhow::Result<Self> {
        let callback = Closure::<dyn FnMut(web_sys::Event)>::new(handler);

        dom::window()?
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .map_err(dom::js_err)?;

        Ok(WindowListener { event, callback })
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        if let Ok(window) = dom::window() {
            let _ = window
                .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
        }
    }
}

// use_window_event
//
// listens on the window for as long as the calling component is mounted.  the browser
// callback only forwards into a channel; the handler runs in a task owned by the component,
// so it is free to write signals
pub fn use_window_event(event: &'static str, handler: impl FnMut(web_sys::Event) + 'static) {
    use_hook(move || {
        let (tx, mut rx) = mpsc::unbounded::<web_sys::Event>();

        let mut handler = handler;
        spawn(async move {
            while let Some(evt) = rx.next().await {
                handler(evt);
            }
        });

        match WindowListener::new(event, move |evt| {
            let _ = tx.unbounded_send(evt);
        }) {
            Ok(listener) => Some(Rc::new(listener)),
            Err(err) => {
                warn!(event, %err, "failed to attach window listener");
                None
            }
        }
    });
}

pub fn key_of(evt: &web_sys::Event) -> Option<String> {
    evt.dyn_ref::<web_sys::KeyboardEvent>().map(|k| k.key())
}
