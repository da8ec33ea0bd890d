use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use tracing::warn;

use common::{
    LIGHTBOX_FOCUS_DELAY_MS,
    lightbox::{LightboxContent, Overlay},
};

use crate::common::{
    dom,
    lightbox::{LIGHTBOX, close_lightbox},
    listener::{key_of, use_window_event},
};

#[component]
pub fn LightboxHost() -> Element {
    use_effect(move || {
        if let Err(err) = dom::lock_scroll(LIGHTBOX.read().scroll_locked()) {
            warn!(%err, "failed to toggle scroll lock");
        }
    });

    let overlay = LIGHTBOX.read().overlay().cloned();

    rsx! {
        if let Some(overlay) = overlay {
            LightboxOverlay { overlay }
        }
    }
}

// LightboxOverlay
//
// mounted for exactly as long as the overlay is in the document, so the Escape listener it
// holds goes away with it
#[component]
fn LightboxOverlay(overlay: Overlay) -> Element {
    use_window_event("keydown", |evt| {
        if key_of(&evt).as_deref() == Some("Escape") {
            close_lightbox();
        }
    });

    let title = overlay.content.title().to_owned();
    let style = overlay.style();
    let panel_style = overlay.panel_style();

    rsx! {
        div {
            class: "lightbox",
            role: "dialog",
            aria_modal: "true",
            aria_label: "{title}",
            style: "{style}",
            // only a click on the backdrop itself closes
            onclick: move |evt| {
                evt.stop_propagation();
                close_lightbox();
            },
            div {
                class: "lightbox-panel",
                style: "{panel_style}",
                onclick: move |evt| evt.stop_propagation(),

                button {
                    class: "lightbox-close",
                    aria_label: "Close",
                    onclick: move |_| close_lightbox(),
                    onmounted: move |evt| async move {
                        TimeoutFuture::new(LIGHTBOX_FOCUS_DELAY_MS).await;
                        let _ = evt.set_focus(true).await;
                    },
                    i { class: "fas fa-times" }
                }

                match overlay.content {
                    LightboxContent::Media { image, title, description, badge } => rsx! {
                        img { class: "lightbox-image", src: "{image}", alt: "{title}" }
                        if !title.is_empty() || !description.is_empty() || badge.is_some() {
                            div { class: "lightbox-text",
                                if let Some(badge) = badge {
                                    span { class: "badge {badge.class}", "{badge.label}" }
                                }
                                if !title.is_empty() {
                                    h3 { "{title}" }
                                }
                                if !description.is_empty() {
                                    p { "{description}" }
                                }
                            }
                        }
                    },
                    LightboxContent::Profile { name, role, image, qualification, description } => rsx! {
                        div { class: "lightbox-profile",
                            img { class: "lightbox-portrait", src: "{image}", alt: "{name}" }
                            div { class: "lightbox-text",
                                h3 { "{name}" }
                                p { class: "profile-role", "{role}" }
                                p { class: "profile-qualification", "{qualification}" }
                                p { "{description}" }
                            }
                        }
                    },
                }
            }
        }
    }
}
