use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use tracing::{debug, info, warn};
use wasm_bindgen::JsValue;

use common::{
    SUBMIT_PENDING_MS, SUBMIT_SUCCESS_MS,
    form::{ContactForm, FieldKind, SubmitOutcome, SubmitPhase},
    viewport::{Reveal, reveal_style},
};
use content::contact::{ContactInfo, MapConfig};

use crate::common::reveal::use_reveal;

// the map script is only ever loaded by the page itself; without it we show a placeholder
fn maps_available() -> bool {
    let google = js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str("google"))
        .ok()
        .filter(|g| g.is_object());

    google
        .and_then(|g| js_sys::Reflect::get(&g, &JsValue::from_str("maps")).ok())
        .is_some_and(|maps| maps.is_object())
}

#[derive(Clone, PartialEq, Props)]
struct MapPanelProps {
    map: MapConfig,
}

#[component]
fn MapPanel(props: MapPanelProps) -> Element {
    let available = use_hook(maps_available);
    let map = props.map.clone();

    use_effect(move || {
        if !available {
            debug!("google maps not loaded, showing placeholder");
            return;
        }

        match map.init_script() {
            Ok(script) => {
                let (lat, lng) = (map.lat, map.lng);
                spawn(async move {
                    match document::eval(&script).await {
                        Ok(serde_json::Value::Bool(true)) => info!(lat, lng, "initialised map"),
                        Ok(_) => warn!("map container missing, map not initialised"),
                        Err(err) => warn!(?err, "map script failed"),
                    }
                });
            }
            Err(err) => warn!(%err, "failed to build map script"),
        }
    });

    rsx! {
        div { id: "googleMap", class: "map",
            if !available {
                div { class: "map-placeholder",
                    i { class: "fas fa-map-marked-alt" }
                    p { "{props.map.title}" }
                    p { class: "map-coordinates", "{props.map.lat}, {props.map.lng}" }
                }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct InfoBlockProps {
    index: usize,
    icon: &'static str,
    title: &'static str,
    lines: Vec<String>,
}

#[component]
fn InfoBlock(props: InfoBlockProps) -> Element {
    let id = format!("contact-info-{}", props.index);
    let revealed = use_reveal(id.clone(), Reveal::CONTACT, props.index);

    rsx! {
        div { id: "{id}", class: "contact-info", style: "{reveal_style(revealed())}",
            div { class: "info-icon", i { class: "{props.icon}" } }
            div {
                h4 { "{props.title}" }
                for line in props.lines.iter() {
                    p { "{line}" }
                }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct FieldProps {
    form: Signal<ContactForm>,
    index: usize,
}

#[component]
fn Field(props: FieldProps) -> Element {
    let mut form = props.form;
    let index = props.index;

    let current = form.read();
    let Some(spec) = current.specs().get(index).copied() else {
        return rsx! {};
    };
    let value = current.field(index).map(|f| f.value.clone()).unwrap_or_default();
    let floats = current.label_floats(index);
    let decoration = current.decoration(index);
    let error = current.error_message(index);
    drop(current);

    let input_id = format!("contact-{}", spec.name);
    let label_class = if floats { "floating-label active" } else { "floating-label" };
    let class = format!("form-input {}", decoration.class());

    rsx! {
        div { class: "form-group",
            if spec.kind == FieldKind::TextArea {
                textarea {
                    id: "{input_id}",
                    name: spec.name,
                    class: "{class}",
                    rows: "5",
                    required: spec.required,
                    aria_invalid: if error.is_some() { "true" } else { "false" },
                    value: "{value}",
                    oninput: move |evt| form.write().input(index, evt.value()),
                    onfocus: move |_| form.write().focus(index),
                    onblur: move |_| form.write().blur(index),
                }
            } else {
                input {
                    id: "{input_id}",
                    name: spec.name,
                    r#type: spec.kind.input_type(),
                    class: "{class}",
                    required: spec.required,
                    aria_invalid: if error.is_some() { "true" } else { "false" },
                    value: "{value}",
                    oninput: move |evt| form.write().input(index, evt.value()),
                    onfocus: move |_| form.write().focus(index),
                    onblur: move |_| form.write().blur(index),
                }
            }
            label { r#for: "{input_id}", class: label_class, "{spec.label}" }
            if let Some(error) = error {
                p { class: "field-error", role: "alert", "{error}" }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct ContactProps {
    info: ContactInfo,
    map: MapConfig,
}

// Contact
//
// nothing is sent anywhere: a valid form shows a pending button, then a thank-you panel,
// then a fresh form
#[component]
pub fn Contact(props: ContactProps) -> Element {
    let mut state = use_signal(ContactForm::contact);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();

        let outcome = state.write().submit();
        match outcome {
            SubmitOutcome::Blocked(fields) => debug!(?fields, "contact form has invalid fields"),
            SubmitOutcome::Busy => {}
            SubmitOutcome::Sending(generation) => {
                info!("sending contact form");
                spawn(async move {
                    TimeoutFuture::new(SUBMIT_PENDING_MS).await;
                    if !state.write().sent(generation) {
                        return;
                    }
                    TimeoutFuture::new(SUBMIT_SUCCESS_MS).await;
                    state.write().restore(generation);
                });
            }
        }
    };

    let phase = state.read().phase();
    let fields = state.read().specs().len();
    let info = props.info.clone();

    rsx! {
        section { id: "contact", class: "section contact",
            div { class: "container",
                h2 { class: "section-title", "Contact Us" }
                div { class: "contact-grid",
                    div { class: "contact-details",
                        InfoBlock { index: 0, icon: "fas fa-map-marker-alt", title: "Address", lines: info.address.clone() }
                        InfoBlock { index: 1, icon: "fas fa-phone", title: "Phone", lines: vec![info.phone.clone()] }
                        InfoBlock { index: 2, icon: "fas fa-envelope", title: "Email", lines: vec![info.email.clone()] }
                        InfoBlock { index: 3, icon: "fas fa-clock", title: "Office Hours", lines: vec![info.hours.clone()] }
                        MapPanel { map: props.map.clone() }
                    }

                    if phase == SubmitPhase::Sent {
                        div { class: "form-success", role: "status",
                            i { class: "fas fa-check-circle" }
                            h3 { "Message Sent!" }
                            p { "Thank you for contacting us. We will get back to you soon." }
                        }
                    } else {
                        form { id: "contactForm", class: "contact-form", novalidate: true, onsubmit: onsubmit,
                            for index in 0..fields {
                                Field { key: "{index}", form: state, index }
                            }
                            button {
                                r#type: "submit",
                                class: "btn btn-primary",
                                disabled: phase == SubmitPhase::Sending,
                                if phase == SubmitPhase::Sending {
                                    i { class: "fas fa-spinner fa-spin" }
                                    "Sending..."
                                } else {
                                    i { class: "fas fa-paper-plane" }
                                    "Send Message"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
