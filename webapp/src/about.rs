use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

use common::{
    RIPPLE_MS,
    lightbox::LightboxContent,
    motion::{Offset, Ripple, Tilt, TiltProfile, about_parallax, about_pointer_parallax},
    viewport::{Reveal, ScrollState, reveal_style},
};
use content::{
    History,
    about::{AboutCard, Stat},
};

use crate::{
    common::{
        dom,
        lightbox::open_lightbox,
        reveal::{use_counter, use_reveal},
    },
    components::card::is_activation,
};

const PARTICLES: usize = 5;

#[derive(Clone, PartialEq, Props)]
struct CardStatProps {
    id: String,
    stat: Stat,
}

#[component]
fn CardStat(props: CardStatProps) -> Element {
    let display = use_counter(props.id.clone(), props.stat.value.clone());
    let display = display.read();
    let scale = format!("{:.3}", display.frame.scale);

    rsx! {
        div { class: "card-stat",
            span {
                id: "{props.id}",
                class: if display.highlighted { "counter highlight" } else { "counter" },
                style: "display: inline-block; transform: scale({scale});",
                "{display.frame.text}"
            }
            span { class: "counter-label", "{props.stat.label}" }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct AboutCardViewProps {
    index: usize,
    card: AboutCard,
}

#[component]
fn AboutCardView(props: AboutCardViewProps) -> Element {
    let id = format!("about-card-{}", props.index);
    let revealed = use_reveal(id.clone(), Reveal::ABOUT, props.index);
    let mut tilt = use_signal(|| None::<Tilt>);

    let card_id = id.clone();
    let onmousemove = move |evt: MouseEvent| {
        let Some(rect) = dom::element_rect(&card_id) else {
            return;
        };
        let point = evt.client_coordinates();
        tilt.set(Some(Tilt::compute(&TiltProfile::ABOUT, &rect, point.x, point.y)));
    };

    let (transform, reflection, icon) = match tilt() {
        Some(t) => (
            format!("transform: {};", t.transform(&TiltProfile::ABOUT)),
            t.reflection(),
            t.depth(0.05).translate(),
        ),
        None => (String::new(), String::from("opacity: 0;"), String::new()),
    };

    rsx! {
        div {
            id: "{id}",
            class: "about-card",
            style: "{reveal_style(revealed())} {transform}",
            onmousemove: onmousemove,
            onmouseleave: move |_| tilt.set(None),

            div { class: "card-reflection", aria_hidden: "true", style: "{reflection}" }
            div { class: "card-icon", style: "{icon}",
                i { class: "{props.card.icon}" }
            }
            h3 { "{props.card.title}" }
            p { "{props.card.description}" }
            if let Some(stat) = props.card.stat.clone() {
                CardStat { id: format!("{id}-stat"), stat }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct HistoryViewProps {
    history: History,
}

#[component]
fn HistoryView(props: HistoryViewProps) -> Element {
    let grown = use_reveal(String::from("history-timeline"), Reveal::DEFAULT, 0);
    let image = props.history.image.clone();
    let on_key = props.history.image.clone();
    let enlarge = |image: String| {
        open_lightbox(LightboxContent::Media {
            image,
            title: String::new(),
            description: String::new(),
            badge: None,
        })
    };

    rsx! {
        div { class: "history",
            div { class: "timeline",
                div {
                    id: "history-timeline",
                    class: "timeline-bar",
                    style: if grown() { "width: 100%;" } else { "width: 0;" },
                }
            }
            div { class: "history-body",
                div { class: "history-text",
                    h3 { "{props.history.title}" }
                    p { "{props.history.text}" }
                }
                img {
                    class: "history-image",
                    src: "{props.history.image}",
                    alt: "{props.history.title}",
                    role: "button",
                    tabindex: "0",
                    onclick: move |_| enlarge(image.clone()),
                    onkeydown: move |evt: KeyboardEvent| {
                        if is_activation(&evt) {
                            evt.prevent_default();
                            enlarge(on_key.clone());
                        }
                    },
                }
            }
        }
    }
}

#[component]
fn RippleButton() -> Element {
    let mut ripples = use_signal(Vec::<(u64, Ripple)>::new);
    let mut next = use_signal(|| 0u64);

    let onclick = move |evt: MouseEvent| {
        let Some(rect) = dom::element_rect("about-cta") else {
            return;
        };
        let point = evt.client_coordinates();
        let id = next();
        next.set(id + 1);
        ripples.write().push((id, Ripple::at(&rect, point.x, point.y)));

        spawn(async move {
            TimeoutFuture::new(RIPPLE_MS).await;
            ripples.write().retain(|(r, _)| *r != id);
        });
    };

    rsx! {
        a {
            id: "about-cta",
            class: "btn btn-primary ripple-host",
            href: "#contact",
            onclick: onclick,
            "Join Our Community"
            for (id, ripple) in ripples() {
                span { key: "{id}", class: "ripple", style: "{ripple.style()}" }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct AboutProps {
    cards: Vec<AboutCard>,
    history: History,
}

#[component]
pub fn About(props: AboutProps) -> Element {
    let scroll = use_context::<Signal<ScrollState>>();
    let mut pointer = use_signal(|| [Offset::default(); PARTICLES]);

    let onmousemove = move |evt: MouseEvent| {
        let Some(rect) = dom::element_rect("about") else {
            return;
        };
        let point = evt.client_coordinates();
        pointer.set(std::array::from_fn(|i| about_pointer_parallax(&rect, point.x, point.y, i)));
    };

    let scroll_y = scroll.read().scroll_y;
    let section_top = dom::element_top("about", scroll_y).map(|(top, _)| top);
    let particles = pointer().into_iter().enumerate().map(|(i, hover)| {
        let drift = section_top
            .and_then(|top| about_parallax(scroll_y, top, i))
            .unwrap_or_default();
        Offset {
            x: drift.x + hover.x,
            y: drift.y + hover.y,
        }
    });

    rsx! {
        section { id: "about", class: "section about", onmousemove: onmousemove,
            for (i, offset) in particles.enumerate() {
                div {
                    key: "{i}",
                    class: "particle particle-{i}",
                    aria_hidden: "true",
                    style: "{offset.translate()}",
                }
            }

            div { class: "container",
                h2 { class: "section-title", "About Us" }
                div { class: "about-grid",
                    for (index, card) in props.cards.iter().cloned().enumerate() {
                        AboutCardView { key: "{index}", index, card }
                    }
                }
                HistoryView { history: props.history.clone() }
                div { class: "about-cta", RippleButton {} }
            }
        }
    }
}
