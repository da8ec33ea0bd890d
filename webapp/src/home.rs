use dioxus::prelude::*;

use common::{
    RESET_TRANSITION_MS,
    motion::{Offset, hero_parallax},
    viewport::ScrollState,
};
use content::{Hero as HeroContent, about::Stat};

use crate::common::reveal::use_counter;

const HERO_SHAPES: usize = 4;

#[derive(Clone, PartialEq, Props)]
struct StatCardProps {
    index: usize,
    stat: Stat,
}

#[component]
fn StatCard(props: StatCardProps) -> Element {
    let id = format!("hero-stat-{}", props.index);
    let display = use_counter(id.clone(), props.stat.value.clone());
    let display = display.read();
    let scale = format!("{:.3}", display.frame.scale);

    rsx! {
        div { class: "stat-card",
            if let Some(icon) = props.stat.icon.as_ref() {
                div { class: "stat-icon", i { class: "{icon}" } }
            }
            h3 {
                id: "{id}",
                class: if display.highlighted { "stat-value highlight" } else { "stat-value" },
                style: "transform: scale({scale});",
                "{display.frame.text}"
            }
            p { class: "stat-label", "{props.stat.label}" }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct HeroProps {
    hero: HeroContent,
    stats: Vec<Stat>,
}

// Hero
//
// the landing section.  the decorative shapes drift with the pointer and ease back to rest
// once it leaves
#[component]
pub fn Hero(props: HeroProps) -> Element {
    let scroll = use_context::<Signal<ScrollState>>();
    let mut offsets = use_signal(|| [Offset::default(); HERO_SHAPES]);
    let mut resetting = use_signal(|| false);

    let onmousemove = move |evt: MouseEvent| {
        let state = *scroll.peek();
        if state.viewport_width <= 0.0 || state.viewport_height <= 0.0 {
            return;
        }

        let point = evt.client_coordinates();
        let x = point.x / state.viewport_width;
        let y = point.y / state.viewport_height;

        resetting.set(false);
        offsets.set(std::array::from_fn(|i| hero_parallax(x, y, i)));
    };

    let onmouseleave = move |_: MouseEvent| {
        resetting.set(true);
        offsets.set([Offset::default(); HERO_SHAPES]);
    };

    let transition = if resetting() {
        format!("transition: transform {RESET_TRANSITION_MS}ms ease;")
    } else {
        String::new()
    };

    rsx! {
        section {
            id: "home",
            class: "hero",
            style: "background-image: url('{props.hero.image}');",
            onmousemove: onmousemove,
            onmouseleave: onmouseleave,

            for (i, offset) in offsets().into_iter().enumerate() {
                div {
                    key: "{i}",
                    class: "hero-shape hero-shape-{i}",
                    aria_hidden: "true",
                    style: "{offset.translate()} {transition}",
                }
            }

            div { class: "container hero-content",
                h1 { class: "hero-title", "{props.hero.title}" }
                p { class: "hero-subtitle", "{props.hero.subtitle}" }
                div { class: "hero-actions",
                    a { class: "btn btn-primary btn-lg", href: "#about", "Discover More" }
                    a { class: "btn btn-secondary btn-lg", href: "#contact", "Get in Touch" }
                }
            }

            div { class: "container stats-grid",
                for (index, stat) in props.stats.iter().cloned().enumerate() {
                    StatCard { key: "{index}", index, stat }
                }
            }
        }
    }
}
