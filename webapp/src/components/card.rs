use dioxus::prelude::*;

use common::{
    lightbox::is_activation_key,
    motion::layer_parallax,
    viewport::{ScrollState, section_in_range},
};

use crate::common::dom;

pub fn is_activation(evt: &KeyboardEvent) -> bool {
    is_activation_key(&evt.key().to_string())
}

#[derive(Clone, PartialEq, Props)]
pub struct ParallaxLayersProps {
    section: &'static str,
    count: usize,
    #[props(default)]
    varied: bool,
}

// decorative background layers that slide against the scroll while their section is near
#[component]
pub fn ParallaxLayers(props: ParallaxLayersProps) -> Element {
    let scroll = use_context::<Signal<ScrollState>>();
    let state = *scroll.read();

    let placement = dom::element_top(props.section, state.scroll_y)
        .filter(|(top, height)| section_in_range(state.scroll_y, *top, *height, state.viewport_height))
        .map(|(top, _)| top);

    rsx! {
        for i in 0..props.count {
            {
                let shift = placement
                    .map(|top| layer_parallax(state.scroll_y, top, i, props.varied))
                    .unwrap_or(0.0);
                let style = format!("transform: translateY({shift:.2}px);");
                rsx! {
                    div {
                        key: "{i}",
                        class: "parallax-layer parallax-layer-{i}",
                        aria_hidden: "true",
                        style: "{style}",
                    }
                }
            }
        }
    }
}
