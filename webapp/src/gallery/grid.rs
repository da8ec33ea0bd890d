use dioxus::prelude::*;

use common::{
    filter::FilterController,
    lightbox::{Badge, LightboxContent},
    viewport::Reveal,
};
use content::{gallery::GalleryItem, news::badge_class_for, title_case};

use crate::{
    common::{lightbox::open_lightbox, reveal::use_reveal},
    components::card::is_activation,
};

fn lightbox_content(item: &GalleryItem) -> LightboxContent {
    LightboxContent::Media {
        image: item.image.clone(),
        title: item.title.clone(),
        description: item.description.clone(),
        badge: Some(Badge {
            label: title_case(item.category.trim()),
            class: badge_class_for(&item.category).to_owned(),
        }),
    }
}

#[derive(Clone, PartialEq, Props)]
struct GalleryTileProps {
    controller: Signal<FilterController<String>>,
    index: usize,
    item: GalleryItem,
}

#[component]
fn GalleryTile(props: GalleryTileProps) -> Element {
    let id = format!("gallery-item-{}", props.index);
    let revealed = use_reveal(id.clone(), Reveal::DEFAULT, props.index);

    let view = props.controller.read().view(props.index);
    let item = props.item.clone();
    let on_key = props.item.clone();

    rsx! {
        figure {
            id: "{id}",
            class: "gallery-item",
            "data-category": "{props.item.category}",
            role: "button",
            tabindex: "0",
            aria_hidden: if view.displayed { "false" } else { "true" },
            style: "{view.style_with_reveal(revealed())}",
            onclick: move |_| open_lightbox(lightbox_content(&item)),
            onkeydown: move |evt: KeyboardEvent| {
                if is_activation(&evt) {
                    evt.prevent_default();
                    open_lightbox(lightbox_content(&on_key));
                }
            },

            img { src: "{props.item.image}", alt: "{props.item.title}" }
            figcaption { class: "gallery-caption",
                h4 { "{props.item.title}" }
                span { "{title_case(props.item.category.trim())}" }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct GalleryGridProps {
    controller: Signal<FilterController<String>>,
    items: Vec<GalleryItem>,
}

#[component]
pub fn GalleryGrid(props: GalleryGridProps) -> Element {
    rsx! {
        div { class: "gallery-grid",
            for (index, item) in props.items.iter().cloned().enumerate() {
                GalleryTile { key: "{index}", controller: props.controller, index, item }
            }
        }
    }
}
