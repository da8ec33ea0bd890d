use dioxus::prelude::*;

use common::filter::{Announcer, Filter, FilterController};
use content::{
    gallery::{GalleryItem, categories},
    title_case,
};

use crate::components::{
    card::ParallaxLayers,
    filter::{FilterBar, FilterOption},
};

mod grid;
use grid::GalleryGrid;

#[derive(Clone, PartialEq, Props)]
pub struct GalleryProps {
    items: Vec<GalleryItem>,
}

// Gallery
//
// categories are whatever the items say they are, so the filter bar is built from the
// items themselves in the order they first appear
#[component]
pub fn Gallery(props: GalleryProps) -> Element {
    let tags: Vec<String> = props
        .items
        .iter()
        .map(|item| item.category.trim().to_owned())
        .collect();
    let controller = use_signal(move || FilterController::new(tags));
    let announcement = use_signal(String::new);

    let mut options = vec![FilterOption::new(Filter::All, "All")];
    options.extend(
        categories(&props.items)
            .into_iter()
            .map(|c| FilterOption::new(Filter::Only(c.clone()), title_case(&c))),
    );

    rsx! {
        section { id: "gallery", class: "section gallery",
            ParallaxLayers { section: "gallery", count: 2 }
            div { class: "container",
                h2 { class: "section-title", "Photo Gallery" }
                FilterBar {
                    label: "Filter photos".to_owned(),
                    options,
                    controller,
                    announcement,
                    announcer: Announcer::Gallery,
                }
                GalleryGrid { controller, items: props.items.clone() }
            }
        }
    }
}
