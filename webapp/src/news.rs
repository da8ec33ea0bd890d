use dioxus::prelude::*;

use common::{
    filter::{Announcer, Filter, FilterController},
    lightbox::{Badge, LightboxContent},
    viewport::Reveal,
};
use content::news::{NewsCategory, NewsItem};

use crate::{
    common::{lightbox::open_lightbox, reveal::use_reveal},
    components::{
        card::{ParallaxLayers, is_activation},
        filter::{FilterBar, FilterOption},
    },
};

fn lightbox_content(item: &NewsItem) -> LightboxContent {
    LightboxContent::Media {
        image: item.image.clone(),
        title: item.title.clone(),
        description: item.description.clone(),
        badge: Some(Badge {
            label: item.category.label().to_owned(),
            class: item.category.badge_class().to_owned(),
        }),
    }
}

#[derive(Clone, PartialEq, Props)]
struct NewsCardProps {
    index: usize,
    item: NewsItem,
    controller: Signal<FilterController<NewsCategory>>,
}

#[component]
fn NewsCard(props: NewsCardProps) -> Element {
    let id = format!("news-card-{}", props.index);
    let revealed = use_reveal(id.clone(), Reveal::NEWS, props.index);

    let view = props.controller.read().view(props.index);
    let item = props.item.clone();
    let on_key = props.item.clone();

    rsx! {
        article {
            id: "{id}",
            class: "news-card",
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

            div { class: "card-media",
                img { src: "{props.item.image}", alt: "{props.item.title}" }
                span { class: "badge {props.item.category.badge_class()}",
                    i { class: "{props.item.category.icon()}" }
                    "{props.item.category.label()}"
                }
            }
            div { class: "card-body",
                time { datetime: "{props.item.date}", "{props.item.display_date()}" }
                h3 { "{props.item.title}" }
                p { "{props.item.summary}" }
                span { class: "read-more", "Read more" }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct NewsProps {
    items: Vec<NewsItem>,
}

#[component]
pub fn News(props: NewsProps) -> Element {
    let categories: Vec<NewsCategory> = props.items.iter().map(|item| item.category).collect();
    let controller = use_signal(move || FilterController::new(categories));
    let announcement = use_signal(String::new);

    let mut options = vec![FilterOption::new(Filter::All, "All News").with_icon("fas fa-th")];
    options.extend(
        NewsCategory::all()
            .into_iter()
            .map(|c| FilterOption::new(Filter::Only(c), c.label()).with_icon(c.icon())),
    );

    rsx! {
        section { id: "news", class: "section news",
            ParallaxLayers { section: "news", count: 3, varied: true }
            div { class: "container",
                h2 { class: "section-title", "Latest News" }
                FilterBar {
                    label: "Filter news".to_owned(),
                    options,
                    controller,
                    announcement,
                    announcer: Announcer::News,
                }
                div { class: "news-grid",
                    for (index, item) in props.items.iter().cloned().enumerate() {
                        NewsCard { key: "{index}", index, item, controller }
                    }
                }
            }
        }
    }
}
