use std::fmt;

use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

use common::filter::{Announcer, Filter, FilterController};

#[derive(Clone, Debug, PartialEq)]
pub struct FilterOption<C> {
    pub filter: Filter<C>,
    pub label: String,
    pub icon: Option<&'static str>,
}

impl<C> FilterOption<C> {
    pub fn new(filter: Filter<C>, label: impl Into<String>) -> Self {
        FilterOption {
            filter,
            label: label.into(),
            icon: None,
        }
    }

    pub fn with_icon(self, icon: &'static str) -> Self {
        FilterOption {
            icon: Some(icon),
            ..self
        }
    }
}

// run_filter
//
// activates `filter` and plays its steps out on one timer task.  once a later selection
// has made the plan stale, apply() refuses the next step and the task ends
pub fn run_filter<C>(
    mut controller: Signal<FilterController<C>>,
    filter: Filter<C>,
    mut announcement: Signal<String>,
    announcer: Announcer,
) where
    C: Clone + PartialEq + fmt::Debug + fmt::Display + 'static,
{
    let message = announcer.message(&filter);
    let steps = controller.write().select(filter);

    announcement.set(message.clone());
    if let Some(clear_ms) = announcer.clear_after_ms() {
        spawn(async move {
            TimeoutFuture::new(clear_ms).await;
            if *announcement.peek() == message {
                announcement.set(String::new());
            }
        });
    }

    spawn(async move {
        let mut elapsed = 0;
        for step in steps {
            if step.delay_ms > elapsed {
                TimeoutFuture::new(step.delay_ms - elapsed).await;
                elapsed = step.delay_ms;
            }
            if !controller.write().apply(&step) {
                break;
            }
        }
    });
}

#[component]
pub fn FilterBar<C: Clone + PartialEq + fmt::Debug + fmt::Display + 'static>(
    label: String,
    options: Vec<FilterOption<C>>,
    controller: Signal<FilterController<C>>,
    announcement: Signal<String>,
    announcer: Announcer,
) -> Element {
    rsx! {
        div { class: "filter-bar", role: "group", aria_label: "{label}",
            for option in options {
                {
                    let active = controller.read().is_active(&option.filter);
                    let key = option.filter.key();
                    let filter = option.filter.clone();
                    rsx! {
                        button {
                            key: "{key}",
                            class: if active { "filter-btn active" } else { "filter-btn" },
                            "data-filter": "{key}",
                            aria_pressed: if active { "true" } else { "false" },
                            onclick: move |_| run_filter(controller, filter.clone(), announcement, announcer),
                            if let Some(icon) = option.icon {
                                i { class: "{icon}" }
                            }
                            "{option.label}"
                        }
                    }
                }
            }
        }
        div { class: "sr-only", aria_live: "polite", "{announcement}" }
    }
}
