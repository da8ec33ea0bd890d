#![allow(non_snake_case)]
use dioxus::prelude::*;
use dioxus_router::prelude::*;

use tracing::{Level, error, warn};

mod common;
use crate::common::{dom, listener::use_window_event, style, theme};

mod components;
use components::{lightbox::LightboxHost, navigation::Header};

mod about;
use about::About;

mod contact;
use contact::Contact;

mod gallery;
use gallery::Gallery;

mod home;
use home::Hero;

mod news;
use news::News;

mod staff;
use staff::Staff;

use content::SiteConfig;

fn main() {
    dioxus_logger::init(Level::DEBUG).expect("failed to init logger");
    launch(App);
}

// the whole site is one page; anything else falls back to it with a notice
#[derive(Clone, PartialEq, Routable)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/:..segments")]
    PageNotFound { segments: Vec<String> },
}

#[component]
fn Home() -> Element {
    let site = use_hook(|| SiteConfig::embedded().map_err(|err| err.to_string()));

    match site {
        Ok(site) => rsx! {
            Header {
                name: site.name.clone(),
                logo: site.logo.clone(),
                links: site.nav.clone(),
            }
            main {
                Hero { hero: site.hero.clone(), stats: site.stats.clone() }
                About { cards: site.about.clone(), history: site.history.clone() }
                News { items: site.news.clone() }
                Gallery { items: site.gallery.clone() }
                Staff { members: site.staff.clone() }
                Contact { info: site.contact.clone(), map: site.map.clone() }
            }
            footer { class: "site-footer",
                p { "{site.name}" }
                p { class: "footer-tagline", "{site.tagline}" }
            }
            LightboxHost {}
        },
        Err(err) => {
            error!(%err, "failed to parse site configuration");
            rsx! {
                div { class: "load-error", "The site content could not be loaded." }
            }
        }
    }
}

#[component]
fn PageNotFound(segments: Vec<String>) -> Element {
    warn!(path = %segments.join("/"), "unknown route");

    rsx! {
        div { class: "not-found",
            h1 { "Page not found" }
            Link { to: Route::Home {}, "Back to the home page" }
        }
    }
}

#[component]
pub fn App() -> Element {
    let mut scroll = use_context_provider(|| Signal::new(dom::scroll_state()));

    use_window_event("scroll", move |_| scroll.set(dom::scroll_state()));
    use_window_event("resize", move |_| scroll.set(dom::scroll_state()));

    use_effect(move || {
        if let Err(err) = theme::apply_root_class(theme::THEME()) {
            error!(%err, "failed to apply theme");
        }
    });

    rsx! {
        style { "{style::SITE_STYLES}" }
        Router::<Route> { config: RouterConfig::default }
    }
}
