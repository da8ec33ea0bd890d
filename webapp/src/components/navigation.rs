use dioxus::prelude::*;
use wasm_bindgen::JsCast;

use common::{
    header::{ClickTarget, MobileMenu, padding_class},
    viewport::ScrollState,
};
use content::NavLink;

use crate::common::{
    listener::use_window_event,
    theme::{THEME, toggle_theme},
};

// where a window click landed; the menu button handles its own clicks
fn click_target(evt: &web_sys::Event) -> Option<ClickTarget> {
    let element = evt.target()?.dyn_into::<web_sys::Element>().ok()?;

    if element.closest("#mobileMenuButton").ok().flatten().is_some() {
        return None;
    }

    match element.closest("#mobileMenu").ok().flatten() {
        Some(_) => Some(ClickTarget::InsideMenu),
        None => Some(ClickTarget::Outside),
    }
}

#[derive(Clone, PartialEq, Props)]
struct NavItemProps {
    link: NavLink,
}

#[component]
fn NavItem(props: NavItemProps) -> Element {
    let link = props.link;
    let mut hovered = use_signal(|| false);

    rsx! {
        li { class: "nav-item",
            onmouseenter: move |_| hovered.set(true),
            onmouseleave: move |_| hovered.set(false),
            a { class: "nav-link", href: "{link.href}", "{link.label}" }
            if let Some(hint) = link.hint.clone() {
                span {
                    class: if hovered() { "nav-hint visible" } else { "nav-hint" },
                    aria_hidden: "true",
                    "{hint}"
                }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct ThemeToggleProps {
    id: &'static str,
    icon_id: &'static str,
}

#[component]
fn ThemeToggle(props: ThemeToggleProps) -> Element {
    let theme = THEME();
    let label = theme.toggle_label();

    rsx! {
        button {
            id: props.id,
            class: "theme-toggle {theme.toggle_tint()}",
            title: label,
            aria_label: label,
            onclick: move |_| toggle_theme(),
            i { id: props.icon_id, class: theme.icon_class() }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct HeaderProps {
    name: String,
    logo: String,
    links: Vec<NavLink>,
}

#[component]
pub fn Header(props: HeaderProps) -> Element {
    let scroll = use_context::<Signal<ScrollState>>();
    let mut menu = use_signal(MobileMenu::default);

    use_window_event("click", move |evt| {
        if let Some(target) = click_target(&evt) {
            if menu.peek().is_open() {
                menu.write().click(target);
            }
        }
    });

    let theme = THEME();
    let padding = padding_class(scroll.read().scroll_y);

    rsx! {
        header {
            id: "header",
            class: "site-header bg-gradient {theme.header_class()} {padding}",
            div { class: "nav-container",
                a { class: "logo", href: "#home",
                    img { src: "{props.logo}", alt: "{props.name}" }
                    span { "{props.name}" }
                }

                nav { class: "nav-links", aria_label: "Main",
                    ul {
                        for link in props.links.iter().cloned() {
                            NavItem { key: "{link.href}", link }
                        }
                    }
                }

                div { class: "nav-actions",
                    ThemeToggle { id: "darkModeToggle", icon_id: "darkModeIcon" }
                    button {
                        id: "mobileMenuButton",
                        class: "menu-button",
                        aria_controls: "mobileMenu",
                        aria_expanded: if menu.read().is_open() { "true" } else { "false" },
                        aria_label: "Toggle navigation",
                        onclick: move |_| menu.write().click(ClickTarget::MenuButton),
                        i { class: "fas fa-bars" }
                    }
                }
            }

            div {
                id: "mobileMenu",
                class: "mobile-menu bg-gradient {theme.menu_class()} {menu.read().class()}",
                ul {
                    for link in props.links.iter().cloned() {
                        li { key: "{link.href}",
                            a {
                                class: "mobile-link",
                                href: "{link.href}",
                                onclick: move |_| menu.write().click(ClickTarget::MenuItem),
                                "{link.label}"
                            }
                        }
                    }
                }
                div { class: "mobile-theme",
                    ThemeToggle { id: "mobileDarkModeToggle", icon_id: "mobileDarkModeIcon" }
                }
            }
        }
    }
}
