use dioxus::prelude::*;

use common::{
    filter::{Announcer, Filter, FilterController},
    lightbox::LightboxContent,
    motion::{Tilt, TiltProfile, staff_parallax},
    viewport::{Reveal, ScrollState},
};
use content::staff::{StaffMember, StaffRole};

use crate::{
    common::{dom, lightbox::open_lightbox, reveal::use_reveal},
    components::{
        card::is_activation,
        filter::{FilterBar, FilterOption},
    },
};

const PARTICLES: usize = 6;

fn profile(member: &StaffMember) -> LightboxContent {
    LightboxContent::Profile {
        name: member.name.clone(),
        role: member.title.clone(),
        image: member.image.clone(),
        qualification: member.qualification.clone(),
        description: member.description.clone(),
    }
}

#[derive(Clone, PartialEq, Props)]
struct StaffCardProps {
    index: usize,
    member: StaffMember,
    controller: Signal<FilterController<StaffRole>>,
}

#[component]
fn StaffCard(props: StaffCardProps) -> Element {
    let id = format!("staff-card-{}", props.index);
    let revealed = use_reveal(id.clone(), Reveal::STAFF, props.index);
    let mut tilt = use_signal(|| None::<Tilt>);

    let card_id = id.clone();
    let onmousemove = move |evt: MouseEvent| {
        let Some(rect) = dom::element_rect(&card_id) else {
            return;
        };
        let point = evt.client_coordinates();
        tilt.set(Some(Tilt::compute(&TiltProfile::STAFF, &rect, point.x, point.y)));
    };

    let view = props.controller.read().view(props.index);
    let (motion, glare, depth) = match tilt() {
        Some(t) => (
            format!(
                "transform: {}; box-shadow: {};",
                t.transform(&TiltProfile::STAFF),
                t.shadow()
            ),
            t.glare(),
            t.depth(0.03).translate(),
        ),
        None => (String::new(), String::from("opacity: 0;"), String::new()),
    };

    let member = props.member.clone();
    let on_key = props.member.clone();
    let role = props.member.role();

    rsx! {
        article {
            id: "{id}",
            class: "staff-card",
            "data-role": "{role}",
            role: "button",
            tabindex: "0",
            aria_label: "View profile of {props.member.name}",
            aria_hidden: if view.displayed { "false" } else { "true" },
            style: "{view.style_with_reveal(revealed())} {motion}",
            onmousemove: onmousemove,
            onmouseleave: move |_| tilt.set(None),
            onclick: move |_| open_lightbox(profile(&member)),
            onkeydown: move |evt: KeyboardEvent| {
                if is_activation(&evt) {
                    evt.prevent_default();
                    open_lightbox(profile(&on_key));
                }
            },

            div { class: "card-glare", aria_hidden: "true", style: "{glare}" }
            div { class: "staff-portrait", style: "{depth}",
                img { src: "{props.member.image}", alt: "{props.member.name}" }
            }
            div { class: "card-body",
                span { class: "role-badge", i { class: "{role.icon()}" } "{role.label()}" }
                h3 { "{props.member.name}" }
                p { class: "staff-title", "{props.member.title}" }
                p { class: "staff-qualification", "{props.member.qualification}" }

                div { class: "staff-social",
                    if let Some(email) = props.member.email.clone() {
                        a {
                            href: "mailto:{email}",
                            aria_label: "Email {props.member.name}",
                            onclick: move |evt| evt.stop_propagation(),
                            onkeydown: move |evt| evt.stop_propagation(),
                            i { class: "fas fa-envelope" }
                        }
                    }
                    if let Some(phone) = props.member.phone.clone() {
                        a {
                            href: "tel:{phone}",
                            aria_label: "Call {props.member.name}",
                            onclick: move |evt| evt.stop_propagation(),
                            onkeydown: move |evt| evt.stop_propagation(),
                            i { class: "fas fa-phone" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn StaffParticles() -> Element {
    let scroll = use_context::<Signal<ScrollState>>();
    let state = *scroll.read();
    let placement = dom::element_top("staff", state.scroll_y);

    rsx! {
        for i in 0..PARTICLES {
            {
                let shift = placement
                    .and_then(|(top, height)| {
                        staff_parallax(state.scroll_y, top, height, state.viewport_height, i)
                    })
                    .unwrap_or(0.0);
                let style = format!("transform: translateY({shift:.2}px);");
                rsx! {
                    div {
                        key: "{i}",
                        class: "particle particle-{i}",
                        aria_hidden: "true",
                        style: "{style}",
                    }
                }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct StaffProps {
    members: Vec<StaffMember>,
}

#[component]
pub fn Staff(props: StaffProps) -> Element {
    let roles: Vec<StaffRole> = props.members.iter().map(StaffMember::role).collect();
    let controller = use_signal(move || FilterController::new(roles));
    let announcement = use_signal(String::new);

    let mut options = vec![FilterOption::new(Filter::All, "All Staff").with_icon("fas fa-users")];
    options.extend(
        StaffRole::all()
            .into_iter()
            .map(|r| FilterOption::new(Filter::Only(r), r.label()).with_icon(r.icon())),
    );

    rsx! {
        section { id: "staff", class: "section staff",
            StaffParticles {}
            div { class: "container",
                h2 { class: "section-title", "Our Staff" }
                FilterBar {
                    label: "Filter staff".to_owned(),
                    options,
                    controller,
                    announcement,
                    announcer: Announcer::Staff,
                }
                div { class: "staff-grid",
                    for (index, member) in props.members.iter().cloned().enumerate() {
                        StaffCard { key: "{index}", index, member, controller }
                    }
                }
            }
        }
    }
}
