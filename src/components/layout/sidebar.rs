use dioxus::prelude::*;
use crate::components::navigation::{Icon, SidebarLink};
use crate::config::SidebarConfig;
use crate::hooks::use_sidebar_state::SidebarState;
use crate::navigation::SIDEBAR_LINKS;
use crate::types::NavIcon;

pub fn sidebar_class(collapsed: bool) -> &'static str {
    if collapsed {
        "sidebar sidebar-collapsed"
    } else {
        "sidebar"
    }
}

pub fn header_class(collapsed: bool) -> &'static str {
    if collapsed {
        "sidebar-header sidebar-header-collapsed"
    } else {
        "sidebar-header"
    }
}

#[component]
pub fn Sidebar() -> Element {
    let mut sidebar_state = use_context::<SidebarState>();
    let config = use_context::<SidebarConfig>();
    let collapsed = sidebar_state.is_collapsed();

    rsx! {
        aside {
            class: sidebar_class(collapsed),

            SidebarHeader {
                collapsed,
                brand: config.brand,
                logo: config.logo,
                on_toggle: move |_| sidebar_state.toggle(),
            }

            nav { class: "sidebar-links",
                for entry in SIDEBAR_LINKS.iter().copied() {
                    SidebarLink { key: "{entry.path}", entry, collapsed }
                }
            }

            SidebarFooter { collapsed, text: config.footer }
        }
    }
}

/// Logo, brand title and the narrow-viewport toggle button.
#[component]
pub fn SidebarHeader(
    collapsed: bool,
    brand: String,
    logo: String,
    on_toggle: EventHandler<MouseEvent>,
) -> Element {
    rsx! {
        div { class: header_class(collapsed),
            div { class: "sidebar-logo", "{logo}" }
            if !collapsed {
                h1 { class: "sidebar-brand", "{brand}" }
            }
            button {
                class: "sidebar-toggle",
                r#type: "button",
                title: "Toggle navigation",
                onclick: move |evt| on_toggle.call(evt),
                Icon { icon: NavIcon::Menu, class: "sidebar-toggle-icon" }
            }
        }
    }
}

#[component]
pub fn SidebarFooter(collapsed: bool, text: String) -> Element {
    rsx! {
        if !collapsed {
            footer { class: "sidebar-footer",
                p { "{text}" }
            }
        }
    }
}
