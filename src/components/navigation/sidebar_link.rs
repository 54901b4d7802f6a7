use dioxus::prelude::*;
use crate::components::navigation::Icon;
use crate::navigation::NavigationEntry;
use crate::types::NavIcon;
use crate::Route;

/// CSS classes for one link row.
pub fn link_class(collapsed: bool, active: bool) -> &'static str {
    match (collapsed, active) {
        (false, false) => "sidebar-link sidebar-link-expanded",
        (false, true) => "sidebar-link sidebar-link-expanded sidebar-link-active",
        (true, false) => "sidebar-link sidebar-link-collapsed",
        (true, true) => "sidebar-link sidebar-link-collapsed sidebar-link-active",
    }
}

/// A sidebar entry wired to the router. Highlights itself when the current
/// route matches its path. An entry whose path resolves to no route is shown
/// without a link.
#[component]
pub fn SidebarLink(entry: NavigationEntry, collapsed: bool) -> Element {
    let current_path = use_route::<Route>().to_string();
    let active = entry.is_active(&current_path);

    let content = rsx! {
        SidebarLinkContent {
            icon: entry.icon,
            label: entry.label,
            collapsed,
            active,
        }
    };

    match entry.route() {
        Ok(route) => rsx! {
            Link { to: route, {content} }
        },
        Err(e) => {
            tracing::error!("Sidebar link disabled: {}", e);
            content
        }
    }
}

/// Icon and label of a link. The label is left out entirely while collapsed.
#[component]
pub fn SidebarLinkContent(icon: NavIcon, label: String, collapsed: bool, active: bool) -> Element {
    rsx! {
        div {
            class: link_class(collapsed, active),
            "aria-current": if active { "page" } else { "false" },
            Icon { icon, class: "sidebar-icon" }
            if !collapsed {
                span { class: "sidebar-label", "{label}" }
            }
        }
    }
}
