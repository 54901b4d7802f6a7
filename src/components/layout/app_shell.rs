use dioxus::prelude::*;
use crate::hooks::use_sidebar_state::SidebarState;
use crate::Route;

/// Fixed sidebar with the routed page beside it.
#[component]
pub fn AppShell() -> Element {
    let sidebar_state = use_context::<SidebarState>();
    let content_class = if sidebar_state.is_collapsed() {
        "app-content app-content-collapsed"
    } else {
        "app-content"
    };

    rsx! {
        div { class: "app-shell",
            crate::components::layout::Sidebar {}
            main { class: content_class,
                Outlet::<Route> {}
            }
        }
    }
}
