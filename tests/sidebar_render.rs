use allstock::components::layout::{SidebarFooter, SidebarHeader};
use allstock::components::navigation::SidebarLinkContent;
use allstock::types::NavIcon;
use dioxus::prelude::*;

fn render_dom(mut dom: VirtualDom) -> String {
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

#[component]
fn InventoryLink(collapsed: bool, active: bool) -> Element {
    rsx! {
        SidebarLinkContent { icon: NavIcon::Archive, label: "Inventory", collapsed, active }
    }
}

#[component]
fn Chrome(collapsed: bool) -> Element {
    rsx! {
        SidebarHeader {
            collapsed,
            brand: "ALLSTOCK",
            logo: "logo",
            on_toggle: move |_| {},
        }
        SidebarFooter { collapsed, text: "© 2024 Allstock" }
    }
}

fn render_inventory(collapsed: bool, active: bool) -> String {
    render_dom(VirtualDom::new_with_props(
        InventoryLink,
        InventoryLinkProps { collapsed, active },
    ))
}

fn render_chrome(collapsed: bool) -> String {
    render_dom(VirtualDom::new_with_props(Chrome, ChromeProps { collapsed }))
}

#[test]
fn expanded_link_shows_label() {
    let html = render_inventory(false, false);
    assert!(html.contains("Inventory"));
    assert!(html.contains("sidebar-link-expanded"));
    assert!(!html.contains("sidebar-link-active"));
}

#[test]
fn collapsed_link_hides_label() {
    let html = render_inventory(true, false);
    assert!(!html.contains("Inventory"));
    assert!(html.contains("sidebar-link-collapsed"));
    assert!(html.contains("data-icon=\"archive\""));
}

#[test]
fn active_link_is_highlighted() {
    let html = render_inventory(false, true);
    assert!(html.contains("sidebar-link-active"));
    assert!(html.contains("aria-current=\"page\""));
}

#[test]
fn header_and_footer_follow_collapse() {
    let expanded = render_chrome(false);
    assert!(expanded.contains("ALLSTOCK"));
    assert!(expanded.contains("2024 Allstock"));
    assert!(expanded.contains("sidebar-toggle"));

    let collapsed = render_chrome(true);
    assert!(!collapsed.contains("ALLSTOCK"));
    assert!(!collapsed.contains("2024 Allstock"));
    assert!(collapsed.contains("sidebar-toggle"));
    assert!(collapsed.contains("sidebar-header-collapsed"));
}
