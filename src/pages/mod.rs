use dioxus::prelude::*;

#[component]
fn PageHeader(title: String) -> Element {
    rsx! {
        header { class: "page-header",
            h2 { class: "page-title", "{title}" }
        }
    }
}

/// The root path renders the dashboard.
#[component]
pub fn Home() -> Element {
    rsx! {
        Dashboard {}
    }
}

#[component]
pub fn Dashboard() -> Element {
    rsx! {
        PageHeader { title: "Dashboard" }
    }
}

#[component]
pub fn Inventory() -> Element {
    rsx! {
        PageHeader { title: "Inventory" }
    }
}

#[component]
pub fn Products() -> Element {
    rsx! {
        PageHeader { title: "Products" }
    }
}

#[component]
pub fn Users() -> Element {
    rsx! {
        PageHeader { title: "Users" }
    }
}

#[component]
pub fn Settings() -> Element {
    rsx! {
        PageHeader { title: "Settings" }
    }
}

#[component]
pub fn Expenses() -> Element {
    rsx! {
        PageHeader { title: "Expenses" }
    }
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    use_hook(|| tracing::warn!("No page for {}", path));

    rsx! {
        PageHeader { title: "Page not found" }
        p { class: "page-body", "Nothing lives at {path}." }
    }
}
