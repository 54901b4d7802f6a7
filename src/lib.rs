//! Allstock web client.
//!
//! The application shell is a fixed navigation sidebar next to a routed
//! content area. The sidebar collapses to an icon rail and highlights the
//! entry matching the current route.

use dioxus::prelude::*;

pub mod components;
pub mod config;
pub mod error;
pub mod hooks;
pub mod navigation;
pub mod pages;
pub mod route;
pub mod types;

pub use route::Route;

use crate::config::SidebarConfig;
use crate::hooks::use_sidebar_state::use_sidebar_provider;

const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    use_sidebar_provider(SidebarConfig::default());

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}
