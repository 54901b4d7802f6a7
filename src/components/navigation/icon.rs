use dioxus::prelude::*;
use crate::types::NavIcon;

#[component]
pub fn Icon(icon: NavIcon, class: String) -> Element {
    rsx! {
        svg {
            class: "{class}",
            "xmlns": "http://www.w3.org/2000/svg",
            "viewBox": "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            "stroke-width": "2",
            "stroke-linecap": "round",
            "stroke-linejoin": "round",
            "data-icon": icon.name(),
            for d in icon.paths().iter().copied() {
                path { d: d }
            }
        }
    }
}
