use dioxus::prelude::*;

use crate::components::layout::AppShell;
use crate::pages::{Dashboard, Expenses, Home, Inventory, NotFound, Products, Settings, Users};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppShell)]
        #[route("/")]
        Home {},
        #[route("/dashboard")]
        Dashboard {},
        #[route("/inventory")]
        Inventory {},
        #[route("/products")]
        Products {},
        #[route("/users")]
        Users {},
        #[route("/settings")]
        Settings {},
        #[route("/expenses")]
        Expenses {},
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}
