use allstock::navigation::{validate_entries, SIDEBAR_LINKS};
use allstock::App;
use tracing::Level;

fn main() {
    dioxus::logger::init(Level::INFO).expect("failed to initialise logger");

    tracing::info!("Starting Allstock client");
    match validate_entries(SIDEBAR_LINKS) {
        Ok(()) => tracing::info!("Sidebar configured with {} links", SIDEBAR_LINKS.len()),
        Err(e) => tracing::error!("Sidebar navigation is misconfigured: {}", e),
    }

    dioxus::launch(App);
}
