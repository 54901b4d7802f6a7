use dioxus::prelude::*;
use crate::config::SidebarConfig;
use crate::types::SidebarMode;

/// Shared collapsed/expanded flag. Provided once at the app root and read
/// by any component that makes layout decisions.
#[derive(Clone, Copy, PartialEq)]
pub struct SidebarState {
    pub mode: Signal<SidebarMode>,
}

pub fn use_sidebar_state(start_collapsed: bool) -> SidebarState {
    let mode = use_signal(|| SidebarMode::from_collapsed(start_collapsed));

    SidebarState { mode }
}

/// Create the sidebar state from `config` and provide both to every
/// component below the caller.
pub fn use_sidebar_provider(config: SidebarConfig) -> SidebarState {
    let sidebar_state = use_sidebar_state(config.start_collapsed);
    use_context_provider(|| config);
    use_context_provider(|| sidebar_state)
}

impl SidebarState {
    pub fn mode(&self) -> SidebarMode {
        *self.mode.read()
    }

    pub fn is_collapsed(&self) -> bool {
        self.mode().is_collapsed()
    }

    /// Flip between collapsed and expanded
    pub fn toggle(&mut self) {
        let next = self.mode().toggled();
        self.mode.set(next);
        tracing::debug!("Sidebar {}", next);
    }

    pub fn set_collapsed(&mut self, collapsed: bool) {
        self.mode.set(SidebarMode::from_collapsed(collapsed));
    }
}
