//! Sidebar navigation entries and the rules deciding which one is active.

use std::collections::HashSet;

use crate::error::{NavigationError, NavigationResult};
use crate::types::NavIcon;
use crate::Route;

pub const ROOT_PATH: &str = "/";
pub const DASHBOARD_PATH: &str = "/dashboard";

/// One link in the sidebar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavigationEntry {
    pub path: &'static str,
    pub icon: NavIcon,
    pub label: &'static str,
}

impl NavigationEntry {
    pub const fn new(path: &'static str, icon: NavIcon, label: &'static str) -> Self {
        Self { path, icon, label }
    }

    pub fn is_active(&self, current_path: &str) -> bool {
        is_active(current_path, self.path)
    }

    /// Resolve the configured path against the router. The catch-all route
    /// does not count as a match.
    pub fn route(&self) -> NavigationResult<Route> {
        match self.path.parse::<Route>() {
            Ok(Route::NotFound { .. }) | Err(_) => {
                Err(NavigationError::UnknownRoute(self.path.to_string()))
            }
            Ok(route) => Ok(route),
        }
    }
}

/// Links rendered top to bottom.
pub const SIDEBAR_LINKS: &[NavigationEntry] = &[
    NavigationEntry::new(DASHBOARD_PATH, NavIcon::Layout, "Dashboard"),
    NavigationEntry::new("/inventory", NavIcon::Archive, "Inventory"),
    NavigationEntry::new("/products", NavIcon::Clipboard, "Products"),
    NavigationEntry::new("/users", NavIcon::User, "Users"),
    NavigationEntry::new("/settings", NavIcon::SlidersHorizontal, "Settings"),
    NavigationEntry::new("/expenses", NavIcon::CircleDollarSign, "Expenses"),
];

/// The root path is served by the dashboard, so it highlights that entry.
pub fn is_active(current_path: &str, entry_path: &str) -> bool {
    current_path == entry_path || (current_path == ROOT_PATH && entry_path == DASHBOARD_PATH)
}

pub fn active_entry<'a>(
    entries: &'a [NavigationEntry],
    current_path: &str,
) -> Option<&'a NavigationEntry> {
    entries.iter().find(|entry| entry.is_active(current_path))
}

/// Check that at most one entry can be active for any path.
pub fn validate_entries(entries: &[NavigationEntry]) -> NavigationResult<()> {
    let mut seen = HashSet::new();
    for entry in entries {
        if !entry.path.starts_with('/') {
            return Err(NavigationError::InvalidPath(entry.path.to_string()));
        }
        if !seen.insert(entry.path) {
            return Err(NavigationError::DuplicatePath(entry.path.to_string()));
        }
    }

    if seen.contains(ROOT_PATH) && seen.contains(DASHBOARD_PATH) {
        return Err(NavigationError::RootCollision);
    }

    Ok(())
}
