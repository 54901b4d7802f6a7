use std::fmt;

/// Glyphs available to the sidebar. Each maps to a fixed set of SVG paths
/// drawn on a 24x24 grid with a 2px stroke.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NavIcon {
    Layout,
    Archive,
    Clipboard,
    User,
    SlidersHorizontal,
    CircleDollarSign,
    Menu,
}

impl NavIcon {
    pub fn name(self) -> &'static str {
        match self {
            NavIcon::Layout => "layout",
            NavIcon::Archive => "archive",
            NavIcon::Clipboard => "clipboard",
            NavIcon::User => "user",
            NavIcon::SlidersHorizontal => "sliders-horizontal",
            NavIcon::CircleDollarSign => "circle-dollar-sign",
            NavIcon::Menu => "menu",
        }
    }

    pub fn paths(self) -> &'static [&'static str] {
        match self {
            NavIcon::Layout => &[
                "M5 3h14a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2z",
                "M3 9h18",
                "M9 21V9",
            ],
            NavIcon::Archive => &[
                "M3 3h18a1 1 0 0 1 1 1v3a1 1 0 0 1-1 1H3a1 1 0 0 1-1-1V4a1 1 0 0 1 1-1z",
                "M4 8v11a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V8",
                "M10 12h4",
            ],
            NavIcon::Clipboard => &[
                "M9 2h6a1 1 0 0 1 1 1v2a1 1 0 0 1-1 1H9a1 1 0 0 1-1-1V3a1 1 0 0 1 1-1z",
                "M16 4h2a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H6a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2h2",
            ],
            NavIcon::User => &[
                "M19 21v-2a4 4 0 0 0-4-4H9a4 4 0 0 0-4 4v2",
                "M8 7a4 4 0 1 0 8 0a4 4 0 1 0-8 0",
            ],
            NavIcon::SlidersHorizontal => &[
                "M21 4h-7",
                "M10 4H3",
                "M21 12h-9",
                "M8 12H3",
                "M21 20h-5",
                "M12 20H3",
                "M14 2v4",
                "M8 10v4",
                "M16 18v4",
            ],
            NavIcon::CircleDollarSign => &[
                "M2 12a10 10 0 1 0 20 0a10 10 0 1 0-20 0",
                "M16 8h-6a2 2 0 1 0 0 4h4a2 2 0 1 1 0 4H8",
                "M12 18V6",
            ],
            NavIcon::Menu => &["M4 12h16", "M4 6h16", "M4 18h16"],
        }
    }
}

/// Whether the sidebar shows icons only or icons with labels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SidebarMode {
    #[default]
    Expanded,
    Collapsed,
}

impl SidebarMode {
    pub fn from_collapsed(collapsed: bool) -> Self {
        if collapsed {
            SidebarMode::Collapsed
        } else {
            SidebarMode::Expanded
        }
    }

    pub fn is_collapsed(self) -> bool {
        self == SidebarMode::Collapsed
    }

    pub fn toggled(self) -> Self {
        match self {
            SidebarMode::Expanded => SidebarMode::Collapsed,
            SidebarMode::Collapsed => SidebarMode::Expanded,
        }
    }
}

impl fmt::Display for SidebarMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SidebarMode::Expanded => write!(f, "expanded"),
            SidebarMode::Collapsed => write!(f, "collapsed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_twice_restores_mode() {
        for mode in [SidebarMode::Expanded, SidebarMode::Collapsed] {
            assert_ne!(mode.toggled(), mode);
            assert_eq!(mode.toggled().toggled(), mode);
        }
    }

    #[test]
    fn test_mode_from_flag() {
        assert!(SidebarMode::from_collapsed(true).is_collapsed());
        assert!(!SidebarMode::from_collapsed(false).is_collapsed());
        assert_eq!(SidebarMode::default(), SidebarMode::Expanded);
    }

    #[test]
    fn test_every_icon_has_paths() {
        let icons = [
            NavIcon::Layout,
            NavIcon::Archive,
            NavIcon::Clipboard,
            NavIcon::User,
            NavIcon::SlidersHorizontal,
            NavIcon::CircleDollarSign,
            NavIcon::Menu,
        ];
        for icon in icons {
            assert!(!icon.paths().is_empty(), "{} has no paths", icon.name());
            assert!(icon.paths().iter().all(|d| d.starts_with('M')));
        }
    }
}
