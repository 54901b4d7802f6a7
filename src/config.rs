/// Static branding and start-up layout of the sidebar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SidebarConfig {
    pub brand: &'static str,
    pub logo: &'static str,
    pub footer: &'static str,
    pub start_collapsed: bool,
}

impl Default for SidebarConfig {
    fn default() -> Self {
        Self {
            brand: "ALLSTOCK",
            logo: "logo",
            footer: "© 2024 Allstock",
            start_collapsed: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_starts_expanded() {
        let config = SidebarConfig::default();
        assert!(!config.start_collapsed);
        assert_eq!(config.brand, "ALLSTOCK");
    }
}
