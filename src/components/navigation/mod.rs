pub mod icon;
pub mod sidebar_link;

pub use icon::Icon;
pub use sidebar_link::{SidebarLink, SidebarLinkContent};
