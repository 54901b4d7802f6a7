pub mod app_shell;
pub mod sidebar;

pub use app_shell::AppShell;
pub use sidebar::{Sidebar, SidebarFooter, SidebarHeader};
