pub mod api;
pub mod community_form;
pub mod components;
pub mod error;
pub mod format;
pub mod i18n;
pub mod markdown;
pub mod page;
pub mod session;
pub mod sidebar;
pub mod snapshot;

#[cfg(test)]
mod test_fixtures;

pub use community_form::CommunityForm;
pub use error::ClientError;
pub use page::CommunityPage;
pub use session::Session;
pub use sidebar::{Sidebar, SidebarControls, SidebarState};
pub use snapshot::Snapshot;
