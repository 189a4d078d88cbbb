//! Shared community types
//!
//! Used by:
//! - the sidebar and edit form (read-only snapshots)
//! - the API client (request and response bodies)
//!
//! Serializable with serde for JSON over HTTP, exportable to TypeScript with ts-rs.

pub mod forms;
pub mod newtypes;
pub mod sensitive;
pub mod source;
pub mod views;

pub use forms::*;
pub use newtypes::*;
pub use sensitive::Sensitive;
pub use source::*;
pub use views::*;
