//! Microsoft Graph API client

pub mod api;
pub mod graph;
pub mod models;
pub mod odata;
pub mod pagination;

pub use api::{GroupApi, TeamApi};
pub use graph::GraphClient;
pub use models::{DeletedGroup, MemberSettings};
pub use odata::DeletedGroupFilter;
