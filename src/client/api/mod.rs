//! API trait definitions split by responsibility
//!
//! - [`GroupApi`] - directory group operations
//! - [`TeamApi`] - Teams team operations
//!
//! Command handlers depend on these traits rather than the concrete
//! [`GraphClient`](super::GraphClient), which keeps them mockable.

mod group;
mod team;

pub use group::GroupApi;
pub use team::TeamApi;
