//! Shared command handler patterns

pub mod list;
