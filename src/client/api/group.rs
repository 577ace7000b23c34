//! Directory group API trait

use async_trait::async_trait;

use crate::client::models::DeletedGroup;
use crate::client::odata::DeletedGroupFilter;
use crate::error::Result;

/// Directory group operations
#[async_trait]
pub trait GroupApi: Send + Sync {
    /// List Microsoft 365 groups deleted in the current tenant.
    ///
    /// `page_size` is the `$top` hint sent with the first request. Follows
    /// pagination to exhaustion; the returned sequence is complete and
    /// ordered by page arrival, or the call fails as a whole.
    async fn list_deleted_groups(
        &self,
        filter: &DeletedGroupFilter,
        page_size: usize,
    ) -> Result<Vec<DeletedGroup>>;
}
