//! Teams team API trait

use async_trait::async_trait;
use uuid::Uuid;

use crate::client::models::MemberSettings;
use crate::error::Result;

/// Teams team operations
#[async_trait]
pub trait TeamApi: Send + Sync {
    /// Update member settings of a team.
    ///
    /// Only the settings present in `settings` are sent; everything else on
    /// the team is left untouched. The update is a full replace of the named
    /// fields, so repeating the call is idempotent.
    async fn update_member_settings(&self, team_id: &Uuid, settings: &MemberSettings)
    -> Result<()>;
}
