//! API resource models for the Microsoft Graph endpoints graphctl talks to

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A Microsoft 365 group sitting in the directory recycle bin
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeletedGroup {
    /// Group ID
    pub id: String,

    /// Group display name
    #[serde(
        default,
        rename = "displayName",
        skip_serializing_if = "Option::is_none"
    )]
    pub display_name: Option<String>,

    /// Group mail nickname
    #[serde(
        default,
        rename = "mailNickname",
        skip_serializing_if = "Option::is_none"
    )]
    pub mail_nickname: Option<String>,

    /// Primary mail address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mail: Option<String>,

    /// When the group was deleted
    #[serde(
        default,
        rename = "deletedDateTime",
        skip_serializing_if = "Option::is_none"
    )]
    pub deleted_date_time: Option<DateTime<Utc>>,

    /// Group visibility (Public, Private)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<String>,
}

/// Member settings of a Teams team.
///
/// Every field is optional: only the settings actually supplied on the
/// command line appear in the PATCH body. Omitted fields are left untouched
/// by the service, so they must not be serialized as `null` or `false`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_add_remove_apps: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_create_update_channels: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_create_update_remove_connectors: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_create_update_remove_tabs: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_delete_channels: Option<bool>,
}

impl MemberSettings {
    /// Whether any setting was supplied
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// PATCH body for updating a team's member settings
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamSettingsPatch {
    pub member_settings: MemberSettings,
}
