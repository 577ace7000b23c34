//! Group command implementations

use clap::Args;
use tabled::Tabled;

use crate::cli::args::GlobalOptions;
use crate::cli::handlers::list::run_list_command;
use crate::client::{DeletedGroup, DeletedGroupFilter, GroupApi};
use crate::error::Result;

/// Arguments for `group recyclebin list`
#[derive(Debug, Clone, Default, Args)]
pub struct RecycleBinListArgs {
    /// List groups with displayName starting with the specified value
    #[arg(long, short = 'd')]
    pub display_name: Option<String>,

    /// List groups with mailNickname starting with the specified value
    #[arg(long, short = 'm')]
    pub mail_nickname: Option<String>,

    /// Maximum results to return
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,
}

impl RecycleBinListArgs {
    fn to_filter(&self) -> DeletedGroupFilter {
        DeletedGroupFilter {
            display_name: self.display_name.clone(),
            mail_nickname: self.mail_nickname.clone(),
        }
    }
}

/// Deleted group for table display
#[derive(Tabled)]
struct DeletedGroupDisplay {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "DISPLAY NAME")]
    display_name: String,
    #[tabled(rename = "MAIL NICKNAME")]
    mail_nickname: String,
    #[tabled(rename = "DELETED")]
    deleted: String,
}

impl From<DeletedGroup> for DeletedGroupDisplay {
    fn from(group: DeletedGroup) -> Self {
        Self {
            id: group.id,
            display_name: group.display_name.unwrap_or_default(),
            mail_nickname: group.mail_nickname.unwrap_or_default(),
            deleted: group
                .deleted_date_time
                .map(|dt| dt.format("%Y-%m-%d %H:%M UTC").to_string())
                .unwrap_or_else(|| "N/A".to_string()),
        }
    }
}

/// Run the `group recyclebin list` command
pub async fn recyclebin_list(opts: &GlobalOptions, args: &RecycleBinListArgs) -> Result<()> {
    let filter = args.to_filter();

    run_list_command::<DeletedGroup, DeletedGroupDisplay, _, _>(
        opts,
        args.limit,
        "deleted groups",
        |client, page_size| async move { client.list_deleted_groups(&filter, page_size).await },
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_args_to_filter() {
        let args = RecycleBinListArgs {
            display_name: Some("Finance".to_string()),
            mail_nickname: None,
            limit: Some(10),
        };

        let filter = args.to_filter();
        assert_eq!(filter.display_name.as_deref(), Some("Finance"));
        assert!(filter.mail_nickname.is_none());
    }

    #[test]
    fn test_display_conversion_fills_missing_fields() {
        let group = DeletedGroup {
            id: "abc".to_string(),
            display_name: None,
            mail_nickname: None,
            mail: None,
            deleted_date_time: None,
            visibility: None,
        };

        let display = DeletedGroupDisplay::from(group);
        assert_eq!(display.id, "abc");
        assert_eq!(display.display_name, "");
        assert_eq!(display.deleted, "N/A");
    }

    #[test]
    fn test_display_conversion_formats_deletion_time() {
        let group = DeletedGroup {
            id: "abc".to_string(),
            display_name: Some("Finance".to_string()),
            mail_nickname: Some("finance".to_string()),
            mail: None,
            deleted_date_time: Some(Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap()),
            visibility: None,
        };

        let display = DeletedGroupDisplay::from(group);
        assert_eq!(display.deleted, "2024-01-15 10:30 UTC");
    }
}
