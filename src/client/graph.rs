//! Microsoft Graph API client implementation

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Client as HttpClient;
use serde::Serialize;
use serde::de::DeserializeOwned;
use uuid::Uuid;

use super::api::{GroupApi, TeamApi};
use super::models::{DeletedGroup, MemberSettings, TeamSettingsPatch};
use super::odata::{DeletedGroupFilter, classify_failure};
use super::pagination::{MAX_PAGES, PageBody};
use crate::error::{ApiError, Result};

/// Microsoft Graph API base URL
const API_BASE_URL: &str = "https://graph.microsoft.com";

/// Requested OData verbosity; metadata annotations are noise for a CLI
const ACCEPT_HEADER: &str = "application/json;odata.metadata=none";

/// Microsoft Graph API client
pub struct GraphClient {
    http: HttpClient,
    base_url: String,
    access_token: String,
}

impl GraphClient {
    /// Create a client against the public Graph endpoint
    pub fn new(access_token: String) -> Result<Self> {
        Self::with_host(access_token, None)
    }

    /// Create a client with a custom API host (development/testing)
    pub fn with_host(access_token: String, api_host: Option<String>) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let base_url = api_host
            .map(|h| h.trim_end_matches('/').to_string())
            .unwrap_or_else(|| API_BASE_URL.to_string());

        Ok(Self {
            http,
            base_url,
            access_token,
        })
    }

    /// Issue one GET and return the raw body text, or a normalized error
    async fn get_text(&self, url: &str) -> Result<String> {
        let response = self
            .http
            .get(url)
            .bearer_auth(&self.access_token)
            .header("accept", ACCEPT_HEADER)
            .send()
            .await
            .map_err(ApiError::from)?;

        let status = response.status();
        let body = response.text().await.map_err(ApiError::from)?;

        if status.is_success() {
            Ok(body)
        } else {
            Err(classify_failure(status, &body).into())
        }
    }

    /// Fetch a complete collection, following `@odata.nextLink` to exhaustion.
    ///
    /// Items are accumulated in page-arrival order. Any page failure fails
    /// the whole call; callers never see a partial sequence.
    pub(crate) async fn get_all<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>> {
        self.get_all_capped(path, MAX_PAGES).await
    }

    /// `get_all` with an explicit page cap.
    ///
    /// Hitting the cap finalizes the accumulated items as a success: the cap
    /// bounds a backend that keeps handing out next links, it is not a
    /// failure mode.
    async fn get_all_capped<T: DeserializeOwned>(
        &self,
        path: &str,
        max_pages: usize,
    ) -> Result<Vec<T>> {
        let mut items = Vec::new();
        let mut next = Some(format!("{}{}", self.base_url, path));
        let mut pages = 0usize;

        while let Some(url) = next.take() {
            if pages >= max_pages {
                warn!("page cap of {} reached, truncating listing", max_pages);
                break;
            }

            let body = self.get_text(&url).await?;
            let page: PageBody<T> = serde_json::from_str(&body).map_err(|e| {
                ApiError::MalformedResponse(format!("Failed to parse page {}: {}", pages + 1, e))
            })?;

            let (value, link) = page.into_parts();
            debug!("fetched page {} ({} items)", pages + 1, value.len());

            items.extend(value);
            next = link;
            pages += 1;
        }

        Ok(items)
    }

    /// Issue one PATCH with a JSON body; the Graph returns no body on success
    pub(crate) async fn patch_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<()> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .http
            .patch(&url)
            .bearer_auth(&self.access_token)
            .header("accept", ACCEPT_HEADER)
            .json(body)
            .send()
            .await
            .map_err(ApiError::from)?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let text = response.text().await.map_err(ApiError::from)?;
        Err(classify_failure(status, &text).into())
    }
}

#[async_trait]
impl GroupApi for GraphClient {
    async fn list_deleted_groups(
        &self,
        filter: &DeletedGroupFilter,
        page_size: usize,
    ) -> Result<Vec<DeletedGroup>> {
        self.get_all(&filter.to_path(page_size)).await
    }
}

#[async_trait]
impl TeamApi for GraphClient {
    async fn update_member_settings(
        &self,
        team_id: &Uuid,
        settings: &MemberSettings,
    ) -> Result<()> {
        let path = format!("/v1.0/teams/{}", team_id);
        let patch = TeamSettingsPatch {
            member_settings: settings.clone(),
        };
        self.patch_json(&path, &patch).await
    }
}
