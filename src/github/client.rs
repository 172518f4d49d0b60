use super::types::{
    ComparePayload, IssuePayload, MilestonePayload, NewRelease, ReleasePatch, ReleasePayload,
};
use super::{ApiError, HostingClient};
use crate::config::RepoConfig;
use crate::models::{Issue, Milestone};
use crate::{Context, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use serde::de::DeserializeOwned;

const API_ROOT: &str = "https://api.github.com";

/// Reqwest-backed GitHub client bound to one repository.
pub struct GitHubClient {
    http: reqwest::Client,
    owner: String,
    repository: String,
}

impl GitHubClient {
    pub fn new(config: &RepoConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        if let Some(token) = &config.token {
            let mut value = HeaderValue::from_str(&format!("Bearer {token}"))
                .context("GitHub token contains characters not allowed in a header")?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let http = reqwest::Client::builder()
            .user_agent(concat!("relnotes/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .build()
            .context("Failed to construct HTTP client")?;

        Ok(Self {
            http,
            owner: config.owner.clone(),
            repository: config.repository.clone(),
        })
    }

    fn repo_url(&self, path: &str) -> String {
        format!("{API_ROOT}/repos/{}/{}/{path}", self.owner, self.repository)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status,
                url: url.to_string(),
            });
        }
        Ok(response.json().await?)
    }

    async fn check(response: reqwest::Response, url: &str) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status,
                url: url.to_string(),
            });
        }
        Ok(response)
    }

    /// All releases, drafts included (drafts are invisible to the
    /// by-tag endpoint, so callers search this list instead).
    pub async fn releases(&self) -> Result<Vec<ReleasePayload>, ApiError> {
        let url = self.repo_url("releases?per_page=100");
        self.get_json(&url).await
    }

    /// Locate a release whose tag or name matches the milestone title.
    pub async fn find_release(&self, milestone_title: &str) -> Result<Option<ReleasePayload>, ApiError> {
        let releases = self.releases().await?;
        Ok(releases.into_iter().find(|release| {
            release.tag_name == milestone_title
                || release.name.as_deref() == Some(milestone_title)
        }))
    }

    pub async fn create_release(&self, release: &NewRelease<'_>) -> Result<ReleasePayload, ApiError> {
        let url = self.repo_url("releases");
        let response = self.http.post(&url).json(release).send().await?;
        Ok(Self::check(response, &url).await?.json().await?)
    }

    pub async fn edit_release(
        &self,
        id: u64,
        patch: &ReleasePatch<'_>,
    ) -> Result<ReleasePayload, ApiError> {
        let url = self.repo_url(&format!("releases/{id}"));
        let response = self.http.patch(&url).json(patch).send().await?;
        Ok(Self::check(response, &url).await?.json().await?)
    }

    /// Upload raw bytes as a release asset.
    pub async fn upload_asset(
        &self,
        release: &ReleasePayload,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<(), ApiError> {
        // upload_url is a URI template: ".../assets{?name,label}".
        let base = release
            .upload_url
            .split('{')
            .next()
            .unwrap_or(&release.upload_url)
            .to_string();
        let response = self
            .http
            .post(&base)
            .query(&[("name", file_name)])
            .header(reqwest::header::CONTENT_TYPE, "application/octet-stream")
            .body(bytes)
            .send()
            .await?;
        Self::check(response, &base).await?;
        Ok(())
    }

    pub async fn close_milestone(&self, number: u64) -> Result<(), ApiError> {
        let url = self.repo_url(&format!("milestones/{number}"));
        let response = self
            .http
            .patch(&url)
            .json(&serde_json::json!({ "state": "closed" }))
            .send()
            .await?;
        Self::check(response, &url).await?;
        Ok(())
    }
}

#[async_trait]
impl HostingClient for GitHubClient {
    async fn milestones(&self) -> Result<Vec<Milestone>, ApiError> {
        let url = self.repo_url("milestones?state=all&per_page=100");
        let payloads: Vec<MilestonePayload> = self.get_json(&url).await?;
        Ok(payloads.into_iter().map(MilestonePayload::into_model).collect())
    }

    async fn issues_for_milestone(&self, milestone: &Milestone) -> Result<Vec<Issue>, ApiError> {
        let url = self.repo_url(&format!(
            "issues?milestone={}&state=all&sort=created&direction=asc&per_page=100",
            milestone.number
        ));
        let payloads: Vec<IssuePayload> = self.get_json(&url).await?;
        Ok(payloads.into_iter().map(IssuePayload::into_model).collect())
    }

    async fn commits_ahead(&self, from_ref: &str, to_ref: &str) -> Result<u64, ApiError> {
        let url = self.repo_url(&format!("compare/{from_ref}...{to_ref}"));
        let compare: ComparePayload = self.get_json(&url).await?;
        Ok(compare.ahead_by)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> RepoConfig {
        RepoConfig {
            owner: "couchbase".to_string(),
            repository: "sync_gateway".to_string(),
            token: None,
            default_branch: "master".to_string(),
        }
    }

    #[test]
    fn test_repo_url() {
        let client = GitHubClient::new(&test_config()).unwrap();
        assert_eq!(
            client.repo_url("milestones?state=all&per_page=100"),
            "https://api.github.com/repos/couchbase/sync_gateway/milestones?state=all&per_page=100"
        );
    }

    #[test]
    fn test_client_accepts_token() {
        let mut config = test_config();
        config.token = Some("ghp_example".to_string());
        assert!(GitHubClient::new(&config).is_ok());
    }
}
