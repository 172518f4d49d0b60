//! Serde mirrors of the GitHub REST payloads this tool touches.
//!
//! Only the fields we consume are declared; everything else in the API
//! responses is ignored. Conversions into the domain models happen here so
//! the rest of the crate never sees wire shapes.

use crate::models::{Issue, ItemState, Milestone};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct MilestonePayload {
    pub number: u64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub state: String,
    pub html_url: String,
}

impl MilestonePayload {
    pub fn into_model(self) -> Milestone {
        Milestone {
            number: self.number,
            title: self.title,
            description: self.description.unwrap_or_default(),
            state: ItemState::from_api(&self.state),
            html_url: self.html_url,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct LabelPayload {
    pub name: String,
}

/// Present on an issue payload exactly when the issue is a pull request.
#[derive(Debug, Deserialize)]
pub struct PullRequestMarker {
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct IssuePayload {
    pub number: u64,
    pub title: String,
    pub html_url: String,
    pub state: String,
    #[serde(default)]
    pub labels: Vec<LabelPayload>,
    #[serde(default)]
    pub pull_request: Option<PullRequestMarker>,
}

impl IssuePayload {
    pub fn into_model(self) -> Issue {
        Issue {
            number: self.number,
            title: self.title,
            html_url: self.html_url,
            state: ItemState::from_api(&self.state),
            labels: self.labels.into_iter().map(|label| label.name).collect(),
            is_pull_request: self.pull_request.is_some(),
        }
    }
}

/// Response of `GET /repos/{owner}/{repo}/compare/{base}...{head}`.
#[derive(Debug, Deserialize)]
pub struct ComparePayload {
    pub ahead_by: u64,
}

#[derive(Debug, Deserialize)]
pub struct ReleasePayload {
    pub id: u64,
    pub tag_name: String,
    #[serde(default)]
    pub name: Option<String>,
    /// URI template ending in `{?name,label}`; stripped before use.
    pub upload_url: String,
    pub draft: bool,
    pub created_at: DateTime<Utc>,
    pub html_url: String,
}

#[derive(Debug, Serialize)]
pub struct NewRelease<'a> {
    pub tag_name: &'a str,
    pub name: &'a str,
    pub body: &'a str,
    pub draft: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_commitish: Option<&'a str>,
}

/// Partial update for `PATCH /repos/{owner}/{repo}/releases/{id}`.
#[derive(Debug, Default, Serialize)]
pub struct ReleasePatch<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub draft: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_commitish: Option<&'a str>,
}
