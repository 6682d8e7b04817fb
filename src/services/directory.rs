use crate::core::skills::normalize_skill_name;
use crate::models::{Participant, ParticipantId, SkillKind, SkillRecord};
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::collections::BTreeSet;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when talking to the SkillSwap core API
///
/// Every variant aborts the computation it was fetched for; this service
/// never retries a directory call and never returns partial match lists.
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unauthorized: invalid service API key")]
    Unauthorized,

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Client for the SkillSwap core API
///
/// Provides both read-only directory views this service depends on:
/// the skill directory (declared skills per participant and kind) and the
/// participant directory (everyone except the requester). All calls are
/// authenticated with a service API key header and bounded by a request
/// timeout.
pub struct DirectoryClient {
    base_url: String,
    api_key: String,
    client: Client,
}

impl DirectoryClient {
    pub fn new(base_url: String, api_key: String, timeout_secs: u64) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url,
            api_key,
            client,
        }
    }

    /// Fetch one participant's declared skill names of one kind
    ///
    /// Returns the trimmed names as a set; the directory already rejects
    /// duplicate (owner, name, kind) records on write.
    pub async fn find_by_owner_and_kind(
        &self,
        owner_id: &str,
        kind: SkillKind,
    ) -> Result<BTreeSet<String>, DirectoryError> {
        let url = format!(
            "{}/api/skills?owner={}&type={}",
            self.base_url.trim_end_matches('/'),
            urlencoding::encode(owner_id),
            kind.as_str()
        );

        tracing::debug!("Fetching {} skills for {}", kind.as_str(), owner_id);

        let response = self
            .client
            .get(&url)
            .header("X-Api-Key", &self.api_key)
            .send()
            .await?;

        let records = Self::parse_records(Self::ensure_success(response, "fetch skills")?).await?;

        Ok(records
            .into_iter()
            .filter_map(|r| normalize_skill_name(&r.name))
            .collect())
    }

    /// Fetch all skill records for a set of owners in one round trip
    ///
    /// Used for the candidate population so matching issues a constant
    /// number of directory calls instead of two per candidate.
    pub async fn list_skills(
        &self,
        owner_ids: &[ParticipantId],
    ) -> Result<Vec<SkillRecord>, DirectoryError> {
        if owner_ids.is_empty() {
            return Ok(vec![]);
        }

        let url = format!(
            "{}/api/skills?owners={}",
            self.base_url.trim_end_matches('/'),
            urlencoding::encode(&owner_ids.join(","))
        );

        let response = self
            .client
            .get(&url)
            .header("X-Api-Key", &self.api_key)
            .send()
            .await?;

        let records = Self::parse_records(Self::ensure_success(response, "list skills")?).await?;

        tracing::debug!(
            "Fetched {} skill records for {} owners",
            records.len(),
            owner_ids.len()
        );

        Ok(records)
    }

    /// Fetch every known participant except the given one
    pub async fn find_all_except(
        &self,
        self_id: &str,
    ) -> Result<Vec<Participant>, DirectoryError> {
        let url = format!(
            "{}/api/participants?exclude={}",
            self.base_url.trim_end_matches('/'),
            urlencoding::encode(self_id)
        );

        let response = self
            .client
            .get(&url)
            .header("X-Api-Key", &self.api_key)
            .send()
            .await?;

        let json: Value = Self::ensure_success(response, "list participants")?
            .json()
            .await?;

        let participants: Vec<Participant> = serde_json::from_value(json)
            .map_err(|e| DirectoryError::InvalidResponse(format!("Failed to parse participants: {}", e)))?;

        // Exclude self even if the upstream ignores the parameter
        Ok(participants.into_iter().filter(|p| p.id != self_id).collect())
    }

    /// Liveness probe against the core API
    pub async fn health_check(&self) -> Result<bool, DirectoryError> {
        let url = format!("{}/api/health", self.base_url.trim_end_matches('/'));

        let response = self
            .client
            .get(&url)
            .header("X-Api-Key", &self.api_key)
            .send()
            .await?;

        Ok(response.status().is_success())
    }

    fn ensure_success(
        response: reqwest::Response,
        context: &str,
    ) -> Result<reqwest::Response, DirectoryError> {
        match response.status() {
            status if status.is_success() => Ok(response),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(DirectoryError::Unauthorized),
            StatusCode::NOT_FOUND => Err(DirectoryError::NotFound(context.to_string())),
            status => Err(DirectoryError::ApiError(format!(
                "Failed to {}: {}",
                context, status
            ))),
        }
    }

    async fn parse_records(response: reqwest::Response) -> Result<Vec<SkillRecord>, DirectoryError> {
        let json: Value = response.json().await?;

        serde_json::from_value(json)
            .map_err(|e| DirectoryError::InvalidResponse(format!("Failed to parse skill records: {}", e)))
    }
}
