use crate::config::ApiConfig;
use crate::error::ApiError;
use anyhow::{Context, Result};
use reqwest::header::{
    HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, CONTENT_TYPE, ORIGIN, REFERER, USER_AGENT,
};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};

/// Login response; only the session token is read, extra fields are ignored.
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
}

/// A task as reported by `/task/history`. A null or missing `status` marks
/// the task as not yet handled; any other value excludes it from submission.
#[derive(Debug, Clone, Deserialize)]
pub struct Task {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub status: Option<Value>,
}

impl Task {
    pub fn is_incomplete(&self) -> bool {
        self.status.is_none()
    }
}

#[derive(Debug, Deserialize)]
pub struct SubmitResponse {
    #[serde(default)]
    pub success: bool,
}

/// Stateless client for the three platform endpoints. One `reqwest::Client`
/// carries the fixed header set the service expects on every request.
pub struct ApiClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("*/*"));
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            ORIGIN,
            HeaderValue::from_str(&config.origin).context("Invalid origin header value")?,
        );
        headers.insert(
            REFERER,
            HeaderValue::from_str(&config.referer).context("Invalid referer header value")?,
        );
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&config.user_agent).context("Invalid user-agent value")?,
        );

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { http, config })
    }

    /// `POST /account/login`. The referral code falls back to the configured
    /// default when not overridden.
    pub async fn login(
        &self,
        address: &str,
        init_data: &str,
        referral: Option<&str>,
    ) -> Result<LoginResponse, ApiError> {
        let body = json!({
            "address": address,
            "referralCode": referral.unwrap_or(&self.config.referral_code),
            "initData": init_data,
        });
        let request = self.http.post(self.endpoint("/account/login")).json(&body);
        self.execute("login", request).await
    }

    /// `GET /task/history` with bearer authorization.
    pub async fn task_history(&self, token: &str) -> Result<Vec<Task>, ApiError> {
        let request = self
            .http
            .get(self.endpoint("/task/history"))
            .bearer_auth(token);
        self.execute("task history", request).await
    }

    /// `POST /task/submit` with bearer authorization. `extrinsicHash` and
    /// `network` are always sent empty; the service fills them server-side.
    pub async fn submit_task(&self, token: &str, task_id: u64) -> Result<SubmitResponse, ApiError> {
        let body = json!({
            "taskId": task_id,
            "extrinsicHash": "",
            "network": "",
        });
        let request = self
            .http
            .post(self.endpoint("/task/submit"))
            .bearer_auth(token)
            .json(&body);
        self.execute("task submit", request).await
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        op: &'static str,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = request
            .send()
            .await
            .map_err(|source| ApiError::Transport { op, source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                op,
                status: status.as_u16(),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::InvalidResponse {
                op,
                reason: e.to_string(),
            })
    }
}
