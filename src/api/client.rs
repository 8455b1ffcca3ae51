//! Opttab MCP API client.

use super::requests::{
    CampaignApproval, CampaignContentQuery, CampaignDecision, CampaignMetrics,
    CampaignMetricsUpdate, ContentRequest, ContentType, OptStatusQuery, OptedInContentQuery,
    ReviewAction, SubmissionReview,
};
use crate::config::{ApiConfig, DEFAULT_BASE_URL};
use crate::error::{Error, Result};
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Method, RequestBuilder, StatusCode};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "x-api-key";
/// Header carrying the API secret.
pub const API_SECRET_HEADER: &str = "x-api-secret";

/// Builder for creating an API client.
pub struct ApiClientBuilder {
    base_url: String,
    api_key: String,
    api_secret: String,
    ai_model: String,
}

impl ApiClientBuilder {
    /// Create a new builder with the given credentials and the default base URL.
    pub fn new(
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
        ai_model: impl Into<String>,
    ) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
            api_secret: api_secret.into(),
            ai_model: ai_model.into(),
        }
    }

    /// Create a builder from the API configuration section.
    pub fn from_config(config: &ApiConfig) -> Self {
        Self::new(&config.api_key, &config.api_secret, &config.ai_model)
            .base_url(&config.base_url)
    }

    /// Override the service root.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Build the API client.
    pub fn build(self) -> Result<ApiClient> {
        let base_url = self.base_url.trim_end_matches('/').to_string();
        Url::parse(&base_url)
            .map_err(|e| Error::config(format!("Invalid base URL '{}': {}", base_url, e)))?;

        let mut headers = HeaderMap::new();
        headers.insert(
            HeaderName::from_static(API_KEY_HEADER),
            header_value(API_KEY_HEADER, &self.api_key)?,
        );
        headers.insert(
            HeaderName::from_static(API_SECRET_HEADER),
            header_value(API_SECRET_HEADER, &self.api_secret)?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| Error::config(format!("Could not build HTTP client: {}", e)))?;

        Ok(ApiClient {
            http,
            base_url,
            ai_model: self.ai_model,
        })
    }
}

fn header_value(name: &str, value: &str) -> Result<HeaderValue> {
    let mut value = HeaderValue::from_str(value)
        .map_err(|e| Error::invalid_input(format!("Invalid value for header '{}': {}", name, e)))?;
    value.set_sensitive(true);
    Ok(value)
}

/// Client for the Opttab MCP / AI model API.
///
/// Every method issues exactly one request and hands back the decoded JSON
/// body untouched. Nothing is cached or retried between calls.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    ai_model: String,
}

impl ApiClient {
    /// Create a client against the default service root.
    pub fn new(
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
        ai_model: impl Into<String>,
    ) -> Result<Self> {
        ApiClientBuilder::new(api_key, api_secret, ai_model).build()
    }

    /// Service root requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Name of the AI model this client acts for.
    pub fn ai_model(&self) -> &str {
        &self.ai_model
    }

    /// Get MCP server information and available tools.
    pub async fn get_server_info(&self) -> Result<Value> {
        self.send(self.request(Method::GET, "/server-info")).await
    }

    /// Check if a user has opted in for this AI model.
    pub async fn check_opt_status(&self, user_id: u64) -> Result<Value> {
        let body = OptStatusQuery {
            user_id,
            ai_model: &self.ai_model,
        };
        self.post("/tools/check-opt-status", &body).await
    }

    /// Get content from users who have opted in.
    pub async fn get_opted_in_content(
        &self,
        content_type: ContentType,
        limit: u32,
    ) -> Result<Value> {
        let body = OptedInContentQuery {
            ai_model: &self.ai_model,
            content_type,
            limit,
        };
        self.post("/tools/get-opted-in-content", &body).await
    }

    /// Get active campaigns targeting this AI model.
    pub async fn get_campaign_content(&self, keywords: &[String], limit: u32) -> Result<Value> {
        let body = CampaignContentQuery { keywords, limit };
        self.post("/tools/get-campaign-content", &body).await
    }

    /// Get campaigns awaiting approval by this AI model.
    pub async fn get_pending_campaigns(&self) -> Result<Value> {
        let request = self
            .request(Method::GET, "/campaigns/pending")
            .query(&[("ai_model", self.ai_model.as_str())]);
        self.send(request).await
    }

    /// Approve or reject a campaign.
    ///
    /// The id is sent as given, so ids taken from a pending-campaigns
    /// response can be passed back without conversion.
    pub async fn approve_campaign(
        &self,
        campaign_id: impl Into<Value>,
        status: CampaignDecision,
        message: &str,
    ) -> Result<Value> {
        let body = CampaignApproval {
            campaign_id: campaign_id.into(),
            ai_model: &self.ai_model,
            status,
            message,
        };
        self.post("/campaigns/approve", &body).await
    }

    /// Report campaign performance metrics.
    pub async fn update_campaign_metrics(
        &self,
        campaign_id: u64,
        metrics: CampaignMetrics,
    ) -> Result<Value> {
        let body = CampaignMetricsUpdate {
            campaign_id,
            ai_model: &self.ai_model,
            metrics,
        };
        self.post("/campaigns/metrics", &body).await
    }

    /// Create a new content request.
    pub async fn create_content_request(&self, request: &ContentRequest) -> Result<Value> {
        self.post("/content-requests", &request.to_body()).await
    }

    /// List all content requests.
    pub async fn list_content_requests(&self) -> Result<Value> {
        self.send(self.request(Method::GET, "/content-requests")).await
    }

    /// Get submissions for a content request.
    pub async fn get_submissions(&self, request_id: u64) -> Result<Value> {
        let path = format!("/content-requests/{}/submissions", request_id);
        self.send(self.request(Method::GET, &path)).await
    }

    /// Accept or reject a submission.
    pub async fn review_submission(
        &self,
        request_id: u64,
        submission_id: u64,
        action: ReviewAction,
        review_notes: &str,
    ) -> Result<Value> {
        let path = format!(
            "/content-requests/{}/submissions/{}/review",
            request_id, submission_id
        );
        let body = SubmissionReview {
            action,
            review_notes,
        };
        self.post(&path, &body).await
    }

    /// Get current quota and budget status.
    pub async fn get_budget_status(&self) -> Result<Value> {
        self.send(self.request(Method::GET, "/budget-status")).await
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        debug!("{} {}", method, url);
        self.http.request(method, url)
    }

    async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Value> {
        let body = serde_json::to_vec(body)?;
        self.send(self.request(Method::POST, path).body(body)).await
    }

    async fn send(&self, request: RequestBuilder) -> Result<Value> {
        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(status_error(status, response.text().await));
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|source| Error::Decode {
            status: status.as_u16(),
            body,
            source,
        })
    }
}

/// Error for a non-success response. The status is kept even if the body
/// could not be read.
fn status_error(status: StatusCode, body: reqwest::Result<String>) -> Error {
    warn!("Request failed with HTTP {}", status.as_u16());
    let body = body.unwrap_or_else(|e| {
        warn!("Could not read error response body: {}", e);
        String::new()
    });
    Error::Http {
        status: status.as_u16(),
        body,
    }
}
