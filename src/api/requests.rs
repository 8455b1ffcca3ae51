//! Request payloads for the Opttab API.
//!
//! Each payload serializes to exactly the field set its endpoint expects.
//! Responses are not modelled; callers receive the decoded JSON as-is.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Default number of opted-in items to request.
pub const DEFAULT_CONTENT_LIMIT: u32 = 100;
/// Default number of campaigns to request.
pub const DEFAULT_CAMPAIGN_LIMIT: u32 = 20;

/// Kind of opted-in content to fetch.
///
/// `Other` is sent verbatim for values the service accepts beyond the
/// documented ones.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    #[default]
    Assets,
    Studio,
    All,
    #[serde(untagged)]
    Other(String),
}

/// Decision on a campaign awaiting approval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CampaignDecision {
    Approved,
    Rejected,
    #[serde(untagged)]
    Other(String),
}

/// Decision on a content submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewAction {
    Accept,
    Reject,
    #[serde(untagged)]
    Other(String),
}

/// Campaign performance counters reported by the AI model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CampaignMetrics {
    pub impressions: u64,
    pub clicks: u64,
    pub conversions: u64,
    pub spent: f64,
}

impl CampaignMetrics {
    pub fn impressions(mut self, impressions: u64) -> Self {
        self.impressions = impressions;
        self
    }

    pub fn clicks(mut self, clicks: u64) -> Self {
        self.clicks = clicks;
        self
    }

    pub fn conversions(mut self, conversions: u64) -> Self {
        self.conversions = conversions;
        self
    }

    pub fn spent(mut self, spent: f64) -> Self {
        self.spent = spent;
        self
    }
}

/// A new solicitation for user-submitted content.
///
/// Fields beyond the five required ones (for example `target_country`) are
/// added with [`ContentRequest::field`] and merged into the request body
/// without validation. An extra field with the same name as a required one
/// replaces it.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentRequest {
    pub title: String,
    pub description: String,
    pub content_types: Vec<String>,
    pub payment_per_submission: f64,
    pub total_budget: f64,
    pub extra: Map<String, Value>,
}

impl ContentRequest {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        content_types: impl IntoIterator<Item = impl Into<String>>,
        payment_per_submission: f64,
        total_budget: f64,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            content_types: content_types.into_iter().map(Into::into).collect(),
            payment_per_submission,
            total_budget,
            extra: Map::new(),
        }
    }

    /// Add an extra body field.
    pub fn field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Build the JSON body sent to the server.
    pub(crate) fn to_body(&self) -> Map<String, Value> {
        let mut body = Map::new();
        body.insert("title".into(), self.title.clone().into());
        body.insert("description".into(), self.description.clone().into());
        body.insert("content_types".into(), self.content_types.clone().into());
        body.insert(
            "payment_per_submission".into(),
            self.payment_per_submission.into(),
        );
        body.insert("total_budget".into(), self.total_budget.into());
        body.extend(self.extra.clone());
        body
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct OptStatusQuery<'a> {
    pub user_id: u64,
    pub ai_model: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct OptedInContentQuery<'a> {
    pub ai_model: &'a str,
    pub content_type: ContentType,
    pub limit: u32,
}

#[derive(Debug, Serialize)]
pub(crate) struct CampaignContentQuery<'a> {
    pub keywords: &'a [String],
    pub limit: u32,
}

#[derive(Debug, Serialize)]
pub(crate) struct CampaignApproval<'a> {
    pub campaign_id: Value,
    pub ai_model: &'a str,
    pub status: CampaignDecision,
    pub message: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct CampaignMetricsUpdate<'a> {
    pub campaign_id: u64,
    pub ai_model: &'a str,
    #[serde(flatten)]
    pub metrics: CampaignMetrics,
}

#[derive(Debug, Serialize)]
pub(crate) struct SubmissionReview<'a> {
    pub action: ReviewAction,
    pub review_notes: &'a str,
}
