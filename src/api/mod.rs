//! Opttab MCP API integration.
//!
//! This module provides a thin client over the Opttab AI model API: static
//! credential headers, one method per endpoint, and JSON responses passed
//! through unchanged.

mod client;
mod requests;

pub use client::{API_KEY_HEADER, API_SECRET_HEADER, ApiClient, ApiClientBuilder};
pub use requests::{
    CampaignDecision, CampaignMetrics, ContentRequest, ContentType, DEFAULT_CAMPAIGN_LIMIT,
    DEFAULT_CONTENT_LIMIT, ReviewAction,
};
