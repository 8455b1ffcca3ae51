//! Demonstration walkthrough of the Opttab API.
//!
//! Runs the typical sequence an AI model integration goes through: discover
//! the server, check a user's consent, fetch content, handle pending
//! campaigns, post a content request and check the remaining budget.

use crate::api::{ApiClient, ApiClientBuilder, CampaignDecision, ContentRequest, ContentType};
use crate::config::Config;
use crate::error::Result;
use serde_json::Value;
use std::io::Write;

/// Message attached when the walkthrough approves a campaign.
const APPROVAL_MESSAGE: &str = "Campaign meets our content guidelines";

/// The demonstration application.
pub struct App {
    client: ApiClient,
    config: Config,
}

impl App {
    /// Create a new application.
    pub fn new(config: Config) -> Result<Self> {
        let client = ApiClientBuilder::from_config(&config.api).build()?;
        tracing::info!(
            "Using {} as AI model '{}'",
            client.base_url(),
            client.ai_model()
        );
        Ok(Self { client, config })
    }

    /// Run the walkthrough, writing progress to `out`.
    ///
    /// Stops at the first failed call and returns its error.
    pub async fn run<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "Getting server info...")?;
        let server_info = self.client.get_server_info().await?;
        writeln!(out, "MCP Server: {}", text(&server_info["name"]))?;
        writeln!(out, "Available tools: {}", len(&server_info["tools"]))?;

        writeln!(out, "\nChecking opt status for user...")?;
        let opt_status = self.client.check_opt_status(self.config.demo.user_id).await?;
        writeln!(out, "Opt status: {}", text(&opt_status["opt_status"]))?;
        writeln!(out, "Can use data: {}", text(&opt_status["can_use_data"]))?;

        if opt_status["can_use_data"].as_bool().unwrap_or(false) {
            writeln!(out, "\nFetching opted-in content...")?;
            let content = self
                .client
                .get_opted_in_content(ContentType::Assets, self.config.demo.content_limit)
                .await?;
            writeln!(out, "Retrieved {} assets", len(&content["data"]["assets"]))?;
        }

        writeln!(out, "\nFetching pending campaigns...")?;
        let pending = self.client.get_pending_campaigns().await?;
        let campaigns = &pending["pending_campaigns"];
        writeln!(out, "Pending campaigns: {}", len(campaigns))?;

        if let Some(campaign) = campaigns.as_array().and_then(|c| c.first()) {
            writeln!(out, "\nApproving campaign: {}", text(&campaign["name"]))?;
            let approval = self
                .client
                .approve_campaign(
                    campaign["id"].clone(),
                    CampaignDecision::Approved,
                    APPROVAL_MESSAGE,
                )
                .await?;
            writeln!(out, "Campaign status: {}", text(&approval["campaign_status"]))?;
        }

        writeln!(out, "\nCreating content request...")?;
        let request = ContentRequest::new(
            "High-Quality Product Photos",
            "Looking for professional product photography",
            ["image"],
            50.00,
            1000.00,
        )
        .field("target_country", "US");
        let created = self.client.create_content_request(&request).await?;
        writeln!(out, "Created request ID: {}", text(&created["data"]["id"]))?;

        writeln!(out, "\nChecking budget status...")?;
        let budget = self.client.get_budget_status().await?;
        writeln!(out, "Plan: {}", text(&budget["data"]["plan_name"]))?;
        writeln!(
            out,
            "Remaining budget: ${}",
            text(&budget["data"]["remaining_budget"])
        )?;

        Ok(())
    }
}

/// Render a response field for display; absent fields show as `-`.
fn text(value: &Value) -> String {
    match value {
        Value::Null => "-".to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn len(value: &Value) -> usize {
    value.as_array().map_or(0, Vec::len)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_text_rendering() {
        assert_eq!(text(&json!("Opttab")), "Opttab");
        assert_eq!(text(&json!(true)), "true");
        assert_eq!(text(&json!(12.5)), "12.5");
        assert_eq!(text(&Value::Null), "-");
    }

    #[test]
    fn test_len_of_non_array_is_zero() {
        assert_eq!(len(&json!([1, 2, 3])), 3);
        assert_eq!(len(&json!({"a": 1})), 0);
        assert_eq!(len(&Value::Null), 0);
    }
}
