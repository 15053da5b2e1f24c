use super::{
    client::ApiClient,
    types::{AdminInsightsPayload, ApiError, AuditInsightData, AuditorInsightsPayload, Insight},
};

pub const INSIGHTS_FAILED: &str = "Failed to load insights. Please try again.";

impl ApiClient {
    /// `None` when the server answered successfully without an `insights` list.
    pub async fn get_admin_insights(&self) -> Result<Option<Vec<Insight>>, ApiError> {
        let payload: AdminInsightsPayload = self
            .get_json("/api/admin/ai-insights", INSIGHTS_FAILED)
            .await?;
        Ok(payload.insights)
    }

    pub async fn get_auditor_insights(&self) -> Result<AuditInsightData, ApiError> {
        let payload: AuditorInsightsPayload = self
            .get_json("/api/auditor/ai-insights", INSIGHTS_FAILED)
            .await?;
        payload
            .data
            .ok_or_else(|| ApiError::decode("Insights response had no data"))
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::{
        test_support::mock::{MockServer, GET},
        types::InsightKind,
    };
    use serde_json::json;

    #[tokio::test]
    async fn admin_insights_distinguish_missing_list() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/admin/ai-insights");
            then.status(200).json_body(json!({ "success": true }));
        });
        let client = ApiClient::new_with_base_url(server.base_url());
        assert_eq!(client.get_admin_insights().await.unwrap(), None);
    }

    #[tokio::test]
    async fn auditor_insights_decode_nested_data() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/auditor/ai-insights");
            then.status(200).json_body(json!({
                "success": true,
                "data": {
                    "insights": [{ "type": "anomaly", "title": "Spike", "description": "d" }],
                    "topMetrics": { "totalExpenses": 100.0 }
                }
            }));
        });
        let client = ApiClient::new_with_base_url(server.base_url());
        let data = client.get_auditor_insights().await.unwrap();
        assert_eq!(data.insights[0].kind, InsightKind::Anomaly);
        assert_eq!(data.top_metrics.total_expenses, 100.0);
        assert!(data.spending_by_category.is_empty());
    }

    #[tokio::test]
    async fn auditor_insights_without_data_fail_closed() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/auditor/ai-insights");
            then.status(200).json_body(json!({ "success": true }));
        });
        let client = ApiClient::new_with_base_url(server.base_url());
        assert_eq!(
            client.get_auditor_insights().await.unwrap_err().code,
            "DECODE_ERROR"
        );
    }
}
