use crate::api::{ApiClient, ReportsData};
use leptos::*;
use std::rc::Rc;

#[derive(Clone)]
pub struct ReportsViewModel {
    pub data: RwSignal<Option<ReportsData>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    client: Rc<ApiClient>,
}

impl ReportsViewModel {
    pub fn new(client: Rc<ApiClient>) -> Self {
        Self {
            data: create_rw_signal(None),
            loading: create_rw_signal(true),
            error: create_rw_signal(None),
            client,
        }
    }

    pub async fn load(&self) {
        self.loading.set(true);
        match self.client.get_reports().await {
            Ok(data) => {
                self.data.set(Some(data));
                self.error.set(None);
            }
            Err(err) => {
                log::error!("reports not loaded: {}", err);
                self.error.set(Some(err.error));
            }
        }
        self.loading.set(false);
    }
}

pub fn use_reports_view_model() -> ReportsViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    ReportsViewModel::new(Rc::new(api))
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::{test_support::mock::{MockServer, GET}, InsightSeverity};
    use serde_json::json;

    #[tokio::test]
    async fn load_reads_flat_report_fields() {
        let runtime = create_runtime();
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/admin/reports");
            then.status(200).json_body(json!({
                "success": true,
                "totalExpenses": 45300.0,
                "complianceRate": 94.8,
                "averagePerTransaction": 182.4,
                "flaggedItems": 6,
                "expenseTrendData": [{ "month": "Oct", "amount": 9100 }],
                "aiInsights": [{ "id": 1, "type": "trend", "severity": "alert", "message": "Travel up 25%" }]
            }));
        });
        let vm = ReportsViewModel::new(Rc::new(ApiClient::new_with_base_url(server.base_url())));
        vm.load().await;

        let data = vm.data.get_untracked().unwrap();
        assert_eq!(data.flagged_items, 6);
        assert!(data.category_spending_data.is_empty());
        assert_eq!(data.ai_insights[0].severity, InsightSeverity::Alert);
        assert!(vm.error.get_untracked().is_none());
        assert!(!vm.loading.get_untracked());
        runtime.dispose();
    }

    #[tokio::test]
    async fn network_failure_is_reported() {
        let runtime = create_runtime();
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/admin/reports");
            then.network_error();
        });
        let vm = ReportsViewModel::new(Rc::new(ApiClient::new_with_base_url(server.base_url())));
        vm.load().await;
        assert!(vm.data.get_untracked().is_none());
        assert!(vm
            .error
            .get_untracked()
            .is_some_and(|e| e.starts_with("Request failed")));
        runtime.dispose();
    }
}
