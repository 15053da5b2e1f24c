use super::{
    client::ApiClient,
    types::{ApiError, ReportsData},
};

impl ApiClient {
    pub async fn get_reports(&self) -> Result<ReportsData, ApiError> {
        self.get_json("/api/admin/reports", "Failed to load reports")
            .await
    }
}
