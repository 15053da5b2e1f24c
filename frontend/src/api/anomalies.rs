use super::{
    client::ApiClient,
    types::{AnomaliesPayload, AnomalyStats, AnomalyStatsPayload, ApiError, FlaggedTransaction},
};

const ANOMALIES_FAILED: &str = "Failed to load anomalies";

impl ApiClient {
    pub async fn get_anomalies(&self) -> Result<Vec<FlaggedTransaction>, ApiError> {
        let payload: AnomaliesPayload = self.get_json("/anomalies", ANOMALIES_FAILED).await?;
        Ok(payload.anomalies)
    }

    pub async fn get_anomaly_stats(&self) -> Result<AnomalyStats, ApiError> {
        let payload: AnomalyStatsPayload =
            self.get_json("/anomalies/stats", ANOMALIES_FAILED).await?;
        Ok(payload.stats)
    }
}
