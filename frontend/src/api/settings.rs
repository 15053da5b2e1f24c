use super::{
    client::ApiClient,
    types::{Ack, ApiError, EmployeeSettings, SettingsPayload},
};

impl ApiClient {
    /// Missing `settings` in a successful response yields the defaults.
    pub async fn get_employee_settings(&self) -> Result<EmployeeSettings, ApiError> {
        let payload: SettingsPayload = self
            .get_json("/settings/employee", "Failed to load settings")
            .await?;
        Ok(payload.settings.unwrap_or_default())
    }

    /// `profile.displayName` when the server holds settings for the user.
    pub async fn get_employee_display_name(&self) -> Result<Option<String>, ApiError> {
        let payload: SettingsPayload = self
            .get_json("/settings/employee", "Failed to load settings")
            .await?;
        Ok(payload
            .settings
            .map(|s| s.profile.display_name)
            .filter(|name| !name.trim().is_empty()))
    }

    pub async fn save_employee_settings(
        &self,
        settings: &EmployeeSettings,
    ) -> Result<(), ApiError> {
        let _: Ack = self
            .put_json("/settings/employee", settings, "Failed to save settings")
            .await?;
        Ok(())
    }
}
