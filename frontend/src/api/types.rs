use chrono::NaiveDate;
use leptos::*;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
#[error("{error}")]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.error.into_view()
    }
}

impl ApiError {
    fn with_code(msg: impl Into<String>, code: &str) -> Self {
        Self {
            error: msg.into(),
            code: code.to_string(),
            details: None,
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "VALIDATION_ERROR")
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "UNKNOWN")
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "REQUEST_FAILED")
    }

    /// The server answered with `success: false` (or a non-2xx status).
    pub fn server(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "SERVER_ERROR")
    }

    /// The payload did not match the expected schema.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "DECODE_ERROR")
    }

    pub fn is_network(&self) -> bool {
        self.code == "REQUEST_FAILED"
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Employee,
    Auditor,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Admin, Role::Employee, Role::Auditor];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Employee => "employee",
            Role::Auditor => "auditor",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Employee => "Employee",
            Role::Auditor => "Auditor",
        }
    }

    pub fn home_path(&self) -> String {
        format!("/{}", self.as_str())
    }

    pub fn default_user_name(&self) -> &'static str {
        match self {
            Role::Admin => "Admin User",
            Role::Employee => "Employee User",
            Role::Auditor => "Auditor User",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "admin" => Ok(Role::Admin),
            "employee" => Ok(Role::Employee),
            "auditor" => Ok(Role::Auditor),
            other => Err(format!("unknown role: {}", other)),
        }
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupRequest {
    pub email: String,
    pub username: String,
    pub password: String,
    pub role: Role,
}

/// User object returned by the auth endpoints. Fields the UI does not read
/// are kept in `extra` so the stored copy matches what the server sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl AuthUser {
    pub fn display_name(&self) -> String {
        if let Some(name) = self.username.as_deref().filter(|n| !n.trim().is_empty()) {
            return name.to_string();
        }
        if let Some(local) = self
            .email
            .as_deref()
            .and_then(|e| e.split('@').next())
            .filter(|l| !l.is_empty())
        {
            return local.to_string();
        }
        self.role.default_user_name().to_string()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthPayload {
    pub user: AuthUser,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightKind {
    Anomaly,
    Warning,
    #[default]
    Recommendation,
    #[serde(other)]
    Other,
}

impl InsightKind {
    pub fn badge_class(&self) -> &'static str {
        match self {
            InsightKind::Anomaly => "badge red",
            InsightKind::Warning => "badge yellow",
            InsightKind::Recommendation => "badge green",
            InsightKind::Other => "badge blue",
        }
    }

    pub fn badge_text(&self) -> &'static str {
        match self {
            InsightKind::Anomaly => "Anomaly Detected",
            InsightKind::Warning => "Requires Action",
            InsightKind::Recommendation | InsightKind::Other => "Recommendation",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Insight {
    #[serde(rename = "type")]
    pub kind: InsightKind,
    pub title: String,
    pub description: String,
    pub details: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AdminInsightsPayload {
    pub insights: Option<Vec<Insight>>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryAmount {
    pub category: String,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Opportunity {
    pub title: String,
    pub description: String,
    pub category: String,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TopMetrics {
    pub total_expenses: f64,
    pub compliance_rate: f64,
    pub risk_score: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AuditInsightData {
    pub insights: Vec<Insight>,
    pub spending_by_category: Vec<CategoryAmount>,
    pub detected_opportunities: Vec<Opportunity>,
    pub top_metrics: TopMetrics,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AuditorInsightsPayload {
    pub data: Option<AuditInsightData>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Severity {
    High,
    Medium,
    #[default]
    Low,
}

impl Severity {
    pub fn label(&self) -> &'static str {
        match self {
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            Severity::High => "badge red",
            Severity::Medium => "badge yellow",
            Severity::Low => "badge blue",
        }
    }
}

impl<'de> Deserialize<'de> for Severity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(match raw.to_ascii_lowercase().as_str() {
            "high" => Severity::High,
            "medium" => Severity::Medium,
            _ => Severity::Low,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FlaggedTransaction {
    #[serde(deserialize_with = "de::string_or_number")]
    pub id: String,
    pub date: String,
    pub user: String,
    pub vendor: String,
    #[serde(deserialize_with = "de::lenient_amount")]
    pub amount: f64,
    pub reason: String,
    pub severity: Severity,
    pub confidence: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AnomaliesPayload {
    pub anomalies: Vec<FlaggedTransaction>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MonthCount {
    pub month: String,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReasonShare {
    pub name: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AnomalyStats {
    pub total_flagged: u32,
    pub pending_review: u32,
    pub approved_after_review: u32,
    pub ai_accuracy: f64,
    pub trend: Vec<MonthCount>,
    pub reasons: Vec<ReasonShare>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AnomalyStatsPayload {
    pub stats: AnomalyStats,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightSeverity {
    #[default]
    Info,
    Alert,
    Success,
    Warning,
    Unknown,
}

impl FromStr for InsightSeverity {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "info" => InsightSeverity::Info,
            "alert" => InsightSeverity::Alert,
            "success" => InsightSeverity::Success,
            "warning" => InsightSeverity::Warning,
            _ => InsightSeverity::Unknown,
        })
    }
}

impl<'de> Deserialize<'de> for InsightSeverity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(raw.parse().unwrap_or_default())
    }
}

impl InsightSeverity {
    pub fn icon(&self) -> &'static str {
        match self {
            InsightSeverity::Info | InsightSeverity::Unknown => "fa-circle-info",
            InsightSeverity::Alert => "fa-triangle-exclamation",
            InsightSeverity::Success => "fa-check",
            InsightSeverity::Warning => "fa-bolt",
        }
    }

    pub fn border_class(&self) -> &'static str {
        match self {
            InsightSeverity::Info | InsightSeverity::Unknown => "border-status-info-border",
            InsightSeverity::Alert => "border-status-error-border",
            InsightSeverity::Success => "border-status-success-border",
            InsightSeverity::Warning => "border-status-warning-border",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportInsight {
    #[serde(deserialize_with = "de::string_or_number")]
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub severity: InsightSeverity,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MonthAmount {
    pub month: String,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReportsData {
    pub total_expenses: f64,
    pub compliance_rate: f64,
    pub average_per_transaction: f64,
    pub flagged_items: u32,
    pub expense_trend_data: Vec<MonthAmount>,
    pub category_spending_data: Vec<CategoryAmount>,
    pub ai_insights: Vec<ReportInsight>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum UserStatus {
    #[default]
    Active,
    Inactive,
    Pending,
    #[serde(other)]
    Unknown,
}

impl UserStatus {
    pub fn label(&self) -> &'static str {
        match self {
            UserStatus::Active => "Active",
            UserStatus::Inactive => "Inactive",
            UserStatus::Pending => "Pending",
            UserStatus::Unknown => "Unknown",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            UserStatus::Active => "badge green",
            UserStatus::Inactive => "badge red",
            UserStatus::Pending | UserStatus::Unknown => "badge yellow",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ManagedUser {
    #[serde(deserialize_with = "de::string_or_number")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub department: String,
    pub role: String,
    pub status: UserStatus,
    #[serde(deserialize_with = "de::lenient_date")]
    pub joined_date: Option<NaiveDate>,
}

/// Permission bullet lists keyed by role group.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RolePermissions {
    pub admin: Vec<String>,
    pub user: Vec<String>,
    pub auditor: Vec<String>,
}

impl RolePermissions {
    pub fn is_empty(&self) -> bool {
        self.admin.is_empty() && self.user.is_empty() && self.auditor.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserDirectory {
    pub admin_users_count: u32,
    pub staff_employees_count: u32,
    pub auditors_count: u32,
    pub users: Vec<ManagedUser>,
    pub role_permissions: RolePermissions,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewUserRequest {
    pub name: String,
    pub email: String,
    pub department: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProfileSettings {
    pub display_name: String,
    pub email: String,
}

impl Default for ProfileSettings {
    fn default() -> Self {
        Self {
            display_name: "Employee User".into(),
            email: "employee@example.com".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AiSettings {
    pub enabled: bool,
    pub response_tone: String,
    pub accuracy_threshold: u8,
}

impl Default for AiSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            response_tone: "professional".into(),
            accuracy_threshold: 85,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NotificationSettings {
    pub email: bool,
    pub push: bool,
    pub expense_alerts: bool,
    pub weekly_reports: bool,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            email: true,
            push: true,
            expense_alerts: true,
            weekly_reports: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreferenceSettings {
    pub theme: String,
}

impl Default for PreferenceSettings {
    fn default() -> Self {
        Self {
            theme: "dark".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EmployeeSettings {
    pub profile: ProfileSettings,
    pub ai: AiSettings,
    pub notifications: NotificationSettings,
    pub preferences: PreferenceSettings,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SettingsPayload {
    pub settings: Option<EmployeeSettings>,
}

/// Payload-free success (`{ "success": true }`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Ack {}

mod de {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    pub fn string_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::String(s) => s,
            Value::Number(n) => n.to_string(),
            _ => String::new(),
        })
    }

    /// Accepts `450`, `450.5`, or display strings such as `"$8,900"`.
    pub fn lenient_amount<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::Number(n) => n.as_f64().unwrap_or_default(),
            Value::String(s) => {
                let cleaned: String = s
                    .chars()
                    .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
                    .collect();
                cleaned.parse().unwrap_or_default()
            }
            _ => 0.0,
        })
    }

    /// `"2025-11-03"` or any ISO timestamp starting with a date.
    pub fn lenient_date<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveDate>, D::Error> {
        let raw = Option::<String>::deserialize(deserializer).unwrap_or(None);
        Ok(raw.and_then(|s| {
            s.get(..10)
                .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn insight_severity_decodes_any_case_and_keeps_unknown_values() {
        let decoded: Vec<InsightSeverity> =
            serde_json::from_value(json!(["alert", "WARNING", "Success", " info ", "critical"]))
                .unwrap();
        assert_eq!(
            decoded,
            vec![
                InsightSeverity::Alert,
                InsightSeverity::Warning,
                InsightSeverity::Success,
                InsightSeverity::Info,
                InsightSeverity::Unknown,
            ]
        );
        assert_eq!(serde_json::to_value(InsightSeverity::Alert).unwrap(), json!("alert"));
        let insight: ReportInsight = serde_json::from_value(json!({
            "id": 3, "type": "fraud", "severity": "alert", "message": "Duplicate claim"
        }))
        .unwrap();
        assert_eq!(insight.severity, InsightSeverity::Alert);
        assert_eq!(insight.severity.icon(), "fa-triangle-exclamation");
    }

    #[test]
    fn api_error_constructors_set_codes() {
        assert_eq!(ApiError::validation("bad").code, "VALIDATION_ERROR");
        assert_eq!(ApiError::unknown("x").code, "UNKNOWN");
        assert!(ApiError::request_failed("net").is_network());
        assert_eq!(ApiError::server("nope").code, "SERVER_ERROR");
        assert_eq!(ApiError::decode("shape").code, "DECODE_ERROR");
    }

    #[test]
    fn api_error_display_and_string_conversion_match_error_text() {
        let error = ApiError::unknown("boom");
        assert_eq!(format!("{}", error), "boom");
        let raw: String = ApiError::validation("bad input").into();
        assert_eq!(raw, "bad input");
    }

    #[test]
    fn role_parses_case_insensitively() {
        assert_eq!("Admin".parse::<Role>(), Ok(Role::Admin));
        assert_eq!(" employee ".parse::<Role>(), Ok(Role::Employee));
        assert_eq!("AUDITOR".parse::<Role>(), Ok(Role::Auditor));
        assert!("manager".parse::<Role>().is_err());
        assert_eq!(Role::Auditor.home_path(), "/auditor");
    }

    #[test]
    fn role_serializes_lowercase() {
        assert_eq!(serde_json::to_value(Role::Employee).unwrap(), json!("employee"));
        let role: Role = serde_json::from_value(json!("Auditor")).unwrap();
        assert_eq!(role, Role::Auditor);
    }

    #[test]
    fn auth_user_keeps_unknown_fields() {
        let raw = json!({ "role": "employee", "id": 7, "username": "sam", "created_at": "2025-11-01" });
        let user: AuthUser = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(user.role, Role::Employee);
        assert_eq!(user.display_name(), "sam");
        assert_eq!(serde_json::to_value(&user).unwrap(), raw);
    }

    #[test]
    fn auth_user_display_name_falls_back() {
        let by_email: AuthUser =
            serde_json::from_value(json!({ "role": "admin", "email": "dana@corp.io" })).unwrap();
        assert_eq!(by_email.display_name(), "dana");
        let bare: AuthUser = serde_json::from_value(json!({ "role": "auditor" })).unwrap();
        assert_eq!(bare.display_name(), "Auditor User");
    }

    #[test]
    fn flagged_transaction_accepts_display_amounts_and_numeric_ids() {
        let tx: FlaggedTransaction = serde_json::from_value(json!({
            "id": 1,
            "vendor": "Global Airlines",
            "amount": "$8,900",
            "severity": "HIGH",
            "confidence": 87
        }))
        .unwrap();
        assert_eq!(tx.id, "1");
        assert_eq!(tx.amount, 8900.0);
        assert_eq!(tx.severity, Severity::High);
        assert!(tx.user.is_empty());
    }

    #[test]
    fn managed_user_parses_timestamp_dates() {
        let user: ManagedUser = serde_json::from_value(json!({
            "id": "u1",
            "name": "Mike Chen",
            "status": "Pending",
            "joinedDate": "2024-03-15T10:00:00Z"
        }))
        .unwrap();
        assert_eq!(user.joined_date, NaiveDate::from_ymd_opt(2024, 3, 15));
        assert_eq!(user.status, UserStatus::Pending);
    }

    #[test]
    fn insight_kind_tolerates_unknown_values() {
        let insight: Insight =
            serde_json::from_value(json!({ "type": "trend", "title": "t" })).unwrap();
        assert_eq!(insight.kind, InsightKind::Other);
        assert!(insight.description.is_empty());
    }

    #[test]
    fn settings_default_fill_missing_sections() {
        let settings: EmployeeSettings =
            serde_json::from_value(json!({ "profile": { "displayName": "Jo" } })).unwrap();
        assert_eq!(settings.profile.display_name, "Jo");
        assert_eq!(settings.profile.email, "employee@example.com");
        assert_eq!(settings.ai.accuracy_threshold, 85);
        assert_eq!(settings.preferences.theme, "dark");
    }
}
