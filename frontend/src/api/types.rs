use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum LeaveStatus {
    #[serde(alias = "pending", alias = "PENDING")]
    Pending,
    #[serde(alias = "approved", alias = "APPROVED")]
    Approved,
    #[serde(alias = "rejected", alias = "REJECTED")]
    Rejected,
}

impl LeaveStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeaveStatus::Pending => "Pending",
            LeaveStatus::Approved => "Approved",
            LeaveStatus::Rejected => "Rejected",
        }
    }
}

impl std::fmt::Display for LeaveStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LeaveRequest {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
    #[serde(default)]
    pub reason: Option<String>,
    pub status: LeaveStatus,
    #[serde(
        default,
        alias = "createdAt",
        deserialize_with = "lenient_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<String>,
    #[serde(
        default,
        deserialize_with = "optional_string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub employee_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_name: Option<String>,
}

impl LeaveRequest {
    pub fn is_pending(&self) -> bool {
        self.status == LeaveStatus::Pending
    }

    pub fn reason_text(&self) -> &str {
        self.reason.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct LeaveBalance {
    pub total_leaves: u32,
    pub used_leaves: u32,
    pub remaining_leaves: u32,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DashboardConfig {
    #[serde(default = "default_true")]
    pub show_profile: bool,
    #[serde(default = "default_true")]
    pub show_attendance: bool,
    #[serde(default = "default_true")]
    pub show_leaves: bool,
    #[serde(default = "default_true")]
    pub show_payroll: bool,
    #[serde(default = "default_true")]
    pub show_learning: bool,
    #[serde(default = "default_true")]
    pub show_career: bool,
    #[serde(default = "default_true")]
    pub show_wellness: bool,
    #[serde(default = "default_true")]
    pub show_compliance: bool,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            show_profile: true,
            show_attendance: true,
            show_leaves: true,
            show_payroll: true,
            show_learning: true,
            show_career: true,
            show_wellness: true,
            show_compliance: true,
        }
    }
}

/// Partial update; only the flags that are `Some` are sent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DashboardConfigUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_profile: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_attendance: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_leaves: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_payroll: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_learning: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_career: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_wellness: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_compliance: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TeamMember {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardData {
    #[serde(default)]
    pub config: DashboardConfig,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub leave_requests: Vec<LeaveRequest>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub pending_leaves: Vec<LeaveRequest>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub team_members: Vec<TeamMember>,
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number identifier, got {}",
            other
        ))),
    }
}

fn optional_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

// Timestamps are kept raw; a malformed value must never fail the whole list.
fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

use leptos::*;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiError {
    pub error: String,
    #[serde(default)]
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error)
    }
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

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "NOT_FOUND")
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "UNAUTHORIZED")
    }

    pub fn is_not_found(&self) -> bool {
        self.code == "NOT_FOUND"
    }

    /// Builds an error from a non-success response body. Accepts the
    /// FastAPI `{"detail": ...}` shape as well as `{"error", "code"}`.
    pub fn from_response(status: u16, body: Option<Value>) -> Self {
        let code = match status {
            401 => "UNAUTHORIZED",
            403 => "FORBIDDEN",
            404 => "NOT_FOUND",
            409 => "CONFLICT",
            422 => "VALIDATION_ERROR",
            500..=599 => "SERVER_ERROR",
            _ => "REQUEST_FAILED",
        };
        let body = body.unwrap_or(Value::Null);
        if let Ok(mut structured) = serde_json::from_value::<ApiError>(body.clone()) {
            if structured.code.is_empty() {
                structured.code = code.to_string();
            }
            return structured;
        }
        let message = match body.get("detail") {
            Some(Value::String(detail)) => detail.clone(),
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(|item| item.get("msg").and_then(|m| m.as_str()))
                .collect::<Vec<_>>()
                .join("; "),
            _ => String::new(),
        };
        let message = if message.is_empty() {
            format!("Request failed with status {}", status)
        } else {
            message
        };
        let details = match body.get("detail") {
            Some(Value::Array(_)) => body.get("detail").cloned(),
            _ => None,
        };
        Self {
            error: message,
            code: code.to_string(),
            details,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn deserialize_leave_request_with_numeric_id_and_camel_case_timestamp() {
        let raw = r#"{
            "id": 42,
            "employee_id": 7,
            "department": "Engineering",
            "from_date": "2025-01-10",
            "to_date": "2025-01-12",
            "reason": "family",
            "status": "Pending",
            "createdAt": "2025-01-05T10:00:00Z"
        }"#;
        let leave: LeaveRequest = serde_json::from_str(raw).unwrap();
        assert_eq!(leave.id, "42");
        assert_eq!(leave.employee_id.as_deref(), Some("7"));
        assert_eq!(leave.status, LeaveStatus::Pending);
        assert!(leave.is_pending());
        assert_eq!(leave.created_at.as_deref(), Some("2025-01-05T10:00:00Z"));
    }

    #[wasm_bindgen_test]
    fn malformed_or_missing_created_at_does_not_fail_deserialization() {
        let missing: LeaveRequest = serde_json::from_value(serde_json::json!({
            "id": "a",
            "from_date": "2025-01-10",
            "to_date": "2025-01-10",
            "status": "approved"
        }))
        .unwrap();
        assert_eq!(missing.created_at, None);
        assert_eq!(missing.status, LeaveStatus::Approved);
        assert_eq!(missing.reason_text(), "");

        let odd: LeaveRequest = serde_json::from_value(serde_json::json!({
            "id": "b",
            "from_date": "2025-01-10",
            "to_date": "2025-01-10",
            "status": "Rejected",
            "created_at": {"nested": true}
        }))
        .unwrap();
        assert_eq!(odd.created_at, None);
    }

    #[wasm_bindgen_test]
    fn dashboard_config_defaults_to_everything_visible() {
        let data: DashboardData = serde_json::from_str(r#"{"config": {"show_payroll": false}}"#)
            .unwrap();
        assert!(!data.config.show_payroll);
        assert!(data.config.show_leaves);
        assert!(data.leave_requests.is_empty());
    }
}
