#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::{LeaveRequest, LeaveStatus};
    use chrono::NaiveDate;

    pub fn leave_request(id: &str, status: LeaveStatus, created_at: Option<&str>) -> LeaveRequest {
        LeaveRequest {
            id: id.into(),
            from_date: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
            to_date: NaiveDate::from_ymd_opt(2025, 3, 12).unwrap(),
            reason: Some("Family trip".into()),
            status,
            created_at: created_at.map(str::to_string),
            employee_id: None,
            department: None,
            employee_name: None,
        }
    }
}
