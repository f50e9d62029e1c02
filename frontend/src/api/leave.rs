use super::{
    client::ApiClient,
    types::{ApiError, LeaveBalance, LeaveRequest},
};

fn settled_or_missing(err: ApiError) -> ApiError {
    // 400/409 are how the leave service reports a request that is no longer pending.
    match err.code.as_str() {
        "NOT_FOUND" | "CONFLICT" => ApiError {
            code: "NOT_FOUND".into(),
            ..err
        },
        "REQUEST_FAILED" if err.error.to_ascii_lowercase().contains("pending") => ApiError {
            code: "NOT_FOUND".into(),
            ..err
        },
        _ => err,
    }
}

impl ApiClient {
    pub async fn get_my_leaves(&self) -> Result<Vec<LeaveRequest>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send_request(|| Ok(self.http_client().get(format!("{}/leave/my", base_url))))
            .await?;
        self.map_json_response(response).await
    }

    pub async fn get_my_leave_balance(&self) -> Result<LeaveBalance, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send_request(|| {
                Ok(self
                    .http_client()
                    .get(format!("{}/leave/my/balance", base_url)))
            })
            .await?;
        self.map_json_response(response).await
    }

    pub async fn delete_my_leave(&self, id: &str) -> Result<(), ApiError> {
        if id.trim().is_empty() {
            return Err(ApiError::validation("Leave request id is required."));
        }
        let base_url = self.resolved_base_url().await;
        let response = self
            .send_request(|| {
                Ok(self
                    .http_client()
                    .delete(format!("{}/leave/my/{}", base_url, id)))
            })
            .await?;
        self.map_empty_response(response)
            .await
            .map_err(settled_or_missing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settled_or_missing_folds_conflicts_into_not_found() {
        let err = settled_or_missing(ApiError::from_response(409, None));
        assert!(err.is_not_found());

        let err = settled_or_missing(ApiError::from_response(
            400,
            Some(serde_json::json!({ "detail": "Only pending leave requests can be deleted" })),
        ));
        assert!(err.is_not_found());
        assert_eq!(err.error, "Only pending leave requests can be deleted");
    }

    #[test]
    fn settled_or_missing_keeps_generic_failures() {
        let err = settled_or_missing(ApiError::from_response(500, None));
        assert_eq!(err.code, "SERVER_ERROR");
        let err = settled_or_missing(ApiError::from_response(400, None));
        assert_eq!(err.code, "REQUEST_FAILED");
    }
}
