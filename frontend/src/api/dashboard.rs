use super::{
    client::ApiClient,
    types::{ApiError, DashboardConfig, DashboardConfigUpdate, DashboardData},
};

impl ApiClient {
    pub async fn get_dashboard(&self) -> Result<DashboardData, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send_request(|| Ok(self.http_client().get(format!("{}/dashboard", base_url))))
            .await?;
        self.map_json_response(response).await
    }

    pub async fn update_dashboard_config(
        &self,
        update: &DashboardConfigUpdate,
    ) -> Result<DashboardConfig, ApiError> {
        if *update == DashboardConfigUpdate::default() {
            return Err(ApiError::validation("Nothing to update."));
        }
        let base_url = self.resolved_base_url().await;
        let response = self
            .send_request(|| {
                Ok(self
                    .http_client()
                    .post(format!("{}/dashboard/config", base_url))
                    .json(update))
            })
            .await?;
        self.map_json_response(response).await
    }
}
