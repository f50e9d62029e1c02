use crate::api::{ApiClient, ApiError, DashboardConfig, DashboardData};
use crate::pages::dashboard::utils::DashboardModule;
use std::rc::Rc;

#[derive(Clone)]
pub struct DashboardRepository {
    client: Rc<ApiClient>,
}

impl DashboardRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    pub async fn fetch_dashboard(&self) -> Result<DashboardData, ApiError> {
        self.client.get_dashboard().await
    }

    pub async fn set_module_visibility(
        &self,
        module: DashboardModule,
        visible: bool,
    ) -> Result<DashboardConfig, ApiError> {
        self.client
            .update_dashboard_config(&module.visibility_update(visible))
            .await
    }
}
