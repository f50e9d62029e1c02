use crate::api::{ApiClient, ApiError, LeaveBalance, LeaveRequest};
use std::rc::Rc;

#[derive(Clone)]
pub struct LeaveRepository {
    client: Rc<ApiClient>,
}

impl LeaveRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    pub async fn list_my_leaves(&self) -> Result<Vec<LeaveRequest>, ApiError> {
        self.client.get_my_leaves().await
    }

    pub async fn get_balance(&self) -> Result<LeaveBalance, ApiError> {
        self.client.get_my_leave_balance().await
    }

    pub async fn cancel_leave(&self, id: &str) -> Result<(), ApiError> {
        self.client.delete_my_leave(id).await
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::api::test_support::mock::*;
    use serde_json::json;

    #[tokio::test]
    async fn repository_forwards_to_leave_endpoints() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/leave/my");
            then.status(200).json_body(json!([{
                "id": 11,
                "from_date": "2025-04-01",
                "to_date": "2025-04-02",
                "reason": null,
                "status": "PENDING",
                "created_at": "2025-03-30T10:00:00Z"
            }]));
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/leave/my/balance");
            then.status(200).json_body(json!({
                "total_leaves": 12,
                "used_leaves": 2,
                "remaining_leaves": 10
            }));
        });
        server.mock(|when, then| {
            when.method(DELETE).path("/api/leave/my/11");
            then.status(200).json_body(json!({ "message": "deleted" }));
        });

        let repo = LeaveRepository::new(ApiClient::new_with_base_url(server.url("/api")));
        let leaves = repo.list_my_leaves().await.unwrap();
        assert_eq!(leaves[0].id, "11");
        assert!(leaves[0].is_pending());
        assert_eq!(leaves[0].reason_text(), "");
        assert_eq!(repo.get_balance().await.unwrap().remaining_leaves, 10);
        repo.cancel_leave("11").await.unwrap();
        assert_eq!(server.hits(DELETE, "/api/leave/my/11"), 1);
    }
}
