use super::{
    client::ApiClient,
    types::{Ack, ApiError, NewUserRequest, UserDirectory},
};

impl ApiClient {
    pub async fn get_users(&self) -> Result<UserDirectory, ApiError> {
        self.get_json("/api/admin/users", "Failed to load users")
            .await
    }

    pub async fn create_user(&self, request: &NewUserRequest) -> Result<(), ApiError> {
        let _: Ack = self
            .post_json("/api/admin/users", request, "Failed to add user")
            .await?;
        Ok(())
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::{MockServer, GET, POST};
    use serde_json::json;

    #[tokio::test]
    async fn get_users_reads_flat_payload() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/admin/users");
            then.status(200).json_body(json!({
                "success": true,
                "adminUsersCount": 2,
                "users": [{ "id": 1, "name": "Sarah", "email": "s@x.io", "role": "Admin" }]
            }));
        });
        let client = ApiClient::new_with_base_url(server.base_url());
        let directory = client.get_users().await.unwrap();
        assert_eq!(directory.admin_users_count, 2);
        assert_eq!(directory.users[0].id, "1");
        assert!(directory.role_permissions.is_empty());
    }

    #[tokio::test]
    async fn create_user_reports_server_message() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/api/admin/users");
            then.status(400)
                .json_body(json!({ "success": false, "message": "Duplicate email" }));
        });
        let client = ApiClient::new_with_base_url(server.base_url());
        let err = client
            .create_user(&NewUserRequest {
                name: "N".into(),
                email: "n@x.io".into(),
                department: "General".into(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.error, "Duplicate email");
    }
}
