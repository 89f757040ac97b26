//! Auth endpoints.

use super::ApiClient;
use crate::errors::ClientError;
use crate::models::{ChangePasswordRequest, LoginRequest, RegisterRequest, UserResponse};

impl ApiClient {
    /// POST /auth/register - create an account.
    pub async fn register(&self, request: &RegisterRequest) -> Result<UserResponse, ClientError> {
        self.post("/auth/register", request).await
    }

    /// POST /auth/login - authenticate with email and password.
    pub async fn login(&self, request: &LoginRequest) -> Result<UserResponse, ClientError> {
        self.post("/auth/login", request).await
    }

    /// POST /auth/change-password - swap the old password for a new one.
    pub async fn change_password(
        &self,
        request: &ChangePasswordRequest,
    ) -> Result<serde_json::Value, ClientError> {
        self.post("/auth/change-password", request).await
    }
}
