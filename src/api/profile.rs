//! Profile endpoints.

use super::ApiClient;
use crate::errors::ClientError;
use crate::models::{UpdateProfileRequest, UserResponse};

impl ApiClient {
    /// GET /profile/{user_id} - fetch the full profile.
    pub async fn get_profile(&self, user_id: i64) -> Result<UserResponse, ClientError> {
        self.get(&format!("/profile/{}", user_id)).await
    }

    /// PUT /profile/{user_id} - update the editable profile fields.
    pub async fn update_profile(
        &self,
        user_id: i64,
        request: &UpdateProfileRequest,
    ) -> Result<UserResponse, ClientError> {
        self.put(&format!("/profile/{}", user_id), request).await
    }
}
