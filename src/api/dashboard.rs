//! Dashboard endpoint.

use super::ApiClient;
use crate::errors::ClientError;
use crate::models::DashboardData;

impl ApiClient {
    /// GET /dashboard/{user_id} - fetch assessments and progress for a user.
    pub async fn get_dashboard(&self, user_id: i64) -> Result<DashboardData, ClientError> {
        self.get(&format!("/dashboard/{}", user_id)).await
    }
}
