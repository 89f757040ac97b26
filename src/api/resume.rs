//! Resume endpoints.

use super::ApiClient;
use crate::errors::ClientError;
use crate::models::{ResumeResponse, ResumeUpsertRequest};

impl ApiClient {
    /// GET /resume/{user_id} - fetch the stored resume document.
    pub async fn get_resume(&self, user_id: i64) -> Result<ResumeResponse, ClientError> {
        self.get(&format!("/resume/{}", user_id)).await
    }

    /// POST /resume - replace the stored resume document wholesale.
    pub async fn save_resume(
        &self,
        request: &ResumeUpsertRequest,
    ) -> Result<ResumeResponse, ClientError> {
        self.post("/resume", request).await
    }
}
