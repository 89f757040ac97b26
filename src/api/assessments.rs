//! Assessment endpoints.

use super::ApiClient;
use crate::errors::ClientError;
use crate::models::{SubmitAssessmentRequest, SubmitAssessmentResponse};

impl ApiClient {
    /// POST /assessments/submit - submit one step's quiz answers for scoring.
    pub async fn submit_assessment(
        &self,
        request: &SubmitAssessmentRequest,
    ) -> Result<SubmitAssessmentResponse, ClientError> {
        self.post("/assessments/submit", request).await
    }
}
