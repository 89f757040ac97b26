//! Assessment submission and dashboard models.

use serde::{Deserialize, Serialize};

/// Request body for submitting a step assessment. Unanswered slots serialize
/// as JSON null so every question keeps its index.
#[derive(Debug, Clone, Serialize)]
pub struct SubmitAssessmentRequest {
    pub user_id: i64,
    pub domain: String,
    pub step_order: u32,
    pub answers: Vec<Option<usize>>,
}

/// Score returned by the backend for one submission.
#[derive(Debug, Clone, Deserialize)]
pub struct AssessmentScore {
    pub score: u32,
    pub total: u32,
}

/// Response for POST /assessments/submit.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitAssessmentResponse {
    pub message: String,
    pub result: AssessmentScore,
}

/// A scored quiz submission as listed on the dashboard. Read-only.
#[derive(Debug, Clone, Deserialize)]
pub struct AssessmentRecord {
    pub id: i64,
    pub domain: String,
    pub step_order: u32,
    pub score: u32,
    pub total: u32,
    pub passed: bool,
}

/// Per-domain completion state, owned and computed by the backend.
#[derive(Debug, Clone, Deserialize)]
pub struct ProgressRecord {
    pub id: i64,
    pub domain: String,
    #[serde(default)]
    pub completed_steps: Vec<u32>,
}

/// Response for GET /dashboard/{user_id}.
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardData {
    #[serde(default)]
    pub assessments: Vec<AssessmentRecord>,
    #[serde(default)]
    pub progress: Vec<ProgressRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unanswered_slots_serialize_as_null() {
        let req = SubmitAssessmentRequest {
            user_id: 1,
            domain: "frontend".to_string(),
            step_order: 2,
            answers: vec![Some(0), None, Some(3)],
        };

        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value["answers"][0], 0);
        assert!(value["answers"][1].is_null());
        assert_eq!(value["answers"][2], 3);
    }
}
