//! Roadmap models: domains, ordered steps, and per-step quiz questions.

use serde::{Deserialize, Serialize};

/// A quiz question attached to a roadmap step. The correct answer is known
/// only server-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    #[serde(rename = "q")]
    pub text: String,
    pub options: Vec<String>,
}

/// One ordered unit of a roadmap with learning content and an attached quiz.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoadmapStep {
    pub order: u32,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub videos: Vec<String>,
    #[serde(default)]
    pub questions: Vec<Question>,
}

/// Response for GET /roadmaps.
#[derive(Debug, Clone, Deserialize)]
pub struct DomainsResponse {
    pub domains: Vec<String>,
}

/// Response for GET /roadmaps/{domain}.
#[derive(Debug, Clone, Deserialize)]
pub struct RoadmapResponse {
    #[serde(default)]
    pub steps: Vec<RoadmapStep>,
}
