//! Resume document models.
//!
//! The resume is replaced wholesale on each save; there are no partial-update
//! semantics.

use serde::{Deserialize, Serialize};

/// One education entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EducationEntry {
    pub degree: String,
    pub institution: String,
    pub year: String,
}

/// One work-experience entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExperienceEntry {
    pub role: String,
    pub company: String,
    pub duration: String,
    #[serde(default)]
    pub details: String,
}

/// One project entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProjectEntry {
    pub name: String,
    pub tech: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub details: String,
}

/// Contact block shown at the top of the rendered resume.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactInfo {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub linkedin: String,
    #[serde(default)]
    pub github: String,
}

/// The full resume document.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Resume {
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub education: Vec<EducationEntry>,
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default)]
    pub projects: Vec<ProjectEntry>,
    #[serde(default)]
    pub contact: ContactInfo,
}

/// Request body for POST /resume: the full document plus the owning user id.
#[derive(Debug, Clone, Serialize)]
pub struct ResumeUpsertRequest {
    #[serde(flatten)]
    pub resume: Resume,
    pub user_id: i64,
}

/// Response envelope carrying a resume document.
#[derive(Debug, Clone, Deserialize)]
pub struct ResumeResponse {
    pub resume: Resume,
}
