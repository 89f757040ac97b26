//! Resume screen: an in-memory document edited incrementally and replaced
//! wholesale on each save.

use std::path::Path;

use crate::api::ApiClient;
use crate::errors::ClientError;
use crate::models::{
    is_valid_phone, EducationEntry, ExperienceEntry, ProjectEntry, Resume, ResumeUpsertRequest,
};
use crate::pages::require_user;
use crate::render;
use crate::session::SessionProvider;

/// The resume document being edited, seeded from the backend or defaults.
#[derive(Debug, Clone)]
pub struct ResumePage {
    user_id: i64,
    pub resume: Resume,
}

impl ResumePage {
    /// Seed the document from the backend. Requires a logged-in user. A load
    /// failure of any kind falls back to the empty document.
    pub async fn load(
        api: &ApiClient,
        session: &dyn SessionProvider,
    ) -> Result<Self, ClientError> {
        let user = require_user(session)?;
        let resume = match api.get_resume(user.id).await {
            Ok(response) => response.resume,
            Err(e) => {
                tracing::debug!("No stored resume, starting empty: {}", e);
                Resume::default()
            }
        };
        Ok(Self {
            user_id: user.id,
            resume,
        })
    }

    pub fn set_summary(&mut self, summary: impl Into<String>) {
        self.resume.summary = summary.into();
    }

    pub fn add_skill(&mut self, skill: impl Into<String>) {
        self.resume.skills.push(skill.into());
    }

    pub fn remove_skill(&mut self, index: usize) -> Result<(), ClientError> {
        Self::remove_at(&mut self.resume.skills, index, "skill")
    }

    pub fn add_education(&mut self, entry: EducationEntry) {
        self.resume.education.push(entry);
    }

    pub fn remove_education(&mut self, index: usize) -> Result<(), ClientError> {
        Self::remove_at(&mut self.resume.education, index, "education entry")
    }

    pub fn add_experience(&mut self, entry: ExperienceEntry) {
        self.resume.experience.push(entry);
    }

    pub fn remove_experience(&mut self, index: usize) -> Result<(), ClientError> {
        Self::remove_at(&mut self.resume.experience, index, "experience entry")
    }

    pub fn add_project(&mut self, entry: ProjectEntry) {
        self.resume.projects.push(entry);
    }

    pub fn remove_project(&mut self, index: usize) -> Result<(), ClientError> {
        Self::remove_at(&mut self.resume.projects, index, "project")
    }

    fn remove_at<T>(list: &mut Vec<T>, index: usize, what: &str) -> Result<(), ClientError> {
        if index >= list.len() {
            return Err(ClientError::Validation(format!(
                "No {} at index {}",
                what, index
            )));
        }
        list.remove(index);
        Ok(())
    }

    /// Save the full document. The contact phone must be 10 digits; nothing
    /// is sent otherwise. The server's response replaces the local document.
    pub async fn save(&mut self, api: &ApiClient) -> Result<(), ClientError> {
        if !is_valid_phone(&self.resume.contact.phone) {
            return Err(ClientError::Validation(
                "Enter valid contact phone".to_string(),
            ));
        }

        let request = ResumeUpsertRequest {
            resume: self.resume.clone(),
            user_id: self.user_id,
        };
        let response = api.save_resume(&request).await?;
        self.resume = response.resume;
        Ok(())
    }

    /// Write the printable document to disk.
    pub fn export_html(&self, path: &Path) -> Result<(), ClientError> {
        render::write_html(&self.resume, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> ResumePage {
        ResumePage {
            user_id: 1,
            resume: Resume::default(),
        }
    }

    #[test]
    fn test_skill_add_remove() {
        let mut page = page();
        page.add_skill("Rust");
        page.add_skill("SQL");
        page.remove_skill(0).unwrap();
        assert_eq!(page.resume.skills, vec!["SQL".to_string()]);
    }

    #[test]
    fn test_remove_out_of_bounds_rejected() {
        let mut page = page();
        assert!(matches!(
            page.remove_skill(0),
            Err(ClientError::Validation(_))
        ));
        assert!(page.remove_education(3).is_err());
    }

    #[test]
    fn test_education_add_remove() {
        let mut page = page();
        page.add_education(EducationEntry {
            degree: "MCA".to_string(),
            institution: "IGNOU".to_string(),
            year: "2023".to_string(),
        });
        assert_eq!(page.resume.education.len(), 1);
        page.remove_education(0).unwrap();
        assert!(page.resume.education.is_empty());
    }
}
