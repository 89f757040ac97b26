//! Roadmap screen: ordered steps with an accordion and a per-step quiz.
//!
//! Exactly one step is open at a time. The answer slots are index-aligned
//! with the open step's questions; opening a step or completing a successful
//! submission resets them.

use crate::api::ApiClient;
use crate::errors::ClientError;
use crate::models::{RoadmapStep, SubmitAssessmentRequest, SubmitAssessmentResponse};
use crate::pages::require_user;
use crate::session::SessionProvider;

/// State for one domain's roadmap.
#[derive(Debug, Clone)]
pub struct RoadmapPage {
    pub domain: String,
    pub steps: Vec<RoadmapStep>,
    current_step: Option<u32>,
    answers: Vec<Option<usize>>,
}

impl RoadmapPage {
    /// Fetch a domain's steps. The first step opens by default.
    pub async fn load(api: &ApiClient, domain: &str) -> Result<Self, ClientError> {
        let response = api.get_roadmap(domain).await?;

        let mut page = Self {
            domain: domain.to_string(),
            steps: response.steps,
            current_step: None,
            answers: Vec::new(),
        };
        if let Some(first) = page.steps.first() {
            let order = first.order;
            page.open_step(order)?;
        }
        Ok(page)
    }

    /// The order of the currently open step, if any.
    pub fn current_step(&self) -> Option<u32> {
        self.current_step
    }

    /// The currently open step, if any.
    pub fn current(&self) -> Option<&RoadmapStep> {
        let order = self.current_step?;
        self.steps.iter().find(|s| s.order == order)
    }

    /// Answer slots for the open step, index-aligned with its questions.
    pub fn answers(&self) -> &[Option<usize>] {
        &self.answers
    }

    /// Open a step, closing whichever was open. Resets the answer slots.
    pub fn open_step(&mut self, order: u32) -> Result<(), ClientError> {
        let step = self
            .steps
            .iter()
            .find(|s| s.order == order)
            .ok_or_else(|| ClientError::Validation(format!("No step {} in roadmap", order)))?;

        self.answers = vec![None; step.questions.len()];
        self.current_step = Some(order);
        Ok(())
    }

    /// Record an answer for a question of the open step.
    pub fn select_answer(&mut self, question: usize, option: usize) -> Result<(), ClientError> {
        let step = self
            .current()
            .ok_or_else(|| ClientError::Validation("No step is open".to_string()))?;

        let q = step.questions.get(question).ok_or_else(|| {
            ClientError::Validation(format!("No question {} in this step", question))
        })?;
        if option >= q.options.len() {
            return Err(ClientError::Validation(format!(
                "Question {} has only {} options",
                question,
                q.options.len()
            )));
        }

        self.answers[question] = Some(option);
        Ok(())
    }

    /// Submit the open step's answers for scoring. Requires a logged-in user;
    /// nothing is sent otherwise. The answer slots reset on success.
    pub async fn submit(
        &mut self,
        api: &ApiClient,
        session: &dyn SessionProvider,
    ) -> Result<SubmitAssessmentResponse, ClientError> {
        let user = require_user(session)?;
        let step_order = self
            .current_step
            .ok_or_else(|| ClientError::Validation("No step is open".to_string()))?;

        let request = SubmitAssessmentRequest {
            user_id: user.id,
            domain: self.domain.clone(),
            step_order,
            answers: self.answers.clone(),
        };

        let response = api.submit_assessment(&request).await?;
        self.answers = vec![None; self.answers.len()];
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Question;

    fn step(order: u32, questions: usize) -> RoadmapStep {
        RoadmapStep {
            order,
            title: format!("Step {}", order),
            description: String::new(),
            videos: Vec::new(),
            questions: (0..questions)
                .map(|i| Question {
                    text: format!("Q{}", i),
                    options: vec!["a".to_string(), "b".to_string(), "c".to_string()],
                })
                .collect(),
        }
    }

    fn page_with_steps(steps: Vec<RoadmapStep>) -> RoadmapPage {
        let mut page = RoadmapPage {
            domain: "frontend".to_string(),
            steps,
            current_step: None,
            answers: Vec::new(),
        };
        if let Some(first) = page.steps.first() {
            let order = first.order;
            page.open_step(order).unwrap();
        }
        page
    }

    #[test]
    fn test_first_step_opens_by_default() {
        let page = page_with_steps(vec![step(1, 2), step(2, 1)]);
        assert_eq!(page.current_step(), Some(1));
        assert_eq!(page.answers().len(), 2);
    }

    #[test]
    fn test_exactly_one_step_open() {
        let mut page = page_with_steps(vec![step(1, 2), step(2, 1), step(3, 0)]);

        page.open_step(2).unwrap();
        assert_eq!(page.current_step(), Some(2));
        let open_count = page
            .steps
            .iter()
            .filter(|s| page.current_step() == Some(s.order))
            .count();
        assert_eq!(open_count, 1);
    }

    #[test]
    fn test_opening_step_resets_answers() {
        let mut page = page_with_steps(vec![step(1, 2), step(2, 1)]);

        page.select_answer(0, 1).unwrap();
        page.select_answer(1, 2).unwrap();
        assert_eq!(page.answers(), &[Some(1), Some(2)]);

        page.open_step(2).unwrap();
        assert_eq!(page.answers(), &[None]);
    }

    #[test]
    fn test_unknown_step_rejected() {
        let mut page = page_with_steps(vec![step(1, 0)]);
        assert!(page.open_step(9).is_err());
        // The open step is unchanged
        assert_eq!(page.current_step(), Some(1));
    }

    #[test]
    fn test_out_of_range_answers_rejected() {
        let mut page = page_with_steps(vec![step(1, 1)]);
        assert!(page.select_answer(5, 0).is_err());
        assert!(page.select_answer(0, 9).is_err());
        assert_eq!(page.answers(), &[None]);
    }

    #[test]
    fn test_empty_roadmap_has_no_open_step() {
        let page = page_with_steps(Vec::new());
        assert_eq!(page.current_step(), None);
        assert!(page.current().is_none());
        assert!(page.answers().is_empty());
    }
}
