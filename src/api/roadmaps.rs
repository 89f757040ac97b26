//! Roadmap endpoints.

use super::ApiClient;
use crate::errors::ClientError;
use crate::models::{DomainsResponse, RoadmapResponse};

impl ApiClient {
    /// GET /roadmaps - list the available domains.
    pub async fn list_domains(&self) -> Result<DomainsResponse, ClientError> {
        self.get("/roadmaps").await
    }

    /// GET /roadmaps/{domain} - fetch one domain's ordered steps.
    pub async fn get_roadmap(&self, domain: &str) -> Result<RoadmapResponse, ClientError> {
        self.get(&format!("/roadmaps/{}", domain)).await
    }
}
