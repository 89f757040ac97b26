//! Domains screen: the flat list of topic tracks.

use crate::api::ApiClient;
use crate::errors::ClientError;

/// The list of domain identifiers, fetched once on load.
#[derive(Debug, Clone)]
pub struct DomainsPage {
    pub domains: Vec<String>,
}

impl DomainsPage {
    pub async fn load(api: &ApiClient) -> Result<Self, ClientError> {
        let response = api.list_domains().await?;
        Ok(Self {
            domains: response.domains,
        })
    }
}
