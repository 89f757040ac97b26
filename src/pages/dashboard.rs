//! Dashboard screen: assessments and progress, rendered verbatim.

use crate::api::ApiClient;
use crate::errors::ClientError;
use crate::models::DashboardData;
use crate::pages::require_user;
use crate::session::SessionProvider;

/// The combined dashboard payload for the logged-in user.
#[derive(Debug, Clone)]
pub struct DashboardPage {
    pub data: DashboardData,
}

impl DashboardPage {
    /// Fetch the dashboard. Requires a logged-in user.
    pub async fn load(
        api: &ApiClient,
        session: &dyn SessionProvider,
    ) -> Result<Self, ClientError> {
        let user = require_user(session)?;
        let data = api.get_dashboard(user.id).await?;
        Ok(Self { data })
    }
}
