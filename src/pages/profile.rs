//! Profile screen: personal info edits and password changes.

use crate::api::ApiClient;
use crate::errors::ClientError;
use crate::models::{ChangePasswordRequest, UpdateProfileRequest, User};
use crate::pages::require_user;
use crate::session::SessionProvider;

/// The full profile record, editable in place.
#[derive(Debug, Clone)]
pub struct ProfilePage {
    pub profile: User,
}

impl ProfilePage {
    /// Fetch the full profile. Requires a logged-in user.
    pub async fn load(
        api: &ApiClient,
        session: &dyn SessionProvider,
    ) -> Result<Self, ClientError> {
        let user = require_user(session)?;
        let response = api.get_profile(user.id).await?;
        Ok(Self {
            profile: response.user,
        })
    }

    /// Save the editable field set. The server's response replaces both the
    /// local record and the session slot.
    pub async fn save(
        &mut self,
        api: &ApiClient,
        session: &dyn SessionProvider,
    ) -> Result<(), ClientError> {
        let request = UpdateProfileRequest {
            first_name: self.profile.first_name.clone(),
            last_name: self.profile.last_name.clone(),
            phone: self.profile.phone.clone(),
            qualification: self.profile.qualification.clone(),
            avatar_url: self.profile.avatar_url.clone(),
        };

        let response = api.update_profile(self.profile.id, &request).await?;
        session.set_user(&response.user)?;
        self.profile = response.user;
        Ok(())
    }

    /// Change the password. Both values are opaque to this layer.
    pub async fn change_password(
        &self,
        api: &ApiClient,
        old_password: &str,
        new_password: &str,
    ) -> Result<(), ClientError> {
        let request = ChangePasswordRequest {
            user_id: self.profile.id,
            old_password: old_password.to_string(),
            new_password: new_password.to_string(),
        };
        api.change_password(&request).await?;
        Ok(())
    }
}
