//! Auth screen: register and login.
//!
//! Registration validates the phone format and the qualification allow-list
//! client-side; the backend re-checks everything it cares about.

use crate::api::ApiClient;
use crate::errors::ClientError;
use crate::models::{
    is_valid_phone, is_valid_qualification, LoginRequest, RegisterRequest, User,
};
use crate::session::SessionProvider;

/// Minimum accepted password length.
const MIN_PASSWORD_LEN: usize = 6;

/// Registration form values as entered by the user.
#[derive(Debug, Clone, Default)]
pub struct RegisterForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub qualification: String,
    pub password: String,
}

impl RegisterForm {
    /// Validate the form. No request may be issued while this fails.
    fn validate(&self) -> Result<(), ClientError> {
        if self.first_name.trim().is_empty() || self.last_name.trim().is_empty() {
            return Err(ClientError::Validation("Name is required".to_string()));
        }
        if self.email.trim().is_empty() {
            return Err(ClientError::Validation("Email is required".to_string()));
        }
        if !is_valid_phone(&self.phone) {
            return Err(ClientError::Validation(
                "Enter valid 10-digit phone".to_string(),
            ));
        }
        if !is_valid_qualification(&self.qualification) {
            return Err(ClientError::Validation(
                "Only IT-related qualifications allowed".to_string(),
            ));
        }
        if self.password.len() < MIN_PASSWORD_LEN {
            return Err(ClientError::Validation(format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LEN
            )));
        }
        Ok(())
    }
}

/// Create an account and store the returned user in the session.
pub async fn register(
    api: &ApiClient,
    session: &dyn SessionProvider,
    form: &RegisterForm,
) -> Result<User, ClientError> {
    form.validate()?;

    let request = RegisterRequest {
        first_name: form.first_name.clone(),
        last_name: form.last_name.clone(),
        email: form.email.clone(),
        phone: form.phone.clone(),
        qualification: form.qualification.clone(),
        password: form.password.clone(),
    };

    let response = api.register(&request).await?;
    session.set_user(&response.user)?;
    tracing::info!("Registered as {}", response.user.email);
    Ok(response.user)
}

/// Authenticate and store the returned user in the session.
pub async fn login(
    api: &ApiClient,
    session: &dyn SessionProvider,
    email: &str,
    password: &str,
) -> Result<User, ClientError> {
    if email.trim().is_empty() || password.is_empty() {
        return Err(ClientError::Validation(
            "Email and password are required".to_string(),
        ));
    }

    let request = LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    };

    let response = api.login(&request).await?;
    session.set_user(&response.user)?;
    tracing::info!("Logged in as {}", response.user.email);
    Ok(response.user)
}

/// Clear the session.
pub fn logout(session: &dyn SessionProvider) -> Result<(), ClientError> {
    session.clear()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> RegisterForm {
        RegisterForm {
            first_name: "Asha".to_string(),
            last_name: "Verma".to_string(),
            email: "asha@example.com".to_string(),
            phone: "9876543210".to_string(),
            qualification: "MCA".to_string(),
            password: "secret1".to_string(),
        }
    }

    #[test]
    fn test_valid_form_passes() {
        assert!(valid_form().validate().is_ok());
    }

    #[test]
    fn test_short_phone_rejected() {
        let mut form = valid_form();
        form.phone = "12345".to_string();
        assert!(matches!(
            form.validate(),
            Err(ClientError::Validation(_))
        ));
    }

    #[test]
    fn test_unknown_qualification_rejected() {
        let mut form = valid_form();
        form.qualification = "B.Com".to_string();
        assert!(matches!(
            form.validate(),
            Err(ClientError::Validation(_))
        ));
    }

    #[test]
    fn test_short_password_rejected() {
        let mut form = valid_form();
        form.password = "abc".to_string();
        assert!(matches!(
            form.validate(),
            Err(ClientError::Validation(_))
        ));
    }
}
