//! User model and auth request/response types matching the backend contract.

use serde::{Deserialize, Serialize};

/// The fixed allow-list of qualifications accepted at registration.
pub const QUALIFICATIONS: [&str; 7] = [
    "B.Tech CSE",
    "B.Tech IT",
    "B.Sc IT",
    "BCA",
    "MCA",
    "M.Sc CS",
    "Diploma in CS/IT",
];

/// A registered platform user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub qualification: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

/// Request body for creating an account.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub qualification: String,
    /// Sent as plaintext; the backend hashes it. The wire name is fixed by
    /// the contract.
    #[serde(rename = "password_hash")]
    pub password: String,
}

/// Request body for logging in.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Request body for changing the password. Both values are opaque to this layer.
#[derive(Debug, Clone, Serialize)]
pub struct ChangePasswordRequest {
    pub user_id: i64,
    pub old_password: String,
    pub new_password: String,
}

/// Request body for updating the editable profile fields.
#[derive(Debug, Clone, Serialize)]
pub struct UpdateProfileRequest {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub qualification: String,
    pub avatar_url: Option<String>,
}

/// Response envelope carrying a user record.
#[derive(Debug, Clone, Deserialize)]
pub struct UserResponse {
    pub user: User,
}

/// Check that a phone number is exactly 10 ASCII digits.
pub fn is_valid_phone(phone: &str) -> bool {
    phone.len() == 10 && phone.bytes().all(|b| b.is_ascii_digit())
}

/// Check that a qualification is on the fixed allow-list.
pub fn is_valid_qualification(qualification: &str) -> bool {
    QUALIFICATIONS.contains(&qualification)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_phone() {
        assert!(is_valid_phone("9876543210"));
    }

    #[test]
    fn test_invalid_phones() {
        assert!(!is_valid_phone("123456789")); // 9 digits
        assert!(!is_valid_phone("12345678901")); // 11 digits
        assert!(!is_valid_phone("98765432ab"));
        assert!(!is_valid_phone("98765 4321"));
        assert!(!is_valid_phone(""));
    }

    #[test]
    fn test_qualification_allow_list() {
        assert!(is_valid_qualification("BCA"));
        assert!(is_valid_qualification("Diploma in CS/IT"));
        assert!(!is_valid_qualification("B.Com"));
        assert!(!is_valid_qualification("bca"));
        assert!(!is_valid_qualification(""));
    }

    #[test]
    fn test_register_request_wire_field_name() {
        let req = RegisterRequest {
            first_name: "Asha".to_string(),
            last_name: "Verma".to_string(),
            email: "asha@example.com".to_string(),
            phone: "9876543210".to_string(),
            qualification: "MCA".to_string(),
            password: "secret1".to_string(),
        };

        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value["password_hash"], "secret1");
        assert!(value.get("password").is_none());
    }
}
