//! User model and authentication forms

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// User model from database
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct User {
    pub id: i32,
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: Option<DateTime<Utc>>,
}

/// Signup form posted by the registration page
#[derive(Debug, Deserialize, Validate)]
pub struct SignupForm {
    #[validate(length(min = 3, max = 255, message = "Username must be 3 to 255 characters"))]
    pub username: String,
    #[validate(length(min = 4, message = "Password must be at least 4 characters"))]
    pub password: String,
    pub confirm_password: String,
}

impl SignupForm {
    pub fn passwords_match(&self) -> bool {
        self.password == self.confirm_password
    }
}

/// Login form posted by the login page
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// Identity carried by an active session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub user_id: i32,
    pub username: String,
}

impl From<&User> for SessionUser {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.id,
            username: user.username.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(username: &str, password: &str, confirm: &str) -> SignupForm {
        SignupForm {
            username: username.to_string(),
            password: password.to_string(),
            confirm_password: confirm.to_string(),
        }
    }

    #[test]
    fn test_signup_validation() {
        assert!(form("alee", "secret", "secret").validate().is_ok());
        assert!(form("al", "secret", "secret").validate().is_err());
        assert!(form("alee", "abc", "abc").validate().is_err());
    }

    #[test]
    fn test_passwords_match() {
        assert!(form("alee", "secret", "secret").passwords_match());
        assert!(!form("alee", "secret", "Secret").passwords_match());
    }

    #[test]
    fn test_password_hash_not_serialized() {
        let user = User {
            id: 1,
            username: "alee".into(),
            password_hash: "$argon2id$...".into(),
            created_at: None,
        };
        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("password_hash").is_none());
        assert_eq!(SessionUser::from(&user).username, "alee");
    }
}
