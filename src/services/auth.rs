//! Account registration and credential checks

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::user::{LoginForm, SessionUser, SignupForm, User},
    repository::Repository,
};

#[derive(Clone)]
pub struct AuthService {
    repository: Repository,
}

impl AuthService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Register a new account.
    ///
    /// Fails with `Validation` when the passwords differ or the form is
    /// malformed, and with `Conflict` when the username is taken.
    pub async fn register(&self, form: &SignupForm) -> AppResult<User> {
        if !form.passwords_match() {
            return Err(AppError::Validation("Passwords do not match!".to_string()));
        }
        form.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let password_hash = hash_password(&form.password)?;
        let user = self
            .repository
            .users
            .create(form.username.trim(), &password_hash)
            .await?;

        tracing::info!("Registered user {} (id {})", user.username, user.id);
        Ok(user)
    }

    /// Check credentials and return the identity to store in the session
    pub async fn authenticate(&self, form: &LoginForm) -> AppResult<SessionUser> {
        let invalid = || AppError::Authentication("Invalid username or password".to_string());

        let user = self
            .repository
            .users
            .get_by_username(form.username.trim())
            .await?
            .ok_or_else(invalid)?;

        if !verify_password(&user.password_hash, &form.password)? {
            tracing::info!("Rejected login for {}", user.username);
            return Err(invalid());
        }

        Ok(SessionUser::from(&user))
    }
}

/// Hash a password using Argon2 with a random salt
pub fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))?;
    Ok(hash.to_string())
}

/// Verify a password against a stored PHC hash string
pub fn verify_password(hash: &str, password: &str) -> AppResult<bool> {
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|_| AppError::Internal("Invalid password hash".to_string()))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hash = hash_password("correct horse").unwrap();
        assert!(hash.starts_with("$argon2"));
        assert!(verify_password(&hash, "correct horse").unwrap());
        assert!(!verify_password(&hash, "battery staple").unwrap());
    }

    #[test]
    fn test_hashes_are_salted() {
        let a = hash_password("secret").unwrap();
        let b = hash_password("secret").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_malformed_hash_is_internal_error() {
        assert!(matches!(
            verify_password("not-a-phc-string", "secret"),
            Err(AppError::Internal(_))
        ));
    }
}
