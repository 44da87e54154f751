//! Authentication and user management service

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    config::AuthConfig,
    error::{AppError, AppResult},
    models::user::{LoginRequest, RegisterRequest, Role, User, UserClaims},
    repository::Repository,
};

/// Role granted to every newly registered user
pub const DEFAULT_ROLE: Role = Role::Renter;

#[derive(Clone)]
pub struct AuthService {
    repository: Repository,
    config: AuthConfig,
}

impl AuthService {
    pub fn new(repository: Repository, config: AuthConfig) -> Self {
        Self { repository, config }
    }

    /// Register a new user and sign them in
    pub async fn register(&self, request: RegisterRequest) -> AppResult<(String, User)> {
        request.validate()?;

        let violations = self.config.password.violations(&request.password);
        if !violations.is_empty() {
            return Err(AppError::Validation(violations.join("; ")));
        }

        if self.repository.users.email_exists(&request.email).await? {
            return Err(AppError::Conflict("Email already registered".to_string()));
        }

        let password_hash = hash_password(&request.password)?;
        let user = self
            .repository
            .users
            .create(&request, &password_hash, &[DEFAULT_ROLE])
            .await?;

        tracing::info!("User {} registered", user.email);

        let token = self.create_token_for_user(&user)?;
        Ok((token, user))
    }

    /// Authenticate by email and password and return a JWT token
    pub async fn login(&self, request: LoginRequest) -> AppResult<(String, User)> {
        request.validate()?;

        let user = self
            .repository
            .users
            .get_by_email(&request.email)
            .await?
            .ok_or_else(|| AppError::Authentication("Invalid login attempt".to_string()))?;

        if !verify_password(&user.password_hash, &request.password)? {
            tracing::warn!("Invalid login attempt for {}", request.email);
            return Err(AppError::Authentication("Invalid login attempt".to_string()));
        }

        let token = self.create_token_for_user(&user)?;
        Ok((token, user))
    }

    /// Create JWT token for a user
    fn create_token_for_user(&self, user: &User) -> AppResult<String> {
        UserClaims::for_user(user, self.config.jwt_expiration_hours)
            .create_token(&self.config.jwt_secret)
            .map_err(|e| AppError::Internal(format!("Failed to create token: {}", e)))
    }

    /// Get user by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<User> {
        self.repository.users.get_by_id(id).await
    }

    /// List users
    pub async fn list_users(&self) -> AppResult<Vec<User>> {
        self.repository.users.list().await
    }

    /// Grant a role to a user
    pub async fn assign_role(&self, user_id: Uuid, role: Role) -> AppResult<User> {
        self.repository.users.get_by_id(user_id).await?;
        self.repository.users.add_role(user_id, role).await?;
        tracing::info!("Role {} assigned to user {}", role, user_id);
        self.repository.users.get_by_id(user_id).await
    }

    /// Revoke a role from a user
    pub async fn remove_role(&self, user_id: Uuid, role: Role) -> AppResult<User> {
        self.repository.users.remove_role(user_id, role).await?;
        tracing::info!("Role {} removed from user {}", role, user_id);
        self.repository.users.get_by_id(user_id).await
    }
}

/// Hash a password using Argon2
pub fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))?;
    Ok(hash.to_string())
}

/// Check a password against a stored Argon2 hash
pub fn verify_password(hash: &str, password: &str) -> AppResult<bool> {
    let parsed_hash =
        PasswordHash::new(hash).map_err(|_| AppError::Internal("Invalid password hash".to_string()))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hash = hash_password("Str0ng!pass").unwrap();
        assert_ne!(hash, "Str0ng!pass");
        assert!(verify_password(&hash, "Str0ng!pass").unwrap());
        assert!(!verify_password(&hash, "wrong").unwrap());
    }

    #[test]
    fn test_malformed_hash_is_internal_error() {
        assert!(matches!(
            verify_password("not-a-hash", "x"),
            Err(AppError::Internal(_))
        ));
    }
}
