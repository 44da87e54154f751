//! Users repository for database operations

use chrono::Utc;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::user::{RegisterRequest, Role, User},
};

use super::is_unique_violation;

#[derive(Clone)]
pub struct UsersRepository {
    pool: Pool<Postgres>,
}

impl UsersRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get user by ID, with roles
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<User> {
        let mut user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User with id {} not found", id)))?;

        user.roles = self.get_roles(id).await?;
        Ok(user)
    }

    /// Get user by email (the login name), with roles
    pub async fn get_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE LOWER(email) = LOWER($1)")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        match user {
            Some(mut user) => {
                user.roles = self.get_roles(user.id).await?;
                Ok(Some(user))
            }
            None => Ok(None),
        }
    }

    /// Check if email already exists
    pub async fn email_exists(&self, email: &str) -> AppResult<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE LOWER(email) = LOWER($1))")
                .bind(email)
                .fetch_one(&self.pool)
                .await?;
        Ok(exists)
    }

    /// List all users, with roles
    pub async fn list(&self) -> AppResult<Vec<User>> {
        let mut users = sqlx::query_as::<_, User>("SELECT * FROM users ORDER BY last_name, first_name")
            .fetch_all(&self.pool)
            .await?;

        for user in users.iter_mut() {
            user.roles = self.get_roles(user.id).await?;
        }

        Ok(users)
    }

    /// Create a user and grant the initial roles
    pub async fn create(
        &self,
        data: &RegisterRequest,
        password_hash: &str,
        roles: &[Role],
    ) -> AppResult<User> {
        let mut tx = self.pool.begin().await?;

        let mut user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (email, password_hash, first_name, last_name, address, city, country, date_registered)
            VALUES (LOWER($1), $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(&data.email)
        .bind(password_hash)
        .bind(&data.first_name)
        .bind(&data.last_name)
        .bind(&data.address)
        .bind(&data.city)
        .bind(&data.country)
        .bind(Utc::now())
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                AppError::Conflict("Email already registered".to_string())
            } else {
                AppError::Database(e)
            }
        })?;

        for role in roles {
            sqlx::query("INSERT INTO user_roles (user_id, role) VALUES ($1, $2) ON CONFLICT DO NOTHING")
                .bind(user.id)
                .bind(role)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;

        user.roles = roles.to_vec();
        Ok(user)
    }

    /// Roles granted to a user
    pub async fn get_roles(&self, user_id: Uuid) -> AppResult<Vec<Role>> {
        let roles = sqlx::query_scalar::<_, Role>(
            "SELECT role FROM user_roles WHERE user_id = $1 ORDER BY role",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(roles)
    }

    /// Grant a role (no-op when already granted)
    pub async fn add_role(&self, user_id: Uuid, role: Role) -> AppResult<()> {
        sqlx::query("INSERT INTO user_roles (user_id, role) VALUES ($1, $2) ON CONFLICT DO NOTHING")
            .bind(user_id)
            .bind(role)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Revoke a role
    pub async fn remove_role(&self, user_id: Uuid, role: Role) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM user_roles WHERE user_id = $1 AND role = $2")
            .bind(user_id)
            .bind(role)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("User {} does not have role {}", user_id, role)));
        }
        Ok(())
    }
}
