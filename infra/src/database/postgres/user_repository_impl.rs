//! PostgreSQL implementation of the UserRepository trait.
//!
//! Rows are mapped by hand so column errors surface as `DomainError::Database`
//! with the offending column named.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use shelf_core::domain::entities::user::User;
use shelf_core::errors::DomainError;
use shelf_core::repositories::UserRepository;

const USER_COLUMNS: &str = r#"
    id, lastname, firstname, email, phone, address,
    hashed_password, is_admin, created_at, updated_at
"#;

/// PostgreSQL implementation of UserRepository
#[derive(Clone)]
pub struct PgUserRepository {
    /// Database connection pool
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new PostgreSQL user repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Convert database row to User entity
    fn row_to_user(row: &PgRow) -> Result<User, DomainError> {
        Ok(User {
            id: row
                .try_get("id")
                .map_err(|e| DomainError::Database(format!("Failed to get id: {}", e)))?,
            lastname: row
                .try_get("lastname")
                .map_err(|e| DomainError::Database(format!("Failed to get lastname: {}", e)))?,
            firstname: row
                .try_get("firstname")
                .map_err(|e| DomainError::Database(format!("Failed to get firstname: {}", e)))?,
            email: row
                .try_get("email")
                .map_err(|e| DomainError::Database(format!("Failed to get email: {}", e)))?,
            phone: row
                .try_get("phone")
                .map_err(|e| DomainError::Database(format!("Failed to get phone: {}", e)))?,
            address: row
                .try_get("address")
                .map_err(|e| DomainError::Database(format!("Failed to get address: {}", e)))?,
            hashed_password: row.try_get("hashed_password").map_err(|e| {
                DomainError::Database(format!("Failed to get hashed_password: {}", e))
            })?,
            is_admin: row
                .try_get("is_admin")
                .map_err(|e| DomainError::Database(format!("Failed to get is_admin: {}", e)))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::Database(format!("Failed to get created_at: {}", e)))?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| DomainError::Database(format!("Failed to get updated_at: {}", e)))?,
        })
    }

    /// Map a write failure, turning the unique email constraint into `Conflict`
    fn write_error(action: &str, error: sqlx::Error) -> DomainError {
        let unique_violation = error
            .as_database_error()
            .map(|db| db.is_unique_violation())
            .unwrap_or(false);

        if unique_violation {
            DomainError::Conflict {
                message: "email already registered".to_string(),
            }
        } else {
            DomainError::Database(format!("Failed to {} user: {}", action, error))
        }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let query = format!("SELECT {} FROM users WHERE email = $1 LIMIT 1", USER_COLUMNS);

        let result = sqlx::query(&query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("Database query failed: {}", e)))?;

        result.as_ref().map(Self::row_to_user).transpose()
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError> {
        let query = format!("SELECT {} FROM users WHERE id = $1 LIMIT 1", USER_COLUMNS);

        let result = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("Database query failed: {}", e)))?;

        result.as_ref().map(Self::row_to_user).transpose()
    }

    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<User>, DomainError> {
        let query = format!(
            "SELECT {} FROM users ORDER BY id LIMIT $1 OFFSET $2",
            USER_COLUMNS
        );

        let rows = sqlx::query(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("Failed to list users: {}", e)))?;

        rows.iter().map(Self::row_to_user).collect()
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        let query = format!(
            r#"
            INSERT INTO users (
                lastname, firstname, email, phone, address,
                hashed_password, is_admin, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING {}
            "#,
            USER_COLUMNS
        );

        let row = sqlx::query(&query)
            .bind(&user.lastname)
            .bind(&user.firstname)
            .bind(user.email.to_lowercase())
            .bind(&user.phone)
            .bind(&user.address)
            .bind(&user.hashed_password)
            .bind(user.is_admin)
            .bind(user.created_at)
            .bind(user.updated_at)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| Self::write_error("create", e))?;

        Self::row_to_user(&row)
    }

    async fn update(&self, user: User) -> Result<User, DomainError> {
        let query = format!(
            r#"
            UPDATE users SET
                lastname = $1,
                firstname = $2,
                email = $3,
                phone = $4,
                address = $5,
                hashed_password = $6,
                is_admin = $7,
                updated_at = $8
            WHERE id = $9
            RETURNING {}
            "#,
            USER_COLUMNS
        );

        let row = sqlx::query(&query)
            .bind(&user.lastname)
            .bind(&user.firstname)
            .bind(user.email.to_lowercase())
            .bind(&user.phone)
            .bind(&user.address)
            .bind(&user.hashed_password)
            .bind(user.is_admin)
            .bind(user.updated_at)
            .bind(user.id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| Self::write_error("update", e))?;

        match row {
            Some(row) => Self::row_to_user(&row),
            None => Err(DomainError::not_found("user")),
        }
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("Failed to delete user: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }
}
