// src/db/user_repo.rs

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::auth::{Role, User},
};

const USER_COLUMNS: &str =
    "id, name, role, nik, batangan, location, username, password_hash, created_at, updated_at";

// O repositório de usuários, responsável por todas as interações com a tabela 'users'
#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, AppError> {
        let maybe_user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(maybe_user)
    }

    // Busca pela chave de login: username OU nik no mesmo identificador
    pub async fn find_by_identifier(&self, identifier: &str) -> Result<Option<User>, AppError> {
        let maybe_user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE username = $1 OR nik = $1"
        ))
        .bind(identifier)
        .fetch_optional(&self.pool)
        .await?;
        Ok(maybe_user)
    }

    // Listagem administrativa, opcionalmente restrita a um local
    pub async fn list(&self, location: Option<&str>) -> Result<Vec<User>, AppError> {
        let users = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users \
             WHERE ($1::text IS NULL OR location = $1) \
             ORDER BY name"
        ))
        .bind(location)
        .fetch_all(&self.pool)
        .await?;
        Ok(users)
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        name: &str,
        role: Role,
        nik: Option<&str>,
        batangan: Option<&str>,
        location: Option<&str>,
        username: Option<&str>,
        password_hash: Option<&str>,
    ) -> Result<User, AppError> {
        let user = sqlx::query_as::<_, User>(&format!(
            "INSERT INTO users (name, role, nik, batangan, location, username, password_hash) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {USER_COLUMNS}"
        ))
        .bind(name)
        .bind(role)
        .bind(nik)
        .bind(batangan)
        .bind(location)
        .bind(username)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(map_user_unique_violation)?;

        Ok(user)
    }

    // Substituição integral do documento, exceto a senha: se nenhuma senha
    // nova for informada, o hash atual é preservado.
    #[allow(clippy::too_many_arguments)]
    pub async fn update(
        &self,
        id: Uuid,
        name: &str,
        role: Role,
        nik: Option<&str>,
        batangan: Option<&str>,
        location: Option<&str>,
        username: Option<&str>,
        password_hash: Option<&str>,
    ) -> Result<User, AppError> {
        let user = sqlx::query_as::<_, User>(&format!(
            "UPDATE users SET \
                name = $2, role = $3, nik = $4, batangan = $5, location = $6, \
                username = $7, password_hash = COALESCE($8, password_hash), \
                updated_at = now() \
             WHERE id = $1 \
             RETURNING {USER_COLUMNS}"
        ))
        .bind(id)
        .bind(name)
        .bind(role)
        .bind(nik)
        .bind(batangan)
        .bind(location)
        .bind(username)
        .bind(password_hash)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_user_unique_violation)?;

        user.ok_or(AppError::UserNotFound)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::UserNotFound);
        }
        Ok(())
    }
}

// Converte violações de unicidade nos erros amigáveis (padrão do create_user)
fn map_user_unique_violation(e: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(db_err) = &e {
        if db_err.is_unique_violation() {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    "idx_users_username" => AppError::UsernameAlreadyExists,
                    "idx_users_nik" => AppError::NikAlreadyExists,
                    _ => AppError::UniqueConstraintViolation(constraint.to_string()),
                };
            }
        }
    }
    e.into()
}
