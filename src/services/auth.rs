// src/services/auth.rs

use bcrypt::{hash, verify};
use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::UserRepository,
    models::auth::{Actor, AuthResponse, Claims, UpsertUserPayload, User},
};

#[derive(Clone)]
pub struct AuthService {
    user_repo: UserRepository,
    jwt_secret: String,
}

impl AuthService {
    pub fn new(user_repo: UserRepository, jwt_secret: String) -> Self {
        Self { user_repo, jwt_secret }
    }

    // Login único: o identificador pode ser o username OU o NIK
    pub async fn login(&self, identifier: &str, password: &str) -> Result<AuthResponse, AppError> {
        let user = self
            .user_repo
            .find_by_identifier(identifier)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        let password_hash = user
            .password_hash
            .clone()
            .ok_or(AppError::InvalidCredentials)?;

        let password_clone = password.to_owned();

        // Executa a verificação em um thread separado (bcrypt é pesado)
        let is_password_valid =
            tokio::task::spawn_blocking(move || verify(&password_clone, &password_hash))
                .await
                .map_err(|e| anyhow::anyhow!("Falha na task de verificação de senha: {}", e))??;

        if !is_password_valid {
            return Err(AppError::InvalidCredentials);
        }

        let token = self.create_token(user.id)?;
        let actor = Self::actor_for(user)?;

        Ok(AuthResponse { token, actor })
    }

    // Monta a "sessão" tipada. Operador/Kepala BP sem batangan é inutilizável.
    fn actor_for(user: User) -> Result<Actor, AppError> {
        if user.role.is_operator_class() {
            let plates = user.plates();
            if plates.is_empty() {
                return Err(AppError::MissingAssignedVehicle);
            }
            Ok(Actor::Operator { user, plates })
        } else {
            Ok(Actor::Admin { user })
        }
    }

    pub async fn validate_token(&self, token: &str) -> Result<Actor, AppError> {
        let validation = Validation::default();
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.jwt_secret.as_ref()),
            &validation,
        )
        .map_err(|_| AppError::InvalidToken)?;

        let user = self
            .user_repo
            .find_by_id(token_data.claims.sub)
            .await?
            .ok_or(AppError::UserNotFound)?;

        Self::actor_for(user)
    }

    fn create_token(&self, user_id: Uuid) -> Result<String, AppError> {
        let now = Utc::now();
        let expires_at = now + chrono::Duration::days(7);

        let claims = Claims {
            sub: user_id,
            exp: expires_at.timestamp() as usize,
            iat: now.timestamp() as usize,
        };

        Ok(encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_ref()),
        )?)
    }

    // --- Gestão de usuários (somente admins; nunca auto-cadastro) ---

    pub async fn list_users(&self, location: Option<&str>) -> Result<Vec<User>, AppError> {
        self.user_repo.list(location).await
    }

    pub async fn create_user(&self, payload: UpsertUserPayload) -> Result<User, AppError> {
        let password_hash = Self::hash_password(payload.password.clone()).await?;
        self.user_repo
            .create(
                &payload.name,
                payload.role,
                payload.nik.as_deref(),
                payload.batangan.as_deref(),
                payload.location.as_deref(),
                payload.username.as_deref(),
                password_hash.as_deref(),
            )
            .await
    }

    pub async fn update_user(&self, id: Uuid, payload: UpsertUserPayload) -> Result<User, AppError> {
        let password_hash = Self::hash_password(payload.password.clone()).await?;
        self.user_repo
            .update(
                id,
                &payload.name,
                payload.role,
                payload.nik.as_deref(),
                payload.batangan.as_deref(),
                payload.location.as_deref(),
                payload.username.as_deref(),
                password_hash.as_deref(),
            )
            .await
    }

    pub async fn delete_user(&self, id: Uuid) -> Result<(), AppError> {
        self.user_repo.delete(id).await
    }

    async fn hash_password(password: Option<String>) -> Result<Option<String>, AppError> {
        let Some(password) = password else {
            return Ok(None);
        };
        let hashed = tokio::task::spawn_blocking(move || hash(&password, bcrypt::DEFAULT_COST))
            .await
            .map_err(|e| anyhow::anyhow!("Falha na task de hashing: {}", e))??;
        Ok(Some(hashed))
    }
}
