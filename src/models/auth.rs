// src/models/auth.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

// Papéis fechados do sistema (nada de dispatch por string espalhado pelas views)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "user_role", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    SuperAdmin,
    LocationAdmin,
    Operator,
    KepalaBp,
    Mekanik,
    Logistik,
}

impl Role {
    // Papéis que entram pela sessão administrativa
    pub fn is_admin_class(self) -> bool {
        matches!(
            self,
            Role::SuperAdmin | Role::LocationAdmin | Role::Mekanik | Role::Logistik
        )
    }

    // Papéis de campo: precisam de pelo menos uma placa atribuída (batangan)
    pub fn is_operator_class(self) -> bool {
        matches!(self, Role::Operator | Role::KepalaBp)
    }
}

// Representa um usuário vindo do banco de dados
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    #[schema(example = "Budi Santoso")]
    pub name: String,
    pub role: Role,
    // NIK: chave alternativa de login dos usuários de campo
    #[schema(example = "3201123456780001")]
    pub nik: Option<String>,
    // Placas atribuídas ao operador, separadas por vírgula
    #[schema(example = "BM 8712 QU, BM 9034 TD")]
    pub batangan: Option<String>,
    #[schema(example = "BP Pekanbaru")]
    pub location: Option<String>,
    pub username: Option<String>,

    #[serde(skip_serializing)]
    #[schema(ignore)]
    pub password_hash: Option<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    // Quebra o campo `batangan` em placas individuais
    pub fn plates(&self) -> Vec<String> {
        self.batangan
            .as_deref()
            .unwrap_or("")
            .split(',')
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty())
            .collect()
    }
}

// União tipada das duas "sessões" (administrativa e de campo).
// Substitui os dois blobs paralelos de session storage do front.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Actor {
    #[serde(rename_all = "camelCase")]
    Admin { user: User },
    #[serde(rename_all = "camelCase")]
    Operator { user: User, plates: Vec<String> },
}

impl Actor {
    pub fn user(&self) -> &User {
        match self {
            Actor::Admin { user } => user,
            Actor::Operator { user, .. } => user,
        }
    }

    pub fn role(&self) -> Role {
        self.user().role
    }

    pub fn name(&self) -> &str {
        &self.user().name
    }

    pub fn plates(&self) -> &[String] {
        match self {
            Actor::Admin { .. } => &[],
            Actor::Operator { plates, .. } => plates,
        }
    }
}

// Dados para login (username OU nik no mesmo campo)
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginPayload {
    #[validate(length(min = 1, message = "Informe o usuário ou NIK."))]
    #[schema(example = "budi.santoso")]
    pub identifier: String,
    #[validate(length(min = 1, message = "Informe a senha."))]
    pub password: String,
}

// Resposta de autenticação com o token e o ator resolvido
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub token: String,
    pub actor: Actor,
}

// Estrutura de dados ("claims") dentro do JWT
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,  // Subject (ID do usuário)
    pub exp: usize, // Expiration time (quando o token expira)
    pub iat: usize, // Issued At (quando o token foi criado)
}

// Payload de criação/edição de usuário (somente admins)
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpsertUserPayload {
    #[validate(length(min = 1, message = "O nome é obrigatório."))]
    pub name: String,
    pub role: Role,
    pub nik: Option<String>,
    pub batangan: Option<String>,
    pub location: Option<String>,
    pub username: Option<String>,
    #[validate(length(min = 6, message = "A senha deve ter no mínimo 6 caracteres."))]
    pub password: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn user_with_batangan(batangan: Option<&str>) -> User {
        User {
            id: Uuid::new_v4(),
            name: "Budi".to_string(),
            role: Role::Operator,
            nik: None,
            batangan: batangan.map(|b| b.to_string()),
            location: None,
            username: None,
            password_hash: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn plates_sao_separadas_e_normalizadas() {
        let user = user_with_batangan(Some("BM 8712 QU, BM 9034 TD ,  "));
        assert_eq!(user.plates(), vec!["BM 8712 QU", "BM 9034 TD"]);
    }

    #[test]
    fn batangan_vazio_gera_lista_vazia() {
        assert!(user_with_batangan(None).plates().is_empty());
        assert!(user_with_batangan(Some("  ")).plates().is_empty());
    }

    #[test]
    fn classes_de_papel() {
        assert!(Role::SuperAdmin.is_admin_class());
        assert!(Role::Mekanik.is_admin_class());
        assert!(!Role::Operator.is_admin_class());
        assert!(Role::Operator.is_operator_class());
        assert!(Role::KepalaBp.is_operator_class());
        assert!(!Role::Logistik.is_operator_class());
    }
}
