// src/middleware/roles.rs

use axum::{extract::FromRequestParts, http::request::Parts};
use std::marker::PhantomData;

use crate::{
    common::error::AppError,
    models::auth::{Actor, Role},
};

/// 1. O trait que define quais papéis passam pelo gate
pub trait RoleGate: Send + Sync + 'static {
    fn allows(role: Role) -> bool;
    fn label() -> &'static str;
}

/// 2. O extrator (guardião)
pub struct RequireRole<T>(pub PhantomData<T>);

// 3. Implementação do FromRequestParts
impl<T, S> FromRequestParts<S> for RequireRole<T>
where
    T: RoleGate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let actor = parts
            .extensions
            .get::<Actor>()
            .ok_or(AppError::InvalidToken)?;

        if !T::allows(actor.role()) {
            return Err(AppError::Forbidden(format!(
                "Esta ação exige perfil {}.",
                T::label()
            )));
        }

        Ok(RequireRole(PhantomData))
    }
}

// ---
// DEFINIÇÃO DOS GATES (TIPOS)
// ---

// Gestão de cadastros: só administradores
pub struct AdminOnly;
impl RoleGate for AdminOnly {
    fn allows(role: Role) -> bool {
        matches!(role, Role::SuperAdmin | Role::LocationAdmin)
    }
    fn label() -> &'static str {
        "de administrador"
    }
}

// Oficina: mecânicos e administradores
pub struct WorkshopOnly;
impl RoleGate for WorkshopOnly {
    fn allows(role: Role) -> bool {
        matches!(role, Role::SuperAdmin | Role::LocationAdmin | Role::Mekanik)
    }
    fn label() -> &'static str {
        "de mecânico ou administrador"
    }
}

// Almoxarifado: logística também lança peças
pub struct StoreroomOnly;
impl RoleGate for StoreroomOnly {
    fn allows(role: Role) -> bool {
        matches!(
            role,
            Role::SuperAdmin | Role::LocationAdmin | Role::Mekanik | Role::Logistik
        )
    }
    fn label() -> &'static str {
        "de oficina ou logística"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gates_por_papel() {
        assert!(AdminOnly::allows(Role::SuperAdmin));
        assert!(AdminOnly::allows(Role::LocationAdmin));
        assert!(!AdminOnly::allows(Role::Mekanik));
        assert!(!AdminOnly::allows(Role::Operator));

        assert!(WorkshopOnly::allows(Role::Mekanik));
        assert!(!WorkshopOnly::allows(Role::Logistik));

        assert!(StoreroomOnly::allows(Role::Logistik));
        assert!(!StoreroomOnly::allows(Role::KepalaBp));
    }
}
