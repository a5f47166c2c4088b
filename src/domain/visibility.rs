// src/domain/visibility.rs

use uuid::Uuid;

use crate::models::auth::{Actor, Role};

// Escopo de visibilidade do ator, calculado UMA vez e reutilizado por
// todas as listagens (no front original este predicado era copiado em
// cada página).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VisibilityScope {
    // SUPER_ADMIN, ou papel de local sem local configurado
    All,
    // Papéis amarrados a um batching plant específico
    Location(String),
    // OPERATOR: só os próprios registros (por id, nome ou placas atribuídas)
    Own {
        user_id: Uuid,
        name: String,
        plates: Vec<String>,
    },
}

pub fn scope_for(actor: &Actor) -> VisibilityScope {
    let user = actor.user();
    match user.role {
        Role::SuperAdmin => VisibilityScope::All,
        // Sem local configurado = visibilidade global (comportamento herdado)
        Role::LocationAdmin | Role::Mekanik | Role::Logistik | Role::KepalaBp => user
            .location
            .clone()
            .map(VisibilityScope::Location)
            .unwrap_or(VisibilityScope::All),
        Role::Operator => VisibilityScope::Own {
            user_id: user.id,
            name: user.name.clone(),
            plates: actor.plates().to_vec(),
        },
    }
}

impl VisibilityScope {
    // Registro amarrado a um local (report, veículo, ponto...)
    pub fn allows_location(&self, record_location: &str) -> bool {
        match self {
            VisibilityScope::All => true,
            VisibilityScope::Location(own) => own == record_location,
            VisibilityScope::Own { .. } => false,
        }
    }

    // Registro amarrado a um dono (ponto, penalidade, reclamação...)
    pub fn allows_owner(&self, owner_id: Option<Uuid>, owner_name: Option<&str>) -> bool {
        match self {
            VisibilityScope::All => true,
            VisibilityScope::Location(_) => false,
            VisibilityScope::Own { user_id, name, .. } => {
                owner_id.is_some_and(|id| id == *user_id)
                    || owner_name.is_some_and(|n| n == name)
            }
        }
    }

    // Registro amarrado a um veículo pela placa (via batangan do operador)
    pub fn allows_plate(&self, plate: &str) -> bool {
        match self {
            VisibilityScope::All => true,
            VisibilityScope::Location(_) => false,
            VisibilityScope::Own { plates, .. } => plates.iter().any(|p| p == plate),
        }
    }

    pub fn location(&self) -> Option<&str> {
        match self {
            VisibilityScope::Location(l) => Some(l),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::auth::User;
    use chrono::Utc;

    fn user(role: Role, location: Option<&str>, batangan: Option<&str>) -> User {
        User {
            id: Uuid::new_v4(),
            name: "Budi".to_string(),
            role,
            nik: None,
            batangan: batangan.map(|b| b.to_string()),
            location: location.map(|l| l.to_string()),
            username: None,
            password_hash: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    // Propriedade 9: LOCATION_ADMIN de "BP Pekanbaru" nunca vê outro local;
    // SUPER_ADMIN vê tudo.
    #[test]
    fn location_admin_nao_vaza_entre_locais() {
        let actor = Actor::Admin {
            user: user(Role::LocationAdmin, Some("BP Pekanbaru"), None),
        };
        let scope = scope_for(&actor);
        assert!(scope.allows_location("BP Pekanbaru"));
        assert!(!scope.allows_location("BP Dumai"));
    }

    #[test]
    fn super_admin_ve_tudo() {
        let actor = Actor::Admin {
            user: user(Role::SuperAdmin, Some("BP Pekanbaru"), None),
        };
        let scope = scope_for(&actor);
        assert!(scope.allows_location("BP Dumai"));
        assert!(scope.allows_owner(Some(Uuid::new_v4()), None));
        assert!(scope.allows_plate("BM 0000 XX"));
    }

    #[test]
    fn papel_de_local_sem_local_tem_visibilidade_global() {
        let actor = Actor::Admin {
            user: user(Role::Mekanik, None, None),
        };
        assert_eq!(scope_for(&actor), VisibilityScope::All);
    }

    #[test]
    fn operador_so_ve_o_que_e_dele() {
        let u = user(Role::Operator, Some("BP Pekanbaru"), Some("BM 8712 QU"));
        let uid = u.id;
        let plates = u.plates();
        let actor = Actor::Operator { user: u, plates };
        let scope = scope_for(&actor);

        assert!(scope.allows_owner(Some(uid), None));
        assert!(scope.allows_owner(None, Some("Budi")));
        assert!(!scope.allows_owner(Some(Uuid::new_v4()), Some("Agus")));
        assert!(scope.allows_plate("BM 8712 QU"));
        assert!(!scope.allows_plate("BM 9999 ZZ"));
        // Operador não herda visibilidade do local
        assert!(!scope.allows_location("BP Pekanbaru"));
    }

    #[test]
    fn kepala_bp_e_escopado_pelo_local() {
        let u = user(Role::KepalaBp, Some("BP Dumai"), Some("BM 1 A"));
        let plates = u.plates();
        let actor = Actor::Operator { user: u, plates };
        let scope = scope_for(&actor);
        assert!(scope.allows_location("BP Dumai"));
        assert!(!scope.allows_location("BP Pekanbaru"));
    }
}
