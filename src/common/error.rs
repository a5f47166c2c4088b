use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// Nosso tipo de erro único, com `thiserror` para melhor ergonomia.
// Regras de negócio viram 4xx com mensagem legível; infraestrutura vira 500 logado.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("Credenciais inválidas")]
    InvalidCredentials,

    #[error("Token inválido")]
    InvalidToken,

    #[error("Usuário não encontrado")]
    UserNotFound,

    #[error("{0} não encontrado")]
    NotFound(&'static str),

    #[error("Acesso negado: {0}")]
    Forbidden(String),

    // Operador/Kepala BP sem nenhuma placa atribuída (batangan vazio)
    #[error("Operador sem veículo atribuído")]
    MissingAssignedVehicle,

    #[error("Checklist já enviado hoje para este veículo")]
    DuplicateDailyReport,

    #[error("Registro de ponto já existe hoje para este usuário")]
    DuplicateAttendance,

    #[error("Peças já lançadas para esta ordem de serviço")]
    DuplicateSparePartLog,

    #[error("Registro de entrada ainda não disponível")]
    AttendanceNotYetOpen,

    #[error("Janela de registro de entrada encerrada")]
    AttendanceWindowClosed,

    #[error("Fora da janela de registro de saída")]
    PulangWindowClosed,

    #[error("Não há registro de entrada hoje")]
    MissingClockIn,

    #[error("Veículo não está em estado de dano/atenção")]
    VehicleNotInWorkshopState,

    #[error("Transição de status inválida: {0}")]
    InvalidTaskTransition(String),

    #[error("Nome de usuário já existe")]
    UsernameAlreadyExists,

    #[error("NIK já cadastrado")]
    NikAlreadyExists,

    #[error("Número de casco já cadastrado")]
    HullNumberAlreadyExists,

    #[error("Violação de unicidade: {0}")]
    UniqueConstraintViolation(String),

    // Variante para erros de banco de dados (sqlx)
    #[error("Erro de banco de dados")]
    DatabaseError(#[from] sqlx::Error),

    // Variante genérica para qualquer outro erro inesperado
    #[error("Erro interno do servidor")]
    InternalServerError(#[from] anyhow::Error),

    #[error("Erro de Bcrypt: {0}")]
    BcryptError(#[from] bcrypt::BcryptError),

    #[error("Erro de JWT: {0}")]
    JwtError(#[from] jsonwebtoken::errors::Error),

    #[error("Fonte não encontrada: {0}")]
    FontNotFound(String),

    #[error("Erro ao renderizar PDF: {0}")]
    PdfError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            // Retorna todos os detalhes da validação, campo a campo.
            AppError::ValidationError(errors) => {
                let mut details = std::collections::HashMap::new();
                for (field, field_errors) in errors.field_errors() {
                    let messages: Vec<String> = field_errors
                        .iter()
                        .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                        .collect();
                    details.insert(field.to_string(), messages);
                }
                let body = Json(json!({
                    "error": "Um ou mais campos são inválidos.",
                    "details": details,
                }));
                return (StatusCode::BAD_REQUEST, body).into_response();
            }
            AppError::InvalidCredentials => {
                (StatusCode::UNAUTHORIZED, "Usuário ou senha inválidos.".to_string())
            }
            AppError::InvalidToken => (
                StatusCode::UNAUTHORIZED,
                "Token de autenticação inválido ou ausente.".to_string(),
            ),
            AppError::UserNotFound => (StatusCode::NOT_FOUND, "Usuário não encontrado.".to_string()),
            AppError::NotFound(what) => {
                (StatusCode::NOT_FOUND, format!("{} não encontrado.", what))
            }
            AppError::Forbidden(ref reason) => (StatusCode::FORBIDDEN, reason.clone()),
            AppError::MissingAssignedVehicle => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "Nenhum veículo (batangan) atribuído a este usuário.".to_string(),
            ),
            AppError::DuplicateDailyReport => (
                StatusCode::CONFLICT,
                "Já existe um checklist enviado hoje para este veículo.".to_string(),
            ),
            AppError::DuplicateAttendance => (
                StatusCode::CONFLICT,
                "Este registro de ponto já foi feito hoje.".to_string(),
            ),
            AppError::DuplicateSparePartLog => (
                StatusCode::CONFLICT,
                "As peças desta ordem de serviço já foram lançadas.".to_string(),
            ),
            AppError::AttendanceNotYetOpen => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "O registro de entrada ainda não está disponível.".to_string(),
            ),
            AppError::AttendanceWindowClosed => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "A janela de registro de entrada já foi encerrada.".to_string(),
            ),
            AppError::PulangWindowClosed => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "Fora da janela de registro de saída.".to_string(),
            ),
            AppError::MissingClockIn => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "Não há registro de entrada para hoje; registre a entrada primeiro.".to_string(),
            ),
            AppError::VehicleNotInWorkshopState => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "O veículo não está com status de dano ou atenção.".to_string(),
            ),
            AppError::InvalidTaskTransition(ref detail) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                format!("Transição de status não permitida: {}.", detail),
            ),
            AppError::UsernameAlreadyExists => (
                StatusCode::CONFLICT,
                "Este nome de usuário já está em uso.".to_string(),
            ),
            AppError::NikAlreadyExists => {
                (StatusCode::CONFLICT, "Este NIK já está cadastrado.".to_string())
            }
            AppError::HullNumberAlreadyExists => (
                StatusCode::CONFLICT,
                "Este número de casco já está cadastrado.".to_string(),
            ),
            AppError::UniqueConstraintViolation(ref constraint) => (
                StatusCode::CONFLICT,
                format!("Registro duplicado ({}).", constraint),
            ),

            // Todos os outros (DatabaseError, InternalServerError, etc) viram 500.
            // O `tracing` loga a mensagem detalhada que o `thiserror` nos deu.
            ref e => {
                tracing::error!("Erro Interno do Servidor: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Ocorreu um erro inesperado.".to_string(),
                )
            }
        };

        // Resposta padrão para erros simples que só têm uma mensagem.
        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}
