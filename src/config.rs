// src/config.rs

use sqlx::{postgres::PgPoolOptions, PgPool};
use std::{env, time::Duration};

use crate::{
    db::{
        AttendanceRepository, FeedbackRepository, LogisticsRepository, PenaltyRepository,
        ReportRepository, TaskRepository, UserRepository, VehicleRepository,
    },
    services::{
        attendance_service::AttendanceService, auth::AuthService,
        dashboard_service::DashboardService, document_service::DocumentService,
        feedback_service::FeedbackService, logistics_service::LogisticsService,
        penalty_service::PenaltyService, report_service::ReportService, task_service::TaskService,
        vehicle_service::VehicleService,
    },
};

// O estado compartilhado que será acessível em toda a aplicação
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub jwt_secret: String,
    pub auth_service: AuthService,
    pub report_service: ReportService,
    pub attendance_service: AttendanceService,
    pub task_service: TaskService,
    pub penalty_service: PenaltyService,
    pub vehicle_service: VehicleService,
    pub dashboard_service: DashboardService,
    pub feedback_service: FeedbackService,
    pub logistics_service: LogisticsService,
    pub document_service: DocumentService,
}

impl AppState {
    pub async fn new() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL").expect("DATABASE_URL deve ser definida");
        let jwt_secret = env::var("JWT_SECRET").expect("JWT_SECRET deve ser definido");

        // Conecta ao banco de dados, usando '?' para propagar erros
        let db_pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect(&database_url)
            .await?;

        tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");

        // --- Monta o gráfico de dependências ---
        let user_repo = UserRepository::new(db_pool.clone());
        let vehicle_repo = VehicleRepository::new(db_pool.clone());
        let report_repo = ReportRepository::new(db_pool.clone());
        let attendance_repo = AttendanceRepository::new(db_pool.clone());
        let task_repo = TaskRepository::new(db_pool.clone());
        let penalty_repo = PenaltyRepository::new(db_pool.clone());
        let feedback_repo = FeedbackRepository::new(db_pool.clone());
        let logistics_repo = LogisticsRepository::new(db_pool.clone());

        let auth_service = AuthService::new(user_repo.clone(), jwt_secret.clone());
        let report_service = ReportService::new(
            report_repo.clone(),
            vehicle_repo.clone(),
            feedback_repo.clone(),
            db_pool.clone(),
        );
        let attendance_service = AttendanceService::new(attendance_repo.clone());
        let task_service = TaskService::new(
            task_repo.clone(),
            vehicle_repo.clone(),
            report_repo.clone(),
        );
        let penalty_service = PenaltyService::new(penalty_repo, user_repo);
        let vehicle_service = VehicleService::new(vehicle_repo.clone());
        let dashboard_service =
            DashboardService::new(vehicle_repo.clone(), report_repo, attendance_repo, task_repo);
        let feedback_service = FeedbackService::new(feedback_repo);
        let logistics_service = LogisticsService::new(logistics_repo, vehicle_repo);
        let document_service = DocumentService::new();

        Ok(Self {
            db_pool,
            jwt_secret,
            auth_service,
            report_service,
            attendance_service,
            task_service,
            penalty_service,
            vehicle_service,
            dashboard_service,
            feedback_service,
            logistics_service,
            document_service,
        })
    }
}
