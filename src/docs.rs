// src/docs.rs

use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};
use utoipa::OpenApi;

use crate::domain;
use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Auth ---
        handlers::auth::login,
        handlers::auth::get_me,

        // --- Users ---
        handlers::users::list_users,
        handlers::users::create_user,
        handlers::users::update_user,
        handlers::users::delete_user,

        // --- Vehicles ---
        handlers::vehicles::list_vehicles,
        handlers::vehicles::create_vehicle,
        handlers::vehicles::update_vehicle,
        handlers::vehicles::delete_vehicle,

        // --- Reports ---
        handlers::reports::submit_report,
        handlers::reports::list_reports,
        handlers::reports::get_report,
        handlers::reports::print_recap,

        // --- Attendance ---
        handlers::attendance::clock_masuk,
        handlers::attendance::clock_pulang,
        handlers::attendance::today_attendance,
        handlers::attendance::list_attendance,

        // --- Tasks ---
        handlers::tasks::create_task,
        handlers::tasks::list_tasks,
        handlers::tasks::get_task,
        handlers::tasks::transition_task,
        handlers::tasks::log_spare_parts,
        handlers::tasks::list_spare_parts,

        // --- Penalties ---
        handlers::penalties::create_penalty,
        handlers::penalties::list_penalties,
        handlers::penalties::penalty_summary,

        // --- Feedback ---
        handlers::feedback::create_complaint,
        handlers::feedback::list_complaints,
        handlers::feedback::delete_complaint,
        handlers::feedback::create_suggestion,
        handlers::feedback::list_suggestions,
        handlers::feedback::list_notifications,
        handlers::feedback::mark_notification_read,

        // --- Logistics ---
        handlers::logistics::open_ritasi,
        handlers::logistics::stamp_ritasi_legs,
        handlers::logistics::list_ritasi,
        handlers::logistics::list_job_mixes,
        handlers::logistics::create_job_mix,
        handlers::logistics::update_job_mix,
        handlers::logistics::delete_job_mix,
        handlers::logistics::list_locations,
        handlers::logistics::create_location,
        handlers::logistics::delete_location,

        // --- Dashboard ---
        handlers::dashboard::get_summary,
        handlers::dashboard::get_status_board,
    ),
    components(
        schemas(
            // --- Auth ---
            models::auth::Role,
            models::auth::User,
            models::auth::Actor,
            models::auth::LoginPayload,
            models::auth::AuthResponse,
            models::auth::UpsertUserPayload,

            // --- Vehicles ---
            models::vehicle::Vehicle,
            models::vehicle::UpsertVehiclePayload,

            // --- Reports ---
            models::report::ItemStatus,
            models::report::ReportStatus,
            models::report::ChecklistItem,
            models::report::KerusakanLain,
            models::report::Report,
            models::report::SubmitReportPayload,

            // --- Attendance ---
            models::attendance::AttendanceKind,
            models::attendance::Attendance,
            models::attendance::ClockPayload,
            models::attendance::TodayAttendance,

            // --- Tasks ---
            models::task::TaskStatus,
            models::task::AssignedMechanic,
            models::task::MechanicTask,
            models::task::TaskDetail,
            models::task::CreateTaskPayload,
            models::task::TransitionTaskPayload,
            models::task::SparePartLog,
            models::task::CreateSparePartPayload,

            // --- Penalties ---
            models::penalty::Penalty,
            models::penalty::CreatePenaltyPayload,
            models::penalty::PenaltySummary,

            // --- Feedback ---
            models::feedback::Complaint,
            models::feedback::Suggestion,
            models::feedback::CreateFeedbackPayload,
            models::feedback::Notification,

            // --- Logistics ---
            models::logistics::RitasiLog,
            models::logistics::CreateRitasiPayload,
            models::logistics::UpdateRitasiLegsPayload,
            models::logistics::JobMixFormula,
            models::logistics::UpsertJobMixPayload,
            models::logistics::Location,
            models::logistics::CreateLocationPayload,

            // --- Dashboard ---
            domain::status::DerivedStatus,
            models::dashboard::DashboardSummary,
            models::dashboard::StatusBoardEntry,
        )
    ),
    tags(
        (name = "Auth", description = "Autenticação e sessão tipada"),
        (name = "Users", description = "Cadastro de usuários (admins)"),
        (name = "Vehicles", description = "Frota de veículos"),
        (name = "Reports", description = "Checklists diários e recap imprimível"),
        (name = "Attendance", description = "Ponto (masuk/pulang) com janelas de horário"),
        (name = "Tasks", description = "Ordens de serviço da oficina e peças"),
        (name = "Penalties", description = "Ledger de penalidades"),
        (name = "Feedback", description = "Reclamações, sugestões e notificações"),
        (name = "Logistics", description = "Ritasi, traços de concreto e locais"),
        (name = "Dashboard", description = "Resumo do dia e quadro da frota")
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "api_jwt",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        );
    }
}
