//src/main.rs

use axum::{
    middleware as axum_middleware,
    routing::{get, post, put},
    Router,
};
use tokio::net::TcpListener;
use tokio::signal;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

// Declaração dos nossos módulos
mod common;
mod config;
mod db;
mod docs;
mod domain;
mod handlers;
mod middleware;
mod models;
mod services;

use crate::config::AppState;
use crate::middleware::auth::auth_middleware;

#[tokio::main]
async fn main() {
    // Inicializa o logger
    tracing_subscriber::fmt().with_target(false).compact().init();

    // .expect() é bom aqui: se a configuração falhar, a aplicação não deve iniciar.
    let app_state = AppState::new()
        .await
        .expect("Falha ao inicializar o estado da aplicação.");

    // Roda as migrações do SQLx na inicialização
    sqlx::migrate!()
        .run(&app_state.db_pool)
        .await
        .expect("Falha ao rodar as migrações do banco de dados.");

    tracing::info!("✅ Migrações do banco de dados executadas com sucesso!");

    // Rota de autenticação (pública)
    let auth_routes = Router::new().route("/login", post(handlers::auth::login));

    // Tudo abaixo passa pelo middleware de autenticação
    let protected_routes = Router::new()
        .route("/auth/me", get(handlers::auth::get_me))
        .route(
            "/users",
            post(handlers::users::create_user).get(handlers::users::list_users),
        )
        .route(
            "/users/{id}",
            put(handlers::users::update_user).delete(handlers::users::delete_user),
        )
        .route(
            "/vehicles",
            post(handlers::vehicles::create_vehicle).get(handlers::vehicles::list_vehicles),
        )
        .route(
            "/vehicles/{id}",
            put(handlers::vehicles::update_vehicle).delete(handlers::vehicles::delete_vehicle),
        )
        .route(
            "/reports",
            post(handlers::reports::submit_report).get(handlers::reports::list_reports),
        )
        .route("/reports/print", get(handlers::reports::print_recap))
        .route("/reports/{id}", get(handlers::reports::get_report))
        .route("/attendance/masuk", post(handlers::attendance::clock_masuk))
        .route("/attendance/pulang", post(handlers::attendance::clock_pulang))
        .route("/attendance/today", get(handlers::attendance::today_attendance))
        .route("/attendance", get(handlers::attendance::list_attendance))
        .route(
            "/tasks",
            post(handlers::tasks::create_task).get(handlers::tasks::list_tasks),
        )
        .route("/tasks/{id}", get(handlers::tasks::get_task))
        .route("/tasks/{id}/status", put(handlers::tasks::transition_task))
        .route(
            "/spare-parts",
            post(handlers::tasks::log_spare_parts).get(handlers::tasks::list_spare_parts),
        )
        .route(
            "/penalties",
            post(handlers::penalties::create_penalty).get(handlers::penalties::list_penalties),
        )
        .route("/penalties/summary", get(handlers::penalties::penalty_summary))
        .route(
            "/complaints",
            post(handlers::feedback::create_complaint).get(handlers::feedback::list_complaints),
        )
        .route(
            "/complaints/{id}",
            axum::routing::delete(handlers::feedback::delete_complaint),
        )
        .route(
            "/suggestions",
            post(handlers::feedback::create_suggestion).get(handlers::feedback::list_suggestions),
        )
        .route("/notifications", get(handlers::feedback::list_notifications))
        .route(
            "/notifications/{id}/read",
            put(handlers::feedback::mark_notification_read),
        )
        .route(
            "/ritasi",
            post(handlers::logistics::open_ritasi).get(handlers::logistics::list_ritasi),
        )
        .route("/ritasi/{id}/legs", put(handlers::logistics::stamp_ritasi_legs))
        .route(
            "/job-mix",
            post(handlers::logistics::create_job_mix).get(handlers::logistics::list_job_mixes),
        )
        .route(
            "/job-mix/{id}",
            put(handlers::logistics::update_job_mix).delete(handlers::logistics::delete_job_mix),
        )
        .route(
            "/locations",
            post(handlers::logistics::create_location).get(handlers::logistics::list_locations),
        )
        .route(
            "/locations/{id}",
            axum::routing::delete(handlers::logistics::delete_location),
        )
        .route("/dashboard/summary", get(handlers::dashboard::get_summary))
        .route(
            "/dashboard/status-board",
            get(handlers::dashboard::get_status_board),
        )
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_middleware,
        ));

    // Combina tudo no router principal
    let app = Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .nest("/api/auth", auth_routes)
        .nest("/api", protected_routes)
        .merge(
            SwaggerUi::new("/swagger-ui")
                .url("/api-docs/openapi.json", docs::ApiDoc::openapi()),
        )
        .with_state(app_state);

    // Inicia o servidor
    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("0.0.0.0:{}", port);
    let listener = TcpListener::bind(&addr)
        .await
        .expect("Falha ao iniciar o listener TCP");
    tracing::info!("🚀 Servidor escutando em {}", listener.local_addr().unwrap());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Erro no servidor Axum");

    tracing::info!("👋 Servidor encerrado");
}

// Sinal de desligamento graceful (Ctrl+C ou SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("🛑 Ctrl+C recebido, encerrando servidor...");
        },
        _ = terminate => {
            tracing::info!("🛑 Sinal de término recebido, encerrando servidor...");
        },
    }
}
