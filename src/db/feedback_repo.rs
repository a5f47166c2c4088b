// src/db/feedback_repo.rs

use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::{
        auth::Role,
        feedback::{Complaint, Notification, Suggestion},
    },
};

const FEEDBACK_COLUMNS: &str = "id, author_name, location, body, \"timestamp\"";
const NOTIFICATION_COLUMNS: &str =
    "id, title, message, target_role, target_location, read, created_at";

// Reclamações, sugestões e notificações internas
#[derive(Clone)]
pub struct FeedbackRepository {
    pool: PgPool,
}

impl FeedbackRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // --- Reclamações ---

    pub async fn insert_complaint(
        &self,
        author_name: &str,
        location: &str,
        body: &str,
    ) -> Result<Complaint, AppError> {
        let complaint = sqlx::query_as::<_, Complaint>(&format!(
            "INSERT INTO complaints (author_name, location, body) \
             VALUES ($1, $2, $3) RETURNING {FEEDBACK_COLUMNS}"
        ))
        .bind(author_name)
        .bind(location)
        .bind(body)
        .fetch_one(&self.pool)
        .await?;
        Ok(complaint)
    }

    pub async fn list_complaints(
        &self,
        location: Option<&str>,
        owner_name: Option<&str>,
    ) -> Result<Vec<Complaint>, AppError> {
        let complaints = sqlx::query_as::<_, Complaint>(&format!(
            "SELECT {FEEDBACK_COLUMNS} FROM complaints \
             WHERE ($1::text IS NULL OR location = $1) \
               AND ($2::text IS NULL OR author_name = $2) \
             ORDER BY \"timestamp\" DESC"
        ))
        .bind(location)
        .bind(owner_name)
        .fetch_all(&self.pool)
        .await?;
        Ok(complaints)
    }

    pub async fn delete_complaint(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM complaints WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Reclamação"));
        }
        Ok(())
    }

    // --- Sugestões ---

    pub async fn insert_suggestion(
        &self,
        author_name: &str,
        location: &str,
        body: &str,
    ) -> Result<Suggestion, AppError> {
        let suggestion = sqlx::query_as::<_, Suggestion>(&format!(
            "INSERT INTO suggestions (author_name, location, body) \
             VALUES ($1, $2, $3) RETURNING {FEEDBACK_COLUMNS}"
        ))
        .bind(author_name)
        .bind(location)
        .bind(body)
        .fetch_one(&self.pool)
        .await?;
        Ok(suggestion)
    }

    pub async fn list_suggestions(
        &self,
        location: Option<&str>,
        owner_name: Option<&str>,
    ) -> Result<Vec<Suggestion>, AppError> {
        let suggestions = sqlx::query_as::<_, Suggestion>(&format!(
            "SELECT {FEEDBACK_COLUMNS} FROM suggestions \
             WHERE ($1::text IS NULL OR location = $1) \
               AND ($2::text IS NULL OR author_name = $2) \
             ORDER BY \"timestamp\" DESC"
        ))
        .bind(location)
        .bind(owner_name)
        .fetch_all(&self.pool)
        .await?;
        Ok(suggestions)
    }

    // --- Notificações ---

    // Participa da transação do envio de checklist
    pub async fn insert_notification<'e, E>(
        &self,
        executor: E,
        title: &str,
        message: &str,
        target_role: Option<Role>,
        target_location: Option<&str>,
    ) -> Result<Notification, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let notification = sqlx::query_as::<_, Notification>(&format!(
            "INSERT INTO notifications (title, message, target_role, target_location) \
             VALUES ($1, $2, $3, $4) RETURNING {NOTIFICATION_COLUMNS}"
        ))
        .bind(title)
        .bind(message)
        .bind(target_role)
        .bind(target_location)
        .fetch_one(executor)
        .await?;
        Ok(notification)
    }

    // Notificações visíveis para um papel/local (alvo nulo = broadcast)
    pub async fn list_notifications(
        &self,
        role: Role,
        location: Option<&str>,
    ) -> Result<Vec<Notification>, AppError> {
        let notifications = sqlx::query_as::<_, Notification>(&format!(
            "SELECT {NOTIFICATION_COLUMNS} FROM notifications \
             WHERE (target_role IS NULL OR target_role = $1) \
               AND (target_location IS NULL OR $2::text IS NULL OR target_location = $2) \
             ORDER BY created_at DESC"
        ))
        .bind(role)
        .bind(location)
        .fetch_all(&self.pool)
        .await?;
        Ok(notifications)
    }

    pub async fn mark_notification_read(&self, id: Uuid) -> Result<Notification, AppError> {
        let notification = sqlx::query_as::<_, Notification>(&format!(
            "UPDATE notifications SET read = TRUE WHERE id = $1 RETURNING {NOTIFICATION_COLUMNS}"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        notification.ok_or(AppError::NotFound("Notificação"))
    }
}
