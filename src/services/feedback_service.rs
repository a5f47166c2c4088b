// src/services/feedback_service.rs

use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::FeedbackRepository,
    domain::visibility::{scope_for, VisibilityScope},
    models::{
        auth::Actor,
        feedback::{Complaint, Notification, Suggestion},
    },
};

#[derive(Clone)]
pub struct FeedbackService {
    feedback_repo: FeedbackRepository,
}

impl FeedbackService {
    pub fn new(feedback_repo: FeedbackRepository) -> Self {
        Self { feedback_repo }
    }

    pub async fn create_complaint(&self, actor: &Actor, body: &str) -> Result<Complaint, AppError> {
        let user = actor.user();
        self.feedback_repo
            .insert_complaint(&user.name, user.location.as_deref().unwrap_or(""), body)
            .await
    }

    pub async fn list_complaints(&self, actor: &Actor) -> Result<Vec<Complaint>, AppError> {
        let (location, owner) = Self::filters(actor);
        self.feedback_repo
            .list_complaints(location.as_deref(), owner.as_deref())
            .await
    }

    pub async fn delete_complaint(&self, id: Uuid) -> Result<(), AppError> {
        self.feedback_repo.delete_complaint(id).await
    }

    pub async fn create_suggestion(&self, actor: &Actor, body: &str) -> Result<Suggestion, AppError> {
        let user = actor.user();
        self.feedback_repo
            .insert_suggestion(&user.name, user.location.as_deref().unwrap_or(""), body)
            .await
    }

    pub async fn list_suggestions(&self, actor: &Actor) -> Result<Vec<Suggestion>, AppError> {
        let (location, owner) = Self::filters(actor);
        self.feedback_repo
            .list_suggestions(location.as_deref(), owner.as_deref())
            .await
    }

    // Notificações são resolvidas por papel + local do ator, não por dono
    pub async fn list_notifications(&self, actor: &Actor) -> Result<Vec<Notification>, AppError> {
        let user = actor.user();
        self.feedback_repo
            .list_notifications(user.role, user.location.as_deref())
            .await
    }

    pub async fn mark_notification_read(&self, id: Uuid) -> Result<Notification, AppError> {
        self.feedback_repo.mark_notification_read(id).await
    }

    fn filters(actor: &Actor) -> (Option<String>, Option<String>) {
        match scope_for(actor) {
            VisibilityScope::All => (None, None),
            VisibilityScope::Location(l) => (Some(l), None),
            VisibilityScope::Own { name, .. } => (None, Some(name)),
        }
    }
}
