// src/services/attendance_service.rs

use chrono::Local;

use crate::{
    common::error::AppError,
    db::AttendanceRepository,
    domain::{
        attendance::{masuk_status, masuk_window, pulang_check, MasukWindow, PulangCheck},
        visibility::{scope_for, VisibilityScope},
    },
    models::{
        attendance::{Attendance, AttendanceKind, AttendanceQuery, TodayAttendance},
        auth::Actor,
    },
};

#[derive(Clone)]
pub struct AttendanceService {
    attendance_repo: AttendanceRepository,
}

impl AttendanceService {
    pub fn new(attendance_repo: AttendanceRepository) -> Self {
        Self { attendance_repo }
    }

    // Entrada ("masuk"). A janela é reavaliada AQUI, no submit: mesmo que o
    // botão do cliente estivesse habilitado com estado velho, fora da janela
    // o registro é rejeitado.
    pub async fn clock_masuk(&self, actor: &Actor, photo: &str) -> Result<Attendance, AppError> {
        let now = Local::now();

        match masuk_window(now.time()) {
            MasukWindow::NotYetOpen => return Err(AppError::AttendanceNotYetOpen),
            MasukWindow::Closed => return Err(AppError::AttendanceWindowClosed),
            MasukWindow::Open => {}
        }

        let user = actor.user();
        let today = now.date_naive();

        if self
            .attendance_repo
            .find_for_day(user.id, AttendanceKind::Masuk, today)
            .await?
            .is_some()
        {
            return Err(AppError::DuplicateAttendance);
        }

        // Pontualidade é uma regra separada da janela de habilitação
        let status = masuk_status(now.time());

        let attendance = self
            .attendance_repo
            .insert(
                user.id,
                &user.name,
                AttendanceKind::Masuk,
                status,
                user.location.as_deref().unwrap_or(""),
                photo,
                today,
            )
            .await?;

        tracing::info!("🕒 Entrada de {} registrada ({})", user.name, status);
        Ok(attendance)
    }

    // Saída ("pulang"): exige entrada no MESMO dia de calendário,
    // independente da janela.
    pub async fn clock_pulang(&self, actor: &Actor, photo: &str) -> Result<Attendance, AppError> {
        let now = Local::now();
        let user = actor.user();
        let today = now.date_naive();

        let has_masuk = self
            .attendance_repo
            .find_for_day(user.id, AttendanceKind::Masuk, today)
            .await?
            .is_some();

        match pulang_check(now.time(), has_masuk) {
            PulangCheck::MissingMasuk => return Err(AppError::MissingClockIn),
            PulangCheck::WindowClosed => return Err(AppError::PulangWindowClosed),
            PulangCheck::Ok => {}
        }

        if self
            .attendance_repo
            .find_for_day(user.id, AttendanceKind::Pulang, today)
            .await?
            .is_some()
        {
            return Err(AppError::DuplicateAttendance);
        }

        let attendance = self
            .attendance_repo
            .insert(
                user.id,
                &user.name,
                AttendanceKind::Pulang,
                "",
                user.location.as_deref().unwrap_or(""),
                photo,
                today,
            )
            .await?;

        tracing::info!("🕒 Saída de {} registrada", user.name);
        Ok(attendance)
    }

    // Estado do dia do próprio usuário (alimenta os botões do cliente)
    pub async fn today(&self, actor: &Actor) -> Result<TodayAttendance, AppError> {
        let user = actor.user();
        let today = Local::now().date_naive();
        let masuk = self
            .attendance_repo
            .find_for_day(user.id, AttendanceKind::Masuk, today)
            .await?;
        let pulang = self
            .attendance_repo
            .find_for_day(user.id, AttendanceKind::Pulang, today)
            .await?;
        Ok(TodayAttendance { masuk, pulang })
    }

    pub async fn list(
        &self,
        actor: &Actor,
        query: &AttendanceQuery,
    ) -> Result<Vec<Attendance>, AppError> {
        let scope = scope_for(actor);
        let (location, owner_id) = match &scope {
            VisibilityScope::All => (None, None),
            VisibilityScope::Location(l) => (Some(l.as_str()), None),
            VisibilityScope::Own { user_id, .. } => (None, Some(*user_id)),
        };
        self.attendance_repo
            .list(query.from, query.to, location, owner_id)
            .await
    }
}
