use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use emmaus_auth_types::identity::IdentityHeaders;
use emmaus_domain::role::ORG_ADMINS;

use crate::domain::types::{QuestionProgress, UnitProgress};
use crate::error::LearningServiceError;
use crate::handlers::require_self_or;
use crate::state::AppState;
use crate::usecase::progress::{
    GetProgressUseCase, MarkVideoUseCase, ResetProgressUseCase, UpsertQuestionDetailInput,
    UpsertQuestionDetailUseCase, UpsertUnitProgressInput, UpsertUnitProgressUseCase,
};

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct UnitReportResponse {
    pub unit_id: String,
    pub video_completed: bool,
    pub questions_completed: u32,
    pub total_questions: u32,
    pub complete: bool,
}

#[derive(Serialize)]
pub struct ChapterReportResponse {
    pub chapter_id: String,
    pub complete: bool,
    pub units: Vec<UnitReportResponse>,
}

#[derive(Serialize)]
pub struct ProgressResponse {
    pub chapters: Vec<ChapterReportResponse>,
    pub completed_units: u32,
}

#[derive(Serialize)]
pub struct UnitProgressResponse {
    pub chapter_id: String,
    pub unit_id: String,
    pub video_completed: bool,
    pub questions_completed: u32,
    pub total_questions: u32,
    pub complete: bool,
    #[serde(serialize_with = "emmaus_core::serde::to_rfc3339_ms")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<UnitProgress> for UnitProgressResponse {
    fn from(row: UnitProgress) -> Self {
        let complete = row.complete();
        Self {
            chapter_id: row.chapter_id,
            unit_id: row.unit_id,
            video_completed: row.video_completed,
            questions_completed: row.questions_completed,
            total_questions: row.total_questions,
            complete,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Serialize)]
pub struct QuestionProgressResponse {
    pub question_id: String,
    pub chapter_id: String,
    pub unit_id: String,
    pub attempts: u32,
    pub incorrect: u32,
    pub completed: bool,
}

impl From<QuestionProgress> for QuestionProgressResponse {
    fn from(row: QuestionProgress) -> Self {
        Self {
            question_id: row.question_id,
            chapter_id: row.chapter_id,
            unit_id: row.unit_id,
            attempts: row.attempts,
            incorrect: row.incorrect,
            completed: row.completed_at.is_some(),
        }
    }
}

// ── GET /users/{id}/progress ─────────────────────────────────────────────────

pub async fn get_progress(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ProgressResponse>, LearningServiceError> {
    require_self_or(&identity, id, ORG_ADMINS)?;
    let usecase = GetProgressUseCase {
        repo: state.progress_repo(),
        catalog: state.catalog.clone(),
    };
    let report = usecase.execute(id).await?;
    Ok(Json(ProgressResponse {
        chapters: report
            .chapters
            .into_iter()
            .map(|chapter| ChapterReportResponse {
                chapter_id: chapter.chapter_id,
                complete: chapter.complete,
                units: chapter
                    .units
                    .into_iter()
                    .map(|unit| UnitReportResponse {
                        unit_id: unit.unit_id,
                        video_completed: unit.video_completed,
                        questions_completed: unit.questions_completed,
                        total_questions: unit.total_questions,
                        complete: unit.complete,
                    })
                    .collect(),
            })
            .collect(),
        completed_units: report.completed_units,
    }))
}

// ── PATCH /users/{id}/progress ───────────────────────────────────────────────

#[derive(Deserialize)]
pub struct UpsertUnitProgressRequest {
    pub chapter_id: String,
    pub unit_id: String,
    pub video_completed: bool,
    pub questions_completed: u32,
    pub total_questions: Option<u32>,
}

pub async fn upsert_unit_progress(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpsertUnitProgressRequest>,
) -> Result<Json<UnitProgressResponse>, LearningServiceError> {
    require_self_or(&identity, id, ORG_ADMINS)?;
    let usecase = UpsertUnitProgressUseCase {
        repo: state.progress_repo(),
        catalog: state.catalog.clone(),
    };
    let row = usecase
        .execute(UpsertUnitProgressInput {
            user_id: id,
            chapter_id: body.chapter_id,
            unit_id: body.unit_id,
            video_completed: body.video_completed,
            questions_completed: body.questions_completed,
            total_questions: body.total_questions,
        })
        .await?;
    Ok(Json(row.into()))
}

// ── DELETE /users/{id}/progress ──────────────────────────────────────────────

pub async fn reset_progress(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, LearningServiceError> {
    require_self_or(&identity, id, ORG_ADMINS)?;
    let usecase = ResetProgressUseCase {
        repo: state.progress_repo(),
    };
    usecase.execute(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── POST /progress/video ─────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct MarkVideoRequest {
    pub chapter_id: String,
    pub unit_id: String,
}

/// Always acts on the caller's own progress.
pub async fn mark_video(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Json(body): Json<MarkVideoRequest>,
) -> Result<Json<UnitProgressResponse>, LearningServiceError> {
    let usecase = MarkVideoUseCase {
        repo: state.progress_repo(),
        catalog: state.catalog.clone(),
    };
    let row = usecase
        .execute(identity.user_id, &body.chapter_id, &body.unit_id)
        .await?;
    Ok(Json(row.into()))
}

// ── POST /progress/quiz/details ──────────────────────────────────────────────

#[derive(Deserialize)]
pub struct QuestionDetailRequest {
    pub question_id: String,
    pub chapter_id: String,
    pub unit_id: String,
    pub attempts: u32,
    pub incorrect: u32,
    pub completed: bool,
}

pub async fn upsert_question_detail(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Json(body): Json<QuestionDetailRequest>,
) -> Result<(StatusCode, Json<QuestionProgressResponse>), LearningServiceError> {
    let usecase = UpsertQuestionDetailUseCase {
        repo: state.progress_repo(),
        catalog: state.catalog.clone(),
    };
    let row = usecase
        .execute(UpsertQuestionDetailInput {
            user_id: identity.user_id,
            question_id: body.question_id,
            chapter_id: body.chapter_id,
            unit_id: body.unit_id,
            attempts: body.attempts,
            incorrect: body.incorrect,
            completed: body.completed,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(row.into())))
}
