use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use emmaus_domain::catalog::Catalog;
use emmaus_domain::progress::chapter_complete;

use crate::domain::repository::ProgressRepository;
use crate::domain::types::{QuestionProgress, UnitProgress};
use crate::error::LearningServiceError;

// ── Progress report ──────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct UnitReport {
    pub unit_id: String,
    pub video_completed: bool,
    pub questions_completed: u32,
    pub total_questions: u32,
    pub complete: bool,
}

#[derive(Debug, Clone)]
pub struct ChapterReport {
    pub chapter_id: String,
    pub complete: bool,
    pub units: Vec<UnitReport>,
}

#[derive(Debug, Clone)]
pub struct ProgressReport {
    pub chapters: Vec<ChapterReport>,
    pub completed_units: u32,
}

// ── GetProgress ──────────────────────────────────────────────────────────────

/// Assemble the full report over the catalog outline. Units without a stored
/// row read as zero progress; nothing is written on read.
pub struct GetProgressUseCase<P: ProgressRepository> {
    pub repo: P,
    pub catalog: Arc<Catalog>,
}

impl<P: ProgressRepository> GetProgressUseCase<P> {
    pub async fn execute(&self, user_id: Uuid) -> Result<ProgressReport, LearningServiceError> {
        let rows = self.repo.list_units(user_id).await?;
        let mut completed_units = 0u32;
        let mut chapters = Vec::new();
        for chapter in self.catalog.semesters.iter().flat_map(|s| &s.chapters) {
            let mut units = Vec::with_capacity(chapter.units.len());
            for unit in &chapter.units {
                let stored = rows
                    .iter()
                    .find(|r| r.chapter_id == chapter.id && r.unit_id == unit.id);
                let report = match stored {
                    Some(row) => UnitReport {
                        unit_id: unit.id.clone(),
                        video_completed: row.video_completed,
                        questions_completed: row.questions_completed,
                        total_questions: row.total_questions,
                        complete: row.complete(),
                    },
                    None => UnitReport {
                        unit_id: unit.id.clone(),
                        video_completed: false,
                        questions_completed: 0,
                        total_questions: unit.total_questions,
                        complete: false,
                    },
                };
                if report.complete {
                    completed_units += 1;
                }
                units.push(report);
            }
            let flags: Vec<bool> = units.iter().map(|u| u.complete).collect();
            chapters.push(ChapterReport {
                chapter_id: chapter.id.clone(),
                complete: chapter_complete(&flags),
                units,
            });
        }
        Ok(ProgressReport {
            chapters,
            completed_units,
        })
    }
}

// ── UpsertUnitProgress ───────────────────────────────────────────────────────

pub struct UpsertUnitProgressInput {
    pub user_id: Uuid,
    pub chapter_id: String,
    pub unit_id: String,
    pub video_completed: bool,
    pub questions_completed: u32,
    pub total_questions: Option<u32>,
}

pub struct UpsertUnitProgressUseCase<P: ProgressRepository> {
    pub repo: P,
    pub catalog: Arc<Catalog>,
}

impl<P: ProgressRepository> UpsertUnitProgressUseCase<P> {
    /// Idempotent overwrite: a second call with a different payload replaces
    /// the first entirely.
    pub async fn execute(
        &self,
        input: UpsertUnitProgressInput,
    ) -> Result<UnitProgress, LearningServiceError> {
        let catalog_total = self
            .catalog
            .total_questions(&input.chapter_id, &input.unit_id)
            .ok_or(LearningServiceError::UnitNotFound)?;
        let now = Utc::now();
        let row = UnitProgress {
            user_id: input.user_id,
            chapter_id: input.chapter_id,
            unit_id: input.unit_id,
            video_completed: input.video_completed,
            questions_completed: input.questions_completed,
            total_questions: input.total_questions.unwrap_or(catalog_total),
            created_at: now,
            updated_at: now,
        };
        self.repo.upsert_unit(&row).await?;
        Ok(row)
    }
}

// ── MarkVideo ────────────────────────────────────────────────────────────────

pub struct MarkVideoUseCase<P: ProgressRepository> {
    pub repo: P,
    pub catalog: Arc<Catalog>,
}

impl<P: ProgressRepository> MarkVideoUseCase<P> {
    pub async fn execute(
        &self,
        user_id: Uuid,
        chapter_id: &str,
        unit_id: &str,
    ) -> Result<UnitProgress, LearningServiceError> {
        let total = self
            .catalog
            .total_questions(chapter_id, unit_id)
            .ok_or(LearningServiceError::UnitNotFound)?;
        self.repo
            .mark_video(user_id, chapter_id, unit_id, total)
            .await
    }
}

// ── UpsertQuestionDetail ─────────────────────────────────────────────────────

pub struct UpsertQuestionDetailInput {
    pub user_id: Uuid,
    pub question_id: String,
    pub chapter_id: String,
    pub unit_id: String,
    pub attempts: u32,
    pub incorrect: u32,
    pub completed: bool,
}

pub struct UpsertQuestionDetailUseCase<P: ProgressRepository> {
    pub repo: P,
    pub catalog: Arc<Catalog>,
}

impl<P: ProgressRepository> UpsertQuestionDetailUseCase<P> {
    pub async fn execute(
        &self,
        input: UpsertQuestionDetailInput,
    ) -> Result<QuestionProgress, LearningServiceError> {
        self.catalog
            .find_unit(&input.chapter_id, &input.unit_id)
            .ok_or(LearningServiceError::UnitNotFound)?;
        let row = QuestionProgress {
            user_id: input.user_id,
            question_id: input.question_id,
            chapter_id: input.chapter_id,
            unit_id: input.unit_id,
            attempts: input.attempts,
            incorrect: input.incorrect,
            completed_at: input.completed.then(Utc::now),
        };
        self.repo.upsert_question(&row).await?;
        Ok(row)
    }
}

// ── ResetProgress ────────────────────────────────────────────────────────────

pub struct ResetProgressUseCase<P: ProgressRepository> {
    pub repo: P,
}

impl<P: ProgressRepository> ResetProgressUseCase<P> {
    /// One transaction: unit rows, question rows, and the cached summary all
    /// clear together or not at all.
    pub async fn execute(&self, user_id: Uuid) -> Result<(), LearningServiceError> {
        self.repo.reset(user_id).await
    }
}
