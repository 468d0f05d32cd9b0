use std::sync::Arc;

use emmaus_domain::catalog::Catalog;
use emmaus_learning::error::LearningServiceError;
use emmaus_learning::usecase::progress::{
    GetProgressUseCase, MarkVideoUseCase, ResetProgressUseCase, UpsertUnitProgressInput,
    UpsertUnitProgressUseCase,
};
use uuid::Uuid;

use crate::helpers::MockProgressStore;

fn catalog() -> Arc<Catalog> {
    Arc::new(Catalog::builtin())
}

fn upsert_input(user_id: Uuid, questions_completed: u32, video: bool) -> UpsertUnitProgressInput {
    UpsertUnitProgressInput {
        user_id,
        chapter_id: "ch-1".to_owned(),
        unit_id: "u-1-1".to_owned(),
        video_completed: video,
        questions_completed,
        total_questions: None,
    }
}

#[tokio::test]
async fn fresh_user_reads_all_zero_progress() {
    let store = MockProgressStore::default();
    let usecase = GetProgressUseCase {
        repo: store,
        catalog: catalog(),
    };

    let report = usecase.execute(Uuid::now_v7()).await.unwrap();

    assert_eq!(report.completed_units, 0);
    let units: usize = report.chapters.iter().map(|c| c.units.len()).sum();
    assert_eq!(units, catalog().unit_count());
    for chapter in &report.chapters {
        assert!(!chapter.complete);
        for unit in &chapter.units {
            assert!(!unit.video_completed);
            assert_eq!(unit.questions_completed, 0);
        }
    }
}

#[tokio::test]
async fn completing_video_and_all_questions_completes_the_unit() {
    let store = MockProgressStore::default();
    let user_id = Uuid::now_v7();
    let total = catalog().total_questions("ch-1", "u-1-1").unwrap();

    UpsertUnitProgressUseCase {
        repo: store.clone(),
        catalog: catalog(),
    }
    .execute(upsert_input(user_id, total, true))
    .await
    .unwrap();

    let report = GetProgressUseCase {
        repo: store,
        catalog: catalog(),
    }
    .execute(user_id)
    .await
    .unwrap();

    assert_eq!(report.completed_units, 1);
    let unit = report.chapters[0]
        .units
        .iter()
        .find(|u| u.unit_id == "u-1-1")
        .unwrap();
    assert!(unit.complete);
}

#[tokio::test]
async fn video_alone_does_not_complete_the_unit() {
    let store = MockProgressStore::default();
    let user_id = Uuid::now_v7();

    MarkVideoUseCase {
        repo: store.clone(),
        catalog: catalog(),
    }
    .execute(user_id, "ch-1", "u-1-1")
    .await
    .unwrap();

    let report = GetProgressUseCase {
        repo: store,
        catalog: catalog(),
    }
    .execute(user_id)
    .await
    .unwrap();

    assert_eq!(report.completed_units, 0);
    let unit = report.chapters[0]
        .units
        .iter()
        .find(|u| u.unit_id == "u-1-1")
        .unwrap();
    assert!(unit.video_completed);
    assert!(!unit.complete);
}

#[tokio::test]
async fn mark_video_preserves_existing_question_counts() {
    let store = MockProgressStore::default();
    let user_id = Uuid::now_v7();

    UpsertUnitProgressUseCase {
        repo: store.clone(),
        catalog: catalog(),
    }
    .execute(upsert_input(user_id, 3, false))
    .await
    .unwrap();

    let row = MarkVideoUseCase {
        repo: store,
        catalog: catalog(),
    }
    .execute(user_id, "ch-1", "u-1-1")
    .await
    .unwrap();

    assert!(row.video_completed);
    assert_eq!(row.questions_completed, 3);
}

#[tokio::test]
async fn second_upsert_overwrites_the_first() {
    let store = MockProgressStore::default();
    let user_id = Uuid::now_v7();
    let usecase = UpsertUnitProgressUseCase {
        repo: store.clone(),
        catalog: catalog(),
    };

    usecase.execute(upsert_input(user_id, 5, true)).await.unwrap();
    usecase.execute(upsert_input(user_id, 1, false)).await.unwrap();

    let rows = store.units.lock().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].questions_completed, 1);
    assert!(!rows[0].video_completed);
}

#[tokio::test]
async fn unknown_unit_is_rejected() {
    let store = MockProgressStore::default();
    let usecase = UpsertUnitProgressUseCase {
        repo: store,
        catalog: catalog(),
    };

    let result = usecase
        .execute(UpsertUnitProgressInput {
            user_id: Uuid::now_v7(),
            chapter_id: "ch-1".to_owned(),
            unit_id: "u-9-9".to_owned(),
            video_completed: true,
            questions_completed: 0,
            total_questions: None,
        })
        .await;

    assert!(matches!(result, Err(LearningServiceError::UnitNotFound)));
}

#[tokio::test]
async fn reset_clears_rows_and_cached_summary() {
    let store = MockProgressStore::default();
    let user_id = Uuid::now_v7();
    let total = catalog().total_questions("ch-1", "u-1-1").unwrap();

    UpsertUnitProgressUseCase {
        repo: store.clone(),
        catalog: catalog(),
    }
    .execute(upsert_input(user_id, total, true))
    .await
    .unwrap();
    assert_eq!(*store.completed_units.lock().unwrap(), 1);

    ResetProgressUseCase {
        repo: store.clone(),
    }
    .execute(user_id)
    .await
    .unwrap();

    assert!(store.units.lock().unwrap().is_empty());
    assert_eq!(*store.completed_units.lock().unwrap(), 0);

    let report = GetProgressUseCase {
        repo: store,
        catalog: catalog(),
    }
    .execute(user_id)
    .await
    .unwrap();
    assert_eq!(report.completed_units, 0);
}
