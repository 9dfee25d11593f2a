//! End-to-end tests for QuestionStore over SQLite

use qbank_core::db::{self, migrations};
use qbank_core::{QbankError, QuestionStore, SqliteQuestions};
use sqlx::SqlitePool;

async fn memory_db() -> SqlitePool {
    let pool = db::create_memory_pool().await.expect("memory pool");
    migrations::run(&pool).await.expect("migrations");
    pool
}

async fn file_db(path: &std::path::Path) -> SqlitePool {
    let pool = db::create_pool(&db::sqlite_url(path)).await.expect("file pool");
    migrations::run(&pool).await.expect("migrations");
    pool
}

#[tokio::test]
async fn add_question_then_read() {
    let pool = memory_db().await;
    let repo = SqliteQuestions::new(&pool);
    let store = QuestionStore::new(&repo);

    store.add_question("is the sky blue?", "yes", true).await.unwrap();

    let questions = store.read_questions().await.unwrap();
    assert_eq!(questions.len(), 1);
    assert_eq!(questions[0].text, "is the sky blue?");
    assert_eq!(questions[0].answer, "yes");
    assert!(questions[0].flag);
    assert_eq!(questions.last().unwrap().to_string(), "is the sky blue?");
}

#[tokio::test]
async fn reads_multiple_questions_in_order() {
    let pool = memory_db().await;
    let repo = SqliteQuestions::new(&pool);
    let store = QuestionStore::new(&repo);

    store.add_question("What is 2+2?", "4", true).await.unwrap();
    store
        .add_question("What is Java?", "A programming language", false)
        .await
        .unwrap();

    let results = store.get_all_questions().await.unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].text, "What is 2+2?");
    assert!(results[0].flag);
    assert_eq!(results[1].text, "What is Java?");
    assert!(!results[1].flag);
    assert!(results[0].id < results[1].id);
}

#[tokio::test]
async fn empty_question_input_rejected() {
    let pool = memory_db().await;
    let repo = SqliteQuestions::new(&pool);
    let store = QuestionStore::new(&repo);

    let err = store.add_question("", "", true).await.unwrap_err();
    assert!(matches!(err, QbankError::InvalidInput(_)));
    assert_eq!(repo.count().await.unwrap(), 0);
}

#[tokio::test]
async fn duplicate_question_rejected() {
    let pool = memory_db().await;
    let repo = SqliteQuestions::new(&pool);
    let store = QuestionStore::new(&repo);

    store.add_question("Duplicate check", "Yes", true).await.unwrap();
    let err = store
        .add_question("Duplicate check", "Yes", true)
        .await
        .unwrap_err();

    assert!(err.is_duplicate());
    let matching = store
        .read_questions()
        .await
        .unwrap()
        .into_iter()
        .filter(|q| q.text == "Duplicate check")
        .count();
    assert_eq!(matching, 1);
}

#[tokio::test]
async fn create_question_stores_unset_flag() {
    let pool = memory_db().await;
    let repo = SqliteQuestions::new(&pool);
    let store = QuestionStore::new(&repo);

    store.create_question("is the sky blue?", "yes").await.unwrap();

    let questions = store.read_questions().await.unwrap();
    assert_eq!(questions.len(), 1);
    assert!(!questions[0].flag);
}

#[tokio::test]
async fn empty_store_reads_empty_and_stable() {
    let pool = memory_db().await;
    let repo = SqliteQuestions::new(&pool);
    let store = QuestionStore::new(&repo);

    let first = store.read_questions().await.unwrap();
    let second = store.read_questions().await.unwrap();
    assert!(first.is_empty());
    assert_eq!(first, second);
}

#[tokio::test]
async fn reads_persistent_data_after_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("questions.db");

    {
        let pool = file_db(&path).await;
        let repo = SqliteQuestions::new(&pool);
        let store = QuestionStore::new(&repo);
        store.add_question("Does data survive restarts?", "yes", true).await.unwrap();
        pool.close().await;
    }

    let pool = file_db(&path).await;
    let repo = SqliteQuestions::new(&pool);
    let store = QuestionStore::new(&repo);

    let questions = store.read_questions().await.unwrap();
    assert_eq!(questions.len(), 1);
    assert_eq!(questions[0].text, "Does data survive restarts?");

    // Uniqueness is enforced against data from the earlier session too
    let err = store
        .add_question("Does data survive restarts?", "still yes", false)
        .await
        .unwrap_err();
    assert!(err.is_duplicate());
}

#[tokio::test]
async fn concurrent_adds_with_same_text_store_one_record() {
    let dir = tempfile::tempdir().unwrap();
    let pool = file_db(&dir.path().join("race.db")).await;
    let repo = SqliteQuestions::new(&pool);
    let store = QuestionStore::new(&repo);

    let (a, b) = tokio::join!(
        store.add_question("Who wins?", "first", true),
        store.add_question("Who wins?", "second", false),
    );

    let outcomes = [a, b];
    assert_eq!(outcomes.iter().filter(|r| r.is_ok()).count(), 1);
    assert!(outcomes
        .iter()
        .filter_map(|r| r.as_ref().err())
        .all(QbankError::is_duplicate));
    assert_eq!(repo.count().await.unwrap(), 1);
}

#[tokio::test]
async fn storage_failure_surfaces_as_storage_error() {
    let pool = memory_db().await;
    let repo = SqliteQuestions::new(&pool);
    let store = QuestionStore::new(&repo);

    pool.close().await;

    let err = store.read_questions().await.unwrap_err();
    assert!(matches!(err, QbankError::Storage(_)));
}
