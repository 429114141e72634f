//! The question store: list, fetch, create, update and delete questions.

use uuid::Uuid;

use quizkit_core::keys;
use quizkit_core::models::question::{Question, QuestionDraft};

use crate::documents::{load_all, load_json, load_json_versioned, save_json, save_json_if_match};
use crate::error::{RecordError, StorageError};
use crate::store::DocumentStore;

const MAX_UPDATE_ATTEMPTS: u32 = 5;

/// All questions, newest first. Ties on `created_at` fall back to id order.
pub async fn list(store: &dyn DocumentStore) -> Result<Vec<Question>, RecordError> {
    let mut questions: Vec<Question> = load_all(store, keys::QUESTIONS_PREFIX).await?;
    questions.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| b.id.cmp(&a.id))
    });
    Ok(questions)
}

pub async fn get(store: &dyn DocumentStore, id: Uuid) -> Result<Question, RecordError> {
    load_json(store, &keys::question(id))
        .await
        .map_err(|e| not_found_as_question(e, id))
}

/// Validate a draft, assign id and timestamps, and persist it.
pub async fn create(
    store: &dyn DocumentStore,
    draft: QuestionDraft,
) -> Result<Question, RecordError> {
    let question = draft.into_question(Uuid::new_v4(), jiff::Timestamp::now())?;
    warn_if_ungradable(&question);

    save_json(store, &keys::question(question.id), &question).await?;

    tracing::info!(
        id = %question.id,
        question_type = %question.question_type,
        category = %question.category,
        "question created"
    );
    Ok(question)
}

/// Replace the fields present in `draft` on the stored question.
///
/// Nothing is written unless the merged question validates. The write is
/// conditional on the version that was read: a concurrent update causes the
/// draft to be re-applied to the fresher record, and a concurrent delete
/// makes the update fail with `QuestionNotFound`.
pub async fn update(
    store: &dyn DocumentStore,
    id: Uuid,
    draft: QuestionDraft,
) -> Result<Question, RecordError> {
    let key = keys::question(id);
    let mut attempt = 1;

    loop {
        let (existing, version): (Question, String) = load_json_versioned(store, &key)
            .await
            .map_err(|e| not_found_as_question(e, id))?;
        let updated = draft.clone().apply_to(&existing, jiff::Timestamp::now())?;

        match save_json_if_match(store, &key, &updated, &version).await {
            Ok(()) => {
                warn_if_ungradable(&updated);
                tracing::info!(id = %id, attempt, "question updated");
                return Ok(updated);
            }
            Err(StorageError::PreconditionFailed { .. }) if attempt < MAX_UPDATE_ATTEMPTS => {
                tracing::debug!(id = %id, attempt, "question changed during update; retrying");
                attempt += 1;
            }
            Err(e) => return Err(not_found_as_question(e, id)),
        }
    }
}

/// Remove a question. Responses that reference it are left in place.
pub async fn delete(store: &dyn DocumentStore, id: Uuid) -> Result<(), RecordError> {
    store
        .delete(&keys::question(id))
        .await
        .map_err(|e| not_found_as_question(e, id))?;

    tracing::info!(id = %id, "question deleted");
    Ok(())
}

fn not_found_as_question(e: StorageError, id: Uuid) -> RecordError {
    match e {
        StorageError::NotFound { .. } => RecordError::QuestionNotFound(id),
        other => RecordError::Storage(other),
    }
}

// Such questions are stored; no submitted option can match them.
fn warn_if_ungradable(question: &Question) {
    if !question.is_gradable() {
        tracing::warn!(
            id = %question.id,
            correct_answer = %question.correct_answer,
            options = question.answers.len(),
            "correct answer does not name any option"
        );
    }
    if question.is_missing_passage() {
        tracing::warn!(id = %question.id, "comprehension question has no paragraph");
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use tokio::sync::Barrier;

    use super::*;
    use crate::memory::MemoryStore;
    use crate::store::Document;
    use quizkit_core::ValidationError;
    use quizkit_core::models::question::QuestionType;

    /// Holds the first `held` reads at `gate` after they have read, so
    /// concurrent callers act on the same snapshot.
    struct GatedStore {
        inner: MemoryStore,
        gate: Arc<Barrier>,
        held: AtomicUsize,
    }

    impl GatedStore {
        fn new(held: usize, gate: Arc<Barrier>) -> Self {
            Self {
                inner: MemoryStore::new(),
                gate,
                held: AtomicUsize::new(held),
            }
        }
    }

    #[async_trait]
    impl DocumentStore for GatedStore {
        fn name(&self) -> &str {
            "gated"
        }

        async fn get(&self, key: &str) -> Result<Document, StorageError> {
            let doc = self.inner.get(key).await;
            let hold = self
                .held
                .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
                .is_ok();
            if hold {
                self.gate.wait().await;
            }
            doc
        }

        async fn put(&self, key: &str, body: Vec<u8>) -> Result<(), StorageError> {
            self.inner.put(key, body).await
        }

        async fn put_if_match(
            &self,
            key: &str,
            body: Vec<u8>,
            version: &str,
        ) -> Result<(), StorageError> {
            self.inner.put_if_match(key, body, version).await
        }

        async fn delete(&self, key: &str) -> Result<(), StorageError> {
            self.inner.delete(key).await
        }

        async fn list(&self, prefix: &str) -> Result<Vec<String>, StorageError> {
            self.inner.list(prefix).await
        }
    }

    fn draft(title: &str) -> QuestionDraft {
        QuestionDraft::new(QuestionType::Mcq, title, "general")
    }

    #[tokio::test]
    async fn create_then_list_returns_newest_first() {
        let store = MemoryStore::new();
        let first = create(&store, draft("first")).await.unwrap();
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        let second = create(&store, draft("second")).await.unwrap();

        let listed = list(&store).await.unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].id, second.id);
        assert_eq!(listed[1].id, first.id);
    }

    #[tokio::test]
    async fn invalid_create_persists_nothing() {
        let store = MemoryStore::new();
        let bad = QuestionDraft {
            category: None,
            ..draft("no category")
        };

        let err = create(&store, bad).await.unwrap_err();
        assert!(matches!(
            err,
            RecordError::Validation(ValidationError::MissingField("category"))
        ));
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn update_merges_fields_and_refreshes_updated_at() {
        let store = MemoryStore::new();
        let q = create(&store, draft("before")).await.unwrap();
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;

        let patch = QuestionDraft {
            title: Some("after".into()),
            ..Default::default()
        };
        let updated = update(&store, q.id, patch).await.unwrap();

        assert_eq!(updated.title, "after");
        assert_eq!(updated.category, "general");
        assert_eq!(updated.created_at, q.created_at);
        assert!(updated.updated_at > q.updated_at);
        assert_eq!(get(&store, q.id).await.unwrap(), updated);
    }

    #[tokio::test]
    async fn update_of_unknown_id_leaves_store_unchanged() {
        let store = MemoryStore::new();
        let q = create(&store, draft("only")).await.unwrap();
        let missing = Uuid::new_v4();

        let err = update(&store, missing, draft("ghost")).await.unwrap_err();
        assert!(matches!(err, RecordError::QuestionNotFound(id) if id == missing));
        assert_eq!(store.len().await, 1);
        assert_eq!(list(&store).await.unwrap(), vec![q]);
    }

    #[tokio::test]
    async fn invalid_update_is_not_written() {
        let store = MemoryStore::new();
        let q = create(&store, draft("keep me")).await.unwrap();

        let patch = QuestionDraft {
            points: Some(-3.0),
            ..Default::default()
        };
        assert!(matches!(
            update(&store, q.id, patch).await,
            Err(RecordError::Validation(ValidationError::InvalidPoints(_)))
        ));
        assert_eq!(get(&store, q.id).await.unwrap(), q);
    }

    #[tokio::test]
    async fn delete_is_not_idempotent() {
        let store = MemoryStore::new();
        let q = create(&store, draft("doomed")).await.unwrap();

        delete(&store, q.id).await.unwrap();
        assert!(matches!(
            delete(&store, q.id).await,
            Err(RecordError::QuestionNotFound(_))
        ));
        assert!(list(&store).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn out_of_range_correct_answer_is_accepted() {
        let store = MemoryStore::new();
        let d = QuestionDraft {
            answers: Some(vec!["yes".into(), "no".into()]),
            correct_answer: Some("7".into()),
            ..draft("permissive")
        };

        let q = create(&store, d).await.unwrap();
        assert!(!q.is_gradable());
    }

    #[tokio::test]
    async fn concurrent_updates_to_different_fields_both_survive() {
        let store = GatedStore::new(2, Arc::new(Barrier::new(2)));
        let q = create(&store, draft("old title")).await.unwrap();

        let retitle = QuestionDraft {
            title: Some("new title".into()),
            ..Default::default()
        };
        let reweigh = QuestionDraft {
            points: Some(9.0),
            ..Default::default()
        };
        let (a, b) = tokio::join!(
            update(&store, q.id, retitle),
            update(&store, q.id, reweigh)
        );
        a.unwrap();
        b.unwrap();

        let stored = get(&store, q.id).await.unwrap();
        assert_eq!(stored.title, "new title");
        assert_eq!(stored.points, 9.0);
    }

    #[tokio::test]
    async fn update_racing_a_delete_does_not_resurrect_the_question() {
        let gate = Arc::new(Barrier::new(2));
        let store = GatedStore::new(1, gate.clone());
        let q = create(&store, draft("doomed")).await.unwrap();

        let edit = QuestionDraft {
            title: Some("edited".into()),
            ..Default::default()
        };
        let (updated, deleted) = tokio::join!(update(&store, q.id, edit), async {
            let deleted = delete(&store, q.id).await;
            gate.wait().await;
            deleted
        });

        deleted.unwrap();
        assert!(matches!(updated, Err(RecordError::QuestionNotFound(id)) if id == q.id));
        assert!(list(&store).await.unwrap().is_empty());
    }
}
