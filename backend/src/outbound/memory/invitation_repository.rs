//! In-memory `InvitationRepository`.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::ports::{InvitationRepository, InvitationRepositoryError};
use crate::domain::{Invitation, InvitationDraft, InvitationId, InvitationToken};

#[derive(Debug, Default)]
struct InvitationTable {
    last_id: i64,
    latest_created_at: Option<DateTime<Utc>>,
    rows: Vec<Invitation>,
}

/// Invitation store backed by a vector; tokens are kept unique.
#[derive(Debug, Default)]
pub struct InMemoryInvitationRepository {
    table: Mutex<InvitationTable>,
}

impl InMemoryInvitationRepository {
    fn lock(&self) -> Result<MutexGuard<'_, InvitationTable>, InvitationRepositoryError> {
        self.table
            .lock()
            .map_err(|_| InvitationRepositoryError::query("invitation store lock poisoned"))
    }
}

#[async_trait]
impl InvitationRepository for InMemoryInvitationRepository {
    async fn insert(&self, draft: &InvitationDraft) -> Result<Invitation, InvitationRepositoryError> {
        let mut table = self.lock()?;
        if table.rows.iter().any(|row| row.uuid == draft.uuid) {
            return Err(InvitationRepositoryError::duplicate_token(
                draft.uuid.to_string(),
            ));
        }
        table.last_id += 1;
        let created_at = table
            .latest_created_at
            .map_or(draft.created_at, |latest| latest.max(draft.created_at));
        table.latest_created_at = Some(created_at);
        let invitation = Invitation {
            id: InvitationId::new(table.last_id),
            uuid: draft.uuid,
            guest_names: draft.guest_names.clone(),
            is_plural: draft.is_plural,
            created_at,
        };
        table.rows.push(invitation.clone());
        Ok(invitation)
    }

    async fn find_by_token(
        &self,
        token: InvitationToken,
    ) -> Result<Option<Invitation>, InvitationRepositoryError> {
        Ok(self
            .lock()?
            .rows
            .iter()
            .find(|row| row.uuid == token)
            .cloned())
    }

    async fn list_newest_first(&self) -> Result<Vec<Invitation>, InvitationRepositoryError> {
        let mut rows = self.lock()?.rows.clone();
        rows.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
        Ok(rows)
    }

    async fn delete_by_token(
        &self,
        token: InvitationToken,
    ) -> Result<bool, InvitationRepositoryError> {
        let mut table = self.lock()?;
        let before = table.rows.len();
        table.rows.retain(|row| row.uuid != token);
        Ok(table.rows.len() != before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use rstest::{fixture, rstest};

    #[fixture]
    fn noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 14, 12, 0, 0)
            .single()
            .expect("valid timestamp")
    }

    fn draft(names: &str, created_at: DateTime<Utc>) -> InvitationDraft {
        InvitationDraft {
            uuid: InvitationToken::random(),
            guest_names: names.into(),
            is_plural: false,
            created_at,
        }
    }

    #[rstest]
    #[tokio::test]
    async fn duplicate_tokens_are_rejected(noon: DateTime<Utc>) {
        let repo = InMemoryInvitationRepository::default();
        let first = draft("Ada", noon);
        repo.insert(&first).await.expect("first insert");

        let clash = InvitationDraft {
            guest_names: "Charles".into(),
            ..first.clone()
        };
        let err = repo.insert(&clash).await.expect_err("duplicate token");
        assert!(matches!(err, InvitationRepositoryError::DuplicateToken { .. }));
        assert_eq!(repo.list_newest_first().await.expect("list").len(), 1);
    }

    #[rstest]
    #[tokio::test]
    async fn listing_is_newest_first(noon: DateTime<Utc>) {
        let repo = InMemoryInvitationRepository::default();
        for (names, offset) in [("early", 0), ("middle", 1), ("late", 2)] {
            repo.insert(&draft(names, noon + Duration::hours(offset)))
                .await
                .expect("insert");
        }

        let names: Vec<String> = repo
            .list_newest_first()
            .await
            .expect("list")
            .into_iter()
            .map(|invitation| invitation.guest_names)
            .collect();
        assert_eq!(names, ["late", "middle", "early"]);
    }

    #[rstest]
    #[tokio::test]
    async fn backdated_drafts_take_the_newest_timestamp(noon: DateTime<Utc>) {
        let repo = InMemoryInvitationRepository::default();
        let first = repo
            .insert(&draft("first", noon + Duration::minutes(5)))
            .await
            .expect("insert");
        let second = repo.insert(&draft("second", noon)).await.expect("insert");

        assert_eq!(second.created_at, first.created_at);
        let names: Vec<String> = repo
            .list_newest_first()
            .await
            .expect("list")
            .into_iter()
            .map(|invitation| invitation.guest_names)
            .collect();
        assert_eq!(names, ["second", "first"]);
    }

    #[rstest]
    #[tokio::test]
    async fn delete_by_token_reports_removal(noon: DateTime<Utc>) {
        let repo = InMemoryInvitationRepository::default();
        let stored = repo.insert(&draft("Ada", noon)).await.expect("insert");

        assert!(repo.delete_by_token(stored.uuid).await.expect("delete"));
        assert!(!repo.delete_by_token(stored.uuid).await.expect("second delete"));
        assert_eq!(repo.find_by_token(stored.uuid).await.expect("find"), None);
    }
}
