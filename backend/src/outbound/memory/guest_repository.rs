//! In-memory `GuestRepository`.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use pagination::{PageRequest, Paged};

use crate::domain::ports::{GuestRepository, GuestRepositoryError};
use crate::domain::{Guest, GuestDraft, GuestId, GuestPatch};

#[derive(Debug, Default)]
struct GuestTable {
    last_id: i64,
    rows: BTreeMap<GuestId, Guest>,
}

/// Guest store backed by a map keyed on id.
///
/// Ids start at 1 and are never reused, matching a database sequence.
#[derive(Debug, Default)]
pub struct InMemoryGuestRepository {
    table: Mutex<GuestTable>,
}

impl InMemoryGuestRepository {
    fn lock(&self) -> Result<MutexGuard<'_, GuestTable>, GuestRepositoryError> {
        self.table
            .lock()
            .map_err(|_| GuestRepositoryError::query("guest store lock poisoned"))
    }
}

fn to_index(value: u64) -> usize {
    usize::try_from(value).unwrap_or(usize::MAX)
}

#[async_trait]
impl GuestRepository for InMemoryGuestRepository {
    async fn list(&self, request: PageRequest) -> Result<Paged<Guest>, GuestRepositoryError> {
        let table = self.lock()?;
        let mut guests: Vec<&Guest> = table.rows.values().collect();
        guests.sort_by(|a, b| {
            (&a.last_name, &a.first_name, a.id).cmp(&(&b.last_name, &b.first_name, b.id))
        });

        let total = guests.len() as u64;
        let window = request
            .window(total)
            .map_err(|err| GuestRepositoryError::invalid_page(err.to_string()))?;
        let items = guests
            .into_iter()
            .skip(to_index(window.offset()))
            .take(to_index(window.limit()))
            .cloned()
            .collect();
        Ok(Paged::new(items, total, window))
    }

    async fn find_by_id(&self, id: GuestId) -> Result<Option<Guest>, GuestRepositoryError> {
        Ok(self.lock()?.rows.get(&id).cloned())
    }

    async fn insert(&self, draft: &GuestDraft) -> Result<Guest, GuestRepositoryError> {
        let mut table = self.lock()?;
        table.last_id += 1;
        let guest = Guest {
            id: GuestId::new(table.last_id),
            first_name: draft.first_name.clone(),
            last_name: draft.last_name.clone(),
        };
        table.rows.insert(guest.id, guest.clone());
        Ok(guest)
    }

    async fn replace(
        &self,
        id: GuestId,
        draft: &GuestDraft,
    ) -> Result<Option<Guest>, GuestRepositoryError> {
        let mut table = self.lock()?;
        Ok(table.rows.get_mut(&id).map(|guest| {
            guest.first_name = draft.first_name.clone();
            guest.last_name = draft.last_name.clone();
            guest.clone()
        }))
    }

    async fn patch(
        &self,
        id: GuestId,
        patch: &GuestPatch,
    ) -> Result<Option<Guest>, GuestRepositoryError> {
        let mut table = self.lock()?;
        Ok(table.rows.get_mut(&id).map(|guest| {
            *guest = patch.apply(guest);
            guest.clone()
        }))
    }

    async fn delete(&self, id: GuestId) -> Result<bool, GuestRepositoryError> {
        Ok(self.lock()?.rows.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{GuestName, RawField};
    use pagination::PageSelector;
    use rstest::{fixture, rstest};
    use std::num::NonZeroU64;

    fn draft(first: &str, last: &str) -> GuestDraft {
        GuestDraft::validate(RawField::Text(first.into()), RawField::Text(last.into()))
            .expect("valid draft")
    }

    fn page(number: u64, size: u64) -> PageRequest {
        PageRequest::new(
            PageSelector::Number(NonZeroU64::new(number).expect("non-zero page")),
            NonZeroU64::new(size).expect("non-zero size"),
        )
    }

    #[fixture]
    fn repo() -> InMemoryGuestRepository {
        InMemoryGuestRepository::default()
    }

    #[rstest]
    #[tokio::test]
    async fn ids_increase_and_are_not_reused(repo: InMemoryGuestRepository) {
        let first = repo.insert(&draft("Ada", "Lovelace")).await.expect("insert");
        assert!(repo.delete(first.id).await.expect("delete"));
        let second = repo.insert(&draft("Ada", "Lovelace")).await.expect("insert");
        assert_eq!(first.id.get(), 1);
        assert_eq!(second.id.get(), 2);
    }

    #[rstest]
    #[tokio::test]
    async fn listing_orders_by_last_then_first_then_id(repo: InMemoryGuestRepository) {
        for (first, last) in [("Zed", "Brown"), ("Amy", "Brown"), ("Bob", "Adams"), ("Amy", "Brown")] {
            repo.insert(&draft(first, last)).await.expect("insert");
        }

        let paged = repo.list(page(1, 10)).await.expect("list");
        let names: Vec<String> = paged.items().iter().map(ToString::to_string).collect();
        assert_eq!(names, ["Bob Adams", "Amy Brown", "Amy Brown", "Zed Brown"]);
        assert!(paged.items()[1].id < paged.items()[2].id);
        assert_eq!(paged.total(), 4);
    }

    #[rstest]
    #[tokio::test]
    async fn pages_slice_the_ordered_rows(repo: InMemoryGuestRepository) {
        for n in 0..5 {
            repo.insert(&draft("Guest", &format!("N{n}"))).await.expect("insert");
        }

        let second = repo.list(page(2, 2)).await.expect("list");
        let last_names: Vec<&str> = second.items().iter().map(|g| g.last_name.as_str()).collect();
        assert_eq!(last_names, ["N2", "N3"]);

        let err = repo.list(page(4, 2)).await.expect_err("past the end");
        assert!(matches!(err, GuestRepositoryError::InvalidPage { .. }));
    }

    #[rstest]
    #[tokio::test]
    async fn patch_touches_only_supplied_fields(repo: InMemoryGuestRepository) {
        let guest = repo.insert(&draft("Ada", "Lovelace")).await.expect("insert");
        let patch = GuestPatch {
            first_name: None,
            last_name: Some(GuestName::new("King").expect("valid name")),
        };

        let updated = repo
            .patch(guest.id, &patch)
            .await
            .expect("patch")
            .expect("guest exists");
        assert_eq!(updated.to_string(), "Ada King");
        assert_eq!(repo.find_by_id(guest.id).await.expect("find"), Some(updated));
    }

    #[rstest]
    #[tokio::test]
    async fn mutations_on_missing_ids_report_absence(repo: InMemoryGuestRepository) {
        let missing = GuestId::new(42);
        assert_eq!(repo.replace(missing, &draft("A", "B")).await.expect("replace"), None);
        assert_eq!(repo.patch(missing, &GuestPatch::default()).await.expect("patch"), None);
        assert!(!repo.delete(missing).await.expect("delete"));
    }
}
