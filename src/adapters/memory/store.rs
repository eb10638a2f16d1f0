use std::collections::HashMap;
use std::sync::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::booking::BookingRecord;
use crate::domain::profile::UserProfile;
use crate::domain::review::Review;
use crate::error::{Result, StaybookError};
use crate::ports::store::{BookingStore, ProfileStore, ReviewStore};

/// In-memory document store standing in for the real persistence
/// collaborator in the demo binary and tests. Documents are kept in
/// insertion order and read back newest first.
#[derive(Default)]
pub struct MemoryStore {
    bookings: RwLock<HashMap<String, Vec<BookingRecord>>>,
    reviews: RwLock<HashMap<String, Vec<Review>>>,
    profiles: RwLock<HashMap<String, UserProfile>>,
    next_id: AtomicU64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn mint_id(&self, prefix: &str) -> String {
        let n = self.next_id.fetch_add(1, Ordering::Relaxed);
        format!("{prefix}-{n}")
    }
}

fn poisoned(what: &str) -> StaybookError {
    StaybookError::collaborator(format!("store lock poisoned during {what}"))
}

#[async_trait]
impl BookingStore for MemoryStore {
    async fn create_booking(&self, record: &BookingRecord) -> Result<String> {
        let id = self.mint_id("bk");
        let mut stored = record.clone();
        stored.id = Some(id.clone());
        self.bookings
            .write()
            .map_err(|_| poisoned("create_booking"))?
            .entry(record.user_id.clone())
            .or_default()
            .push(stored);
        Ok(id)
    }

    async fn bookings_for_user(&self, user_id: &str) -> Result<Vec<BookingRecord>> {
        let bookings = self
            .bookings
            .read()
            .map_err(|_| poisoned("bookings_for_user"))?;
        let mut result = bookings.get(user_id).cloned().unwrap_or_default();
        result.reverse();
        Ok(result)
    }
}

#[async_trait]
impl ReviewStore for MemoryStore {
    async fn add_review(&self, review: &Review) -> Result<String> {
        let id = self.mint_id("rv");
        let mut stored = review.clone();
        stored.id = Some(id.clone());
        self.reviews
            .write()
            .map_err(|_| poisoned("add_review"))?
            .entry(review.hotel_id.clone())
            .or_default()
            .push(stored);
        Ok(id)
    }

    async fn reviews_for_hotel(&self, hotel_id: &str) -> Result<Vec<Review>> {
        let reviews = self
            .reviews
            .read()
            .map_err(|_| poisoned("reviews_for_hotel"))?;
        let mut result = reviews.get(hotel_id).cloned().unwrap_or_default();
        result.reverse();
        Ok(result)
    }
}

#[async_trait]
impl ProfileStore for MemoryStore {
    async fn create_profile(&self, uid: &str, profile: &UserProfile) -> Result<()> {
        self.profiles
            .write()
            .map_err(|_| poisoned("create_profile"))?
            .insert(uid.to_string(), profile.clone());
        Ok(())
    }

    async fn get_profile(&self, uid: &str) -> Result<UserProfile> {
        self.profiles
            .read()
            .map_err(|_| poisoned("get_profile"))?
            .get(uid)
            .cloned()
            .ok_or_else(|| StaybookError::ProfileNotFound {
                uid: uid.to_string(),
            })
    }

    async fn update_name(&self, uid: &str, name: &str) -> Result<()> {
        let mut profiles = self.profiles.write().map_err(|_| poisoned("update_name"))?;
        let profile = profiles
            .get_mut(uid)
            .ok_or_else(|| StaybookError::ProfileNotFound {
                uid: uid.to_string(),
            })?;
        profile.name = name.to_string();
        profile.updated_at = Utc::now().to_rfc3339();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{make_hotel, make_review, make_stay};

    fn booking_for(user: &str, hotel_name: &str) -> BookingRecord {
        let hotel = make_hotel("h1", hotel_name, 100.0);
        let stay = make_stay(2024, 5, 10, 2024, 5, 12, 1);
        BookingRecord::new(user, &hotel, &stay)
    }

    #[tokio::test]
    async fn bookings_come_back_newest_first() {
        let store = MemoryStore::new();
        store.create_booking(&booking_for("u1", "First")).await.unwrap();
        store.create_booking(&booking_for("u1", "Second")).await.unwrap();

        let bookings = store.bookings_for_user("u1").await.unwrap();
        assert_eq!(bookings.len(), 2);
        assert_eq!(bookings[0].hotel_name, "Second");
        assert_eq!(bookings[1].hotel_name, "First");
    }

    #[tokio::test]
    async fn bookings_are_isolated_per_user() {
        let store = MemoryStore::new();
        store.create_booking(&booking_for("u1", "Mine")).await.unwrap();
        assert!(store.bookings_for_user("u2").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn created_booking_gets_a_fresh_id() {
        let store = MemoryStore::new();
        let a = store.create_booking(&booking_for("u1", "A")).await.unwrap();
        let b = store.create_booking(&booking_for("u1", "B")).await.unwrap();
        assert_ne!(a, b);
        let bookings = store.bookings_for_user("u1").await.unwrap();
        assert_eq!(bookings[1].id.as_deref(), Some(a.as_str()));
    }

    #[tokio::test]
    async fn reviews_grouped_by_hotel_newest_first() {
        let store = MemoryStore::new();
        store
            .add_review(&make_review("alice", "h1", 5, "Wonderful weekend"))
            .await
            .unwrap();
        store
            .add_review(&make_review("bob", "h1", 3, "Average experience"))
            .await
            .unwrap();
        store
            .add_review(&make_review("carol", "h2", 4, "Different hotel here"))
            .await
            .unwrap();

        let reviews = store.reviews_for_hotel("h1").await.unwrap();
        assert_eq!(reviews.len(), 2);
        assert_eq!(reviews[0].user_name, "bob");
    }

    #[tokio::test]
    async fn missing_profile_is_an_error() {
        let store = MemoryStore::new();
        let err = store.get_profile("nobody").await.unwrap_err();
        assert!(matches!(err, StaybookError::ProfileNotFound { .. }));
    }

    #[tokio::test]
    async fn update_name_bumps_updated_at() {
        let store = MemoryStore::new();
        let profile = UserProfile {
            name: "Alice".into(),
            email: "alice@example.com".into(),
            created_at: "2024-01-01T00:00:00Z".into(),
            updated_at: "2024-01-01T00:00:00Z".into(),
        };
        store.create_profile("u1", &profile).await.unwrap();
        store.update_name("u1", "Alicia").await.unwrap();

        let updated = store.get_profile("u1").await.unwrap();
        assert_eq!(updated.name, "Alicia");
        assert_ne!(updated.updated_at, "2024-01-01T00:00:00Z");
    }
}
