use async_trait::async_trait;

use crate::domain::booking::BookingRecord;
use crate::domain::profile::UserProfile;
use crate::domain::review::Review;
use crate::error::Result;

/// Booking documents owned by the persistence collaborator.
#[async_trait]
pub trait BookingStore: Send + Sync {
    /// Persist a validated booking and return its new id.
    async fn create_booking(&self, record: &BookingRecord) -> Result<String>;

    /// A user's bookings, newest first.
    async fn bookings_for_user(&self, user_id: &str) -> Result<Vec<BookingRecord>>;
}

#[async_trait]
pub trait ReviewStore: Send + Sync {
    async fn add_review(&self, review: &Review) -> Result<String>;

    /// A hotel's reviews, newest first.
    async fn reviews_for_hotel(&self, hotel_id: &str) -> Result<Vec<Review>>;
}

#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn create_profile(&self, uid: &str, profile: &UserProfile) -> Result<()>;
    async fn get_profile(&self, uid: &str) -> Result<UserProfile>;
    async fn update_name(&self, uid: &str, name: &str) -> Result<()>;
}
