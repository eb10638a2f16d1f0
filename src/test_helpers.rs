use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};

use crate::domain::booking::BookingRecord;
use crate::domain::listing::Hotel;
use crate::domain::review::Review;
use crate::domain::stay::StayRequest;
use crate::error::Result;
use crate::ports::recommendations::RecommendationSource;
use crate::ports::store::{BookingStore, ReviewStore};

// --- Factory functions ---

pub fn make_hotel(id: &str, name: &str, price: f64) -> Hotel {
    Hotel {
        id: id.to_string(),
        name: name.to_string(),
        location: "Test City".to_string(),
        rating: 4.5,
        price_per_night: price,
        image_url: format!("https://example.com/{id}.jpg"),
        description: None,
        is_recommended: false,
    }
}

pub fn make_recommended_hotel(id: &str, name: &str, price: f64) -> Hotel {
    Hotel {
        is_recommended: true,
        ..make_hotel(id, name, price)
    }
}

pub fn utc_date(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
}

#[allow(clippy::too_many_arguments)]
pub fn make_stay(y1: i32, m1: u32, d1: u32, y2: i32, m2: u32, d2: u32, rooms: u32) -> StayRequest {
    StayRequest::new(utc_date(y1, m1, d1), utc_date(y2, m2, d2), rooms)
}

pub fn make_review(user_name: &str, hotel_id: &str, rating: u8, comment: &str) -> Review {
    Review {
        id: None,
        user_id: format!("uid-{user_name}"),
        user_name: user_name.to_string(),
        hotel_id: hotel_id.to_string(),
        rating,
        comment: comment.to_string(),
        created_at: "2024-05-01T00:00:00Z".to_string(),
    }
}

// --- Mock collaborators ---

type FetchFn = Box<dyn Fn() -> Result<Vec<Hotel>> + Send + Sync>;

pub struct MockRecommendations {
    fetch_fn: Mutex<FetchFn>,
}

impl MockRecommendations {
    pub fn returning(f: impl Fn() -> Result<Vec<Hotel>> + Send + Sync + 'static) -> Self {
        Self {
            fetch_fn: Mutex::new(Box::new(f)),
        }
    }
}

#[async_trait]
impl RecommendationSource for MockRecommendations {
    async fn fetch_recommended(&self) -> Result<Vec<Hotel>> {
        let f = self.fetch_fn.lock().unwrap();
        f()
    }
}

type CreateBookingFn = Box<dyn Fn(&BookingRecord) -> Result<String> + Send + Sync>;

pub struct MockBookingStore {
    create_fn: Mutex<CreateBookingFn>,
    calls: AtomicUsize,
    last: Mutex<Option<BookingRecord>>,
}

impl MockBookingStore {
    pub fn returning(f: impl Fn(&BookingRecord) -> Result<String> + Send + Sync + 'static) -> Self {
        Self {
            create_fn: Mutex::new(Box::new(f)),
            calls: AtomicUsize::new(0),
            last: Mutex::new(None),
        }
    }

    /// Succeeds with a fixed id; `calls()` and `last_record()` expose what
    /// came in.
    pub fn recording() -> Self {
        Self::returning(|_| Ok("bk-0".into()))
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_record(&self) -> Option<BookingRecord> {
        self.last.lock().unwrap().clone()
    }
}

#[async_trait]
impl BookingStore for MockBookingStore {
    async fn create_booking(&self, record: &BookingRecord) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last.lock().unwrap() = Some(record.clone());
        let f = self.create_fn.lock().unwrap();
        f(record)
    }

    async fn bookings_for_user(&self, _user_id: &str) -> Result<Vec<BookingRecord>> {
        Ok(Vec::new())
    }
}

type AddReviewFn = Box<dyn Fn(&Review) -> Result<String> + Send + Sync>;

pub struct MockReviewStore {
    add_fn: Mutex<AddReviewFn>,
    calls: AtomicUsize,
    last: Mutex<Option<Review>>,
}

impl MockReviewStore {
    pub fn returning(f: impl Fn(&Review) -> Result<String> + Send + Sync + 'static) -> Self {
        Self {
            add_fn: Mutex::new(Box::new(f)),
            calls: AtomicUsize::new(0),
            last: Mutex::new(None),
        }
    }

    /// Succeeds with a fixed id; `calls()` and `last_review()` expose what
    /// came in.
    pub fn recording() -> Self {
        Self::returning(|_| Ok("rv-0".into()))
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_review(&self) -> Option<Review> {
        self.last.lock().unwrap().clone()
    }
}

#[async_trait]
impl ReviewStore for MockReviewStore {
    async fn add_review(&self, review: &Review) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last.lock().unwrap() = Some(review.clone());
        let f = self.add_fn.lock().unwrap();
        f(review)
    }

    async fn reviews_for_hotel(&self, _hotel_id: &str) -> Result<Vec<Review>> {
        Ok(Vec::new())
    }
}
