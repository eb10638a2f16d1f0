use chrono::Utc;

use crate::domain::review::{Review, ReviewDraft};
use crate::error::{Result, StaybookError};
use crate::ports::auth::AuthProvider;
use crate::ports::store::ReviewStore;

/// Draft state behind the add-review screen for one hotel.
pub struct ReviewComposer {
    hotel_id: String,
    draft: ReviewDraft,
}

impl ReviewComposer {
    pub fn new(hotel_id: impl Into<String>) -> Self {
        Self {
            hotel_id: hotel_id.into(),
            draft: ReviewDraft::default(),
        }
    }

    pub fn draft(&self) -> &ReviewDraft {
        &self.draft
    }

    pub fn set_rating(&mut self, rating: u8) {
        self.draft.rating = rating;
    }

    pub fn set_comment(&mut self, comment: impl Into<String>) {
        self.draft.comment = comment.into();
    }

    /// Validate locally, then hand the review to the store. The comment is
    /// submitted trimmed; accounts without a display name post as
    /// "Anonymous".
    pub async fn submit(
        &mut self,
        auth: &dyn AuthProvider,
        store: &dyn ReviewStore,
    ) -> Result<String> {
        let user = auth.current_user().ok_or(StaybookError::AuthRequired)?;
        self.draft.validate()?;

        let review = Review {
            id: None,
            user_id: user.uid.clone(),
            user_name: user.display_name_or_anonymous().to_string(),
            hotel_id: self.hotel_id.clone(),
            rating: self.draft.rating,
            comment: self.draft.comment.trim().to_string(),
            created_at: Utc::now().to_rfc3339(),
        };

        match store.add_review(&review).await {
            Ok(review_id) => {
                tracing::info!(hotel = %self.hotel_id, "Review submitted");
                Ok(review_id)
            }
            Err(err) => Err(StaybookError::collaborator(err.to_string())),
        }
    }

    /// Load this hotel's reviews in the store's order (newest first). No
    /// sign-in required; reading is open to everyone.
    pub async fn reviews_for(&self, store: &dyn ReviewStore) -> Result<Vec<Review>> {
        store
            .reviews_for_hotel(&self.hotel_id)
            .await
            .map_err(|err| StaybookError::collaborator(err.to_string()))
    }
}
