use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Shortest comment the composer accepts, after trimming.
pub const MIN_COMMENT_LEN: usize = 10;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    #[serde(default)]
    pub id: Option<String>,
    pub user_id: String,
    pub user_name: String,
    pub hotel_id: String,
    pub rating: u8,
    pub comment: String,
    pub created_at: String,
}

/// What the user has typed so far. Validated locally before any submission
/// attempt.
#[derive(Debug, Clone, Default)]
pub struct ReviewDraft {
    pub rating: u8,
    pub comment: String,
}

impl ReviewDraft {
    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        if self.rating == 0 {
            return Err(ValidationError::NoRatingSelected);
        }
        if self.comment.trim().chars().count() < MIN_COMMENT_LEN {
            return Err(ValidationError::EmptyComment {
                min_len: MIN_COMMENT_LEN,
            });
        }
        Ok(())
    }
}

/// Mean of the given reviews' ratings, `None` when there are none.
pub fn average_rating(reviews: &[Review]) -> Option<f64> {
    if reviews.is_empty() {
        return None;
    }
    let sum: u32 = reviews.iter().map(|r| u32::from(r.rating)).sum();
    #[allow(clippy::cast_precision_loss)]
    let count = reviews.len() as f64;
    Some(f64::from(sum) / count)
}

impl std::fmt::Display for Review {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "**{}** ({}) - {}*", self.user_name, self.created_at, self.rating)?;
        write!(f, "{}", self.comment)
    }
}
