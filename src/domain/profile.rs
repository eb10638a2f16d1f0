use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

pub const MIN_NAME_LEN: usize = 2;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub created_at: String,
    pub updated_at: String,
}

pub fn validate_name(name: &str) -> std::result::Result<(), ValidationError> {
    if name.trim().chars().count() < MIN_NAME_LEN {
        return Err(ValidationError::InvalidName {
            min_len: MIN_NAME_LEN,
        });
    }
    Ok(())
}
