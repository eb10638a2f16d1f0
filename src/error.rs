use thiserror::Error;

/// Failures detected locally, before any collaborator is contacted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("check-out date must be after check-in date")]
    InvalidDateRange,

    #[error("at least one room must be selected")]
    InvalidRoomCount,

    #[error("please select a star rating")]
    NoRatingSelected,

    #[error("review comment must be at least {min_len} characters")]
    EmptyComment { min_len: usize },

    #[error("name must be at least {min_len} characters")]
    InvalidName { min_len: usize },
}

#[derive(Error, Debug)]
pub enum StaybookError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("sign in required")]
    AuthRequired,

    /// Any failure reported by a backend collaborator, message passed
    /// through verbatim for display.
    #[error("{message}")]
    Collaborator { message: String },

    #[error("profile not found for user {uid}")]
    ProfileNotFound { uid: String },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yml::Error),

    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),
}

impl StaybookError {
    pub fn collaborator(message: impl Into<String>) -> Self {
        Self::Collaborator {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, StaybookError>;
