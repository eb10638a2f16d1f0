#![allow(clippy::cast_precision_loss)] // Night counts are far below f64's mantissa

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

const MS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// A prospective stay: check-in/check-out pair plus room count. Invalid
/// combinations are rejected at submit time, never silently corrected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StayRequest {
    pub check_in: DateTime<Utc>,
    pub check_out: DateTime<Utc>,
    pub rooms: u32,
}

impl StayRequest {
    pub fn new(check_in: DateTime<Utc>, check_out: DateTime<Utc>, rooms: u32) -> Self {
        Self {
            check_in,
            check_out,
            rooms,
        }
    }

    /// Nights stayed: ceiling of the span in whole days, clamped to a
    /// minimum of one night for same-day or inverted spans.
    pub fn nights(&self) -> i64 {
        let span_ms = (self.check_out - self.check_in).num_milliseconds();
        if span_ms <= 0 {
            return 1;
        }
        let whole = span_ms / MS_PER_DAY;
        if span_ms % MS_PER_DAY == 0 { whole } else { whole + 1 }
    }

    /// `nights * price * rooms`. Currency formatting is the caller's concern.
    pub fn total_cost(&self, price_per_night: f64) -> f64 {
        self.nights() as f64 * price_per_night * f64::from(self.rooms)
    }

    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        if self.check_out <= self.check_in {
            return Err(ValidationError::InvalidDateRange);
        }
        if self.rooms < 1 {
            return Err(ValidationError::InvalidRoomCount);
        }
        Ok(())
    }
}
