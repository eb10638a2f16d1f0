use chrono::{DateTime, TimeDelta, Utc};

use crate::domain::booking::BookingRecord;
use crate::domain::listing::Hotel;
use crate::domain::stay::StayRequest;
use crate::error::{Result, StaybookError};
use crate::ports::auth::AuthProvider;
use crate::ports::store::BookingStore;

/// Where a booking screen instance is in its lifecycle. Edits never leave
/// `Idle`; only a submit moves the machine, and a failure returns control
/// to the user for a manual retry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingPhase {
    Idle,
    Submitting,
    Confirmed { booking_id: String },
    Failed { message: String },
}

/// Per-hotel booking flow: stay fields plus the submission state machine.
pub struct BookingFlow {
    hotel: Hotel,
    check_in: DateTime<Utc>,
    check_out: DateTime<Utc>,
    rooms: u32,
    phase: BookingPhase,
}

impl BookingFlow {
    /// Defaults: check-in now, check-out tomorrow, one room.
    pub fn new(hotel: Hotel, now: DateTime<Utc>) -> Self {
        Self {
            hotel,
            check_in: now,
            check_out: now + TimeDelta::days(1),
            rooms: 1,
            phase: BookingPhase::Idle,
        }
    }

    pub fn hotel(&self) -> &Hotel {
        &self.hotel
    }

    pub fn phase(&self) -> &BookingPhase {
        &self.phase
    }

    pub fn rooms(&self) -> u32 {
        self.rooms
    }

    // Edits are not validated here; validation runs lazily at submit time.

    pub fn set_check_in(&mut self, date: DateTime<Utc>) {
        self.check_in = date;
    }

    pub fn set_check_out(&mut self, date: DateTime<Utc>) {
        self.check_out = date;
    }

    pub fn add_room(&mut self) {
        self.rooms += 1;
    }

    pub fn remove_room(&mut self) {
        self.rooms = self.rooms.saturating_sub(1).max(1);
    }

    pub fn stay(&self) -> StayRequest {
        StayRequest::new(self.check_in, self.check_out, self.rooms)
    }

    pub fn nights(&self) -> i64 {
        self.stay().nights()
    }

    pub fn total_cost(&self) -> f64 {
        self.stay().total_cost(self.hotel.price_per_night)
    }

    /// Validate and hand the booking to the persistence collaborator.
    ///
    /// Local rejections (missing auth, invalid stay) abort before any
    /// network attempt and leave the phase untouched. A collaborator
    /// failure lands in `Failed` with its message verbatim; submitting
    /// again retries. No automatic retry, no backoff.
    pub async fn submit(
        &mut self,
        auth: &dyn AuthProvider,
        store: &dyn BookingStore,
    ) -> Result<String> {
        let user = auth.current_user().ok_or(StaybookError::AuthRequired)?;

        let stay = self.stay();
        stay.validate()?;

        self.phase = BookingPhase::Submitting;
        let record = BookingRecord::new(&user.uid, &self.hotel, &stay);
        tracing::info!(
            hotel = %self.hotel.id,
            nights = stay.nights(),
            rooms = stay.rooms,
            "Submitting booking"
        );

        match store.create_booking(&record).await {
            Ok(booking_id) => {
                self.phase = BookingPhase::Confirmed {
                    booking_id: booking_id.clone(),
                };
                Ok(booking_id)
            }
            Err(err) => {
                let message = err.to_string();
                self.phase = BookingPhase::Failed {
                    message: message.clone(),
                };
                Err(StaybookError::Collaborator { message })
            }
        }
    }
}
