use crate::domain::booking::BookingRecord;
use crate::domain::profile::{UserProfile, validate_name};
use crate::error::{Result, StaybookError};
use crate::ports::auth::AuthProvider;
use crate::ports::store::{BookingStore, ProfileStore};

/// State behind the profile screen: the user's document plus their booking
/// history. Either half failing to load leaves that half empty rather than
/// failing the screen.
#[derive(Debug)]
pub struct ProfileScreen {
    uid: String,
    profile: Option<UserProfile>,
    bookings: Vec<BookingRecord>,
}

impl ProfileScreen {
    pub async fn load(
        auth: &dyn AuthProvider,
        profiles: &dyn ProfileStore,
        bookings: &dyn BookingStore,
    ) -> Result<Self> {
        let user = auth.current_user().ok_or(StaybookError::AuthRequired)?;

        let profile = match profiles.get_profile(&user.uid).await {
            Ok(profile) => Some(profile),
            Err(err) => {
                tracing::warn!("Profile load failed for {}: {err}", user.uid);
                None
            }
        };

        let history = match bookings.bookings_for_user(&user.uid).await {
            Ok(history) => history,
            Err(err) => {
                tracing::warn!("Booking history load failed for {}: {err}", user.uid);
                Vec::new()
            }
        };

        Ok(Self {
            uid: user.uid,
            profile,
            bookings: history,
        })
    }

    pub fn uid(&self) -> &str {
        &self.uid
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }

    pub fn bookings(&self) -> &[BookingRecord] {
        &self.bookings
    }

    /// Rename the profile: local validation first, then the store, then the
    /// local copy.
    pub async fn rename(&mut self, profiles: &dyn ProfileStore, new_name: &str) -> Result<()> {
        let trimmed = new_name.trim();
        validate_name(trimmed)?;
        profiles.update_name(&self.uid, trimmed).await?;
        if let Some(profile) = self.profile.as_mut() {
            profile.name = trimmed.to_string();
        }
        Ok(())
    }
}
