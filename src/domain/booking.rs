use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::listing::Hotel;
use super::stay::StayRequest;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    #[default]
    Confirmed,
    Cancelled,
}

/// The document handed to the persistence collaborator once a stay has been
/// validated. Immutable from the client's perspective after creation; the
/// backend may later flip the status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingRecord {
    /// Assigned by the store on creation.
    #[serde(default)]
    pub id: Option<String>,
    pub user_id: String,
    pub hotel_id: String,
    pub hotel_name: String,
    pub check_in: String,
    pub check_out: String,
    pub rooms: u32,
    pub total_cost: f64,
    pub status: BookingStatus,
    pub created_at: String,
}

impl BookingRecord {
    /// Build a record from a validated stay. Callers must run
    /// [`StayRequest::validate`] first; this snapshot does not re-check.
    pub fn new(user_id: &str, hotel: &Hotel, stay: &StayRequest) -> Self {
        Self {
            id: None,
            user_id: user_id.to_string(),
            hotel_id: hotel.id.clone(),
            hotel_name: hotel.name.clone(),
            check_in: stay.check_in.to_rfc3339(),
            check_out: stay.check_out.to_rfc3339(),
            rooms: stay.rooms,
            total_cost: stay.total_cost(hotel.price_per_night),
            status: BookingStatus::Confirmed,
            created_at: Utc::now().to_rfc3339(),
        }
    }
}

impl std::fmt::Display for BookingRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "# {}", self.hotel_name)?;
        writeln!(f, "Check-in: {}", self.check_in)?;
        writeln!(f, "Check-out: {}", self.check_out)?;
        writeln!(f, "Rooms: {}", self.rooms)?;
        writeln!(f, "Total: ${:.0}", self.total_cost)?;
        write!(
            f,
            "Status: {}",
            match self.status {
                BookingStatus::Confirmed => "confirmed",
                BookingStatus::Cancelled => "cancelled",
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{make_hotel, make_stay};

    #[test]
    fn record_snapshots_hotel_and_cost() {
        let hotel = make_hotel("h7", "Ocean View Resort", 180.0);
        let stay = make_stay(2024, 5, 10, 2024, 5, 13, 2);
        let record = BookingRecord::new("user-1", &hotel, &stay);

        assert_eq!(record.user_id, "user-1");
        assert_eq!(record.hotel_id, "h7");
        assert_eq!(record.hotel_name, "Ocean View Resort");
        assert_eq!(record.rooms, 2);
        assert!((record.total_cost - 3.0 * 180.0 * 2.0).abs() < f64::EPSILON);
        assert_eq!(record.status, BookingStatus::Confirmed);
        assert!(record.id.is_none());
    }

    #[test]
    fn dates_serialize_as_rfc3339() {
        let hotel = make_hotel("h1", "Test", 100.0);
        let stay = make_stay(2024, 5, 10, 2024, 5, 12, 1);
        let record = BookingRecord::new("u", &hotel, &stay);
        assert!(record.check_in.starts_with("2024-05-10T00:00:00"));
        assert!(record.check_out.starts_with("2024-05-12T00:00:00"));
    }

    #[test]
    fn status_serializes_lowercase() {
        let json = serde_json::to_string(&BookingStatus::Confirmed).unwrap();
        assert_eq!(json, "\"confirmed\"");
    }

    #[test]
    fn display_lists_the_booking() {
        let hotel = make_hotel("h1", "Mountain Lodge", 320.0);
        let stay = make_stay(2024, 5, 10, 2024, 5, 12, 1);
        let record = BookingRecord::new("u", &hotel, &stay);
        let s = record.to_string();
        assert!(s.contains("# Mountain Lodge"));
        assert!(s.contains("Rooms: 1"));
        assert!(s.contains("Total: $640"));
        assert!(s.contains("Status: confirmed"));
    }
}
