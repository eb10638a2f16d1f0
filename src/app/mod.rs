pub mod booking;
pub mod explore;
pub mod profile;
pub mod reviews;
