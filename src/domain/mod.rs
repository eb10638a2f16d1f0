pub mod booking;
pub mod filter;
pub mod listing;
pub mod profile;
pub mod review;
pub mod stay;
