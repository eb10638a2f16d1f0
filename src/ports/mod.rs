pub mod auth;
pub mod recommendations;
pub mod store;
