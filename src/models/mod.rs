//! Data models for the campus backend.

pub mod profile;
pub mod role;

pub use profile::{display_date, parse_timestamp, Affiliation, ProfileDecodeError, UserProfile};
pub use role::Role;
