//! Hotel API data model module.
//!
//! # Purpose
//! Re-exports the hotel record used by the API and store layers.
mod hotel;

pub use hotel::Hotel;
