//! Hotel API service library crate.
//!
//! # Purpose
//! Exposes the HTTP API surface, service layer, configuration, and storage
//! implementations for use by the binary and tests.
//!
//! # Notes
//! Requests flow handler → [`service::HotelService`] → [`store::HotelRepository`].
pub mod api;
pub mod app;
pub mod config;
pub mod model;
pub mod observability;
pub mod service;
pub mod store;
