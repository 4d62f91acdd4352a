//! Hotel API HTTP module.
//!
//! # Purpose
//! Exposes route handler modules, the shared error type, and the OpenAPI document.
pub mod error;
pub mod hotels;
pub mod openapi;
pub mod system;
pub mod types;
