//! Hotel persistence boundary.
//!
//! # Purpose
//! Defines the `HotelRepository` trait the service layer depends on, the shared
//! error type, and the memory and Postgres implementations.
use crate::model::Hotel;
use async_trait::async_trait;
use thiserror::Error;

pub mod memory;
pub mod postgres;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        StoreError::Unexpected(err.into())
    }
}

impl From<sqlx::migrate::MigrateError> for StoreError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        StoreError::Unexpected(err.into())
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Storage operations for hotel records.
///
/// `save` inserts when `hotel.id` is `None` and overwrites the existing row
/// otherwise. Overwriting or deleting a row that does not exist returns
/// [`StoreError::NotFound`].
#[async_trait]
pub trait HotelRepository: Send + Sync {
    async fn find_all(&self) -> StoreResult<Vec<Hotel>>;
    async fn find_by_id(&self, id: i64) -> StoreResult<Option<Hotel>>;
    async fn save(&self, hotel: Hotel) -> StoreResult<Hotel>;
    async fn delete(&self, hotel: &Hotel) -> StoreResult<()>;

    async fn health_check(&self) -> StoreResult<()>;
    fn is_durable(&self) -> bool;
    fn backend_name(&self) -> &'static str;
}
