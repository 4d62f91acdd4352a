//! Hotel service layer.
//!
//! # Purpose
//! Mediates between the HTTP handlers and the repository. Absence of a record is reported as
//! `None`/`false`, never as an error; only storage faults surface as [`StoreError`].
//!
//! # Notes
//! Update is a full replace of the mutable fields. There is no version check, so two concurrent
//! updates of the same hotel are last-writer-wins.
use crate::model::Hotel;
use crate::store::{HotelRepository, StoreError, StoreResult};
use std::sync::Arc;

#[derive(Clone)]
pub struct HotelService {
    repo: Arc<dyn HotelRepository + Send + Sync>,
}

impl HotelService {
    pub fn new(repo: Arc<dyn HotelRepository + Send + Sync>) -> Self {
        Self { repo }
    }

    pub async fn find_all(&self) -> StoreResult<Vec<Hotel>> {
        self.repo.find_all().await
    }

    pub async fn find_by_id(&self, id: i64) -> StoreResult<Option<Hotel>> {
        self.repo.find_by_id(id).await
    }

    /// Persist `hotel` as a new record, discarding any id the caller supplied.
    pub async fn create(&self, mut hotel: Hotel) -> StoreResult<Hotel> {
        hotel.id = None;
        let created = self.repo.save(hotel).await?;
        tracing::debug!(id = ?created.id, "hotel created");
        Ok(created)
    }

    /// Overwrite the mutable fields of hotel `id` with those of `new_hotel`.
    ///
    /// Returns `None` when no hotel has that id, including when it is deleted between the
    /// lookup and the write.
    pub async fn update(&self, id: i64, new_hotel: Hotel) -> StoreResult<Option<Hotel>> {
        let Some(mut existing) = self.repo.find_by_id(id).await? else {
            return Ok(None);
        };
        existing.replace_fields(new_hotel);
        match self.repo.save(existing).await {
            Ok(saved) => Ok(Some(saved)),
            Err(StoreError::NotFound(_)) => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// Delete hotel `id`. Returns `false` when it does not exist.
    pub async fn delete(&self, id: i64) -> StoreResult<bool> {
        let Some(existing) = self.repo.find_by_id(id).await? else {
            return Ok(false);
        };
        match self.repo.delete(&existing).await {
            Ok(()) => Ok(true),
            Err(StoreError::NotFound(_)) => Ok(false),
            Err(err) => Err(err),
        }
    }

    pub async fn health_check(&self) -> StoreResult<()> {
        self.repo.health_check().await
    }

    pub fn is_durable(&self) -> bool {
        self.repo.is_durable()
    }

    pub fn backend_name(&self) -> &'static str {
        self.repo.backend_name()
    }
}
