//! In-memory implementation of the hotel repository.
//!
//! # Purpose
//! This store implements `HotelRepository` entirely in memory using a `BTreeMap` guarded by
//! `tokio::sync::RwLock`. It exists for:
//! - local development and tests (no external dependencies)
//! - deployments where durability is not required
//!
//! # Durability and consistency
//! - **Not durable**: all state is lost on process restart.
//! - **Single-process consistency**: writes take the write lock, reads take the read lock.
//! - Ids come from a process-local counter starting at 1 and are never reused, even after
//!   the row holding an id is deleted.
//!
//! # Ordering
//! `find_all` returns hotels in ascending id order, which is also insertion order.
//!
//! # Metrics
//! This store updates the same counters/gauges as the Postgres backend so dashboards behave the
//! same regardless of the configured storage.
use super::{HotelRepository, StoreError, StoreResult};
use crate::model::Hotel;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Debug)]
struct HotelTable {
    next_id: i64,
    rows: BTreeMap<i64, Hotel>,
}

impl HotelTable {
    fn allocate_id(&mut self) -> i64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

/// In-memory hotel store.
///
/// The table is wrapped in `Arc<RwLock<...>>` so reads proceed concurrently and writes are
/// serialized, which keeps id allocation and insertion atomic.
pub struct InMemoryStore {
    table: Arc<RwLock<HotelTable>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            table: Arc::new(RwLock::new(HotelTable {
                next_id: 1,
                rows: BTreeMap::new(),
            })),
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HotelRepository for InMemoryStore {
    async fn find_all(&self) -> StoreResult<Vec<Hotel>> {
        Ok(self.table.read().await.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> StoreResult<Option<Hotel>> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn save(&self, mut hotel: Hotel) -> StoreResult<Hotel> {
        let mut table = self.table.write().await;
        match hotel.id {
            Some(id) => {
                let Some(row) = table.rows.get_mut(&id) else {
                    return Err(StoreError::NotFound(format!("hotel {id}")));
                };
                *row = hotel.clone();
                metrics::counter!("hotel_api_hotel_changes_total", "op" => "updated").increment(1);
            }
            None => {
                let id = table.allocate_id();
                hotel.id = Some(id);
                table.rows.insert(id, hotel.clone());
                metrics::counter!("hotel_api_hotel_changes_total", "op" => "created").increment(1);
                metrics::gauge!("hotel_api_hotels_total").set(table.rows.len() as f64);
            }
        }
        Ok(hotel)
    }

    async fn delete(&self, hotel: &Hotel) -> StoreResult<()> {
        let Some(id) = hotel.id else {
            return Err(StoreError::NotFound("hotel without id".into()));
        };
        let mut table = self.table.write().await;
        if table.rows.remove(&id).is_none() {
            return Err(StoreError::NotFound(format!("hotel {id}")));
        }
        metrics::counter!("hotel_api_hotel_changes_total", "op" => "deleted").increment(1);
        metrics::gauge!("hotel_api_hotels_total").set(table.rows.len() as f64);
        Ok(())
    }

    async fn health_check(&self) -> StoreResult<()> {
        // Always healthy while the process is running.
        Ok(())
    }

    fn is_durable(&self) -> bool {
        false
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
