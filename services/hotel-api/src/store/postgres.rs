//! Postgres-backed implementation of the hotel repository.
//!
//! # What this module is
//! This module implements `HotelRepository` using Postgres (via `sqlx`) as the durable backing
//! store for hotel records. Every record lives in the `hotels` table; `id` is a `BIGSERIAL`
//! primary key so Postgres assigns identifiers on insert.
//!
//! # Key invariants
//! - Ids are assigned only by the database sequence; callers never choose an id.
//! - `save` with an id only updates an existing row. It never inserts with an explicit id,
//!   which would leave the sequence behind the table.
//! - Listing is ordered by id.
//!
//! # Concurrency model
//! - The store is shared across async handlers; `sqlx::PgPool` manages concurrency.
//! - Each method acquires a pooled connection; pool sizing controls throughput.
//! - There is no row versioning. Two concurrent overwrites of the same id are last-writer-wins.
//!
//! # Operational notes
//! - Migrations are executed at connect time via `sqlx::migrate!("./migrations")` so handlers can
//!   assume the schema exists.
//! - Pool acquire/connect timeouts are explicit so requests fail fast when the database is down.
//!
//! # Security notes
//! - Database URLs may contain credentials; avoid logging them.
//! - All statements are static and parameterized.
use super::{HotelRepository, StoreError, StoreResult};
use crate::config::PostgresConfig;
use crate::model::Hotel;
use async_trait::async_trait;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::{FromRow, PgPool};
use std::str::FromStr;
use std::time::Duration;

/// Durable hotel store backed by Postgres.
///
/// # Errors
/// - Connection and query failures are surfaced as [`StoreError::Unexpected`].
///
/// # Example
/// ```rust,no_run
/// use hotel_api::config::PostgresConfig;
/// use hotel_api::store::postgres::PostgresStore;
///
/// async fn open(pg: PostgresConfig) {
///     let _ = PostgresStore::connect(&pg).await;
/// }
/// ```
pub struct PostgresStore {
    pool: PgPool,
}

/// Row shape for the `hotels` table.
///
/// Kept separate from [`Hotel`] so column names and storage types stay local to this module.
#[derive(Debug, Clone, FromRow)]
struct DbHotel {
    id: i64,
    name: String,
    address: String,
    rating: f64,
    rooms_available: i32,
    price_per_night: f64,
}

impl From<DbHotel> for Hotel {
    fn from(row: DbHotel) -> Self {
        Hotel {
            id: Some(row.id),
            name: row.name,
            address: row.address,
            rating: row.rating,
            rooms_available: row.rooms_available,
            price_per_night: row.price_per_night,
        }
    }
}

const SELECT_COLUMNS: &str =
    "SELECT id, name, address, rating, rooms_available, price_per_night FROM hotels";

impl PostgresStore {
    /// Connect to Postgres and apply embedded migrations.
    ///
    /// # Errors
    /// - Connection, migration, or pool setup failures.
    ///
    /// # Security notes
    /// - Avoid logging `pg.url` as it may contain credentials.
    pub async fn connect(pg: &PostgresConfig) -> StoreResult<Self> {
        Self::connect_internal(pg, true).await
    }

    /// Connect to Postgres without running migrations.
    ///
    /// Intended for tests that manage the schema themselves.
    #[cfg(any(test, feature = "pg-tests"))]
    pub async fn connect_without_migrations(pg: &PostgresConfig) -> StoreResult<Self> {
        Self::connect_internal(pg, false).await
    }

    async fn connect_internal(pg: &PostgresConfig, run_migrations: bool) -> StoreResult<Self> {
        let connect_options = PgConnectOptions::from_str(&pg.url)?;
        let pool = tokio::time::timeout(
            Duration::from_millis(pg.connect_timeout_ms),
            PgPoolOptions::new()
                .max_connections(pg.max_connections)
                .acquire_timeout(Duration::from_millis(pg.acquire_timeout_ms))
                .connect_with(connect_options),
        )
        .await
        .map_err(|_| StoreError::Unexpected(anyhow::anyhow!("postgres connect timed out")))??;

        if run_migrations {
            // Fail startup rather than serving against a partial schema.
            sqlx::migrate!("./migrations").run(&pool).await?;
        }

        let store = Self { pool };
        store.refresh_counts().await?;
        tracing::info!(backend = store.backend_name(), "hotel store connected");
        Ok(store)
    }

    async fn refresh_counts(&self) -> StoreResult<()> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM hotels")
            .fetch_one(&self.pool)
            .await?;
        metrics::gauge!("hotel_api_hotels_total").set(total as f64);
        Ok(())
    }

    /// Refresh the gauge after a committed write; the write result stands either way.
    async fn refresh_counts_after_write(&self) {
        if let Err(err) = self.refresh_counts().await {
            tracing::warn!(error = %err, "failed to refresh hotel count gauge");
        }
    }
}

#[async_trait]
impl HotelRepository for PostgresStore {
    async fn find_all(&self) -> StoreResult<Vec<Hotel>> {
        let rows = sqlx::query_as::<_, DbHotel>(&format!("{SELECT_COLUMNS} ORDER BY id"))
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(Hotel::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> StoreResult<Option<Hotel>> {
        let row = sqlx::query_as::<_, DbHotel>(&format!("{SELECT_COLUMNS} WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(Hotel::from))
    }

    async fn save(&self, hotel: Hotel) -> StoreResult<Hotel> {
        match hotel.id {
            None => {
                let row = sqlx::query_as::<_, DbHotel>(
                    r#"INSERT INTO hotels (name, address, rating, rooms_available, price_per_night)
                       VALUES ($1, $2, $3, $4, $5)
                       RETURNING id, name, address, rating, rooms_available, price_per_night"#,
                )
                .bind(&hotel.name)
                .bind(&hotel.address)
                .bind(hotel.rating)
                .bind(hotel.rooms_available)
                .bind(hotel.price_per_night)
                .fetch_one(&self.pool)
                .await?;
                metrics::counter!("hotel_api_hotel_changes_total", "op" => "created").increment(1);
                self.refresh_counts_after_write().await;
                Ok(row.into())
            }
            Some(id) => {
                let row = sqlx::query_as::<_, DbHotel>(
                    r#"UPDATE hotels
                       SET name = $1, address = $2, rating = $3, rooms_available = $4, price_per_night = $5, updated_at = now()
                       WHERE id = $6
                       RETURNING id, name, address, rating, rooms_available, price_per_night"#,
                )
                .bind(&hotel.name)
                .bind(&hotel.address)
                .bind(hotel.rating)
                .bind(hotel.rooms_available)
                .bind(hotel.price_per_night)
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
                match row {
                    Some(row) => {
                        metrics::counter!("hotel_api_hotel_changes_total", "op" => "updated")
                            .increment(1);
                        Ok(row.into())
                    }
                    None => Err(StoreError::NotFound(format!("hotel {id}"))),
                }
            }
        }
    }

    async fn delete(&self, hotel: &Hotel) -> StoreResult<()> {
        let Some(id) = hotel.id else {
            return Err(StoreError::NotFound("hotel without id".into()));
        };
        let removed = sqlx::query("DELETE FROM hotels WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if removed.rows_affected() == 0 {
            return Err(StoreError::NotFound(format!("hotel {id}")));
        }
        metrics::counter!("hotel_api_hotel_changes_total", "op" => "deleted").increment(1);
        self.refresh_counts_after_write().await;
        Ok(())
    }

    async fn health_check(&self) -> StoreResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    fn is_durable(&self) -> bool {
        true
    }

    fn backend_name(&self) -> &'static str {
        "postgres"
    }
}
