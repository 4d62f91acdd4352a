use hotel_api::app::{AppState, build_router};
use hotel_api::service::HotelService;
use hotel_api::store::HotelRepository;
use hotel_api::store::memory::InMemoryStore;
use std::sync::Arc;

pub type App = axum::routing::RouterIntoService<axum::body::Body, ()>;

#[allow(dead_code)]
pub fn app_with_store(store: Arc<dyn HotelRepository + Send + Sync>) -> App {
    let state = AppState {
        api_version: "v1".to_string(),
        hotels: HotelService::new(store),
    };
    build_router(state).into_service()
}

#[allow(dead_code)]
pub fn memory_app() -> App {
    app_with_store(Arc::new(InMemoryStore::new()))
}

pub async fn read_body(response: axum::response::Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body")
        .to_vec()
}

#[allow(dead_code)]
pub async fn read_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = read_body(response).await;
    serde_json::from_slice(&bytes).expect("json")
}
