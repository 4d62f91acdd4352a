//! Hotel API handlers.
//!
//! # Purpose
//! Maps the five hotel REST operations onto [`HotelService`](crate::service::HotelService)
//! calls and translates the outcomes to status codes.
//!
//! # Notes
//! Missing hotels answer 404 with an empty body. Undecodable paths or bodies answer 400 with
//! the structured error body; storage faults answer 500.
use crate::api::error::{ApiError, api_internal, api_validation_error};
use crate::app::AppState;
use crate::model::Hotel;
use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};

pub const HOTELS_BASE_PATH: &str = "/api/hotels";

fn hotel_location(id: Option<i64>) -> String {
    match id {
        Some(id) => format!("{HOTELS_BASE_PATH}/{id}"),
        None => HOTELS_BASE_PATH.to_string(),
    }
}

fn hotel_id(path: Result<Path<i64>, PathRejection>) -> Result<i64, ApiError> {
    path.map(|Path(id)| id)
        .map_err(|rejection| api_validation_error(&rejection.body_text()))
}

fn hotel_body(body: Result<Json<Hotel>, JsonRejection>) -> Result<Hotel, ApiError> {
    body.map(|Json(hotel)| hotel)
        .map_err(|rejection| api_validation_error(&rejection.body_text()))
}

#[utoipa::path(
    get,
    path = "/api/hotels",
    tag = "hotels",
    responses(
        (status = 200, description = "List all hotels", body = [Hotel])
    )
)]
pub(crate) async fn list_hotels(State(state): State<AppState>) -> Result<Json<Vec<Hotel>>, ApiError> {
    let hotels = state
        .hotels
        .find_all()
        .await
        .map_err(|err| api_internal("failed to list hotels", &err))?;
    Ok(Json(hotels))
}

#[utoipa::path(
    get,
    path = "/api/hotels/{id}",
    tag = "hotels",
    params(
        ("id" = i64, Path, description = "Hotel identifier")
    ),
    responses(
        (status = 200, description = "Fetch hotel", body = Hotel),
        (status = 404, description = "Hotel not found")
    )
)]
pub(crate) async fn get_hotel(
    path: Result<Path<i64>, PathRejection>,
    State(state): State<AppState>,
) -> Result<Response, ApiError> {
    let id = hotel_id(path)?;
    match state.hotels.find_by_id(id).await {
        Ok(Some(hotel)) => Ok(Json(hotel).into_response()),
        Ok(None) => Ok(StatusCode::NOT_FOUND.into_response()),
        Err(err) => Err(api_internal("failed to fetch hotel", &err)),
    }
}

#[utoipa::path(
    post,
    path = "/api/hotels",
    tag = "hotels",
    request_body = Hotel,
    responses(
        (status = 201, description = "Hotel created", body = Hotel,
            headers(("location" = String, description = "Path of the created hotel"))),
        (status = 400, description = "Malformed hotel body", body = crate::api::types::ErrorResponse)
    )
)]
pub(crate) async fn create_hotel(
    State(state): State<AppState>,
    body: Result<Json<Hotel>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let hotel = hotel_body(body)?;
    let created = state
        .hotels
        .create(hotel)
        .await
        .map_err(|err| api_internal("failed to create hotel", &err))?;
    let location = hotel_location(created.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(created),
    ))
}

#[utoipa::path(
    put,
    path = "/api/hotels/{id}",
    tag = "hotels",
    params(
        ("id" = i64, Path, description = "Hotel identifier")
    ),
    request_body = Hotel,
    responses(
        (status = 200, description = "Hotel replaced", body = Hotel),
        (status = 400, description = "Malformed hotel body", body = crate::api::types::ErrorResponse),
        (status = 404, description = "Hotel not found")
    )
)]
pub(crate) async fn update_hotel(
    path: Result<Path<i64>, PathRejection>,
    State(state): State<AppState>,
    body: Result<Json<Hotel>, JsonRejection>,
) -> Result<Response, ApiError> {
    let id = hotel_id(path)?;
    let hotel = hotel_body(body)?;
    match state.hotels.update(id, hotel).await {
        Ok(Some(updated)) => Ok(Json(updated).into_response()),
        Ok(None) => Ok(StatusCode::NOT_FOUND.into_response()),
        Err(err) => Err(api_internal("failed to update hotel", &err)),
    }
}

#[utoipa::path(
    delete,
    path = "/api/hotels/{id}",
    tag = "hotels",
    params(
        ("id" = i64, Path, description = "Hotel identifier")
    ),
    responses(
        (status = 204, description = "Hotel deleted"),
        (status = 404, description = "Hotel not found")
    )
)]
pub(crate) async fn delete_hotel(
    path: Result<Path<i64>, PathRejection>,
    State(state): State<AppState>,
) -> Result<StatusCode, ApiError> {
    let id = hotel_id(path)?;
    match state.hotels.delete(id).await {
        Ok(true) => Ok(StatusCode::NO_CONTENT),
        Ok(false) => Ok(StatusCode::NOT_FOUND),
        Err(err) => Err(api_internal("failed to delete hotel", &err)),
    }
}
