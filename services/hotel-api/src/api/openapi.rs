//! OpenAPI schema aggregation for the hotel API.
use crate::api::{
    hotels, system,
    types::{ErrorResponse, HealthStatus, SystemInfo},
};
use crate::model::Hotel;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "hotel-api",
        version = "v1",
        description = "Hotel records HTTP API"
    ),
    paths(
        system::system_info,
        system::system_health,
        hotels::list_hotels,
        hotels::get_hotel,
        hotels::create_hotel,
        hotels::update_hotel,
        hotels::delete_hotel
    ),
    components(schemas(Hotel, SystemInfo, HealthStatus, ErrorResponse)),
    tags(
        (name = "system", description = "System and health endpoints"),
        (name = "hotels", description = "Hotel management")
    )
)]
pub struct ApiDoc;
