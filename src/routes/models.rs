use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A saved running route. Coordinates, when present, live in `route_data`
/// as opaque JSON drawn by the client.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Route {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub distance: f64,
    pub start_location: Option<String>,
    pub end_location: Option<String>,
    pub is_loop: bool,
    pub route_data: Option<String>,
    pub elevation_gain: Option<f64>,
    pub elevation_loss: Option<f64>,
    pub user_id: Option<Uuid>,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NewRoute {
    pub name: String,
    pub description: Option<String>,
    pub distance: f64,
    pub start_location: Option<String>,
    pub end_location: Option<String>,
    #[serde(default)]
    pub is_loop: bool,
    pub route_data: Option<String>,
    pub elevation_gain: Option<f64>,
    pub elevation_loss: Option<f64>,
    pub user_id: Option<Uuid>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateRoute {
    pub name: Option<String>,
    pub description: Option<String>,
    pub distance: Option<f64>,
    pub start_location: Option<String>,
    pub end_location: Option<String>,
    pub is_loop: Option<bool>,
    pub route_data: Option<String>,
    pub elevation_gain: Option<f64>,
    pub elevation_loss: Option<f64>,
    pub user_id: Option<Uuid>,
}
