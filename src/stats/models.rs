use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Summary of a set of activities, as shown on the dashboard.
/// Pace values are minutes per kilometer, speed is km/h.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ActivityStats {
    pub total_activities: u32,
    pub total_distance: f64,
    pub total_duration: i64,
    pub average_pace: f64,
    pub average_speed: f64,
    pub longest_run: f64,
    pub fastest_pace: f64,
}
