use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, sqlx::FromRow, utoipa::ToSchema)]
pub struct Activity {
    pub id: Uuid,
    pub date: NaiveDateTime,
    pub distance: f64,
    pub duration: i32,
    pub notes: Option<String>,
    pub weather_conditions: Option<String>,
    pub temperature: Option<f64>,
    pub user_id: Option<Uuid>,
    pub route_id: Option<Uuid>,
    pub created_at: NaiveDateTime,
}

impl Activity {
    /// Minutes per kilometer, only defined for a run that actually covered
    /// ground and took time.
    pub fn pace(&self) -> Option<f64> {
        if self.distance > 0.0 && self.duration > 0 {
            Some(round2(self.duration as f64 / 60.0 / self.distance))
        } else {
            None
        }
    }

    /// Kilometers per hour.
    pub fn speed(&self) -> Option<f64> {
        if self.duration > 0 {
            Some(round2(self.distance / (self.duration as f64 / 3600.0)))
        } else {
            None
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ActivityDto {
    pub id: Uuid,
    pub date: NaiveDateTime,
    pub distance: f64,
    pub duration: i32,
    pub pace: Option<f64>,
    pub speed: Option<f64>,
    pub notes: Option<String>,
    pub weather_conditions: Option<String>,
    pub temperature: Option<f64>,
    pub user_id: Option<Uuid>,
    pub route_id: Option<Uuid>,
    pub created_at: NaiveDateTime,
}

impl From<Activity> for ActivityDto {
    fn from(activity: Activity) -> Self {
        ActivityDto {
            pace: activity.pace(),
            speed: activity.speed(),
            id: activity.id,
            date: activity.date,
            distance: activity.distance,
            duration: activity.duration,
            notes: activity.notes,
            weather_conditions: activity.weather_conditions,
            temperature: activity.temperature,
            user_id: activity.user_id,
            route_id: activity.route_id,
            created_at: activity.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NewActivity {
    pub date: NaiveDateTime,
    pub distance: f64,
    pub duration: i32,
    pub notes: Option<String>,
    pub weather_conditions: Option<String>,
    pub temperature: Option<f64>,
    pub user_id: Option<Uuid>,
    pub route_id: Option<Uuid>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateActivity {
    pub date: Option<NaiveDateTime>,
    pub distance: Option<f64>,
    pub duration: Option<i32>,
    pub notes: Option<String>,
    pub weather_conditions: Option<String>,
    pub temperature: Option<f64>,
    pub user_id: Option<Uuid>,
    pub route_id: Option<Uuid>,
}
