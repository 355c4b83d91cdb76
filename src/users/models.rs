use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub password_salt: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub weight: Option<f64>,
    pub height: Option<f64>,
    pub date_of_birth: Option<NaiveDate>,
    pub profile_picture_url: Option<String>,
    pub created_at: NaiveDateTime,
}

/// User as exposed over the API. Credential columns never leave the server.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub weight: Option<f64>,
    pub height: Option<f64>,
    pub date_of_birth: Option<NaiveDate>,
    pub profile_picture_url: Option<String>,
    pub created_at: NaiveDateTime,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        UserDto {
            id: user.id,
            username: user.username,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            weight: user.weight,
            height: user.height,
            date_of_birth: user.date_of_birth,
            profile_picture_url: user.profile_picture_url,
            created_at: user.created_at,
        }
    }
}
