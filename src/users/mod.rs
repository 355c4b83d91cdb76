pub mod models;

use actix_web::{get, web, HttpResponse, Responder};
use models::{User, UserDto};
use sqlx::PgPool;
use tracing::error;
use uuid::Uuid;

#[utoipa::path(
    get,
    path = "/users/:user_id",
    params(
        ("user_id" = String, description = "User ID", example = "123e4567-e89b-12d3-a456-426614174000")
    ),
    responses(
        (status = 200, description = "Get user from path", body = UserDto, content_type = "application/json"),
        (status = 404, description = "User not found")
    )
)]
#[get("/users/{user_id}")]
pub async fn get_user(path: web::Path<String>, db: web::Data<PgPool>) -> impl Responder {
    let user_id = match Uuid::parse_str(&path.into_inner()) {
        Ok(id) => id,
        Err(_) => return HttpResponse::BadRequest().finish(),
    };

    match sqlx::query_as::<_, User>("SELECT u.* FROM users u WHERE u.id = $1")
        .bind(user_id)
        .fetch_one(db.get_ref())
        .await
    {
        Ok(user) => HttpResponse::Ok().json(UserDto::from(user)),
        Err(sqlx::Error::RowNotFound) => HttpResponse::NotFound().body("User not found"),
        Err(e) => {
            error!("Error fetching user {}: {}", user_id, e);
            HttpResponse::InternalServerError().finish()
        }
    }
}
