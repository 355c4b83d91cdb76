pub mod models;
pub mod utils;

use actix_web::{post, web, HttpResponse, Responder};
use chrono::Duration;
use models::{AuthResponse, LoginRequest, RegisterRequest};
use sqlx::PgPool;
use tracing::error;
use uuid::Uuid;
use validator::ValidateEmail;

use crate::users::models::User;

#[utoipa::path(
    post,
    path = "/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 200, description = "Account created, token issued", body = AuthResponse),
        (status = 400, description = "Invalid email, weak password, or duplicate account")
    )
)]
#[post("/auth/register")]
pub async fn register(p: web::Json<RegisterRequest>, db: web::Data<PgPool>) -> impl Responder {
    let payload = p.into_inner();

    if !ValidateEmail::validate_email(&payload.email) {
        return HttpResponse::BadRequest().body("Invalid email format");
    }

    if payload.username.is_empty() {
        return HttpResponse::BadRequest().body("Username is required");
    }

    if payload.password.len() < 6 {
        return HttpResponse::BadRequest().body("Password must be at least 6 characters");
    }

    let email_taken = sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
        .bind(&payload.email)
        .fetch_optional(db.get_ref())
        .await;

    match email_taken {
        Ok(Some(_)) => return HttpResponse::BadRequest().body("Email already exists"),
        Ok(None) => {}
        Err(e) => {
            error!("Error checking email: {}", e);
            return HttpResponse::InternalServerError().finish();
        }
    }

    let username_taken = sqlx::query_as::<_, User>("SELECT * FROM users WHERE username = $1")
        .bind(&payload.username)
        .fetch_optional(db.get_ref())
        .await;

    match username_taken {
        Ok(Some(_)) => return HttpResponse::BadRequest().body("Username already exists"),
        Ok(None) => {}
        Err(e) => {
            error!("Error checking username: {}", e);
            return HttpResponse::InternalServerError().finish();
        }
    }

    let salt = utils::new_salt();
    let hash = utils::hash_password(&payload.password, &salt);

    let user = match sqlx::query_as::<_, User>(
        "INSERT INTO users (id, username, email, password_hash, password_salt, first_name, last_name, created_at) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, now()) RETURNING *",
    )
    .bind(Uuid::new_v4())
    .bind(&payload.username)
    .bind(&payload.email)
    .bind(&hash)
    .bind(&salt)
    .bind(&payload.first_name)
    .bind(&payload.last_name)
    .fetch_one(db.get_ref())
    .await
    {
        Ok(user) => user,
        Err(e) => {
            error!("Error creating user: {}", e);
            return HttpResponse::InternalServerError().finish();
        }
    };

    issue_token(&user)
}

#[utoipa::path(
    post,
    path = "/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Token issued", body = AuthResponse),
        (status = 400, description = "Invalid email or password")
    )
)]
#[post("/auth/login")]
pub async fn login(p: web::Json<LoginRequest>, db: web::Data<PgPool>) -> impl Responder {
    let payload = p.into_inner();

    let user = match sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
        .bind(&payload.email)
        .fetch_optional(db.get_ref())
        .await
    {
        Ok(Some(user)) => user,
        Ok(None) => return HttpResponse::BadRequest().body("Invalid email or password"),
        Err(e) => {
            error!("Error fetching user for login: {}", e);
            return HttpResponse::InternalServerError().finish();
        }
    };

    if !utils::verify_password(&payload.password, &user.password_salt, &user.password_hash) {
        return HttpResponse::BadRequest().body("Invalid email or password");
    }

    issue_token(&user)
}

fn issue_token(user: &User) -> HttpResponse {
    match utils::generate_token(user) {
        Ok(token) => HttpResponse::Ok().json(AuthResponse {
            token,
            user_id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
            expires_at: chrono::Utc::now().naive_utc() + Duration::days(utils::TOKEN_LIFETIME_DAYS),
        }),
        Err(e) => {
            error!("Error signing token: {}", e);
            HttpResponse::InternalServerError().finish()
        }
    }
}
