pub mod models;

use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use models::{NewRoute, Route, UpdateRoute};
use sqlx::PgPool;
use tracing::error;
use uuid::Uuid;

#[utoipa::path(
    get,
    path = "/routes",
    responses(
        (status = 200, description = "List all routes", body = [Route])
    )
)]
#[get("/routes")]
pub async fn get_routes(db: web::Data<PgPool>) -> impl Responder {
    match sqlx::query_as::<_, Route>("SELECT * FROM routes ORDER BY created_at DESC")
        .fetch_all(db.get_ref())
        .await
    {
        Ok(routes) => HttpResponse::Ok().json(routes),
        Err(e) => {
            error!("Error fetching routes: {}", e);
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[utoipa::path(
    get,
    path = "/routes/:route_id",
    params(
        ("route_id" = String, description = "Route ID")
    ),
    responses(
        (status = 200, description = "Get a single route", body = Route),
        (status = 404, description = "Route not found")
    )
)]
#[get("/routes/{route_id}")]
pub async fn get_route_detail(path: web::Path<String>, db: web::Data<PgPool>) -> impl Responder {
    let route_id = match Uuid::parse_str(&path.into_inner()) {
        Ok(id) => id,
        Err(_) => return HttpResponse::BadRequest().finish(),
    };

    match sqlx::query_as::<_, Route>("SELECT * FROM routes WHERE id = $1")
        .bind(route_id)
        .fetch_one(db.get_ref())
        .await
    {
        Ok(route) => HttpResponse::Ok().json(route),
        Err(sqlx::Error::RowNotFound) => HttpResponse::NotFound().body("Route not found"),
        Err(e) => {
            error!("Error fetching route {}: {}", route_id, e);
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[utoipa::path(
    get,
    path = "/routes/user/:user_id",
    params(
        ("user_id" = String, description = "User ID")
    ),
    responses(
        (status = 200, description = "List a user's routes", body = [Route])
    )
)]
#[get("/routes/user/{user_id}")]
pub async fn get_user_routes(path: web::Path<String>, db: web::Data<PgPool>) -> impl Responder {
    let user_id = match Uuid::parse_str(&path.into_inner()) {
        Ok(id) => id,
        Err(_) => return HttpResponse::BadRequest().finish(),
    };

    match sqlx::query_as::<_, Route>(
        "SELECT * FROM routes WHERE user_id = $1 ORDER BY created_at DESC",
    )
    .bind(user_id)
    .fetch_all(db.get_ref())
    .await
    {
        Ok(routes) => HttpResponse::Ok().json(routes),
        Err(e) => {
            error!("Error fetching routes for user {}: {}", user_id, e);
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[utoipa::path(
    post,
    path = "/routes",
    request_body = NewRoute,
    responses(
        (status = 201, description = "Route created", body = Route),
        (status = 400, description = "Distance out of range")
    )
)]
#[post("/routes")]
pub async fn post_route(p: web::Json<NewRoute>, db: web::Data<PgPool>) -> impl Responder {
    let payload = p.into_inner();

    if payload.distance <= 0.0 {
        return HttpResponse::BadRequest().body("Distance must be greater than 0");
    }

    match sqlx::query_as::<_, Route>(
        "INSERT INTO routes (id, name, description, distance, start_location, end_location, is_loop, route_data, elevation_gain, elevation_loss, user_id, created_at) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, now()) RETURNING *",
    )
    .bind(Uuid::new_v4())
    .bind(&payload.name)
    .bind(&payload.description)
    .bind(payload.distance)
    .bind(&payload.start_location)
    .bind(&payload.end_location)
    .bind(payload.is_loop)
    .bind(&payload.route_data)
    .bind(payload.elevation_gain)
    .bind(payload.elevation_loss)
    .bind(payload.user_id)
    .fetch_one(db.get_ref())
    .await
    {
        Ok(route) => HttpResponse::Created().json(route),
        Err(e) => {
            error!("Error inserting route: {}", e);
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[utoipa::path(
    put,
    path = "/routes/:route_id",
    request_body = UpdateRoute,
    responses(
        (status = 204, description = "Route updated"),
        (status = 404, description = "Route not found")
    )
)]
#[put("/routes/{route_id}")]
pub async fn put_route(
    path: web::Path<String>,
    p: web::Json<UpdateRoute>,
    db: web::Data<PgPool>,
) -> impl Responder {
    let route_id = match Uuid::parse_str(&path.into_inner()) {
        Ok(id) => id,
        Err(_) => return HttpResponse::BadRequest().finish(),
    };

    let payload = p.into_inner();

    if payload.distance.is_some_and(|d| d <= 0.0) {
        return HttpResponse::BadRequest().body("Distance must be greater than 0");
    }

    match sqlx::query_as::<_, Route>(
        "UPDATE routes SET \
            name = COALESCE($2, name), \
            description = COALESCE($3, description), \
            distance = COALESCE($4, distance), \
            start_location = COALESCE($5, start_location), \
            end_location = COALESCE($6, end_location), \
            is_loop = COALESCE($7, is_loop), \
            route_data = COALESCE($8, route_data), \
            elevation_gain = COALESCE($9, elevation_gain), \
            elevation_loss = COALESCE($10, elevation_loss), \
            user_id = COALESCE($11, user_id) \
         WHERE id = $1 RETURNING *",
    )
    .bind(route_id)
    .bind(&payload.name)
    .bind(&payload.description)
    .bind(payload.distance)
    .bind(&payload.start_location)
    .bind(&payload.end_location)
    .bind(payload.is_loop)
    .bind(&payload.route_data)
    .bind(payload.elevation_gain)
    .bind(payload.elevation_loss)
    .bind(payload.user_id)
    .fetch_one(db.get_ref())
    .await
    {
        Ok(_) => HttpResponse::NoContent().finish(),
        Err(sqlx::Error::RowNotFound) => HttpResponse::NotFound().body("Route not found"),
        Err(e) => {
            error!("Error updating route {}: {}", route_id, e);
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[utoipa::path(
    delete,
    path = "/routes/:route_id",
    responses(
        (status = 204, description = "Route deleted"),
        (status = 404, description = "Route not found")
    )
)]
#[delete("/routes/{route_id}")]
pub async fn delete_route(path: web::Path<String>, db: web::Data<PgPool>) -> impl Responder {
    let route_id = match Uuid::parse_str(&path.into_inner()) {
        Ok(id) => id,
        Err(_) => return HttpResponse::BadRequest().finish(),
    };

    match sqlx::query("DELETE FROM routes WHERE id = $1")
        .bind(route_id)
        .execute(db.get_ref())
        .await
    {
        Ok(result) if result.rows_affected() == 0 => HttpResponse::NotFound().body("Route not found"),
        Ok(_) => HttpResponse::NoContent().finish(),
        Err(e) => {
            error!("Error deleting route {}: {}", route_id, e);
            HttpResponse::InternalServerError().finish()
        }
    }
}
