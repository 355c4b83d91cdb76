pub mod models;

use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use models::{Activity, ActivityDto, NewActivity, UpdateActivity};
use sqlx::PgPool;
use tracing::error;
use uuid::Uuid;

#[utoipa::path(
    get,
    path = "/activities",
    responses(
        (status = 200, description = "List all activities, newest first", body = [ActivityDto])
    )
)]
#[get("/activities")]
pub async fn get_activities(db: web::Data<PgPool>) -> impl Responder {
    match sqlx::query_as::<_, Activity>("SELECT * FROM activities ORDER BY date DESC")
        .fetch_all(db.get_ref())
        .await
    {
        Ok(rows) => {
            let activities: Vec<ActivityDto> = rows.into_iter().map(ActivityDto::from).collect();
            HttpResponse::Ok().json(activities)
        }
        Err(e) => {
            error!("Error fetching activities: {}", e);
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[utoipa::path(
    get,
    path = "/activities/:activity_id",
    params(
        ("activity_id" = String, description = "Activity ID")
    ),
    responses(
        (status = 200, description = "Get a single activity", body = ActivityDto),
        (status = 404, description = "Activity not found")
    )
)]
#[get("/activities/{activity_id}")]
pub async fn get_activity_detail(path: web::Path<String>, db: web::Data<PgPool>) -> impl Responder {
    let activity_id = match Uuid::parse_str(&path.into_inner()) {
        Ok(id) => id,
        Err(_) => return HttpResponse::BadRequest().finish(),
    };

    match sqlx::query_as::<_, Activity>("SELECT * FROM activities WHERE id = $1")
        .bind(activity_id)
        .fetch_one(db.get_ref())
        .await
    {
        Ok(activity) => HttpResponse::Ok().json(ActivityDto::from(activity)),
        Err(sqlx::Error::RowNotFound) => HttpResponse::NotFound().body("Activity not found"),
        Err(e) => {
            error!("Error fetching activity {}: {}", activity_id, e);
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[utoipa::path(
    post,
    path = "/activities",
    request_body = NewActivity,
    responses(
        (status = 201, description = "Activity created", body = ActivityDto),
        (status = 400, description = "Distance or duration out of range")
    )
)]
#[post("/activities")]
pub async fn post_activity(p: web::Json<NewActivity>, db: web::Data<PgPool>) -> impl Responder {
    let payload = p.into_inner();

    if payload.distance <= 0.0 {
        return HttpResponse::BadRequest().body("Distance must be greater than 0");
    }

    if payload.duration <= 0 {
        return HttpResponse::BadRequest().body("Duration must be greater than 0");
    }

    match sqlx::query_as::<_, Activity>(
        "INSERT INTO activities (id, date, distance, duration, notes, weather_conditions, temperature, user_id, route_id, created_at) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, now()) RETURNING *",
    )
    .bind(Uuid::new_v4())
    .bind(payload.date)
    .bind(payload.distance)
    .bind(payload.duration)
    .bind(&payload.notes)
    .bind(&payload.weather_conditions)
    .bind(payload.temperature)
    .bind(payload.user_id)
    .bind(payload.route_id)
    .fetch_one(db.get_ref())
    .await
    {
        Ok(activity) => HttpResponse::Created().json(ActivityDto::from(activity)),
        Err(e) => {
            error!("Error inserting activity: {}", e);
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[utoipa::path(
    put,
    path = "/activities/:activity_id",
    request_body = UpdateActivity,
    responses(
        (status = 204, description = "Activity updated"),
        (status = 404, description = "Activity not found")
    )
)]
#[put("/activities/{activity_id}")]
pub async fn put_activity(
    path: web::Path<String>,
    p: web::Json<UpdateActivity>,
    db: web::Data<PgPool>,
) -> impl Responder {
    let activity_id = match Uuid::parse_str(&path.into_inner()) {
        Ok(id) => id,
        Err(_) => return HttpResponse::BadRequest().finish(),
    };

    let payload = p.into_inner();

    if payload.distance.is_some_and(|d| d <= 0.0) {
        return HttpResponse::BadRequest().body("Distance must be greater than 0");
    }

    if payload.duration.is_some_and(|d| d <= 0) {
        return HttpResponse::BadRequest().body("Duration must be greater than 0");
    }

    match sqlx::query_as::<_, Activity>(
        "UPDATE activities SET \
            date = COALESCE($2, date), \
            distance = COALESCE($3, distance), \
            duration = COALESCE($4, duration), \
            notes = COALESCE($5, notes), \
            weather_conditions = COALESCE($6, weather_conditions), \
            temperature = COALESCE($7, temperature), \
            user_id = COALESCE($8, user_id), \
            route_id = COALESCE($9, route_id) \
         WHERE id = $1 RETURNING *",
    )
    .bind(activity_id)
    .bind(payload.date)
    .bind(payload.distance)
    .bind(payload.duration)
    .bind(&payload.notes)
    .bind(&payload.weather_conditions)
    .bind(payload.temperature)
    .bind(payload.user_id)
    .bind(payload.route_id)
    .fetch_one(db.get_ref())
    .await
    {
        Ok(_) => HttpResponse::NoContent().finish(),
        Err(sqlx::Error::RowNotFound) => HttpResponse::NotFound().body("Activity not found"),
        Err(e) => {
            error!("Error updating activity {}: {}", activity_id, e);
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[utoipa::path(
    delete,
    path = "/activities/:activity_id",
    responses(
        (status = 204, description = "Activity deleted"),
        (status = 404, description = "Activity not found")
    )
)]
#[delete("/activities/{activity_id}")]
pub async fn delete_activity(path: web::Path<String>, db: web::Data<PgPool>) -> impl Responder {
    let activity_id = match Uuid::parse_str(&path.into_inner()) {
        Ok(id) => id,
        Err(_) => return HttpResponse::BadRequest().finish(),
    };

    match sqlx::query("DELETE FROM activities WHERE id = $1")
        .bind(activity_id)
        .execute(db.get_ref())
        .await
    {
        Ok(result) if result.rows_affected() == 0 => {
            HttpResponse::NotFound().body("Activity not found")
        }
        Ok(_) => HttpResponse::NoContent().finish(),
        Err(e) => {
            error!("Error deleting activity {}: {}", activity_id, e);
            HttpResponse::InternalServerError().finish()
        }
    }
}
