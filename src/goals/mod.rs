pub mod models;
pub mod utils;

use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use models::{Goal, GoalDto, NewGoal, UpdateGoal};
use sqlx::PgPool;
use tracing::{error, info};
use uuid::Uuid;

use crate::activities::models::Activity;

#[utoipa::path(
    get,
    path = "/goals",
    responses(
        (status = 200, description = "List all goals", body = [GoalDto])
    )
)]
#[get("/goals")]
pub async fn get_goals(db: web::Data<PgPool>) -> impl Responder {
    match sqlx::query_as::<_, Goal>("SELECT * FROM goals ORDER BY created_at DESC")
        .fetch_all(db.get_ref())
        .await
    {
        Ok(rows) => {
            let goals: Vec<GoalDto> = rows.into_iter().map(GoalDto::from).collect();
            HttpResponse::Ok().json(goals)
        }
        Err(e) => {
            error!("Error fetching goals: {}", e);
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[utoipa::path(
    get,
    path = "/goals/:goal_id",
    params(
        ("goal_id" = String, description = "Goal ID")
    ),
    responses(
        (status = 200, description = "Get a single goal", body = GoalDto),
        (status = 404, description = "Goal not found")
    )
)]
#[get("/goals/{goal_id}")]
pub async fn get_goal_detail(path: web::Path<String>, db: web::Data<PgPool>) -> impl Responder {
    let goal_id = match Uuid::parse_str(&path.into_inner()) {
        Ok(id) => id,
        Err(_) => return HttpResponse::BadRequest().finish(),
    };

    match sqlx::query_as::<_, Goal>("SELECT * FROM goals WHERE id = $1")
        .bind(goal_id)
        .fetch_one(db.get_ref())
        .await
    {
        Ok(goal) => HttpResponse::Ok().json(GoalDto::from(goal)),
        Err(sqlx::Error::RowNotFound) => HttpResponse::NotFound().body("Goal not found"),
        Err(e) => {
            error!("Error fetching goal {}: {}", goal_id, e);
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[utoipa::path(
    get,
    path = "/goals/user/:user_id",
    params(
        ("user_id" = String, description = "User ID")
    ),
    responses(
        (status = 200, description = "List a user's goals", body = [GoalDto])
    )
)]
#[get("/goals/user/{user_id}")]
pub async fn get_user_goals(path: web::Path<String>, db: web::Data<PgPool>) -> impl Responder {
    let user_id = match Uuid::parse_str(&path.into_inner()) {
        Ok(id) => id,
        Err(_) => return HttpResponse::BadRequest().finish(),
    };

    match sqlx::query_as::<_, Goal>(
        "SELECT * FROM goals WHERE user_id = $1 ORDER BY created_at DESC",
    )
    .bind(user_id)
    .fetch_all(db.get_ref())
    .await
    {
        Ok(rows) => {
            let goals: Vec<GoalDto> = rows.into_iter().map(GoalDto::from).collect();
            HttpResponse::Ok().json(goals)
        }
        Err(e) => {
            error!("Error fetching goals for user {}: {}", user_id, e);
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[utoipa::path(
    post,
    path = "/goals",
    request_body = NewGoal,
    responses(
        (status = 201, description = "Goal created", body = GoalDto),
        (status = 400, description = "Target value out of range")
    )
)]
#[post("/goals")]
pub async fn post_goal(p: web::Json<NewGoal>, db: web::Data<PgPool>) -> impl Responder {
    let payload = p.into_inner();

    if payload.target_value <= 0.0 {
        return HttpResponse::BadRequest().body("Target value must be greater than 0");
    }

    // New goals always start from zero, not completed.
    match sqlx::query_as::<_, Goal>(
        "INSERT INTO goals (id, name, description, target_value, current_value, goal_type, timeframe, start_date, end_date, is_completed, user_id, created_at) \
         VALUES ($1, $2, $3, $4, 0, $5, $6, $7, $8, false, $9, now()) RETURNING *",
    )
    .bind(Uuid::new_v4())
    .bind(&payload.name)
    .bind(&payload.description)
    .bind(payload.target_value)
    .bind(payload.goal_type)
    .bind(payload.timeframe)
    .bind(payload.start_date)
    .bind(payload.end_date)
    .bind(payload.user_id)
    .fetch_one(db.get_ref())
    .await
    {
        Ok(goal) => HttpResponse::Created().json(GoalDto::from(goal)),
        Err(e) => {
            error!("Error inserting goal: {}", e);
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[utoipa::path(
    put,
    path = "/goals/:goal_id",
    request_body = UpdateGoal,
    responses(
        (status = 204, description = "Goal updated"),
        (status = 404, description = "Goal not found")
    )
)]
#[put("/goals/{goal_id}")]
pub async fn put_goal(
    path: web::Path<String>,
    p: web::Json<UpdateGoal>,
    db: web::Data<PgPool>,
) -> impl Responder {
    let goal_id = match Uuid::parse_str(&path.into_inner()) {
        Ok(id) => id,
        Err(_) => return HttpResponse::BadRequest().finish(),
    };

    let payload = p.into_inner();

    if payload.target_value.is_some_and(|t| t <= 0.0) {
        return HttpResponse::BadRequest().body("Target value must be greater than 0");
    }

    match sqlx::query_as::<_, Goal>(
        "UPDATE goals SET \
            name = COALESCE($2, name), \
            description = COALESCE($3, description), \
            target_value = COALESCE($4, target_value), \
            goal_type = COALESCE($5, goal_type), \
            timeframe = COALESCE($6, timeframe), \
            start_date = COALESCE($7, start_date), \
            end_date = COALESCE($8, end_date), \
            current_value = COALESCE($9, current_value), \
            is_completed = COALESCE($10, is_completed), \
            updated_at = now() \
         WHERE id = $1 RETURNING *",
    )
    .bind(goal_id)
    .bind(&payload.name)
    .bind(&payload.description)
    .bind(payload.target_value)
    .bind(payload.goal_type)
    .bind(payload.timeframe)
    .bind(payload.start_date)
    .bind(payload.end_date)
    .bind(payload.current_value)
    .bind(payload.is_completed)
    .fetch_one(db.get_ref())
    .await
    {
        Ok(_) => HttpResponse::NoContent().finish(),
        Err(sqlx::Error::RowNotFound) => HttpResponse::NotFound().body("Goal not found"),
        Err(e) => {
            error!("Error updating goal {}: {}", goal_id, e);
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[utoipa::path(
    put,
    path = "/goals/:goal_id/progress",
    request_body = f64,
    responses(
        (status = 204, description = "Progress applied"),
        (status = 404, description = "Goal not found")
    )
)]
#[put("/goals/{goal_id}/progress")]
pub async fn put_goal_progress(
    path: web::Path<String>,
    value: web::Json<f64>,
    db: web::Data<PgPool>,
) -> impl Responder {
    let goal_id = match Uuid::parse_str(&path.into_inner()) {
        Ok(id) => id,
        Err(_) => return HttpResponse::BadRequest().finish(),
    };

    let goal = match sqlx::query_as::<_, Goal>("SELECT * FROM goals WHERE id = $1")
        .bind(goal_id)
        .fetch_one(db.get_ref())
        .await
    {
        Ok(goal) => goal,
        Err(sqlx::Error::RowNotFound) => return HttpResponse::NotFound().body("Goal not found"),
        Err(e) => {
            error!("Error fetching goal {}: {}", goal_id, e);
            return HttpResponse::InternalServerError().finish();
        }
    };

    let goal = utils::apply_manual_progress(goal, value.into_inner());

    match persist_progress(db.get_ref(), &goal).await {
        Ok(_) => HttpResponse::NoContent().finish(),
        Err(e) => {
            error!("Error saving progress for goal {}: {}", goal_id, e);
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[utoipa::path(
    put,
    path = "/goals/update-progress",
    responses(
        (status = 200, description = "Recomputed progress for all active goals")
    )
)]
#[put("/goals/update-progress")]
pub async fn update_all_goals_progress(db: web::Data<PgPool>) -> impl Responder {
    let now = chrono::Utc::now().naive_utc();

    let active_goals = match sqlx::query_as::<_, Goal>(
        "SELECT * FROM goals WHERE is_completed = false AND end_date >= $1",
    )
    .bind(now)
    .fetch_all(db.get_ref())
    .await
    {
        Ok(goals) => goals,
        Err(e) => {
            error!("Error fetching active goals: {}", e);
            return HttpResponse::InternalServerError().finish();
        }
    };

    if active_goals.is_empty() {
        return HttpResponse::Ok().json(serde_json::json!({
            "message": "No active goals to update"
        }));
    }

    let activities = match sqlx::query_as::<_, Activity>("SELECT * FROM activities")
        .fetch_all(db.get_ref())
        .await
    {
        Ok(activities) => activities,
        Err(e) => {
            error!("Error fetching activities: {}", e);
            return HttpResponse::InternalServerError().finish();
        }
    };

    let updated = utils::recompute_all_active(active_goals, &activities, now);

    for goal in &updated {
        if let Err(e) = persist_progress(db.get_ref(), goal).await {
            error!("Error saving progress for goal {}: {}", goal.id, e);
            return HttpResponse::InternalServerError().finish();
        }
    }

    info!("Updated progress for {} goals", updated.len());

    HttpResponse::Ok().json(serde_json::json!({
        "message": format!("Updated progress for {} goals", updated.len())
    }))
}

#[utoipa::path(
    delete,
    path = "/goals/:goal_id",
    responses(
        (status = 204, description = "Goal deleted"),
        (status = 404, description = "Goal not found")
    )
)]
#[delete("/goals/{goal_id}")]
pub async fn delete_goal(path: web::Path<String>, db: web::Data<PgPool>) -> impl Responder {
    let goal_id = match Uuid::parse_str(&path.into_inner()) {
        Ok(id) => id,
        Err(_) => return HttpResponse::BadRequest().finish(),
    };

    match sqlx::query("DELETE FROM goals WHERE id = $1")
        .bind(goal_id)
        .execute(db.get_ref())
        .await
    {
        Ok(result) if result.rows_affected() == 0 => HttpResponse::NotFound().body("Goal not found"),
        Ok(_) => HttpResponse::NoContent().finish(),
        Err(e) => {
            error!("Error deleting goal {}: {}", goal_id, e);
            HttpResponse::InternalServerError().finish()
        }
    }
}

async fn persist_progress(db: &PgPool, goal: &Goal) -> Result<(), sqlx::Error> {
    sqlx::query(
        "UPDATE goals SET current_value = $2, is_completed = $3, updated_at = now() WHERE id = $1",
    )
    .bind(goal.id)
    .bind(goal.current_value)
    .bind(goal.is_completed)
    .execute(db)
    .await?;

    Ok(())
}
