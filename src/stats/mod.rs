pub mod models;
pub mod utils;

use actix_web::{get, web, HttpResponse, Responder};
use models::ActivityStats;
use sqlx::PgPool;
use tracing::error;

use crate::activities::models::Activity;

#[utoipa::path(
    get,
    path = "/stats",
    responses(
        (status = 200, description = "Summary of all recorded activities", body = ActivityStats)
    )
)]
#[get("/stats")]
pub async fn get_stats(db: web::Data<PgPool>) -> impl Responder {
    match sqlx::query_as::<_, Activity>("SELECT * FROM activities")
        .fetch_all(db.get_ref())
        .await
    {
        Ok(activities) => HttpResponse::Ok().json(utils::summarize_activities(&activities)),
        Err(e) => {
            error!("Error fetching activities for stats: {}", e);
            HttpResponse::InternalServerError().finish()
        }
    }
}
