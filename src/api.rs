use crate::activities::{
    self,
    models::{ActivityDto, NewActivity, UpdateActivity},
};
use crate::auth::{
    self,
    models::{AuthResponse, LoginRequest, RegisterRequest},
};
use crate::goals::{
    self,
    models::{GoalDto, GoalTimeframe, GoalType, NewGoal, UpdateGoal},
};
use crate::routes::{
    self,
    models::{NewRoute, Route, UpdateRoute},
};
use crate::stats::{self, models::ActivityStats};
use crate::users::{self, models::UserDto};
use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::http::header;
use actix_web::middleware::{NormalizePath, TrailingSlash};
use actix_web::{middleware::Logger, web, App, HttpServer};
use sqlx::PgPool;
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        auth::register,
        auth::login,
        users::get_user,
        activities::get_activities,
        activities::get_activity_detail,
        activities::post_activity,
        activities::put_activity,
        activities::delete_activity,
        routes::get_routes,
        routes::get_user_routes,
        routes::get_route_detail,
        routes::post_route,
        routes::put_route,
        routes::delete_route,
        goals::get_goals,
        goals::get_user_goals,
        goals::get_goal_detail,
        goals::post_goal,
        goals::put_goal,
        goals::put_goal_progress,
        goals::update_all_goals_progress,
        goals::delete_goal,
        stats::get_stats,
    ),
    components(schemas(
        RegisterRequest,
        LoginRequest,
        AuthResponse,
        UserDto,
        ActivityDto,
        NewActivity,
        UpdateActivity,
        Route,
        NewRoute,
        UpdateRoute,
        GoalDto,
        NewGoal,
        UpdateGoal,
        GoalType,
        GoalTimeframe,
        ActivityStats,
    )),
    tags(
        (name = "Auth", description = "Account registration and token issuance"),
        (name = "Activities", description = "Running activity management endpoints"),
        (name = "Routes", description = "Saved route management endpoints"),
        (name = "Goals", description = "Goal management and progress recomputation"),
        (name = "Stats", description = "Activity summary endpoints")
    )
)]
struct ApiDoc;

pub async fn run_api(db_pool: PgPool) -> std::io::Result<()> {
    info!("Starting server...");

    let governor_conf = GovernorConfigBuilder::default()
        .seconds_per_request(5)
        .burst_size(10)
        .finish()
        .unwrap();

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(NormalizePath::new(TrailingSlash::Trim))
            .wrap(
                actix_web::middleware::DefaultHeaders::new()
                    .add((
                        header::STRICT_TRANSPORT_SECURITY,
                        "max-age=63072000; includeSubDomains; preload",
                    ))
                    .add((header::X_CONTENT_TYPE_OPTIONS, "nosniff"))
                    .add((header::X_FRAME_OPTIONS, "DENY"))
                    .add((header::X_XSS_PROTECTION, "1; mode=block")),
            )
            .wrap(Governor::new(&governor_conf))
            .wrap(Cors::permissive())
            .app_data(web::Data::new(db_pool.clone()))
            .service(auth::register)
            .service(auth::login)
            .service(users::get_user)
            .service(activities::get_activities)
            .service(activities::get_activity_detail)
            .service(activities::post_activity)
            .service(activities::put_activity)
            .service(activities::delete_activity)
            .service(routes::get_routes)
            // literal segments must land before the {route_id} matcher
            .service(routes::get_user_routes)
            .service(routes::get_route_detail)
            .service(routes::post_route)
            .service(routes::put_route)
            .service(routes::delete_route)
            .service(goals::get_goals)
            .service(goals::get_user_goals)
            .service(goals::update_all_goals_progress)
            .service(goals::get_goal_detail)
            .service(goals::post_goal)
            .service(goals::put_goal_progress)
            .service(goals::put_goal)
            .service(goals::delete_goal)
            .service(stats::get_stats)
            .service(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
    })
    .bind(("127.0.0.1", 8080))?
    .run()
    .await
}
