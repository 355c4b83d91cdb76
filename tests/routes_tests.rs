#[cfg(test)]
mod tests {
    use actix_web::{test, web, App};
    use running_tracker_api::routes::{
        delete_route, get_route_detail, get_routes,
        models::{NewRoute, Route, UpdateRoute},
        post_route, put_route,
    };
    use sqlx::PgPool;
    use uuid::Uuid;

    async fn setup_db() -> PgPool {
        dotenv::from_filename(".env.test").ok();
        let database_url =
            std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for tests");
        PgPool::connect(&database_url)
            .await
            .expect("Failed to connect to test database")
    }

    fn new_route(name: &str, distance: f64) -> NewRoute {
        NewRoute {
            name: name.to_string(),
            description: Some("Around the park".to_string()),
            distance,
            start_location: Some("Main gate".to_string()),
            end_location: Some("Main gate".to_string()),
            is_loop: true,
            route_data: None,
            elevation_gain: Some(42.0),
            elevation_loss: Some(42.0),
            user_id: None,
        }
    }

    #[actix_web::test]
    #[ignore = "requires Postgres (.env.test)"]
    async fn test_route_crud_roundtrip() {
        let db = setup_db().await;

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(db.clone()))
                .service(post_route)
                .service(get_route_detail)
                .service(put_route)
                .service(delete_route),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/routes")
            .set_json(new_route("Park loop", 5.2))
            .to_request();

        let created: Route = test::call_and_read_body_json(&app, req).await;
        assert_eq!(created.name, "Park loop");
        assert!(created.is_loop);

        let req = test::TestRequest::put()
            .uri(&format!("/routes/{}", created.id))
            .set_json(UpdateRoute {
                name: Some("Park loop extended".to_string()),
                description: None,
                distance: Some(6.4),
                start_location: None,
                end_location: None,
                is_loop: None,
                route_data: None,
                elevation_gain: None,
                elevation_loss: None,
                user_id: None,
            })
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 204);

        let req = test::TestRequest::get()
            .uri(&format!("/routes/{}", created.id))
            .to_request();
        let fetched: Route = test::call_and_read_body_json(&app, req).await;
        assert_eq!(fetched.name, "Park loop extended");
        assert_eq!(fetched.distance, 6.4);
        // fields not in the update payload stay put
        assert_eq!(fetched.start_location, Some("Main gate".to_string()));

        let req = test::TestRequest::delete()
            .uri(&format!("/routes/{}", created.id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 204);

        let req = test::TestRequest::get()
            .uri(&format!("/routes/{}", created.id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 404);
    }

    #[actix_web::test]
    #[ignore = "requires Postgres (.env.test)"]
    async fn test_post_route_rejects_non_positive_distance() {
        let db = setup_db().await;

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(db.clone()))
                .service(post_route),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/routes")
            .set_json(new_route("Zero", 0.0))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);
    }

    #[actix_web::test]
    #[ignore = "requires Postgres (.env.test)"]
    async fn test_get_routes_returns_list() {
        let db = setup_db().await;

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(db.clone()))
                .service(get_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/routes").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);
    }

    #[actix_web::test]
    #[ignore = "requires Postgres (.env.test)"]
    async fn test_get_route_invalid_uuid() {
        let db = setup_db().await;

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(db.clone()))
                .service(get_route_detail),
        )
        .await;

        let req = test::TestRequest::get().uri("/routes/nope").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);

        let req = test::TestRequest::get()
            .uri(&format!("/routes/{}", Uuid::new_v4()))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 404);
    }
}
