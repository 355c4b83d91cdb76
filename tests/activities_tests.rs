#[cfg(test)]
mod tests {
    use actix_web::{test, web, App};
    use chrono::Utc;
    use running_tracker_api::activities::{
        delete_activity, get_activities, get_activity_detail,
        models::{ActivityDto, NewActivity},
        post_activity,
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

    fn new_activity(distance: f64, duration: i32) -> NewActivity {
        NewActivity {
            date: Utc::now().naive_utc(),
            distance,
            duration,
            notes: Some("Morning run".to_string()),
            weather_conditions: None,
            temperature: None,
            user_id: None,
            route_id: None,
        }
    }

    #[actix_web::test]
    #[ignore = "requires Postgres (.env.test)"]
    async fn test_post_and_get_activity_with_derived_fields() {
        let db = setup_db().await;

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(db.clone()))
                .service(post_activity)
                .service(get_activity_detail)
                .service(delete_activity),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/activities")
            .set_json(new_activity(5.0, 1500))
            .to_request();

        let created: ActivityDto = test::call_and_read_body_json(&app, req).await;
        assert_eq!(created.distance, 5.0);
        assert_eq!(created.pace, Some(5.0));
        assert_eq!(created.speed, Some(12.0));

        let req = test::TestRequest::get()
            .uri(&format!("/activities/{}", created.id))
            .to_request();

        let fetched: ActivityDto = test::call_and_read_body_json(&app, req).await;
        assert_eq!(fetched.id, created.id);
        assert_eq!(fetched.pace, Some(5.0));

        let req = test::TestRequest::delete()
            .uri(&format!("/activities/{}", created.id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 204);

        let req = test::TestRequest::get()
            .uri(&format!("/activities/{}", created.id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 404);
    }

    #[actix_web::test]
    #[ignore = "requires Postgres (.env.test)"]
    async fn test_post_activity_rejects_bad_ranges() {
        let db = setup_db().await;

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(db.clone()))
                .service(post_activity),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/activities")
            .set_json(new_activity(0.0, 1500))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);

        let req = test::TestRequest::post()
            .uri("/activities")
            .set_json(new_activity(5.0, 0))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);
    }

    #[actix_web::test]
    #[ignore = "requires Postgres (.env.test)"]
    async fn test_get_activities_returns_list() {
        let db = setup_db().await;

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(db.clone()))
                .service(get_activities),
        )
        .await;

        let req = test::TestRequest::get().uri("/activities").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);
    }

    #[actix_web::test]
    #[ignore = "requires Postgres (.env.test)"]
    async fn test_get_activity_invalid_uuid() {
        let db = setup_db().await;

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(db.clone()))
                .service(get_activity_detail),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/activities/invalid-uuid")
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);
    }

    #[actix_web::test]
    #[ignore = "requires Postgres (.env.test)"]
    async fn test_get_activity_not_found() {
        let db = setup_db().await;

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(db.clone()))
                .service(get_activity_detail),
        )
        .await;

        let req = test::TestRequest::get()
            .uri(&format!("/activities/{}", Uuid::new_v4()))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 404);
    }
}
