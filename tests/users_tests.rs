#[cfg(test)]
mod tests {
    use actix_web::{test, web, App};
    use running_tracker_api::auth::models::{AuthResponse, LoginRequest, RegisterRequest};
    use running_tracker_api::auth::{login, register};
    use running_tracker_api::users::{get_user, models::UserDto};
    use sqlx::PgPool;
    use uuid::Uuid;

    async fn setup_db() -> PgPool {
        dotenv::from_filename(".env.test").ok(); // load test-specific env file
        let database_url =
            std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for tests");
        PgPool::connect(&database_url)
            .await
            .expect("Failed to connect to test database")
    }

    fn register_payload(email: &str, username: &str) -> RegisterRequest {
        RegisterRequest {
            username: username.to_string(),
            email: email.to_string(),
            password: "secret123".to_string(),
            first_name: Some("Test".to_string()),
            last_name: None,
        }
    }

    #[actix_web::test]
    #[ignore = "requires Postgres (.env.test)"]
    async fn test_register_login_and_get_user() {
        let db = setup_db().await;

        let _ = sqlx::query("DELETE FROM users WHERE email = $1")
            .bind("runner@example.com")
            .execute(&db)
            .await;

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(db.clone()))
                .service(register)
                .service(login)
                .service(get_user),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/auth/register")
            .set_json(register_payload("runner@example.com", "runner"))
            .to_request();

        let registered: AuthResponse = test::call_and_read_body_json(&app, req).await;
        assert_eq!(registered.email, "runner@example.com");
        assert!(!registered.token.is_empty());

        let req = test::TestRequest::post()
            .uri("/auth/login")
            .set_json(LoginRequest {
                email: "runner@example.com".to_string(),
                password: "secret123".to_string(),
            })
            .to_request();

        let logged_in: AuthResponse = test::call_and_read_body_json(&app, req).await;
        assert_eq!(logged_in.user_id, registered.user_id);

        let req = test::TestRequest::get()
            .uri(&format!("/users/{}", registered.user_id))
            .to_request();

        let fetched: UserDto = test::call_and_read_body_json(&app, req).await;
        assert_eq!(fetched.id, registered.user_id);
        assert_eq!(fetched.username, "runner");
    }

    #[actix_web::test]
    #[ignore = "requires Postgres (.env.test)"]
    async fn test_register_with_invalid_email() {
        let db = setup_db().await;

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(db.clone()))
                .service(register),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/auth/register")
            .set_json(register_payload("not-an-email", "someone"))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);
    }

    #[actix_web::test]
    #[ignore = "requires Postgres (.env.test)"]
    async fn test_login_with_wrong_password() {
        let db = setup_db().await;

        let _ = sqlx::query("DELETE FROM users WHERE email = $1")
            .bind("wrongpass@example.com")
            .execute(&db)
            .await;

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(db.clone()))
                .service(register)
                .service(login),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/auth/register")
            .set_json(register_payload("wrongpass@example.com", "wrongpass"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let req = test::TestRequest::post()
            .uri("/auth/login")
            .set_json(LoginRequest {
                email: "wrongpass@example.com".to_string(),
                password: "not-the-password".to_string(),
            })
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);
    }

    #[actix_web::test]
    #[ignore = "requires Postgres (.env.test)"]
    async fn test_get_user_not_found() {
        let db = setup_db().await;

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(db.clone()))
                .service(get_user),
        )
        .await;

        let req = test::TestRequest::get()
            .uri(&format!("/users/{}", Uuid::new_v4()))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 404);
    }

    #[actix_web::test]
    #[ignore = "requires Postgres (.env.test)"]
    async fn test_get_user_invalid_uuid() {
        let db = setup_db().await;

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(db.clone()))
                .service(get_user),
        )
        .await;

        let req = test::TestRequest::get().uri("/users/not-a-uuid").to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);
    }
}
