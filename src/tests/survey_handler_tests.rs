//! tests/survey_handler_tests.rs
//! Pruebas de los endpoints /api/surveys.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{http::StatusCode, test, web, App};
    use serde_json::{json, Value};

    use crate::app::init_app;
    use crate::config::survey_config::SurveyConfig;
    use crate::services::survey_dispatch_service::SurveyDispatchService;
    use crate::tests::test_support::{
        create_test_service, migrated_repository, FailingRepository, PROD_URL,
    };

    #[actix_web::test]
    async fn test_post_dispatch_returns_saved_detail() {
        let (_repo, service) = create_test_service(PROD_URL).await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(service))
                .configure(init_app),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/surveys/dispatch")
            .set_json(json!({
                "callId": 10,
                "surveyId": 3,
                "leadId": 42,
                "phone": "+51999999999"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["dispatch"]["callId"], 10);
        assert_eq!(body["dispatch"]["surveyUrl"], "https://prod.example/q/3/42");
        assert_eq!(body["dispatch"]["status"], "SENT");
        assert_eq!(body["dispatch"]["channel"], "SMS");
        assert!(body["dispatch"]["id"].as_i64().unwrap() > 0);
    }

    #[actix_web::test]
    async fn test_get_detail_found_and_missing() {
        let (_repo, service) = create_test_service(PROD_URL).await;
        service.dispatch_survey(21, 3, 42, "+51").await.unwrap();

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(service))
                .configure(init_app),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/surveys/dispatch/21")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["dispatch"]["leadId"], 42);

        let req = test::TestRequest::get()
            .uri("/api/surveys/dispatch/22")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
    }

    #[actix_web::test]
    async fn test_post_dispatch_persistence_failure_is_500() {
        let (_pool, repo) = migrated_repository().await;
        let service = SurveyDispatchService::new(
            Arc::new(FailingRepository { inner: repo }),
            SurveyConfig::new(PROD_URL),
        );
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(service))
                .configure(init_app),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/surveys/dispatch")
            .set_json(json!({
                "callId": 50,
                "surveyId": 1,
                "leadId": 1,
                "phone": "+51"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
    }

    #[actix_web::test]
    async fn test_config_exposes_frontend_url() {
        let (_repo, service) = create_test_service("https://prod.example/").await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(service))
                .configure(init_app),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/surveys/config")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["frontendUrl"], "https://prod.example");
    }
}
