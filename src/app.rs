//! app.rs
use crate::handlers::survey_handler;
use actix_web::web;

pub fn init_app(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api").service(
            web::scope("/surveys")
                .route(
                    "/dispatch",
                    web::post().to(survey_handler::dispatch_survey_endpoint),
                )
                .route(
                    "/dispatch/{call_id}",
                    web::get().to(survey_handler::dispatch_detail_endpoint),
                )
                .route(
                    "/config",
                    web::get().to(survey_handler::survey_config_endpoint),
                ),
        ),
    );
}
