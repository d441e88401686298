//! handlers/survey_handler.rs
use actix_web::{web, HttpResponse};
use serde_json::json;

use crate::{
    models::survey_dispatch_model::{DispatchResponse, DispatchSurveyRequest},
    services::survey_dispatch_service::SurveyDispatchService,
};

/// POST /api/surveys/dispatch
pub async fn dispatch_survey_endpoint(
    dispatch_service: web::Data<SurveyDispatchService>,
    body: web::Json<DispatchSurveyRequest>,
) -> HttpResponse {
    let req = body.into_inner();

    match dispatch_service
        .dispatch_survey(req.call_id, req.survey_id, req.lead_id, &req.phone)
        .await
    {
        Ok(saved) => HttpResponse::Ok().json(DispatchResponse {
            success: true,
            dispatch: dispatch_service.to_detail(saved),
        }),
        Err(e) => {
            log::error!("Survey dispatch error: {}", e);
            HttpResponse::InternalServerError().json(json!({
                "success": false,
                "error": e.to_string()
            }))
        }
    }
}

/// GET /api/surveys/dispatch/{call_id}
pub async fn dispatch_detail_endpoint(
    dispatch_service: web::Data<SurveyDispatchService>,
    path: web::Path<i32>,
) -> HttpResponse {
    let call_id = path.into_inner();

    match dispatch_service.get_dispatch_detail(call_id).await {
        Ok(Some(detail)) => HttpResponse::Ok().json(DispatchResponse {
            success: true,
            dispatch: detail,
        }),
        Ok(None) => HttpResponse::NotFound().json(json!({
            "success": false,
            "error": format!("No survey dispatched for call {}", call_id)
        })),
        Err(e) => {
            log::error!("Survey detail error: {}", e);
            HttpResponse::InternalServerError().json(json!({
                "success": false,
                "error": e.to_string()
            }))
        }
    }
}

/// GET /api/surveys/config
pub async fn survey_config_endpoint(
    dispatch_service: web::Data<SurveyDispatchService>,
) -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "frontendUrl": dispatch_service.frontend_url()
    }))
}
