//! services/survey_dispatch_service.rs
//! Envío simulado de encuestas post-llamada y consulta de su detalle.

use std::sync::Arc;

use chrono::Utc;
use thiserror::Error;

use crate::{
    config::survey_config::SurveyConfig,
    models::survey_dispatch_model::{
        DispatchChannel, DispatchDetail, DispatchStatus, NewSurveyDispatch, SurveyDispatch,
    },
    repository::{DispatchRepository, StoreError},
    services::survey_url::{build_survey_url, sanitize_url},
};

#[derive(Debug, Error)]
pub enum DispatchError {
    /// La DB rechazó o no completó la operación; no se reintenta.
    #[error("persistence failure: {0}")]
    Persistence(#[from] StoreError),
}

#[derive(Clone)]
pub struct SurveyDispatchService {
    repository: Arc<dyn DispatchRepository>,
    config: SurveyConfig,
}

impl SurveyDispatchService {
    pub fn new(repository: Arc<dyn DispatchRepository>, config: SurveyConfig) -> Self {
        SurveyDispatchService { repository, config }
    }

    pub fn frontend_url(&self) -> &str {
        &self.config.frontend_url
    }

    /// Registra el envío (no se manda ningún SMS real) y lo marca SENT.
    pub async fn dispatch_survey(
        &self,
        call_id: i32,
        survey_id: i32,
        lead_id: i64,
        phone: &str,
    ) -> Result<SurveyDispatch, DispatchError> {
        log::info!(
            "(dispatch_survey) Envío simulado - llamada={}, encuesta={}, lead={}",
            call_id,
            survey_id,
            lead_id
        );

        let survey_url = self.generate_survey_url(survey_id, lead_id, call_id);

        let new_dispatch = NewSurveyDispatch {
            call_id,
            survey_id,
            lead_id,
            destination_phone: phone.to_string(),
            survey_url: Some(survey_url.clone()),
            sent_at: Utc::now(),
            status: DispatchStatus::Sent,
            channel: DispatchChannel::Sms,
            error_message: None,
        };

        let saved = self.repository.save(new_dispatch).await?;

        log::info!(
            "(dispatch_survey) Encuesta 'enviada' - id={}, url={}",
            saved.id,
            survey_url
        );
        Ok(saved)
    }

    /// El call_id solo se usa para trazas; la URL identifica encuesta + lead.
    pub fn generate_survey_url(&self, survey_id: i32, lead_id: i64, call_id: i32) -> String {
        let url = build_survey_url(survey_id, lead_id, &self.config.frontend_url);
        log::debug!("URL de encuesta generada (llamada {}): {}", call_id, url);
        url
    }

    /// `Ok(None)` si la llamada no tiene envío registrado.
    pub async fn get_dispatch_detail(
        &self,
        call_id: i32,
    ) -> Result<Option<DispatchDetail>, DispatchError> {
        log::info!(
            "(get_dispatch_detail) Detalle de envío para llamada {}",
            call_id
        );

        let found = self.repository.find_by_call_id(call_id).await?;
        Ok(found.map(|dispatch| self.to_detail(dispatch)))
    }

    pub fn to_detail(&self, dispatch: SurveyDispatch) -> DispatchDetail {
        DispatchDetail {
            id: dispatch.id,
            call_id: dispatch.call_id,
            survey_id: dispatch.survey_id,
            lead_id: dispatch.lead_id,
            destination_phone: dispatch.destination_phone,
            survey_url: sanitize_url(dispatch.survey_url.as_deref(), &self.config.frontend_url),
            sent_at: dispatch.sent_at,
            status: dispatch.status.to_string(),
            channel: dispatch.channel.to_string(),
            error_message: dispatch.error_message,
        }
    }
}
