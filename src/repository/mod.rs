//! repository/mod.rs
//! Acceso a persistencia de envíos de encuesta.

use async_trait::async_trait;
use thiserror::Error;

use crate::models::survey_dispatch_model::{NewSurveyDispatch, SurveyDispatch};

pub mod sqlite_dispatch_repository;

pub use sqlite_dispatch_repository::SqliteDispatchRepository;

#[derive(Debug, Error)]
pub enum StoreError {
    /// Conexión, constraint, timeout, etc.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("migration error: {0}")]
    Migration(String),

    /// Fila con estado/canal/fecha que no se puede decodificar.
    #[error("data corruption: {0}")]
    DataCorruption(String),
}

/// Contrato de persistencia que usa `SurveyDispatchService`.
#[async_trait]
pub trait DispatchRepository: Send + Sync {
    /// Inserta el envío en una sola transacción y devuelve el registro con su id.
    async fn save(&self, dispatch: NewSurveyDispatch) -> Result<SurveyDispatch, StoreError>;

    /// Envío de la llamada; si hay varios, el de `sent_at` más reciente (y mayor id).
    async fn find_by_call_id(&self, call_id: i32) -> Result<Option<SurveyDispatch>, StoreError>;
}
