use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use sqlx::{Pool, Sqlite};

use crate::{
    models::survey_dispatch_model::{NewSurveyDispatch, SurveyDispatch},
    repository::{DispatchRepository, StoreError},
};

const SELECT_COLUMNS: &str = r#"
    SELECT id, call_id, survey_id, lead_id, destination_phone,
           survey_url, sent_at, status, channel, error_message
    FROM survey_dispatches
"#;

#[derive(Clone, Debug)]
pub struct SqliteDispatchRepository {
    db_pool: Pool<Sqlite>,
}

#[derive(sqlx::FromRow)]
struct DispatchRow {
    id: i64,
    call_id: i32,
    survey_id: i32,
    lead_id: i64,
    destination_phone: String,
    survey_url: Option<String>,
    sent_at: String,
    status: String,
    channel: String,
    error_message: Option<String>,
}

impl TryFrom<DispatchRow> for SurveyDispatch {
    type Error = StoreError;

    fn try_from(row: DispatchRow) -> Result<Self, Self::Error> {
        Ok(SurveyDispatch {
            id: row.id,
            call_id: row.call_id,
            survey_id: row.survey_id,
            lead_id: row.lead_id,
            destination_phone: row.destination_phone,
            survey_url: row.survey_url,
            sent_at: parse_timestamp(&row.sent_at)?,
            status: row.status.parse().map_err(StoreError::DataCorruption)?,
            channel: row.channel.parse().map_err(StoreError::DataCorruption)?,
            error_message: row.error_message,
        })
    }
}

impl SqliteDispatchRepository {
    pub fn new(db_pool: Pool<Sqlite>) -> Self {
        SqliteDispatchRepository { db_pool }
    }

    /// Corre migraciones con sqlx
    pub async fn run_migrations(&self) -> Result<(), StoreError> {
        sqlx::migrate!("./migrations")
            .run(&self.db_pool)
            .await
            .map_err(|e| StoreError::Migration(e.to_string()))?;
        Ok(())
    }
}

#[async_trait]
impl DispatchRepository for SqliteDispatchRepository {
    async fn save(&self, dispatch: NewSurveyDispatch) -> Result<SurveyDispatch, StoreError> {
        // Si algo falla antes del commit, el drop de `tx` hace rollback.
        let mut tx = self.db_pool.begin().await?;

        let inserted = sqlx::query(
            r#"
            INSERT INTO survey_dispatches (
                call_id, survey_id, lead_id, destination_phone,
                survey_url, sent_at, status, channel, error_message
            )
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
            "#,
        )
        .bind(dispatch.call_id)
        .bind(dispatch.survey_id)
        .bind(dispatch.lead_id)
        .bind(&dispatch.destination_phone)
        .bind(&dispatch.survey_url)
        .bind(format_timestamp(&dispatch.sent_at))
        .bind(dispatch.status.as_str())
        .bind(dispatch.channel.as_str())
        .bind(&dispatch.error_message)
        .execute(&mut *tx)
        .await?;

        let row: DispatchRow = sqlx::query_as(&format!("{} WHERE id = ?1", SELECT_COLUMNS))
            .bind(inserted.last_insert_rowid())
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;

        row.try_into()
    }

    async fn find_by_call_id(&self, call_id: i32) -> Result<Option<SurveyDispatch>, StoreError> {
        let row: Option<DispatchRow> = sqlx::query_as(&format!(
            "{} WHERE call_id = ?1 ORDER BY sent_at DESC, id DESC LIMIT 1",
            SELECT_COLUMNS
        ))
        .bind(call_id)
        .fetch_optional(&self.db_pool)
        .await?;

        row.map(SurveyDispatch::try_from).transpose()
    }
}

// Ancho fijo y sufijo "Z": el orden de texto coincide con el orden temporal.
fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, StoreError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| StoreError::DataCorruption(format!("sent_at inválido '{}': {}", raw, e)))
}
