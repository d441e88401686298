use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Estado de un envío: PENDING -> SENT | FAILED.
/// Este servicio solo produce `Sent` (envío simulado).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchStatus {
    Pending,
    Sent,
    Failed,
}

impl DispatchStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DispatchStatus::Pending => "PENDING",
            DispatchStatus::Sent => "SENT",
            DispatchStatus::Failed => "FAILED",
        }
    }
}

impl fmt::Display for DispatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DispatchStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING" => Ok(DispatchStatus::Pending),
            "SENT" => Ok(DispatchStatus::Sent),
            "FAILED" => Ok(DispatchStatus::Failed),
            other => Err(format!("estado de envío desconocido: {}", other)),
        }
    }
}

/// Medio de comunicación. Por ahora el único es SMS; otro canal real
/// se agrega aquí y en `as_str`/`from_str`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchChannel {
    Sms,
}

impl DispatchChannel {
    pub fn as_str(&self) -> &'static str {
        match self {
            DispatchChannel::Sms => "SMS",
        }
    }
}

impl fmt::Display for DispatchChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DispatchChannel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SMS" => Ok(DispatchChannel::Sms),
            other => Err(format!("canal desconocido: {}", other)),
        }
    }
}

/// Registro persistido en `survey_dispatches`.
#[derive(Debug, Clone, PartialEq)]
pub struct SurveyDispatch {
    pub id: i64,
    pub call_id: i32,
    pub survey_id: i32,
    pub lead_id: i64,
    pub destination_phone: String,
    pub survey_url: Option<String>, // tal cual se generó, nunca se reescribe
    pub sent_at: DateTime<Utc>,
    pub status: DispatchStatus,
    pub channel: DispatchChannel,
    pub error_message: Option<String>,
}

/// Envío aún no guardado (sin id asignado por la DB)
#[derive(Debug, Clone, PartialEq)]
pub struct NewSurveyDispatch {
    pub call_id: i32,
    pub survey_id: i32,
    pub lead_id: i64,
    pub destination_phone: String,
    pub survey_url: Option<String>,
    pub sent_at: DateTime<Utc>,
    pub status: DispatchStatus,
    pub channel: DispatchChannel,
    pub error_message: Option<String>,
}

/// Vista para el frontend (modal de detalle del envío).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DispatchDetail {
    pub id: i64,
    pub call_id: i32,
    pub survey_id: i32,
    pub lead_id: i64,
    pub destination_phone: String,
    pub survey_url: Option<String>,
    pub sent_at: DateTime<Utc>,
    pub status: String,
    pub channel: String,
    pub error_message: Option<String>,
}

/// Body de POST /api/surveys/dispatch
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DispatchSurveyRequest {
    pub call_id: i32,
    pub survey_id: i32,
    pub lead_id: i64,
    pub phone: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct DispatchResponse {
    pub success: bool,
    pub dispatch: DispatchDetail,
}
