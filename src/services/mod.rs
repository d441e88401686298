//! services/mod.rs
//! Módulo que agrupa distintos "servicios" o "capas de negocio" de la app.

pub mod survey_dispatch_service;
pub mod survey_url;
