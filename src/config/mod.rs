//! config/mod.rs
//! Configuración del servicio.

pub mod survey_config;
