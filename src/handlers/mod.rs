//! handlers/mod.rs
pub mod survey_handler;
