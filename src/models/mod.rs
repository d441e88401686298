//! models/mod.rs
//! Módulo raíz para modelos/estructuras compartidas.

pub mod survey_dispatch_model;
