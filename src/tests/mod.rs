//! tests/mod.rs
//! Pruebas del servicio de envíos y de los endpoints HTTP.

mod survey_handler_tests;
