//! logger.rs
//! Logger con env_logger; el filtro sale de RUST_LOG (default `DEFAULT_LOG_FILTER`).

// sqlx loguea cada sentencia en info, lo bajamos a warn salvo que RUST_LOG diga otra cosa
pub const DEFAULT_LOG_FILTER: &str = "info,sqlx=warn";

pub fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(DEFAULT_LOG_FILTER))
        .format_timestamp_secs()
        .init();
}
