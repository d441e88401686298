use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use anyhow::{Context, Result};
use dotenv::dotenv;
use sqlx::sqlite::SqliteConnectOptions;
use sqlx::{Pool, Sqlite};

use crate::config::survey_config::AppConfig;
use crate::logger::init_logger;
use crate::repository::SqliteDispatchRepository;
use crate::services::survey_dispatch_service::SurveyDispatchService;

mod app;
mod config;
mod handlers;
mod logger;
mod models;
mod repository;
mod services;

#[cfg(test)]
mod tests;

async fn setup_database(database_url: &str) -> Result<Pool<Sqlite>> {
    // Crear carpeta "data" para la ruta por defecto (sqlite:data/surveys.db)
    if database_url.contains("data/") {
        tokio::fs::create_dir_all("data")
            .await
            .context("No se pudo crear directorio 'data'")?;
    }

    log::info!("Conectando a SQLite en {}", database_url);

    let options: SqliteConnectOptions = database_url
        .parse()
        .with_context(|| format!("DATABASE_URL inválida: {}", database_url))?;

    let db_pool = Pool::<Sqlite>::connect_with(options.create_if_missing(true))
        .await
        .context("No se pudo conectar a la base de datos SQLite.")?;

    Ok(db_pool)
}

#[actix_web::main]
async fn main() -> Result<()> {
    dotenv().ok(); // Cargar .env al inicio
    init_logger();

    let app_config = AppConfig::from_env();
    app_config.survey.log_banner();

    let db_pool = setup_database(&app_config.database_url).await?;

    let repository = SqliteDispatchRepository::new(db_pool.clone());
    repository
        .run_migrations()
        .await
        .context("Fallo en migraciones de 'survey_dispatches'")?;

    let dispatch_service =
        SurveyDispatchService::new(Arc::new(repository), app_config.survey.clone());

    log::info!(
        "Levantando servidor en {}:{}",
        app_config.server_host,
        app_config.server_port
    );
    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(dispatch_service.clone()))
            .configure(app::init_app)
    })
    .bind((app_config.server_host.as_str(), app_config.server_port))?
    .run()
    .await?;

    Ok(())
}
