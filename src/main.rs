mod model;
mod server;

use axum::http::{header::CONTENT_TYPE, HeaderValue, Method};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::server::{
    config::Config, error::AppError, router, scheduler::report_export, startup, state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let session = startup::connect_to_session(&db).await?;
    let spreadsheet_client = startup::setup_spreadsheet_client(&config);

    startup::check_for_superuser(&db, &config).await?;

    // Scheduler handle lives as long as the server
    let _scheduler = match (&config.report_export_cron, &spreadsheet_client) {
        (Some(cron), Some(client)) => Some(
            report_export::start_scheduler(
                db.clone(),
                client.clone(),
                config.report_email.clone(),
                cron,
            )
            .await?,
        ),
        (Some(_), None) => {
            tracing::warn!("REPORT_EXPORT_CRON is set but spreadsheet export is disabled");
            None
        }
        _ => None,
    };

    let mut app = router::router()
        .merge(router::docs(&config.app_title))
        .with_state(AppState::new(
            db,
            spreadsheet_client,
            config.report_email.clone(),
        ))
        .layer(session)
        .layer(TraceLayer::new_for_http());

    if let Some(origin) = &config.cors_origin {
        let origin = origin.parse::<HeaderValue>().map_err(|e| {
            AppError::ConfigErr(server::error::config::ConfigError::InvalidEnvVar {
                name: "CORS_ORIGIN".to_string(),
                reason: e.to_string(),
            })
        })?;

        app = app.layer(
            CorsLayer::new()
                .allow_origin(origin)
                .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
                .allow_headers([CONTENT_TYPE])
                .allow_credentials(true),
        );
    }

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;

    tracing::info!("Starting server on {}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(startup::shutdown_signal())
        .await?;

    Ok(())
}
