use time::Duration;
use tower_sessions::{session_store::ExpiredDeletion, Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;
use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config, error::AppError, service::report::spreadsheet::SpreadsheetClient,
    service::user::UserService,
};

/// Installs the global `tracing` subscriber.
///
/// Filtering follows `RUST_LOG`, falling back to `info`.
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into());

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .init();
}

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the session layer backed by the same Sqlite database.
///
/// Sessions expire after 7 days of inactivity; expired rows are purged every minute
/// by a background task.
pub async fn connect_to_session(
    db: &sea_orm::DatabaseConnection,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool().clone();
    let session_store = SqliteStore::new(pool);

    session_store
        .migrate()
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to migrate session store: {}", e)))?;

    let deletion_store = session_store.clone();
    tokio::spawn(async move {
        if let Err(e) = deletion_store
            .continuously_delete_expired(tokio::time::Duration::from_secs(60))
            .await
        {
            tracing::error!("Session cleanup task stopped: {}", e);
        }
    });

    let session = SessionManagerLayer::new(session_store)
        .with_secure(false)
        .with_expiry(Expiry::OnInactivity(Duration::days(7)));

    Ok(session)
}

/// Builds the spreadsheet client when an access token is configured.
pub fn setup_spreadsheet_client(config: &Config) -> Option<SpreadsheetClient> {
    let Some(token) = config.sheets_access_token.clone() else {
        tracing::info!("SHEETS_ACCESS_TOKEN not set, spreadsheet export disabled");
        return None;
    };

    let http_client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap_or_default();

    Some(SpreadsheetClient::new(
        http_client,
        &config.sheets_api_url,
        &config.drive_api_url,
        token,
    ))
}

/// Creates the configured first superuser if that account does not exist yet.
pub async fn check_for_superuser(
    db: &sea_orm::DatabaseConnection,
    config: &Config,
) -> Result<(), AppError> {
    let Some(first) = &config.first_superuser else {
        return Ok(());
    };

    match UserService::new(db)
        .ensure_superuser(&first.email, &first.password)
        .await?
    {
        Some(user) => tracing::info!("Created first superuser {}", user.email),
        None => tracing::debug!("First superuser {} already exists", first.email),
    }

    Ok(())
}

/// Resolves when the process receives Ctrl+C or SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
        tracing::info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                tracing::info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                tracing::error!("Failed to install terminate handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
