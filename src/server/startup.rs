use crate::server::{
    config::Config, data::workspace::WorkspaceRepository, error::AppError,
    model::workspace::Workspace,
};

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
/// - `Err(Error)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the default workspace if it does not exist yet.
///
/// # Arguments
/// - `db` - Database connection
/// - `name` - Configured default workspace name
///
/// # Returns
/// - `Ok(Workspace)` - The existing or newly created workspace
/// - `Err(AppError)` - Database error
pub async fn ensure_default_workspace(
    db: &sea_orm::DatabaseConnection,
    name: &str,
) -> Result<Workspace, AppError> {
    let workspace_repo = WorkspaceRepository::new(db);

    if let Some(workspace) = workspace_repo.find_by_name(name).await? {
        return Ok(workspace);
    }

    tracing::info!("Creating default workspace '{}'", name);

    workspace_repo.create(name).await
}
