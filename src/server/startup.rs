use std::sync::Arc;

use sea_orm::DatabaseConnection;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::{
    model::account::Role,
    server::{
        config::Config,
        data::account::SeaOrmAccountRepository,
        error::AppError,
        model::account::CreateAccountParam,
        service::account::{CreateAccount, DbCreateAccount},
        util::encrypter::Argon2Encrypter,
    },
};

/// Installs the global tracing subscriber.
///
/// The filter is read from `RUST_LOG` and defaults to `info` when unset or invalid.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
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
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the configured admin account when the database has no admin yet.
///
/// Without an admin nobody can reach the account management routes, so the first start
/// against an empty database needs `ADMIN_EMAIL` and `ADMIN_PASSWORD`. When they are not
/// set a warning is logged and startup continues.
///
/// # Arguments
/// - `db` - Database connection with migrations applied
/// - `config` - Application configuration holding the admin credentials
///
/// # Returns
/// - `Ok(())` - An admin already existed, was created, or no credentials were configured
/// - `Err(AppError::DbErr)` - Database error while counting admins
/// - `Err(AppError::UseCaseErr)` - Creating the admin account failed
pub async fn check_for_admin(db: &DatabaseConnection, config: &Config) -> Result<(), AppError> {
    let repository = SeaOrmAccountRepository::new(db.clone());

    if repository.admin_exists().await? {
        return Ok(());
    }

    let (Some(email), Some(password)) = (&config.admin_email, &config.admin_password) else {
        tracing::warn!(
            "No admin account exists; set ADMIN_EMAIL and ADMIN_PASSWORD to create one at startup"
        );
        return Ok(());
    };

    let create_account =
        DbCreateAccount::new(Arc::new(Argon2Encrypter::default()), Arc::new(repository));
    let admin = create_account
        .execute(CreateAccountParam {
            email: email.clone(),
            password: password.clone(),
            role: Some(Role::Admin),
        })
        .await?;

    tracing::info!("Created admin account {} ({})", admin.id(), email);

    Ok(())
}
