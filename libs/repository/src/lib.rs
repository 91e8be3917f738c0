use std::path::PathBuf;

use migration::Migrator;
use migration::MigratorTrait;
use post::PostRepository;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

mod active_models;
pub mod post;

/// Read-only storage configuration handed to [`init_repository`] at
/// startup. The path names the SQLite file; parent directories are
/// created on init.
#[derive(Clone, Debug)]
pub struct StorageConfig {
    pub path: PathBuf,
}

#[derive(Clone, Debug)]
pub struct Repository {
    pub post: PostRepository,
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error(
        "in sea-orm crate from unsuccessful database operations: {}: {}",
        message,
        source
    )]
    InSeaOrmDbErr {
        message: String,
        source: sea_orm::DbErr,
    },

    #[error("storage path {} is unavailable: {}", path, source)]
    StorageUnavailable {
        path: String,
        source: std::io::Error,
    },
}

type Response<T> = Result<T, RepositoryError>;

pub trait IntoResponse<T> {
    fn into_response(self, message: &str) -> Response<T>;
}

impl<T> IntoResponse<T> for Result<T, sea_orm::DbErr> {
    fn into_response(self, message: &str) -> Response<T> {
        self.map_err(|e| RepositoryError::InSeaOrmDbErr {
            message: message.to_string(),
            source: e,
        })
    }
}

/// Guarantees the storage file and schema exist, then hands back the
/// repository aggregate. Idempotent across restarts: the migrator only
/// creates what is absent and never drops existing rows. Any failure
/// here must abort startup.
pub async fn init_repository(config: &StorageConfig) -> Response<Repository> {
    let db = init_db(config).await?;

    let repository = Repository {
        post: PostRepository::new(db),
    };

    Ok(repository)
}

async fn init_db(config: &StorageConfig) -> Response<DatabaseConnection> {
    if let Some(parent) = config.path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| {
                RepositoryError::StorageUnavailable {
                    path: parent.display().to_string(),
                    source: e,
                }
            })?;
        }
    }

    // mode=rwc creates the file when absent
    let db_url = format!("sqlite://{}?mode=rwc", config.path.display());

    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(5)
        .min_connections(1)
        .sqlx_logging(true)
        .sqlx_logging_level(log::LevelFilter::Debug);

    let db = Database::connect(opt)
        .await
        .into_response("in database connect")?;

    Migrator::up(&db, None)
        .await
        .into_response("in migrator up")?;

    Ok(db)
}
