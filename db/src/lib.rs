pub mod models;
pub mod test_utils;

use common::config::Config;
use sea_orm::{Database, DatabaseConnection};
use std::path::Path;

/// Opens the application database from `DATABASE_PATH`.
///
/// Accepts either a full DSN or a bare SQLite file path; for a file path the
/// parent directory is created on demand since SQLite will not create
/// intermediate directories itself.
pub async fn connect() -> DatabaseConnection {
    let path_or_url = Config::get().database_path.clone();
    let url = if path_or_url.starts_with("sqlite:")
        || path_or_url.starts_with("postgres://")
        || path_or_url.starts_with("mysql://")
    {
        path_or_url
    } else {
        if let Some(parent) = Path::new(&path_or_url).parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        format!("sqlite://{path_or_url}?mode=rwc")
    };

    Database::connect(&url)
        .await
        .expect("Failed to connect to database")
}
