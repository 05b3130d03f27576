pub mod add;
pub mod import;
pub mod init_db;
pub mod list;
pub mod rank;

use anyhow::{Context, Result};
use nearschool::{MySqlSchoolStore, StoreConfig};

/// Connect to the record store from `--database-url` or the `DB_*` variables.
pub async fn connect(database_url: Option<String>) -> Result<MySqlSchoolStore> {
    let config = match database_url {
        Some(url) => StoreConfig::from_url(url),
        None => StoreConfig::from_env().context(
            "DATABASE_URL or DB_NAME environment variable not set. Use --database-url or set DB_NAME",
        )?,
    };

    MySqlSchoolStore::connect(&config)
        .await
        .context("Failed to connect to database")
}
