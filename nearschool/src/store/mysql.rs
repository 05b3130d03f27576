use async_trait::async_trait;
use sqlx::mysql::{MySqlPool, MySqlPoolOptions};

use super::SchoolStore;
use crate::config::StoreConfig;
use crate::error::{Result, SchoolError};
use crate::school::{NewSchool, School};

const SQL_CREATE_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS schools (
  id BIGINT NOT NULL AUTO_INCREMENT PRIMARY KEY,
  name VARCHAR(255) NOT NULL,
  address VARCHAR(512) NOT NULL,
  latitude DOUBLE NOT NULL,
  longitude DOUBLE NOT NULL
)
"#;

const SQL_INSERT_SCHOOL: &str = r#"
INSERT INTO schools (name, address, latitude, longitude)
VALUES (?, ?, ?, ?)
"#;

const SQL_LIST_SCHOOLS: &str = r#"
SELECT
  id,
  name,
  address,
  latitude,
  longitude
FROM schools
"#;

/// Record store backed by a MySQL `schools` table.
#[derive(Debug, Clone)]
pub struct MySqlSchoolStore {
    pool: MySqlPool,
}

impl MySqlSchoolStore {
    /// Open a connection pool described by `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the server cannot
    /// be reached.
    pub async fn connect(config: &StoreConfig) -> Result<Self> {
        let pool = MySqlPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.connect_timeout)
            .connect_with(config.connect_options()?)
            .await?;

        Ok(Self { pool })
    }

    /// Wrap an existing pool.
    pub fn from_pool(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// The underlying pool.
    pub fn pool(&self) -> &MySqlPool {
        &self.pool
    }

    /// Create the `schools` table if it does not exist yet.
    pub async fn ensure_schema(&self) -> Result<()> {
        sqlx::query(SQL_CREATE_TABLE).execute(&self.pool).await?;
        tracing::debug!("schools table ready");
        Ok(())
    }
}

#[async_trait]
impl SchoolStore for MySqlSchoolStore {
    async fn insert(&self, school: &NewSchool) -> Result<i64> {
        let result = sqlx::query(SQL_INSERT_SCHOOL)
            .bind(&school.name)
            .bind(&school.address)
            .bind(school.latitude)
            .bind(school.longitude)
            .execute(&self.pool)
            .await?;

        i64::try_from(result.last_insert_id()).map_err(|_| {
            SchoolError::Store(format!(
                "insert id {} does not fit in i64",
                result.last_insert_id()
            ))
        })
    }

    async fn list_all(&self) -> Result<Vec<School>> {
        let rows = sqlx::query_as::<_, School>(SQL_LIST_SCHOOLS)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }
}
