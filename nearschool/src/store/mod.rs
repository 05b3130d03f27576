//! Record store contract and implementations.
//!
//! The store is an explicitly constructed handle passed to whoever issues
//! queries. [`MemorySchoolStore`] keeps rows in process memory;
//! `MySqlSchoolStore` (feature `mysql`) talks to a MySQL `schools` table.

use async_trait::async_trait;

use crate::error::Result;
use crate::school::{NewSchool, School};

mod memory;
#[cfg(feature = "mysql")]
mod mysql;

pub use memory::MemorySchoolStore;
#[cfg(feature = "mysql")]
pub use mysql::MySqlSchoolStore;

/// Persistence for school records.
///
/// Implementations only insert and list; rows are never updated or removed.
#[async_trait]
pub trait SchoolStore: Send + Sync {
    /// Persist one school and return the identifier the store assigned.
    async fn insert(&self, school: &NewSchool) -> Result<i64>;

    /// Every persisted school, in no particular order.
    async fn list_all(&self) -> Result<Vec<School>>;
}
