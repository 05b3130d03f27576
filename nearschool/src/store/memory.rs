use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use parking_lot::RwLock;

use super::SchoolStore;
use crate::error::Result;
use crate::school::{NewSchool, School};

/// In-process store. Identifiers start at 1 and increase by one per insert.
#[derive(Debug)]
pub struct MemorySchoolStore {
    rows: RwLock<Vec<School>>,
    next_id: AtomicI64,
}

impl MemorySchoolStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }

    /// Number of stored schools.
    pub fn len(&self) -> usize {
        self.rows.read().len()
    }

    /// Whether the store holds no schools.
    pub fn is_empty(&self) -> bool {
        self.rows.read().is_empty()
    }
}

impl Default for MemorySchoolStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SchoolStore for MemorySchoolStore {
    async fn insert(&self, school: &NewSchool) -> Result<i64> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.rows.write().push(school.clone().into_school(id));
        Ok(id)
    }

    async fn list_all(&self) -> Result<Vec<School>> {
        Ok(self.rows.read().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_insert_assigns_sequential_ids() {
        let store = MemorySchoolStore::new();
        assert!(store.is_empty());

        let a = store
            .insert(&NewSchool::new("A", "1 Road", 1.0, 2.0))
            .await
            .unwrap();
        let b = store
            .insert(&NewSchool::new("B", "2 Road", 3.0, 4.0))
            .await
            .unwrap();

        assert_eq!((a, b), (1, 2));
        assert_eq!(store.len(), 2);
    }

    #[tokio::test]
    async fn test_list_all_returns_every_row() {
        let store = MemorySchoolStore::new();
        store
            .insert(&NewSchool::new("A", "1 Road", 1.0, 2.0))
            .await
            .unwrap();
        store
            .insert(&NewSchool::new("B", "2 Road", 300.0, -400.0))
            .await
            .unwrap();

        let rows = store.list_all().await.unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name, "A");
        assert_eq!(rows[1].id, 2);
        assert_eq!(rows[1].latitude, 300.0);
    }

    #[tokio::test]
    async fn test_concurrent_inserts_get_unique_ids() {
        let store = Arc::new(MemorySchoolStore::new());
        let mut handles = Vec::new();
        for i in 0..32 {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                store
                    .insert(&NewSchool::new(format!("S{}", i), "Road", 0.0, 0.0))
                    .await
                    .unwrap()
            }));
        }

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap());
        }
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 32);
        assert_eq!(store.len(), 32);
    }
}
