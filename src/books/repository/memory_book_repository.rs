use std::sync::Mutex;

use async_trait::async_trait;
use tracing::debug;

use crate::books::domain::model::Catalog;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;

// MemoryBookRepository backs an ephemeral session; nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryBookRepository {
    snapshot: Mutex<Catalog>,
}

impl MemoryBookRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Repository<Catalog> for MemoryBookRepository {
    async fn load(&self) -> LibraryResult<Catalog> {
        let snapshot = self.snapshot.lock()
            .map_err(|_| LibraryError::storage("memory store poisoned", None))?;
        Ok(snapshot.clone())
    }

    async fn save(&self, catalog: &Catalog) -> LibraryResult<usize> {
        let mut snapshot = self.snapshot.lock()
            .map_err(|_| LibraryError::storage("memory store poisoned", None))?;
        *snapshot = catalog.clone();
        debug!(books = catalog.len(), "saved catalog in memory");
        Ok(catalog.len())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}
