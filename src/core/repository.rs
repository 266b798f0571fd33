use async_trait::async_trait;
use crate::core::library::LibraryResult;

// Repository persists a whole snapshot at a time; there are no partial writes.
#[async_trait]
pub trait Repository<Entity>: Sync + Send {
    // loads the snapshot, or an empty one when nothing was stored yet
    async fn load(&self) -> LibraryResult<Entity>;

    // replaces the stored snapshot and returns the number of records written
    async fn save(&self, entity: &Entity) -> LibraryResult<usize>;

    // human readable location used in logs
    fn location(&self) -> String;
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum RepositoryStore {
    JsonFile,
    Memory,
}

impl RepositoryStore {
    pub fn persistent(&self) -> bool {
        match self {
            RepositoryStore::JsonFile => true,
            RepositoryStore::Memory => false,
        }
    }
}
