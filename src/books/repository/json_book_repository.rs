use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::fs;
use tracing::{debug, info, warn};

use crate::books::domain::model::{BookEntity, Catalog};
use crate::core::domain::{BookId, Configuration};
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;
use crate::utils::json::to_pretty_json;

// JsonBookRepository keeps the catalog as a pretty printed json array of books,
// plus a small sidecar holding the id sequence.
#[derive(Debug)]
pub struct JsonBookRepository {
    store_path: PathBuf,
    sequence_path: PathBuf,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Sequence {
    next_id: BookId,
}

impl JsonBookRepository {
    pub fn new(config: &Configuration) -> Self {
        Self {
            store_path: config.store_path.clone(),
            sequence_path: config.sequence_path(),
        }
    }

    async fn read_optional(path: &Path) -> LibraryResult<Option<Vec<u8>>> {
        match fs::read(path).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(LibraryError::storage_at(err, path.display().to_string().as_str())),
        }
    }

    // writes next to the target first so an interrupted write keeps the old contents
    async fn replace(path: &Path, bytes: &[u8]) -> LibraryResult<()> {
        let display = path.display().to_string();
        let mut tmp_name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
        tmp_name.push(".tmp");
        let tmp_path = path.with_file_name(tmp_name);

        fs::write(&tmp_path, bytes).await
            .map_err(|err| LibraryError::storage_at(err, display.as_str()))?;
        if let Err(err) = fs::rename(&tmp_path, path).await {
            let _ = fs::remove_file(&tmp_path).await;
            return Err(LibraryError::storage_at(err, display.as_str()));
        }
        Ok(())
    }

    fn corrupt(&self, path: &Path, err: impl ToString) -> LibraryError {
        let path = path.display().to_string();
        warn!(path = path.as_str(), "store is not readable");
        LibraryError::corrupt_store(err.to_string().as_str(), path.as_str())
    }
}

#[async_trait]
impl Repository<Catalog> for JsonBookRepository {
    async fn load(&self) -> LibraryResult<Catalog> {
        let books: Vec<BookEntity> = match Self::read_optional(&self.store_path).await? {
            Some(bytes) => serde_json::from_slice(&bytes)
                .map_err(|err| self.corrupt(&self.store_path, err))?,
            None => {
                debug!(path = %self.store_path.display(), "no store yet, starting empty");
                vec![]
            }
        };
        let next_id = match Self::read_optional(&self.sequence_path).await? {
            Some(bytes) => {
                let seq: Sequence = serde_json::from_slice(&bytes)
                    .map_err(|err| self.corrupt(&self.sequence_path, err))?;
                Some(seq.next_id)
            }
            None => None,
        };
        let catalog = Catalog::restore(books, next_id)
            .map_err(|err| self.corrupt(&self.store_path, err))?;
        info!(path = %self.store_path.display(), books = catalog.len(), next_id = catalog.next_id(), "loaded catalog");
        Ok(catalog)
    }

    async fn save(&self, catalog: &Catalog) -> LibraryResult<usize> {
        // the sequence goes first: a failure after it only leaves a gap in the ids
        let seq = to_pretty_json(&Sequence { next_id: catalog.next_id() })?;
        Self::replace(&self.sequence_path, &seq).await?;
        let books = to_pretty_json(catalog.books())?;
        Self::replace(&self.store_path, &books).await?;
        debug!(path = %self.store_path.display(), books = catalog.len(), "saved catalog");
        Ok(catalog.len())
    }

    fn location(&self) -> String {
        self.store_path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use crate::books::domain::model::Catalog;
    use crate::books::repository::json_book_repository::JsonBookRepository;
    use crate::core::domain::Configuration;
    use crate::core::library::{BookStatus, LibraryError};
    use crate::core::repository::Repository;

    fn build_repo(dir: &TempDir) -> (Configuration, JsonBookRepository) {
        let config = Configuration::new(&dir.path().join("books.json"));
        let repo = JsonBookRepository::new(&config);
        (config, repo)
    }

    #[tokio::test]
    async fn test_should_load_empty_when_absent() {
        let dir = tempfile::tempdir().expect("tempdir");
        let (_, repo) = build_repo(&dir);
        let catalog = repo.load().await.expect("should load empty catalog");
        assert!(catalog.is_empty());
        assert_eq!(1, catalog.next_id());
    }

    #[tokio::test]
    async fn test_should_save_load_books() {
        let dir = tempfile::tempdir().expect("tempdir");
        let (_, repo) = build_repo(&dir);
        let mut catalog = Catalog::new();
        catalog.insert("Dune", "Herbert", 1965).expect("should insert book");
        catalog.insert("Война и мир", "Лев Толстой", 1869).expect("should insert book");
        catalog.set_status(2, BookStatus::CheckedOut);

        let size = repo.save(&catalog).await.expect("should save catalog");
        assert_eq!(2, size);

        let loaded = repo.load().await.expect("should load catalog");
        assert_eq!(catalog, loaded);
    }

    #[tokio::test]
    async fn test_should_write_stored_layout() {
        let dir = tempfile::tempdir().expect("tempdir");
        let (config, repo) = build_repo(&dir);
        let mut catalog = Catalog::new();
        catalog.insert("Мастер и Маргарита", "Булгаков", 1967).expect("should insert book");
        repo.save(&catalog).await.expect("should save catalog");

        let json = std::fs::read_to_string(&config.store_path).expect("should read store");
        let expected = "[\n    {\n        \"book_id\": 1,\n        \"title\": \"Мастер и Маргарита\",\n        \"author\": \"Булгаков\",\n        \"year\": 1967,\n        \"status\": \"available\"\n    }\n]";
        assert_eq!(expected, json);

        let seq = std::fs::read_to_string(config.sequence_path()).expect("should read sequence");
        assert_eq!("{\n    \"next_id\": 2\n}", seq);
    }

    #[tokio::test]
    async fn test_should_keep_sequence_after_removal() {
        let dir = tempfile::tempdir().expect("tempdir");
        let (_, repo) = build_repo(&dir);
        let mut catalog = Catalog::new();
        catalog.insert("a", "b", 2000).expect("should insert book");
        catalog.insert("c", "d", 2001).expect("should insert book");
        catalog.remove(2);
        repo.save(&catalog).await.expect("should save catalog");

        let mut loaded = repo.load().await.expect("should load catalog");
        assert_eq!(3, loaded.insert("e", "f", 2002).expect("should insert book").book_id);
    }

    #[tokio::test]
    async fn test_should_derive_sequence_without_sidecar() {
        let dir = tempfile::tempdir().expect("tempdir");
        let (config, repo) = build_repo(&dir);
        std::fs::write(&config.store_path,
                       r#"[{"book_id": 4, "title": "1984", "author": "Orwell", "year": 1949, "status": "выдана"}]"#)
            .expect("should write store");

        let catalog = repo.load().await.expect("should load legacy store");
        assert_eq!(5, catalog.next_id());
        assert_eq!(BookStatus::CheckedOut, catalog.get(4).expect("book").status);
    }

    #[tokio::test]
    async fn test_should_reject_malformed_store() {
        let dir = tempfile::tempdir().expect("tempdir");
        let (config, repo) = build_repo(&dir);
        std::fs::write(&config.store_path, "{not json").expect("should write store");
        let err = repo.load().await.expect_err("should reject store");
        assert!(matches!(err, LibraryError::CorruptStore { .. }));
    }

    #[tokio::test]
    async fn test_should_reject_unknown_status_in_store() {
        let dir = tempfile::tempdir().expect("tempdir");
        let (config, repo) = build_repo(&dir);
        std::fs::write(&config.store_path,
                       r#"[{"book_id": 1, "title": "1984", "author": "Orwell", "year": 1949, "status": "lost"}]"#)
            .expect("should write store");
        assert!(matches!(repo.load().await, Err(LibraryError::CorruptStore { .. })));
    }

    #[tokio::test]
    async fn test_should_reject_duplicate_ids_in_store() {
        let dir = tempfile::tempdir().expect("tempdir");
        let (config, repo) = build_repo(&dir);
        std::fs::write(&config.store_path,
                       r#"[{"book_id": 1, "title": "a", "author": "b", "year": 1949, "status": "available"},
                           {"book_id": 1, "title": "c", "author": "d", "year": 1950, "status": "available"}]"#)
            .expect("should write store");
        assert!(matches!(repo.load().await, Err(LibraryError::CorruptStore { .. })));
    }

    #[tokio::test]
    async fn test_should_reject_store_without_room_for_ids() {
        let dir = tempfile::tempdir().expect("tempdir");
        let (config, repo) = build_repo(&dir);
        std::fs::write(&config.store_path,
                       r#"[{"book_id": 9223372036854775807, "title": "a", "author": "b", "year": 1949, "status": "available"}]"#)
            .expect("should write store");
        assert!(matches!(repo.load().await, Err(LibraryError::CorruptStore { .. })));
    }

    #[tokio::test]
    async fn test_should_reject_malformed_sequence() {
        let dir = tempfile::tempdir().expect("tempdir");
        let (config, repo) = build_repo(&dir);
        std::fs::write(config.sequence_path(), "seven").expect("should write sequence");
        assert!(matches!(repo.load().await, Err(LibraryError::CorruptStore { .. })));
    }

    #[tokio::test]
    async fn test_should_surface_write_failures() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = Configuration::new(&dir.path().join("missing").join("books.json"));
        let repo = JsonBookRepository::new(&config);
        let err = repo.save(&Catalog::new()).await.expect_err("should fail to save");
        assert!(matches!(err, LibraryError::Storage { path: Some(_), .. }));
    }
}
