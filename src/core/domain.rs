use std::path::{Path, PathBuf};

pub type BookId = i64;

pub const DEFAULT_STORE: &str = "books.json";

// Identifiable defines common traits that can be shared by persistent objects
pub trait Identifiable: Sync + Send {
    fn id(&self) -> BookId;
}

// Configuration abstracts config options for the catalog
#[derive(Debug, PartialEq, Clone)]
pub struct Configuration {
    pub store_path: PathBuf,
}

impl Configuration {
    pub fn new(store_path: &Path) -> Self {
        Configuration {
            store_path: store_path.to_path_buf(),
        }
    }

    // sidecar holding the id sequence, e.g. books.json.meta
    pub fn sequence_path(&self) -> PathBuf {
        let mut name = self.store_path.file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| DEFAULT_STORE.into());
        name.push(".meta");
        self.store_path.with_file_name(name)
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::new(Path::new(DEFAULT_STORE))
    }
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};
    use crate::core::domain::Configuration;

    #[tokio::test]
    async fn test_should_build_config() {
        let config = Configuration::default();
        assert_eq!(PathBuf::from("books.json"), config.store_path);
        assert_eq!(PathBuf::from("books.json.meta"), config.sequence_path());
    }

    #[tokio::test]
    async fn test_should_place_sequence_next_to_store() {
        let config = Configuration::new(Path::new("/tmp/shelf/library.json"));
        assert_eq!(PathBuf::from("/tmp/shelf/library.json.meta"), config.sequence_path());
    }
}
