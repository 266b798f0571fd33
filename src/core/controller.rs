use crate::core::command::CommandError;
use crate::core::domain::Configuration;
use crate::core::repository::RepositoryStore;

#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Configuration,
    pub store: RepositoryStore,
}

impl AppState {
    pub fn new(config: Configuration, store: RepositoryStore) -> AppState {
        AppState {
            config,
            store,
        }
    }
}

// One line shown to the user when a menu action fails.
pub fn user_message(err: &CommandError) -> String {
    match err {
        CommandError::NotFound { .. } => {
            "Book not found.".to_string()
        }
        CommandError::Validation { message, .. } => {
            format!("Invalid input: {}", message)
        }
        CommandError::Storage { message } => {
            format!("Could not save the catalog: {}", message)
        }
        CommandError::Serialization { message } => {
            format!("Could not save the catalog: {}", message)
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::command::CommandError;
    use crate::core::controller::{AppState, user_message};
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;

    #[tokio::test]
    async fn test_should_build_state() {
        let state = AppState::new(Configuration::default(), RepositoryStore::Memory);
        assert!(!state.store.persistent());
    }

    #[tokio::test]
    async fn test_should_map_user_messages() {
        assert_eq!("Book not found.", user_message(&CommandError::NotFound { message: "id 4".to_string() }));
        assert_eq!("Invalid input: year must be a number",
                   user_message(&CommandError::validation("year must be a number", "year")));
        assert_eq!("Could not save the catalog: disk full",
                   user_message(&CommandError::Storage { message: "disk full".to_string() }));
    }
}
