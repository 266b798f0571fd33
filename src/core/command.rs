use async_trait::async_trait;
use crate::books::domain::model::Catalog;
use crate::core::library::LibraryError;

#[derive(Debug)]
pub enum CommandError {
    NotFound {
        message: String,
    },
    Serialization {
        message: String,
    },
    Storage {
        message: String,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
}

// Command runs one caller action against the catalog owned by the caller.
#[async_trait]
pub trait Command<Request, Response> {
    async fn execute(&self, catalog: &mut Catalog, req: Request) -> Result<Response, CommandError>;
}

impl CommandError {
    pub fn validation(message: &str, reason_code: &str) -> CommandError {
        CommandError::Validation { message: message.to_string(), reason_code: Some(reason_code.to_string()) }
    }
}

impl From<LibraryError> for CommandError {
    fn from(other: LibraryError) -> Self {
        match other {
            LibraryError::NotFound { message } => {
                CommandError::NotFound { message }
            }
            LibraryError::Validation { message, reason_code } => {
                CommandError::Validation { message, reason_code }
            }
            LibraryError::Serialization { message } => {
                CommandError::Serialization { message }
            }
            err @ LibraryError::CorruptStore { .. } => {
                CommandError::Storage { message: err.to_string() }
            }
            err @ LibraryError::Storage { .. } => {
                CommandError::Storage { message: err.to_string() }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::command::CommandError;
    use crate::core::library::LibraryError;

    #[tokio::test]
    async fn test_should_build_command_error() {
        let _ = CommandError::NotFound { message: "test".to_string() };
        let _ = CommandError::Serialization { message: "test".to_string() };
        let _ = CommandError::Storage { message: "test".to_string() };
        assert!(matches!(CommandError::validation("test", "year"),
            CommandError::Validation { message: _, reason_code: Some(_) }));
    }

    #[tokio::test]
    async fn test_should_convert_library_error() {
        assert!(matches!(CommandError::from(LibraryError::not_found("test")), CommandError::NotFound { .. }));
        assert!(matches!(CommandError::from(LibraryError::validation("test", None)), CommandError::Validation { .. }));
        assert!(matches!(CommandError::from(LibraryError::serialization("test")), CommandError::Serialization { .. }));
        match CommandError::from(LibraryError::storage("read only", Some("books.json".to_string()))) {
            CommandError::Storage { message } => assert_eq!("books.json: read only", message),
            other => panic!("unexpected {:?}", other),
        }
        assert!(matches!(CommandError::from(LibraryError::corrupt_store("bad", "books.json")), CommandError::Storage { .. }));
    }
}
