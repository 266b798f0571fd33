use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use serde::{Deserialize, Serialize};

#[derive(Debug)]
pub enum LibraryError {
    NotFound {
        message: String,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    // The backing store exists but cannot be trusted: unparsable json, unknown status
    // values or duplicate ids. Nothing is written back to a corrupt store.
    CorruptStore {
        message: String,
        path: String,
    },
    Serialization {
        message: String,
    },
    Storage {
        message: String,
        path: Option<String>,
    },
}

impl LibraryError {
    pub fn not_found(message: &str) -> LibraryError {
        LibraryError::NotFound { message: message.to_string() }
    }

    pub fn validation(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Validation { message: message.to_string(), reason_code }
    }

    pub fn corrupt_store(message: &str, path: &str) -> LibraryError {
        LibraryError::CorruptStore { message: message.to_string(), path: path.to_string() }
    }

    pub fn serialization(message: &str) -> LibraryError {
        LibraryError::Serialization { message: message.to_string() }
    }

    pub fn storage(message: &str, path: Option<String>) -> LibraryError {
        LibraryError::Storage { message: message.to_string(), path }
    }

    // attaches the store location to an io error
    pub fn storage_at(err: std::io::Error, path: &str) -> LibraryError {
        LibraryError::storage(format!("{}", err).as_str(), Some(path.to_string()))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, LibraryError::NotFound { .. })
    }
}

impl From<std::io::Error> for LibraryError {
    fn from(err: std::io::Error) -> Self {
        LibraryError::storage(format!("{}", err).as_str(), None)
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        LibraryError::serialization(
            format!("serde json {}", err).as_str())
    }
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::NotFound { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Validation { message, reason_code } => {
                match reason_code {
                    Some(code) => write!(f, "{} ({})", message, code),
                    None => write!(f, "{}", message),
                }
            }
            LibraryError::CorruptStore { message, path } => {
                write!(f, "corrupt store {}: {}", path, message)
            }
            LibraryError::Serialization { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Storage { message, path } => {
                match path {
                    Some(path) => write!(f, "{}: {}", path, message),
                    None => write!(f, "{}", message),
                }
            }
        }
    }
}

impl std::error::Error for LibraryError {}

/// A specialized Result type for the catalog.
pub type LibraryResult<T> = Result<T, LibraryError>;

/// Circulation status of a book. The stored form is snake case; the labels
/// written by the earlier Russian-language tool are accepted when reading.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookStatus {
    #[default]
    #[serde(alias = "в наличии")]
    Available,
    #[serde(alias = "выдана")]
    CheckedOut,
}

impl BookStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookStatus::Available => "available",
            BookStatus::CheckedOut => "checked_out",
        }
    }
}

impl FromStr for BookStatus {
    type Err = LibraryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "available" | "в наличии" => Ok(BookStatus::Available),
            "checked_out" | "checked out" | "checked-out" | "выдана" => Ok(BookStatus::CheckedOut),
            other => Err(LibraryError::validation(
                format!("unknown status {:?}, expected available or checked_out", other).as_str(),
                Some("status".to_string()))),
        }
    }
}

impl Display for BookStatus {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
