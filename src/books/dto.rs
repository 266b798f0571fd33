use std::fmt;
use std::fmt::{Display, Formatter};
use crate::books::domain::Book;
use crate::books::domain::model::BookEntity;
use crate::core::domain::{BookId, Identifiable};
use crate::core::library::BookStatus;

// BookDto is a data transfer object handed out by the catalog service
#[derive(Debug, Clone, PartialEq)]
pub struct BookDto {
    pub book_id: BookId,
    pub title: String,
    pub author: String,
    pub year: i32,
    pub status: BookStatus,
}

impl BookDto {
    pub fn new(book_id: BookId, title: &str, author: &str, year: i32, status: BookStatus) -> BookDto {
        BookDto {
            book_id,
            title: title.to_string(),
            author: author.to_string(),
            year,
            status,
        }
    }
}

impl Identifiable for BookDto {
    fn id(&self) -> BookId {
        self.book_id
    }
}

impl Book for BookDto {
    fn title(&self) -> &str {
        self.title.as_str()
    }

    fn author(&self) -> &str {
        self.author.as_str()
    }

    fn year(&self) -> i32 {
        self.year
    }

    fn status(&self) -> BookStatus {
        self.status
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            book_id: other.book_id,
            title: other.title.to_string(),
            author: other.author.to_string(),
            year: other.year,
            status: other.status,
        }
    }
}

// id: title - author (year) - status
impl Display for BookDto {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} - {} ({}) - {}", self.book_id, self.title, self.author, self.year, self.status)
    }
}
