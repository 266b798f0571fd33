use std::collections::HashSet;
use std::slice;
use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::core::domain::{BookId, Identifiable};
use crate::core::library::{BookStatus, LibraryError, LibraryResult};

// BookEntity is one catalog record. Field order is the stored field order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BookEntity {
    pub book_id: BookId,
    pub title: String,
    pub author: String,
    pub year: i32,
    #[serde(default)]
    pub status: BookStatus,
}

impl BookEntity {
    pub fn new(book_id: BookId, title: &str, author: &str, year: i32) -> Self {
        Self {
            book_id,
            title: title.to_string(),
            author: author.to_string(),
            year,
            status: BookStatus::Available,
        }
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> BookId {
        self.book_id
    }
}

impl Book for BookEntity {
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

/// Catalog is the ordered collection of books owned by the caller, together
/// with the sequence that issues book ids.
///
/// `next_id` only ever grows, so an id that was removed is never handed out
/// again, and it is persisted with the books so this holds across restarts.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    books: Vec<BookEntity>,
    next_id: BookId,
}

impl Catalog {
    pub fn new() -> Self {
        Self {
            books: vec![],
            next_id: 1,
        }
    }

    /// Rebuilds a catalog from stored books. The stored sequence is raised
    /// above the largest id present when it is missing or stale.
    pub fn restore(books: Vec<BookEntity>, next_id: Option<BookId>) -> LibraryResult<Self> {
        let mut seen = HashSet::with_capacity(books.len());
        for book in &books {
            if !seen.insert(book.book_id) {
                return Err(LibraryError::validation(
                    format!("duplicate book id {}", book.book_id).as_str(), Some("book_id".to_string())));
            }
        }
        let after_max = match books.iter().map(|b| b.book_id).max() {
            Some(max) => max.checked_add(1).ok_or_else(|| LibraryError::validation(
                format!("book id {} leaves no room for new ids", max).as_str(), Some("book_id".to_string())))?,
            None => 1,
        };
        let next_id = next_id.unwrap_or(1).max(after_max).max(1);
        Ok(Self { books, next_id })
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn next_id(&self) -> BookId {
        self.next_id
    }

    pub fn books(&self) -> &[BookEntity] {
        self.books.as_slice()
    }

    pub fn iter(&self) -> slice::Iter<'_, BookEntity> {
        self.books.iter()
    }

    pub fn get(&self, id: BookId) -> Option<&BookEntity> {
        self.books.iter().find(|b| b.book_id == id)
    }

    /// Appends a new available book under a fresh id. Fails without
    /// touching the catalog once the id sequence is exhausted.
    pub fn insert(&mut self, title: &str, author: &str, year: i32) -> LibraryResult<&BookEntity> {
        let next_id = self.next_id.checked_add(1).ok_or_else(|| LibraryError::validation(
            "no book ids left in this catalog", Some("book_id".to_string())))?;
        let book = BookEntity::new(self.next_id, title, author, year);
        self.next_id = next_id;
        self.books.push(book);
        Ok(&self.books[self.books.len() - 1])
    }

    pub fn remove(&mut self, id: BookId) -> Option<BookEntity> {
        let pos = self.books.iter().position(|b| b.book_id == id)?;
        Some(self.books.remove(pos))
    }

    pub fn set_status(&mut self, id: BookId, status: BookStatus) -> Option<&BookEntity> {
        let book = self.books.iter_mut().find(|b| b.book_id == id)?;
        book.status = status;
        Some(book)
    }

    /// Lazily yields the books whose title or author contains `query`
    /// ignoring case, or whose year is exactly `query`. Clone the iterator
    /// to walk the matches again.
    pub fn search(&self, query: &str) -> Matches<'_> {
        Matches {
            books: self.books.iter(),
            query: query.to_string(),
            needle: query.to_lowercase(),
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Catalog::new()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a BookEntity;
    type IntoIter = slice::Iter<'a, BookEntity>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[derive(Debug, Clone)]
pub struct Matches<'a> {
    books: slice::Iter<'a, BookEntity>,
    query: String,
    needle: String,
}

impl<'a> Iterator for Matches<'a> {
    type Item = &'a BookEntity;

    fn next(&mut self) -> Option<Self::Item> {
        let (query, needle) = (self.query.as_str(), self.needle.as_str());
        self.books.by_ref().find(|b| b.matches(query, needle))
    }
}
