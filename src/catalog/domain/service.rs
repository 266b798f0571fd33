use async_trait::async_trait;
use tracing::{info, warn};
use crate::books::domain::model::{BookEntity, Catalog, Matches};
use crate::books::dto::BookDto;
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::core::domain::BookId;
use crate::core::library::{BookStatus, LibraryError, LibraryResult};
use crate::core::repository::Repository;
use crate::utils::date::current_year;

pub struct CatalogServiceImpl {
    book_repository: Box<dyn BookRepository>,
}

impl CatalogServiceImpl {
    pub fn new(book_repository: Box<dyn BookRepository>) -> Self {
        Self {
            book_repository,
        }
    }

    // persists the staged catalog and only then hands it to the caller
    async fn commit(&self, catalog: &mut Catalog, staged: Catalog) -> LibraryResult<()> {
        if let Err(err) = self.book_repository.save(&staged).await {
            warn!(store = self.book_repository.location().as_str(), error = %err, "could not persist catalog");
            return Err(err);
        }
        *catalog = staged;
        Ok(())
    }
}

pub fn validate_year(year: i32) -> LibraryResult<()> {
    let latest = current_year();
    if year <= 0 || year > latest {
        return Err(LibraryError::validation(
            format!("year {} must be between 1 and {}", year, latest).as_str(), Some("year".to_string())));
    }
    Ok(())
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn load_catalog(&self) -> LibraryResult<Catalog> {
        self.book_repository.load().await
    }

    async fn save_catalog(&self, catalog: &Catalog) -> LibraryResult<()> {
        self.book_repository.save(catalog).await.map(|_| ())
    }

    async fn add_book(&self, catalog: &mut Catalog, title: &str, author: &str, year: i32) -> LibraryResult<BookDto> {
        validate_year(year)?;
        let mut staged = catalog.clone();
        let book = BookDto::from(staged.insert(title, author, year)?);
        self.commit(catalog, staged).await?;
        info!(book_id = book.book_id, "added book");
        Ok(book)
    }

    async fn remove_book(&self, catalog: &mut Catalog, id: BookId) -> LibraryResult<BookDto> {
        let mut staged = catalog.clone();
        let removed = staged.remove(id)
            .ok_or_else(|| LibraryError::not_found(format!("book {} not found", id).as_str()))?;
        self.commit(catalog, staged).await?;
        info!(book_id = id, "removed book");
        Ok(BookDto::from(&removed))
    }

    async fn update_status(&self, catalog: &mut Catalog, id: BookId, status: BookStatus) -> LibraryResult<BookDto> {
        let mut staged = catalog.clone();
        let book = staged.set_status(id, status)
            .map(BookDto::from)
            .ok_or_else(|| LibraryError::not_found(format!("book {} not found", id).as_str()))?;
        self.commit(catalog, staged).await?;
        info!(book_id = id, status = %status, "updated book status");
        Ok(book)
    }

    fn find_books<'a>(&self, catalog: &'a Catalog, query: &str) -> Matches<'a> {
        catalog.search(query)
    }

    fn list_books<'a>(&self, catalog: &'a Catalog) -> std::slice::Iter<'a, BookEntity> {
        catalog.iter()
    }
}
