pub mod service;

use async_trait::async_trait;
use crate::books::domain::model::{BookEntity, Catalog, Matches};
use crate::books::dto::BookDto;
use crate::core::domain::BookId;
use crate::core::library::{BookStatus, LibraryResult};

// CatalogService applies each operation to the caller's catalog and persists the
// result. A failed operation leaves the catalog as it was.
#[async_trait]
pub trait CatalogService: Sync + Send {
    async fn load_catalog(&self) -> LibraryResult<Catalog>;
    async fn save_catalog(&self, catalog: &Catalog) -> LibraryResult<()>;
    async fn add_book(&self, catalog: &mut Catalog, title: &str, author: &str, year: i32) -> LibraryResult<BookDto>;
    async fn remove_book(&self, catalog: &mut Catalog, id: BookId) -> LibraryResult<BookDto>;
    async fn update_status(&self, catalog: &mut Catalog, id: BookId, status: BookStatus) -> LibraryResult<BookDto>;
    fn find_books<'a>(&self, catalog: &'a Catalog, query: &str) -> Matches<'a>;
    fn list_books<'a>(&self, catalog: &'a Catalog) -> std::slice::Iter<'a, BookEntity>;
}
