use async_trait::async_trait;
use crate::books::domain::model::Catalog;
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct FindBooksCommand<'s> {
    catalog_service: &'s dyn CatalogService,
}

impl<'s> FindBooksCommand<'s> {
    pub fn new(catalog_service: &'s dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug)]
pub struct FindBooksCommandRequest {
    pub query: String,
}

impl FindBooksCommandRequest {
    pub fn new(query: &str) -> Self {
        Self {
            query: query.trim().to_string(),
        }
    }
}

#[derive(Debug)]
pub struct FindBooksCommandResponse {
    pub books: Vec<BookDto>,
}

#[async_trait]
impl<'s> Command<FindBooksCommandRequest, FindBooksCommandResponse> for FindBooksCommand<'s> {
    async fn execute(&self, catalog: &mut Catalog, req: FindBooksCommandRequest) -> Result<FindBooksCommandResponse, CommandError> {
        let books = self.catalog_service.find_books(catalog, req.query.as_str())
            .map(BookDto::from)
            .collect();
        Ok(FindBooksCommandResponse { books })
    }
}
