use async_trait::async_trait;
use crate::books::domain::model::Catalog;
use crate::books::dto::BookDto;
use crate::catalog::command::parse_book_id;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct RemoveBookCommand<'s> {
    catalog_service: &'s dyn CatalogService,
}

impl<'s> RemoveBookCommand<'s> {
    pub fn new(catalog_service: &'s dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug)]
pub struct RemoveBookCommandRequest {
    pub book_id: String,
}

impl RemoveBookCommandRequest {
    pub fn new(book_id: &str) -> Self {
        Self {
            book_id: book_id.to_string(),
        }
    }
}

#[derive(Debug)]
pub struct RemoveBookCommandResponse {
    pub book: BookDto,
}

impl RemoveBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl<'s> Command<RemoveBookCommandRequest, RemoveBookCommandResponse> for RemoveBookCommand<'s> {
    async fn execute(&self, catalog: &mut Catalog, req: RemoveBookCommandRequest) -> Result<RemoveBookCommandResponse, CommandError> {
        let book_id = parse_book_id(req.book_id.as_str())?;
        self.catalog_service.remove_book(catalog, book_id).await
            .map_err(CommandError::from).map(RemoveBookCommandResponse::new)
    }
}
