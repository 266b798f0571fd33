use async_trait::async_trait;
use crate::books::domain::model::Catalog;
use crate::books::dto::BookDto;
use crate::catalog::command::parse_number;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct AddBookCommand<'s> {
    catalog_service: &'s dyn CatalogService,
}

impl<'s> AddBookCommand<'s> {
    pub fn new(catalog_service: &'s dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug)]
pub struct AddBookCommandRequest {
    pub title: String,
    pub author: String,
    pub year: String,
}

impl AddBookCommandRequest {
    pub fn new(title: &str, author: &str, year: &str) -> Self {
        Self {
            title: title.trim().to_string(),
            author: author.trim().to_string(),
            year: year.trim().to_string(),
        }
    }
}

#[derive(Debug)]
pub struct AddBookCommandResponse {
    pub book: BookDto,
}

impl AddBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl<'s> Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand<'s> {
    async fn execute(&self, catalog: &mut Catalog, req: AddBookCommandRequest) -> Result<AddBookCommandResponse, CommandError> {
        let year: i32 = parse_number(req.year.as_str(), "year")?;
        self.catalog_service.add_book(catalog, req.title.as_str(), req.author.as_str(), year).await
            .map_err(CommandError::from).map(AddBookCommandResponse::new)
    }
}
