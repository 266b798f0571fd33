use std::str::FromStr;
use async_trait::async_trait;
use crate::books::domain::model::Catalog;
use crate::books::dto::BookDto;
use crate::catalog::command::parse_book_id;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::core::library::BookStatus;

pub struct UpdateStatusCommand<'s> {
    catalog_service: &'s dyn CatalogService,
}

impl<'s> UpdateStatusCommand<'s> {
    pub fn new(catalog_service: &'s dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug)]
pub struct UpdateStatusCommandRequest {
    pub book_id: String,
    pub status: String,
}

impl UpdateStatusCommandRequest {
    pub fn new(book_id: &str, status: &str) -> Self {
        Self {
            book_id: book_id.to_string(),
            status: status.to_string(),
        }
    }
}

#[derive(Debug)]
pub struct UpdateStatusCommandResponse {
    pub book: BookDto,
}

impl UpdateStatusCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl<'s> Command<UpdateStatusCommandRequest, UpdateStatusCommandResponse> for UpdateStatusCommand<'s> {
    async fn execute(&self, catalog: &mut Catalog, req: UpdateStatusCommandRequest) -> Result<UpdateStatusCommandResponse, CommandError> {
        let book_id = parse_book_id(req.book_id.as_str())?;
        // unknown statuses are rejected before the catalog is touched
        let status = BookStatus::from_str(req.status.as_str())?;
        self.catalog_service.update_status(catalog, book_id, status).await
            .map_err(CommandError::from).map(UpdateStatusCommandResponse::new)
    }
}
