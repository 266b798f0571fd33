use async_trait::async_trait;
use crate::books::domain::model::Catalog;
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct ListBooksCommand<'s> {
    catalog_service: &'s dyn CatalogService,
}

impl<'s> ListBooksCommand<'s> {
    pub fn new(catalog_service: &'s dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Default)]
pub struct ListBooksCommandRequest {}

#[derive(Debug)]
pub struct ListBooksCommandResponse {
    pub books: Vec<BookDto>,
}

#[async_trait]
impl<'s> Command<ListBooksCommandRequest, ListBooksCommandResponse> for ListBooksCommand<'s> {
    async fn execute(&self, catalog: &mut Catalog, _req: ListBooksCommandRequest) -> Result<ListBooksCommandResponse, CommandError> {
        let books = self.catalog_service.list_books(catalog)
            .map(BookDto::from)
            .collect();
        Ok(ListBooksCommandResponse { books })
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::model::Catalog;
    use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::Command;
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;

    #[tokio::test]
    async fn test_should_run_list_books() {
        let svc = factory::create_catalog_service(&Configuration::default(), RepositoryStore::Memory);
        let cmd = ListBooksCommand::new(svc.as_ref());
        let mut catalog = Catalog::new();

        let res = cmd.execute(&mut catalog, ListBooksCommandRequest::default()).await.expect("should list empty");
        assert!(res.books.is_empty());

        catalog.insert("Dune", "Herbert", 1965).expect("should insert book");
        catalog.insert("Emma", "Austen", 1815).expect("should insert book");
        let res = cmd.execute(&mut catalog, ListBooksCommandRequest::default()).await.expect("should list");
        let titles: Vec<_> = res.books.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(vec!["Dune", "Emma"], titles);
    }
}
