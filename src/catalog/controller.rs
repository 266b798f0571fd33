use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::debug;
use crate::books::domain::model::Catalog;
use crate::books::dto::BookDto;
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
use crate::catalog::command::find_books_cmd::{FindBooksCommand, FindBooksCommandRequest};
use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest};
use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest};
use crate::catalog::command::update_status_cmd::{UpdateStatusCommand, UpdateStatusCommandRequest};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::core::controller::user_message;
use crate::core::library::{LibraryError, LibraryResult};

const MENU: &str = "
1. Add a book
2. Remove a book
3. Search books
4. List all books
5. Change book status
0. Exit
";

// why a menu step stopped before finishing
enum Interrupt {
    Eof,
    Invalid(CommandError),
    Io(LibraryError),
}

impl From<LibraryError> for Interrupt {
    fn from(other: LibraryError) -> Self {
        Interrupt::Io(other)
    }
}

impl From<std::io::Error> for Interrupt {
    fn from(other: std::io::Error) -> Self {
        Interrupt::Io(LibraryError::from(other))
    }
}

type Step = Result<(), Interrupt>;

/// Interactive menu over the catalog. Reads one answer per line from `input`
/// and writes prompts and results to `output`; failed actions and unreadable
/// answers are reported and the loop carries on. End of input ends the
/// session like `0`.
pub struct CatalogController<'s> {
    catalog_service: &'s dyn CatalogService,
}

impl<'s> CatalogController<'s> {
    pub fn new(catalog_service: &'s dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }

    pub async fn run<R, W>(&self, catalog: &mut Catalog, mut input: R, output: &mut W) -> LibraryResult<()>
        where R: AsyncBufRead + Unpin, W: Write {
        loop {
            write!(output, "{}", MENU)?;
            let step = match prompt(&mut input, output, "Choose an action: ").await {
                Ok(choice) => {
                    debug!(choice = choice.trim(), "menu choice");
                    match choice.trim() {
                        "1" => self.add_book(catalog, &mut input, output).await,
                        "2" => self.remove_book(catalog, &mut input, output).await,
                        "3" => self.find_books(catalog, &mut input, output).await,
                        "4" => self.list_books(catalog, output).await,
                        "5" => self.update_status(catalog, &mut input, output).await,
                        "0" => break,
                        _ => writeln!(output, "Invalid choice, try again.").map_err(Interrupt::from),
                    }
                }
                Err(err) => Err(err),
            };
            match step {
                Ok(()) => {}
                Err(Interrupt::Eof) => break,
                Err(Interrupt::Invalid(err)) => {
                    debug!(error = ?err, "unreadable answer");
                    writeln!(output, "{}", user_message(&err))?;
                }
                Err(Interrupt::Io(err)) => return Err(err),
            }
        }
        writeln!(output, "Goodbye.")?;
        output.flush()?;
        Ok(())
    }

    async fn add_book<R, W>(&self, catalog: &mut Catalog, input: &mut R, output: &mut W) -> Step
        where R: AsyncBufRead + Unpin, W: Write {
        let title = prompt(input, output, "Title: ").await?;
        let author = prompt(input, output, "Author: ").await?;
        let year = prompt(input, output, "Year: ").await?;
        let req = AddBookCommandRequest::new(title.as_str(), author.as_str(), year.as_str());
        let res = AddBookCommand::new(self.catalog_service).execute(catalog, req).await;
        Ok(report(output, res.map(|r| format!("Added: {}", r.book)))?)
    }

    async fn remove_book<R, W>(&self, catalog: &mut Catalog, input: &mut R, output: &mut W) -> Step
        where R: AsyncBufRead + Unpin, W: Write {
        let book_id = prompt(input, output, "Book id to remove: ").await?;
        let req = RemoveBookCommandRequest::new(book_id.as_str());
        let res = RemoveBookCommand::new(self.catalog_service).execute(catalog, req).await;
        Ok(report(output, res.map(|r| format!("Removed: {}", r.book)))?)
    }

    async fn find_books<R, W>(&self, catalog: &mut Catalog, input: &mut R, output: &mut W) -> Step
        where R: AsyncBufRead + Unpin, W: Write {
        let query = prompt(input, output, "Title, author or year to search for: ").await?;
        let res = FindBooksCommand::new(self.catalog_service)
            .execute(catalog, FindBooksCommandRequest::new(query.as_str())).await;
        Ok(report(output, res.map(|r| render(&r.books, "No books found.")))?)
    }

    async fn list_books<W: Write>(&self, catalog: &mut Catalog, output: &mut W) -> Step {
        let res = ListBooksCommand::new(self.catalog_service)
            .execute(catalog, ListBooksCommandRequest::default()).await;
        Ok(report(output, res.map(|r| render(&r.books, "The library is empty.")))?)
    }

    async fn update_status<R, W>(&self, catalog: &mut Catalog, input: &mut R, output: &mut W) -> Step
        where R: AsyncBufRead + Unpin, W: Write {
        let book_id = prompt(input, output, "Book id: ").await?;
        let status = prompt(input, output, "New status (1 - available, 2 - checked_out): ").await?;
        let status = match status.trim() {
            "1" => "available",
            "2" => "checked_out",
            other => other,
        };
        let req = UpdateStatusCommandRequest::new(book_id.as_str(), status);
        let res = UpdateStatusCommand::new(self.catalog_service).execute(catalog, req).await;
        Ok(report(output, res.map(|r| format!("Updated: {}", r.book)))?)
    }
}

// reads raw bytes so that a line which is not UTF-8 only spoils that answer
async fn prompt<R, W>(input: &mut R, output: &mut W, text: &str) -> Result<String, Interrupt>
    where R: AsyncBufRead + Unpin, W: Write {
    write!(output, "{}", text)?;
    output.flush()?;
    let mut line = Vec::new();
    if input.read_until(b'\n', &mut line).await? == 0 {
        return Err(Interrupt::Eof);
    }
    if line.last() == Some(&b'\n') {
        line.pop();
        if line.last() == Some(&b'\r') {
            line.pop();
        }
    }
    String::from_utf8(line)
        .map_err(|_| Interrupt::Invalid(CommandError::validation("input is not valid UTF-8", "encoding")))
}

fn render(books: &[BookDto], empty: &str) -> String {
    if books.is_empty() {
        return empty.to_string();
    }
    books.iter().map(|b| b.to_string()).collect::<Vec<_>>().join("\n")
}

fn report<W: Write>(output: &mut W, res: Result<String, CommandError>) -> LibraryResult<()> {
    match res {
        Ok(text) => writeln!(output, "{}", text)?,
        Err(err) => {
            debug!(error = ?err, "menu action failed");
            writeln!(output, "{}", user_message(&err))?
        }
    }
    Ok(())
}
