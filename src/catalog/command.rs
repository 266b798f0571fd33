pub mod add_book_cmd;
pub mod find_books_cmd;
pub mod list_books_cmd;
pub mod remove_book_cmd;
pub mod update_status_cmd;

use crate::core::command::CommandError;
use crate::core::domain::BookId;

// ids and years arrive as raw user text
pub(crate) fn parse_number<T: std::str::FromStr>(text: &str, field: &str) -> Result<T, CommandError> {
    text.trim().parse::<T>()
        .map_err(|_| CommandError::validation(format!("{} must be a whole number, got {:?}", field, text.trim()).as_str(), field))
}

pub(crate) fn parse_book_id(text: &str) -> Result<BookId, CommandError> {
    parse_number(text, "id")
}
