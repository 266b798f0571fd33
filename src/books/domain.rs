use crate::core::domain::Identifiable;
use crate::core::library::BookStatus;

pub mod model;

pub trait Book: Identifiable {
    fn title(&self) -> &str;
    fn author(&self) -> &str;
    fn year(&self) -> i32;
    fn status(&self) -> BookStatus;

    fn is_available(&self) -> bool {
        self.status() == BookStatus::Available
    }

    // `needle` is the lowercased query; the year must equal the raw query exactly
    fn matches(&self, query: &str, needle: &str) -> bool {
        self.title().to_lowercase().contains(needle) ||
            self.author().to_lowercase().contains(needle) ||
            self.year().to_string() == query
    }
}
