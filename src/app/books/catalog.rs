//! The in-memory cache of the book catalog
//!
//! There are no partial updates: every mutation (create, update, delete) is
//! followed by a full refresh from the list endpoint, so the rendered list
//! always matches server state after an action completes. The store itself is
//! pure; the screens sequence `begin_refresh` and `finish_refresh` around the
//! actual network call.

use crate::app::notice::Notice;
use crate::shared::Book;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CatalogStore {
    books: Vec<Book>,
    loading: bool,
}
impl CatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Signal the start of a list fetch
    pub fn begin_refresh(&mut self) {
        self.loading = true;
    }

    /// Apply the outcome of a list fetch
    ///
    /// On success the whole collection is replaced. On failure the previous
    /// collection stays in place so the list keeps showing stale-but-valid
    /// data, and the returned notice must be surfaced to the user. There is no
    /// automatic retry.
    pub fn finish_refresh(&mut self, outcome: Result<Vec<Book>, String>) -> Option<Notice> {
        self.loading = false;
        match outcome {
            Ok(books) => {
                self.books = books;
                None
            }
            Err(msg) => Some(Notice::error(if msg.is_empty() {
                "Failed to fetch books".to_string()
            } else {
                msg
            })),
        }
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Lookup by id, for edit/delete targeting only
    pub fn find(&self, id: &str) -> Option<&Book> {
        self.books.iter().find(|b| b.id == id)
    }
}
