use serde::{Deserialize, Serialize};

use crate::ids::{LibraryId, ShelfId};

/// A single book: two identity fields and two back-references.
///
/// Books are pure data. Both back-references start absent and are written
/// only by a shelf- or library-level sync pass; a book never updates itself
/// or queries its container.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Book {
    /// Display title.
    pub title: String,
    /// Display author.
    pub author: String,
    /// Back-reference to the owning shelf, absent until a sync pass binds it.
    pub shelf: Option<ShelfId>,
    /// Back-reference to the owning library, absent until a sync pass binds it.
    pub library: Option<LibraryId>,
}

impl Book {
    /// Creates a book with both back-references absent.
    #[must_use]
    pub fn new(title: &str, author: &str) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            shelf: None,
            library: None,
        }
    }
}
