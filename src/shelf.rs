use serde::{Deserialize, Serialize};

use crate::ids::{BookId, LibraryId};

/// A shelf: a named, ordered collection of books plus a back-reference to
/// the library that holds it.
///
/// The book list is ordered and may hold duplicates. Callers may push onto
/// it directly; doing so does not touch the books' back-references until the
/// catalog runs a sync pass over this shelf.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Shelf {
    /// Display name.
    pub name: String,
    /// Books on this shelf, in insertion order.
    pub books: Vec<BookId>,
    /// Back-reference to the owning library, absent until a sync pass binds it.
    pub library: Option<LibraryId>,
}

impl Shelf {
    /// Creates a shelf with its own copy of `books` and no library yet.
    #[must_use]
    pub fn new(name: &str, books: &[BookId]) -> Self {
        Self {
            name: name.to_string(),
            books: books.to_vec(),
            library: None,
        }
    }
}
