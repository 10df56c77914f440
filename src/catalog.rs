use serde::{Deserialize, Serialize};

use crate::{
    book::Book,
    ids::{BookId, LibraryId, ShelfId},
    library::Library,
    shelf::Shelf,
};

/// Arena that owns every library, shelf, and book.
///
/// Entities reference each other by id, never by pointer. Containment
/// (library→shelves, shelf→books) and the child-to-parent back-references
/// are two separate pieces of state: constructors bind them once, after
/// which nothing keeps them consistent until a caller runs one of the
/// `sync_*` passes. That staleness window is the point of the model, not an
/// oversight.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Catalog {
    /// All libraries, in creation order.
    libraries: Vec<Library>,
    /// All shelves, in creation order.
    shelves: Vec<Shelf>,
    /// All books, in creation order.
    books: Vec<Book>,
}

impl Catalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new book. Both back-references start absent.
    pub fn add_book(&mut self, title: &str, author: &str) -> BookId {
        let id = BookId::new(self.books.len());
        self.books.push(Book::new(title, author));
        id
    }

    /// Registers a new shelf holding its own copy of `books`.
    ///
    /// The shelf's library starts absent. Its books are synced immediately,
    /// so each one points back at the new shelf (and at no library yet).
    pub fn add_shelf(&mut self, name: &str, books: &[BookId]) -> ShelfId {
        let id = ShelfId::new(self.shelves.len());
        self.shelves.push(Shelf::new(name, books));
        self.sync_shelf_books(id);
        id
    }

    /// Registers a new library holding its own copy of `shelves`.
    ///
    /// Runs a full sync immediately: every listed shelf points back at the
    /// new library, and every book on those shelves points back at its
    /// shelf and the library.
    pub fn add_library(&mut self, name: &str, shelves: &[ShelfId]) -> LibraryId {
        let id = LibraryId::new(self.libraries.len());
        self.libraries.push(Library::new(name, shelves));
        self.sync_shelves(id);
        self.sync_books(id);
        id
    }

    /// Points every shelf currently listed by `library` back at it.
    ///
    /// Idempotent. Does not descend into books; pair with [`Self::sync_books`]
    /// for a full repair.
    pub fn sync_shelves(&mut self, library: LibraryId) {
        for shelf in self.library(library).shelves.clone() {
            self.shelf_mut(shelf).library = Some(library);
        }
    }

    /// Runs [`Self::sync_shelf_books`] for every shelf currently listed by
    /// `library`. Idempotent.
    pub fn sync_books(&mut self, library: LibraryId) {
        for shelf in self.library(library).shelves.clone() {
            self.sync_shelf_books(shelf);
        }
    }

    /// Points every book currently listed by `shelf` back at it, and at the
    /// shelf's current library.
    ///
    /// The shelf's own `library` may still be absent; the books then get an
    /// absent library back-reference too. Idempotent.
    pub fn sync_shelf_books(&mut self, shelf: ShelfId) {
        let owner = self.shelf(shelf).library;
        for book in self.shelf(shelf).books.clone() {
            let book = self.book_mut(book);
            book.shelf = Some(shelf);
            book.library = owner;
        }
    }

    /// Shelves of a library, in insertion order.
    ///
    /// # Panics
    ///
    /// Panics if `library` was issued by a different catalog.
    #[must_use]
    pub fn shelves_of(&self, library: LibraryId) -> &[ShelfId] {
        &self.library(library).shelves
    }

    /// Books on a shelf, in insertion order.
    ///
    /// # Panics
    ///
    /// Panics if `shelf` was issued by a different catalog.
    #[must_use]
    pub fn books_of(&self, shelf: ShelfId) -> &[BookId] {
        &self.shelf(shelf).books
    }

    /// Every book in a library: shelf order first, then book order within
    /// each shelf. No deduplication.
    ///
    /// # Panics
    ///
    /// Panics if `library` was issued by a different catalog.
    #[must_use]
    pub fn all_books(&self, library: LibraryId) -> Vec<BookId> {
        let mut books = Vec::new();
        for &shelf in &self.library(library).shelves {
            books.extend_from_slice(&self.shelf(shelf).books);
        }
        books
    }

    /// Prints the human-readable form of each shelf in a library, in order.
    pub fn list_shelves(&self, library: LibraryId) {
        for &shelf in &self.library(library).shelves {
            println!("{}", self.shelf_display(shelf));
        }
    }

    /// Prints the human-readable form of each book in a library, walking the
    /// shelves in order.
    pub fn list_books(&self, library: LibraryId) {
        for &shelf in &self.library(library).shelves {
            self.list_shelf_books(shelf);
        }
    }

    /// Prints the human-readable form of each book on a shelf, in order.
    pub fn list_shelf_books(&self, shelf: ShelfId) {
        for &book in &self.shelf(shelf).books {
            println!("{}", self.book_display(book));
        }
    }

    /// Shared access to a library.
    ///
    /// # Panics
    ///
    /// Panics if `id` was issued by a different catalog, which indicates a
    /// bug in the caller.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn library(&self, id: LibraryId) -> &Library {
        self.libraries.get(id.index()).expect("library id issued by a different catalog")
    }

    /// Exclusive access to a library, for direct mutation of its fields.
    ///
    /// # Panics
    ///
    /// Panics if `id` was issued by a different catalog.
    #[allow(clippy::expect_used)]
    pub fn library_mut(&mut self, id: LibraryId) -> &mut Library {
        self.libraries.get_mut(id.index()).expect("library id issued by a different catalog")
    }

    /// Shared access to a shelf.
    ///
    /// # Panics
    ///
    /// Panics if `id` was issued by a different catalog.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn shelf(&self, id: ShelfId) -> &Shelf {
        self.shelves.get(id.index()).expect("shelf id issued by a different catalog")
    }

    /// Exclusive access to a shelf, for direct mutation of its fields.
    ///
    /// # Panics
    ///
    /// Panics if `id` was issued by a different catalog.
    #[allow(clippy::expect_used)]
    pub fn shelf_mut(&mut self, id: ShelfId) -> &mut Shelf {
        self.shelves.get_mut(id.index()).expect("shelf id issued by a different catalog")
    }

    /// Shared access to a book.
    ///
    /// # Panics
    ///
    /// Panics if `id` was issued by a different catalog.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn book(&self, id: BookId) -> &Book {
        self.books.get(id.index()).expect("book id issued by a different catalog")
    }

    /// Exclusive access to a book, for direct mutation of its fields.
    ///
    /// # Panics
    ///
    /// Panics if `id` was issued by a different catalog.
    #[allow(clippy::expect_used)]
    pub fn book_mut(&mut self, id: BookId) -> &mut Book {
        self.books.get_mut(id.index()).expect("book id issued by a different catalog")
    }

    /// Pretty JSON snapshot of the whole arena, for console diagnostics.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

// Include tests module
#[cfg(test)]
mod tests;
