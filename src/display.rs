use std::fmt;

use crate::{
    catalog::Catalog,
    ids::{BookId, LibraryId, ShelfId},
};

/// Human-readable form of a library: its name alone.
#[derive(Debug, Clone, Copy)]
pub struct LibraryDisplay<'a> {
    /// Catalog the id resolves against.
    catalog: &'a Catalog,
    /// Library being rendered.
    id: LibraryId,
}

/// Diagnostic form of a library: `Library: <name>`.
#[derive(Debug, Clone, Copy)]
pub struct LibraryDiagnostic<'a> {
    /// Catalog the id resolves against.
    catalog: &'a Catalog,
    /// Library being rendered.
    id: LibraryId,
}

/// Human-readable form of a shelf: its name alone.
#[derive(Debug, Clone, Copy)]
pub struct ShelfDisplay<'a> {
    /// Catalog the id resolves against.
    catalog: &'a Catalog,
    /// Shelf being rendered.
    id: ShelfId,
}

/// Diagnostic form of a shelf: `Shelf: <name> (library: <name or None>)`.
#[derive(Debug, Clone, Copy)]
pub struct ShelfDiagnostic<'a> {
    /// Catalog the id resolves against.
    catalog: &'a Catalog,
    /// Shelf being rendered.
    id: ShelfId,
}

/// Human-readable form of a book: its single-quoted title.
#[derive(Debug, Clone, Copy)]
pub struct BookDisplay<'a> {
    /// Catalog the id resolves against.
    catalog: &'a Catalog,
    /// Book being rendered.
    id: BookId,
}

/// Diagnostic form of a book:
/// `Book: <title> by <author> (library: <...>, shelf: <...>)`.
#[derive(Debug, Clone, Copy)]
pub struct BookDiagnostic<'a> {
    /// Catalog the id resolves against.
    catalog: &'a Catalog,
    /// Book being rendered.
    id: BookId,
}

impl Catalog {
    /// Human-readable form of a library.
    #[must_use]
    pub fn library_display(&self, id: LibraryId) -> LibraryDisplay<'_> {
        LibraryDisplay { catalog: self, id }
    }

    /// Diagnostic form of a library.
    #[must_use]
    pub fn library_diagnostic(&self, id: LibraryId) -> LibraryDiagnostic<'_> {
        LibraryDiagnostic { catalog: self, id }
    }

    /// Human-readable form of a shelf.
    #[must_use]
    pub fn shelf_display(&self, id: ShelfId) -> ShelfDisplay<'_> {
        ShelfDisplay { catalog: self, id }
    }

    /// Diagnostic form of a shelf, including its library back-reference.
    #[must_use]
    pub fn shelf_diagnostic(&self, id: ShelfId) -> ShelfDiagnostic<'_> {
        ShelfDiagnostic { catalog: self, id }
    }

    /// Human-readable form of a book.
    #[must_use]
    pub fn book_display(&self, id: BookId) -> BookDisplay<'_> {
        BookDisplay { catalog: self, id }
    }

    /// Diagnostic form of a book, including both back-references.
    #[must_use]
    pub fn book_diagnostic(&self, id: BookId) -> BookDiagnostic<'_> {
        BookDiagnostic { catalog: self, id }
    }
}

/// Renders an optional library back-reference in human-readable form, or the
/// literal `None` marker when absent.
fn library_or_none(catalog: &Catalog, id: Option<LibraryId>) -> String {
    id.map_or_else(|| "None".to_string(), |id| catalog.library_display(id).to_string())
}

/// Renders an optional shelf back-reference in human-readable form, or the
/// literal `None` marker when absent.
fn shelf_or_none(catalog: &Catalog, id: Option<ShelfId>) -> String {
    id.map_or_else(|| "None".to_string(), |id| catalog.shelf_display(id).to_string())
}

impl fmt::Display for LibraryDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.catalog.library(self.id).name)
    }
}

impl fmt::Display for LibraryDiagnostic<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Library: {}", self.catalog.library(self.id).name)
    }
}

impl fmt::Display for ShelfDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.catalog.shelf(self.id).name)
    }
}

impl fmt::Display for ShelfDiagnostic<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shelf = self.catalog.shelf(self.id);
        write!(
            f,
            "Shelf: {} (library: {})",
            shelf.name,
            library_or_none(self.catalog, shelf.library)
        )
    }
}

impl fmt::Display for BookDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}'", self.catalog.book(self.id).title)
    }
}

impl fmt::Display for BookDiagnostic<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let book = self.catalog.book(self.id);
        write!(
            f,
            "Book: {} by {} (library: {}, shelf: {})",
            book.title,
            book.author,
            library_or_none(self.catalog, book.library),
            shelf_or_none(self.catalog, book.shelf)
        )
    }
}
