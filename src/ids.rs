use serde::{Deserialize, Serialize};

/// Identifies a [`Library`](crate::library::Library) within a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct LibraryId(usize);

/// Identifies a [`Shelf`](crate::shelf::Shelf) within a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct ShelfId(usize);

/// Identifies a [`Book`](crate::book::Book) within a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct BookId(usize);

impl LibraryId {
    /// Wraps a raw store index; only the catalog issues ids.
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    /// Position of the library in its catalog's store.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

impl ShelfId {
    /// Wraps a raw store index; only the catalog issues ids.
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    /// Position of the shelf in its catalog's store.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

impl BookId {
    /// Wraps a raw store index; only the catalog issues ids.
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    /// Position of the book in its catalog's store.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}
