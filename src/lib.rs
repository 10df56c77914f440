//! A three-level containment hierarchy for tracking books in a library.
//!
//! A [`Catalog`] owns every [`Library`], [`Shelf`], and [`Book`] and hands
//! out copyable ids. Containment (library holds shelves, shelf holds books)
//! and the child-to-parent back-references are kept consistent by explicit,
//! on-demand sync passes rather than automatically on mutation: appending to
//! a containment collection out-of-band leaves the new child's
//! back-references stale until [`Catalog::sync_shelves`] and
//! [`Catalog::sync_books`] are called.

pub mod book;
pub mod catalog;
pub mod display;
pub mod ids;
pub mod library;
pub mod shelf;

pub use book::Book;
pub use catalog::Catalog;
pub use ids::{BookId, LibraryId, ShelfId};
pub use library::Library;
pub use shelf::Shelf;
