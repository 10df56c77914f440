use serde::{Deserialize, Serialize};

use crate::ids::ShelfId;

/// A library: a named, ordered collection of shelves.
///
/// Like [`Shelf::books`](crate::shelf::Shelf::books), the shelf list is
/// open to direct mutation; newly pushed shelves stay unaware of the library
/// until the catalog runs a sync pass.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Library {
    /// Display name.
    pub name: String,
    /// Shelves in this library, in insertion order.
    pub shelves: Vec<ShelfId>,
}

impl Library {
    /// Creates a library with its own copy of `shelves`.
    #[must_use]
    pub fn new(name: &str, shelves: &[ShelfId]) -> Self {
        Self {
            name: name.to_string(),
            shelves: shelves.to_vec(),
        }
    }
}
