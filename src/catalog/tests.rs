use crate::{
    catalog::Catalog,
    ids::{BookId, LibraryId, ShelfId},
};

/// Helper that builds the two-book Rothfuss shelf and its library.
fn setup_rothfuss() -> (Catalog, [BookId; 2], ShelfId, LibraryId) {
    let mut catalog = Catalog::new();

    let wind = catalog.add_book("The Name of the Wind", "Patrick Rothfuss");
    let fear = catalog.add_book("The Wise Man's Fear", "Patrick Rothfuss");
    let shelf = catalog.add_shelf("rothfuss", &[wind, fear]);
    let library = catalog.add_library("The Rothfuss National Library", &[shelf]);

    (catalog, [wind, fear], shelf, library)
}

#[test]
fn test_construction_binds_back_references() {
    let (catalog, books, shelf, library) = setup_rothfuss();

    assert_eq!(catalog.shelf(shelf).library, Some(library));
    for book in books {
        assert_eq!(catalog.book(book).shelf, Some(shelf));
        assert_eq!(catalog.book(book).library, Some(library));
    }
}

#[test]
fn test_shelf_construction_without_library() {
    let mut catalog = Catalog::new();

    let book = catalog.add_book("The Sparrow", "Maria Doria Russell");
    let shelf = catalog.add_shelf("sci-fi", &[book]);

    // The shelf has no library yet, so the book is bound to the shelf only.
    assert_eq!(catalog.shelf(shelf).library, None);
    assert_eq!(catalog.book(book).shelf, Some(shelf));
    assert_eq!(catalog.book(book).library, None);
}

#[test]
fn test_initial_collections_are_copied() {
    let mut catalog = Catalog::new();

    let wind = catalog.add_book("The Name of the Wind", "Patrick Rothfuss");
    let fear = catalog.add_book("The Wise Man's Fear", "Patrick Rothfuss");
    let stone = catalog.add_book("The Doors of Stone", "Patrick Rothfuss");

    let mut initial_books = vec![wind, fear];
    let shelf = catalog.add_shelf("rothfuss", &initial_books);

    // Growing the caller's list must not grow the shelf.
    initial_books.push(stone);
    assert_eq!(catalog.books_of(shelf).len(), 2);

    let mut initial_shelves = vec![shelf];
    let library = catalog.add_library("The Rothfuss National Library", &initial_shelves);

    let other = catalog.add_shelf("NOT-fuss", &[]);
    initial_shelves.push(other);
    assert_eq!(catalog.shelves_of(library).len(), 1);
}

#[test]
fn test_out_of_band_append_stays_stale() {
    let (mut catalog, _, shelf, library) = setup_rothfuss();

    let stone = catalog.add_book("The Doors of Stone", "Patrick Rothfuss");
    catalog.shelf_mut(shelf).books.push(stone);

    let orphan = catalog.add_shelf("NOT-fuss", &[]);
    catalog.library_mut(library).shelves.push(orphan);

    // Nothing syncs on mutation: the additions are contained but unaware.
    assert_eq!(catalog.book(stone).shelf, None);
    assert_eq!(catalog.book(stone).library, None);
    assert_eq!(catalog.shelf(orphan).library, None);
}

#[test]
fn test_sync_repairs_and_is_idempotent() {
    let (mut catalog, _, shelf, library) = setup_rothfuss();

    let stone = catalog.add_book("The Doors of Stone", "Patrick Rothfuss");
    catalog.shelf_mut(shelf).books.push(stone);

    let orphan = catalog.add_shelf("NOT-fuss", &[]);
    catalog.library_mut(library).shelves.push(orphan);
    let sparrow = catalog.add_book("The Sparrow", "Maria Doria Russell");
    let locke = catalog.add_book("The Lies of Locke Lamora", "Scott Lynch");
    catalog.shelf_mut(orphan).books.extend([sparrow, locke]);

    catalog.sync_shelves(library);
    catalog.sync_books(library);

    assert_eq!(catalog.shelf(orphan).library, Some(library));
    for book in [stone, sparrow, locke] {
        assert_eq!(catalog.book(book).library, Some(library));
    }
    assert_eq!(catalog.book(stone).shelf, Some(shelf));
    assert_eq!(catalog.book(sparrow).shelf, Some(orphan));
    assert_eq!(catalog.book(locke).shelf, Some(orphan));

    // A second pass must change nothing.
    let repaired = catalog.clone();
    catalog.sync_shelves(library);
    catalog.sync_books(library);
    assert_eq!(catalog, repaired);
}

#[test]
fn test_sync_shelf_books_uses_current_library() {
    let mut catalog = Catalog::new();

    let book = catalog.add_book("The Lies of Locke Lamora", "Scott Lynch");
    let shelf = catalog.add_shelf("heists", &[]);
    catalog.shelf_mut(shelf).books.push(book);

    // With no library on the shelf, the book gets an absent library too.
    catalog.sync_shelf_books(shelf);
    assert_eq!(catalog.book(book).shelf, Some(shelf));
    assert_eq!(catalog.book(book).library, None);
}

#[test]
#[allow(clippy::arithmetic_side_effects)]
fn test_all_books_order_and_no_dedup() {
    let mut catalog = Catalog::new();

    let wind = catalog.add_book("The Name of the Wind", "Patrick Rothfuss");
    let fear = catalog.add_book("The Wise Man's Fear", "Patrick Rothfuss");
    let sparrow = catalog.add_book("The Sparrow", "Maria Doria Russell");

    // The same book may sit on two shelves; nothing deduplicates it.
    let first = catalog.add_shelf("rothfuss", &[wind, fear]);
    let second = catalog.add_shelf("favorites", &[sparrow, wind]);
    let library = catalog.add_library("The Rothfuss National Library", &[first, second]);

    let all = catalog.all_books(library);
    assert_eq!(all, vec![wind, fear, sparrow, wind]);
    assert_eq!(
        all.len(),
        catalog.books_of(first).len() + catalog.books_of(second).len()
    );
}

#[test]
fn test_display_forms() {
    let (catalog, books, shelf, library) = setup_rothfuss();
    let [wind, _] = books;

    assert_eq!(catalog.library_display(library).to_string(), "The Rothfuss National Library");
    assert_eq!(
        catalog.library_diagnostic(library).to_string(),
        "Library: The Rothfuss National Library"
    );
    assert_eq!(catalog.shelf_display(shelf).to_string(), "rothfuss");
    assert_eq!(
        catalog.shelf_diagnostic(shelf).to_string(),
        "Shelf: rothfuss (library: The Rothfuss National Library)"
    );
    assert_eq!(catalog.book_display(wind).to_string(), "'The Name of the Wind'");
    assert_eq!(
        catalog.book_diagnostic(wind).to_string(),
        "Book: The Name of the Wind by Patrick Rothfuss \
         (library: The Rothfuss National Library, shelf: rothfuss)"
    );
}

#[test]
fn test_display_forms_with_absent_back_references() {
    let mut catalog = Catalog::new();

    let book = catalog.add_book("The Doors of Stone", "Patrick Rothfuss");
    let shelf = catalog.add_shelf("unpublished", &[]);

    assert_eq!(
        catalog.shelf_diagnostic(shelf).to_string(),
        "Shelf: unpublished (library: None)"
    );
    assert_eq!(
        catalog.book_diagnostic(book).to_string(),
        "Book: The Doors of Stone by Patrick Rothfuss (library: None, shelf: None)"
    );
}

#[test]
fn test_end_to_end_rothfuss_scenario() {
    let (mut catalog, books, shelf1, library) = setup_rothfuss();
    let [wind, fear] = books;

    // Immediately after construction everything is bound.
    for book in [wind, fear] {
        assert_eq!(catalog.book(book).shelf, Some(shelf1));
        assert_eq!(catalog.book(book).library, Some(library));
    }

    // Out-of-band additions: a book pushed straight onto the first shelf, an
    // empty shelf pushed straight into the library, two books pushed onto it.
    let stone = catalog.add_book("The Doors of Stone", "Patrick Rothfuss");
    catalog.shelf_mut(shelf1).books.push(stone);

    let sparrow = catalog.add_book("The Sparrow", "Maria Doria Russell");
    let locke = catalog.add_book("The Lies of Locke Lamora", "Scott Lynch");
    let shelf2 = catalog.add_shelf("NOT-fuss", &[]);
    catalog.library_mut(library).shelves.push(shelf2);
    catalog.shelf_mut(shelf2).books.extend([sparrow, locke]);

    for book in [stone, sparrow, locke] {
        assert_eq!(catalog.book(book).shelf, None);
        assert_eq!(catalog.book(book).library, None);
    }
    assert_eq!(catalog.shelf(shelf2).library, None);

    catalog.sync_shelves(library);
    catalog.sync_books(library);

    assert_eq!(catalog.shelf(shelf2).library, Some(library));
    assert_eq!(catalog.book(stone).shelf, Some(shelf1));
    assert_eq!(catalog.book(sparrow).shelf, Some(shelf2));
    assert_eq!(catalog.book(locke).shelf, Some(shelf2));
    for book in [stone, sparrow, locke] {
        assert_eq!(catalog.book(book).library, Some(library));
    }

    assert_eq!(catalog.all_books(library), vec![wind, fear, stone, sparrow, locke]);
}
