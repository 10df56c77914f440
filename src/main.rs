//! Narrated walkthrough of the containment model: build a small library,
//! mutate its collections out-of-band, watch the back-references go stale,
//! then repair them with an explicit sync.

use library_catalog::Catalog;

fn main() {
    println!("First, create a couple of books, a shelf, and a library:\n");

    let mut catalog = Catalog::new();

    let wind = catalog.add_book("The Name of the Wind", "Patrick Rothfuss");
    let fear = catalog.add_book("The Wise Man's Fear", "Patrick Rothfuss");
    let shelf1 = catalog.add_shelf("rothfuss", &[wind, fear]);
    let library = catalog.add_library("The Rothfuss National Library", &[shelf1]);

    println!("The library:");
    println!("{}", catalog.library_display(library));

    println!("\nIts shelves:");
    catalog.list_shelves(library);

    println!("\nIts books:");
    catalog.list_books(library);

    println!("\nEverything in diagnostic form:");
    println!("{}", catalog.library_diagnostic(library));
    for &shelf in catalog.shelves_of(library) {
        println!("{}", catalog.shelf_diagnostic(shelf));
    }
    for book in catalog.all_books(library) {
        println!("{}", catalog.book_diagnostic(book));
    }

    println!("\nNow add another shelf and some more books, bypassing the");
    println!("constructors: push a third book straight onto the first shelf,");
    println!("push an empty shelf straight into the library, and put two new");
    println!("books on it.\n");

    let stone = catalog.add_book("The Doors of Stone", "Patrick Rothfuss");
    catalog.shelf_mut(shelf1).books.push(stone);

    let sparrow = catalog.add_book("The Sparrow", "Maria Doria Russell");
    let locke = catalog.add_book("The Lies of Locke Lamora", "Scott Lynch");
    let shelf2 = catalog.add_shelf("NOT-fuss", &[]);
    catalog.library_mut(library).shelves.push(shelf2);
    catalog.shelf_mut(shelf2).books.extend([sparrow, locke]);

    println!("But the additions don't know they've been added:");
    println!("{}", catalog.book_diagnostic(stone));
    println!("{}", catalog.shelf_diagnostic(shelf2));
    println!("{}", catalog.book_diagnostic(sparrow));
    println!("{}", catalog.book_diagnostic(locke));

    println!("\nMake the library update everything:\n");
    catalog.sync_shelves(library);
    catalog.sync_books(library);

    println!("{}", catalog.book_diagnostic(stone));
    println!("{}", catalog.shelf_diagnostic(shelf2));
    println!("{}", catalog.book_diagnostic(sparrow));
    println!("{}", catalog.book_diagnostic(locke));

    println!("\nThe full listing again:");
    catalog.list_shelves(library);
    catalog.list_books(library);

    println!("\nAnd a JSON snapshot of the whole catalog:");
    match catalog.to_json() {
        Ok(json) => println!("{json}"),
        Err(e) => println!("Failed to render snapshot: {e}"),
    }
}
