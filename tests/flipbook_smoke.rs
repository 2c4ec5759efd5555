use sandesh_web::{Catalog, FlipbookViewer};

#[test]
fn february_edition_opens_as_twelve_page_spread() {
    let catalog = Catalog::builtin();
    let edition = catalog.select(Some("feb-2026")).clone();
    assert_eq!(edition.title, "February 2026 Edition");
    assert_eq!(edition.total_pages, 12);

    let viewer = FlipbookViewer::new(edition, false);
    assert_eq!(viewer.max_page(), 11);
}

#[test]
fn sixteen_page_edition_limits() {
    let catalog = Catalog::builtin();
    let mut viewer = FlipbookViewer::new(catalog.select(Some("nov-2025")).clone(), false);
    assert_eq!(viewer.total_pages(), 16);
    assert_eq!(viewer.max_page(), 15);

    viewer.set_single_page_view(true);
    assert_eq!(viewer.max_page(), 16);
}

#[test]
fn layout_switch_round_trip_keeps_reader_near_their_page() {
    let catalog = Catalog::builtin();
    let mut viewer = FlipbookViewer::new(catalog.select(None).clone(), true);
    while viewer.current_page() < 8 {
        viewer.next();
    }

    viewer.set_single_page_view(false);
    assert_eq!(viewer.current_page(), 7);
    viewer.next();
    assert_eq!(viewer.current_page(), 9);

    viewer.set_single_page_view(true);
    assert_eq!(viewer.current_page(), 9);
}
