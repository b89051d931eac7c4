use cafe_kiosk::editor::MenuEditor;
use cafe_kiosk::error::{KioskError, StoreError, ValidationError};
use cafe_kiosk::store::MenuStore;
use cafe_kiosk::types::{MenuItem, MAX_MENU_ITEMS};
use pretty_assertions::assert_eq;

fn temp_editor() -> (tempfile::TempDir, MenuEditor) {
    let dir = tempfile::tempdir().unwrap();
    let store = MenuStore::new(dir.path().join("menu.txt"));
    (dir, MenuEditor::new(store))
}

fn sample_item(n: usize) -> MenuItem {
    MenuItem::new(
        format!("Category{n}"),
        format!("Item{n}"),
        format!("{n}.00"),
        format!("Description {n}"),
    )
}

#[test]
fn test_add_item_trims_all_fields() {
    let (_dir, editor) = temp_editor();
    editor
        .add_item(" Beverage ", "  Latte", "4.50  ", " Hot espresso drink ")
        .unwrap();
    let items = editor.store().load().unwrap();
    assert_eq!(
        items,
        vec![MenuItem::new("Beverage", "Latte", "4.50", "Hot espresso drink")]
    );
}

#[test]
fn test_add_item_does_not_validate_price() {
    let (_dir, editor) = temp_editor();
    editor.add_item("Special", "Mystery", "free??", "Ask staff").unwrap();
    assert_eq!(editor.store().load().unwrap()[0].price, "free??");
}

#[test]
fn test_add_item_rejected_when_full() {
    let (_dir, editor) = temp_editor();
    let items: Vec<_> = (1..=MAX_MENU_ITEMS).map(sample_item).collect();
    editor.store().save(&items).unwrap();

    let err = editor.add_item("X", "Y", "1.00", "Z").unwrap_err();
    assert!(matches!(
        err,
        KioskError::Store(StoreError::CapacityExceeded)
    ));
    assert_eq!(editor.store().load().unwrap(), items);
}

#[test]
fn test_remove_item_shifts_later_entries_down() {
    let (_dir, editor) = temp_editor();
    let items: Vec<_> = (1..=5).map(sample_item).collect();
    editor.store().save(&items).unwrap();

    let removed = editor.remove_item(3).unwrap();
    assert_eq!(removed, sample_item(3));

    let remaining = editor.store().load().unwrap();
    assert_eq!(remaining.len(), 4);
    assert_eq!(
        remaining,
        vec![sample_item(1), sample_item(2), sample_item(4), sample_item(5)]
    );
}

#[test]
fn test_remove_first_and_last_positions() {
    let (_dir, editor) = temp_editor();
    editor.store().save(&(1..=3).map(sample_item).collect::<Vec<_>>()).unwrap();

    editor.remove_item(1).unwrap();
    assert_eq!(
        editor.store().load().unwrap(),
        vec![sample_item(2), sample_item(3)]
    );

    editor.remove_item(2).unwrap();
    assert_eq!(editor.store().load().unwrap(), vec![sample_item(2)]);
}

#[test]
fn test_remove_item_out_of_range_leaves_store_unchanged() {
    let (_dir, editor) = temp_editor();
    let items: Vec<_> = (1..=3).map(sample_item).collect();
    editor.store().save(&items).unwrap();

    for position in [0, 4, 99] {
        let err = editor.remove_item(position).unwrap_err();
        assert!(matches!(
            err,
            KioskError::Validation(ValidationError::PositionOutOfRange { .. })
        ));
        assert_eq!(editor.store().load().unwrap(), items);
    }
}

#[test]
fn test_remove_from_missing_store_reports_out_of_range() {
    let (_dir, editor) = temp_editor();
    let err = editor.remove_item(1).unwrap_err();
    assert!(matches!(
        err,
        KioskError::Validation(ValidationError::PositionOutOfRange { position: 1, count: 0 })
    ));
}
