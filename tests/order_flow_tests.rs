use std::io::Cursor;

use cafe_kiosk::order::{place_order, OrderOutcome};
use cafe_kiosk::store::MenuStore;
use cafe_kiosk::types::{MenuItem, Money};

fn store_with(items: &[MenuItem]) -> (tempfile::TempDir, MenuStore) {
    let dir = tempfile::tempdir().unwrap();
    let store = MenuStore::new(dir.path().join("menu.txt"));
    store.save(items).unwrap();
    (dir, store)
}

fn drive(store: &MenuStore, script: &str) -> (OrderOutcome, String) {
    let mut input = Cursor::new(script.to_string());
    let mut out = Vec::new();
    let outcome = place_order(store, &mut input, &mut out).unwrap();
    (outcome, String::from_utf8(out).unwrap())
}

fn two_item_menu() -> Vec<MenuItem> {
    vec![
        MenuItem::new("Beverage", "Latte", "2.50", "Hot espresso drink"),
        MenuItem::new("Pastry", "Muffin", "3.00", "Blueberry"),
    ]
}

#[test]
fn test_completed_order_applies_tax_once() {
    let (_dir, store) = store_with(&two_item_menu());
    // select both items, then done
    let (outcome, output) = drive(&store, "1\nb\n2\na\n");

    assert_eq!(
        outcome,
        OrderOutcome::Completed {
            total: Money::from_cents(589)
        }
    );
    assert!(output.contains("You selected Latte: $2.50"));
    assert!(output.contains("You selected Muffin: $3.00"));
    // 5.50 subtotal + 7% tax, rounded half-up
    assert!(output.contains("Total (with tax): $5.89"));
}

#[test]
fn test_review_shows_pre_tax_subtotal() {
    let (_dir, store) = store_with(&two_item_menu());
    let (outcome, output) = drive(&store, "1\nb\n2\nb\n0\na\n");

    assert!(matches!(outcome, OrderOutcome::Completed { .. }));
    assert!(output.contains("Subtotal (before tax): $5.50"));
    assert!(output.contains("- Latte at $2.50"));
    assert!(output.contains("- Muffin at $3.00"));
}

#[test]
fn test_cancel_skips_checkout() {
    let (_dir, store) = store_with(&two_item_menu());
    let (outcome, output) = drive(&store, "1\nc\n");

    assert_eq!(outcome, OrderOutcome::Cancelled);
    assert!(output.contains("Order canceled. Returning to main menu."));
    assert!(!output.contains("Total (with tax)"));
}

#[test]
fn test_empty_cart_done_totals_zero() {
    let (_dir, store) = store_with(&two_item_menu());
    let (outcome, output) = drive(&store, "0\na\n");

    assert_eq!(
        outcome,
        OrderOutcome::Completed {
            total: Money::ZERO
        }
    );
    assert!(output.contains("Total (with tax): $0.00"));
}

#[test]
fn test_out_of_range_selection_recovers() {
    let (_dir, store) = store_with(&two_item_menu());
    let (outcome, output) = drive(&store, "99\nb\n1\na\n");

    assert!(output.contains("Invalid choice. Please try again."));
    assert_eq!(
        outcome,
        OrderOutcome::Completed {
            total: Money::from_cents(250).with_tax()
        }
    );
}

#[test]
fn test_non_numeric_selection_recovers() {
    let (_dir, store) = store_with(&two_item_menu());
    let (outcome, output) = drive(&store, "latte\nb\n1\na\n");

    assert!(output.contains("Invalid choice. Please try again."));
    assert!(matches!(outcome, OrderOutcome::Completed { .. }));
}

#[test]
fn test_unparseable_stored_price_fails_only_that_selection() {
    let menu = vec![
        MenuItem::new("Special", "Mystery", "free??", "Ask staff"),
        MenuItem::new("Beverage", "Latte", "2.50", "Hot espresso drink"),
    ];
    let (_dir, store) = store_with(&menu);
    let (outcome, output) = drive(&store, "1\nb\n2\na\n");

    assert!(output.contains("Could not add Mystery"));
    assert!(output.contains("'free??'"));
    // the flow recovers and the good item still checks out
    assert_eq!(
        outcome,
        OrderOutcome::Completed {
            total: Money::from_cents(250).with_tax()
        }
    );
}

#[test]
fn test_duplicate_selection_counts_twice() {
    let (_dir, store) = store_with(&two_item_menu());
    let (outcome, _) = drive(&store, "1\nb\n1\na\n");

    // 2.50 * 2 = 5.00, + 7% = 5.35
    assert_eq!(
        outcome,
        OrderOutcome::Completed {
            total: Money::from_cents(535)
        }
    );
}

#[test]
fn test_missing_menu_file_means_zero_items() {
    let dir = tempfile::tempdir().unwrap();
    let store = MenuStore::new(dir.path().join("missing.txt"));
    let (outcome, output) = drive(&store, "1\nc\n");

    // no items, so any positive selection is out of range
    assert!(output.contains("Invalid choice. Please try again."));
    assert_eq!(outcome, OrderOutcome::Cancelled);
}

#[test]
fn test_end_of_input_cancels() {
    let (_dir, store) = store_with(&two_item_menu());
    let (outcome, _) = drive(&store, "");
    assert_eq!(outcome, OrderOutcome::Cancelled);
}
