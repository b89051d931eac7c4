//! Menu edit operations
//!
//! Add and remove work on a fresh load of the store each time; nothing is
//! cached between calls. Removal is by 1-based position, so every later
//! item's position shifts down by one after a successful remove.

use tracing::info;

use crate::error::{KioskResult, ValidationError};
use crate::store::MenuStore;
use crate::types::MenuItem;

#[derive(Debug)]
pub struct MenuEditor {
    store: MenuStore,
}

impl MenuEditor {
    pub fn new(store: MenuStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &MenuStore {
        &self.store
    }

    /// Trims all four fields and appends the record. Fails with
    /// `CapacityExceeded` (no write) when the store is full. The price is
    /// stored as raw trimmed text, not numerically validated here.
    pub fn add_item(
        &self,
        category: &str,
        name: &str,
        price: &str,
        description: &str,
    ) -> KioskResult<()> {
        let item = MenuItem::new(
            category.trim(),
            name.trim(),
            price.trim(),
            description.trim(),
        );
        self.store.append(&item)?;
        info!(name = %item.name, "menu item added");
        Ok(())
    }

    /// Removes the item at a 1-based position and rewrites the store.
    /// An out-of-range position fails without writing. Returns the
    /// removed item.
    pub fn remove_item(&self, position: usize) -> KioskResult<MenuItem> {
        let mut items = self.store.load_or_empty();
        if position < 1 || position > items.len() {
            return Err(ValidationError::PositionOutOfRange {
                position,
                count: items.len(),
            }
            .into());
        }
        let removed = items.remove(position - 1);
        self.store.save(&items)?;
        info!(name = %removed.name, position, "menu item removed");
        Ok(removed)
    }
}
