//! Cart accumulation
//!
//! A cart lives for exactly one order flow: created empty when the flow
//! starts, dropped when it completes or is cancelled, never persisted.
//! Selecting the same item twice adds two independent lines.

use crate::types::Money;

/// One selected item: its 1-based menu position, the name resolved at
/// selection time, and the price parsed from the stored text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    pub position: usize,
    pub name: String,
    pub unit_price: Money,
}

#[derive(Debug, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
    subtotal: Money,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, position: usize, name: impl Into<String>, unit_price: Money) {
        self.lines.push(CartLine {
            position,
            name: name.into(),
            unit_price,
        });
        self.subtotal = self.subtotal.add(unit_price);
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Running sum of selected prices, before tax.
    pub fn subtotal(&self) -> Money {
        self.subtotal
    }

    /// Subtotal plus sales tax. Computed from the current subtotal each
    /// time; callers apply it exactly once, when the customer is done.
    pub fn checkout_total(&self) -> Money {
        self.subtotal.with_tax()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Money;

    #[test]
    fn subtotal_accumulates() {
        let mut cart = Cart::new();
        cart.add(1, "Latte", Money::from_cents(250));
        cart.add(2, "Muffin", Money::from_cents(300));
        assert_eq!(cart.subtotal(), Money::from_cents(550));
        assert_eq!(cart.lines().len(), 2);
    }

    #[test]
    fn checkout_total_applies_seven_percent() {
        let mut cart = Cart::new();
        cart.add(1, "Latte", Money::from_cents(250));
        cart.add(2, "Muffin", Money::from_cents(300));
        // 5.50 + 7% = 5.885, half-up to 5.89
        assert_eq!(cart.checkout_total(), Money::from_cents(589));
        assert_eq!(cart.checkout_total().to_string(), "5.89");
    }

    #[test]
    fn duplicate_selections_are_independent_lines() {
        let mut cart = Cart::new();
        cart.add(1, "Latte", Money::from_cents(450));
        cart.add(1, "Latte", Money::from_cents(450));
        assert_eq!(cart.lines().len(), 2);
        assert_eq!(cart.subtotal(), Money::from_cents(900));
    }

    #[test]
    fn empty_cart_totals_zero() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.subtotal(), Money::ZERO);
        assert_eq!(cart.checkout_total(), Money::ZERO);
        assert_eq!(cart.checkout_total().to_string(), "0.00");
    }
}
