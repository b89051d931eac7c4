//! Order flow controller
//!
//! One call to [`place_order`] drives a whole customer order: browse the
//! menu, add items to a fresh cart, review, and either check out (tax
//! applied exactly once) or cancel. The loop exits only on the explicit
//! done/cancel answer; every error along the way is reported and returns
//! the customer to browsing.
//!
//! Review while ordering shows the pre-tax subtotal; the final receipt
//! shows the post-tax total. The two are labeled distinctly.

use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::cart::Cart;
use crate::console;
use crate::store::MenuStore;
use crate::types::{MenuItem, Money};

/// Terminal state of one order flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderOutcome {
    Completed { total: Money },
    Cancelled,
}

/// Runs the interactive order flow over the given console streams.
/// The menu is loaded once at the start of the flow; a missing menu
/// file simply means zero selectable items.
pub fn place_order<R: BufRead, W: Write>(
    store: &MenuStore,
    input: &mut R,
    out: &mut W,
) -> io::Result<OrderOutcome> {
    let items = store.load_or_empty();
    let mut cart = Cart::new();

    loop {
        render_order_menu(&items, out)?;
        let Some(choice) = console::prompt(
            input,
            out,
            "Select the number of the dish to add to your cart, 0 to review cart: ",
        )?
        else {
            return cancel(out);
        };

        match choice.parse::<usize>() {
            Ok(0) => render_review(&cart, out)?,
            Ok(n) if n <= items.len() => select_item(&items[n - 1], n, &mut cart, out)?,
            _ => writeln!(out, "Invalid choice. Please try again.")?,
        }

        writeln!(out, "Order Options:")?;
        writeln!(out, "A. Done")?;
        writeln!(out, "B. Add another item")?;
        writeln!(out, "C. Cancel")?;
        let Some(option) = console::prompt(input, out, "Enter your choice: ")? else {
            return cancel(out);
        };
        match option.to_ascii_lowercase().as_str() {
            "a" => return checkout(&cart, out),
            "c" => return cancel(out),
            // anything else, including B, goes back to browsing
            _ => {}
        }
    }
}

fn select_item<W: Write>(
    item: &MenuItem,
    position: usize,
    cart: &mut Cart,
    out: &mut W,
) -> io::Result<()> {
    match item.unit_price() {
        Ok(price) => {
            cart.add(position, item.name.clone(), price);
            writeln!(out, "You selected {}: ${}", item.name, price)?;
        }
        Err(e) => {
            debug!(name = %item.name, error = %e, "stored price did not parse");
            writeln!(out, "Could not add {}: {}", item.name, e)?;
        }
    }
    Ok(())
}

fn checkout<W: Write>(cart: &Cart, out: &mut W) -> io::Result<OrderOutcome> {
    let total = cart.checkout_total();
    render_lines(cart, out)?;
    writeln!(out, "Total (with tax): ${total}")?;
    writeln!(
        out,
        "Your order has been taken. Please proceed to the register to pay ${total} \
         and collect your food. Thank you, and please visit again."
    )?;
    Ok(OrderOutcome::Completed { total })
}

fn cancel<W: Write>(out: &mut W) -> io::Result<OrderOutcome> {
    writeln!(out, "Order canceled. Returning to main menu.")?;
    Ok(OrderOutcome::Cancelled)
}

/// Compact one-line-per-item listing used while ordering.
fn render_order_menu<W: Write>(items: &[MenuItem], out: &mut W) -> io::Result<()> {
    for (i, item) in items.iter().enumerate() {
        writeln!(
            out,
            "{} - {} ({}) - ${} - {}",
            i + 1,
            item.name,
            item.category,
            item.price,
            item.description
        )?;
    }
    writeln!(out, "---------------------------------------------------------")?;
    Ok(())
}

fn render_review<W: Write>(cart: &Cart, out: &mut W) -> io::Result<()> {
    render_lines(cart, out)?;
    writeln!(out, "Subtotal (before tax): ${}", cart.subtotal())?;
    writeln!(out)?;
    Ok(())
}

fn render_lines<W: Write>(cart: &Cart, out: &mut W) -> io::Result<()> {
    writeln!(out, "\nCurrent Cart:")?;
    for line in cart.lines() {
        writeln!(out, "- {} at ${}", line.name, line.unit_price)?;
    }
    Ok(())
}
