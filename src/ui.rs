//! Console menus
//!
//! Three nested menus: home (manager / customer / exit), manager mode
//! behind the credential check, and customer mode behind the maintenance
//! flag. Letter choices are case-insensitive. Every invalid selection is
//! reported and the menu re-prompted; no error escapes a single action.

use std::io::{self, BufRead, Write};

use tracing::info;

use crate::config::KioskConfig;
use crate::console;
use crate::editor::MenuEditor;
use crate::error::KioskError;
use crate::order;
use crate::session::Session;
use crate::store::{CredentialStore, MenuStore};

pub struct KioskApp {
    config: KioskConfig,
    session: Session,
}

impl KioskApp {
    pub fn new(config: KioskConfig) -> Self {
        Self {
            config,
            session: Session::new(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    fn menu_store(&self) -> MenuStore {
        MenuStore::new(&self.config.menu_path)
    }

    /// Home menu loop. Returns when the user exits or input ends.
    pub fn run<R: BufRead, W: Write>(&mut self, input: &mut R, out: &mut W) -> io::Result<()> {
        loop {
            writeln!(out, "Welcome to the Cafe Kiosk System")?;
            writeln!(out, "A. Manager")?;
            writeln!(out, "B. Customer")?;
            writeln!(out, "C. Exit")?;
            let Some(choice) = console::prompt(input, out, "Enter your choice: ")? else {
                return Ok(());
            };
            match choice.to_ascii_lowercase().as_str() {
                "a" => self.manager_mode(input, out)?,
                "b" => self.customer_mode(input, out)?,
                "c" => {
                    writeln!(out, "Exiting application...")?;
                    return Ok(());
                }
                _ => writeln!(out, "Invalid choice. Please enter a valid option.")?,
            }
        }
    }

    fn manager_mode<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        out: &mut W,
    ) -> io::Result<()> {
        if !self.authenticate(input, out)? {
            writeln!(out, "Authentication failed. Returning to home menu.")?;
            return Ok(());
        }
        info!("manager session started");
        loop {
            writeln!(out, "Manager Mode:")?;
            writeln!(out, "A. Display Menu")?;
            writeln!(out, "B. Toggle Maintenance Mode")?;
            writeln!(out, "C. Add Menu Item")?;
            writeln!(out, "D. Remove Menu Item")?;
            writeln!(out, "E. Go Back (Main Menu)")?;
            let Some(choice) = console::prompt(input, out, "Enter your choice: ")? else {
                return Ok(());
            };
            match choice.to_ascii_lowercase().as_str() {
                "a" => self.display_menu(out)?,
                "b" => {
                    let enabled = self.session.toggle_maintenance();
                    writeln!(
                        out,
                        "Maintenance Mode is now {}.",
                        if enabled { "enabled" } else { "disabled" }
                    )?;
                }
                "c" => self.add_item(input, out)?,
                "d" => self.remove_item(input, out)?,
                "e" => return Ok(()),
                _ => writeln!(out, "Invalid choice. Please enter a valid option.")?,
            }
        }
    }

    fn customer_mode<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        out: &mut W,
    ) -> io::Result<()> {
        if self.session.maintenance() {
            writeln!(
                out,
                "The kiosk is currently undergoing repairs. We are unable to take any \
                 orders at this time. We apologize for the inconvenience."
            )?;
            return Ok(());
        }
        loop {
            writeln!(out, "\nCustomer Mode:")?;
            writeln!(out, "1. Display Menu")?;
            writeln!(out, "2. Place Order")?;
            writeln!(out, "3. Go Back")?;
            let Some(choice) = console::prompt(input, out, "Enter your choice: ")? else {
                return Ok(());
            };
            match choice.as_str() {
                "1" => self.display_menu(out)?,
                "2" => {
                    order::place_order(&self.menu_store(), input, out)?;
                }
                "3" => return Ok(()),
                _ => writeln!(out, "Invalid choice. Please enter a valid option.")?,
            }
        }
    }

    fn authenticate<R: BufRead, W: Write>(
        &self,
        input: &mut R,
        out: &mut W,
    ) -> io::Result<bool> {
        let Some(username) = console::prompt(input, out, "What is your username: ")? else {
            return Ok(false);
        };
        let Some(password) = console::prompt(input, out, "What is your password: ")? else {
            return Ok(false);
        };
        let store = CredentialStore::new(&self.config.credentials_path);
        if store.verify(&username, &password) {
            writeln!(out, "User Authenticated")?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Formatted menu table: header, padded columns, description indented
    /// on the line after each item.
    fn display_menu<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let items = match self.menu_store().load() {
            Ok(items) => items,
            Err(e) => {
                writeln!(out, "Failed to open the menu file. ({e})")?;
                return Ok(());
            }
        };
        writeln!(out, "****************MENU****************")?;
        writeln!(out, "---------------------------------------------------------")?;
        writeln!(out, "No.   Category            Price      Item")?;
        writeln!(out, "---------------------------------------------------------")?;
        for (i, item) in items.iter().enumerate() {
            writeln!(
                out,
                "{:<6}{:<20}{:<11}{}",
                i + 1,
                item.category,
                item.price,
                item.name
            )?;
            writeln!(out, "                                      {}", item.description)?;
        }
        writeln!(out, "*****************************************************")?;
        Ok(())
    }

    fn add_item<R: BufRead, W: Write>(&self, input: &mut R, out: &mut W) -> io::Result<()> {
        let Some(category) = console::prompt(input, out, "Enter category: ")? else {
            return Ok(());
        };
        let Some(name) = console::prompt(input, out, "Enter item name: ")? else {
            return Ok(());
        };
        let Some(price) = console::prompt(input, out, "Enter price: ")? else {
            return Ok(());
        };
        let Some(description) = console::prompt(input, out, "Enter description: ")? else {
            return Ok(());
        };

        let editor = MenuEditor::new(self.menu_store());
        match editor.add_item(&category, &name, &price, &description) {
            Ok(()) => writeln!(out, "Item added successfully.")?,
            Err(e) => writeln!(out, "Could not add item: {e}")?,
        }
        Ok(())
    }

    fn remove_item<R: BufRead, W: Write>(&self, input: &mut R, out: &mut W) -> io::Result<()> {
        let items = self.menu_store().load_or_empty();
        writeln!(out, "Current Menu Items:")?;
        for (i, item) in items.iter().enumerate() {
            writeln!(out, "{}: {}", i + 1, item.to_record())?;
        }

        let Some(answer) =
            console::prompt(input, out, "Enter the number of the item to remove: ")?
        else {
            return Ok(());
        };
        let Ok(position) = answer.parse::<usize>() else {
            writeln!(out, "Invalid item number!")?;
            return Ok(());
        };

        let editor = MenuEditor::new(self.menu_store());
        match editor.remove_item(position) {
            Ok(removed) => writeln!(out, "Item removed successfully. ({})", removed.name)?,
            Err(KioskError::Validation(_)) => writeln!(out, "Invalid item number!")?,
            Err(e) => writeln!(out, "Could not remove item: {e}")?,
        }
        Ok(())
    }
}
