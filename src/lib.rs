pub mod cart;
pub mod config;
pub mod console;
pub mod editor;
pub mod order;
pub mod session;
pub mod store;
pub mod types;
pub mod ui;

pub mod error;

pub use cart::{Cart, CartLine};
pub use config::KioskConfig;
pub use editor::MenuEditor;
pub use error::*;
pub use order::{place_order, OrderOutcome};
pub use session::Session;
pub use store::{CredentialStore, MenuStore};
pub use types::*;
pub use ui::KioskApp;
