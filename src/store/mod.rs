//! Flat-file stores
//!
//! The menu lives in a plain text file, one `category;name;price;description`
//! record per line, at most [`MAX_MENU_ITEMS`] records. Credentials live in a
//! second file of `username;password` lines. Both stores are re-read in full
//! by every operation that needs them; mutations rewrite the whole file.
//! There is no locking and no transactional guarantee: a crash mid-save can
//! truncate the file.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::StoreError;
use crate::types::{MenuItem, FIELD_DELIMITER, MAX_MENU_ITEMS};

/// Handle on the menu's backing file.
#[derive(Debug, Clone)]
pub struct MenuStore {
    path: PathBuf,
}

impl MenuStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the full menu, at most [`MAX_MENU_ITEMS`] records. A missing
    /// file is `StoreError::Unavailable`; display callers report it, edit
    /// callers go through [`MenuStore::load_or_empty`] instead.
    pub fn load(&self) -> Result<Vec<MenuItem>, StoreError> {
        let file = File::open(&self.path).map_err(|e| self.open_error(e))?;
        let mut items = Vec::new();
        for line in BufReader::new(file).lines() {
            let line = line.map_err(|e| StoreError::io_error(&self.path, e))?;
            items.push(MenuItem::from_record(&line));
            if items.len() == MAX_MENU_ITEMS {
                break;
            }
        }
        debug!(count = items.len(), path = %self.path.display(), "menu loaded");
        Ok(items)
    }

    /// Like [`MenuStore::load`], but a missing or unreadable file counts
    /// as zero items.
    pub fn load_or_empty(&self) -> Vec<MenuItem> {
        self.load().unwrap_or_default()
    }

    /// Rewrites the backing file in full, one record per line.
    pub fn save(&self, items: &[MenuItem]) -> Result<(), StoreError> {
        let mut file =
            File::create(&self.path).map_err(|e| StoreError::io_error(&self.path, e))?;
        for item in items {
            writeln!(file, "{}", item.to_record())
                .map_err(|e| StoreError::io_error(&self.path, e))?;
        }
        debug!(count = items.len(), path = %self.path.display(), "menu saved");
        Ok(())
    }

    /// Appends one record, refusing before any write if the store already
    /// holds the maximum number of items.
    pub fn append(&self, item: &MenuItem) -> Result<(), StoreError> {
        if self.load_or_empty().len() >= MAX_MENU_ITEMS {
            return Err(StoreError::CapacityExceeded);
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| StoreError::io_error(&self.path, e))?;
        writeln!(file, "{}", item.to_record())
            .map_err(|e| StoreError::io_error(&self.path, e))?;
        debug!(name = %item.name, path = %self.path.display(), "menu record appended");
        Ok(())
    }

    fn open_error(&self, source: std::io::Error) -> StoreError {
        if source.kind() == std::io::ErrorKind::NotFound {
            StoreError::Unavailable {
                path: self.path.clone(),
            }
        } else {
            StoreError::io_error(&self.path, source)
        }
    }
}

/// Handle on the credentials file: `username;password` per line.
#[derive(Debug, Clone)]
pub struct CredentialStore {
    path: PathBuf,
}

impl CredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Linear scan with whitespace-trimmed comparison on both sides;
    /// the first matching line authenticates. A missing or unreadable
    /// file denies, it is never fatal.
    pub fn verify(&self, username: &str, password: &str) -> bool {
        let file = match File::open(&self.path) {
            Ok(f) => f,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "credentials file unavailable");
                return false;
            }
        };
        let username = username.trim();
        let password = password.trim();
        for line in BufReader::new(file).lines() {
            let Ok(line) = line else {
                return false;
            };
            let mut fields = line.splitn(2, FIELD_DELIMITER);
            let stored_user = fields.next().unwrap_or("").trim();
            let stored_pass = fields.next().unwrap_or("").trim();
            if stored_user == username && stored_pass == password {
                return true;
            }
        }
        false
    }
}
