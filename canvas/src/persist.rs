//! Persistence gateway for the workspace snapshot.
//!
//! The snapshot lives in a single named key/value slot as JSON. Loading never
//! fails: a missing slot or an unreadable payload yields an empty document.
//! Two gateways exist: [`MemoryGateway`] for tests and [`LocalStorageGateway`]
//! for the browser.

#[cfg(test)]
#[path = "persist_test.rs"]
mod persist_test;

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{Storage, Window};

use crate::consts::STORAGE_KEY;
use crate::doc::WorkspaceDocument;

#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    #[error("failed to encode document: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("storage operation failed: {0}")]
    Storage(String),
}

/// Save/load/clear of the single persisted document slot.
pub trait PersistenceGateway {
    /// Overwrite the slot with `doc`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the document cannot be encoded or the store rejects the write.
    fn save(&self, doc: &WorkspaceDocument) -> Result<(), PersistError>;

    /// Read the slot, falling back to an empty document.
    fn load(&self) -> WorkspaceDocument;

    /// Delete the slot.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the store rejects the removal.
    fn clear(&self) -> Result<(), PersistError>;
}

impl<T: PersistenceGateway + ?Sized> PersistenceGateway for Rc<T> {
    fn save(&self, doc: &WorkspaceDocument) -> Result<(), PersistError> {
        (**self).save(doc)
    }

    fn load(&self) -> WorkspaceDocument {
        (**self).load()
    }

    fn clear(&self) -> Result<(), PersistError> {
        (**self).clear()
    }
}

/// Serialize a document for the slot.
///
/// # Errors
///
/// Returns `Err` if JSON encoding fails.
pub fn encode(doc: &WorkspaceDocument) -> Result<String, PersistError> {
    Ok(serde_json::to_string(doc)?)
}

/// Parse a slot value. `None` and malformed payloads give an empty document.
#[must_use]
pub fn decode(raw: Option<&str>) -> WorkspaceDocument {
    let Some(raw) = raw else {
        return WorkspaceDocument::default();
    };
    match serde_json::from_str(raw) {
        Ok(doc) => doc,
        Err(err) => {
            log::warn!("discarding unreadable persisted document: {err}");
            WorkspaceDocument::default()
        }
    }
}

// =============================================================
// In-memory
// =============================================================

/// Gateway backed by a string slot in memory.
#[derive(Debug, Default)]
pub struct MemoryGateway {
    slot: RefCell<Option<String>>,
}

impl MemoryGateway {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gateway whose slot already holds `raw`.
    #[must_use]
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self { slot: RefCell::new(Some(raw.into())) }
    }

    /// Current raw slot contents.
    #[must_use]
    pub fn raw(&self) -> Option<String> {
        self.slot.borrow().clone()
    }
}

impl PersistenceGateway for MemoryGateway {
    fn save(&self, doc: &WorkspaceDocument) -> Result<(), PersistError> {
        let raw = encode(doc)?;
        *self.slot.borrow_mut() = Some(raw);
        Ok(())
    }

    fn load(&self) -> WorkspaceDocument {
        decode(self.slot.borrow().as_deref())
    }

    fn clear(&self) -> Result<(), PersistError> {
        self.slot.borrow_mut().take();
        Ok(())
    }
}

// =============================================================
// Browser localStorage
// =============================================================

/// Gateway backed by `window.localStorage`.
pub struct LocalStorageGateway {
    storage: Storage,
    key: String,
}

impl LocalStorageGateway {
    /// Open the window's local storage under the default slot key.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the browser denies access to local storage.
    pub fn from_window(window: &Window) -> Result<Self, PersistError> {
        match window.local_storage() {
            Ok(Some(storage)) => Ok(Self { storage, key: STORAGE_KEY.to_string() }),
            Ok(None) => Err(PersistError::Unavailable("localStorage is not available".into())),
            Err(err) => Err(PersistError::Unavailable(format!("{err:?}"))),
        }
    }
}

impl PersistenceGateway for LocalStorageGateway {
    fn save(&self, doc: &WorkspaceDocument) -> Result<(), PersistError> {
        let raw = encode(doc)?;
        self.storage
            .set_item(&self.key, &raw)
            .map_err(|err| PersistError::Storage(format!("{err:?}")))
    }

    fn load(&self) -> WorkspaceDocument {
        match self.storage.get_item(&self.key) {
            Ok(raw) => decode(raw.as_deref()),
            Err(err) => {
                log::warn!("reading {} failed: {err:?}", self.key);
                WorkspaceDocument::default()
            }
        }
    }

    fn clear(&self) -> Result<(), PersistError> {
        self.storage
            .remove_item(&self.key)
            .map_err(|err| PersistError::Storage(format!("{err:?}")))
    }
}
