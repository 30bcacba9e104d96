//! Shared access to the current entity store.
//!
//! Readers take a cheap snapshot (`Arc<EntityStore>`) and run their queries
//! against it without holding any lock. A reload builds a complete new store
//! first and only then swaps it in, so no reader ever sees a half-built
//! store and a failed reload leaves the previous one in place.

use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use tracing::{info, warn};

use crate::error::{ArvoreError, Result};
use crate::source::load_dir;
use crate::store::EntityStore;

pub struct FamilyInterface {
    store: RwLock<Arc<EntityStore>>,
    data_dir: Option<PathBuf>,
}

impl FamilyInterface {
    pub fn new(store: EntityStore) -> Self {
        Self { store: RwLock::new(Arc::new(store)), data_dir: None }
    }

    /// Interface that can (re)load its data from `data_dir`.
    pub fn with_data_dir(store: EntityStore, data_dir: impl Into<PathBuf>) -> Self {
        Self { store: RwLock::new(Arc::new(store)), data_dir: Some(data_dir.into()) }
    }

    /// The store as of now; later replacements do not affect it.
    pub fn snapshot(&self) -> Result<Arc<EntityStore>> {
        let guard = self.store.read().map_err(|e| ArvoreError::Lock(e.to_string()))?;
        Ok(Arc::clone(&guard))
    }

    pub fn replace(&self, store: EntityStore) -> Result<()> {
        let mut guard = self.store.write().map_err(|e| ArvoreError::Lock(e.to_string()))?;
        *guard = Arc::new(store);
        Ok(())
    }

    /// Re-reads the data directory. Returns the number of persons loaded.
    pub fn reload(&self) -> Result<usize> {
        let Some(dir) = &self.data_dir else {
            return Err(ArvoreError::Config("no data directory configured".to_string()));
        };
        match load_dir(dir) {
            Ok(store) => {
                let persons = store.persons().len();
                self.replace(store)?;
                info!(persons, "store replaced");
                Ok(persons)
            }
            Err(e) => {
                warn!(error = %e, "reload failed, keeping previous store");
                Err(e)
            }
        }
    }
}
