//! Read-through cache over the frame catalog file
//!
//! The catalog is read once and shared as an `Arc` until something calls
//! [`CatalogCache::invalidate`] or [`CatalogCache::reload`]. Writing a new
//! catalog through [`CatalogCache::store`] invalidates automatically.

use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};

use tracing::debug;

use super::FrameCatalog;
use crate::error::Result;

#[derive(Debug)]
pub struct CatalogCache {
    path: PathBuf,
    slot: RwLock<Option<Arc<FrameCatalog>>>,
}

impl CatalogCache {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            slot: RwLock::new(None),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the cached catalog, loading it from disk on a miss
    pub fn get(&self) -> Result<Arc<FrameCatalog>> {
        if let Some(catalog) = self
            .slot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
        {
            debug!("Frame catalog cache hit");
            return Ok(Arc::clone(catalog));
        }

        self.reload()
    }

    /// Drop the cached catalog; the next `get` reads the file again
    pub fn invalidate(&self) {
        debug!("Frame catalog cache invalidated");
        *self.slot.write().unwrap_or_else(PoisonError::into_inner) = None;
    }

    /// Read the catalog file unconditionally and replace the cached copy
    pub fn reload(&self) -> Result<Arc<FrameCatalog>> {
        let catalog = Arc::new(FrameCatalog::load(&self.path)?);
        *self.slot.write().unwrap_or_else(PoisonError::into_inner) = Some(Arc::clone(&catalog));
        Ok(catalog)
    }

    /// Write a new catalog to disk and invalidate the cached copy
    pub fn store(&self, catalog: &FrameCatalog) -> Result<()> {
        catalog.save(&self.path)?;
        self.invalidate();
        Ok(())
    }

    pub fn is_loaded(&self) -> bool {
        self.slot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }
}
