//! Process-wide template corpus state
//!
//! The loader is the only writer; every search reads an `Arc` snapshot.
//! Replacement swaps a single reference, so concurrent readers observe
//! either the fully-old or fully-new corpus, never a partial rebuild.

use crate::templates::record::TemplateRecord;
use crate::templates::DEFAULT_TEMPLATE_DIR;
use once_cell::sync::Lazy;
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

/// A complete, immutable corpus snapshot
pub type Corpus = Arc<Vec<TemplateRecord>>;

/// Shared corpus plus the root it was loaded from
pub struct TemplateStore {
    records: RwLock<Corpus>,
    root: RwLock<PathBuf>,
}

static STORE: Lazy<TemplateStore> = Lazy::new(|| TemplateStore {
    records: RwLock::new(Arc::new(Vec::new())),
    root: RwLock::new(PathBuf::from(DEFAULT_TEMPLATE_DIR)),
});

/// Access the process-wide store
pub fn store() -> &'static TemplateStore {
    &STORE
}

impl TemplateStore {
    /// Current corpus snapshot. Writers only ever swap the `Arc`, so even a
    /// poisoned lock still holds a complete corpus.
    pub fn snapshot(&self) -> Corpus {
        self.records
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Replace the whole corpus in one swap. Returns the new record count.
    pub fn replace(&self, records: Vec<TemplateRecord>) -> usize {
        let count = records.len();
        let corpus = Arc::new(records);
        let mut guard = self
            .records
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = corpus;
        count
    }

    /// Number of records in the current corpus
    pub fn len(&self) -> usize {
        self.snapshot().len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Configured template root
    pub fn root(&self) -> PathBuf {
        self.root
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn set_root(&self, root: PathBuf) {
        let mut guard = self
            .root
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = root;
    }
}
