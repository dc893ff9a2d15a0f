//! Template corpus: record types, directory loader, and process-wide store
//!
//! One subdirectory of the template root per template; each must contain a
//! `template.json` record file and may contain a companion `page.tsx` code
//! file. The loader builds the corpus, the store publishes it to readers.

pub mod loader;
pub mod record;
pub mod store;

pub use loader::load_templates;
pub use record::TemplateRecord;
pub use store::{store, Corpus};

use std::path::PathBuf;
use tracing::info;

/// Default template root, overridable via `--template-dir` or `TEMPLATE_DIR`
pub const DEFAULT_TEMPLATE_DIR: &str = "./templates";

/// Set the template root and perform the initial corpus load.
///
/// Returns the number of records loaded.
pub fn initialize(root: PathBuf) -> usize {
    store().set_root(root.clone());
    let records = load_templates(&root);
    let count = store().replace(records);
    info!("Template corpus initialized with {} records", count);
    count
}

/// Rebuild the corpus from the configured root and swap it in.
///
/// The new corpus is built off to the side; readers see either the old or
/// the new corpus in full, never a partial rebuild.
pub fn reload_corpus() -> usize {
    let root = store().root();
    let records = load_templates(&root);
    store().replace(records)
}
