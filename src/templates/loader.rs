//! Corpus loader
//!
//! Reads every `template.json` (plus optional `page.tsx`) from the immediate
//! subdirectories of the template root into memory. Per-entry failures are
//! logged and skipped; only trouble with the root itself degrades the whole
//! load, and even then to an empty corpus rather than an error.

use crate::templates::record::{TemplateRecord, CODE_FILENAME, RECORD_FILENAME};
use serde_json::Value;
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Why a single directory entry was excluded from the corpus
#[derive(Debug, Error)]
pub enum EntryError {
    #[error("record file not found")]
    MissingRecord,
    #[error("record file unreadable: {0}")]
    Unreadable(#[from] std::io::Error),
    #[error("invalid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("record root is not a JSON object")]
    NotAnObject,
}

/// Load all templates under `root` into an ordered corpus.
///
/// Ordering follows directory enumeration, which is not guaranteed sorted;
/// consumers rely on it only for stable tie-breaks within one load.
///
/// A missing root is a cold start: the directory is created and an empty
/// corpus returned. An unenumerable root (e.g. permissions) also yields an
/// empty corpus with a warning. Neither aborts the process.
pub fn load_templates(root: &Path) -> Vec<TemplateRecord> {
    if !root.exists() {
        warn!("Template directory '{}' not found, creating it", root.display());
        if let Err(e) = fs::create_dir_all(root) {
            warn!("Failed to create '{}': {}", root.display(), e);
        }
        return Vec::new();
    }

    info!("Scanning '{}'", root.display());

    let entries = match fs::read_dir(root) {
        Ok(entries) => entries,
        Err(e) => {
            warn!("Cannot enumerate '{}': {}", root.display(), e);
            return Vec::new();
        }
    };

    let mut records = Vec::new();

    for entry in entries.flatten() {
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }

        let folder = entry.file_name().to_string_lossy().into_owned();

        match load_entry(&path, &folder) {
            Ok(record) => records.push(record),
            Err(EntryError::MissingRecord) => {
                warn!("Skipping '{}': {} not found", folder, RECORD_FILENAME);
            }
            Err(e) => {
                warn!("Failed to load template from '{}': {}", folder, e);
            }
        }
    }

    info!("Loaded {} templates into memory", records.len());
    records
}

/// Load one template directory. Each entry is its own failure boundary:
/// an `Err` here is logged by the caller and never aborts the scan.
fn load_entry(dir: &Path, folder: &str) -> Result<TemplateRecord, EntryError> {
    let record_path = dir.join(RECORD_FILENAME);
    if !record_path.exists() {
        return Err(EntryError::MissingRecord);
    }

    let raw = fs::read_to_string(&record_path)?;
    let mut fields: Value = serde_json::from_str(&raw)?;

    let obj = fields.as_object_mut().ok_or(EntryError::NotAnObject)?;
    obj.insert("_folder".to_string(), Value::String(folder.to_string()));
    obj.insert("_filename".to_string(), Value::String(RECORD_FILENAME.to_string()));

    let code_blob = read_code_blob(dir, folder);

    Ok(TemplateRecord {
        fields,
        source_folder: folder.to_string(),
        source_filename: RECORD_FILENAME.to_string(),
        code_blob,
    })
}

/// Read the optional companion code file. Absence is omission, not an error,
/// and an empty file is treated the same as a missing one.
fn read_code_blob(dir: &Path, folder: &str) -> Option<String> {
    let code_path = dir.join(CODE_FILENAME);
    match fs::read_to_string(&code_path) {
        Ok(code) if !code.is_empty() => Some(code),
        Ok(_) => {
            debug!("Empty {} for '{}'", CODE_FILENAME, folder);
            None
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!("No {} found for '{}'", CODE_FILENAME, folder);
            None
        }
        Err(e) => {
            warn!("Cannot read {} for '{}': {}", CODE_FILENAME, folder, e);
            None
        }
    }
}
