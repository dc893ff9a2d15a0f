//! Template record types
//!
//! A record is the parsed `template.json` object of one template directory,
//! plus source metadata and the optional companion code blob. The fields
//! object is open: a handful of keys are addressed for search projection,
//! everything else is preserved verbatim.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Structured record file expected in each template directory
pub const RECORD_FILENAME: &str = "template.json";

/// Optional companion code file
pub const CODE_FILENAME: &str = "page.tsx";

/// One loaded template
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateRecord {
    /// Parsed record object, with `_folder`/`_filename` metadata merged in
    pub fields: Value,
    /// Subdirectory the record was loaded from
    pub source_folder: String,
    /// Name of the record file the fields were parsed from
    pub source_filename: String,
    /// Raw `page.tsx` contents; `None` when the file is absent
    #[serde(default)]
    pub code_blob: Option<String>,
}

impl TemplateRecord {
    /// Record title, if present and a string
    pub fn title(&self) -> Option<&str> {
        self.fields.get("title").and_then(Value::as_str)
    }

    /// Record description, if present and a string
    pub fn description(&self) -> Option<&str> {
        self.fields.get("description").and_then(Value::as_str)
    }

    /// Record category, if present and a string
    pub fn category(&self) -> Option<&str> {
        self.fields.get("category").and_then(Value::as_str)
    }

    /// Feature strings; non-string entries are ignored
    pub fn features(&self) -> Vec<&str> {
        self.fields
            .get("features")
            .and_then(Value::as_array)
            .map(|items| items.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }

    /// Case-folded text projection used for scoring, never returned to callers.
    ///
    /// Concatenates title, description, category, and the space-joined
    /// features, each defaulting to empty on absence or type mismatch. A
    /// record whose fields are not an object falls back to a rendering of
    /// the raw value rather than failing the search.
    pub fn searchable_text(&self) -> String {
        if self.fields.is_object() {
            let features = self.features().join(" ");
            let text = format!(
                "{} {} {} {}",
                self.title().unwrap_or(""),
                self.description().unwrap_or(""),
                self.category().unwrap_or(""),
                features,
            );
            text.to_lowercase()
        } else {
            self.fields.to_string().to_lowercase()
        }
    }
}
