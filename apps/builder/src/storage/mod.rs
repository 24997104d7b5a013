//! Persistence of one serialized document under one fixed key.
//!
//! Loading never fails. Missing or corrupt data yields the starter document, and
//! documents written before `sectionOrder`, `template` and `layout` existed are
//! backfilled with their defaults. Saving is best-effort: callers that auto-save
//! log the error and carry on.

pub mod file;
pub mod memory;

use anyhow::anyhow;
use serde_json::{Map, Value};
use tracing::{debug, info, warn};

use crate::errors::AppError;
use crate::models::layout::LayoutSettings;
use crate::models::resume::{default_resume, ResumeDocument, DEFAULT_SECTION_ORDER};
use crate::models::template::TemplateId;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Key the document is stored under.
pub const STORAGE_KEY: &str = "resume-builder-data";

/// A string key/value store. Implementations decide where the bytes live.
pub trait DocumentStore: Send + Sync {
    fn read(&self, key: &str) -> Result<Option<String>, AppError>;
    fn write(&self, key: &str, value: &str) -> Result<(), AppError>;
}

/// Loads the stored document, falling back to the starter document.
pub fn load_document(store: &dyn DocumentStore) -> ResumeDocument {
    match store.read(STORAGE_KEY) {
        Ok(Some(raw)) => match parse_document(&raw) {
            Ok(doc) => {
                info!(
                    experience = doc.experience.len(),
                    projects = doc.projects.len(),
                    "Restored saved resume"
                );
                doc
            }
            Err(e) => {
                warn!(code = e.code(), "Saved resume is unreadable, using default: {e}");
                default_resume()
            }
        },
        Ok(None) => {
            info!("No saved resume found, starting from default");
            default_resume()
        }
        Err(e) => {
            warn!(code = e.code(), "Could not read saved resume, using default: {e}");
            default_resume()
        }
    }
}

/// Serializes and writes the document under `STORAGE_KEY`.
pub fn save_document(store: &dyn DocumentStore, doc: &ResumeDocument) -> Result<(), AppError> {
    let raw = serde_json::to_string(doc)?;
    store.write(STORAGE_KEY, &raw)?;
    debug!(bytes = raw.len(), "Saved resume");
    Ok(())
}

/// Parses stored JSON, backfilling fields that older documents lack.
pub fn parse_document(raw: &str) -> Result<ResumeDocument, AppError> {
    let mut value: Value = serde_json::from_str(raw)?;
    let object = value
        .as_object_mut()
        .ok_or_else(|| AppError::Internal(anyhow!("stored resume is not a JSON object")))?;

    backfill_legacy_fields(object)?;

    Ok(serde_json::from_value(value)?)
}

/// Fills `sectionOrder`, `template` and `layout` when absent or falsy.
fn backfill_legacy_fields(object: &mut Map<String, Value>) -> Result<(), AppError> {
    let defaults = [
        ("sectionOrder", serde_json::to_value(DEFAULT_SECTION_ORDER)?),
        ("template", serde_json::to_value(TemplateId::default())?),
        ("layout", serde_json::to_value(LayoutSettings::default())?),
    ];

    for (key, default) in defaults {
        let missing = object.get(key).map_or(true, is_falsy);
        if missing {
            debug!(field = key, "Backfilling legacy resume field");
            object.insert(key.to_string(), default);
        }
    }
    Ok(())
}

/// `null`, `false`, `0` and `""` count as unset, as the web client treats them.
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}
