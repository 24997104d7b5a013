//! Editing session. Owns the one live document and the store it auto-saves to.
//!
//! Every change replaces the whole document and is written back immediately. Save
//! failures are logged and otherwise ignored; nothing in the session depends on a
//! save succeeding. Score, page fit and preview are derived on demand and never cached.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::editing::{apply_edit, Edit};
use crate::errors::AppError;
use crate::export::{export_pdf, ExportOutcome, Notice, PdfRenderer, RESET_NOTICE};
use crate::layout::page_fit::{estimate_page_fit, PageFit, PageMeasurement};
use crate::models::resume::{default_resume, ResumeDocument, SectionType};
use crate::preview::{build_preview, ResumePreview};
use crate::scoring::ats::{score_resume, AtsReport};
use crate::sections::{normalize_section_order, reorder};
use crate::storage::{load_document, save_document, DocumentStore};

pub struct ResumeSession {
    document: ResumeDocument,
    store: Arc<dyn DocumentStore>,
}

impl ResumeSession {
    /// Restores the saved document from `store`, or starts from the default one.
    pub fn load(store: Arc<dyn DocumentStore>) -> Self {
        let document = load_document(store.as_ref());
        ResumeSession { document, store }
    }

    pub fn document(&self) -> &ResumeDocument {
        &self.document
    }

    /// Writes the current document to the store.
    pub fn save(&self) -> Result<(), AppError> {
        save_document(self.store.as_ref(), &self.document)
    }

    /// Applies one form edit and auto-saves.
    pub fn apply(&mut self, edit: Edit) -> &ResumeDocument {
        debug!(op = edit.kind(), "Applying edit");
        let next = apply_edit(&self.document, edit);
        self.replace(next);
        &self.document
    }

    /// Handles a completed drag gesture. The only writer of `section_order`.
    pub fn reorder_sections(&mut self, moved: SectionType, target: SectionType) -> &[SectionType] {
        let current = normalize_section_order(self.document.section_order.clone());
        let next = reorder(&current, moved, target);

        if next != self.document.section_order {
            debug!(%moved, %target, "Reordering sections");
            let document = ResumeDocument {
                section_order: next,
                ..self.document.clone()
            };
            self.replace(document);
        }
        &self.document.section_order
    }

    /// Discards all edits and returns to the starter document.
    pub fn reset(&mut self) -> Notice {
        info!("Resetting resume to default");
        self.replace(default_resume());
        RESET_NOTICE
    }

    pub fn ats_report(&self) -> AtsReport {
        score_resume(&self.document)
    }

    /// Fill signal for the latest measurements taken by the host after rendering.
    pub fn page_fit(&self, measurement: PageMeasurement) -> PageFit {
        estimate_page_fit(measurement)
    }

    pub fn preview(&self) -> ResumePreview {
        build_preview(&self.document)
    }

    pub async fn export(&self, renderer: &dyn PdfRenderer) -> ExportOutcome {
        export_pdf(&self.document, renderer).await
    }

    fn replace(&mut self, document: ResumeDocument) {
        self.document = document;
        if let Err(e) = self.save() {
            warn!(code = e.code(), "Auto-save failed: {e}");
        }
    }
}
