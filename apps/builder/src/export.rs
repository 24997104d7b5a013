//! PDF export boundary.
//!
//! Rasterization belongs to an external renderer behind the `PdfRenderer` trait. The
//! core resolves the document into a `ResumePreview`, fixes the page options, awaits
//! the renderer once and reports a terminal `ExportOutcome`. There are no retries and
//! no partial results.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::errors::AppError;
use crate::models::resume::ResumeDocument;
use crate::preview::{build_preview, ResumePreview};

/// Used when the document name is empty.
pub const DEFAULT_FILENAME_STEM: &str = "resume";

static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

// ────────────────────────────────────────────────────────────────────────────
// Options
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageFormat {
    A4,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Portrait,
    Landscape,
}

impl PageFormat {
    /// Width and height in millimetres, portrait.
    pub fn size_mm(&self) -> (f32, f32) {
        match self {
            PageFormat::A4 => (210.0, 297.0),
        }
    }
}

/// Settings handed to the renderer alongside the preview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportOptions {
    pub filename: String,
    pub margin_mm: f32,
    pub format: PageFormat,
    pub orientation: Orientation,
    /// Raster scale factor applied before the page is encoded.
    pub scale: f32,
    /// JPEG quality of the embedded page image, 0.0–1.0.
    pub image_quality: f32,
}

impl ExportOptions {
    /// Zero margin, A4 portrait, 2× raster scale, filename from the document name.
    pub fn for_document(doc: &ResumeDocument) -> Self {
        ExportOptions {
            filename: export_filename(&doc.name),
            margin_mm: 0.0,
            format: PageFormat::A4,
            orientation: Orientation::Portrait,
            scale: 2.0,
            image_quality: 0.98,
        }
    }

    /// Page size in millimetres after applying the orientation.
    pub fn page_size_mm(&self) -> (f32, f32) {
        let (w, h) = self.format.size_mm();
        match self.orientation {
            Orientation::Portrait => (w, h),
            Orientation::Landscape => (h, w),
        }
    }
}

/// `"John  Doe"` → `"John_Doe.pdf"`; an empty name gives `"resume.pdf"`.
pub fn export_filename(name: &str) -> String {
    let stem = WHITESPACE_RUN.replace_all(name, "_");
    if stem.is_empty() {
        format!("{DEFAULT_FILENAME_STEM}.pdf")
    } else {
        format!("{stem}.pdf")
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Renderer seam
// ────────────────────────────────────────────────────────────────────────────

/// External PDF rasterizer. Implement this to plug in a real backend.
#[async_trait]
pub trait PdfRenderer: Send + Sync {
    async fn render(&self, preview: &ResumePreview, options: &ExportOptions) -> Result<(), AppError>;
}

// ────────────────────────────────────────────────────────────────────────────
// Outcome
// ────────────────────────────────────────────────────────────────────────────

/// User-facing notification text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub title: &'static str,
    pub description: &'static str,
    pub is_error: bool,
}

/// Shown while the renderer is working.
pub const GENERATING_NOTICE: Notice = Notice {
    title: "Generating PDF...",
    description: "Please wait while your resume is being prepared.",
    is_error: false,
};

/// Shown after the document is reset to the starter resume.
pub const RESET_NOTICE: Notice = Notice {
    title: "Resume Reset",
    description: "Your resume has been reset to the default template.",
    is_error: false,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ExportOutcome {
    Completed {
        filename: String,
        finished_at: DateTime<Utc>,
    },
    Failed {
        filename: String,
        reason: String,
    },
}

impl ExportOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ExportOutcome::Completed { .. })
    }

    pub fn filename(&self) -> &str {
        match self {
            ExportOutcome::Completed { filename, .. } | ExportOutcome::Failed { filename, .. } => {
                filename
            }
        }
    }

    pub fn notice(&self) -> Notice {
        match self {
            ExportOutcome::Completed { .. } => Notice {
                title: "PDF Downloaded!",
                description: "Your resume has been saved successfully.",
                is_error: false,
            },
            ExportOutcome::Failed { .. } => Notice {
                title: "Export Failed",
                description: "There was an error generating your PDF.",
                is_error: true,
            },
        }
    }
}

/// Resolves `doc` and hands it to `renderer`. Failures come back as `Failed`.
pub async fn export_pdf(doc: &ResumeDocument, renderer: &dyn PdfRenderer) -> ExportOutcome {
    let preview = build_preview(doc);
    let options = ExportOptions::for_document(doc);
    info!(filename = %options.filename, sections = preview.sections.len(), "Generating PDF");

    match renderer.render(&preview, &options).await {
        Ok(()) => {
            info!(filename = %options.filename, "PDF export completed");
            ExportOutcome::Completed {
                filename: options.filename,
                finished_at: Utc::now(),
            }
        }
        Err(e) => {
            error!(code = e.code(), filename = %options.filename, "PDF export failed: {e}");
            ExportOutcome::Failed {
                filename: options.filename,
                reason: e.to_string(),
            }
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::default_resume;
    use std::sync::Mutex;

    /// Records what it was asked to render.
    #[derive(Default)]
    struct RecordingRenderer {
        calls: Mutex<Vec<(String, usize)>>,
    }

    #[async_trait]
    impl PdfRenderer for RecordingRenderer {
        async fn render(
            &self,
            preview: &ResumePreview,
            options: &ExportOptions,
        ) -> Result<(), AppError> {
            self.calls
                .lock()
                .unwrap()
                .push((options.filename.clone(), preview.sections.len()));
            Ok(())
        }
    }

    struct FailingRenderer;

    #[async_trait]
    impl PdfRenderer for FailingRenderer {
        async fn render(&self, _: &ResumePreview, _: &ExportOptions) -> Result<(), AppError> {
            Err(AppError::Export("canvas unavailable".to_string()))
        }
    }

    #[test]
    fn test_filename_collapses_whitespace() {
        assert_eq!(export_filename("John Doe"), "John_Doe.pdf");
        assert_eq!(export_filename("John  \t Doe"), "John_Doe.pdf");
        assert_eq!(export_filename("Ada"), "Ada.pdf");
    }

    #[test]
    fn test_empty_name_uses_default_filename() {
        assert_eq!(export_filename(""), "resume.pdf");
    }

    #[test]
    fn test_options_for_document() {
        let options = ExportOptions::for_document(&default_resume());
        assert_eq!(options.filename, "John_Doe.pdf");
        assert_eq!(options.margin_mm, 0.0);
        assert_eq!(options.format, PageFormat::A4);
        assert_eq!(options.orientation, Orientation::Portrait);
        assert_eq!(options.scale, 2.0);
        assert_eq!(options.page_size_mm(), (210.0, 297.0));
    }

    #[test]
    fn test_landscape_swaps_dimensions() {
        let mut options = ExportOptions::for_document(&default_resume());
        options.orientation = Orientation::Landscape;
        assert_eq!(options.page_size_mm(), (297.0, 210.0));
    }

    #[tokio::test]
    async fn test_successful_export_reports_completed() {
        let renderer = RecordingRenderer::default();
        let outcome = export_pdf(&default_resume(), &renderer).await;

        assert!(outcome.is_success());
        assert_eq!(outcome.filename(), "John_Doe.pdf");
        assert_eq!(outcome.notice().title, "PDF Downloaded!");
        assert!(!outcome.notice().is_error);

        let calls = renderer.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0], ("John_Doe.pdf".to_string(), 6));
    }

    #[tokio::test]
    async fn test_renderer_failure_reports_failed() {
        let outcome = export_pdf(&default_resume(), &FailingRenderer).await;

        assert!(!outcome.is_success());
        match &outcome {
            ExportOutcome::Failed { reason, filename } => {
                assert!(reason.contains("canvas unavailable"));
                assert_eq!(filename, "John_Doe.pdf");
            }
            other => panic!("expected Failed, got {other:?}"),
        }
        let notice = outcome.notice();
        assert_eq!(notice.title, "Export Failed");
        assert!(notice.is_error);
    }

    #[test]
    fn test_outcome_serializes_with_status_tag() {
        let outcome = ExportOutcome::Failed {
            filename: "resume.pdf".to_string(),
            reason: "x".to_string(),
        };
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["status"], "failed");
        assert_eq!(GENERATING_NOTICE.title, "Generating PDF...");
    }
}
