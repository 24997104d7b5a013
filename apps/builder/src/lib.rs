//! Resume builder core.
//!
//! One editable resume document per session, plus the signals derived from it: an
//! ATS compatibility score, a page-fill estimate and a resolved preview for export.
//! The UI, drag gestures and PDF rasterization live outside this crate.

pub mod config;
pub mod editing;
pub mod errors;
pub mod export;
pub mod layout;
pub mod models;
pub mod preview;
pub mod scoring;
pub mod sections;
pub mod session;
pub mod storage;

pub use editing::{apply_edit, BulletTarget, ContactField, Edit, SkillField};
pub use errors::AppError;
pub use export::{export_pdf, ExportOptions, ExportOutcome, PdfRenderer};
pub use layout::{estimate_page_fit, FillLevel, PageFit, PageMeasurement};
pub use models::{default_resume, ResumeDocument, SectionType, TemplateId};
pub use preview::{build_preview, ResumePreview};
pub use scoring::{score_resume, AtsReport, FactorStatus, ScoreFactor};
pub use sections::reorder;
pub use session::ResumeSession;
pub use storage::{DocumentStore, FileStore, MemoryStore, STORAGE_KEY};
