// Heuristic scoring of a resume document. Read-only; recomputed on demand.

pub mod ats;

pub use ats::{score_resume, AtsReport, FactorStatus, ScoreBand, ScoreFactor};
