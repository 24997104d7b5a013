//! ATS scoring: a fixed-weight heuristic estimate of applicant-tracking compatibility.
//!
//! Seven factors, scored independently and summed. Maxima add up to 100, so the total
//! needs no normalization. Each factor carries its own good/warning thresholds.
//!
//! Pure and deterministic: the report is rebuilt from the document on every call.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::models::resume::ResumeDocument;

// ────────────────────────────────────────────────────────────────────────────
// Output data models
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FactorStatus {
    Good,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreFactor {
    pub name: String,
    pub score: u32,
    pub max_score: u32,
    pub status: FactorStatus,
    pub tip: String,
}

/// Overall label for the total, as shown next to the score dial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Excellent, // ≥ 80
    Good,      // ≥ 60
    NeedsWork,
}

impl ScoreBand {
    pub fn label(&self) -> &'static str {
        match self {
            ScoreBand::Excellent => "Excellent",
            ScoreBand::Good => "Good",
            ScoreBand::NeedsWork => "Needs Work",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AtsReport {
    /// Sum of all factor scores, 0–100.
    pub total: u32,
    /// Always seven factors, in fixed order.
    pub factors: Vec<ScoreFactor>,
    /// Tip of the first factor that is not good, or the congratulatory message.
    pub hint: String,
}

impl AtsReport {
    pub fn band(&self) -> ScoreBand {
        if self.total >= 80 {
            ScoreBand::Excellent
        } else if self.total >= 60 {
            ScoreBand::Good
        } else {
            ScoreBand::NeedsWork
        }
    }
}

pub const ALL_GOOD_HINT: &str = "Great job! Your resume is ATS-optimized.";

// ────────────────────────────────────────────────────────────────────────────
// Factor definitions
// ────────────────────────────────────────────────────────────────────────────

/// Static description of one factor: its weight, status thresholds and tips.
struct FactorRule {
    name: &'static str,
    max_score: u32,
    good_at: u32,
    warning_at: u32,
    good_tip: &'static str,
    improve_tip: &'static str,
}

impl FactorRule {
    fn grade(&self, score: u32) -> ScoreFactor {
        let status = if score >= self.good_at {
            FactorStatus::Good
        } else if score >= self.warning_at {
            FactorStatus::Warning
        } else {
            FactorStatus::Error
        };
        let tip = if status == FactorStatus::Good {
            self.good_tip
        } else {
            self.improve_tip
        };

        ScoreFactor {
            name: self.name.to_string(),
            score,
            max_score: self.max_score,
            status,
            tip: tip.to_string(),
        }
    }
}

const CONTACT: FactorRule = FactorRule {
    name: "Contact Info",
    max_score: 15,
    good_at: 15,
    warning_at: 10,
    good_tip: "Complete contact info",
    improve_tip: "Add email, phone, and LinkedIn/GitHub",
};

const HEADER: FactorRule = FactorRule {
    name: "Header",
    max_score: 10,
    good_at: 10,
    warning_at: 5,
    good_tip: "Name and title present",
    improve_tip: "Add your name and professional title",
};

const EXPERIENCE: FactorRule = FactorRule {
    name: "Experience",
    max_score: 25,
    good_at: 20,
    warning_at: 10,
    good_tip: "Strong experience section",
    improve_tip: "Add more bullet points with action verbs and metrics",
};

const EDUCATION: FactorRule = FactorRule {
    name: "Education",
    max_score: 15,
    good_at: 15,
    warning_at: 10,
    good_tip: "Education complete",
    improve_tip: "Add institution, degree, and dates",
};

const SKILLS: FactorRule = FactorRule {
    name: "Skills",
    max_score: 20,
    good_at: 18,
    warning_at: 10,
    good_tip: "Skills well documented",
    improve_tip: "Add languages, frameworks, and tools",
};

const PROJECTS: FactorRule = FactorRule {
    name: "Projects",
    max_score: 10,
    good_at: 10,
    warning_at: 5,
    good_tip: "Projects included",
    improve_tip: "Add projects with descriptions",
};

const EXTRAS: FactorRule = FactorRule {
    name: "Extras",
    max_score: 5,
    good_at: 4,
    warning_at: 2,
    good_tip: "Activities & certs added",
    improve_tip: "Consider adding certifications",
};

static ACTION_VERBS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i-u)\b(developed|created|managed|led|increased|decreased|improved|built|designed|implemented|achieved|delivered|optimized|reduced|launched|coordinated)\b",
    )
    .expect("action verb pattern is valid")
});

static METRICS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i-u)[0-9]+%|\$[0-9]+|[0-9]+\+|[0-9]+ (users|clients|customers|projects|team)")
        .expect("metric pattern is valid")
});

// ────────────────────────────────────────────────────────────────────────────
// Core scoring
// ────────────────────────────────────────────────────────────────────────────

/// Scores a document. Never fails; empty fields simply earn no points.
pub fn score_resume(doc: &ResumeDocument) -> AtsReport {
    let factors = vec![
        CONTACT.grade(contact_score(doc)),
        HEADER.grade(header_score(doc)),
        EXPERIENCE.grade(experience_score(doc)),
        EDUCATION.grade(education_score(doc)),
        SKILLS.grade(skills_score(doc)),
        PROJECTS.grade(projects_score(doc)),
        EXTRAS.grade(extras_score(doc)),
    ];

    let total = factors.iter().map(|f| f.score).sum();
    let hint = factors
        .iter()
        .find(|f| f.status != FactorStatus::Good)
        .map(|f| f.tip.clone())
        .unwrap_or_else(|| ALL_GOOD_HINT.to_string());

    AtsReport {
        total,
        factors,
        hint,
    }
}

fn points(earned: bool, value: u32) -> u32 {
    if earned {
        value
    } else {
        0
    }
}

fn contact_score(doc: &ResumeDocument) -> u32 {
    let c = &doc.contact;
    points(!c.email.is_empty(), 5)
        + points(!c.phone.is_empty(), 5)
        + points(!c.linkedin.is_empty() || !c.github.is_empty(), 5)
}

/// Lengths are counted in UTF-16 code units, as the web client measures them.
fn header_score(doc: &ResumeDocument) -> u32 {
    points(doc.name.encode_utf16().count() > 2, 5)
        + points(doc.title.encode_utf16().count() > 2, 5)
}

fn experience_score(doc: &ResumeDocument) -> u32 {
    if doc.experience.is_empty() {
        return 0;
    }

    let total_bullets: usize = doc.experience.iter().map(|e| e.bullets.len()).sum();
    let all_bullets = doc
        .experience
        .iter()
        .flat_map(|e| e.bullets.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join(" ");

    10 + points(total_bullets >= 3, 5)
        + points(total_bullets >= 6, 5)
        + points(has_action_verb(&all_bullets), 3)
        + points(has_metric(&all_bullets), 2)
}

fn education_score(doc: &ResumeDocument) -> u32 {
    if doc.education.is_empty() {
        return 0;
    }
    let has_complete = doc.education.iter().any(|e| {
        !e.institution.is_empty() && !e.degree.is_empty() && !e.duration.is_empty()
    });
    10 + points(has_complete, 5)
}

fn skills_score(doc: &ResumeDocument) -> u32 {
    let s = &doc.skills;
    points(!s.languages.is_empty(), 7)
        + points(!s.frameworks.is_empty(), 7)
        + points(!s.tools.is_empty(), 6)
}

fn projects_score(doc: &ResumeDocument) -> u32 {
    if doc.projects.is_empty() {
        return 0;
    }
    5 + points(doc.projects.iter().any(|p| !p.bullets.is_empty()), 5)
}

fn extras_score(doc: &ResumeDocument) -> u32 {
    points(!doc.activities.is_empty(), 2) + points(!doc.certifications.is_empty(), 3)
}

/// Whole-word, case-insensitive match against the action verb list. Word boundaries
/// are ASCII-only, so a verb glued to a non-ASCII letter still matches.
pub fn has_action_verb(text: &str) -> bool {
    ACTION_VERBS.is_match(text)
}

/// Percentages, dollar amounts, "N+" counts, or "N users/clients/customers/projects/team".
/// Only ASCII digits count.
pub fn has_metric(text: &str) -> bool {
    METRICS.is_match(text)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
