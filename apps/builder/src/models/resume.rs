//! Resume document, the single aggregate edited during a session.
//!
//! Wire names are camelCase so documents saved by the web client load unchanged.
//! Every field carries a serde default: a stored document missing a field, or holding
//! `null` in it, comes back with that field blank rather than failing to parse.

use std::fmt;
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

use crate::models::layout::LayoutSettings;
use crate::models::template::TemplateId;
use crate::sections::normalize_section_order;

// ────────────────────────────────────────────────────────────────────────────
// Sections
// ────────────────────────────────────────────────────────────────────────────

/// One of the six reorderable resume blocks. Header and contact are not sections:
/// they always render first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionType {
    Education,
    Skills,
    Experience,
    Projects,
    Activities,
    Certifications,
}

/// Canonical section order, used for new documents and to repair broken orders.
pub const DEFAULT_SECTION_ORDER: [SectionType; 6] = [
    SectionType::Education,
    SectionType::Skills,
    SectionType::Experience,
    SectionType::Projects,
    SectionType::Activities,
    SectionType::Certifications,
];

impl SectionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionType::Education => "education",
            SectionType::Skills => "skills",
            SectionType::Experience => "experience",
            SectionType::Projects => "projects",
            SectionType::Activities => "activities",
            SectionType::Certifications => "certifications",
        }
    }

    /// Heading printed above the section in the preview.
    pub fn heading(&self) -> &'static str {
        match self {
            SectionType::Education => "Education",
            SectionType::Skills => "Technical Skills",
            SectionType::Experience => "Work Experience",
            SectionType::Projects => "Projects",
            SectionType::Activities => "Extra Curricular Activities",
            SectionType::Certifications => "Certifications",
        }
    }
}

impl fmt::Display for SectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DEFAULT_SECTION_ORDER
            .iter()
            .copied()
            .find(|section| section.as_str() == s)
            .ok_or_else(|| format!("unknown section '{s}'"))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Document parts
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactInfo {
    #[serde(deserialize_with = "null_as_default")]
    pub phone: String,
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(deserialize_with = "null_as_default")]
    pub linkedin: String,
    #[serde(deserialize_with = "null_as_default")]
    pub github: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationEntry {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub institution: String,
    #[serde(deserialize_with = "null_as_default")]
    pub location: String,
    #[serde(deserialize_with = "null_as_default")]
    pub degree: String,
    #[serde(deserialize_with = "null_as_default")]
    pub duration: String,
}

/// Free-text skill blocks. Comma-separated by convention, never parsed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TechnicalSkills {
    #[serde(deserialize_with = "null_as_default")]
    pub languages: String,
    #[serde(deserialize_with = "null_as_default")]
    pub frameworks: String,
    #[serde(deserialize_with = "null_as_default")]
    pub tools: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceEntry {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub role: String,
    #[serde(deserialize_with = "null_as_default")]
    pub company: String,
    #[serde(deserialize_with = "null_as_default")]
    pub location: String,
    #[serde(deserialize_with = "null_as_default")]
    pub duration: String,
    #[serde(deserialize_with = "lenient_lines")]
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProjectEntry {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub tech_stack: String,
    #[serde(deserialize_with = "lenient_lines")]
    pub bullets: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Root aggregate
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResumeDocument {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub contact: ContactInfo,
    #[serde(deserialize_with = "null_as_default")]
    pub education: Vec<EducationEntry>,
    #[serde(deserialize_with = "null_as_default")]
    pub skills: TechnicalSkills,
    #[serde(deserialize_with = "null_as_default")]
    pub experience: Vec<ExperienceEntry>,
    #[serde(deserialize_with = "null_as_default")]
    pub projects: Vec<ProjectEntry>,
    #[serde(deserialize_with = "lenient_lines")]
    pub activities: Vec<String>,
    #[serde(deserialize_with = "lenient_lines")]
    pub certifications: Vec<String>,
    /// Always a permutation of the six section tags; repaired on deserialize.
    #[serde(deserialize_with = "deserialize_section_order")]
    pub section_order: Vec<SectionType>,
    #[serde(deserialize_with = "unknown_as_default")]
    pub template: TemplateId,
    #[serde(deserialize_with = "unknown_as_default")]
    pub layout: LayoutSettings,
}

/// A blank document: empty strings and sequences, canonical order, default styling.
impl Default for ResumeDocument {
    fn default() -> Self {
        ResumeDocument {
            name: String::new(),
            title: String::new(),
            contact: ContactInfo::default(),
            education: Vec::new(),
            skills: TechnicalSkills::default(),
            experience: Vec::new(),
            projects: Vec::new(),
            activities: Vec::new(),
            certifications: Vec::new(),
            section_order: DEFAULT_SECTION_ORDER.to_vec(),
            template: TemplateId::default(),
            layout: LayoutSettings::default(),
        }
    }
}

/// `null` reads as the field's default instead of failing the whole document.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Bullet lists: a `null` list is empty and a `null` line is an empty string.
fn lenient_lines<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let lines: Option<Vec<Option<String>>> = Option::deserialize(deserializer)?;
    Ok(lines
        .unwrap_or_default()
        .into_iter()
        .map(Option::unwrap_or_default)
        .collect())
}

/// Styling choices the client no longer recognizes fall back to the default.
fn unknown_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + DeserializeOwned,
{
    let raw = serde_json::Value::deserialize(deserializer)?;
    Ok(T::deserialize(raw).unwrap_or_default())
}

/// Accepts any JSON array, drops tags it does not know, and repairs the result to a
/// full permutation. `null` is treated like a missing field.
fn deserialize_section_order<'de, D>(deserializer: D) -> Result<Vec<SectionType>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<Vec<serde_json::Value>> = Option::deserialize(deserializer)?;
    let parsed: Vec<SectionType> = raw
        .unwrap_or_default()
        .iter()
        .filter_map(|value| value.as_str())
        .filter_map(|tag| tag.parse().ok())
        .collect();
    Ok(normalize_section_order(parsed))
}

// ────────────────────────────────────────────────────────────────────────────
// Starter document
// ────────────────────────────────────────────────────────────────────────────

fn owned(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|s| s.to_string()).collect()
}

/// The starter document shown on first launch and after a reset.
pub fn default_resume() -> ResumeDocument {
    ResumeDocument {
        name: "John Doe".to_string(),
        title: "Software Engineer".to_string(),
        contact: ContactInfo {
            phone: "+1 (555) 123-4567".to_string(),
            email: "john.doe@email.com".to_string(),
            linkedin: "linkedin.com/in/johndoe".to_string(),
            github: "github.com/johndoe".to_string(),
        },
        education: vec![EducationEntry {
            id: "1".to_string(),
            institution: "Massachusetts Institute of Technology".to_string(),
            location: "Cambridge, MA".to_string(),
            degree: "Bachelor of Science in Computer Science".to_string(),
            duration: "Aug 2018 - May 2022".to_string(),
        }],
        skills: TechnicalSkills {
            languages: "Python, JavaScript, TypeScript, Java, C++, SQL, HTML/CSS".to_string(),
            frameworks: "React, Node.js, Express, Django, Flask, TensorFlow, PyTorch".to_string(),
            tools: "Git, Docker, AWS, PostgreSQL, MongoDB, Redis, Linux, CI/CD".to_string(),
        },
        experience: vec![
            ExperienceEntry {
                id: "1".to_string(),
                role: "Software Engineer".to_string(),
                company: "Tech Company Inc.".to_string(),
                location: "San Francisco, CA".to_string(),
                duration: "Jun 2022 - Present".to_string(),
                bullets: owned(&[
                    "Developed and maintained scalable web applications serving 1M+ daily active users",
                    "Led migration of legacy systems to microservices architecture, reducing latency by 40%",
                    "Implemented automated testing pipelines, increasing code coverage from 45% to 92%",
                ]),
            },
            ExperienceEntry {
                id: "2".to_string(),
                role: "Software Engineering Intern".to_string(),
                company: "Startup Labs".to_string(),
                location: "Boston, MA".to_string(),
                duration: "May 2021 - Aug 2021".to_string(),
                bullets: owned(&[
                    "Built RESTful APIs handling 10K+ requests per minute using Node.js and Express",
                    "Designed and implemented a real-time notification system using WebSockets",
                    "Collaborated with cross-functional teams to deliver features 2 weeks ahead of schedule",
                ]),
            },
        ],
        projects: vec![
            ProjectEntry {
                id: "1".to_string(),
                title: "E-Commerce Platform".to_string(),
                tech_stack: "React, Node.js, PostgreSQL, Stripe".to_string(),
                bullets: owned(&[
                    "Built a full-stack e-commerce platform with user authentication and payment processing",
                    "Implemented product search with filters and pagination, improving UX significantly",
                ]),
            },
            ProjectEntry {
                id: "2".to_string(),
                title: "Machine Learning Pipeline".to_string(),
                tech_stack: "Python, TensorFlow, AWS SageMaker".to_string(),
                bullets: owned(&[
                    "Developed an ML pipeline for image classification with 95% accuracy",
                    "Deployed models using AWS SageMaker, handling 5K+ predictions daily",
                ]),
            },
        ],
        activities: owned(&[
            "Mentor at Code for Good, teaching programming to underprivileged students",
            "Open source contributor to popular JavaScript frameworks with 500+ GitHub stars",
            "Speaker at local tech meetups on topics including React best practices and system design",
        ]),
        certifications: owned(&[
            "AWS Certified Solutions Architect - Associate",
            "Google Cloud Professional Data Engineer",
            "Certified Kubernetes Administrator (CKA)",
        ]),
        section_order: DEFAULT_SECTION_ORDER.to_vec(),
        template: TemplateId::Classic,
        layout: LayoutSettings::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::layout::{FontSize, Margins, Spacing};
    use serde_json::json;

    #[test]
    fn test_blank_document_has_empty_strings_and_canonical_order() {
        let doc = ResumeDocument::default();
        assert_eq!(doc.name, "");
        assert_eq!(doc.contact, ContactInfo::default());
        assert!(doc.experience.is_empty());
        assert_eq!(doc.section_order, DEFAULT_SECTION_ORDER.to_vec());
        assert_eq!(doc.template, TemplateId::Classic);
    }

    #[test]
    fn test_wire_names_are_camel_case() {
        let json = serde_json::to_value(default_resume()).unwrap();
        assert!(json.get("sectionOrder").is_some());
        assert_eq!(json["projects"][0]["techStack"], "React, Node.js, PostgreSQL, Stripe");
        assert_eq!(json["sectionOrder"][0], "education");
        assert_eq!(json["layout"]["fontSize"], "medium");
        assert_eq!(json["template"], "classic");
    }

    #[test]
    fn test_missing_fields_deserialize_blank() {
        let doc: ResumeDocument = serde_json::from_value(json!({ "name": "Ada" })).unwrap();
        assert_eq!(doc.name, "Ada");
        assert_eq!(doc.title, "");
        assert_eq!(doc.skills, TechnicalSkills::default());
        assert_eq!(doc.section_order, DEFAULT_SECTION_ORDER.to_vec());
        assert_eq!(doc.layout.font_size, FontSize::Medium);
        assert_eq!(doc.layout.spacing, Spacing::Normal);
        assert_eq!(doc.layout.margins, Margins::Normal);
    }

    #[test]
    fn test_foreign_section_tag_repairs_order() {
        let doc: ResumeDocument = serde_json::from_value(json!({
            "sectionOrder": ["skills", "hobbies", "education"]
        }))
        .unwrap();
        assert_eq!(doc.section_order, DEFAULT_SECTION_ORDER.to_vec());
    }

    #[test]
    fn test_valid_custom_order_is_kept() {
        let order = json!([
            "projects",
            "experience",
            "skills",
            "education",
            "certifications",
            "activities"
        ]);
        let doc: ResumeDocument = serde_json::from_value(json!({ "sectionOrder": order })).unwrap();
        assert_eq!(doc.section_order[0], SectionType::Projects);
        assert_eq!(doc.section_order[5], SectionType::Activities);
    }

    #[test]
    fn test_null_section_order_uses_default() {
        let doc: ResumeDocument =
            serde_json::from_value(json!({ "sectionOrder": null })).unwrap();
        assert_eq!(doc.section_order, DEFAULT_SECTION_ORDER.to_vec());
    }

    #[test]
    fn test_null_values_read_as_empty() {
        let doc: ResumeDocument = serde_json::from_value(json!({
            "name": null,
            "contact": { "phone": null, "email": "ada@example.com" },
            "skills": null,
            "activities": null,
            "projects": [{ "id": "p", "techStack": null, "bullets": ["Built a parser", null] }]
        }))
        .unwrap();
        assert_eq!(doc.name, "");
        assert_eq!(doc.contact.phone, "");
        assert_eq!(doc.contact.email, "ada@example.com");
        assert_eq!(doc.skills, TechnicalSkills::default());
        assert!(doc.activities.is_empty());
        assert_eq!(doc.projects[0].tech_stack, "");
        assert_eq!(doc.projects[0].bullets, vec!["Built a parser".to_string(), String::new()]);
    }

    #[test]
    fn test_unknown_template_reads_as_default() {
        let doc: ResumeDocument =
            serde_json::from_value(json!({ "name": "Ada", "template": "neon" })).unwrap();
        assert_eq!(doc.name, "Ada");
        assert_eq!(doc.template, TemplateId::Classic);
    }

    #[test]
    fn test_section_type_parses_and_displays() {
        assert_eq!("skills".parse::<SectionType>(), Ok(SectionType::Skills));
        assert!("Skills".parse::<SectionType>().is_err());
        assert_eq!(SectionType::Certifications.to_string(), "certifications");
        assert_eq!(SectionType::Skills.heading(), "Technical Skills");
    }

    #[test]
    fn test_starter_document_ids_are_unique_per_sequence() {
        let doc = default_resume();
        assert_ne!(doc.experience[0].id, doc.experience[1].id);
        assert_ne!(doc.projects[0].id, doc.projects[1].id);
        assert_eq!(doc.experience.iter().map(|e| e.bullets.len()).sum::<usize>(), 6);
    }
}
