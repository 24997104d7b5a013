//! Preview projection: the resolved, ordered view of a document that a renderer
//! draws and the PDF exporter rasterizes.
//!
//! Header and contact always come first. The six sections follow in the document's
//! `section_order`, and a section with nothing to show is left out entirely.

use serde::Serialize;

use crate::editing::ContactField;
use crate::models::layout::LayoutSettings;
use crate::models::resume::{ResumeDocument, SectionType};
use crate::models::template::TemplateId;
use crate::sections::normalize_section_order;

/// Shown in place of an empty name.
pub const NAME_PLACEHOLDER: &str = "Your Name";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumePreview {
    pub header: PreviewHeader,
    pub sections: Vec<PreviewSection>,
    pub template: TemplateId,
    pub layout: LayoutSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreviewHeader {
    pub name: String,
    pub title: Option<String>,
    /// Non-empty contact fields in display order: phone, email, LinkedIn, GitHub.
    pub contact: Vec<(ContactField, String)>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreviewSection {
    pub section: SectionType,
    pub heading: &'static str,
    pub items: Vec<PreviewItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PreviewItem {
    /// Two-row entry: title/aside on top, subtitle/aside below, then bullets.
    Entry {
        title: String,
        aside: String,
        subtitle: String,
        subtitle_aside: String,
        bullets: Vec<String>,
    },
    /// "Label: text" line (skills).
    Labeled { label: &'static str, text: String },
    /// Bare bullet (activities, certifications).
    Bullet { text: String },
}

pub fn build_preview(doc: &ResumeDocument) -> ResumePreview {
    let sections = normalize_section_order(doc.section_order.clone())
        .into_iter()
        .filter_map(|section| {
            let items = section_items(doc, section);
            (!items.is_empty()).then(|| PreviewSection {
                section,
                heading: section.heading(),
                items,
            })
        })
        .collect();

    ResumePreview {
        header: build_header(doc),
        sections,
        template: doc.template,
        layout: doc.layout,
    }
}

fn build_header(doc: &ResumeDocument) -> PreviewHeader {
    let name = if doc.name.is_empty() {
        NAME_PLACEHOLDER.to_string()
    } else {
        doc.name.clone()
    };
    let title = (!doc.title.is_empty()).then(|| doc.title.clone());

    let contact = [
        (ContactField::Phone, &doc.contact.phone),
        (ContactField::Email, &doc.contact.email),
        (ContactField::Linkedin, &doc.contact.linkedin),
        (ContactField::Github, &doc.contact.github),
    ]
    .into_iter()
    .filter(|(_, value)| !value.is_empty())
    .map(|(field, value)| (field, value.clone()))
    .collect();

    PreviewHeader {
        name,
        title,
        contact,
    }
}

fn section_items(doc: &ResumeDocument, section: SectionType) -> Vec<PreviewItem> {
    match section {
        SectionType::Education => doc
            .education
            .iter()
            .map(|e| PreviewItem::Entry {
                title: e.institution.clone(),
                aside: e.location.clone(),
                subtitle: e.degree.clone(),
                subtitle_aside: e.duration.clone(),
                bullets: Vec::new(),
            })
            .collect(),

        SectionType::Skills => [
            ("Programming Languages", &doc.skills.languages),
            ("Frameworks & Libraries", &doc.skills.frameworks),
            ("Tools & Technologies", &doc.skills.tools),
        ]
        .into_iter()
        .filter(|(_, text)| !text.is_empty())
        .map(|(label, text)| PreviewItem::Labeled {
            label,
            text: text.clone(),
        })
        .collect(),

        SectionType::Experience => doc
            .experience
            .iter()
            .map(|e| PreviewItem::Entry {
                title: e.role.clone(),
                aside: e.duration.clone(),
                subtitle: e.company.clone(),
                subtitle_aside: e.location.clone(),
                bullets: e.bullets.clone(),
            })
            .collect(),

        SectionType::Projects => doc
            .projects
            .iter()
            .map(|p| PreviewItem::Entry {
                title: p.title.clone(),
                aside: p.tech_stack.clone(),
                subtitle: String::new(),
                subtitle_aside: String::new(),
                bullets: p.bullets.clone(),
            })
            .collect(),

        SectionType::Activities => bullet_items(&doc.activities),
        SectionType::Certifications => bullet_items(&doc.certifications),
    }
}

fn bullet_items(lines: &[String]) -> Vec<PreviewItem> {
    lines
        .iter()
        .map(|text| PreviewItem::Bullet { text: text.clone() })
        .collect()
}
