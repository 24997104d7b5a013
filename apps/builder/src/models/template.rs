//! Static catalog of presentation templates. A template is a label only; nothing in
//! scoring or page-fit depends on which one is active.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateId {
    #[default]
    Classic,
    Modern,
    Minimal,
    Bold,
    Elegant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TemplateInfo {
    pub id: TemplateId,
    pub name: &'static str,
    pub description: &'static str,
    /// Short typography summary shown on the picker card.
    pub preview: &'static str,
}

static TEMPLATES: [TemplateInfo; 5] = [
    TemplateInfo {
        id: TemplateId::Classic,
        name: "Classic",
        description: "Traditional serif typography, perfect for academic and professional roles",
        preview: "Crimson Pro • Serif • Traditional",
    },
    TemplateInfo {
        id: TemplateId::Modern,
        name: "Modern",
        description: "Clean sans-serif with blue accent, ideal for tech and creative fields",
        preview: "Source Sans • Sans-serif • Blue accent",
    },
    TemplateInfo {
        id: TemplateId::Minimal,
        name: "Minimal",
        description: "Ultra-clean with generous whitespace, great for design-focused roles",
        preview: "Roboto • Light weight • Spacious",
    },
    TemplateInfo {
        id: TemplateId::Bold,
        name: "Bold",
        description: "Strong typography with dark headers, makes a powerful impression",
        preview: "Playfair Display • Serif • Dark headers",
    },
    TemplateInfo {
        id: TemplateId::Elegant,
        name: "Elegant",
        description: "Sophisticated design with warm accents, perfect for executive roles",
        preview: "Merriweather • Serif • Warm accent",
    },
];

/// All templates in picker order.
pub fn templates() -> &'static [TemplateInfo] {
    &TEMPLATES
}

pub fn template_info(id: TemplateId) -> &'static TemplateInfo {
    // TEMPLATES holds exactly one entry per variant, in declaration order.
    &TEMPLATES[id as usize]
}
