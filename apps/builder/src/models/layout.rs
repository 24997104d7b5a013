use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontSize {
    Small,
    #[default]
    Medium,
    Large,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Spacing {
    Compact,
    #[default]
    Normal,
    Relaxed,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Margins {
    Narrow,
    #[default]
    Normal,
    Wide,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutSettings {
    pub font_size: FontSize,
    pub spacing: Spacing,
    pub margins: Margins,
}

impl FontSize {
    pub const ALL: [FontSize; 3] = [FontSize::Small, FontSize::Medium, FontSize::Large];

    /// Body text size in points.
    pub fn body_points(&self) -> f32 {
        match self {
            FontSize::Small => 9.0,
            FontSize::Medium => 10.5,
            FontSize::Large => 11.0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FontSize::Small => "Small",
            FontSize::Medium => "Medium",
            FontSize::Large => "Large",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            FontSize::Small => "9pt body text",
            FontSize::Medium => "10.5pt body text",
            FontSize::Large => "11pt body text",
        }
    }
}

impl Spacing {
    pub const ALL: [Spacing; 3] = [Spacing::Compact, Spacing::Normal, Spacing::Relaxed];

    pub fn label(&self) -> &'static str {
        match self {
            Spacing::Compact => "Compact",
            Spacing::Normal => "Normal",
            Spacing::Relaxed => "Relaxed",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Spacing::Compact => "Tight line height",
            Spacing::Normal => "Standard spacing",
            Spacing::Relaxed => "More breathing room",
        }
    }
}

impl Margins {
    pub const ALL: [Margins; 3] = [Margins::Narrow, Margins::Normal, Margins::Wide];

    /// Page margin on every side, in millimetres.
    pub fn millimetres(&self) -> f32 {
        match self {
            Margins::Narrow => 12.0,
            Margins::Normal => 18.0,
            Margins::Wide => 24.0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Margins::Narrow => "Narrow",
            Margins::Normal => "Normal",
            Margins::Wide => "Wide",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Margins::Narrow => "12mm margins",
            Margins::Normal => "18mm margins",
            Margins::Wide => "24mm margins",
        }
    }
}
