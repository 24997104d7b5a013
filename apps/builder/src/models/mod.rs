pub mod layout;
pub mod resume;
pub mod template;

pub use layout::{FontSize, LayoutSettings, Margins, Spacing};
pub use resume::{
    default_resume, ContactInfo, EducationEntry, ExperienceEntry, ProjectEntry, ResumeDocument,
    SectionType, TechnicalSkills, DEFAULT_SECTION_ORDER,
};
pub use template::{template_info, templates, TemplateId, TemplateInfo};
