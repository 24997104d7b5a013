//! Form edits: the only writer of document content.
//!
//! Each edit is described by an `Edit` value and applied with `apply_edit`, which
//! returns a new document and leaves its input untouched. Edits are total: unknown
//! ids and out-of-range indices leave the document as it was. No field is validated.

pub mod bullets;
pub mod entries;

use serde::{Deserialize, Serialize};

use crate::models::layout::{FontSize, Margins, Spacing};
use crate::models::resume::ResumeDocument;
use crate::models::template::TemplateId;

pub use bullets::BulletTarget;
pub use entries::{EducationField, ExperienceField, ProjectField};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactField {
    Phone,
    Email,
    Linkedin,
    Github,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillField {
    Languages,
    Frameworks,
    Tools,
}

/// A single form edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Edit {
    SetName { value: String },
    SetTitle { value: String },
    SetContact { field: ContactField, value: String },
    SetSkill { field: SkillField, value: String },

    AddEducation,
    UpdateEducation { id: String, field: EducationField, value: String },
    RemoveEducation { id: String },

    AddExperience,
    UpdateExperience { id: String, field: ExperienceField, value: String },
    RemoveExperience { id: String },

    AddProject,
    UpdateProject { id: String, field: ProjectField, value: String },
    RemoveProject { id: String },

    AddBullet { target: BulletTarget },
    SetBullet { target: BulletTarget, index: usize, value: String },
    RemoveBullet { target: BulletTarget, index: usize },

    SetTemplate { template: TemplateId },
    SetFontSize { font_size: FontSize },
    SetSpacing { spacing: Spacing },
    SetMargins { margins: Margins },
}

impl Edit {
    /// Short name for log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            Edit::SetName { .. } => "set_name",
            Edit::SetTitle { .. } => "set_title",
            Edit::SetContact { .. } => "set_contact",
            Edit::SetSkill { .. } => "set_skill",
            Edit::AddEducation => "add_education",
            Edit::UpdateEducation { .. } => "update_education",
            Edit::RemoveEducation { .. } => "remove_education",
            Edit::AddExperience => "add_experience",
            Edit::UpdateExperience { .. } => "update_experience",
            Edit::RemoveExperience { .. } => "remove_experience",
            Edit::AddProject => "add_project",
            Edit::UpdateProject { .. } => "update_project",
            Edit::RemoveProject { .. } => "remove_project",
            Edit::AddBullet { .. } => "add_bullet",
            Edit::SetBullet { .. } => "set_bullet",
            Edit::RemoveBullet { .. } => "remove_bullet",
            Edit::SetTemplate { .. } => "set_template",
            Edit::SetFontSize { .. } => "set_font_size",
            Edit::SetSpacing { .. } => "set_spacing",
            Edit::SetMargins { .. } => "set_margins",
        }
    }
}

/// Applies `edit` to a copy of `doc` and returns the copy.
pub fn apply_edit(doc: &ResumeDocument, edit: Edit) -> ResumeDocument {
    let mut next = doc.clone();

    match edit {
        Edit::SetName { value } => next.name = value,
        Edit::SetTitle { value } => next.title = value,
        Edit::SetContact { field, value } => {
            let slot = match field {
                ContactField::Phone => &mut next.contact.phone,
                ContactField::Email => &mut next.contact.email,
                ContactField::Linkedin => &mut next.contact.linkedin,
                ContactField::Github => &mut next.contact.github,
            };
            *slot = value;
        }
        Edit::SetSkill { field, value } => {
            let slot = match field {
                SkillField::Languages => &mut next.skills.languages,
                SkillField::Frameworks => &mut next.skills.frameworks,
                SkillField::Tools => &mut next.skills.tools,
            };
            *slot = value;
        }

        Edit::AddEducation => next.education.push(entries::new_education()),
        Edit::UpdateEducation { id, field, value } => {
            next.education = entries::update_entry(&doc.education, &id, |e| field.set(e, &value));
        }
        Edit::RemoveEducation { id } => {
            next.education = entries::remove_entry(&doc.education, &id);
        }

        Edit::AddExperience => next.experience.push(entries::new_experience()),
        Edit::UpdateExperience { id, field, value } => {
            next.experience =
                entries::update_entry(&doc.experience, &id, |e| field.set(e, &value));
        }
        Edit::RemoveExperience { id } => {
            next.experience = entries::remove_entry(&doc.experience, &id);
        }

        Edit::AddProject => next.projects.push(entries::new_project()),
        Edit::UpdateProject { id, field, value } => {
            next.projects = entries::update_entry(&doc.projects, &id, |p| field.set(p, &value));
        }
        Edit::RemoveProject { id } => {
            next.projects = entries::remove_entry(&doc.projects, &id);
        }

        Edit::AddBullet { target } => {
            edit_bullets(&mut next, &target, |b| bullets::push_bullet(b));
        }
        Edit::SetBullet { target, index, value } => {
            edit_bullets(&mut next, &target, |b| bullets::set_bullet(b, index, &value));
        }
        Edit::RemoveBullet { target, index } => {
            edit_bullets(&mut next, &target, |b| bullets::remove_bullet(b, index));
        }

        Edit::SetTemplate { template } => next.template = template,
        Edit::SetFontSize { font_size } => next.layout.font_size = font_size,
        Edit::SetSpacing { spacing } => next.layout.spacing = spacing,
        Edit::SetMargins { margins } => next.layout.margins = margins,
    }

    next
}

/// Replaces the bullet list addressed by `target` with `op(current)`.
fn edit_bullets<F>(doc: &mut ResumeDocument, target: &BulletTarget, op: F)
where
    F: FnOnce(&[String]) -> Vec<String>,
{
    let list = match target {
        BulletTarget::Experience { id } => doc
            .experience
            .iter_mut()
            .find(|e| &e.id == id)
            .map(|e| &mut e.bullets),
        BulletTarget::Project { id } => doc
            .projects
            .iter_mut()
            .find(|p| &p.id == id)
            .map(|p| &mut p.bullets),
        BulletTarget::Activities => Some(&mut doc.activities),
        BulletTarget::Certifications => Some(&mut doc.certifications),
    };

    if let Some(list) = list {
        let updated = op(list);
        *list = updated;
    }
}
