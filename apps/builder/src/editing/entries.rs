use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::resume::{EducationEntry, ExperienceEntry, ProjectEntry};

/// Fresh entry id (UUID v4, simple form).
pub fn new_entry_id() -> String {
    Uuid::new_v4().simple().to_string()
}

/// An entry addressable by its id.
pub trait Identified {
    fn id(&self) -> &str;
}

impl Identified for EducationEntry {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Identified for ExperienceEntry {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Identified for ProjectEntry {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Returns the sequence with `update` applied to the entry matching `id`.
pub fn update_entry<T, F>(entries: &[T], id: &str, update: F) -> Vec<T>
where
    T: Identified + Clone,
    F: FnOnce(&mut T),
{
    let mut next = entries.to_vec();
    if let Some(entry) = next.iter_mut().find(|e| e.id() == id) {
        update(entry);
    }
    next
}

/// Returns the sequence without the entry matching `id`. Unknown ids are a no-op.
pub fn remove_entry<T: Identified + Clone>(entries: &[T], id: &str) -> Vec<T> {
    entries.iter().filter(|e| e.id() != id).cloned().collect()
}

pub fn new_education() -> EducationEntry {
    EducationEntry {
        id: new_entry_id(),
        ..EducationEntry::default()
    }
}

/// New experience entries start with one empty bullet.
pub fn new_experience() -> ExperienceEntry {
    ExperienceEntry {
        id: new_entry_id(),
        bullets: vec![String::new()],
        ..ExperienceEntry::default()
    }
}

pub fn new_project() -> ProjectEntry {
    ProjectEntry {
        id: new_entry_id(),
        bullets: vec![String::new()],
        ..ProjectEntry::default()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Field selectors
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EducationField {
    Institution,
    Location,
    Degree,
    Duration,
}

impl EducationField {
    pub fn set(&self, entry: &mut EducationEntry, value: &str) {
        let slot = match self {
            EducationField::Institution => &mut entry.institution,
            EducationField::Location => &mut entry.location,
            EducationField::Degree => &mut entry.degree,
            EducationField::Duration => &mut entry.duration,
        };
        *slot = value.to_string();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceField {
    Role,
    Company,
    Location,
    Duration,
}

impl ExperienceField {
    pub fn set(&self, entry: &mut ExperienceEntry, value: &str) {
        let slot = match self {
            ExperienceField::Role => &mut entry.role,
            ExperienceField::Company => &mut entry.company,
            ExperienceField::Location => &mut entry.location,
            ExperienceField::Duration => &mut entry.duration,
        };
        *slot = value.to_string();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectField {
    Title,
    TechStack,
}

impl ProjectField {
    pub fn set(&self, entry: &mut ProjectEntry, value: &str) {
        let slot = match self {
            ProjectField::Title => &mut entry.title,
            ProjectField::TechStack => &mut entry.tech_stack,
        };
        *slot = value.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn edu(id: &str, institution: &str) -> EducationEntry {
        EducationEntry {
            id: id.to_string(),
            institution: institution.to_string(),
            ..EducationEntry::default()
        }
    }

    #[test]
    fn test_new_ids_are_distinct() {
        let ids: HashSet<String> = (0..500).map(|_| new_entry_id()).collect();
        assert_eq!(ids.len(), 500);
        assert!(ids.iter().all(|id| id.len() == 32));
    }

    #[test]
    fn test_new_entries_shape() {
        let e = new_education();
        assert!(!e.id.is_empty());
        assert_eq!(e.institution, "");

        let x = new_experience();
        assert_eq!(x.bullets, vec![String::new()]);

        let p = new_project();
        assert_eq!(p.bullets, vec![String::new()]);
        assert_eq!(p.tech_stack, "");
    }

    #[test]
    fn test_update_touches_only_matching_entry() {
        let entries = vec![edu("a", "MIT"), edu("b", "CMU")];
        let next = update_entry(&entries, "b", |e| EducationField::Degree.set(e, "BSc"));
        assert_eq!(next[0], entries[0]);
        assert_eq!(next[1].degree, "BSc");
        assert_eq!(next[1].institution, "CMU");
        // input untouched
        assert_eq!(entries[1].degree, "");
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let entries = vec![edu("a", "MIT")];
        let next = update_entry(&entries, "zzz", |e| EducationField::Degree.set(e, "BSc"));
        assert_eq!(next, entries);
    }

    #[test]
    fn test_remove_by_id() {
        let entries = vec![edu("a", "MIT"), edu("b", "CMU")];
        let next = remove_entry(&entries, "a");
        assert_eq!(next, vec![edu("b", "CMU")]);
        assert_eq!(remove_entry(&next, "a"), next);
    }

    #[test]
    fn test_field_selectors_write_expected_slot() {
        let mut x = ExperienceEntry::default();
        ExperienceField::Company.set(&mut x, "Acme");
        ExperienceField::Role.set(&mut x, "Engineer");
        assert_eq!(x.company, "Acme");
        assert_eq!(x.role, "Engineer");

        let mut p = ProjectEntry::default();
        ProjectField::TechStack.set(&mut p, "Rust");
        assert_eq!(p.tech_stack, "Rust");
        assert_eq!(p.title, "");
    }
}
