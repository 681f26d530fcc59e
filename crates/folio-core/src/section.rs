use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

pub const HOME: &str = "home";
pub const ABOUT: &str = "about";
pub const EXPERIENCE: &str = "experience";
pub const PROJECTS: &str = "projects";
pub const CERTIFICATIONS: &str = "certifications";
pub const PAYMENTS: &str = "payments";
pub const CONTACTS: &str = "contacts";

/// A named, anchorable region of the page.
///
/// `id` must match the `id` attribute of the rendered element exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    pub label: String,
}

impl Section {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("section registry is empty")]
    Empty,
    #[error("section id at position {0} is empty")]
    EmptyId(usize),
    #[error("duplicate section id: {0}")]
    DuplicateId(String),
}

/// Ordered, immutable list of navigable sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionRegistry {
    sections: Vec<Section>,
}

impl SectionRegistry {
    pub fn new(sections: Vec<Section>) -> Result<Self, RegistryError> {
        if sections.is_empty() {
            return Err(RegistryError::Empty);
        }

        let mut seen = HashSet::new();
        for (index, section) in sections.iter().enumerate() {
            if section.id.trim().is_empty() {
                return Err(RegistryError::EmptyId(index));
            }
            if !seen.insert(section.id.as_str()) {
                return Err(RegistryError::DuplicateId(section.id.clone()));
            }
        }

        Ok(Self { sections })
    }

    /// The section that is active before any scroll or click.
    pub fn first(&self) -> &Section {
        // Non-empty by construction
        &self.sections[0]
    }

    pub fn get(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|s| s.id.as_str())
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Section> {
        vec![
            Section::new(HOME, "Home"),
            Section::new(ABOUT, "About me"),
            Section::new(EXPERIENCE, "Experience"),
        ]
    }

    #[test]
    fn test_registry_preserves_order() {
        let registry = SectionRegistry::new(sample()).unwrap();
        let ids: Vec<&str> = registry.ids().collect();
        assert_eq!(ids, vec!["home", "about", "experience"]);
        assert_eq!(registry.first().id, "home");
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_registry_lookup() {
        let registry = SectionRegistry::new(sample()).unwrap();
        assert_eq!(registry.get("about").map(|s| s.label.as_str()), Some("About me"));
        assert!(registry.contains("experience"));
        assert!(!registry.contains("projects"));
        // Lookups are exact string matches
        assert!(!registry.contains("About"));
    }

    #[test]
    fn test_registry_rejects_empty() {
        assert_eq!(SectionRegistry::new(vec![]), Err(RegistryError::Empty));
    }

    #[test]
    fn test_registry_rejects_duplicates() {
        let mut sections = sample();
        sections.push(Section::new("about", "Again"));
        assert_eq!(
            SectionRegistry::new(sections),
            Err(RegistryError::DuplicateId("about".to_string()))
        );
    }

    #[test]
    fn test_registry_rejects_blank_id() {
        let sections = vec![Section::new(HOME, "Home"), Section::new("  ", "Blank")];
        assert_eq!(SectionRegistry::new(sections), Err(RegistryError::EmptyId(1)));
    }
}
