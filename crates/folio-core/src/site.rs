//! Site configuration: navigation settings, the section registry and all page
//! content, read from TOML.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;

use crate::content::{
    Certification, Contact, Experience, HeroAction, Profile, Project, SocialLink,
};
use crate::navigation::NavigationState;
use crate::section::{self, RegistryError, Section, SectionRegistry};
use crate::throttle::Throttle;
use crate::tracker::{ActiveSectionTracker, NAV_OFFSET};

/// Content compiled into the site.
pub const EMBEDDED_SITE: &str = include_str!("../site.toml");

/// Default minimum spacing between active-section recomputations.
pub const DEFAULT_SCROLL_THROTTLE_MS: u64 = 100;

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("failed to read site file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid site content: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid section list: {0}")]
    Registry(#[from] RegistryError),
    #[error("section '{0}' has no matching block on the page")]
    UnknownSection(String),
    #[error("hero button '{label}' targets unknown anchor '{target}'")]
    UnknownHeroTarget { label: String, target: String },
    #[error("email link must be a mailto: URL, got '{0}'")]
    EmailHref(String),
    #[error("phone link must be a tel: URL, got '{0}'")]
    PhoneHref(String),
    #[error("navigation offset must be finite and non-negative, got {0}")]
    Offset(f64),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavSettings {
    /// Compensation for the fixed navigation bar, in CSS pixels.
    #[serde(default = "default_offset")]
    pub offset: f64,
    #[serde(default = "default_throttle")]
    pub scroll_throttle_ms: u64,
    /// Mount the projects block and list it in the navigation.
    #[serde(default)]
    pub show_projects: bool,
}

fn default_offset() -> f64 {
    NAV_OFFSET
}

fn default_throttle() -> u64 {
    DEFAULT_SCROLL_THROTTLE_MS
}

impl Default for NavSettings {
    fn default() -> Self {
        Self {
            offset: NAV_OFFSET,
            scroll_throttle_ms: DEFAULT_SCROLL_THROTTLE_MS,
            show_projects: false,
        }
    }
}

/// Raw contents of `site.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub nav: NavSettings,
    pub sections: Vec<Section>,
    pub profile: Profile,
    #[serde(default)]
    pub hero: Vec<HeroAction>,
    #[serde(default)]
    pub experiences: Vec<Experience>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub certifications: Vec<Certification>,
    pub contact: Contact,
    #[serde(default)]
    pub socials: Vec<SocialLink>,
}

/// Validated site content plus the registry derived from it.
#[derive(Debug, Clone, PartialEq)]
pub struct Site {
    config: SiteConfig,
    registry: Arc<SectionRegistry>,
}

impl Site {
    pub fn embedded() -> Result<Self, SiteError> {
        Self::from_toml(EMBEDDED_SITE)
    }

    pub fn load(path: &Path) -> Result<Self, SiteError> {
        let contents = fs::read_to_string(path).map_err(|source| SiteError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, SiteError> {
        let config: SiteConfig = toml::from_str(contents)?;
        Self::from_config(config)
    }

    pub fn from_config(config: SiteConfig) -> Result<Self, SiteError> {
        let offset = config.nav.offset;
        if !offset.is_finite() || offset < 0.0 {
            return Err(SiteError::Offset(offset));
        }

        let registry = SectionRegistry::new(navigable_sections(&config))?;
        let anchors = page_anchors(config.nav.show_projects);

        if let Some(unknown) = registry.ids().find(|id| !anchors.contains(id)) {
            return Err(SiteError::UnknownSection(unknown.to_string()));
        }

        for action in &config.hero {
            if !anchors.contains(&action.target.as_str()) {
                return Err(SiteError::UnknownHeroTarget {
                    label: action.label.clone(),
                    target: action.target.clone(),
                });
            }
        }

        if !config.contact.email_href.starts_with("mailto:") {
            return Err(SiteError::EmailHref(config.contact.email_href.clone()));
        }
        if !config.contact.phone_href.starts_with("tel:") {
            return Err(SiteError::PhoneHref(config.contact.phone_href.clone()));
        }

        Ok(Self {
            config,
            registry: Arc::new(registry),
        })
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn registry(&self) -> Arc<SectionRegistry> {
        Arc::clone(&self.registry)
    }

    pub fn shows_projects(&self) -> bool {
        self.config.nav.show_projects
    }

    pub fn tracker(&self) -> ActiveSectionTracker {
        ActiveSectionTracker::new(self.config.nav.offset)
    }

    pub fn throttle(&self) -> Throttle {
        Throttle::new(self.config.nav.scroll_throttle_ms as f64)
    }

    /// Fresh navigation state for one navigation bar instance.
    pub fn navigation(&self) -> NavigationState {
        NavigationState::new(self.registry(), self.tracker())
    }

    /// Problems that do not stop the site from rendering.
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        if !self.config.nav.show_projects && !self.config.projects.is_empty() {
            warnings.push(format!(
                "{} project(s) defined but the projects block is hidden (nav.show_projects = false)",
                self.config.projects.len()
            ));
        }

        for anchor in page_anchors(self.config.nav.show_projects) {
            if anchor != section::HOME && !self.registry.contains(anchor) {
                warnings.push(format!(
                    "'{}' is rendered but has no navigation link",
                    anchor
                ));
            }
        }

        if self.config.experiences.is_empty() {
            warnings.push("no experience entries defined".to_string());
        }

        warnings
    }
}

/// Anchors rendered on the page, in document order.
pub fn page_anchors(show_projects: bool) -> Vec<&'static str> {
    let mut anchors = vec![section::HOME, section::ABOUT, section::EXPERIENCE];
    if show_projects {
        anchors.push(section::PROJECTS);
    }
    anchors.extend([section::CERTIFICATIONS, section::CONTACTS, section::PAYMENTS]);
    anchors
}

/// The configured section list, with `projects` slotted in after `experience`
/// when the projects block is enabled and not listed explicitly.
fn navigable_sections(config: &SiteConfig) -> Vec<Section> {
    let mut sections = config.sections.clone();
    if config.nav.show_projects && !sections.iter().any(|s| s.id == section::PROJECTS) {
        let at = sections
            .iter()
            .position(|s| s.id == section::EXPERIENCE)
            .map(|i| i + 1)
            .unwrap_or(sections.len());
        sections.insert(at, Section::new(section::PROJECTS, "Projects"));
    }
    sections
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_nav(nav: &str) -> String {
        EMBEDDED_SITE.replace(
            "[nav]\noffset = 100.0\nscroll_throttle_ms = 100\nshow_projects = false\n",
            nav,
        )
    }

    #[test]
    fn test_embedded_site_loads() {
        let site = Site::embedded().unwrap();
        let registry = site.registry();
        let ids: Vec<&str> = registry.ids().collect();
        assert_eq!(
            ids,
            vec!["home", "about", "experience", "certifications", "payments", "contacts"]
        );
        assert_eq!(site.tracker().offset(), 100.0);
        assert_eq!(site.throttle().interval_ms(), 100.0);
        assert!(!site.shows_projects());
        assert_eq!(site.config().experiences.len(), 7);
        assert_eq!(site.config().certifications.len(), 4);
        assert_eq!(site.config().contact.email_href, "mailto:kt2saint.create@gmail.com");
        assert_eq!(site.config().contact.phone_href, "tel:+16892454250");
    }

    #[test]
    fn test_navigation_starts_at_first_section() {
        let site = Site::embedded().unwrap();
        let nav = site.navigation();
        assert_eq!(nav.active(), "home");
        assert!(!nav.menu_open());
    }

    #[test]
    fn test_hidden_projects_warns() {
        let site = Site::embedded().unwrap();
        let warnings = site.warnings();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("7 project(s)"));
    }

    #[test]
    fn test_show_projects_inserts_after_experience() {
        let site = Site::from_toml(&with_nav("[nav]\nshow_projects = true\n")).unwrap();
        let registry = site.registry();
        let ids: Vec<&str> = registry.ids().collect();
        assert_eq!(
            ids,
            vec!["home", "about", "experience", "projects", "certifications", "payments", "contacts"]
        );
        assert_eq!(registry.get("projects").map(|s| s.label.as_str()), Some("Projects"));
        assert!(site.warnings().is_empty());
        // Unspecified settings fall back to defaults
        assert_eq!(site.config().nav.offset, NAV_OFFSET);
        assert_eq!(site.config().nav.scroll_throttle_ms, DEFAULT_SCROLL_THROTTLE_MS);
    }

    #[test]
    fn test_projects_listed_while_hidden_is_rejected() {
        let contents = EMBEDDED_SITE.replace(
            "[[sections]]\nid = \"certifications\"",
            "[[sections]]\nid = \"projects\"\nlabel = \"Projects\"\n\n[[sections]]\nid = \"certifications\"",
        );
        match Site::from_toml(&contents) {
            Err(SiteError::UnknownSection(id)) => assert_eq!(id, "projects"),
            other => panic!("expected UnknownSection, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_hero_target_rejected() {
        let contents = EMBEDDED_SITE.replace("target = \"payments\"", "target = \"shop\"");
        let err = Site::from_toml(&contents).unwrap_err();
        assert!(matches!(err, SiteError::UnknownHeroTarget { ref target, .. } if target == "shop"));
        assert!(err.to_string().contains("PAYMENTS"));
    }

    #[test]
    fn test_hero_may_target_unlisted_anchor() {
        let contents = EMBEDDED_SITE.replace(
            "[[sections]]\nid = \"payments\"\nlabel = \"Payments\"\n\n",
            "",
        );
        let site = Site::from_toml(&contents).unwrap();
        assert!(!site.registry().contains("payments"));
        assert!(site.config().hero.iter().any(|action| action.target == "payments"));
        assert!(site
            .warnings()
            .iter()
            .any(|w| w.contains("'payments' is rendered but has no navigation link")));
    }

    #[test]
    fn test_duplicate_section_rejected() {
        let contents = EMBEDDED_SITE.replace("id = \"contacts\"", "id = \"about\"");
        let err = Site::from_toml(&contents).unwrap_err();
        assert!(matches!(
            err,
            SiteError::Registry(RegistryError::DuplicateId(ref id)) if id == "about"
        ));
    }

    #[test]
    fn test_contact_hrefs_validated() {
        let contents = EMBEDDED_SITE.replace(
            "email_href = \"mailto:kt2saint.create@gmail.com\"",
            "email_href = \"kt2saint.create@gmail.com\"",
        );
        assert!(matches!(Site::from_toml(&contents), Err(SiteError::EmailHref(_))));

        let contents = EMBEDDED_SITE.replace(
            "phone_href = \"tel:+16892454250\"",
            "phone_href = \"+16892454250\"",
        );
        assert!(matches!(Site::from_toml(&contents), Err(SiteError::PhoneHref(_))));
    }

    #[test]
    fn test_negative_offset_rejected() {
        let contents = with_nav("[nav]\noffset = -1.0\n");
        assert!(matches!(Site::from_toml(&contents), Err(SiteError::Offset(_))));
    }

    #[test]
    fn test_parse_error_reported() {
        let err = Site::from_toml("sections = 3").unwrap_err();
        assert!(matches!(err, SiteError::Parse(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = Site::load(Path::new("/nonexistent/site.toml")).unwrap_err();
        assert!(matches!(err, SiteError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/site.toml"));
    }

    #[test]
    fn test_page_anchor_order() {
        assert_eq!(
            page_anchors(false),
            vec!["home", "about", "experience", "certifications", "contacts", "payments"]
        );
        assert_eq!(page_anchors(true)[3], "projects");
    }
}
