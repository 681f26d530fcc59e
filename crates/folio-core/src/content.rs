//! Static page content. Loaded once from `site.toml` and never mutated.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub headlines: Vec<String>,
    pub about: String,
    pub education: Education,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub school: String,
    pub location: String,
    pub period: String,
}

/// A call-to-action button in the hero banner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroAction {
    pub label: String,
    pub target: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub title: String,
    pub company: String,
    pub period: String,
    pub location: String,
    #[serde(default)]
    pub responsibilities: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub period: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certification {
    pub title: String,
    pub year: String,
    #[serde(default)]
    pub organization: Option<String>,
}

impl Certification {
    /// Issuing organization, if one is worth showing.
    pub fn organization(&self) -> Option<&str> {
        self.organization.as_deref().filter(|o| !o.trim().is_empty())
    }
}

/// Contact details. The hrefs are written out literally in `site.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub email: String,
    pub email_href: String,
    pub phone: String,
    pub phone_href: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialKind {
    Instagram,
    X,
    Facebook,
    Github,
}

impl fmt::Display for SocialKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SocialKind::Instagram => "Instagram",
            SocialKind::X => "X",
            SocialKind::Facebook => "Facebook",
            SocialKind::Github => "GitHub",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub kind: SocialKind,
    #[serde(default)]
    pub url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_certification_blank_organization_hidden() {
        let cert = Certification {
            title: "CompTIA Security+".to_string(),
            year: "Expected Q1 2026".to_string(),
            organization: Some(String::new()),
        };
        assert_eq!(cert.organization(), None);

        let cert = Certification {
            organization: Some("LinkedIn Learning".to_string()),
            ..cert
        };
        assert_eq!(cert.organization(), Some("LinkedIn Learning"));
    }

    #[test]
    fn test_social_kind_parses_lowercase() {
        let link: SocialLink = toml::from_str(r#"kind = "github""#).unwrap();
        assert_eq!(link.kind, SocialKind::Github);
        assert_eq!(link.url, None);
        assert_eq!(SocialKind::X.to_string(), "X");
    }
}
