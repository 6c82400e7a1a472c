//! Network sites taking part in the hub-and-spoke programme.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Position of a site in the hub-and-spoke network.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SiteRole {
    /// Central coordinating node.
    Hub,
    /// Peripheral contributing node.
    #[default]
    Spoke,
}

impl SiteRole {
    /// Lower-case wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            SiteRole::Hub => "hub",
            SiteRole::Spoke => "spoke",
        }
    }

    /// Upper-case label used in the planned-sites listing.
    pub fn label(&self) -> &'static str {
        match self {
            SiteRole::Hub => "HUB",
            SiteRole::Spoke => "SPOKE",
        }
    }
}

impl fmt::Display for SiteRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SiteRole {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "hub" => Ok(SiteRole::Hub),
            "spoke" => Ok(SiteRole::Spoke),
            _ => Err(ValidationError::invalid_format(
                "role",
                format!("expected hub or spoke, got '{}'", s),
            )),
        }
    }
}

/// A planned site.
///
/// Sites with a blank name are skipped when the document is rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Site {
    pub name: String,
    pub role: SiteRole,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capabilities: Option<String>,
}

impl Site {
    /// Creates a site, trimming the name.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyField` if the name is blank.
    pub fn try_new(name: impl Into<String>, role: SiteRole) -> Result<Self, ValidationError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(ValidationError::empty_field("site name"));
        }
        Ok(Self {
            name,
            role,
            city: None,
            capabilities: None,
        })
    }

    /// Sets the city; blank input clears it.
    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = non_blank(city.into());
        self
    }

    /// Sets the capabilities description; blank input clears it.
    pub fn with_capabilities(mut self, capabilities: impl Into<String>) -> Self {
        self.capabilities = non_blank(capabilities.into());
        self
    }

    /// True when the site has a usable name.
    pub fn is_named(&self) -> bool {
        !self.name.trim().is_empty()
    }

    /// City, if present and non-blank.
    pub fn city(&self) -> Option<&str> {
        self.city.as_deref().filter(|c| !c.trim().is_empty())
    }

    /// Capabilities, if present and non-blank.
    pub fn capabilities(&self) -> Option<&str> {
        self.capabilities.as_deref().filter(|c| !c.trim().is_empty())
    }
}

fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn site_role_labels_are_upper_case() {
        assert_eq!(SiteRole::Hub.label(), "HUB");
        assert_eq!(SiteRole::Spoke.label(), "SPOKE");
    }

    #[test]
    fn site_role_parses_case_insensitively() {
        assert_eq!("Hub".parse::<SiteRole>().unwrap(), SiteRole::Hub);
        assert_eq!(" spoke ".parse::<SiteRole>().unwrap(), SiteRole::Spoke);
        assert!("node".parse::<SiteRole>().is_err());
    }

    #[test]
    fn site_role_defaults_to_spoke() {
        assert_eq!(SiteRole::default(), SiteRole::Spoke);
    }

    #[test]
    fn site_try_new_rejects_blank_name() {
        let err = Site::try_new("   ", SiteRole::Hub).unwrap_err();
        assert!(matches!(err, ValidationError::EmptyField { .. }));
    }

    #[test]
    fn site_builder_trims_and_drops_blank_fields() {
        let site = Site::try_new("  AIIMS  ", SiteRole::Hub)
            .unwrap()
            .with_city(" Delhi ")
            .with_capabilities("  ");
        assert_eq!(site.name, "AIIMS");
        assert_eq!(site.city(), Some("Delhi"));
        assert_eq!(site.capabilities(), None);
    }

    #[test]
    fn blank_optional_fields_read_as_absent() {
        let site = Site {
            name: "Spoke A".to_string(),
            role: SiteRole::Spoke,
            city: Some(String::new()),
            capabilities: Some(" ".to_string()),
        };
        assert_eq!(site.city(), None);
        assert_eq!(site.capabilities(), None);
    }

    #[test]
    fn site_deserializes_with_missing_optionals() {
        let site: Site = serde_json::from_str(r#"{"name": "Hub1", "role": "hub"}"#).unwrap();
        assert_eq!(site.role, SiteRole::Hub);
        assert!(site.city.is_none());
        assert!(site.is_named());
    }
}
