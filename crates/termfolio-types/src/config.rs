//! Session configuration loaded from TOML.
//!
//! Every field has a default, so an empty file (or no file at all) yields
//! the stock portfolio with the `ulin@portfolio` prompt.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::error::{Result, TermfolioError};
use crate::portfolio::{
    ContactLink, Portfolio, ProfileCard, ProjectRef, default_contacts, default_skills,
};
use crate::theme::Theme;

/// Top-level configuration (`termfolio.toml`).
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TermfolioConfig {
    /// Initial username shown in the prompt.
    pub username: String,
    /// Initial hostname shown in the prompt.
    pub hostname: String,
    /// Initial theme.
    pub theme: Theme,
    /// Artificial "processing" delay before a response is appended.
    pub response_delay_ms: u64,
    /// Delay between `clear` and the log being emptied.
    pub clear_delay_ms: u64,
    /// JSON project list. Relative paths resolve against the config file.
    pub projects_path: Option<PathBuf>,
    pub profile: ProfileCard,
    pub contact: Vec<ContactLink>,
    pub skills: Vec<String>,
}

impl Default for TermfolioConfig {
    fn default() -> Self {
        Self {
            username: "ulin".to_string(),
            hostname: "portfolio".to_string(),
            theme: Theme::Dark,
            response_delay_ms: 500,
            clear_delay_ms: 500,
            projects_path: None,
            profile: ProfileCard::default(),
            contact: default_contacts(),
            skills: default_skills(),
        }
    }
}

impl TermfolioConfig {
    /// Parse a config from TOML text.
    pub fn from_toml(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)
            .map_err(|e| TermfolioError::Config(format!("termfolio.toml: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file, resolving `projects_path` relative to it.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let mut config = Self::from_toml(&text)?;
        if let Some(ref projects) = config.projects_path
            && projects.is_relative()
            && let Some(dir) = path.parent()
        {
            config.projects_path = Some(dir.join(projects));
        }
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Assemble the displayable content from this config and a project list.
    pub fn portfolio(&self, projects: Vec<ProjectRef>) -> Portfolio {
        Portfolio {
            profile: self.profile.clone(),
            projects,
            contact: self.contact.clone(),
            skills: self.skills.clone(),
        }
    }

    pub fn response_delay(&self) -> Duration {
        Duration::from_millis(self.response_delay_ms)
    }

    pub fn clear_delay(&self) -> Duration {
        Duration::from_millis(self.clear_delay_ms)
    }

    /// Reject identities that cannot be shown as a single prompt token.
    fn validate(&self) -> Result<()> {
        for (field, value) in [("username", &self.username), ("hostname", &self.hostname)] {
            if value.is_empty() || value.chars().any(char::is_whitespace) {
                return Err(TermfolioError::Config(format!(
                    "{field} must be a single non-empty word, got {value:?}"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = TermfolioConfig::default();
        assert_eq!(c.username, "ulin");
        assert_eq!(c.hostname, "portfolio");
        assert_eq!(c.theme, Theme::Dark);
        assert_eq!(c.response_delay(), Duration::from_millis(500));
        assert_eq!(c.clear_delay(), Duration::from_millis(500));
        assert!(c.projects_path.is_none());
    }

    #[test]
    fn empty_toml_is_default() {
        let c = TermfolioConfig::from_toml("").unwrap();
        assert_eq!(c.username, "ulin");
        assert_eq!(c.skills.len(), 3);
    }

    #[test]
    fn override_fields() {
        let c = TermfolioConfig::from_toml(
            r#"
            username = "alice"
            theme = "solarized"
            response_delay_ms = 0
            skills = ["Rust"]

            [profile]
            name = "Alice"
            "#,
        )
        .unwrap();
        assert_eq!(c.username, "alice");
        assert_eq!(c.hostname, "portfolio");
        assert_eq!(c.theme, Theme::Solarized);
        assert_eq!(c.response_delay(), Duration::ZERO);
        assert_eq!(c.skills, vec!["Rust".to_string()]);
        assert_eq!(c.profile.name, "Alice");
    }

    #[test]
    fn contact_override() {
        let c = TermfolioConfig::from_toml(
            r#"
            [[contact]]
            label = "Mastodon"
            display = "@alice"
            "#,
        )
        .unwrap();
        assert_eq!(c.contact.len(), 1);
        assert!(c.contact[0].href.is_none());
    }

    #[test]
    fn invalid_theme_rejected() {
        let err = TermfolioConfig::from_toml("theme = \"neon\"").unwrap_err();
        assert!(matches!(err, TermfolioError::Config(_)));
    }

    #[test]
    fn username_with_space_rejected() {
        let err = TermfolioConfig::from_toml("username = \"a b\"").unwrap_err();
        assert!(format!("{err}").contains("username"));
    }

    #[test]
    fn empty_hostname_rejected() {
        assert!(TermfolioConfig::from_toml("hostname = \"\"").is_err());
    }

    #[test]
    fn load_sample_resolves_projects_path() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../portfolio/termfolio.toml");
        let c = TermfolioConfig::load(&path).unwrap();
        let projects_path = c.projects_path.clone().unwrap();
        assert!(projects_path.ends_with("projects.json"));
        let projects = crate::portfolio::load_projects(&projects_path).unwrap();
        assert_eq!(projects.len(), 3);
        assert_eq!(c.portfolio(projects).projects[0].name, "Portfolio Terminal");
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let err = TermfolioConfig::load(Path::new("/nonexistent/termfolio.toml")).unwrap_err();
        assert!(matches!(err, TermfolioError::Io(_)));
    }
}
