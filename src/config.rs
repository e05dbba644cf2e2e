//! Site configuration embedded in the page as JSON.
//!
//! The host page may carry
//! `<script type="application/json" id="site-config">{...}</script>`; every
//! key is optional and missing keys take the defaults below. A missing or
//! malformed block falls back to `SiteConfig::default()` with a warning.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

pub const CONFIG_ELEMENT_ID: &str = "site-config";
pub const DEFAULT_CONTACT_ENDPOINT: &str = "/api/contact";
pub const DEFAULT_TITLE: &str = "Portfolio";
pub const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("malformed site config: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("contact endpoint must not be empty")]
    EmptyEndpoint,
    #[error("unknown log level: {0}")]
    UnknownLogLevel(String),
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SiteConfig {
    pub title: String,
    pub contact_endpoint: String,
    pub lazy_images: bool,
    pub log_level: String,
    pub sections: Vec<SectionConfig>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_owned(),
            contact_endpoint: DEFAULT_CONTACT_ENDPOINT.to_owned(),
            lazy_images: false,
            log_level: DEFAULT_LOG_LEVEL.to_owned(),
            sections: default_sections(),
        }
    }
}

/// A page section; each one gets a mini-map entry.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SectionConfig {
    pub id: String,
    pub label: String,
    /// Markdown shown under the heading.
    pub intro: String,
    pub cards: Vec<CardConfig>,
    /// Render the contact form at the end of this section.
    pub contact_form: bool,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CardConfig {
    pub title: String,
    pub summary: String,
    /// Markdown body revealed when the card expands.
    pub description: String,
    pub media: Option<MediaConfig>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct MediaConfig {
    pub src: String,
    pub alt: String,
}

impl SiteConfig {
    /// Parse and validate a JSON config block.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` for invalid JSON, an empty endpoint, or an
    /// unrecognized log level.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        if config.contact_endpoint.trim().is_empty() {
            return Err(ConfigError::EmptyEndpoint);
        }
        config.level_filter()?;
        Ok(config)
    }

    /// Parsed `log_level`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::UnknownLogLevel` when the name is not a `log` level.
    pub fn level_filter(&self) -> Result<log::LevelFilter, ConfigError> {
        self.log_level
            .parse()
            .map_err(|_| ConfigError::UnknownLogLevel(self.log_level.clone()))
    }

    /// Read the config block from the current document.
    pub fn load() -> Self {
        #[cfg(feature = "csr")]
        {
            let raw = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
                .and_then(|el| el.text_content());
            let Some(raw) = raw else {
                return Self::default();
            };
            match Self::from_json(&raw) {
                Ok(config) => config,
                Err(e) => {
                    log::warn!("{e}; using default site config");
                    Self::default()
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            Self::default()
        }
    }
}

fn default_sections() -> Vec<SectionConfig> {
    vec![
        SectionConfig {
            id: "about".to_owned(),
            label: "About".to_owned(),
            intro: "Hi, I build things for the web.".to_owned(),
            ..SectionConfig::default()
        },
        SectionConfig {
            id: "projects".to_owned(),
            label: "Projects".to_owned(),
            ..SectionConfig::default()
        },
        SectionConfig {
            id: "contact".to_owned(),
            label: "Contact".to_owned(),
            intro: "Send me a note.".to_owned(),
            contact_form: true,
            ..SectionConfig::default()
        },
    ]
}
