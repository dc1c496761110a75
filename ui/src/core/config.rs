//! Site configuration embedded at compile time (`ui/site.config.json`).
//!
//! The config is parsed lazily on first access. A malformed file never takes
//! the site down: we log the problem and continue with [`SiteConfig::fallback`].

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use super::content::SiteDescriptor;

const SITE_CONFIG_JSON: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/site.config.json"));

static SITE_CONFIG: Lazy<SiteConfig> = Lazy::new(|| match SiteConfig::from_json(SITE_CONFIG_JSON) {
    Ok(config) => config,
    Err(err) => {
        warn!("[config] {err}; continuing with built-in defaults");
        SiteConfig::fallback()
    }
});

/// Global site configuration.
pub fn site_config() -> &'static SiteConfig {
    &SITE_CONFIG
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("site config is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("default locale `{0}` is not listed in localeList")]
    UnknownDefaultLocale(String),
    #[error("localeList is empty")]
    NoLocales,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    pub name: String,
    pub domain: String,
    pub author: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Order is preserved when rendered.
    #[serde(default)]
    pub socials: Vec<SocialLink>,
    #[serde(default)]
    pub contact: ContactConfig,
    pub locale: LocaleConfig,
    #[serde(default)]
    pub isr: IsrConfig,
}

impl SiteConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = serde_json::from_str(raw)?;
        config.locale.validate()?;
        Ok(config)
    }

    /// Minimal English-only configuration used when the embedded file is unusable.
    pub fn fallback() -> Self {
        Self {
            name: "HAcapital".into(),
            domain: String::new(),
            author: String::new(),
            description: None,
            socials: Vec::new(),
            contact: ContactConfig::default(),
            locale: LocaleConfig {
                default_locale: "en".into(),
                locale_list: vec![LocaleEntry {
                    code: "en".into(),
                    ui_tag: "en-US".into(),
                    label: "English".into(),
                }],
            },
            isr: IsrConfig::default(),
        }
    }

    pub fn descriptor(&self) -> SiteDescriptor {
        SiteDescriptor {
            name: self.name.clone(),
            description: self.description.clone().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub kind: SocialKind,
    pub handle: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialKind {
    Linkedin,
    Twitter,
    Github,
    Youtube,
    Instagram,
    Facebook,
}

impl SocialLink {
    pub fn url(&self) -> String {
        let handle = &self.handle;
        match self.kind {
            SocialKind::Linkedin => format!("https://www.linkedin.com/in/{handle}"),
            SocialKind::Twitter => format!("https://twitter.com/{handle}"),
            SocialKind::Github => format!("https://github.com/{handle}"),
            SocialKind::Youtube => format!("https://www.youtube.com/{handle}"),
            SocialKind::Instagram => format!("https://www.instagram.com/{handle}"),
            SocialKind::Facebook => format!("https://www.facebook.com/profile.php?id={handle}"),
        }
    }

    pub fn label(&self) -> &'static str {
        match self.kind {
            SocialKind::Linkedin => "LinkedIn",
            SocialKind::Twitter => "Twitter",
            SocialKind::Github => "GitHub",
            SocialKind::Youtube => "YouTube",
            SocialKind::Instagram => "Instagram",
            SocialKind::Facebook => "Facebook",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactConfig {
    #[serde(default)]
    pub whatsapp: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IsrConfig {
    /// Seconds between static regenerations on the hosting side.
    pub revalidate: u32,
}

impl Default for IsrConfig {
    fn default() -> Self {
        Self { revalidate: 3600 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocaleConfig {
    pub default_locale: String,
    pub locale_list: Vec<LocaleEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocaleEntry {
    /// Content language code as used by `PageInfo::language` (e.g. `fr`).
    pub code: String,
    /// Fluent language tag for UI strings (e.g. `fr-FR`).
    pub ui_tag: String,
    pub label: String,
}

impl LocaleConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.locale_list.is_empty() {
            return Err(ConfigError::NoLocales);
        }
        if !self.is_supported(&self.default_locale) {
            return Err(ConfigError::UnknownDefaultLocale(self.default_locale.clone()));
        }
        Ok(())
    }

    pub fn is_supported(&self, code: &str) -> bool {
        self.locale_list.iter().any(|entry| entry.code == code)
    }

    /// Resolve the locale supplied by routing, falling back to the default
    /// locale when it is absent or unsupported.
    pub fn resolve<'a>(&'a self, requested: Option<&'a str>) -> &'a str {
        match requested {
            Some(code) if self.is_supported(code) => code,
            _ => self.default_locale.as_str(),
        }
    }

    /// Pick the first supported locale out of a preference list such as
    /// `navigator.languages`. Region subtags are ignored (`fr-CA` → `fr`).
    pub fn negotiate<S: AsRef<str>>(&self, preferred: &[S]) -> &str {
        preferred
            .iter()
            .map(|tag| tag.as_ref().split(['-', '_']).next().unwrap_or_default())
            .find_map(|code| {
                self.locale_list
                    .iter()
                    .find(|entry| entry.code.eq_ignore_ascii_case(code))
                    .map(|entry| entry.code.as_str())
            })
            .unwrap_or(self.default_locale.as_str())
    }

    pub fn ui_tag(&self, code: &str) -> Option<&str> {
        self.locale_list
            .iter()
            .find(|entry| entry.code == code)
            .map(|entry| entry.ui_tag.as_str())
    }
}
