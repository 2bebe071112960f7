use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Site-wide settings, shared read-only across every page generation in a
/// run. Unrecognized keys are kept in `extra` and flow through to templates.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SiteConfig {
    pub url: String,
    pub title: String,
    pub keywords: String,
    pub description: String,
    pub author: String,
    pub root: String,
    pub source: String,
    pub destination: String,
    pub themes_dir: String,
    pub theme: String,
    pub default_ext: String,
    pub default_layout: String,
    pub time: Option<String>,

    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            title: String::new(),
            keywords: String::new(),
            description: String::new(),
            author: String::new(),
            root: String::from("/"),
            source: String::from("content"),
            destination: String::from("output"),
            themes_dir: String::from("themes"),
            theme: String::from("simple"),
            default_ext: String::from("md"),
            default_layout: String::from("page"),
            time: None,
            extra: BTreeMap::new(),
        }
    }
}

impl SiteConfig {
    /// Loads a YAML config file, fills defaults for absent keys, and stamps
    /// the generation time when the file doesn't carry one.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| Error::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let mut config: Self = serde_yaml::from_str(&raw).map_err(|e| Error::ConfigSyntax {
            path: path.to_path_buf(),
            source: e,
        })?;
        if config.time.is_none() {
            config.time = Some(Local::now().format(TIME_FORMAT).to_string());
        }
        Ok(config)
    }

    pub fn theme_dir(&self, wiki_root: &Path) -> PathBuf {
        wiki_root.join(&self.themes_dir).join(&self.theme)
    }

    pub fn content_dir(&self, wiki_root: &Path) -> PathBuf {
        wiki_root.join(&self.source)
    }
}
