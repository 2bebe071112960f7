pub mod tera;

pub use self::tera::TeraRenderer;

use serde::{Deserialize, Serialize};

/// Name of a template asset within the theme directory, e.g. `page.html`.
#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq, Eq, Hash)]
pub struct TemplateName(String);

impl TemplateName {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self(name.into())
    }

    /// Template asset name for a resolved layout: `<layout>.html`.
    pub fn from_layout<S: AsRef<str>>(layout: S) -> Self {
        Self(format!("{}.html", layout.as_ref()))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for TemplateName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl From<String> for TemplateName {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for TemplateName {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl std::fmt::Display for TemplateName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
