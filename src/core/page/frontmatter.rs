use std::collections::BTreeMap;
use std::path::Path;

use chrono::Local;
use serde::Serialize;
use serde_yaml::Value;

use crate::core::page::RawMarkdown;
use crate::util::static_regex;
use crate::{Error, Result};

pub const DEFAULT_LAYOUT: &str = "page";
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Validated metadata header of a document. `title` is required; `layout`
/// and `date` are filled with defaults when the header omits them. Keys
/// outside the typed set are carried in `meta` and flow through to the
/// template variables untouched.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct FrontMatter {
    pub title: String,
    pub layout: String,
    pub date: String,

    #[serde(flatten)]
    pub meta: BTreeMap<String, Value>,
}

impl FrontMatter {
    /// Splits a raw document into its metadata block and Markdown body, then
    /// decodes and validates the block. The metadata block is a YAML mapping
    /// between `---` delimiter lines; syntax is checked before any field
    /// validation, so a block that is both malformed and incomplete reports
    /// `MetadataSyntax`.
    pub fn from_raw_doc(raw_doc: &str, src: &Path) -> Result<(Self, RawMarkdown)> {
        let (raw_frontmatter, raw_markdown) = split_document(raw_doc, src)?;
        let frontmatter = Self::from_yaml(raw_frontmatter, src)?;
        Ok((frontmatter, RawMarkdown::from_raw(raw_markdown)))
    }

    fn from_yaml(raw: &str, src: &Path) -> Result<Self> {
        let value: Value = serde_yaml::from_str(raw).map_err(|e| Error::MetadataSyntax {
            path: src.to_path_buf(),
            reason: e.to_string(),
        })?;

        let mapping = match value {
            Value::Mapping(mapping) => mapping,
            other => {
                return Err(Error::MetadataSyntax {
                    path: src.to_path_buf(),
                    reason: format!("expected a key/value mapping, found {}", value_kind(&other)),
                })
            }
        };

        let mut title = None;
        let mut layout = None;
        let mut date = None;
        let mut meta = BTreeMap::new();

        for (key, value) in mapping {
            let key = match key {
                Value::String(key) => key,
                other => {
                    return Err(Error::MetadataSyntax {
                        path: src.to_path_buf(),
                        reason: format!("metadata keys must be strings, found {}", value_kind(&other)),
                    })
                }
            };
            match key.as_str() {
                "title" => title = Some(value),
                "layout" => layout = Some(value),
                "date" => date = Some(value),
                _ => {
                    meta.insert(key, value);
                }
            }
        }

        let title = match title {
            Some(value) => {
                let title = scalar_text("title", value, src)?;
                if title.is_empty() {
                    return Err(Error::MetadataValidation {
                        path: src.to_path_buf(),
                        field: "title",
                        reason: String::from("may not be empty"),
                    });
                }
                title
            }
            None => {
                return Err(Error::MetadataValidation {
                    path: src.to_path_buf(),
                    field: "title",
                    reason: String::from("is required"),
                })
            }
        };

        let layout = match layout {
            Some(Value::Null) | None => String::from(DEFAULT_LAYOUT),
            Some(value) => {
                let layout = scalar_text("layout", value, src)?;
                if layout.is_empty() {
                    String::from(DEFAULT_LAYOUT)
                } else {
                    layout
                }
            }
        };

        let date = match date {
            Some(Value::Null) | None => Local::now().format(DATE_FORMAT).to_string(),
            Some(value) => scalar_text("date", value, src)?,
        };

        Ok(Self {
            title,
            layout,
            date,
            meta,
        })
    }
}

/// Metadata fields are a restricted YAML subset: scalar values only.
fn scalar_text(field: &'static str, value: Value, src: &Path) -> Result<String> {
    match value {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(Error::MetadataValidation {
            path: src.to_path_buf(),
            field,
            reason: format!("must be scalar text, found {}", value_kind(&other)),
        }),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}

fn split_document<'a>(raw: &'a str, src: &Path) -> Result<(&'a str, &'a str)> {
    let re = static_regex!(
        r"^[[:space:]]*---[[:space:]]*\n((?s).*?)\n[[:space:]]*---[[:space:]]*\n?((?s).*)"
    );
    match re.captures(raw) {
        Some(captures) => {
            let frontmatter = captures
                .get(1)
                .map(|m| m.as_str())
                .ok_or_else(|| Error::MetadataSyntax {
                    path: src.to_path_buf(),
                    reason: String::from("unable to read metadata block"),
                })?;

            let markdown = captures
                .get(2)
                .map(|m| m.as_str())
                .ok_or_else(|| Error::MetadataSyntax {
                    path: src.to_path_buf(),
                    reason: String::from("unable to read document body"),
                })?;
            Ok((frontmatter, markdown))
        }
        None => Err(Error::MetadataSyntax {
            path: src.to_path_buf(),
            reason: String::from("no metadata block delimited by '---' lines"),
        }),
    }
}
