use std::path::PathBuf;

use thiserror::Error;

use crate::render::template::TemplateName;

/// Failure classes for single-page generation. Every variant aborts the page
/// it occurred on and carries enough context to report to a user; nothing is
/// retried or recovered inside the crate.
#[derive(Debug, Error)]
pub enum Error {
    #[error("source file '{}' is not under content root '{}'", source_path.display(), content_root.display())]
    Path {
        source_path: PathBuf,
        content_root: PathBuf,
    },

    #[error("malformed metadata block in '{}': {reason}", path.display())]
    MetadataSyntax { path: PathBuf, reason: String },

    #[error("invalid metadata in '{}': field '{field}' {reason}", path.display())]
    MetadataValidation {
        path: PathBuf,
        field: &'static str,
        reason: String,
    },

    #[error("malformed site config '{}'", path.display())]
    ConfigSyntax {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("failed loading templates from '{}': {reason}", template_root.display())]
    TemplateLoad {
        template_root: PathBuf,
        reason: String,
    },

    #[error("no template found for layout '{name}'")]
    TemplateNotFound { name: TemplateName },

    #[error("failed rendering template '{name}'")]
    TemplateRender {
        name: TemplateName,
        #[source]
        source: tera::Error,
    },

    #[error("failed reading '{}'", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
