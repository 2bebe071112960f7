use std::path::Path;
use std::sync::Arc;

use parking_lot::Mutex;
use tera::Tera;

use crate::{Error, Result};

use super::TemplateName;

/// Template engine wrapper. Loads every `*.html` asset under the theme's
/// template root once, at construction; a bad root fails here, before any
/// page is rendered. Autoescaping is off: `page.content` is already HTML.
#[derive(Debug)]
pub struct TeraRenderer {
    renderer: Arc<Mutex<Tera>>,
}

impl TeraRenderer {
    pub fn new<P: AsRef<Path>>(template_root: P) -> Result<Self> {
        let template_root = template_root.as_ref();

        if !template_root.is_dir() {
            return Err(Error::TemplateLoad {
                template_root: template_root.to_path_buf(),
                reason: String::from("template root is not a directory"),
            });
        }

        let glob = template_root.join("**").join("*.html");
        let mut tera =
            Tera::new(glob.display().to_string().as_str()).map_err(|e| Error::TemplateLoad {
                template_root: template_root.to_path_buf(),
                reason: e.to_string(),
            })?;
        tera.autoescape_on(Vec::new());

        Ok(Self {
            renderer: Arc::new(Mutex::new(tera)),
        })
    }

    pub fn render(&self, name: &TemplateName, context: &tera::Context) -> Result<String> {
        let renderer = self.renderer.lock();
        renderer
            .render(name.as_ref(), context)
            .map_err(|e| match e.kind {
                tera::ErrorKind::TemplateNotFound(_) => Error::TemplateNotFound {
                    name: name.clone(),
                },
                _ => Error::TemplateRender {
                    name: name.clone(),
                    source: e,
                },
            })
    }

    pub fn has_template(&self, name: &TemplateName) -> bool {
        let renderer = self.renderer.lock();
        let found = renderer.get_template_names().any(|t| t == name.as_str());
        found
    }

    pub fn template_names(&self) -> Vec<String> {
        let renderer = self.renderer.lock();
        renderer
            .get_template_names()
            .map(ToString::to_string)
            .collect()
    }
}
