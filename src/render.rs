use std::path::Path;

use crate::Result;

pub mod markup;
pub mod template;

pub use markup::MarkdownRenderer;
pub use template::TeraRenderer;

/// The conversion machinery shared by every page in a run: the template
/// engine (loaded once from the theme directory) and the Markdown converter.
#[derive(Debug)]
pub struct Renderers {
    tera: template::TeraRenderer,
    markdown: markup::MarkdownRenderer,
}

impl Renderers {
    pub fn new<P: AsRef<Path>>(template_root: P) -> Result<Self> {
        let tera = template::TeraRenderer::new(template_root)?;
        let markdown = markup::MarkdownRenderer::new();
        Ok(Self { tera, markdown })
    }

    pub fn tera(&self) -> &template::TeraRenderer {
        &self.tera
    }

    pub fn markdown(&self) -> &markup::MarkdownRenderer {
        &self.markdown
    }
}
