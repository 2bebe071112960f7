use std::path::{Path, PathBuf};

use tracing::{instrument, trace};

use crate::core::config::SiteConfig;
use crate::core::page::{self, Page, RenderedPage};
use crate::render::template::TemplateName;
use crate::render::Renderers;
use crate::Result;

/// Turns one source document into one HTML page: resolve its location,
/// parse its metadata, convert its body, merge the variables, render the
/// layout template. Construction validates the theme's template directory,
/// so a generator that exists can render; a `PageGenerator` is shared
/// read-only across pages (and threads) by the batch orchestrator.
#[derive(Debug)]
pub struct PageGenerator {
    config: SiteConfig,
    content_dir: PathBuf,
    renderers: Renderers,
}

impl PageGenerator {
    /// Fails with `TemplateLoad` when `<wiki_root>/<themes_dir>/<theme>` is
    /// missing or unloadable, before any source file is read.
    pub fn new<P: AsRef<Path>>(config: SiteConfig, wiki_root: P) -> Result<Self> {
        let wiki_root = wiki_root.as_ref();
        let template_dir = config.theme_dir(wiki_root);
        let renderers = Renderers::new(template_dir)?;
        let content_dir = config.content_dir(wiki_root);
        Ok(Self {
            config,
            content_dir,
            renderers,
        })
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn content_dir(&self) -> &Path {
        &self.content_dir
    }

    /// Generates the final HTML document for one source file.
    pub fn generate<P: AsRef<Path>>(&self, source_path: P) -> Result<String> {
        self.generate_page(source_path).map(RenderedPage::into_html)
    }

    /// Like [`generate`](Self::generate), but keeps the relative output
    /// location alongside the HTML for the external writer.
    pub fn generate_page<P: AsRef<Path>>(&self, source_path: P) -> Result<RenderedPage> {
        self.generate_inner(source_path.as_ref())
    }

    #[instrument(skip(self), fields(page = %source_path.display()))]
    fn generate_inner(&self, source_path: &Path) -> Result<RenderedPage> {
        let page = Page::from_file(&self.content_dir, source_path)?;

        trace!("converting markdown body");
        let content = self.renderers.markdown().render(&page.raw_markdown);

        trace!("rendering layout template");
        let vars = page::template_vars(&page.frontmatter, &content, &page.path, &self.config);
        let template = TemplateName::from_layout(page::get_layout(&page.frontmatter));
        let html = self.renderers.tera().render(&template, &vars)?;

        Ok(RenderedPage::new(html, &page.path))
    }
}
