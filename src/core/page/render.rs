use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::trace;

use crate::core::config::SiteConfig;
use crate::core::page::frontmatter::DEFAULT_LAYOUT;
use crate::core::page::{FrontMatter, PagePath};

/// Effective layout name for a page: the front matter's `layout` when
/// non-empty, the site default otherwise. Parsing already applies the same
/// default, so resolution is idempotent.
pub fn get_layout(frontmatter: &FrontMatter) -> &str {
    if frontmatter.layout.is_empty() {
        DEFAULT_LAYOUT
    } else {
        frontmatter.layout.as_str()
    }
}

#[derive(Debug, Serialize)]
struct PageVars<'a> {
    category: &'a str,
    filename: &'a str,
    content: &'a str,

    #[serde(flatten)]
    frontmatter: &'a FrontMatter,
}

/// Merges page data with the site-wide configuration into the variable set
/// the template engine consumes: a `page` sub-map (path info, rendered
/// content, metadata incl. passthrough keys) and a `site` sub-map built from
/// a copy of the shared config. The copy gets the page-scope adjustment
/// (trailing `/` stripped from `root`, so templates can write
/// `{{ site.root }}/...`); the shared config itself is never touched.
pub fn template_vars(
    frontmatter: &FrontMatter,
    content: &str,
    path: &PagePath,
    site: &SiteConfig,
) -> tera::Context {
    trace!("building template variables");

    let mut ctx = tera::Context::new();
    ctx.insert(
        "page",
        &PageVars {
            category: path.category(),
            filename: path.filename(),
            content,
            frontmatter,
        },
    );
    ctx.insert("site", &site_vars(site));
    ctx
}

fn site_vars(site: &SiteConfig) -> SiteConfig {
    let mut site = site.clone();
    if site.root.ends_with('/') {
        site.root.pop();
    }
    site
}

/// Final HTML for one page, together with the relative output location the
/// external writer should place it at.
#[derive(Debug)]
pub struct RenderedPage {
    html: String,
    target: PathBuf,
}

impl RenderedPage {
    pub fn new<S: Into<String>>(html: S, path: &PagePath) -> Self {
        Self {
            html: html.into(),
            target: path.target(),
        }
    }

    pub fn html(&self) -> &str {
        &self.html
    }

    pub fn into_html(self) -> String {
        self.html
    }

    pub fn target(&self) -> &Path {
        &self.target
    }
}

#[cfg(test)]
mod test {
    #![allow(warnings, unused)]

    use std::collections::BTreeMap;
    use std::path::Path;

    use super::*;
    use crate::core::page::FrontMatter;

    fn frontmatter() -> FrontMatter {
        FrontMatter {
            title: String::from("Foo Page 2"),
            layout: String::from("page"),
            date: String::from("2013-10-17 00:03"),
            meta: BTreeMap::new(),
        }
    }

    fn page_path() -> PagePath {
        PagePath::resolve("content", "content/foo目录/foo_page_中文.md").unwrap()
    }

    #[test]
    fn page_vars_carry_path_content_and_metadata() {
        let vars = template_vars(
            &frontmatter(),
            "<p>Simiki is a simple wiki framework, written in Python.</p>",
            &page_path(),
            &SiteConfig::default(),
        );

        let page = vars.get("page").expect("page vars missing");
        assert_eq!(page["category"], "foo\u{76ee}\u{5f55}");
        assert_eq!(page["filename"], "foo_page_\u{4e2d}\u{6587}.html");
        assert_eq!(
            page["content"],
            "<p>Simiki is a simple wiki framework, written in Python.</p>"
        );
        assert_eq!(page["title"], "Foo Page 2");
        assert_eq!(page["layout"], "page");
        assert_eq!(page["date"], "2013-10-17 00:03");
    }

    #[test]
    fn passthrough_metadata_reaches_page_vars() {
        let mut fm = frontmatter();
        fm.meta.insert(
            String::from("tags"),
            serde_yaml::Value::String(String::from("wiki")),
        );

        let vars = template_vars(&fm, "", &page_path(), &SiteConfig::default());

        let page = vars.get("page").expect("page vars missing");
        assert_eq!(page["tags"], "wiki");
    }

    #[test]
    fn site_root_is_stripped_on_the_copy_only() {
        let site = SiteConfig::default();

        let vars_a = template_vars(&frontmatter(), "a", &page_path(), &site);
        let vars_b = template_vars(&frontmatter(), "b", &page_path(), &site);

        for vars in [&vars_a, &vars_b] {
            let rendered_site = vars.get("site").expect("site vars missing");
            assert_eq!(rendered_site["root"], "");
        }

        // the shared config is untouched after both builds
        assert_eq!(site.root, "/");
        assert_eq!(site, SiteConfig::default());
    }

    #[test]
    fn non_default_root_keeps_its_value() {
        let site = SiteConfig {
            root: String::from("/wiki/"),
            ..SiteConfig::default()
        };

        let vars = template_vars(&frontmatter(), "", &page_path(), &site);

        let rendered_site = vars.get("site").expect("site vars missing");
        assert_eq!(rendered_site["root"], "/wiki");
        assert_eq!(site.root, "/wiki/");
    }

    #[test]
    fn get_layout_is_idempotent() {
        let fm = frontmatter();
        assert_eq!(get_layout(&fm), "page");
        assert_eq!(get_layout(&fm), "page");

        let mut fm = frontmatter();
        fm.layout = String::new();
        assert_eq!(get_layout(&fm), "page");

        let mut fm = frontmatter();
        fm.layout = String::from("post");
        assert_eq!(get_layout(&fm), "post");
    }

    #[test]
    fn rendered_page_tracks_output_target() {
        let page = RenderedPage::new("<html></html>", &page_path());
        assert_eq!(page.html(), "<html></html>");
        assert_eq!(
            page.target(),
            Path::new("foo\u{76ee}\u{5f55}/foo_page_\u{4e2d}\u{6587}.html")
        );
    }
}
