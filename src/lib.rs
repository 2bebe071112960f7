#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

pub mod core;
pub mod error;
pub mod render;
pub mod util;

pub use crate::core::{Page, PageGenerator, SiteConfig};
pub use error::Error;
pub use render::Renderers;

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
pub(crate) mod test {
    use tempfile::TempDir;
    use temptree::temptree;

    use crate::core::config::SiteConfig;

    /// Minimal wiki tree matching the default config: empty content
    /// directory plus a `simple` theme with a single `page` template.
    pub fn simple_wiki_tree() -> TempDir {
        temptree! {
            content: {},
            themes: {
                simple: {
                    "page.html": "<article>{{ page.content }}</article>",
                }
            },
        }
    }

    pub fn simple_config() -> SiteConfig {
        SiteConfig {
            title: String::from("My Wiki"),
            ..SiteConfig::default()
        }
    }
}
