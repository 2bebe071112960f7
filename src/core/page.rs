pub mod frontmatter;
pub mod path;
pub mod render;

use std::ops::Deref;
use std::path::Path;

use serde::Serialize;
use tracing::instrument;

pub use frontmatter::FrontMatter;
pub use path::PagePath;
pub use render::{get_layout, template_vars, RenderedPage};

use crate::{Error, Result};

/// Markdown body of a document, after the metadata block has been split off.
#[derive(Clone, Debug, Serialize, Default)]
pub struct RawMarkdown(String);

impl RawMarkdown {
    pub fn from_raw<S: Into<String>>(raw: S) -> Self {
        Self(raw.into())
    }
}

impl AsRef<str> for RawMarkdown {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl Deref for RawMarkdown {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.0.as_str()
    }
}

/// One parsed source document: where it lives under the content root, its
/// validated metadata, and the Markdown left after the metadata block.
#[derive(Clone, Debug, Serialize)]
pub struct Page {
    pub path: PagePath,
    pub frontmatter: FrontMatter,
    pub raw_markdown: RawMarkdown,
}

impl Page {
    #[instrument]
    pub fn from_file(content_root: &Path, file_path: &Path) -> Result<Self> {
        let raw_doc = std::fs::read_to_string(file_path).map_err(|e| Error::Io {
            path: file_path.to_path_buf(),
            source: e,
        })?;
        Self::from_raw_doc(content_root, file_path, &raw_doc)
    }

    pub fn from_reader<R>(content_root: &Path, file_path: &Path, reader: &mut R) -> Result<Self>
    where
        R: std::io::Read,
    {
        let mut raw_doc = String::new();
        reader.read_to_string(&mut raw_doc).map_err(|e| Error::Io {
            path: file_path.to_path_buf(),
            source: e,
        })?;
        Self::from_raw_doc(content_root, file_path, &raw_doc)
    }

    fn from_raw_doc(content_root: &Path, file_path: &Path, raw_doc: &str) -> Result<Self> {
        let path = PagePath::resolve(content_root, file_path)?;
        let (frontmatter, raw_markdown) = FrontMatter::from_raw_doc(raw_doc, file_path)?;
        Ok(Self {
            path,
            frontmatter,
            raw_markdown,
        })
    }
}

#[cfg(test)]
mod test {
    #![allow(warnings, unused)]

    use std::io::Cursor;
    use std::path::Path;

    use super::*;
    use crate::Error;

    const DOC: &str = "---\ntitle: \"Foo Page\"\n---\nbody text";

    #[test]
    fn from_reader_builds_page() {
        let mut reader = Cursor::new(DOC);
        let page = Page::from_reader(
            Path::new("content"),
            Path::new("content/notes/foo.md"),
            &mut reader,
        )
        .unwrap();

        assert_eq!(page.path.category(), "notes");
        assert_eq!(page.path.filename(), "foo.html");
        assert_eq!(page.frontmatter.title, "Foo Page");
        assert_eq!(page.raw_markdown.as_ref(), "body text");
    }

    #[test]
    fn from_file_err_on_missing_source() {
        let err = Page::from_file(Path::new("content"), Path::new("content/missing.md"))
            .unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }

    #[test]
    fn from_reader_err_on_source_outside_content_root() {
        let mut reader = Cursor::new(DOC);
        let err = Page::from_reader(
            Path::new("content"),
            Path::new("elsewhere/foo.md"),
            &mut reader,
        )
        .unwrap_err();
        assert!(matches!(err, Error::Path { .. }));
    }
}
