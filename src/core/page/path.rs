use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};

use serde::Serialize;

use crate::{Error, Result};

pub const OUTPUT_EXT: &str = "html";
pub const CATEGORY_SEPARATOR: &str = "/";

/// Where a page lives in the wiki: its category (relative directory path
/// under the content root, `/`-joined) and its output filename (source
/// basename with the extension swapped to `.html`). Path segments keep their
/// exact Unicode content; nothing is normalized or transliterated.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct PagePath {
    category: String,
    filename: String,
}

impl PagePath {
    pub fn resolve<R, P>(content_root: R, source_path: P) -> Result<Self>
    where
        R: AsRef<Path>,
        P: AsRef<Path>,
    {
        let content_root = content_root.as_ref();
        let source_path = source_path.as_ref();

        let path_err = || Error::Path {
            source_path: source_path.to_path_buf(),
            content_root: content_root.to_path_buf(),
        };

        let relative = source_path
            .strip_prefix(content_root)
            .map_err(|_| path_err())?;

        let file_name = relative.file_name().ok_or_else(path_err)?;

        let mut segments = Vec::new();
        if let Some(parent) = relative.parent() {
            for component in parent.components() {
                match component {
                    Component::Normal(segment) => segments.push(utf8(segment, &path_err)?),
                    Component::CurDir => {}
                    // `..` and root/prefix components escape the content tree
                    _ => return Err(path_err()),
                }
            }
        }

        let filename = {
            let with_ext = Path::new(file_name).with_extension(OUTPUT_EXT);
            utf8(with_ext.as_os_str(), &path_err)?
        };

        Ok(Self {
            category: segments.join(CATEGORY_SEPARATOR),
            filename,
        })
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Relative output location for the external writer: the category
    /// directories followed by the `.html` filename.
    pub fn target(&self) -> PathBuf {
        let mut target: PathBuf = self
            .category
            .split(CATEGORY_SEPARATOR)
            .filter(|segment| !segment.is_empty())
            .collect();
        target.push(&self.filename);
        target
    }
}

fn utf8<F>(segment: &OsStr, path_err: &F) -> Result<String>
where
    F: Fn() -> Error,
{
    segment
        .to_str()
        .map(ToOwned::to_owned)
        .ok_or_else(path_err)
}
