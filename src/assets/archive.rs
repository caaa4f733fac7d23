use std::{
    collections::HashMap,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use anyhow::Context;
use async_trait::async_trait;

use crate::foundation::error::{SketchError, SketchResult};

/// Read access to the named entries of a document archive.
///
/// Both reads are fallible and asynchronous; a missing entry must surface as
/// [`crate::AssetResolutionError::EntryNotFound`].
#[async_trait]
pub trait Archive: Send + Sync {
    /// Raw bytes of an entry.
    async fn read_binary(&self, name: &str) -> SketchResult<Vec<u8>>;

    /// UTF-8 text of an entry.
    async fn read_text(&self, name: &str) -> SketchResult<String> {
        let bytes = self.read_binary(name).await?;
        let text = String::from_utf8(bytes)
            .with_context(|| format!("archive entry \"{name}\" is not UTF-8"))?;
        Ok(text)
    }
}

/// Archive held entirely in memory.
#[derive(Clone, Debug, Default)]
pub struct MemoryArchive {
    entries: HashMap<String, Vec<u8>>,
}

impl MemoryArchive {
    /// Empty archive.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace an entry.
    pub fn insert(&mut self, name: impl Into<String>, bytes: impl Into<Vec<u8>>) {
        self.entries.insert(name.into(), bytes.into());
    }

    /// Builder form of [`MemoryArchive::insert`].
    pub fn with_entry(mut self, name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        self.insert(name, bytes);
        self
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the archive has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl Archive for MemoryArchive {
    async fn read_binary(&self, name: &str) -> SketchResult<Vec<u8>> {
        self.entries
            .get(name)
            .cloned()
            .ok_or_else(|| SketchError::entry_not_found(name))
    }
}

/// Archive already extracted into a directory on disk.
#[derive(Clone, Debug)]
pub struct DirArchive {
    root: PathBuf,
}

impl DirArchive {
    /// Archive rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory entries are read from.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[async_trait]
impl Archive for DirArchive {
    #[tracing::instrument(level = "debug", skip(self), fields(root = %self.root.display()))]
    async fn read_binary(&self, name: &str) -> SketchResult<Vec<u8>> {
        let norm = normalize_entry_name(name)?;
        let path = self.root.join(&norm);
        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(SketchError::entry_not_found(norm)),
            Err(e) => Err(anyhow::Error::new(e)
                .context(format!("read archive entry {}", path.display()))
                .into()),
        }
    }
}

/// Normalize an archive entry name to a clean relative `a/b/c` form.
///
/// Backslashes become slashes, empty and `.` segments are dropped, and absolute names or
/// `..` segments are rejected so entries cannot escape the archive root.
pub fn normalize_entry_name(name: &str) -> SketchResult<String> {
    let s = name.replace('\\', "/");
    if s.starts_with('/') {
        return Err(SketchError::validation("archive entry names must be relative"));
    }

    let mut out = Vec::<&str>::new();
    for part in s.split('/') {
        if part.is_empty() || part == "." {
            continue;
        }
        if part == ".." {
            return Err(SketchError::validation(
                "archive entry names must not contain '..'",
            ));
        }
        out.push(part);
    }

    if out.is_empty() {
        return Err(SketchError::validation(
            "archive entry name must contain a file name",
        ));
    }
    Ok(out.join("/"))
}

#[cfg(test)]
#[path = "../../tests/unit/assets/archive.rs"]
mod tests;
