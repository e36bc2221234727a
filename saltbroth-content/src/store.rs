//! Document store reader.
//!
//! Content lives on disk as one structured document per resource, laid out as
//! `<root>/<locale>/<kind>/**/*.mdx` (plain `.md` is accepted too). Nested
//! directories under the `categories` kind encode the category hierarchy; the
//! reader itself does not interpret them, it only reports paths.
//!
//! # Error handling
//!
//! Individual document failures never abort a listing. A file that cannot be
//! read, exceeds the size limit, or carries unparseable front-matter is
//! logged with `tracing` and skipped, preserving partial availability. A
//! missing locale/kind directory is a normal condition and yields an empty
//! listing.

use crate::error::Result;
use crate::frontmatter::parse_frontmatter;
use saltbroth_locale::Locale;
use serde_json::Value;
use std::fmt;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Maximum document size to load (10MB).
const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Document file extensions recognized by the reader.
const DOC_EXTENSIONS: &[&str] = &["mdx", "md"];

/// The three content kinds the store serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ContentKind {
    /// Category documents; directory nesting encodes the hierarchy.
    Categories,
    /// Prompt documents.
    Prompts,
    /// Model-compatibility documents.
    Llms,
}

impl ContentKind {
    /// All content kinds, in stable order.
    pub const ALL: &'static [ContentKind] =
        &[ContentKind::Categories, ContentKind::Prompts, ContentKind::Llms];

    /// Directory name for this kind under a locale root.
    pub fn dir_name(&self) -> &'static str {
        match self {
            ContentKind::Categories => "categories",
            ContentKind::Prompts => "prompts",
            ContentKind::Llms => "llms",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

/// A document as read from disk, before typed interpretation.
#[derive(Debug, Clone)]
pub struct RawDocument {
    /// Full path to the source file.
    pub path: PathBuf,
    /// Path relative to the locale/kind directory the file was found under.
    pub relative_path: PathBuf,
    /// Parsed front-matter metadata (None if the document has none).
    pub metadata: Option<Value>,
    /// Document body after front-matter removal.
    pub body: String,
}

impl RawDocument {
    /// File name without its extension; the default slug for documents whose
    /// front-matter does not declare one.
    pub fn file_stem(&self) -> &str {
        self.path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
    }
}

/// Read-only view over a content root directory.
///
/// The store is a build-time artifact, not a live database: every call walks
/// the tree fresh, and there is no shared mutable state, so concurrent reads
/// need no coordination.
#[derive(Debug, Clone)]
pub struct DocumentStore {
    root: PathBuf,
}

impl DocumentStore {
    /// Create a store over the given content root.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The content root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding documents of `kind` for `locale`.
    pub fn kind_dir(&self, locale: Locale, kind: ContentKind) -> PathBuf {
        self.root.join(locale.as_str()).join(kind.dir_name())
    }

    /// Enumerate all documents of `kind` for `locale`.
    ///
    /// Results are sorted by relative path so that enumeration order, and
    /// therefore "first match wins" slug resolution, is deterministic across
    /// platforms. A missing directory yields an empty list.
    pub fn list(&self, locale: Locale, kind: ContentKind) -> Result<Vec<RawDocument>> {
        let dir = self.kind_dir(locale, kind);
        if !dir.exists() {
            tracing::debug!("content directory '{}' does not exist", dir.display());
            return Ok(Vec::new());
        }

        let mut documents = Vec::new();

        let files = WalkDir::new(&dir)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .filter(|entry| {
                entry
                    .path()
                    .extension()
                    .and_then(|s| s.to_str())
                    .is_some_and(|ext| DOC_EXTENSIONS.contains(&ext))
            });

        for entry in files {
            let path = entry.path();

            match std::fs::metadata(path) {
                Ok(meta) if meta.len() > MAX_FILE_SIZE => {
                    tracing::warn!(
                        "skipping '{}': size {} bytes exceeds limit of {} bytes",
                        path.display(),
                        meta.len(),
                        MAX_FILE_SIZE
                    );
                    continue;
                }
                Ok(_) => {}
                Err(e) => {
                    tracing::warn!("failed to stat '{}': {}", path.display(), e);
                    continue;
                }
            }

            let content = match std::fs::read_to_string(path) {
                Ok(content) => content,
                Err(e) => {
                    tracing::warn!("failed to read '{}': {}", path.display(), e);
                    continue;
                }
            };

            let parsed = match parse_frontmatter(&content) {
                Ok(parsed) => parsed,
                Err(e) => {
                    tracing::warn!("skipping '{}': {}", path.display(), e);
                    continue;
                }
            };

            let relative_path = path.strip_prefix(&dir).unwrap_or(path).to_path_buf();

            documents.push(RawDocument {
                path: path.to_path_buf(),
                relative_path,
                metadata: parsed.metadata,
                body: parsed.body,
            });
        }

        documents.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));

        Ok(documents)
    }
}
