//! Content repository: typed accessors over the document store.
//!
//! Every accessor re-derives its result from the source documents, so the
//! repository carries no mutable state and repeated calls with identical
//! inputs yield equal results. Callers that want memoization own it
//! themselves; request-scoped purity is the contract here.
//!
//! Lookups are O(n) per call by design: the store holds hundreds of
//! documents, not millions.

use crate::error::Result;
use crate::hierarchy::resolve_category_path;
use crate::model::{Category, ContentRecord, Llm, Prompt};
use crate::store::{ContentKind, DocumentStore, RawDocument};
use saltbroth_locale::Locale;
use std::path::PathBuf;

/// Typed, per-request view over a [`DocumentStore`].
#[derive(Debug, Clone)]
pub struct ContentRepository {
    store: DocumentStore,
}

impl ContentRepository {
    /// Create a repository over an existing store.
    pub fn new(store: DocumentStore) -> Self {
        Self { store }
    }

    /// Create a repository over a content root directory.
    pub fn open(root: impl Into<PathBuf>) -> Self {
        Self::new(DocumentStore::new(root))
    }

    /// The underlying document store.
    pub fn store(&self) -> &DocumentStore {
        &self.store
    }

    fn collect<T>(
        &self,
        locale: Locale,
        kind: ContentKind,
        build: impl Fn(&RawDocument) -> Result<T>,
    ) -> Result<Vec<T>> {
        let mut records = Vec::new();
        for raw in self.store.list(locale, kind)? {
            match build(&raw) {
                Ok(record) => records.push(record),
                // One bad document must not hide its siblings
                Err(e) => tracing::warn!("skipping document: {}", e),
            }
        }
        Ok(records)
    }

    /// All categories for a locale, in enumeration order.
    pub fn categories(&self, locale: Locale) -> Result<Vec<Category>> {
        let root = self.store.kind_dir(locale, ContentKind::Categories);
        self.collect(locale, ContentKind::Categories, |raw| {
            let path = resolve_category_path(&raw.path, &root);
            Category::from_raw(raw, locale, path)
        })
    }

    /// All prompts for a locale, in enumeration order.
    pub fn prompts(&self, locale: Locale) -> Result<Vec<Prompt>> {
        self.collect(locale, ContentKind::Prompts, |raw| Prompt::from_raw(raw, locale))
    }

    /// All LLM records for a locale, in enumeration order.
    pub fn llms(&self, locale: Locale) -> Result<Vec<Llm>> {
        self.collect(locale, ContentKind::Llms, |raw| Llm::from_raw(raw, locale))
    }

    /// Category with an exact slug match; first enumerated wins on duplicates.
    ///
    /// This is the plain repository lookup. Hierarchy-aware resolution with
    /// the path-terminal fallback lives on [`crate::CategoryTree`].
    pub fn category_by_slug(&self, locale: Locale, slug: &str) -> Result<Option<Category>> {
        Ok(self.categories(locale)?.into_iter().find(|c| c.slug == slug))
    }

    /// Prompt with an exact slug match; first enumerated wins on duplicates.
    pub fn prompt_by_slug(&self, locale: Locale, slug: &str) -> Result<Option<Prompt>> {
        Ok(self.prompts(locale)?.into_iter().find(|p| p.slug == slug))
    }

    /// LLM record with an exact slug match; first enumerated wins on duplicates.
    pub fn llm_by_slug(&self, locale: Locale, slug: &str) -> Result<Option<Llm>> {
        Ok(self.llms(locale)?.into_iter().find(|l| l.slug == slug))
    }

    /// Kind-generic exact-slug lookup.
    ///
    /// For callers that dispatch on [`ContentKind`] at runtime (the
    /// localization validator, generic page routing). Statically-typed
    /// callers should prefer the per-kind accessors.
    pub fn content_by_slug(
        &self,
        locale: Locale,
        kind: ContentKind,
        slug: &str,
    ) -> Result<Option<ContentRecord>> {
        Ok(match kind {
            ContentKind::Categories => self
                .category_by_slug(locale, slug)?
                .map(ContentRecord::Category),
            ContentKind::Prompts => self.prompt_by_slug(locale, slug)?.map(ContentRecord::Prompt),
            ContentKind::Llms => self.llm_by_slug(locale, slug)?.map(ContentRecord::Llm),
        })
    }

    /// Prompts filed under exactly this category.
    ///
    /// No subtree inclusion: a prompt filed under a parent category is not
    /// returned when querying one of its children, and vice versa.
    pub fn prompts_by_category(
        &self,
        locale: Locale,
        category_slug: &str,
    ) -> Result<Vec<Prompt>> {
        Ok(self
            .prompts(locale)?
            .into_iter()
            .filter(|p| p.category_slug == category_slug)
            .collect())
    }

    /// Prompts declaring compatibility with the given LLM.
    pub fn prompts_by_compatible_llm(
        &self,
        locale: Locale,
        llm_slug: &str,
    ) -> Result<Vec<Prompt>> {
        Ok(self
            .prompts(locale)?
            .into_iter()
            .filter(|p| p.compatible_llms.iter().any(|s| s == llm_slug))
            .collect())
    }
}
