//! Category hierarchy resolution.
//!
//! The directory tree under `categories/` doubles as the hierarchy encoding:
//! a category's position is derived from where its source file sits, never
//! from authored metadata. To keep the algorithms testable without a
//! filesystem, the hierarchy is interpreted in two steps: the repository
//! reads documents and attaches their storage paths, then a [`CategoryTree`]
//! is built once per resolution session from those records alone.
//!
//! Slug resolution is two-phase: exact slug match first, then a fallback on
//! the terminal path segment. The fallback is a deliberate tolerance for
//! legacy content whose folder name drifted from its authored slug; hits are
//! logged so drifting conventions stay visible.

use crate::error::Result;
use crate::model::{Category, Prompt};
use crate::repository::ContentRepository;
use saltbroth_locale::Locale;
use std::collections::HashMap;
use std::path::Path;

/// Directory segments locating a category file under the categories root.
///
/// The segments run from the root down to and including the file's containing
/// directory. A file sitting directly at the root has no containing segments;
/// its file stem stands in as the single segment so root categories always
/// have depth 1 regardless of layout.
pub fn resolve_category_path(file_path: &Path, content_root: &Path) -> Vec<String> {
    let relative = file_path.strip_prefix(content_root).unwrap_or(file_path);

    let mut segments: Vec<String> = relative
        .parent()
        .map(|dir| {
            dir.components()
                .filter_map(|c| match c {
                    std::path::Component::Normal(s) => s.to_str().map(String::from),
                    _ => None,
                })
                .collect()
        })
        .unwrap_or_default();

    if segments.is_empty() {
        if let Some(stem) = relative.file_stem().and_then(|s| s.to_str()) {
            segments.push(stem.to_string());
        }
    }

    segments
}

/// One step of a breadcrumb trail.
#[derive(Debug, Clone, PartialEq)]
pub enum Breadcrumb {
    /// An ancestor (or the requested) category.
    Category(Category),
    /// The requested prompt, always the terminal step when present.
    Prompt(Prompt),
}

impl Breadcrumb {
    /// Display label for the step.
    pub fn label(&self) -> &str {
        match self {
            Breadcrumb::Category(c) => &c.name,
            Breadcrumb::Prompt(p) => &p.title,
        }
    }

    /// Slug of the step.
    pub fn slug(&self) -> &str {
        match self {
            Breadcrumb::Category(c) => &c.slug,
            Breadcrumb::Prompt(p) => &p.slug,
        }
    }
}

/// In-memory view of one locale's category hierarchy.
///
/// Nodes are held in an arena in enumeration order with slug and
/// path-terminal indexes on top; "first enumerated wins" on duplicates. All
/// operations are pure functions of the node set.
#[derive(Debug, Clone)]
pub struct CategoryTree {
    nodes: Vec<Category>,
    by_slug: HashMap<String, usize>,
    by_terminal: HashMap<String, usize>,
}

impl CategoryTree {
    /// Build a tree from category records.
    pub fn new(categories: Vec<Category>) -> Self {
        let mut by_slug = HashMap::new();
        let mut by_terminal = HashMap::new();

        for (index, category) in categories.iter().enumerate() {
            by_slug.entry(category.slug.clone()).or_insert(index);
            by_terminal
                .entry(category.path_terminal().to_string())
                .or_insert(index);
        }

        Self {
            nodes: categories,
            by_slug,
            by_terminal,
        }
    }

    /// All categories in the tree, in enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.nodes.iter()
    }

    /// Root categories (depth 1).
    pub fn roots(&self) -> Vec<&Category> {
        self.nodes.iter().filter(|c| c.is_root()).collect()
    }

    /// Resolve a category by slug.
    ///
    /// Exact slug match first; when none exists, falls back to matching the
    /// terminal path segment, which tolerates categories whose folder name
    /// differs from the authored slug or duplicates leaf names across
    /// subtrees.
    pub fn get(&self, slug: &str) -> Option<&Category> {
        if let Some(&index) = self.by_slug.get(slug) {
            return Some(&self.nodes[index]);
        }

        self.by_terminal.get(slug).map(|&index| {
            let category = &self.nodes[index];
            tracing::debug!(
                "category '{}' resolved via path-terminal fallback (authored slug '{}')",
                slug,
                category.slug
            );
            category
        })
    }

    /// Ordered ancestor chain from root to the requested category, inclusive.
    ///
    /// Walks `parent_slug` upward. A parent that does not resolve truncates
    /// the chain silently at that point: broken hierarchies degrade instead
    /// of failing. `saltbroth-doctor` reports what this hides.
    pub fn breadcrumbs(&self, slug: &str) -> Vec<&Category> {
        let Some(start) = self.get(slug) else {
            return Vec::new();
        };

        let mut chain = vec![start];
        let mut current = start;

        while let Some(parent_slug) = current.parent_slug.as_deref() {
            // A slug cycle would otherwise walk forever
            if chain.len() > self.nodes.len() {
                tracing::warn!("cycle detected resolving ancestors of '{}'", slug);
                break;
            }
            match self.get(parent_slug) {
                Some(parent) => {
                    chain.insert(0, parent);
                    current = parent;
                }
                None => {
                    tracing::debug!(
                        "parent '{}' of category '{}' does not resolve, truncating chain",
                        parent_slug,
                        current.slug
                    );
                    break;
                }
            }
        }

        chain
    }

    /// Direct children of a category: exactly one level deeper with the
    /// parent's path as prefix. Grandchildren are excluded.
    pub fn children(&self, slug: &str) -> Vec<&Category> {
        let Some(parent) = self.get(slug) else {
            return Vec::new();
        };

        self.nodes
            .iter()
            .filter(|c| {
                c.path.len() == parent.path.len() + 1 && c.path[..parent.path.len()] == parent.path
            })
            .collect()
    }
}

impl ContentRepository {
    /// Build the category tree for a locale.
    pub fn category_tree(&self, locale: Locale) -> Result<CategoryTree> {
        Ok(CategoryTree::new(self.categories(locale)?))
    }

    /// Hierarchy-aware category lookup (exact slug, then path-terminal).
    pub fn resolve_category(&self, locale: Locale, slug: &str) -> Result<Option<Category>> {
        Ok(self.category_tree(locale)?.get(slug).cloned())
    }

    /// Direct subcategories of a category.
    pub fn subcategories(&self, locale: Locale, slug: &str) -> Result<Vec<Category>> {
        Ok(self
            .category_tree(locale)?
            .children(slug)
            .into_iter()
            .cloned()
            .collect())
    }

    /// Breadcrumb chain for a category, root ancestor first.
    pub fn category_breadcrumbs(&self, locale: Locale, slug: &str) -> Result<Vec<Category>> {
        Ok(self
            .category_tree(locale)?
            .breadcrumbs(slug)
            .into_iter()
            .cloned()
            .collect())
    }

    /// Breadcrumb trail for a prompt: its category's ancestor chain with the
    /// prompt appended as the terminal step.
    ///
    /// Returns an empty trail when the prompt does not exist or its
    /// `category_slug` resolves to no category; the caller treats that as a
    /// recoverable "no trail" condition, not an error.
    pub fn prompt_breadcrumbs(&self, locale: Locale, prompt_slug: &str) -> Result<Vec<Breadcrumb>> {
        let Some(prompt) = self.prompt_by_slug(locale, prompt_slug)? else {
            return Ok(Vec::new());
        };

        let tree = self.category_tree(locale)?;
        if tree.get(&prompt.category_slug).is_none() {
            tracing::debug!(
                "prompt '{}' references unknown category '{}', no breadcrumb trail",
                prompt.slug,
                prompt.category_slug
            );
            return Ok(Vec::new());
        }

        let mut trail: Vec<Breadcrumb> = tree
            .breadcrumbs(&prompt.category_slug)
            .into_iter()
            .cloned()
            .map(Breadcrumb::Category)
            .collect();
        trail.push(Breadcrumb::Prompt(prompt));

        Ok(trail)
    }
}
