//! Typed content records.
//!
//! Each record is built from a [`RawDocument`]: the front-matter supplies the
//! authored fields, the reader supplies `locale`, and the storage location
//! supplies a category's position in the hierarchy. The slug defaults to the
//! file stem when front-matter does not declare one.

use crate::error::{ContentError, Result};
use crate::store::RawDocument;
use saltbroth_locale::Locale;
use serde::Deserialize;
use serde_json::Value;

/// A category in the hierarchy.
///
/// `path` and `parent_slug` are derived purely from where the source file
/// sits on disk; authored front-matter cannot override them.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    /// URL-safe identifier, unique within (locale, kind).
    pub slug: String,
    /// Locale this record was read from.
    pub locale: Locale,
    /// Display name.
    pub name: String,
    /// Short description for listings.
    pub description: String,
    /// Icon identifier for the rendering layer.
    pub icon: String,
    /// Directory segments from the categories root down to this category.
    pub path: Vec<String>,
    /// Terminal segment of the parent directory, absent for root categories.
    pub parent_slug: Option<String>,
    /// Document body after front-matter removal.
    pub body: String,
}

/// A reusable prompt template.
#[derive(Debug, Clone, PartialEq)]
pub struct Prompt {
    /// URL-safe identifier, unique within (locale, kind).
    pub slug: String,
    /// Locale this record was read from.
    pub locale: Locale,
    /// Display title.
    pub title: String,
    /// Short description for listings.
    pub description: String,
    /// Slug of the category this prompt is filed under.
    pub category_slug: String,
    /// Whether the prompt is restricted to paying users.
    pub is_premium: bool,
    /// Icon identifier for the rendering layer.
    pub icon: String,
    /// Slugs of LLM records this prompt works with.
    pub compatible_llms: Vec<String>,
    /// Optional subset of `compatible_llms` to feature prominently.
    pub featured_llms: Option<Vec<String>>,
    /// Document body after front-matter removal.
    pub body: String,
}

/// A model-compatibility record.
#[derive(Debug, Clone, PartialEq)]
pub struct Llm {
    /// URL-safe identifier, unique within (locale, kind).
    pub slug: String,
    /// Locale this record was read from.
    pub locale: Locale,
    /// Display name of the model.
    pub name: String,
    /// Short description for listings.
    pub description: String,
    /// Icon identifier for the rendering layer.
    pub icon: String,
    /// Translation keys describing model capabilities; resolved against a
    /// locale dictionary by the rendering layer, not here.
    pub features: Vec<String>,
    /// Document body after front-matter removal.
    pub body: String,
}

/// A content record of any kind, for callers that dispatch on
/// [`ContentKind`](crate::ContentKind) at runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentRecord {
    /// A category document.
    Category(Category),
    /// A prompt document.
    Prompt(Prompt),
    /// A model-compatibility document.
    Llm(Llm),
}

impl ContentRecord {
    /// Slug of the wrapped record.
    pub fn slug(&self) -> &str {
        match self {
            ContentRecord::Category(c) => &c.slug,
            ContentRecord::Prompt(p) => &p.slug,
            ContentRecord::Llm(l) => &l.slug,
        }
    }

    /// Locale of the wrapped record.
    pub fn locale(&self) -> Locale {
        match self {
            ContentRecord::Category(c) => c.locale,
            ContentRecord::Prompt(p) => p.locale,
            ContentRecord::Llm(l) => l.locale,
        }
    }
}

// Front-matter shells. Unknown keys are ignored, which is also what keeps
// authored `path`/`parent_slug` values from leaking into Category.

#[derive(Debug, Default, Deserialize)]
struct CategoryFrontmatter {
    slug: Option<String>,
    #[serde(default)]
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    icon: String,
}

#[derive(Debug, Default, Deserialize)]
struct PromptFrontmatter {
    slug: Option<String>,
    #[serde(default)]
    title: String,
    #[serde(default)]
    description: String,
    // Legacy documents use `category`, newer ones `category_slug`.
    #[serde(default, alias = "category")]
    category_slug: String,
    #[serde(default, alias = "isPremium")]
    is_premium: bool,
    #[serde(default)]
    icon: String,
    #[serde(default)]
    compatible_llms: Vec<String>,
    featured_llms: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize)]
struct LlmFrontmatter {
    slug: Option<String>,
    #[serde(default)]
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    icon: String,
    #[serde(default)]
    features: Vec<String>,
}

fn deserialize_frontmatter<T: Default + serde::de::DeserializeOwned>(
    raw: &RawDocument,
) -> Result<T> {
    match &raw.metadata {
        Some(value) => serde_json::from_value::<T>(Value::clone(value))
            .map_err(|e| ContentError::metadata(&raw.path, e.to_string())),
        None => Ok(T::default()),
    }
}

impl Category {
    /// Build a category from a raw document and its resolved directory path.
    pub(crate) fn from_raw(raw: &RawDocument, locale: Locale, path: Vec<String>) -> Result<Self> {
        let fm: CategoryFrontmatter = deserialize_frontmatter(raw)?;
        let parent_slug = if path.len() >= 2 {
            Some(path[path.len() - 2].clone())
        } else {
            None
        };

        Ok(Category {
            slug: fm.slug.unwrap_or_else(|| raw.file_stem().to_string()),
            locale,
            name: fm.name,
            description: fm.description,
            icon: fm.icon,
            path,
            parent_slug,
            body: raw.body.clone(),
        })
    }

    /// Last segment of the storage path (the category's own folder name).
    pub fn path_terminal(&self) -> &str {
        self.path.last().map(String::as_str).unwrap_or_default()
    }

    /// Whether this category sits at the top of the hierarchy.
    pub fn is_root(&self) -> bool {
        self.path.len() == 1
    }
}

impl Prompt {
    pub(crate) fn from_raw(raw: &RawDocument, locale: Locale) -> Result<Self> {
        let fm: PromptFrontmatter = deserialize_frontmatter(raw)?;

        Ok(Prompt {
            slug: fm.slug.unwrap_or_else(|| raw.file_stem().to_string()),
            locale,
            title: fm.title,
            description: fm.description,
            category_slug: fm.category_slug,
            is_premium: fm.is_premium,
            icon: fm.icon,
            compatible_llms: fm.compatible_llms,
            featured_llms: fm.featured_llms,
            body: raw.body.clone(),
        })
    }
}

impl Llm {
    pub(crate) fn from_raw(raw: &RawDocument, locale: Locale) -> Result<Self> {
        let fm: LlmFrontmatter = deserialize_frontmatter(raw)?;

        Ok(Llm {
            slug: fm.slug.unwrap_or_else(|| raw.file_stem().to_string()),
            locale,
            name: fm.name,
            description: fm.description,
            icon: fm.icon,
            features: fm.features,
            body: raw.body.clone(),
        })
    }
}
