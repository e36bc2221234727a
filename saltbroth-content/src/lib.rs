//! # SALTBROTH Content Domain Crate
//!
//! Locale-scoped content resolution for the prompt marketplace: reads
//! front-matter documents from a per-locale directory tree, exposes typed
//! accessors for categories, prompts, and model-compatibility records, and
//! reconstructs the category hierarchy (breadcrumbs, subcategories) from
//! storage layout.
//!
//! ## Design
//!
//! - **Absence is routine**: lookups return `Option`/empty collections, never
//!   errors. Missing locale content is expected, not exceptional.
//! - **Pure reads**: every call re-derives its result from source documents;
//!   there is no shared mutable cache, so concurrent resolution needs no
//!   coordination. Callers own any memoization.
//! - **Deterministic enumeration**: listings are sorted by relative path, so
//!   "first match wins" duplicate handling is stable across platforms.

#![warn(missing_docs)]

mod compat;
mod error;
mod frontmatter;
mod hierarchy;
mod localization;
mod model;
mod repository;
mod store;

pub use error::{ContentError, Result};
pub use frontmatter::{parse_frontmatter, FrontmatterResult};
pub use hierarchy::{resolve_category_path, Breadcrumb, CategoryTree};
pub use model::{Category, ContentRecord, Llm, Prompt};
pub use repository::ContentRepository;
pub use store::{ContentKind, DocumentStore, RawDocument};

// Re-export the locale crate's primary type; nearly every API here takes one.
pub use saltbroth_locale::Locale;
