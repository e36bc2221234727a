//! # SALTBROTH Doctor
//!
//! Out-of-band authoring diagnostics for the content tree. The resolution
//! core deliberately degrades on authoring mistakes — broken parent
//! references truncate breadcrumbs, duplicate slugs resolve to the first
//! enumerated document, dangling compatibility references are skipped. This
//! crate makes those mistakes visible as a non-blocking, CI-style report
//! instead of leaving them to be discovered by a truncated UI breadcrumb.
//!
//! Checks never abort on findings: every check returns the full list of
//! issues it found, and only infrastructure failures (unreadable store,
//! malformed dictionary file) surface as errors.

#![warn(missing_docs)]

mod checks;
mod dictionary;

pub use checks::{
    check_broken_parents, check_dangling_category_refs, check_duplicate_slugs,
    check_feature_keys, check_missing_translations, check_unknown_llm_refs, run_all,
};
pub use dictionary::Dictionary;

use saltbroth_content::{ContentError, ContentKind};
use saltbroth_locale::Locale;
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using DoctorError.
pub type Result<T> = std::result::Result<T, DoctorError>;

/// Errors that prevent a diagnostic run from completing.
#[derive(Error, Debug)]
pub enum DoctorError {
    /// The content store itself could not be read.
    #[error(transparent)]
    Content(#[from] ContentError),

    /// A locale dictionary file could not be read.
    #[error("failed to read dictionary '{path}': {source}")]
    DictionaryRead {
        /// The dictionary file that could not be read.
        path: PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },

    /// A locale dictionary file is not valid JSON.
    #[error("failed to parse dictionary '{path}': {source}")]
    DictionaryParse {
        /// The dictionary file that failed to parse.
        path: PathBuf,
        /// JSON parser diagnostic.
        #[source]
        source: serde_json::Error,
    },
}

/// Severity of a diagnostic finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CheckLevel {
    /// Authoring mistake that silently corrupts site behavior.
    Error,
    /// Should be addressed but content still resolves.
    Warning,
    /// Informational finding.
    Info,
}

impl CheckLevel {
    /// String form used in reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckLevel::Error => "error",
            CheckLevel::Warning => "warning",
            CheckLevel::Info => "info",
        }
    }

    /// Whether this finding is an error.
    pub fn is_error(&self) -> bool {
        matches!(self, CheckLevel::Error)
    }
}

/// A single diagnostic finding.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Issue {
    /// Severity of the finding.
    pub level: CheckLevel,
    /// Locale the finding applies to, when locale-scoped.
    pub locale: Option<Locale>,
    /// Content kind the finding applies to, when kind-scoped.
    pub kind: Option<&'static str>,
    /// Slug of the offending document, when attributable.
    pub slug: Option<String>,
    /// Human-readable description of the problem.
    pub message: String,
}

impl Issue {
    pub(crate) fn new(
        level: CheckLevel,
        locale: Option<Locale>,
        kind: Option<ContentKind>,
        slug: Option<&str>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            level,
            locale,
            kind: kind.map(|k| k.dir_name()),
            slug: slug.map(str::to_string),
            message: message.into(),
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.level.as_str())?;
        if let Some(locale) = self.locale {
            write!(f, " [{locale}]")?;
        }
        if let Some(kind) = self.kind {
            write!(f, " {kind}")?;
        }
        if let Some(slug) = &self.slug {
            write!(f, "/{slug}")?;
        }
        write!(f, ": {}", self.message)
    }
}

/// Plain-text summary of a diagnostic run.
pub fn summary(issues: &[Issue]) -> String {
    let errors = issues.iter().filter(|i| i.level == CheckLevel::Error).count();
    let warnings = issues
        .iter()
        .filter(|i| i.level == CheckLevel::Warning)
        .count();

    let mut out = String::new();
    for issue in issues {
        out.push_str(&issue.to_string());
        out.push('\n');
    }
    out.push_str(&format!(
        "{} issue(s): {} error(s), {} warning(s)\n",
        issues.len(),
        errors,
        warnings
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_level_strings() {
        assert_eq!(CheckLevel::Error.as_str(), "error");
        assert_eq!(CheckLevel::Warning.as_str(), "warning");
        assert_eq!(CheckLevel::Info.as_str(), "info");
        assert!(CheckLevel::Error.is_error());
        assert!(!CheckLevel::Warning.is_error());
    }

    #[test]
    fn test_issue_display() {
        let issue = Issue::new(
            CheckLevel::Error,
            Some(Locale::En),
            Some(ContentKind::Categories),
            Some("email"),
            "parent 'business' does not resolve",
        );
        assert_eq!(
            issue.to_string(),
            "error [en] categories/email: parent 'business' does not resolve"
        );
    }

    #[test]
    fn test_summary_counts() {
        let issues = vec![
            Issue::new(CheckLevel::Error, None, None, None, "boom"),
            Issue::new(CheckLevel::Warning, None, None, None, "hmm"),
            Issue::new(CheckLevel::Warning, None, None, None, "hmm again"),
        ];
        let text = summary(&issues);
        assert!(text.contains("3 issue(s): 1 error(s), 2 warning(s)"));
    }

    #[test]
    fn test_summary_empty() {
        let text = summary(&[]);
        assert!(text.contains("0 issue(s): 0 error(s), 0 warning(s)"));
    }
}
