//! Diagnostic checks over the content tree.

use crate::dictionary::Dictionary;
use crate::{CheckLevel, Issue, Result};
use saltbroth_content::{ContentKind, ContentRepository};
use saltbroth_locale::Locale;
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

/// Categories whose `parent_slug` resolves to no category in the same locale.
///
/// The breadcrumb resolver truncates silently on these; here they surface as
/// errors so the authoring mistake is caught before a reader notices a
/// shortened trail.
pub fn check_broken_parents(repo: &ContentRepository) -> Result<Vec<Issue>> {
    let mut issues = Vec::new();

    for &locale in Locale::ALL {
        let tree = repo.category_tree(locale)?;
        for category in tree.iter() {
            let Some(parent_slug) = category.parent_slug.as_deref() else {
                continue;
            };
            if tree.get(parent_slug).is_none() {
                issues.push(Issue::new(
                    CheckLevel::Error,
                    Some(locale),
                    Some(ContentKind::Categories),
                    Some(&category.slug),
                    format!("parent '{parent_slug}' does not resolve"),
                ));
            }
        }
    }

    Ok(issues)
}

/// Slug collisions within a (locale, kind) pair.
///
/// The resolver picks the first enumerated document; every other document
/// with the same slug is unreachable by slug lookup.
pub fn check_duplicate_slugs(repo: &ContentRepository) -> Result<Vec<Issue>> {
    let mut issues = Vec::new();

    for &locale in Locale::ALL {
        for &kind in ContentKind::ALL {
            let slugs: Vec<String> = match kind {
                ContentKind::Categories => repo
                    .categories(locale)?
                    .into_iter()
                    .map(|c| c.slug)
                    .collect(),
                ContentKind::Prompts => {
                    repo.prompts(locale)?.into_iter().map(|p| p.slug).collect()
                }
                ContentKind::Llms => repo.llms(locale)?.into_iter().map(|l| l.slug).collect(),
            };

            let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
            for slug in &slugs {
                *counts.entry(slug).or_default() += 1;
            }

            for (slug, count) in counts {
                if count > 1 {
                    issues.push(Issue::new(
                        CheckLevel::Error,
                        Some(locale),
                        Some(kind),
                        Some(slug),
                        format!("{count} documents share this slug; only the first enumerated is reachable"),
                    ));
                }
            }
        }
    }

    Ok(issues)
}

/// Prompts whose `category_slug` resolves to no category in the same locale.
///
/// Such prompts render with no breadcrumb trail at all.
pub fn check_dangling_category_refs(repo: &ContentRepository) -> Result<Vec<Issue>> {
    let mut issues = Vec::new();

    for &locale in Locale::ALL {
        let tree = repo.category_tree(locale)?;
        for prompt in repo.prompts(locale)? {
            if tree.get(&prompt.category_slug).is_none() {
                issues.push(Issue::new(
                    CheckLevel::Error,
                    Some(locale),
                    Some(ContentKind::Prompts),
                    Some(&prompt.slug),
                    format!("category '{}' does not resolve", prompt.category_slug),
                ));
            }
        }
    }

    Ok(issues)
}

/// Compatibility references to LLM records that do not exist.
pub fn check_unknown_llm_refs(repo: &ContentRepository) -> Result<Vec<Issue>> {
    let mut issues = Vec::new();

    for &locale in Locale::ALL {
        let known: BTreeSet<String> = repo.llms(locale)?.into_iter().map(|l| l.slug).collect();

        for prompt in repo.prompts(locale)? {
            let declared = prompt
                .compatible_llms
                .iter()
                .chain(prompt.featured_llms.iter().flatten());

            for slug in declared {
                if !known.contains(slug) {
                    issues.push(Issue::new(
                        CheckLevel::Warning,
                        Some(locale),
                        Some(ContentKind::Prompts),
                        Some(&prompt.slug),
                        format!("references unknown LLM '{slug}'"),
                    ));
                }
            }
        }
    }

    Ok(issues)
}

/// Documents present in at least one locale but missing from others.
pub fn check_missing_translations(repo: &ContentRepository) -> Result<Vec<Issue>> {
    let mut issues = Vec::new();

    for &kind in ContentKind::ALL {
        let mut all_slugs = BTreeSet::new();
        for &locale in Locale::ALL {
            let slugs: Vec<String> = match kind {
                ContentKind::Categories => repo
                    .categories(locale)?
                    .into_iter()
                    .map(|c| c.slug)
                    .collect(),
                ContentKind::Prompts => {
                    repo.prompts(locale)?.into_iter().map(|p| p.slug).collect()
                }
                ContentKind::Llms => repo.llms(locale)?.into_iter().map(|l| l.slug).collect(),
            };
            all_slugs.extend(slugs);
        }

        for slug in &all_slugs {
            let presence = repo.check_localization(kind, slug)?;
            for (locale, present) in presence {
                if !present {
                    issues.push(Issue::new(
                        CheckLevel::Warning,
                        Some(locale),
                        Some(kind),
                        Some(slug),
                        "missing translation",
                    ));
                }
            }
        }
    }

    Ok(issues)
}

/// LLM `features` keys that resolve to no entry in a locale's dictionary.
///
/// Dictionaries live at `<dictionaries_dir>/<locale>.json`. A missing
/// dictionary file is itself reported rather than treated as fatal.
pub fn check_feature_keys(
    repo: &ContentRepository,
    dictionaries_dir: &Path,
) -> Result<Vec<Issue>> {
    let mut issues = Vec::new();

    for &locale in Locale::ALL {
        let path = dictionaries_dir.join(format!("{locale}.json"));
        if !path.exists() {
            issues.push(Issue::new(
                CheckLevel::Warning,
                Some(locale),
                None,
                None,
                format!("dictionary '{}' not found", path.display()),
            ));
            continue;
        }
        let dictionary = Dictionary::load(&path)?;

        for llm in repo.llms(locale)? {
            for key in &llm.features {
                if !dictionary.contains_key(key) {
                    issues.push(Issue::new(
                        CheckLevel::Error,
                        Some(locale),
                        Some(ContentKind::Llms),
                        Some(&llm.slug),
                        format!("feature key '{key}' has no translation"),
                    ));
                }
            }
        }
    }

    Ok(issues)
}

/// Run every check, optionally including dictionary validation.
///
/// Findings never abort the run; the result is the concatenation of all
/// checks' issues.
pub fn run_all(
    repo: &ContentRepository,
    dictionaries_dir: Option<&Path>,
) -> Result<Vec<Issue>> {
    let mut issues = Vec::new();

    issues.extend(check_broken_parents(repo)?);
    issues.extend(check_duplicate_slugs(repo)?);
    issues.extend(check_dangling_category_refs(repo)?);
    issues.extend(check_unknown_llm_refs(repo)?);
    issues.extend(check_missing_translations(repo)?);
    if let Some(dir) = dictionaries_dir {
        issues.extend(check_feature_keys(repo, dir)?);
    }

    tracing::info!("doctor run complete: {} issue(s)", issues.len());

    Ok(issues)
}
