//! End-to-end resolution tests over a real on-disk content tree.

use saltbroth_content::{Breadcrumb, ContentKind, ContentRepository, Locale};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_doc(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

/// Bilingual content tree with a nested category hierarchy, three prompts,
/// and two LLM records. Spanish only carries part of the content.
fn fixture() -> (TempDir, ContentRepository) {
    let temp = TempDir::new().unwrap();
    let root = temp.path();

    // Categories: business > email, plus a creative root
    write_doc(
        root,
        "en/categories/business/business.mdx",
        "---\nname: Business\ndescription: Work and productivity\nicon: briefcase\n---\nBusiness content.\n",
    );
    write_doc(
        root,
        "en/categories/business/email/email.mdx",
        "---\nname: Email\nicon: envelope\n---\nEmail content.\n",
    );
    write_doc(
        root,
        "en/categories/creative/creative.mdx",
        "---\nname: Creative\nicon: palette\n---\nCreative content.\n",
    );

    // Prompts
    write_doc(
        root,
        "en/prompts/cold-outreach.mdx",
        "---\ntitle: Cold Outreach\ncategory_slug: email\ncompatible_llms: [gpt-4, claude-3]\nfeatured_llms: [claude-3]\n---\nWrite a cold email to {{recipient}}.\n",
    );
    write_doc(
        root,
        "en/prompts/story-starter.mdx",
        "---\ntitle: Story Starter\ncategory_slug: creative\ncompatible_llms: [claude-3]\n---\nStart a story about {{topic}}.\n",
    );
    write_doc(
        root,
        "en/prompts/orphan.mdx",
        "---\ntitle: Orphan\ncategory_slug: nonexistent\ncompatible_llms: [gpt-4]\n---\nNo home.\n",
    );

    // LLMs
    write_doc(
        root,
        "en/llms/gpt-4.mdx",
        "---\nname: GPT-4\nfeatures: [llm.feature.writing]\n---\n",
    );
    write_doc(
        root,
        "en/llms/claude-3.mdx",
        "---\nname: Claude 3\nfeatures: [llm.feature.writing, llm.feature.analysis]\n---\n",
    );

    // Spanish: only the business category and one prompt are translated
    write_doc(
        root,
        "es/categories/business/business.mdx",
        "---\nname: Negocios\n---\nContenido de negocios.\n",
    );
    write_doc(
        root,
        "es/prompts/cold-outreach.mdx",
        "---\ntitle: Contacto en Frío\ncategory_slug: business\ncompatible_llms: [claude-3]\n---\nEscribe un correo.\n",
    );

    let repo = ContentRepository::open(root);
    (temp, repo)
}

#[test]
fn round_trip_slug_and_locale() {
    let (_temp, repo) = fixture();

    let prompt = repo
        .prompt_by_slug(Locale::Es, "cold-outreach")
        .unwrap()
        .unwrap();
    assert_eq!(prompt.slug, "cold-outreach");
    assert_eq!(prompt.locale, Locale::Es);
    assert_eq!(prompt.title, "Contacto en Frío");
}

#[test]
fn no_cross_locale_merge() {
    let (_temp, repo) = fixture();

    // story-starter exists in English only; Spanish reads must not see it
    assert!(repo.prompt_by_slug(Locale::En, "story-starter").unwrap().is_some());
    assert!(repo.prompt_by_slug(Locale::Es, "story-starter").unwrap().is_none());
}

#[test]
fn hierarchy_depth_matches_directories() {
    let (_temp, repo) = fixture();

    for category in repo.categories(Locale::En).unwrap() {
        assert!(!category.path.is_empty());
        let containing_dir = category
            .path
            .last()
            .map(String::as_str)
            .unwrap();
        assert_eq!(category.path_terminal(), containing_dir);
    }
}

#[test]
fn category_breadcrumbs_root_to_leaf() {
    let (_temp, repo) = fixture();

    let chain = repo.category_breadcrumbs(Locale::En, "email").unwrap();
    let slugs: Vec<_> = chain.iter().map(|c| c.slug.as_str()).collect();
    assert_eq!(slugs, vec!["business", "email"]);

    assert!(chain[0].is_root());
    for pair in chain.windows(2) {
        assert_eq!(pair[1].parent_slug.as_deref(), Some(pair[0].slug.as_str()));
    }
}

#[test]
fn prompt_breadcrumbs_end_with_prompt() {
    let (_temp, repo) = fixture();

    let trail = repo.prompt_breadcrumbs(Locale::En, "cold-outreach").unwrap();
    assert_eq!(trail.len(), 3);

    let labels: Vec<_> = trail.iter().map(|b| b.label()).collect();
    assert_eq!(labels, vec!["Business", "Email", "Cold Outreach"]);

    assert!(matches!(trail.last().unwrap(), Breadcrumb::Prompt(_)));
    assert!(matches!(trail[0], Breadcrumb::Category(_)));
}

#[test]
fn prompt_with_unresolvable_category_has_no_trail() {
    let (_temp, repo) = fixture();

    let trail = repo.prompt_breadcrumbs(Locale::En, "orphan").unwrap();
    assert!(trail.is_empty());

    // The prompt itself still resolves; only the trail is empty
    assert!(repo.prompt_by_slug(Locale::En, "orphan").unwrap().is_some());
}

#[test]
fn absent_prompt_has_no_trail() {
    let (_temp, repo) = fixture();

    let trail = repo.prompt_breadcrumbs(Locale::En, "ghost").unwrap();
    assert!(trail.is_empty());
}

#[test]
fn subcategories_are_direct_children_only() {
    let (_temp, repo) = fixture();

    let children = repo.subcategories(Locale::En, "business").unwrap();
    let slugs: Vec<_> = children.iter().map(|c| c.slug.as_str()).collect();
    assert_eq!(slugs, vec!["email"]);

    assert!(repo.subcategories(Locale::En, "creative").unwrap().is_empty());
}

#[test]
fn prompts_by_category_excludes_child_categories() {
    let (_temp, repo) = fixture();

    // cold-outreach is filed under "email"; querying the parent must not return it
    let business = repo.prompts_by_category(Locale::En, "business").unwrap();
    assert!(business.is_empty());

    let email = repo.prompts_by_category(Locale::En, "email").unwrap();
    assert_eq!(email.len(), 1);
    assert_eq!(email[0].slug, "cold-outreach");
}

#[test]
fn compatible_and_featured_llms() {
    let (_temp, repo) = fixture();

    let prompt = repo
        .prompt_by_slug(Locale::En, "cold-outreach")
        .unwrap()
        .unwrap();

    let compatible = repo.compatible_llms(Locale::En, &prompt).unwrap();
    let slugs: Vec<_> = compatible.iter().map(|l| l.slug.as_str()).collect();
    assert_eq!(slugs, vec!["gpt-4", "claude-3"]);

    let featured = repo.featured_llms(Locale::En, &prompt).unwrap();
    let slugs: Vec<_> = featured.iter().map(|l| l.slug.as_str()).collect();
    assert_eq!(slugs, vec!["claude-3"]);
}

#[test]
fn featured_llms_fall_back_to_compatible_set() {
    let (_temp, repo) = fixture();

    // story-starter declares no featured_llms
    let prompt = repo
        .prompt_by_slug(Locale::En, "story-starter")
        .unwrap()
        .unwrap();
    assert!(prompt.featured_llms.is_none());

    let featured = repo.featured_llms(Locale::En, &prompt).unwrap();
    let compatible = repo.compatible_llms(Locale::En, &prompt).unwrap();
    assert_eq!(featured, compatible);
    assert_eq!(featured.len(), 1);
    assert_eq!(featured[0].slug, "claude-3");
}

#[test]
fn localization_completeness_per_slug() {
    let (_temp, repo) = fixture();

    let presence = repo
        .check_localization(ContentKind::Prompts, "story-starter")
        .unwrap();
    assert!(presence[&Locale::En]);
    assert!(!presence[&Locale::Es]);

    let presence = repo
        .check_localization(ContentKind::Prompts, "cold-outreach")
        .unwrap();
    assert!(presence[&Locale::En]);
    assert!(presence[&Locale::Es]);
}

#[test]
fn all_locale_enumeration_for_sitemaps() {
    let (_temp, repo) = fixture();

    // Sitemap generators enumerate every locale and tolerate sparse ones
    for &locale in Locale::ALL {
        let categories = repo.categories(locale).unwrap();
        let prompts = repo.prompts(locale).unwrap();
        match locale {
            Locale::En => {
                assert_eq!(categories.len(), 3);
                assert_eq!(prompts.len(), 3);
            }
            Locale::Es => {
                assert_eq!(categories.len(), 1);
                assert_eq!(prompts.len(), 1);
            }
        }
    }

    // A locale/kind with no documents at all is an empty list, not an error
    assert!(repo.llms(Locale::Es).unwrap().is_empty());
}

#[test]
fn repeated_reads_are_idempotent() {
    let (_temp, repo) = fixture();

    let first = repo.categories(Locale::En).unwrap();
    let second = repo.categories(Locale::En).unwrap();
    assert_eq!(first, second);
}
