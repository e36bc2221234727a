//! Compatibility index: cross-references prompts and LLM records.

use crate::error::Result;
use crate::model::{Llm, Prompt};
use crate::repository::ContentRepository;
use saltbroth_locale::Locale;

impl ContentRepository {
    /// LLM records a prompt declares compatibility with, in declared order.
    ///
    /// Declared slugs with no matching record are simply absent from the
    /// result; `saltbroth-doctor` reports them out-of-band.
    pub fn compatible_llms(&self, locale: Locale, prompt: &Prompt) -> Result<Vec<Llm>> {
        let all = self.llms(locale)?;
        Ok(select_by_slugs(&all, &prompt.compatible_llms))
    }

    /// Featured LLM records for a prompt.
    ///
    /// Falls back to the full compatible set when `featured_llms` is absent
    /// or empty, so the rendering layer always has something to show.
    pub fn featured_llms(&self, locale: Locale, prompt: &Prompt) -> Result<Vec<Llm>> {
        match prompt.featured_llms.as_deref() {
            Some(featured) if !featured.is_empty() => {
                let all = self.llms(locale)?;
                Ok(select_by_slugs(&all, featured))
            }
            _ => self.compatible_llms(locale, prompt),
        }
    }
}

fn select_by_slugs(llms: &[Llm], slugs: &[String]) -> Vec<Llm> {
    slugs
        .iter()
        .filter_map(|slug| llms.iter().find(|llm| &llm.slug == slug))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn llm(slug: &str) -> Llm {
        Llm {
            slug: slug.to_string(),
            locale: Locale::En,
            name: slug.to_uppercase(),
            description: String::new(),
            icon: String::new(),
            features: Vec::new(),
            body: String::new(),
        }
    }

    #[test]
    fn test_select_by_slugs_keeps_declared_order() {
        let all = vec![llm("claude-3"), llm("gpt-4"), llm("gemini")];
        let picked = select_by_slugs(&all, &["gpt-4".to_string(), "claude-3".to_string()]);
        let slugs: Vec<_> = picked.iter().map(|l| l.slug.as_str()).collect();
        assert_eq!(slugs, vec!["gpt-4", "claude-3"]);
    }

    #[test]
    fn test_select_by_slugs_skips_unknown() {
        let all = vec![llm("claude-3")];
        let picked = select_by_slugs(&all, &["ghost".to_string(), "claude-3".to_string()]);
        assert_eq!(picked.len(), 1);
        assert_eq!(picked[0].slug, "claude-3");
    }
}
