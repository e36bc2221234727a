//! Localization completeness: which locales actually carry a document.

use crate::error::Result;
use crate::repository::ContentRepository;
use crate::store::ContentKind;
use saltbroth_locale::Locale;
use std::collections::BTreeMap;

impl ContentRepository {
    /// Presence of a (kind, slug) document per supported locale.
    ///
    /// Pure aggregation over exact-slug lookups; a missing locale simply maps
    /// to `false`, it is never an error.
    pub fn check_localization(
        &self,
        kind: ContentKind,
        slug: &str,
    ) -> Result<BTreeMap<Locale, bool>> {
        let mut presence = BTreeMap::new();
        for &locale in Locale::ALL {
            let present = self.content_by_slug(locale, kind, slug)?.is_some();
            presence.insert(locale, present);
        }
        Ok(presence)
    }
}
