use std::cmp::Ordering;
use std::fmt;

use icu_collator::{Collator, CollatorOptions, Strength};
use icu_locid::Locale;

use crate::error::{ProctableError, Result};

/// Locale-sensitive string ordering for the text sort columns.
///
/// Wraps an ICU4X collator built from compiled collation data. Build one
/// per locale and reuse it across comparisons; construction is the
/// expensive part, `compare` is not.
pub struct Collation {
    collator: Collator,
}

impl Collation {
    /// Build a collation for a BCP-47 locale tag such as `en-US` or `sv`.
    pub fn new(tag: &str) -> Result<Self> {
        let locale: Locale = tag
            .parse()
            .map_err(|err| ProctableError::locale(tag, format!("{err}")))?;
        Self::for_locale(locale)
    }

    /// Build a collation for the current system locale, falling back to
    /// the root locale when detection or tag parsing fails.
    pub fn system() -> Result<Self> {
        let locale = sys_locale::get_locale()
            .and_then(|tag| tag.parse::<Locale>().ok())
            .unwrap_or(Locale::UND);
        Self::for_locale(locale)
    }

    /// Root-locale collation, the locale-independent default ordering.
    pub fn root() -> Result<Self> {
        Self::for_locale(Locale::UND)
    }

    fn for_locale(locale: Locale) -> Result<Self> {
        let mut options = CollatorOptions::new();
        options.strength = Some(Strength::Tertiary);
        let collator = Collator::try_new(&locale.into(), options)
            .map_err(|err| ProctableError::collation(format!("{err}")))?;
        Ok(Self { collator })
    }

    pub fn compare(&self, left: &str, right: &str) -> Ordering {
        self.collator.compare(left, right)
    }
}

// The inner collator carries no Debug impl, so the wrapper stays opaque.
impl fmt::Debug for Collation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Collation").finish_non_exhaustive()
    }
}
