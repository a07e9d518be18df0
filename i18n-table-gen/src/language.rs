//! Language tags derived from translation file names.

use std::fmt;
use std::path::Path;

use icu_locale::{Locale, LocaleCanonicalizer};

use crate::registry::check_registered;

/// Extension stripped from a file name to get its candidate tag.
pub const TRANSLATION_FILE_EXTENSION: &str = ".json";

/// A canonical BCP 47 language tag such as `en-US` or `zh-Hant-TW`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageTag {
    tag: String,
    locale: Locale,
}

impl LanguageTag {
    /// Parse and canonicalize a candidate tag.
    ///
    /// Accepts `_` as a subtag separator and any casing, so `en_us`, `EN-us`
    /// and `en-US` all yield `en-US`. Deprecated language codes are replaced
    /// by their current equivalents (`iw` becomes `he`).
    ///
    /// # Errors
    /// Returns a human-readable reason when the tag is malformed, or when any
    /// of its subtags is unregistered or reserved for private use.
    pub fn parse(candidate: &str) -> Result<Self, String> {
        let normalized = candidate.replace('_', "-");
        let mut locale: Locale = normalized
            .parse()
            .map_err(|e| format!("not a well-formed language tag: {}", e))?;

        LocaleCanonicalizer::new_common().canonicalize(&mut locale);

        check_registered(&locale)?;

        Ok(LanguageTag {
            tag: locale.to_string(),
            locale,
        })
    }

    /// Candidate tag for a translation file: its name minus `.json`.
    pub fn candidate_from_path(path: &Path) -> Result<&str, String> {
        let name = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| format!("file name of '{}' is not valid UTF-8", path.display()))?;
        Ok(name
            .strip_suffix(TRANSLATION_FILE_EXTENSION)
            .unwrap_or(name))
    }

    pub fn as_str(&self) -> &str {
        &self.tag
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Upper snake case form usable as a Rust constant name (`en-US` → `EN_US`).
    pub fn const_name(&self) -> String {
        self.tag.replace('-', "_").to_uppercase()
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tag)
    }
}
