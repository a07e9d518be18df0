//! Classification of message form keys.
//!
//! Only the default form is emitted, but translators routinely add plural
//! forms. A form key that the file's language never selects (`few` in an
//! English file) or that is not a form at all (a typo like `otehr`) usually
//! points at a mistake, so the loader reports it.

use icu_plurals::{PluralCategory, PluralRuleType, PluralRules};

use crate::language::LanguageTag;

/// Non-plural keys go-i18n message files may carry alongside the forms.
const METADATA_KEYS: [&str; 4] = ["description", "hash", "leftdelim", "rightdelim"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    /// A plural category the language uses
    Plural,
    /// Message metadata such as `description`
    Metadata,
    /// A plural category the language never selects
    UnusedCategory,
    /// Neither a plural category nor metadata
    Unknown,
}

impl FormKind {
    pub fn is_expected(self) -> bool {
        matches!(self, FormKind::Plural | FormKind::Metadata)
    }

    pub fn describe(self) -> &'static str {
        match self {
            FormKind::Plural => "plural category",
            FormKind::Metadata => "message metadata",
            FormKind::UnusedCategory => "plural category not used by this language",
            FormKind::Unknown => "not a plural category or metadata key",
        }
    }
}

/// Cardinal plural categories used by one language.
#[derive(Debug, Clone)]
pub struct PluralForms {
    categories: Vec<PluralCategory>,
}

impl PluralForms {
    /// Load the cardinal plural rules for `tag`.
    ///
    /// Languages without CLDR plural data fall back to the root rules, which
    /// only use `other`.
    pub fn for_language(tag: &LanguageTag) -> Result<Self, String> {
        let rules = PluralRules::try_new(tag.locale().clone().into(), PluralRuleType::Cardinal.into())
            .map_err(|e| format!("failed to load plural rules for '{}': {}", tag, e))?;

        Ok(PluralForms {
            categories: rules.categories().collect(),
        })
    }

    pub fn uses(&self, category: PluralCategory) -> bool {
        self.categories.contains(&category)
    }

    pub fn classify(&self, key: &str) -> FormKind {
        match PluralCategory::get_for_cldr_string(key) {
            Some(category) if self.uses(category) => FormKind::Plural,
            Some(_) => FormKind::UnusedCategory,
            None if METADATA_KEYS.contains(&key.to_lowercase().as_str()) => FormKind::Metadata,
            None => FormKind::Unknown,
        }
    }
}
