use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use tracing::warn;

use crate::config::DEFAULT_FORM;
use crate::error::{GenError, Result};
use crate::forms::PluralForms;
use crate::language::LanguageTag;

/// Form key → text for one message, e.g. `{"one": "1 file", "other": "{{.Count}} files"}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct MessageForms(pub BTreeMap<String, String>);

impl MessageForms {
    pub fn get(&self, form: &str) -> Option<&str> {
        self.0.get(form).map(String::as_str)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

/// The parsed content of a translation file, keyed by message id.
///
/// Ids iterate in byte order, which keeps generated output stable. An id
/// that occurs twice in the same file is rejected while parsing instead of
/// silently keeping the last occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageCatalog(pub BTreeMap<String, MessageForms>);

impl<'de> Deserialize<'de> for MessageCatalog {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct CatalogVisitor;

        impl<'de> Visitor<'de> for CatalogVisitor {
            type Value = MessageCatalog;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("an object mapping message ids to objects of forms")
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut messages = BTreeMap::new();
                while let Some((id, forms)) = map.next_entry::<String, MessageForms>()? {
                    if messages.contains_key(&id) {
                        return Err(de::Error::custom(format!("duplicate message id '{}'", id)));
                    }
                    messages.insert(id, forms);
                }
                Ok(MessageCatalog(messages))
            }
        }

        deserializer.deserialize_map(CatalogVisitor)
    }
}

/// A validated message ready for emission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageRecord {
    /// Exactly as written in the source file
    pub id: String,
    /// The default form's text, unescaped
    pub other: String,
}

/// One validated translation file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationFile {
    pub path: PathBuf,
    pub tag: LanguageTag,
    pub messages: Vec<MessageRecord>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LoadOptions {
    /// Reject unexpected form keys instead of warning about them
    pub strict_forms: bool,
}

/// Parse raw file content into a message catalog.
pub fn parse_catalog(bytes: &[u8]) -> std::result::Result<MessageCatalog, serde_json::Error> {
    serde_json::from_slice(bytes)
}

/// Parse and validate one translation file.
///
/// The checks run in a fixed order and the first failure wins:
/// 1. the content must be a JSON object of `{ id: { form: text } }`
/// 2. the file name, minus `.json`, must be a supported language tag
/// 3. every id must be non-empty and every message must have an `other` form
///
/// Form keys that the language does not use are logged, or rejected when
/// `options.strict_forms` is set.
pub fn load_translation_file(
    path: &Path,
    bytes: &[u8],
    options: LoadOptions,
) -> Result<TranslationFile> {
    let catalog = parse_catalog(bytes).map_err(|source| GenError::MalformedInput {
        path: path.to_path_buf(),
        source,
    })?;

    let tag = language_tag_for(path)?;
    let plural_forms = PluralForms::for_language(&tag).map_err(|reason| {
        GenError::UnsupportedLanguage {
            path: path.to_path_buf(),
            tag: tag.to_string(),
            reason,
        }
    })?;

    let mut messages = Vec::with_capacity(catalog.0.len());
    for (id, forms) in catalog.0 {
        if id.is_empty() {
            return Err(GenError::EmptyIdentifier {
                path: path.to_path_buf(),
            });
        }

        let Some(other) = forms.get(DEFAULT_FORM) else {
            return Err(GenError::MissingDefaultForm {
                path: path.to_path_buf(),
                id,
                form: DEFAULT_FORM,
            });
        };

        for key in forms.keys() {
            let kind = plural_forms.classify(key);
            if kind.is_expected() {
                continue;
            }
            if options.strict_forms {
                return Err(GenError::UnexpectedForm {
                    path: path.to_path_buf(),
                    id,
                    form: key.to_string(),
                    reason: kind.describe().to_string(),
                });
            }
            warn!(
                "message '{}' in '{}' has form '{}' ({})",
                id,
                path.display(),
                key,
                kind.describe()
            );
        }

        messages.push(MessageRecord {
            other: other.to_string(),
            id,
        });
    }

    Ok(TranslationFile {
        path: path.to_path_buf(),
        tag,
        messages,
    })
}

fn language_tag_for(path: &Path) -> Result<LanguageTag> {
    let candidate =
        LanguageTag::candidate_from_path(path).map_err(|reason| GenError::UnsupportedLanguage {
            path: path.to_path_buf(),
            tag: path.display().to_string(),
            reason,
        })?;

    LanguageTag::parse(candidate).map_err(|reason| GenError::UnsupportedLanguage {
        path: path.to_path_buf(),
        tag: candidate.to_string(),
        reason,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load(name: &str, content: &str) -> Result<TranslationFile> {
        load_translation_file(
            &Path::new("i18n").join(name),
            content.as_bytes(),
            LoadOptions::default(),
        )
    }

    #[test]
    fn test_load_valid_file() {
        let file = load(
            "en-us.json",
            r#"{"hello": {"other": "Hi\nThere"}, "Bye": {"one": "Bye", "other": "Byes"}}"#,
        )
        .unwrap();

        assert_eq!(file.tag.as_str(), "en-US");
        assert_eq!(
            file.messages,
            vec![
                MessageRecord {
                    id: "Bye".to_string(),
                    other: "Byes".to_string(),
                },
                MessageRecord {
                    id: "hello".to_string(),
                    other: "Hi\nThere".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_empty_file_object() {
        let file = load("fr.json", "{}").unwrap();
        assert_eq!(file.tag.as_str(), "fr");
        assert!(file.messages.is_empty());
    }

    #[test]
    fn test_malformed_json() {
        let err = load("en.json", r#"{"hello": {"other": "Hi""#).unwrap_err();
        assert!(matches!(err, GenError::MalformedInput { .. }), "{:?}", err);
    }

    #[test]
    fn test_wrong_shape_is_malformed() {
        for content in [
            r#"["hello"]"#,
            r#"{"hello": "Hi"}"#,
            r#"{"hello": {"other": 1}}"#,
        ] {
            let err = load("en.json", content).unwrap_err();
            assert!(matches!(err, GenError::MalformedInput { .. }), "{:?}", err);
        }
    }

    #[test]
    fn test_duplicate_id_is_malformed() {
        let err = load(
            "en.json",
            r#"{"hello": {"other": "Hi"}, "hello": {"other": "Hey"}}"#,
        )
        .unwrap_err();

        match err {
            GenError::MalformedInput { source, .. } => {
                assert!(source.to_string().contains("duplicate message id 'hello'"));
            }
            other => panic!("Expected MalformedInput, got {:?}", other),
        }
    }

    #[test]
    fn test_unsupported_language() {
        match load("xx-bogus.json", "{}").unwrap_err() {
            GenError::UnsupportedLanguage { tag, path, .. } => {
                assert_eq!(tag, "xx-bogus");
                assert_eq!(path, Path::new("i18n/xx-bogus.json"));
            }
            other => panic!("Expected UnsupportedLanguage, got {:?}", other),
        }
    }

    #[test]
    fn test_json_errors_are_reported_before_language_errors() {
        let err = load("xx-bogus.json", "not json").unwrap_err();
        assert!(matches!(err, GenError::MalformedInput { .. }), "{:?}", err);
    }

    #[test]
    fn test_empty_identifier() {
        let err = load("en.json", r#"{"": {"other": "nothing"}}"#).unwrap_err();
        assert!(matches!(err, GenError::EmptyIdentifier { .. }), "{:?}", err);
    }

    #[test]
    fn test_missing_default_form() {
        match load("en.json", r#"{"items": {"one": "1 item"}}"#).unwrap_err() {
            GenError::MissingDefaultForm { id, form, .. } => {
                assert_eq!(id, "items");
                assert_eq!(form, "other");
            }
            other => panic!("Expected MissingDefaultForm, got {:?}", other),
        }
    }

    #[test]
    fn test_unexpected_forms_are_tolerated_by_default() {
        let file = load(
            "en.json",
            r#"{"items": {"few": "a few", "otehr": "typo", "other": "items"}}"#,
        )
        .unwrap();
        assert_eq!(file.messages[0].other, "items");
    }

    #[test]
    fn test_strict_forms_reject_unused_category() {
        let err = load_translation_file(
            Path::new("i18n/en.json"),
            br#"{"items": {"few": "a few", "other": "items"}}"#,
            LoadOptions { strict_forms: true },
        )
        .unwrap_err();

        match err {
            GenError::UnexpectedForm { id, form, .. } => {
                assert_eq!(id, "items");
                assert_eq!(form, "few");
            }
            other => panic!("Expected UnexpectedForm, got {:?}", other),
        }
    }

    #[test]
    fn test_strict_forms_accept_metadata() {
        let file = load_translation_file(
            Path::new("i18n/ru.json"),
            r#"{"files": {"description": "file count", "one": "файл", "few": "файла", "many": "файлов", "other": "файла"}}"#.as_bytes(),
            LoadOptions { strict_forms: true },
        )
        .unwrap();
        assert_eq!(file.messages[0].other, "файла");
    }
}
