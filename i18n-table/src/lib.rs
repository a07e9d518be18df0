//! Runtime types for translation tables generated by `i18n-table-gen`.
//!
//! The generator turns a directory of `<language-tag>.json` files into a Rust
//! module that imports [`Message`] and [`Translations`] from this crate:
//!
//! ```
//! use i18n_table::{Message, Translations};
//!
//! const EN: &[Message] = &[Message { id: "hello", other: "Hi\nThere" }];
//! const FR: &[Message] = &[Message { id: "hello", other: "Bonjour" }];
//!
//! pub fn translations() -> Translations {
//!     Translations::new(&[("en", EN), ("fr", FR)])
//! }
//!
//! let translations = translations();
//! assert_eq!(translations.text("fr", "hello"), Some("Bonjour"));
//! assert_eq!(translations["en"].len(), 1);
//! ```
//!
//! The table is plain static data. Lookups never allocate and nothing is
//! parsed at runtime.

use std::ops::Index;

/// A single translated message: its id and the default ("other") form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Message {
    pub id: &'static str,
    pub other: &'static str,
}

/// Immutable table of messages keyed by canonical language tag.
///
/// Generated code builds one of these from `const` data and hands it out from
/// a `translations()` function. It is `Copy`, so pass it around freely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Translations {
    languages: &'static [(&'static str, &'static [Message])],
}

impl Translations {
    pub const fn new(languages: &'static [(&'static str, &'static [Message])]) -> Self {
        Translations { languages }
    }

    /// All messages for a language tag, in generated order.
    ///
    /// Tags are matched exactly against the canonical form the generator
    /// wrote (e.g. `"en-US"`, not `"en_us"`).
    pub fn get(&self, tag: &str) -> Option<&'static [Message]> {
        self.languages
            .iter()
            .find(|(language, _)| *language == tag)
            .map(|(_, messages)| *messages)
    }

    pub fn message(&self, tag: &str, id: &str) -> Option<&'static Message> {
        self.get(tag)?.iter().find(|message| message.id == id)
    }

    /// The default form of a message, if both the language and id exist.
    pub fn text(&self, tag: &str, id: &str) -> Option<&'static str> {
        self.message(tag, id).map(|message| message.other)
    }

    pub fn contains_language(&self, tag: &str) -> bool {
        self.get(tag).is_some()
    }

    pub fn languages(&self) -> impl Iterator<Item = &'static str> {
        self.languages.iter().map(|(tag, _)| *tag)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static [Message])> {
        self.languages.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}

impl Index<&str> for Translations {
    type Output = [Message];

    /// # Panics
    ///
    /// Panics if the table has no entry for `tag`.
    fn index(&self, tag: &str) -> &Self::Output {
        match self.get(tag) {
            Some(messages) => messages,
            None => panic!("no translations for language '{}'", tag),
        }
    }
}
