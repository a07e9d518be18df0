//! Validation of language tags against the IANA language subtag registry.
//!
//! `icu_locale` checks that a tag is well formed, but a well-formed tag like
//! `xx-bogus` or `en-JJ` still names nothing. Every subtag of a canonical tag
//! must be registered, and subtags from the private-use ranges are refused
//! since they carry no agreed meaning.
//!
//! Reference: <https://www.iana.org/assignments/language-subtag-registry>

use icu_locale::Locale;
use language_tags::LanguageTag as RegistryTag;

/// Check every subtag of a canonicalized locale against the registry.
///
/// # Errors
/// Returns a human-readable reason naming the offending subtag.
pub fn check_registered(locale: &Locale) -> Result<(), String> {
    check_not_private_use(locale)?;

    let tag = locale.to_string();
    let parsed = RegistryTag::parse(&tag)
        .map_err(|e| format!("'{}' is not a valid language tag: {}", tag, e))?;
    parsed
        .validate()
        .map_err(|e| format!("'{}' is not in the IANA language subtag registry: {}", tag, e))
}

fn check_not_private_use(locale: &Locale) -> Result<(), String> {
    let language = locale.id.language.as_str();
    if is_private_use_language(language) {
        return Err(format!("private-use language subtag '{}'", language));
    }
    if let Some(script) = locale.id.script {
        if is_private_use_script(script.as_str()) {
            return Err(format!("private-use script subtag '{}'", script.as_str()));
        }
    }
    if let Some(region) = locale.id.region {
        if is_private_use_region(region.as_str()) {
            return Err(format!("private-use region subtag '{}'", region.as_str()));
        }
    }
    Ok(())
}

/// `qaa`..`qtz`
fn is_private_use_language(language: &str) -> bool {
    matches!(language.as_bytes(), [b'q', b'a'..=b't', b'a'..=b'z'])
}

/// `Qaaa`..`Qabx`
fn is_private_use_script(script: &str) -> bool {
    matches!(
        script.as_bytes(),
        [b'Q', b'a', b'a', b'a'..=b'z'] | [b'Q', b'a', b'b', b'a'..=b'x']
    )
}

/// `AA`, `QM`..`QZ`, `XA`..`XZ`, `ZZ`
fn is_private_use_region(region: &str) -> bool {
    matches!(
        region.as_bytes(),
        [b'A', b'A'] | [b'Q', b'M'..=b'Z'] | [b'X', b'A'..=b'Z'] | [b'Z', b'Z']
    )
}
