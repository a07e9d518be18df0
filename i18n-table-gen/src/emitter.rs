//! Builds the generated module as a token tree.
//!
//! String literals escape only quotes, backslashes and control characters.
//! A newline in the source text becomes the two characters `\n`, so every
//! literal stays on one line, while combining marks and other printable text
//! are written as-is.

use std::str::FromStr;

use proc_macro2::{Literal, TokenStream};
use quote::{format_ident, quote};

use crate::config::GENERATOR_NAME;
use crate::loader::{MessageRecord, TranslationFile};

/// The first line of every generated file.
pub fn header() -> String {
    format!("// Code generated by \"{}\"; DO NOT EDIT.\n", GENERATOR_NAME)
}

/// Emit the generated module body.
///
/// The module imports `Message` and `Translations` from `runtime`, declares
/// one `const` slice per language in `files` order and exposes the table
/// through `pub fn translations()`.
pub fn emit_module(files: &[TranslationFile], runtime: &syn::Path) -> TokenStream {
    let languages = files.iter().map(emit_language);

    let entries = files.iter().map(|file| {
        let tag = string_literal(file.tag.as_str());
        let name = format_ident!("{}", file.tag.const_name());
        quote! { (#tag, #name) }
    });

    quote! {
        use #runtime::{Message, Translations};

        #(#languages)*

        /// Translations compiled from the translation source directory.
        pub fn translations() -> Translations {
            Translations::new(&[#(#entries),*])
        }
    }
}

fn emit_language(file: &TranslationFile) -> TokenStream {
    let name = format_ident!("{}", file.tag.const_name());
    let messages = file.messages.iter().map(emit_message);

    quote! {
        const #name: &[Message] = &[#(#messages),*];
    }
}

fn emit_message(message: &MessageRecord) -> TokenStream {
    let id = string_literal(&message.id);
    let other = string_literal(&message.other);

    quote! {
        Message { id: #id, other: #other }
    }
}

/// A string literal token holding `text`.
fn string_literal(text: &str) -> Literal {
    Literal::from_str(&quoted(text)).unwrap_or_else(|_| Literal::string(text))
}

/// `text` as Rust string literal source, double quotes included.
///
/// `Literal::string` also escapes every grapheme extender (`हिन्दी` comes out
/// as `"हिन\u{94d}दी"`), which makes generated tables for Indic scripts
/// unreadable.
fn quoted(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for c in text.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\0' => out.push_str("\\0"),
            c if c.is_control() => out.push_str(&format!("\\u{{{:x}}}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
