// Code generated by "i18n-table-gen"; DO NOT EDIT.

use i18n_table::{Message, Translations};
const EN: &[Message] = &[
    Message {
        id: "hello",
        other: "Hi\nThere",
    },
];
const FR: &[Message] = &[
    Message {
        id: "hello",
        other: "Bonjour",
    },
];
const ZH_HANT_TW: &[Message] = &[
    Message {
        id: "Greeting.Formal",
        other: "\"您好\"",
    },
    Message {
        id: "hello",
        other: "你好",
    },
];
/// Translations compiled from the translation source directory.
pub fn translations() -> Translations {
    Translations::new(&[("en", EN), ("fr", FR), ("zh-Hant-TW", ZH_HANT_TW)])
}
