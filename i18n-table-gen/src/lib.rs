//! Compiles per-language JSON translation files into a Rust translation table.
//!
//! Each file in the source directory is named after a language tag
//! (`en.json`, `zh-Hant-TW.json`) and maps message ids to their forms:
//!
//! ```json
//! { "hello": { "other": "Hi\nThere" }, "bye": { "one": "Bye", "other": "Byes" } }
//! ```
//!
//! The generator validates every file and writes a module that imports
//! `i18n_table::{Message, Translations}` and exposes `pub fn translations()`.
//! The first invalid file aborts the run and leaves the output untouched.
//!
//! # Build script example
//!
//! ```ignore
//! use i18n_table_gen::{GeneratorConfig, generate};
//!
//! fn main() {
//!     let out = std::path::Path::new(&std::env::var("OUT_DIR").unwrap()).join("translation.rs");
//!     let mut config = GeneratorConfig::new();
//!     config.with_output_path(out);
//!
//!     let report = generate(&config).unwrap();
//!     for line in report.rerun_if_changed_lines(config.source_dir()) {
//!         println!("{}", line);
//!     }
//! }
//! ```

pub mod config;
pub mod emitter;
pub mod error;
pub mod forms;
pub mod formatter;
pub mod generator;
pub mod language;
pub mod loader;
pub mod registry;
pub mod scanner;
pub mod writer;

pub use config::{DEFAULT_FORM, GENERATOR_NAME, GeneratorConfig, OutputMode};
pub use error::{GenError, Result};
pub use generator::{GenerationReport, Rendered, generate, render_translations};
pub use language::LanguageTag;
pub use loader::{
    LoadOptions, MessageCatalog, MessageForms, MessageRecord, TranslationFile,
    load_translation_file,
};
pub use scanner::scan_translation_dir;
pub use writer::WriteOutcome;
