//! Generator configuration.
//!
//! The defaults encode the fixed project convention: translation sources live
//! in `i18n/` and the generated module is written to `src/translation.rs`,
//! both relative to the working directory.

use std::path::{Path, PathBuf};

pub const DEFAULT_SOURCE_DIR: &str = "i18n";
pub const DEFAULT_OUTPUT_PATH: &str = "src/translation.rs";
pub const DEFAULT_RUNTIME_CRATE: &str = "i18n_table";

/// The form key every message must provide.
pub const DEFAULT_FORM: &str = "other";

/// Name written into the generated file's header.
pub const GENERATOR_NAME: &str = "i18n-table-gen";

/// What to do with the rendered module once it is ready
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Overwrite the output file (default)
    #[default]
    Write,
    /// Compare against the existing output file and fail if it differs
    Check,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    source_dir: PathBuf,
    output_path: PathBuf,
    runtime_crate: String,
    mode: OutputMode,
    strict_forms: bool,
}

impl GeneratorConfig {
    pub fn new() -> Self {
        GeneratorConfig {
            source_dir: PathBuf::from(DEFAULT_SOURCE_DIR),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            runtime_crate: DEFAULT_RUNTIME_CRATE.to_string(),
            mode: OutputMode::Write,
            strict_forms: false,
        }
    }

    pub fn with_source_dir(&mut self, dir: impl Into<PathBuf>) -> &mut Self {
        self.source_dir = dir.into();
        self
    }

    pub fn with_output_path(&mut self, path: impl Into<PathBuf>) -> &mut Self {
        self.output_path = path.into();
        self
    }

    /// Path the generated `use` statement imports `Message` and
    /// `Translations` from, e.g. `i18n_table` or `crate::i18n`.
    pub fn with_runtime_crate(&mut self, path: &str) -> &mut Self {
        self.runtime_crate = path.to_string();
        self
    }

    pub fn with_mode(&mut self, mode: OutputMode) -> &mut Self {
        self.mode = mode;
        self
    }

    /// Treat unexpected form keys as errors instead of warnings.
    pub fn with_strict_forms(&mut self, strict: bool) -> &mut Self {
        self.strict_forms = strict;
        self
    }

    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    pub fn runtime_crate(&self) -> &str {
        &self.runtime_crate
    }

    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    pub fn strict_forms(&self) -> bool {
        self.strict_forms
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::new()
    }
}
