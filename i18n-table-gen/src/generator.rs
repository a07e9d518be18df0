//! The generation pipeline.
//!
//! Idle → Scanning → (Reading → Parsing → Validating) × N → Emitting →
//! Formatting → Writing → Done. Any error aborts before Writing, so a failed
//! run never touches the output file.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::{GeneratorConfig, OutputMode};
use crate::emitter::{emit_module, header};
use crate::error::{GenError, Result};
use crate::formatter::render;
use crate::loader::{LoadOptions, TranslationFile, load_translation_file};
use crate::scanner::scan_translation_dir;
use crate::writer::{WriteOutcome, check_output, write_output};

/// The generated source and the files it was built from.
#[derive(Debug, Clone)]
pub struct Rendered {
    pub source: String,
    pub files: Vec<TranslationFile>,
}

/// Summary of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    /// Canonical tag and message count per language, in table order
    pub languages: Vec<(String, usize)>,
    /// Every translation file that was read
    pub inputs: Vec<PathBuf>,
    pub output: PathBuf,
    pub outcome: WriteOutcome,
}

impl GenerationReport {
    pub fn message_count(&self) -> usize {
        self.languages.iter().map(|(_, count)| count).sum()
    }

    /// Emit `cargo:rerun-if-changed` lines for a build script.
    pub fn rerun_if_changed_lines(&self, source_dir: &Path) -> Vec<String> {
        std::iter::once(source_dir)
            .chain(self.inputs.iter().map(PathBuf::as_path))
            .map(|path| format!("cargo:rerun-if-changed={}", path.display()))
            .collect()
    }
}

/// Run the full pipeline: scan, load, emit, format and write (or check).
pub fn generate(config: &GeneratorConfig) -> Result<GenerationReport> {
    info!("start running {}", crate::config::GENERATOR_NAME);

    let rendered = render_translations(config)?;
    let output = config.output_path();

    debug!("writing {}", output.display());
    let outcome = match config.mode() {
        OutputMode::Write => write_output(output, &rendered.source)?,
        OutputMode::Check => check_output(output, &rendered.source)?,
    };

    match outcome {
        WriteOutcome::Written => info!("wrote {}", output.display()),
        WriteOutcome::Unchanged => info!("{} unchanged", output.display()),
        WriteOutcome::UpToDate => info!("{} is up to date", output.display()),
    }

    Ok(GenerationReport {
        languages: rendered
            .files
            .iter()
            .map(|file| (file.tag.to_string(), file.messages.len()))
            .collect(),
        inputs: rendered.files.iter().map(|file| file.path.clone()).collect(),
        output: output.to_path_buf(),
        outcome,
    })
}

/// Everything except writing: returns the text the output file would hold.
pub fn render_translations(config: &GeneratorConfig) -> Result<Rendered> {
    let runtime: syn::Path =
        syn::parse_str(config.runtime_crate()).map_err(|source| GenError::InvalidRuntimePath {
            path: config.runtime_crate().to_string(),
            source,
        })?;

    debug!("scanning {}", config.source_dir().display());
    let paths = scan_translation_dir(config.source_dir())?;

    let options = LoadOptions {
        strict_forms: config.strict_forms(),
    };
    let files = load_all(&paths, options)?;

    debug!("emitting {} languages", files.len());
    let tokens = emit_module(&files, &runtime);

    debug!("formatting generated module");
    let source = render(&header(), tokens);

    Ok(Rendered { source, files })
}

fn load_all(paths: &[PathBuf], options: LoadOptions) -> Result<Vec<TranslationFile>> {
    let mut files: Vec<TranslationFile> = Vec::with_capacity(paths.len());
    let mut seen: HashMap<String, usize> = HashMap::new();

    for path in paths {
        info!("start read language file {}", display_name(path));
        let bytes = fs::read(path).map_err(|e| GenError::io("read file", path, e))?;
        let file = load_translation_file(path, &bytes, options)?;

        if let Some(&index) = seen.get(file.tag.as_str()) {
            return Err(GenError::DuplicateLanguage {
                tag: file.tag.to_string(),
                first: files[index].path.clone(),
                second: file.path,
            });
        }
        seen.insert(file.tag.to_string(), files.len());

        info!(
            "language file {} build done ({} messages as '{}')",
            display_name(path),
            file.messages.len(),
            file.tag
        );
        files.push(file);
    }

    Ok(files)
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
