use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use i18n_table_gen::config::{DEFAULT_OUTPUT_PATH, DEFAULT_RUNTIME_CRATE, DEFAULT_SOURCE_DIR};
use i18n_table_gen::{GeneratorConfig, OutputMode, generate};
use tracing::{Level, error};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::writer::MakeWriterExt;

/// Compile `<language-tag>.json` translation files into a Rust module.
///
/// Without arguments, reads `i18n/` and writes `src/translation.rs`
/// relative to the current directory.
#[derive(Parser, Debug)]
#[command(name = "i18n-table-gen", version)]
struct Cli {
    /// Directory holding one JSON file per language
    #[arg(long, value_name = "DIR", default_value = DEFAULT_SOURCE_DIR)]
    input: PathBuf,

    /// Generated Rust module to write
    #[arg(long, value_name = "FILE", default_value = DEFAULT_OUTPUT_PATH)]
    output: PathBuf,

    /// Path the generated code imports Message and Translations from
    #[arg(long, value_name = "PATH", default_value = DEFAULT_RUNTIME_CRATE)]
    runtime_crate: String,

    /// Fail if the output file is out of date instead of writing it
    #[arg(long)]
    check: bool,

    /// Treat unexpected form keys as errors
    #[arg(long)]
    strict_forms: bool,

    /// Show more detail (repeat for trace output)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Only report warnings and errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

impl Cli {
    fn log_level(&self) -> Level {
        match (self.quiet, self.verbose) {
            (true, _) => Level::WARN,
            (false, 0) => Level::INFO,
            (false, 1) => Level::DEBUG,
            (false, _) => Level::TRACE,
        }
    }

    fn config(&self) -> GeneratorConfig {
        let mut config = GeneratorConfig::new();
        config
            .with_source_dir(&self.input)
            .with_output_path(&self.output)
            .with_runtime_crate(&self.runtime_crate)
            .with_strict_forms(self.strict_forms)
            .with_mode(if self.check {
                OutputMode::Check
            } else {
                OutputMode::Write
            });
        config
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Progress goes to stdout, warnings and errors to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::from_level(cli.log_level()).into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr.with_max_level(Level::WARN).or_else(std::io::stdout))
        .with_target(false)
        .without_time()
        .init();

    match generate(&cli.config()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
