use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use clap::{ArgAction, Args, Parser, Subcommand};
use tracing::{debug, info};
use wfindex::{FileIndex, FileReader, LanguageRegistry, WorkflowLanguage, path};

use crate::config::HostConfig;
use crate::logging;
use crate::output::{
    OutputFormat, write_index_human, write_json, write_languages_human, write_metadata_human,
    write_validation_human,
};
use crate::reader::LocalFileReader;
use crate::report::{IndexReport, LanguageEntry, MetadataReport, ValidationReport};

#[derive(Parser, Debug)]
#[command(
    name = "wfindex",
    version,
    about = "Discover and validate the files of a workflow in a repository checkout"
)]
pub struct Cli {
    /// Verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// YAML configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List every file that belongs to the workflow
    Index(TargetArgs),
    /// Check that the workflow has the structure its language expects
    Validate(TargetArgs),
    /// Print author and description read from the primary descriptor
    Metadata(TargetArgs),
    /// List the enabled workflow languages
    Languages(FormatArgs),
}

#[derive(Args, Debug)]
pub struct TargetArgs {
    /// Path of the primary descriptor, relative to the repository root
    pub initial_path: String,

    /// Repository checkout directory
    #[arg(short, long, default_value = ".")]
    pub root: PathBuf,

    /// Language short name; detected from the initial path when omitted
    #[arg(short, long)]
    pub language: Option<String>,

    #[command(flatten)]
    pub format: FormatArgs,
}

#[derive(Args, Debug)]
pub struct FormatArgs {
    /// Output format (defaults to the configured format)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

/// How a successful run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    /// The workflow was checked and found invalid.
    Invalid,
}

impl Outcome {
    #[must_use]
    pub fn exit_code(self) -> ExitCode {
        match self {
            Self::Success => ExitCode::SUCCESS,
            Self::Invalid => ExitCode::from(2),
        }
    }
}

/// A resolved workflow: its language, rooted initial path and descriptor text.
struct Target<'r> {
    language: &'r dyn WorkflowLanguage,
    initial_path: String,
    contents: String,
    reader: LocalFileReader,
}

impl Target<'_> {
    fn index(&self) -> Result<FileIndex> {
        self.language
            .index_workflow_files(&self.initial_path, &self.contents, &self.reader)
            .with_context(|| format!("Failed to index workflow {}", self.initial_path))
    }
}

fn resolve<'r>(
    args: &TargetArgs,
    registry: &'r LanguageRegistry,
    config: &HostConfig,
) -> Result<Target<'r>> {
    if !args.root.is_dir() {
        bail!("Repository root {} is not a directory", args.root.display());
    }
    let initial_path = path::rooted(&args.initial_path);
    let language = match &args.language {
        Some(name) => registry.get(name)?,
        None => registry.detect(&initial_path)?,
    };
    debug!(
        language = language.short_name(),
        initial_path = %initial_path,
        "Resolved workflow language"
    );

    let reader = LocalFileReader::new(&args.root).with_max_file_size(config.max_file_size);
    let contents = reader
        .read_file(&initial_path)
        .with_context(|| format!("Failed to read primary descriptor {initial_path}"))?;

    Ok(Target {
        language,
        initial_path,
        contents,
        reader,
    })
}

/// Run a parsed command, writing its report to `out`.
///
/// # Errors
///
/// Returns an error if configuration is invalid, a workflow file cannot be
/// read, or the report cannot be written.
pub fn execute(cli: Cli, out: &mut dyn Write) -> Result<Outcome> {
    let config = match &cli.config {
        Some(path) => HostConfig::load(path)?,
        None => HostConfig::default(),
    };
    let registry = LanguageRegistry::from_config(&config.languages)
        .context("Failed to build language registry")?;

    match cli.command {
        Command::Index(args) => {
            let target = resolve(&args, &registry, &config)?;
            let files = target.index()?;
            let report = IndexReport {
                language: target.language.short_name(),
                initial_path: &target.initial_path,
                files: &files,
            };
            match args.format.format.unwrap_or(config.format) {
                OutputFormat::Json => write_json(&report, out)?,
                OutputFormat::Human => write_index_human(&report, out)?,
            }
            Ok(Outcome::Success)
        }
        Command::Validate(args) => {
            let target = resolve(&args, &registry, &config)?;
            let files = target.index()?;
            let report = ValidationReport::new(
                target.language.short_name(),
                &target.initial_path,
                files.len(),
                target.language.validate_workflow_set(
                    &target.initial_path,
                    &target.contents,
                    &files,
                ),
                target.language.validate_test_parameter_set(&files),
            );
            info!(
                initial_path = %target.initial_path,
                valid = report.valid,
                "Validated workflow"
            );
            match args.format.format.unwrap_or(config.format) {
                OutputFormat::Json => write_json(&report, out)?,
                OutputFormat::Human => write_validation_human(&report, out)?,
            }
            Ok(if report.valid {
                Outcome::Success
            } else {
                Outcome::Invalid
            })
        }
        Command::Metadata(args) => {
            let target = resolve(&args, &registry, &config)?;
            let files = target.index()?;
            let report = MetadataReport {
                language: target.language.short_name(),
                initial_path: &target.initial_path,
                metadata: target.language.parse_metadata(
                    &target.initial_path,
                    &target.contents,
                    &files,
                ),
            };
            match args.format.format.unwrap_or(config.format) {
                OutputFormat::Json => write_json(&report, out)?,
                OutputFormat::Human => write_metadata_human(&report, out)?,
            }
            Ok(Outcome::Success)
        }
        Command::Languages(args) => {
            let languages: Vec<LanguageEntry<'_>> = registry
                .iter()
                .map(|language| LanguageEntry {
                    short_name: language.short_name(),
                    long_name: language.long_name(),
                })
                .collect();
            match args.format.unwrap_or(config.format) {
                OutputFormat::Json => write_json(&languages, out)?,
                OutputFormat::Human => write_languages_human(&languages, out)?,
            }
            Ok(Outcome::Success)
        }
    }
}

/// Parse the process arguments, set up logging and run.
///
/// # Errors
///
/// Returns any error from [`execute`].
pub fn run() -> Result<Outcome> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute(cli, &mut out)
}
