//! propconst CLI - generate a constants file from property file keys
//!
//! Usage: propconst [OPTIONS]
//!
//! Options are read from `propconst.toml` (or `--config`), then `PROPCONST_*`
//! environment variables, then command-line flags.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;

use propconst::application::{GenerateOutcome, GenerateUseCase};
use propconst::config::{self, Config, ConfigWarning, FileSetConfig, Verbosity};
use propconst::domain::ports::GenerateEventSink;
use propconst::infrastructure::{
    all_renderers, ConsoleEventSink, GlobFileSetScanner, JsonEventSink, LocalFs,
    PropertiesFileLoader,
};
use propconst::Language;

/// propconst - generate compile-checked constants from property file keys
#[derive(Parser, Debug)]
#[command(name = "propconst")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Config file (defaults to ./propconst.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Primary property file, merged first
    #[arg(long)]
    input_file: Option<PathBuf>,

    /// Destination root directory
    #[arg(long)]
    dest_dir: Option<PathBuf>,

    /// Name of the generated class
    #[arg(long)]
    class_name: Option<String>,

    /// Dotted package/namespace; becomes nested output directories
    #[arg(long)]
    package_name: Option<String>,

    /// Upper-case every constant name (`--convert-to-upper=false` to turn off)
    #[arg(
        long,
        value_name = "BOOL",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    convert_to_upper: Option<bool>,

    /// Output language
    #[arg(long, value_enum)]
    language: Option<Language>,

    /// File-set base directory (repeatable, merged in order)
    #[arg(long = "fileset", value_name = "DIR")]
    filesets: Vec<PathBuf>,

    /// Include glob for --fileset directories (repeatable)
    #[arg(long = "include", value_name = "GLOB", requires = "filesets")]
    includes: Vec<String>,

    /// Exclude glob for --fileset directories (repeatable)
    #[arg(long = "exclude", value_name = "GLOB", requires = "filesets")]
    excludes: Vec<String>,

    /// Regenerate even if the output is up to date
    #[arg(short, long)]
    force: bool,

    /// Render to stdout (or into the JSON event) without writing
    #[arg(long)]
    dry_run: bool,

    /// Emit NDJSON events on stdout
    #[arg(long)]
    json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only report errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

impl Cli {
    /// Layer command-line flags over the file/env configuration
    fn apply_to(&self, config: &mut Config) {
        if let Some(input) = &self.input_file {
            config.inputfile = Some(input.clone());
        }
        if let Some(dest) = &self.dest_dir {
            config.destdir = dest.clone();
        }
        if let Some(class_name) = &self.class_name {
            config.classname = Some(class_name.clone());
        }
        if let Some(package) = &self.package_name {
            config.packagename = Some(package.clone());
        }
        if let Some(upper) = self.convert_to_upper {
            config.converttoupper = upper;
        }
        if let Some(language) = self.language {
            config.language = language;
        }
        for dir in &self.filesets {
            config.filesets.push(FileSetConfig {
                dir: dir.clone(),
                includes: self.includes.clone(),
                excludes: self.excludes.clone(),
            });
        }

        if self.quiet {
            config.verbosity = Verbosity::Quiet;
        } else {
            match self.verbose {
                0 => {}
                1 => config.verbosity = Verbosity::Verbose,
                _ => config.verbosity = Verbosity::Debug,
            }
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (config, warnings) = match &cli.config {
        Some(path) => Config::load_with_warnings(path)?,
        None => config::load_or_default(Path::new("."))?,
    };
    let mut config = config.with_env_overrides();
    cli.apply_to(&mut config);

    if !cli.json {
        print_config_warnings(&warnings);
    }

    let options = config
        .generate_options()
        .with_force(cli.force)
        .with_dry_run(cli.dry_run);

    let events: Box<dyn GenerateEventSink> = if cli.json {
        Box::new(JsonEventSink::stdout())
    } else {
        Box::new(ConsoleEventSink::stderr(config.verbosity))
    };

    let use_case = GenerateUseCase::new(
        LocalFs::new(),
        GlobFileSetScanner::new(),
        PropertiesFileLoader::new(),
        all_renderers(),
    );

    let outcome = use_case.execute_with_events(&options, events.as_ref())?;

    if let GenerateOutcome::DryRun(artifact) = &outcome {
        if !cli.json {
            print!("{}", artifact.content());
        }
    }

    Ok(())
}

fn print_config_warnings(warnings: &[ConfigWarning]) {
    for w in warnings {
        if let Some(line) = w.line {
            eprintln!("⚠ Unknown config key '{}' in {}:{}", w.key, w.file.display(), line);
        } else {
            eprintln!("⚠ Unknown config key '{}' in {}", w.key, w.file.display());
        }

        if let Some(suggestion) = &w.suggestion {
            eprintln!("   Did you mean '{}'?\n", suggestion);
        }
    }
}
