use std::path::{Path, PathBuf};

use clap::Parser;
use lesson_blocks_config::{Config, OutputFormat};
use lesson_blocks_engine::ParseOptions;

/// Turn loosely structured lesson text into typed blocks.
#[derive(Debug, Parser)]
#[command(name = "lesson-blocks", version, about)]
pub struct Cli {
    /// Lesson text file; omit or pass `-` to read stdin
    pub input: Option<PathBuf>,

    /// Output format (defaults to the config file, then json)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Treat headings-looking lines as headings
    #[arg(long)]
    pub detect_headings: bool,

    /// Parse the text as-is, skipping emphasis and bullet cleanup
    #[arg(long)]
    pub no_clean: bool,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Config file to use instead of ~/.config/lesson-blocks/config.toml
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// The input file, or `None` for stdin.
    pub fn input_path(&self) -> Option<&Path> {
        self.input.as_deref().filter(|p| p.as_os_str() != "-")
    }
}

/// Effective settings after layering CLI flags over the config file.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub parse: ParseOptions,
    pub clean: bool,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
}

impl Settings {
    pub fn resolve(cli: &Cli, config: &Config) -> Self {
        let format = cli.format.unwrap_or(config.format);

        let output = cli.output.clone().or_else(|| {
            let dir = config.output_dir.as_ref()?;
            let stem = cli.input_path()?.file_stem()?;
            Some(dir.join(stem).with_extension(extension(format)))
        });

        Self {
            parse: ParseOptions {
                detect_headings: cli.detect_headings || config.detect_headings,
            },
            clean: config.clean && !cli.no_clean,
            format,
            output,
        }
    }
}

pub fn extension(format: OutputFormat) -> &'static str {
    match format {
        OutputFormat::Json => "json",
        OutputFormat::Html => "html",
    }
}
