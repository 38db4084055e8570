use anyhow::{Context, Result, bail};
use clap::Parser;
use lesson_blocks_config::{Config, OutputFormat};
use lesson_blocks_engine::{io, parse_blocks, parse_lesson, render_html};
use std::process;

mod settings;

use settings::{Cli, Settings};

fn main() {
    let cli = Cli::parse();

    // RUST_LOG, when set, takes precedence over the default level
    env_logger::Builder::new()
        .filter_level(if cli.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .parse_default_env()
        .init();

    if let Err(err) = run(&cli) {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

fn load_config(cli: &Cli) -> Result<Config> {
    // Only the default location is optional; a path given with --config must exist
    if let Some(path) = &cli.config
        && !path.exists()
    {
        bail!("Config file not found: {}", path.display());
    }

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    log::debug!("Config path: {}", config_path.display());

    match Config::load_from_path(&config_path)? {
        Some(config) => {
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        }
        None => {
            log::debug!("No config file found, using defaults");
            Ok(Config::default())
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;
    let settings = Settings::resolve(cli, &config);
    log::debug!("{settings:?}");

    let text = match cli.input_path() {
        Some(path) => io::read_lesson(path)
            .with_context(|| format!("Failed to read lesson {}", path.display()))?,
        None => io::read_lesson_from(std::io::stdin().lock())
            .context("Failed to read lesson from stdin")?,
    };

    let blocks = if settings.clean {
        parse_lesson(&text, &settings.parse)
    } else {
        parse_blocks(&text, &settings.parse)
    };
    log::info!("Parsed {} blocks", blocks.len());

    let rendered = match settings.format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(&blocks).context("Failed to serialize blocks")?
        }
        OutputFormat::Html => render_html(&blocks),
    };

    match &settings.output {
        Some(path) => {
            io::write_output(path, &rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            log::info!("Wrote {}", path.display());
        }
        None => println!("{rendered}"),
    }

    Ok(())
}
