use anyhow::{Context, Result, bail};
use clap::{ArgAction, Parser};
use md2html_config::Config;
use md2html_engine::convert_file;
use std::{path::PathBuf, process};

/// Converts a lightweight markup file to HTML, one paragraph at a time.
#[derive(Parser, Debug)]
#[command(name = "md2html", version, about)]
struct Cli {
    /// Markup file to convert
    input: PathBuf,

    /// Where to write the HTML (defaults to the configured output directory)
    output: Option<PathBuf>,

    /// Config file to use instead of ~/.config/md2html/config.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// More log output (repeat for more)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Only report errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

impl Cli {
    fn log_level(&self) -> log::LevelFilter {
        if self.quiet {
            return log::LevelFilter::Error;
        }
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;
    let output = resolve_output(cli, &config)?;

    if !cli.quiet {
        println!("Conversion started...");
    }
    log::info!("converting {} -> {}", cli.input.display(), output.display());

    let stats = convert_file(&cli.input, &output)
        .with_context(|| format!("failed to convert {}", cli.input.display()))?;
    log::info!(
        "wrote {} paragraphs ({} headings)",
        stats.paragraphs,
        stats.headings
    );

    if !cli.quiet {
        println!(
            "Success: file {} converted to HTML and saved as {}.",
            cli.input.display(),
            output.display()
        );
    }
    Ok(())
}

fn load_config(cli: &Cli) -> Result<Config> {
    let config = match &cli.config {
        Some(path) => {
            log::debug!("Config path: {}", path.display());
            match Config::load_from_path(path)? {
                Some(config) => config,
                None => bail!("config file not found: {}", path.display()),
            }
        }
        None => Config::load()?.unwrap_or_default(),
    };
    Ok(config)
}

fn resolve_output(cli: &Cli, config: &Config) -> Result<PathBuf> {
    if let Some(output) = &cli.output {
        return Ok(output.clone());
    }
    config
        .output_path_for(&cli.input)
        .context("input and/or output file not provided (no output path given and no output_dir configured)")
}
