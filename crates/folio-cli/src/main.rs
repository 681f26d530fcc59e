mod config;
mod track;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use config::Config;
use folio_core::Site;
use std::env;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(author, version, about = "Inspect and validate the portfolio site content")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Site content file (overrides env var and config file)
    #[arg(long, global = true)]
    content: Option<PathBuf>,

    /// Show debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List the navigable sections in order
    Sections {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Validate the site content
    Check,
    /// Replay scroll offsets against a layout and report the active section
    Track {
        /// TOML file with [[section]] entries (id, top, height)
        #[arg(short, long)]
        layout: PathBuf,

        /// Raw vertical scroll offsets, applied in order
        #[arg(short, long, required = true, num_args = 1.., allow_negative_numbers = true)]
        scroll: Vec<f64>,

        /// Section clicked before the first scroll
        #[arg(long)]
        from: Option<String>,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigAction {
    /// Set a configuration value
    Set {
        /// The key to set (content)
        key: String,
        /// The value to set
        value: String,
    },
    /// Get a configuration value
    Get {
        /// The key to get (content)
        key: String,
    },
    /// Show the config file path
    Path,
    /// Clear a configuration value
    Clear {
        /// The key to clear (content)
        key: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Config { action } => handle_config(action),
        Commands::Sections { json } => {
            let site = resolve_site(cli.content)?;
            list_sections(&site, json)
        }
        Commands::Check => {
            let site = resolve_site(cli.content)?;
            check(&site);
            Ok(())
        }
        Commands::Track {
            layout,
            scroll,
            from,
        } => {
            let site = resolve_site(cli.content)?;
            run_track(&site, &layout, &scroll, from.as_deref())
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn handle_config(action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Set { key, value } => {
            let mut config = Config::load()?;
            match key.as_str() {
                "content" => {
                    let path = PathBuf::from(&value);
                    // Refuse to point at content that would not load
                    Site::load(&path).with_context(|| format!("Not saving '{}'", value))?;
                    config.set_content(path);
                    config.save()?;
                    println!("{}", format!("Content file set to: {}", value).green());
                }
                _ => bail!("Unknown config key: {}. Available keys: content", key),
            }
        }
        ConfigAction::Get { key } => {
            let config = Config::load()?;
            match key.as_str() {
                "content" => {
                    if let Some(path) = config.get_content() {
                        println!("content: {}", path.display());
                    } else {
                        println!("{}", "content: not set (using built-in site)".dimmed());
                    }
                }
                _ => bail!("Unknown config key: {}. Available keys: content", key),
            }
        }
        ConfigAction::Path => {
            if let Some(path) = Config::path() {
                println!("{}", path.display());
            } else {
                bail!("Could not determine config path");
            }
        }
        ConfigAction::Clear { key } => {
            let mut config = Config::load()?;
            match key.as_str() {
                "content" => {
                    config.clear_content();
                    config.save()?;
                    println!("{}", "Content file cleared (using built-in site).".green());
                }
                _ => bail!("Unknown config key: {}. Available keys: content", key),
            }
        }
    }
    Ok(())
}

/// Resolve site content from: CLI flag > env var > config file > built-in
fn resolve_site(cli_content: Option<PathBuf>) -> Result<Site> {
    let env_content = env::var("FOLIO_CONTENT").ok().map(PathBuf::from);
    let config_content = Config::load()?.content;

    match determine_content_path(cli_content, env_content, config_content) {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading site content");
            Site::load(&path)
                .with_context(|| format!("Failed to load site content: {}", path.display()))
        }
        None => Site::embedded().context("Built-in site content is invalid"),
    }
}

/// Pure logic to determine content file precedence
fn determine_content_path(
    cli_content: Option<PathBuf>,
    env_content: Option<PathBuf>,
    config_content: Option<PathBuf>,
) -> Option<PathBuf> {
    cli_content
        .or(env_content.filter(|p| !p.as_os_str().is_empty()))
        .or(config_content)
}

fn list_sections(site: &Site, json: bool) -> Result<()> {
    let registry = site.registry();

    if json {
        let sections: Vec<_> = registry.iter().collect();
        let out = serde_json::to_string_pretty(&sections).context("Failed to serialize sections")?;
        println!("{}", out);
        return Ok(());
    }

    for (index, section) in registry.iter().enumerate() {
        let marker = if index == 0 { " (initial)".dimmed().to_string() } else { String::new() };
        println!("{:<16} {}{}", section.id.cyan(), section.label, marker);
    }
    Ok(())
}

fn check(site: &Site) {
    let config = site.config();
    println!("{}", "Site content is valid.".green().bold());
    println!(
        "{}",
        format!(
            "{} sections, {} experiences, {} projects, {} certifications",
            site.registry().len(),
            config.experiences.len(),
            config.projects.len(),
            config.certifications.len()
        )
        .dimmed()
    );
    println!(
        "{}",
        format!(
            "nav offset {}px, scroll throttle {}ms",
            site.tracker().offset(),
            site.throttle().interval_ms()
        )
        .dimmed()
    );

    for warning in site.warnings() {
        println!("{} {}", "warning:".yellow().bold(), warning);
    }
}

fn run_track(site: &Site, layout: &std::path::Path, scrolls: &[f64], from: Option<&str>) -> Result<()> {
    let layout = track::load_layout(layout)?;
    let steps = track::replay(site, &layout, from, scrolls)?;

    if let Some(id) = from {
        println!("{}", format!("clicked {}", id).dimmed());
    }
    for step in steps {
        let status = if step.changed {
            "changed".green()
        } else {
            "kept".dimmed()
        };
        println!(
            "scroll {:>8} (adjusted {:>8}) -> {} [{}]",
            step.scroll_y,
            step.adjusted,
            step.active.cyan().bold(),
            status
        );
    }
    Ok(())
}
