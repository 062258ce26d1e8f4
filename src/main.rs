//! Portfolio - terminal rendition of a personal portfolio
//!
//! Biography, projects and contact links behind a bottom tab bar. Activating
//! a row hands its link to the operating system.

mod clipboard;
mod config;
mod core;
mod data;
mod frontend;
mod links;
mod theme;

use crate::config::validator::validate_config;
use crate::config::Config;
use crate::core::AppCore;
use crate::data::Screen;
use crate::frontend::{Frontend, FrontendEvent, TuiFrontend};
use anyhow::{Context, Result};
use clap::{Parser as ClapParser, Subcommand};
use std::path::PathBuf;

#[derive(ClapParser)]
#[command(name = "portfolio")]
#[command(about = "Terminal portfolio: bio, projects and contacts", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Custom data directory (default: ~/.portfolio)
    /// Can also be set via PORTFOLIO_DIR environment variable
    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Diagnostic log file
    #[arg(long, value_name = "FILE", default_value = "portfolio.log")]
    log_file: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a page as plain text (all pages if no route is given)
    Print {
        /// personal_info, projects or contacts
        #[arg(value_name = "SCREEN")]
        route: Option<String>,

        /// Output width in columns
        #[arg(long, default_value_t = 80)]
        width: u16,
    },
    /// Validate a configuration file
    ValidateConfig {
        /// Config file to validate (defaults to the active config)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging to file (use RUST_LOG env var to control level, e.g. RUST_LOG=debug)
    // TUI apps can't log to stdout, so we write to a file
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&cli.log_file)
        .with_context(|| format!("Failed to open log file: {:?}", cli.log_file))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Mutex::new(log_file))
        .with_ansi(false) // No color codes in log file
        .init();

    // Set custom data directory if specified (via CLI or environment variable)
    if let Some(data_dir) = &cli.data_dir {
        std::env::set_var(config::DIR_ENV, data_dir);
        tracing::info!("Using custom data directory: {:?}", data_dir);
    } else if let Ok(env_dir) = std::env::var(config::DIR_ENV) {
        tracing::info!("Using data directory from {}: {}", config::DIR_ENV, env_dir);
    }

    match cli.command {
        Some(Commands::Print { route, width }) => {
            let config = load_config(cli.config.as_ref())?;
            print_pages(config, route.as_deref(), width)
        }
        Some(Commands::ValidateConfig { file }) => {
            let result = match file.as_ref().or(cli.config.as_ref()) {
                Some(path) => {
                    println!("Validating config file: {:?}", path);
                    Config::load_from_path(path)
                }
                None => {
                    println!("Validating active config");
                    Config::load()
                }
            };
            validate(result);
            Ok(())
        }
        None => {
            let config = load_config(cli.config.as_ref())?;
            run_tui(config)
        }
    }
}

fn load_config(path: Option<&PathBuf>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Report config problems and exit non-zero on errors
fn validate(config: Result<Config>) {
    let config = match config {
        Ok(config) => {
            println!("✓ Config loaded successfully");
            config
        }
        Err(e) => {
            eprintln!("✗ Failed to load config: {:#}", e);
            std::process::exit(1);
        }
    };

    let result = validate_config(&config);
    for issue in result.errors() {
        eprintln!("✗ Error: {}", issue.message());
    }
    for issue in result.warnings() {
        println!("⚠ Warning: {}", issue.message());
    }

    if !result.has_errors() && !result.has_warnings() {
        println!("✓ Config is valid with no issues");
    } else {
        let errors = result.errors().len();
        let warnings = result.warnings().len();
        if errors > 0 {
            eprintln!("\n✗ Found {} error(s)", errors);
        }
        if warnings > 0 {
            println!("⚠ Found {} warning(s)", warnings);
        }
    }

    if !result.is_valid() {
        std::process::exit(1);
    }
}

fn print_pages(config: Config, route: Option<&str>, width: u16) -> Result<()> {
    let mut core = AppCore::new(config);

    let screens = match route {
        Some(route) => vec![core.shell.navigate(route)?],
        None => Screen::ALL.to_vec(),
    };

    for (i, screen) in screens.into_iter().enumerate() {
        if i > 0 {
            println!();
        }
        core.shell.select(screen);
        for line in frontend::tui::pages::render_to_lines(&mut core, width) {
            println!("{}", line);
        }
    }

    Ok(())
}

/// Run TUI frontend
fn run_tui(config: Config) -> Result<()> {
    tracing::info!("Starting portfolio");

    let mut frontend = TuiFrontend::new(&config.ui)?;
    let mut core = AppCore::new(config);

    let result = event_loop(&mut frontend, &mut core);

    frontend.cleanup()?;
    tracing::info!("Exited cleanly");
    result
}

fn event_loop(frontend: &mut impl Frontend, core: &mut AppCore) -> Result<()> {
    while core.running {
        if core.needs_render {
            frontend.render(core)?;
            core.needs_render = false;
        }

        for event in frontend.poll_events()? {
            match event {
                FrontendEvent::Key { code, modifiers } => {
                    core.handle_key(code, modifiers);
                }
                FrontendEvent::Mouse { .. } => {
                    if let Some(action) = frontend.mouse_action(core, &event) {
                        core.apply(action);
                    }
                }
                FrontendEvent::Resize { width, height } => {
                    tracing::debug!("Terminal resized to {}x{}", width, height);
                    core.needs_render = true;
                }
            }

            if !core.running {
                break;
            }
        }
    }

    Ok(())
}
