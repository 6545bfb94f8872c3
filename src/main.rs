use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use onboard_cli::cli::{handle_export_command, handle_wizard_command, ExportFormat, WizardCommands};
use onboard_cli::config::{paths::OnboardPaths, settings::Settings};
use onboard_cli::tui::run_tui;
use onboard_cli::wizard::WizardController;

#[derive(Parser)]
#[command(
    name = "onboard",
    author = "Kaylee Beyene",
    version,
    about = "Terminal-based investor onboarding",
    long_about = "onboard walks an investor through a guided onboarding flow: \
                  eligibility, identity, tax and financial details, documents and \
                  review. Progress is saved locally so you can stop and resume \
                  at any time."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI
    #[command(alias = "ui")]
    Tui,

    #[command(flatten)]
    Wizard(WizardCommands),

    /// Export the saved snapshot
    Export {
        /// Output format
        #[arg(short, long, value_enum, default_value = "json")]
        format: ExportFormat,
        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Show current configuration and paths
    Config,
}

fn init_logging(paths: &OnboardPaths, settings: &Settings) -> Result<()> {
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(paths.log_file())
        .with_context(|| format!("Failed to open log file {}", paths.log_file().display()))?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.log_filter.as_str()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(Mutex::new(log_file))
        .init();

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = OnboardPaths::new()?;
    paths.ensure_directories()?;
    let settings = Settings::load_or_create(&paths)?;

    init_logging(&paths, &settings)?;
    debug!(base_dir = %paths.base_dir().display(), "starting");

    let mut wizard = WizardController::open(&paths)?;

    match cli.command {
        Some(Commands::Tui) | None => {
            run_tui(wizard, &settings)?;
        }
        Some(Commands::Wizard(cmd)) => {
            handle_wizard_command(&mut wizard, &settings, cmd)?;
        }
        Some(Commands::Export {
            format,
            output,
            pretty,
        }) => {
            handle_export_command(wizard.record(), format, output, pretty)?;
        }
        Some(Commands::Config) => {
            println!("onboard-cli Configuration");
            println!("=========================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Snapshot file:    {}", paths.snapshot_file().display());
            println!("Audit log:        {}", paths.audit_log().display());
            println!("Log file:         {}", paths.log_file().display());
            println!();
            println!("Settings:");
            println!("  Date format:    {}", settings.date_format);
            println!("  Tick rate (ms): {}", settings.tick_rate_ms);
            println!("  Log filter:     {}", settings.log_filter);
            println!("  Mask tax ID:    {}", settings.mask_tax_id);
        }
    }

    Ok(())
}
