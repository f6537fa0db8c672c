mod demo;
mod surface;

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;

use anyhow::{Context, Result};
use booster_core::{BoosterManager, ShowOutcome, SurfaceResponse, UserAction, select_next};
use booster_store::{
    BoosterStorage, DATABASE_FILE, default_data_dir, load_catalog, load_view_configurations,
};
use clap::{Parser, Subcommand, ValueEnum};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::surface::TerminalSurface;

/// Catalog filename looked up in the data directory when `--catalog` is not given.
const CATALOG_FILE: &str = "boosters.json";

#[derive(Parser)]
#[command(name = "booster-demo", about = "Onboarding booster demo app")]
struct Cli {
    /// Directory holding the demo database and default catalog
    #[arg(long, global = true, env = "BOOSTER_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Enable verbose debug output
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the app: show the root screen, then a booster if one is due
    Launch {
        /// Booster list (JSON); defaults to boosters.json in the data directory
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Per-booster view configuration (TOML)
        #[arg(long)]
        view_config: Option<PathBuf>,

        /// Wait this long before presenting, so the root screen is drawn first
        #[arg(long, default_value_t = 500)]
        delay_ms: u64,

        /// Answer the booster card automatically instead of reading stdin
        #[arg(long, value_enum)]
        respond: Option<Respond>,
    },

    /// Show or change dev mode (takes effect on next launch)
    DevMode {
        #[arg(value_enum)]
        state: Option<Toggle>,
    },

    /// Clear all viewed booster records
    Reset {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// Show dev mode and the viewed state of every booster
    Status {
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Respond {
    Primary,
    Dismiss,
}

impl From<Respond> for SurfaceResponse {
    fn from(r: Respond) -> Self {
        match r {
            Respond::Primary => SurfaceResponse::PrimaryAction,
            Respond::Dismiss => SurfaceResponse::Dismissed,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum Toggle {
    On,
    Off,
}

fn data_dir(cli: &Cli) -> PathBuf {
    cli.data_dir.clone().unwrap_or_else(default_data_dir)
}

fn open_storage(cli: &Cli) -> Result<BoosterStorage> {
    let path = data_dir(cli).join(DATABASE_FILE);
    BoosterStorage::open(&path)
        .with_context(|| format!("failed to open booster storage at {}", path.display()))
}

fn catalog_path(cli: &Cli, explicit: Option<&Path>) -> PathBuf {
    explicit
        .map(Path::to_path_buf)
        .unwrap_or_else(|| data_dir(cli).join(CATALOG_FILE))
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into())
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.command {
        Commands::Launch {
            catalog,
            view_config,
            delay_ms,
            respond,
        } => {
            cmd_launch(
                &cli,
                catalog.as_deref(),
                view_config.as_deref(),
                *delay_ms,
                *respond,
            )
            .await
        }
        Commands::DevMode { state } => cmd_dev_mode(&cli, *state).await,
        Commands::Reset { yes } => cmd_reset(&cli, *yes).await,
        Commands::Status { catalog } => cmd_status(&cli, catalog.as_deref()).await,
    }
}

async fn read_stdin_line() -> Option<String> {
    let mut line = String::new();
    match BufReader::new(tokio::io::stdin()).read_line(&mut line).await {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line),
    }
}

async fn cmd_launch(
    cli: &Cli,
    catalog: Option<&Path>,
    view_config: Option<&Path>,
    delay_ms: u64,
    respond: Option<Respond>,
) -> Result<ExitCode> {
    let storage = open_storage(cli)?;

    // Read once; toggling only applies to the next launch.
    let dev_mode = storage.dev_mode().await.unwrap_or_else(|e| {
        tracing::warn!("failed to read dev mode, assuming off: {e}");
        false
    });
    print!("{}", demo::render_root_screen(dev_mode));

    let catalog = load_catalog(&catalog_path(cli, catalog));
    let view_configurations = match view_config {
        Some(path) => load_view_configurations(path).unwrap_or_else(|e| {
            tracing::warn!("{e}, using built-in view configurations");
            demo::demo_view_configurations()
        }),
        None => demo::demo_view_configurations(),
    };

    let manager = BoosterManager::new(storage, catalog, view_configurations, dev_mode);

    tokio::time::sleep(Duration::from_millis(delay_ms)).await;

    let mut surface = TerminalSurface::stdin(respond.map(SurfaceResponse::from));
    let outcome = tokio::select! {
        outcome = manager.show_booster_if_needed(&mut surface) => outcome,
        Ok(()) = tokio::signal::ctrl_c() => {
            tracing::info!("interrupted, abandoning booster presentation");
            Ok(ShowOutcome::Abandoned)
        }
    };

    match outcome {
        Ok(ShowOutcome::Presented(action)) => {
            handle_user_action(&action);
            if let Err(e) = manager.acknowledge(&action).await {
                tracing::error!("failed to record viewed booster: {e}");
            }
        }
        Ok(ShowOutcome::NothingToShow) => println!("No booster to show."),
        Ok(ShowOutcome::Abandoned) => println!("Booster closed without an answer."),
        Ok(ShowOutcome::Busy) => tracing::debug!("booster presentation already running"),
        Err(e) => tracing::error!("failed to check viewed boosters: {e}"),
    }

    Ok(ExitCode::SUCCESS)
}

fn handle_user_action(action: &UserAction) {
    match action {
        UserAction::PrimaryActionTapped(id) => {
            println!("User tapped action for booster: {id}");
            if let Some(target) = demo::navigation_target(id) {
                println!("{target}");
            }
        }
        UserAction::Dismissed(id) => println!("User dismissed booster: {id}"),
    }
}

async fn cmd_dev_mode(cli: &Cli, state: Option<Toggle>) -> Result<ExitCode> {
    let storage = open_storage(cli)?;

    let Some(state) = state else {
        let enabled = storage
            .dev_mode()
            .await
            .context("failed to read dev mode")?;
        println!("Dev Mode: {}", demo::on_off(enabled));
        println!("{}", demo::DEV_MODE_INFO);
        return Ok(ExitCode::SUCCESS);
    };

    let enabled = matches!(state, Toggle::On);
    storage
        .set_dev_mode(enabled)
        .await
        .context("failed to save dev mode")?;

    println!(
        "Dev Mode {}",
        if enabled { "Enabled" } else { "Disabled" }
    );
    println!("{}", demo::RESTART_NOTICE);
    Ok(ExitCode::SUCCESS)
}

async fn cmd_reset(cli: &Cli, yes: bool) -> Result<ExitCode> {
    if !yes {
        println!("Reset Demo?");
        println!("{}", demo::RESET_PROMPT);
        print!("Reset? [y/N] ");
        let _ = std::io::Write::flush(&mut std::io::stdout());

        let confirmed = read_stdin_line()
            .await
            .map(|l| matches!(l.trim().to_ascii_lowercase().as_str(), "y" | "yes" | "reset"))
            .unwrap_or(false);
        if !confirmed {
            println!("Reset cancelled.");
            return Ok(ExitCode::SUCCESS);
        }
    }

    let storage = open_storage(cli)?;
    match storage.reset().await {
        Ok(_) => {
            println!("Reset Complete");
            println!("{}", demo::RESET_DONE);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            tracing::error!("error clearing viewed boosters: {e}");
            eprintln!("Reset failed. Some viewed Booster records may not have been cleared.");
            Ok(ExitCode::FAILURE)
        }
    }
}

async fn cmd_status(cli: &Cli, catalog: Option<&Path>) -> Result<ExitCode> {
    let storage = open_storage(cli)?;
    let dev_mode = storage
        .dev_mode()
        .await
        .context("failed to read dev mode")?;
    let records = storage
        .viewed_records()
        .await
        .context("failed to read viewed boosters")?;
    let catalog = load_catalog(&catalog_path(cli, catalog));

    let viewed = records.iter().map(|r| r.booster_id.clone()).collect();
    let next = select_next(&catalog, &viewed, dev_mode)
        .map(|b| b.id.as_str())
        .unwrap_or("(none)");

    println!("dev mode:   {}", demo::on_off(dev_mode));
    println!("boosters:   {}", catalog.len());
    println!("viewed:     {}", records.len());
    println!("next:       {next}");
    for booster in catalog.iter() {
        match records.iter().find(|r| r.booster_id == booster.id) {
            Some(record) => println!(
                "  [viewed] {:<24} priority {:<4} since {}",
                booster.id, booster.priority, record.viewed_at
            ),
            None => println!(
                "  [new]    {:<24} priority {}",
                booster.id, booster.priority
            ),
        }
    }
    Ok(ExitCode::SUCCESS)
}
