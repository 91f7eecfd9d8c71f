use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use dashstate::action::Action;
use dashstate::bootstrap::{BootstrapPayload, Initializer, RequestParams};
use dashstate::config::Config;
use dashstate::controls::builtin_control_panels;
use dashstate::logging::init_tracing;
use dashstate::root::{DashboardStore, RootState};

#[derive(Parser, Debug)]
#[command(name = "dashstate", version, about = "Derive and replay dashboard state")]
struct Cli {
    /// Path to config file (default: platform config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the initial state derived from a bootstrap payload
    Init {
        /// Bootstrap payload (JSON)
        #[arg(long)]
        bootstrap: PathBuf,
        /// Filter preset overriding the dashboard default (JSON)
        #[arg(long)]
        preselect_filters: Option<String>,
    },
    /// Apply a list of actions to the initial state and print the result
    Replay {
        /// Bootstrap payload (JSON)
        #[arg(long)]
        bootstrap: PathBuf,
        /// Actions as a JSON array or one JSON object per line
        #[arg(long)]
        actions: PathBuf,
        /// Filter preset overriding the dashboard default (JSON)
        #[arg(long)]
        preselect_filters: Option<String>,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("loading config")?;
    let initializer = Initializer::new(config, Arc::new(builtin_control_panels()));

    let state = match cli.command {
        Command::Init {
            bootstrap,
            preselect_filters,
        } => initial_state(&initializer, &bootstrap, preselect_filters)?,
        Command::Replay {
            bootstrap,
            actions,
            preselect_filters,
        } => {
            let initial = initial_state(&initializer, &bootstrap, preselect_filters)?;
            let mut store = DashboardStore::new(initial);
            for action in read_actions(&actions)? {
                let kind = dashstate::mvi::Action::kind(&action);
                let changed = store.dispatch(action);
                tracing::info!(action = kind, changed, "Replayed action");
            }
            (*store.state()).clone()
        }
    };

    println!("{}", serde_json::to_string_pretty(&state)?);
    Ok(())
}

fn initial_state(
    initializer: &Initializer,
    bootstrap: &Path,
    preselect_filters: Option<String>,
) -> Result<RootState> {
    let raw = fs::read_to_string(bootstrap)
        .with_context(|| format!("reading bootstrap payload '{}'", bootstrap.display()))?;
    let payload = BootstrapPayload::from_json(&raw)
        .with_context(|| format!("parsing bootstrap payload '{}'", bootstrap.display()))?;
    let request = RequestParams { preselect_filters };
    Ok(initializer.initial_state(payload, &request))
}

fn read_actions(path: &Path) -> Result<Vec<Action>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading actions '{}'", path.display()))?;
    parse_actions(&raw).with_context(|| format!("parsing actions '{}'", path.display()))
}

fn parse_actions(raw: &str) -> Result<Vec<Action>> {
    if raw.trim_start().starts_with('[') {
        return Ok(serde_json::from_str(raw)?);
    }
    let actions = serde_json::Deserializer::from_str(raw)
        .into_iter::<Action>()
        .collect::<Result<Vec<_>, _>>()?;
    Ok(actions)
}
