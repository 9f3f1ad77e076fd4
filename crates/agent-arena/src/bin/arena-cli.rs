//! OKBET Arena CLI
//!
//! Runs one arena query and prints the result to stdout. Failures print the
//! same `{ "error": ... }` payload an LLM client would receive and exit
//! non-zero.
//!
//! # Usage
//!
//! ```bash
//! # Override the API root if needed
//! export ARENA_API_BASE="https://okbet-web-api.onrender.com/api/public/arena"
//!
//! cargo run --bin arena-cli -p agent-arena -- leaderboard --format table
//! cargo run --bin arena-cli -p agent-arena -- compare grok-4 gpt-5.1
//! ```

use agent_arena::prediction::{STATUS_ANALYZING, STATUS_FETCHING};
use agent_arena::views::{CompetitionSummary, LeaderboardView};
use agent_arena::{ArenaAggregator, ArenaConfig, StreamEvent, arena_registry};
use agent_tools::ToolOutput;
use agent_utils::LogFormat;
use clap::{Parser, Subcommand, ValueEnum};
use comfy_table::{Table, presets::UTF8_FULL};
use serde_json::{Value, json};
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

const TABLE_UNSUPPORTED: &str = "--format table is only supported by `leaderboard` and `summary`";

#[derive(Parser, Debug)]
#[command(name = "arena-cli")]
#[command(about = "Query the OKBET Arena AI trading competition", long_about = None)]
struct Args {
    /// API root, overrides ARENA_API_BASE
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Request timeout in seconds, overrides ARENA_REQUEST_TIMEOUT_SECS
    #[arg(long, global = true)]
    timeout: Option<u64>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Json, global = true)]
    format: OutputFormat,

    /// Log format on stderr
    #[arg(long, value_enum, default_value_t = LogStyle::Pretty, env = "ARENA_LOG_FORMAT", global = true)]
    log_format: LogStyle,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Current rankings, balances and trade statistics
    Leaderboard,
    /// Open positions of one agent
    Positions {
        /// Agent identifier, e.g. grok-4
        agent: String,
    },
    /// Open positions of every agent
    AllPositions,
    /// Compare two agents market by market
    Compare { agent1: String, agent2: String },
    /// Leader, gaps and key statistics
    Summary,
    /// Raw leaderboard and positions used for predictions
    Snapshot {
        /// Emit the prediction stream's server-sent event frames
        #[arg(long)]
        sse: bool,
    },
    /// List the available tools and their input schemas
    Tools,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Table,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum LogStyle {
    Pretty,
    Json,
}

impl Command {
    fn supports_table(&self) -> bool {
        matches!(self, Self::Leaderboard | Self::Summary)
    }
}

impl From<LogStyle> for LogFormat {
    fn from(style: LogStyle) -> Self {
        match style {
            LogStyle::Pretty => LogFormat::Pretty,
            LogStyle::Json => LogFormat::Json,
        }
    }
}

fn build_config(args: &Args) -> anyhow::Result<ArenaConfig> {
    let mut config = ArenaConfig::default().with_env()?;
    if let Some(base_url) = &args.base_url {
        config.base_url.clone_from(base_url);
    }
    if let Some(secs) = args.timeout {
        config.request_timeout = Duration::from_secs(secs);
    }
    config.validate()?;
    Ok(config)
}

fn print_json(value: &Value) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print a tool result and map its error flag to the exit code
fn report(output: &ToolOutput) -> anyhow::Result<ExitCode> {
    print_json(&output.content)?;
    Ok(if output.is_error {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

fn report_error(error: &impl std::fmt::Display) -> anyhow::Result<ExitCode> {
    report(&ToolOutput::error(error.to_string()))
}

fn leaderboard_table(view: &LeaderboardView) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec![
        "Rank", "Agent", "Balance", "PnL", "Win Rate", "Trades", "W/L", "Open",
    ]);
    for row in &view.leaderboard {
        table.add_row(vec![
            row.rank.to_string(),
            row.name.clone(),
            row.balance.clone(),
            row.total_pnl.clone(),
            row.win_rate.clone(),
            row.total_trades.to_string(),
            format!("{}/{}", row.winning_trades, row.losing_trades),
            row.open_positions.to_string(),
        ]);
    }
    table
}

fn summary_table(summary: &CompetitionSummary) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec![
        "Rank", "Agent", "Balance", "PnL", "Gap", "Win Rate", "Trades", "Open",
    ]);
    for ranking in &summary.rankings {
        table.add_row(vec![
            ranking.rank.to_string(),
            ranking.name.clone(),
            ranking.balance.clone(),
            ranking.pnl.clone(),
            ranking.gap_to_leader.clone(),
            ranking.win_rate.clone(),
            ranking.trades.to_string(),
            ranking.open_positions.to_string(),
        ]);
    }
    table
}

async fn run_table(aggregator: &ArenaAggregator, command: &Command) -> anyhow::Result<ExitCode> {
    match command {
        Command::Leaderboard => match aggregator.leaderboard_view().await {
            Ok(view) => println!("{}", leaderboard_table(&view)),
            Err(e) => return report_error(&e),
        },
        Command::Summary => match aggregator.competition_summary().await {
            Ok(summary) => {
                println!("Leader: {}", summary.current_leader);
                println!("Competition ends: {}", summary.competition_end_date);
                println!("{}", summary_table(&summary));
                println!("Highest win rate: {}", summary.key_stats.highest_win_rate);
                println!("Most trades: {}", summary.key_stats.most_trades);
                println!("Most open positions: {}", summary.key_stats.most_open_positions);
            }
            Err(e) => return report_error(&e),
        },
        _ => return report_error(&TABLE_UNSUPPORTED),
    }
    Ok(ExitCode::SUCCESS)
}

/// Replay the prediction stream's framing around a fetched snapshot
async fn run_snapshot_sse(aggregator: &ArenaAggregator) -> anyhow::Result<ExitCode> {
    print!("{}", StreamEvent::status(STATUS_FETCHING).to_sse_frame()?);

    let snapshot = match aggregator.prediction_snapshot().await {
        Ok(snapshot) => snapshot,
        Err(e) => {
            print!("{}", StreamEvent::error(e.to_string()).to_sse_frame()?);
            return Ok(ExitCode::FAILURE);
        }
    };

    print!("{}", StreamEvent::status(STATUS_ANALYZING).to_sse_frame()?);
    print!(
        "{}",
        StreamEvent::assistant_text(snapshot.to_prompt_input()?).to_sse_frame()?
    );
    print!("{}", StreamEvent::Done.to_sse_frame()?);
    Ok(ExitCode::SUCCESS)
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();

    agent_utils::init_tracing_with("warn,agent_arena=info", args.log_format.into());

    let config = Arc::new(build_config(&args)?);
    info!(base_url = %config.base_url, "Starting arena-cli");

    let aggregator = Arc::new(ArenaAggregator::new(config)?);

    if args.format == OutputFormat::Table {
        if !args.command.supports_table() {
            return report_error(&TABLE_UNSUPPORTED);
        }
        return run_table(&aggregator, &args.command).await;
    }

    let registry = arena_registry(Arc::clone(&aggregator));
    match &args.command {
        Command::Leaderboard => report(&registry.invoke("get_leaderboard", json!({})).await),
        Command::Positions { agent } => report(
            &registry
                .invoke("get_agent_positions", json!({ "agent_name": agent }))
                .await,
        ),
        Command::AllPositions => report(&registry.invoke("get_all_positions", json!({})).await),
        Command::Compare { agent1, agent2 } => report(
            &registry
                .invoke(
                    "compare_positions",
                    json!({ "agent1": agent1, "agent2": agent2 }),
                )
                .await,
        ),
        Command::Summary => {
            report(&registry.invoke("get_competition_summary", json!({})).await)
        }
        Command::Snapshot { sse: true } => run_snapshot_sse(&aggregator).await,
        Command::Snapshot { sse: false } => match aggregator.prediction_snapshot().await {
            Ok(snapshot) => {
                println!("{}", snapshot.to_prompt_input()?);
                Ok(ExitCode::SUCCESS)
            }
            Err(e) => report_error(&e),
        },
        Command::Tools => {
            print_json(&Value::Array(registry.definitions()))?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
