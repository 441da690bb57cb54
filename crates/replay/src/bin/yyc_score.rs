use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use replay::{Config, FixtureValidator, ReplayFixture, Replayer, summary};
use scorebook::ReconciliationMode;
use scorebook::models::Match;
use scorebook::services::reconcile;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "yyc-score")]
#[command(about = "YYC indoor cricket ball-by-ball scorer", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Overrides YYC_MAX_OVERS for matches that do not set their own.
    #[arg(long)]
    max_overs: Option<u32>,

    #[arg(long, env = "YYC_RECONCILIATION")]
    reconciliation: Option<ReconciliationMode>,

    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Replays a recorded scoring session and prints the scorecard.
    Replay {
        fixture: PathBuf,

        #[arg(long)]
        output: Option<PathBuf>,

        #[arg(long)]
        validate_only: bool,
    },
    /// Checks a stored match document against its ball log.
    Reconcile { file: PathBuf },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!(
                    "yyc_score={},replay={},scorebook={}",
                    log_level, log_level, log_level
                )
                .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut config = Config::from_env()?;
    if let Some(max_overs) = cli.max_overs {
        config = config
            .with_max_overs(max_overs)
            .context("Invalid --max-overs")?;
    }
    if let Some(mode) = cli.reconciliation {
        config.reconciliation = mode;
    }

    match cli.command {
        Commands::Replay {
            fixture,
            output,
            validate_only,
        } => handle_replay(fixture, output, validate_only, &config).await,
        Commands::Reconcile { file } => handle_reconcile(file).await,
    }
}

async fn handle_replay(
    file: PathBuf,
    output: Option<PathBuf>,
    validate_only: bool,
    config: &Config,
) -> anyhow::Result<()> {
    tracing::info!("Loading fixture from: {}", file.display());

    let content = tokio::fs::read_to_string(&file)
        .await
        .with_context(|| format!("Cannot read {}", file.display()))?;
    let fixture = ReplayFixture::from_json(&content)?;

    tracing::info!(
        "Loaded match {} with {} event(s) (v{})",
        fixture.game.match_number,
        fixture.events.len(),
        fixture.format_version
    );

    let report = FixtureValidator::validate(&fixture)?;
    report.log_warnings();
    tracing::info!("Fixture is valid");

    if validate_only {
        return Ok(());
    }

    tracing::info!("Scoring with {} reconciliation", config.reconciliation);
    let outcome = Replayer::new(config.scoring()).run(fixture).await?;

    println!("{}", summary::render(&outcome.game));
    for standing in &outcome.standings {
        tracing::info!(
            "{}: played {}, points {}",
            outcome.game.team_name(standing.team_id),
            standing.matches_played,
            standing.points
        );
    }
    for report in outcome.reports.iter().filter(|report| !report.is_valid) {
        for discrepancy in &report.discrepancies {
            tracing::warn!("Reconciliation: {}", discrepancy);
        }
    }

    if let Some(path) = output {
        let json = serde_json::to_string_pretty(&outcome.game)?;
        tokio::fs::write(&path, json)
            .await
            .with_context(|| format!("Cannot write {}", path.display()))?;
        tracing::info!("Wrote match document to {}", path.display());
    }

    tracing::info!("Replayed {} event(s)", outcome.events_applied);
    Ok(())
}

async fn handle_reconcile(file: PathBuf) -> anyhow::Result<()> {
    let content = tokio::fs::read_to_string(&file)
        .await
        .with_context(|| format!("Cannot read {}", file.display()))?;
    let game: Match = serde_json::from_str(&content).context("Not a match document")?;

    let mut failures = 0;
    for innings in &game.innings {
        let report = reconcile(innings);
        if report.is_valid {
            println!("Innings {}: ok", innings.number);
            continue;
        }
        failures += 1;
        println!("Innings {}: {} discrepancy(ies)", innings.number, report.discrepancies.len());
        for discrepancy in &report.discrepancies {
            println!("  {}", discrepancy);
        }
    }

    if failures > 0 {
        bail!("{} innings failed reconciliation", failures);
    }
    Ok(())
}
