mod chain;
mod config;
mod dispatch;
mod error;

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use dialoguer::Confirm;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use chain::client::{GrpcClient, StakingQuery};
use chain::messages::TxKind;
use chain::wallet::{has_expected_prefix, CosmosWallet};
use config::Config;
use dispatch::rewards::{ClaimOutcome, RewardAggregator};
use dispatch::{AmountRange, DispatchConfig, DispatchLoop, RunSummary, TxOutcome, WorkItem};

#[derive(Parser)]
#[command(name = "empe-bot")]
#[command(about = "Transaction automation bot for Empe testnet", version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config.toml", global = true)]
    config: PathBuf,

    /// Skip confirmation prompts
    #[arg(short, long, global = true)]
    yes: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Send a random amount to every address in a work list
    Send {
        /// File with one recipient address per line
        #[arg(short, long, default_value = "recipients.txt")]
        file: PathBuf,

        /// Write a JSON outcome report to this path
        #[arg(long)]
        report: Option<PathBuf>,
    },

    /// Delegate a random amount to every validator in a work list
    Delegate {
        /// File with one validator operator address per line
        #[arg(short, long, default_value = "validators.txt")]
        file: PathBuf,

        /// Write a JSON outcome report to this path
        #[arg(long)]
        report: Option<PathBuf>,
    },

    /// Withdraw pending staking rewards from all delegations
    Claim,

    /// Show the wallet address and balance
    Balance,

    /// Generate a default configuration file
    Init {
        /// Output path for config file
        #[arg(short, long, default_value = "config.toml")]
        output: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "empe_bot=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    if let Commands::Init { output } = &cli.command {
        let config = Config::default();
        config.save(output)?;
        info!("Configuration file created at: {}", output.display());
        return Ok(());
    }

    let config = load_config(&cli.config)?;

    match cli.command {
        Commands::Send { file, report } => {
            run_dispatch(&config, &file, TxKind::Send, cli.yes, report.as_deref()).await?;
        }
        Commands::Delegate { file, report } => {
            run_dispatch(&config, &file, TxKind::Delegate, cli.yes, report.as_deref()).await?;
        }
        Commands::Claim => {
            run_claim(&config, cli.yes).await?;
        }
        Commands::Balance => {
            let client = connect(&config).await?;
            print_balance(&client, &config).await?;
        }
        Commands::Init { .. } => unreachable!(),
    }

    Ok(())
}

fn load_config(path: &Path) -> Result<Config> {
    if path.exists() {
        let config = Config::load(path)?;
        info!("Loaded configuration from {}", path.display());
        Ok(config)
    } else {
        info!(
            "No configuration file at {}, using defaults (run `empe-bot init` to create one)",
            path.display()
        );
        let config = Config::default();
        config.validate()?;
        Ok(config)
    }
}

async fn connect(config: &Config) -> Result<GrpcClient> {
    let mnemonic = config::mnemonic_from_env()?;
    let wallet = CosmosWallet::from_mnemonic_no_passphrase(&mnemonic, &config.chain.address_prefix)?;
    info!("Wallet address: {}", wallet.address);

    let mut client = GrpcClient::new(config.client_config(), wallet);
    client.connect().await?;
    Ok(client)
}

async fn print_balance(client: &GrpcClient, config: &Config) -> Result<u128> {
    let balance = client
        .bank_balance(client.wallet_address(), &config.chain.denom)
        .await?;
    println!(
        "Balance of {}: {} {}",
        client.wallet_address(),
        balance,
        config.chain.denom
    );
    Ok(balance)
}

async fn run_dispatch(
    config: &Config,
    file: &Path,
    kind: TxKind,
    yes: bool,
    report: Option<&Path>,
) -> Result<()> {
    let range = config.amount_range()?;
    let targets = dispatch::worklist::read_targets(file)?;

    let items: Vec<WorkItem> = targets
        .iter()
        .map(|target| WorkItem::new(target.clone(), kind))
        .collect();
    for item in &items {
        if !has_expected_prefix(&item.target, &config.chain.address_prefix)
            && kind == TxKind::Send
        {
            bail!(
                "recipient {} does not carry the {} prefix",
                item.target,
                config.chain.address_prefix
            );
        }
    }

    let client = connect(config).await?;
    print_balance(&client, config).await?;

    println!(
        "About to {} {}-{} {} to each of {} target(s), {}s apart.",
        kind.verb(),
        range.min,
        range.max,
        config.chain.denom,
        items.len(),
        config.delay().as_secs_f64()
    );
    if !confirm(yes, "Proceed?")? {
        println!("Aborted.");
        return Ok(());
    }

    let dispatch_config = DispatchConfig {
        denom: config.chain.denom.clone(),
        memo: config.bot.memo.clone(),
        gas: config.gas_settings(),
        delay: config.delay(),
    };
    let dispatch = DispatchLoop::new(&client, client.wallet_address(), dispatch_config);

    let mut rng = rand::thread_rng();
    let (outcomes, summary) = dispatch
        .run_with_observer(&items, range, &mut rng, |progress, outcome| {
            print_outcome(config, outcome);
            println!(
                "{}  ~{}s left",
                progress.bar(30),
                progress.eta(config.delay()).as_secs()
            );
        })
        .await;

    print_summary(config, &outcomes, &summary);
    if let Some(path) = report {
        let doc = serde_json::json!({ "summary": summary, "outcomes": outcomes });
        std::fs::write(path, serde_json::to_string_pretty(&doc)?)?;
        info!("Wrote outcome report to {}", path.display());
    }
    print_balance(&client, config).await?;
    Ok(())
}

fn print_outcome(config: &Config, outcome: &TxOutcome) {
    if outcome.success {
        println!(
            "  [{}] {} {} {} -> ok  {}",
            outcome.index + 1,
            outcome.amount,
            config.chain.denom,
            outcome.target,
            outcome
                .tx_hash
                .as_deref()
                .map(|h| config.explorer_tx_url(h))
                .unwrap_or_default()
        );
    } else {
        println!(
            "  [{}] {} {} {} -> FAILED ({})",
            outcome.index + 1,
            outcome.amount,
            config.chain.denom,
            outcome.target,
            outcome.error.as_deref().unwrap_or("unknown error")
        );
    }
}

fn print_summary(config: &Config, outcomes: &[TxOutcome], summary: &RunSummary) {
    println!();
    println!(
        "Done: {} succeeded, {} failed out of {} in {:.1} min",
        summary.succeeded,
        summary.failed,
        summary.total,
        summary.elapsed_minutes()
    );
    println!(
        "Total dispatched: {} {}",
        dispatch::total_dispatched(outcomes),
        config.chain.denom
    );
}

async fn run_claim(config: &Config, yes: bool) -> Result<()> {
    let client = connect(config).await?;
    print_balance(&client, config).await?;

    let aggregator = RewardAggregator::new(
        &client,
        config.chain.denom.clone(),
        config.bot.memo.clone(),
        config.gas_settings(),
        config.bot.max_claim_per_tx,
    );

    let pending = aggregator.pending(client.wallet_address()).await?;
    if pending.total == 0 {
        println!("No rewards to claim.");
        return Ok(());
    }
    println!("Pending rewards ({} total {}):", pending.total, config.chain.denom);
    for line in &pending.rewards {
        println!("  {}: {} {}", line.validator_address, line.amount, config.chain.denom);
    }
    if !confirm(yes, "Claim all pending rewards?")? {
        println!("Aborted.");
        return Ok(());
    }

    match aggregator.claim_all(client.wallet_address()).await? {
        ClaimOutcome::NoDelegations => println!("No delegations found for this wallet."),
        ClaimOutcome::NothingClaimable => println!("All reward lines are zero, nothing to claim."),
        ClaimOutcome::Claimed(report) => {
            for (validator, amount) in &report.claimed {
                println!("  claimed {} {} from {}", amount, config.chain.denom, validator);
            }
            println!(
                "Claimed {} {} in {} transaction(s):",
                report.total,
                config.chain.denom,
                report.tx_hashes.len()
            );
            for hash in &report.tx_hashes {
                println!("  {}", config.explorer_tx_url(hash));
            }
            for failure in &report.failures {
                println!("  batch failed: {}", failure);
                if failure.contains("insufficient fee") {
                    println!(
                        "  hint: raise bot.gas_multiplier or chain.fee_rate in {}",
                        "config.toml"
                    );
                }
            }
        }
    }

    print_balance(&client, config).await?;
    Ok(())
}

fn confirm(yes: bool, prompt: &str) -> Result<bool> {
    if yes {
        return Ok(true);
    }
    Ok(Confirm::new().with_prompt(prompt).default(false).interact()?)
}
