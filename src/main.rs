//! Binary entrypoint for the Reelslots CLI.
//!
//! Commands:
//! - `spin [--bet <n>] [--count <n>] [--seed <s>] [--json]` - spin the machine and show the results
//! - `analyze [--first-match] [--json]` - print exact probabilities and return per payout rule
//! - `init` - create a starter `config.toml` and write the default tables as JSON
//!
//! See the library crate docs for module‑level details: `reelslots::`.
use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use log::{debug, info};
use std::path::Path;

use reelslots::config::Config;
use reelslots::report::{render_analysis, render_spin, SpinTally};
use reelslots::slots::{analyzer, tables, IndexSource, RngSource};

#[derive(Parser)]
#[command(name = "reelslots")]
#[command(about = "A three-reel slot machine simulator and payout analyzer")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path (can be used before or after subcommand)
    #[arg(short, long, default_value = "config.toml", global = true)]
    config: String,

    /// Verbose logging (-v, -vv for more; may appear before or after subcommand)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Spin the slot machine
    Spin {
        /// Credits wagered per spin
        #[arg(short, long)]
        bet: Option<u32>,

        /// Number of spins
        #[arg(short = 'n', long)]
        count: Option<u32>,

        /// Seed for reproducible spins
        #[arg(short, long)]
        seed: Option<u64>,

        /// Print each result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Compute win probability and expected return for every payout rule
    Analyze {
        /// Credit each combination only to the rule a spin would pay
        #[arg(long)]
        first_match: bool,

        /// Print the analysis as JSON
        #[arg(long)]
        json: bool,
    },
    /// Write a default configuration and the default tables
    Init,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // A missing config file is fine for every command: defaults apply
    let config = match cli.command {
        Commands::Init => Config::default(),
        _ => {
            if Path::new(&cli.config).exists() {
                Config::load(&cli.config).await?
            } else {
                Config::default()
            }
        }
    };
    init_logging(&config, cli.verbose);

    match cli.command {
        Commands::Spin {
            bet,
            count,
            seed,
            json,
        } => {
            let machine = config.machine.build_machine()?;
            let bet = bet.unwrap_or(config.spin.bet);
            let count = count.unwrap_or(config.spin.count);
            let mut source: Box<dyn IndexSource> = match seed.or(config.machine.seed) {
                Some(seed) => {
                    debug!("Seeding spins with {}", seed);
                    Box::new(RngSource::seeded(seed))
                }
                None => Box::new(RngSource::thread()),
            };

            let mut tally = SpinTally::default();
            for _ in 0..count {
                let result = machine.spin_with(bet, source.as_mut())?;
                tally.record(&result);
                if json {
                    println!("{}", serde_json::to_string(&result)?);
                } else {
                    println!("{}\n", render_spin(&result));
                }
            }
            if count > 1 && !json {
                println!("{}", tally.render());
            }
            info!("{}", tally.render());
        }
        Commands::Analyze { first_match, json } => {
            let machine = config.machine.build_machine()?;
            info!(
                "Analyzing {} payout rules over {} combinations",
                machine.payout_schedule().len(),
                machine.lookup_table().combinations()
            );
            let records = if first_match {
                analyzer::analyze_first_match(machine.payout_schedule(), machine.lookup_table())
            } else {
                analyzer::analyze(machine.payout_schedule(), machine.lookup_table())
            };
            let summary = analyzer::summarize(records);
            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                print!("{}", render_analysis(&summary));
            }
        }
        Commands::Init => {
            info!("Initializing new slot machine configuration");
            let mut cfg = Config::default();
            let dir = Path::new(&cfg.machine.tables_dir).to_path_buf();
            tokio::fs::create_dir_all(&dir)
                .await
                .map_err(|e| anyhow!("Failed to create {}: {}", dir.display(), e))?;

            let lookup_path = dir.join("lookup_table.json");
            let payout_path = dir.join("payout_table.json");
            let machine = reelslots::slots::SlotMachine::new();
            tokio::fs::write(
                &lookup_path,
                tables::lookup_table_to_json(machine.lookup_table())?,
            )
            .await?;
            tokio::fs::write(
                &payout_path,
                tables::payout_schedule_to_json(machine.payout_schedule())?,
            )
            .await?;
            info!("Default tables written to {}", dir.display());

            cfg.machine.lookup_table = Some(lookup_path.to_string_lossy().to_string());
            cfg.machine.payout_table = Some(payout_path.to_string_lossy().to_string());
            let serialized = toml::to_string_pretty(&cfg)?;
            tokio::fs::write(&cli.config, serialized).await?;
            info!("Configuration file created at {}", cli.config);
        }
    }

    Ok(())
}

fn init_logging(config: &Config, verbosity: u8) {
    use std::io::Write;
    let mut builder = env_logger::Builder::new();
    // CLI verbosity overrides the configured level
    let base_level = match verbosity {
        0 => config.logging.level_filter(),
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    builder.filter_level(base_level);
    if let Some(ref file) = config.logging.file {
        if let Ok(f) = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(file)
        {
            let write_mutex = std::sync::Arc::new(std::sync::Mutex::new(f));

            // Mirror to the console only when someone is watching it
            let is_tty = atty::is(atty::Stream::Stderr);

            builder.format(move |fmt, record| {
                let ts = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
                let line = format!("{} [{}] {}", ts, record.level(), record.args());
                if let Ok(mut guard) = write_mutex.lock() {
                    let _ = writeln!(guard, "{}", line);
                }
                if is_tty {
                    writeln!(fmt, "{}", line)
                } else {
                    Ok(())
                }
            });
            let _ = builder.try_init();
            return;
        }
    }
    builder.format(|fmt, record| {
        let ts = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
        writeln!(fmt, "{} [{}] {}", ts, record.level(), record.args())
    });
    let _ = builder.try_init();
}
