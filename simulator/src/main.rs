use anyhow::Context;
use clap::Parser;
use cubehall_simulator::Simulator;
use cubehall_types::TableConfig;
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Player names seated at the table, comma separated
    #[arg(short, long, value_delimiter = ',', default_value = "P1,P2")]
    players: Vec<String>,

    /// Rounds to attempt before closing the table
    #[arg(short, long, default_value_t = 10)]
    rounds: u64,

    /// Seed for the cube and the scripted picks
    #[arg(short, long, default_value_t = 42)]
    seed: u64,

    /// Use the single-seat room preset (takes the first player name)
    #[arg(long, default_value_t = false)]
    solo: bool,

    /// Override the starting bankroll
    #[arg(long)]
    starting_bankroll: Option<i64>,

    /// Override the starting ante
    #[arg(long)]
    min_bet: Option<u64>,

    /// Override the ante increase per escalation step
    #[arg(long)]
    bet_increment: Option<u64>,

    /// Override the resolved rounds between escalation steps
    #[arg(long)]
    rounds_per_step: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    // Parse args
    let args = Args::parse();

    // Create logger
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    // Assemble the session configuration
    let mut config = if args.solo {
        let name = args
            .players
            .first()
            .cloned()
            .unwrap_or_else(|| "Lone".to_string());
        TableConfig::solo(name)
    } else {
        TableConfig {
            players: args.players.clone(),
            ..TableConfig::default()
        }
    };
    if let Some(bankroll) = args.starting_bankroll {
        config.starting_bankroll = bankroll;
    }
    if let Some(min_bet) = args.min_bet {
        config.starting_min_bet = min_bet;
    }
    if let Some(increment) = args.bet_increment {
        config.bet_increment = increment;
    }
    if let Some(step) = args.rounds_per_step {
        config.rounds_per_step = step;
    }

    let mut simulator = Simulator::new(config, args.seed).context("invalid table configuration")?;
    let report = simulator.run(args.rounds);
    info!(
        rounds = report.rounds_played,
        won = report.rounds_won,
        biggest_pot = report.biggest_pot,
        "session closed"
    );

    println!(
        "{}",
        serde_json::to_string_pretty(&report).context("failed to encode session report")?
    );
    Ok(())
}
