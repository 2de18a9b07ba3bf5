use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use yukon::{GameConfig, GameSession, Lookup, TableauRule};
use yukon_cli::{load_config, run_repl, BoardFormat, ConfigOverrides, Recorder, ReplExit};

#[derive(Parser)]
struct Args {
    /// RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// Which cards may be stacked in a column
    #[arg(long, value_enum)]
    rules: Option<RulesArg>,

    /// What happens when a command names a card that is not in the pile
    #[arg(long, value_enum)]
    lookup: Option<LookupArg>,

    /// Deal the lower cards of each column face down
    #[arg(long, default_value_t = false, conflicts_with = "face_up")]
    face_down: bool,

    /// Deal every card face up, even if the config file says otherwise
    #[arg(long, default_value_t = false)]
    face_up: bool,

    /// Path to a JSON file with the game config
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the board as JSON instead of a table
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Record the game's commands as a JSON file into this directory
    #[arg(short, long)]
    record_games_to_directory: Option<PathBuf>,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

#[derive(Clone, Copy, ValueEnum)]
enum RulesArg {
    /// Red on black, black on red
    AlternatingColor,
    /// Any suit except the same one
    DifferentSuit,
}

#[derive(Clone, Copy, ValueEnum)]
enum LookupArg {
    /// Use the pile's exposed card instead
    Lenient,
    /// Reject the command
    Strict,
}

impl From<RulesArg> for TableauRule {
    fn from(arg: RulesArg) -> Self {
        match arg {
            RulesArg::AlternatingColor => TableauRule::AlternatingColor,
            RulesArg::DifferentSuit => TableauRule::DifferentSuit,
        }
    }
}

impl From<LookupArg> for Lookup {
    fn from(arg: LookupArg) -> Self {
        match arg {
            LookupArg::Lenient => Lookup::Lenient,
            LookupArg::Strict => Lookup::Strict,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    // Get a random seed
    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed);
    let mut rng = StdRng::seed_from_u64(seed);

    let file_config = match &args.config {
        Some(path) => load_config(path)?,
        None => GameConfig::default(),
    };
    let config = ConfigOverrides {
        tableau_rule: args.rules.map(TableauRule::from),
        lookup: args.lookup.map(Lookup::from),
        face_down_deal: match (args.face_down, args.face_up) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        },
    }
    .apply(file_config);
    info!(?config);

    let mut session = GameSession::new(config, &mut rng)?;

    let mut recorder = if let Some(dir_path) = args.record_games_to_directory {
        Some(Recorder::new(dir_path, seed, config)?)
    } else {
        None
    };

    let format = if args.json {
        BoardFormat::Json
    } else {
        BoardFormat::Table
    };
    let exit = run_repl(
        &mut session,
        std::io::stdin().lock(),
        &mut std::io::stdout().lock(),
        &mut recorder,
        format,
    )?;

    if let Some(rec) = &mut recorder {
        let path = rec.write_game_recording(exit == ReplExit::Won)?;
        info!(path = %path.display(), "Recording written");
    }

    Ok(())
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
