use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use matchforge::config::Config;
use matchforge::engine::MatchEngine;
use matchforge::loader;
use std::process;
use tracing::{error, info, warn, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(global = true, short, long, default_value = "data/candidates.json")]
    candidates: String,

    #[arg(global = true, long)]
    config: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Rank the pool against a job request
    Rank(cmd::rank::RankArgs),
    /// Ad-hoc search with an optional score cutoff
    Search(cmd::search::SearchArgs),
    /// Per-term score breakdown for one candidate
    Explain(cmd::explain::ExplainArgs),
}

fn init_tracing(debug: bool) {
    let level = if debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    // Raw matches are kept to tell typed flags apart from defaults
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    init_tracing(cli.debug);
    info!("🚀 Initializing MatchForge...");

    let (cli_config, sub_matches) = match (&cli.command, matches.subcommand()) {
        (Commands::Rank(args), Some((_, sub))) => (&args.config, sub),
        (Commands::Search(args), Some((_, sub))) => (&args.config, sub),
        (Commands::Explain(args), Some((_, sub))) => (&args.config, sub),
        _ => {
            error!("No subcommand given");
            process::exit(2);
        }
    };

    // Config file is the base; flags typed on the command line win
    let config = if let Some(path) = &cli.config {
        info!("⚖️  Loading Config from: {}", path);
        let mut file_config = Config::load_from_file(path).unwrap_or_else(|e| {
            error!("❌ Failed to load config '{}': {}", path, e);
            process::exit(1);
        });
        file_config.merge_from_cli(cli_config, sub_matches);
        file_config
    } else {
        warn!("⚠️  No config file given. Using embedded defaults.");
        cli_config.clone()
    };

    if let Err(e) = config.validate() {
        error!("❌ {}", e);
        process::exit(1);
    }

    info!("📂 Loading Candidates: {}", cli.candidates);
    let pool = loader::load_candidates(&cli.candidates).unwrap_or_else(|e| {
        error!("❌ Failed to load candidates: {}", e);
        process::exit(1);
    });

    let engine = MatchEngine::new(config);

    let outcome = match &cli.command {
        Commands::Rank(args) => cmd::rank::run(args, &engine, &pool),
        Commands::Search(args) => cmd::search::run(args, &engine, &pool),
        Commands::Explain(args) => cmd::explain::run(args, &engine, &pool),
    };

    if let Err(e) = outcome {
        error!("❌ {}", e);
        process::exit(1);
    }
}
