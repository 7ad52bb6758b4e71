use crate::reports;
use clap::Args;
use matchforge::config::Config;
use matchforge::engine::MatchEngine;
use matchforge::error::MfResult;
use matchforge::loader;
use matchforge::types::Candidate;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct SearchArgs {
    #[command(flatten)]
    pub config: Config,

    /// Search query document (JSON)
    #[arg(short, long)]
    pub query: String,

    /// Overrides the query's minMatchScore
    #[arg(short = 'm', long)]
    pub min_score: Option<f64>,

    #[arg(short = 'n', long)]
    pub top: Option<usize>,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: &SearchArgs, engine: &MatchEngine, pool: &[Candidate]) -> MfResult<()> {
    let mut query = loader::load_search_query(&args.query)?;
    if args.min_score.is_some() {
        query.min_match_score = args.min_score;
    }

    info!(
        "🔎 Searching {} candidates (min score {:.2})",
        pool.len(),
        query.min_match_score.unwrap_or(0.0)
    );

    let matches = engine.search_candidates(&query, pool);
    reports::emit_matches(&matches, args.top, args.json)
}
