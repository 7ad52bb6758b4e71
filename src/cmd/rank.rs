use crate::reports;
use clap::Args;
use matchforge::config::Config;
use matchforge::engine::MatchEngine;
use matchforge::error::MfResult;
use matchforge::loader;
use matchforge::types::Candidate;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct RankArgs {
    #[command(flatten)]
    pub config: Config,

    /// Job request document (JSON)
    #[arg(short, long)]
    pub requirement: String,

    #[arg(short = 'n', long)]
    pub top: Option<usize>,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: &RankArgs, engine: &MatchEngine, pool: &[Candidate]) -> MfResult<()> {
    let requirement = loader::load_requirement(&args.requirement)?;
    info!(
        "🔎 Ranking {} candidates against request #{}",
        pool.len(),
        requirement.id
    );

    let matches = engine.find_matches(&requirement, pool);
    reports::emit_matches(&matches, args.top, args.json)
}
