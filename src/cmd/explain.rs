use crate::reports;
use clap::Args;
use matchforge::config::Config;
use matchforge::engine::MatchEngine;
use matchforge::error::{MatchForgeError, MfResult};
use matchforge::loader;
use matchforge::types::Candidate;

#[derive(Args, Debug, Clone)]
pub struct ExplainArgs {
    #[command(flatten)]
    pub config: Config,

    /// Job request document (JSON)
    #[arg(short, long)]
    pub requirement: String,

    /// Candidate id to break down
    #[arg(long)]
    pub id: i64,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: &ExplainArgs, engine: &MatchEngine, pool: &[Candidate]) -> MfResult<()> {
    let requirement = loader::load_requirement(&args.requirement)?;
    let candidate = pool
        .iter()
        .find(|c| c.id == args.id)
        .ok_or_else(|| MatchForgeError::Validation(format!("No candidate with id {}", args.id)))?;

    let (details, matching) = engine.evaluate(&requirement, candidate);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&details)?);
    } else {
        reports::print_breakdown(candidate, &details, &matching, &engine.config.weights);
    }
    Ok(())
}
