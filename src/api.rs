use crate::config::Config;
use crate::engine::MatchEngine;
use crate::loader;
use crate::types::{Candidate, Match, RequirementSpec, SearchQuery};
use std::sync::Mutex;
use tracing::info;

/// The shared state a request handler layer needs to serve match calls.
#[derive(Default)]
pub struct MatchForgeState {
    pub engine: Mutex<MatchEngine>,
    pub candidates: Mutex<Vec<Candidate>>,
}

/// Service: Replace the candidate pool with the contents of a file.
pub fn load_pool(state: &MatchForgeState, path: &str) -> Result<String, String> {
    let pool = loader::load_candidates(path).map_err(|e| e.to_string())?;
    let count = pool.len();

    let mut guard = state.candidates.lock().map_err(|e| e.to_string())?;
    *guard = pool;

    info!("API: Candidate pool replaced ({} records)", count);
    Ok(format!("Loaded {} candidates", count))
}

/// Service: Swap in a new scoring configuration.
pub fn set_config(state: &MatchForgeState, config: Config) -> Result<(), String> {
    let engine = MatchEngine::try_new(config).map_err(|e| e.to_string())?;
    let mut guard = state.engine.lock().map_err(|e| e.to_string())?;
    *guard = engine;
    Ok(())
}

/// Service: Rank the loaded pool against a job request.
pub fn find_matches(state: &MatchForgeState, requirement: &RequirementSpec) -> Result<Vec<Match>, String> {
    let engine = state.engine.lock().map_err(|e| e.to_string())?;
    let pool = state.candidates.lock().map_err(|e| e.to_string())?;
    Ok(engine.find_matches(requirement, &pool))
}

/// Service: Ad-hoc search over the loaded pool, honouring `minMatchScore`.
pub fn search(state: &MatchForgeState, query: &SearchQuery) -> Result<Vec<Match>, String> {
    let engine = state.engine.lock().map_err(|e| e.to_string())?;
    let pool = state.candidates.lock().map_err(|e| e.to_string())?;
    Ok(engine.search_candidates(query, &pool))
}
