pub mod api;
pub mod config;
pub mod engine;
pub mod error;
pub mod levels;
pub mod loader;
pub mod types;
// cmd and reports are binary modules (declared in main.rs).

pub use engine::{find_matches, search_candidates, MatchEngine};
pub use types::{Candidate, CandidateSkill, Match, RequirementSpec, ScoreBreakdown, SearchQuery};
