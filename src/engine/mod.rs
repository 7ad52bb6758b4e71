pub mod bonuses;
pub mod skills;

use self::skills::{score_skill_list, MatchedSkills, SkillLookup};
use crate::config::Config;
use crate::error::MfResult;
use crate::types::{Candidate, Match, RequirementSpec, ScoreBreakdown, SearchQuery};
use rayon::prelude::*;
use std::cmp::Ordering;
use tracing::{debug, trace};

/// Stateless ranking engine. Holds only its configuration; every call is a
/// pure function of its arguments.
#[derive(Debug, Clone, Default)]
pub struct MatchEngine {
    pub config: Config,
}

impl MatchEngine {
    /// Wraps `config` as is. Weights are not checked here; callers holding
    /// untrusted values go through [`MatchEngine::try_new`].
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Validates `config` before building the engine, so negative or
    /// non-finite weights never reach scoring.
    pub fn try_new(config: Config) -> MfResult<Self> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Score and matched skills for one candidate.
    pub fn score_candidate(
        &self,
        requirement: &RequirementSpec,
        candidate: &Candidate,
    ) -> (f64, Vec<String>) {
        let (details, matching) = self.evaluate(requirement, candidate);
        (details.total, matching)
    }

    /// Per-term breakdown for one candidate. `total` is identical to the
    /// score `score_candidate` reports.
    pub fn score_details(&self, requirement: &RequirementSpec, candidate: &Candidate) -> ScoreBreakdown {
        self.evaluate(requirement, candidate).0
    }

    /// Breakdown and matched skills from a single scoring pass.
    pub fn evaluate(
        &self,
        requirement: &RequirementSpec,
        candidate: &Candidate,
    ) -> (ScoreBreakdown, Vec<String>) {
        let w = &self.config.weights;
        let lookup = SkillLookup::build(candidate, &self.config.skills);
        let mut matched = MatchedSkills::default();

        let required = score_skill_list(
            &requirement.required_skills,
            &lookup,
            w.required_weight,
            w,
            &mut matched,
        );
        let preferred = score_skill_list(
            &requirement.preferred_skills,
            &lookup,
            w.preferred_weight,
            w,
            &mut matched,
        );

        let department = bonuses::department_bonus(
            requirement.department.as_deref(),
            candidate.department.as_deref(),
            w,
        );
        let experience = bonuses::experience_bonus(
            requirement.experience_level.as_deref(),
            candidate.level.as_deref(),
            w,
        );
        let location = bonuses::location_bonus(
            requirement.location.as_deref(),
            candidate.location.as_deref(),
            w,
        );

        let total = required.score + preferred.score + department + experience + location;

        let details = ScoreBreakdown {
            required: required.score,
            preferred: preferred.score,
            department,
            experience,
            location,
            required_coverage: required.coverage,
            preferred_coverage: preferred.coverage,
            total,
        };
        (details, matched.into_vec())
    }

    /// Scores every candidate, drops zero scores and returns the rest ranked
    /// by score (descending), then candidate id (ascending).
    pub fn find_matches(&self, requirement: &RequirementSpec, candidates: &[Candidate]) -> Vec<Match> {
        let score_one = |candidate: &Candidate| -> Option<Match> {
            let (score, matching_skills) = self.score_candidate(requirement, candidate);
            trace!(candidate = candidate.id, score, "scored candidate");
            (score > 0.0).then(|| Match {
                requirement_id: requirement.id,
                candidate_id: candidate.id,
                score,
                matching_skills,
                candidate: candidate.clone(),
            })
        };

        let parallel = candidates.len() >= self.config.engine.parallel_threshold;
        let mut matches: Vec<Match> = if parallel {
            candidates.par_iter().filter_map(score_one).collect()
        } else {
            candidates.iter().filter_map(score_one).collect()
        };

        rank_matches(&mut matches);

        debug!(
            requirement = requirement.id,
            pool = candidates.len(),
            matched = matches.len(),
            parallel,
            "ranked candidates"
        );
        matches
    }

    /// Search variant: same ranking, then the query's `minMatchScore` cutoff.
    pub fn search_candidates(&self, query: &SearchQuery, candidates: &[Candidate]) -> Vec<Match> {
        let requirement = query.to_requirement();
        let matches = self.find_matches(&requirement, candidates);
        apply_min_score(matches, query.min_match_score.unwrap_or(0.0))
    }
}

/// Score descending, candidate id ascending on ties.
pub fn rank_matches(matches: &mut [Match]) {
    matches.sort_by(|a, b| match b.score.total_cmp(&a.score) {
        Ordering::Equal => a.candidate_id.cmp(&b.candidate_id),
        other => other,
    });
}

/// Drops matches strictly below `min_score`. A threshold of zero or less is
/// a no-op.
pub fn apply_min_score(mut matches: Vec<Match>, min_score: f64) -> Vec<Match> {
    if min_score > 0.0 {
        matches.retain(|m| m.score >= min_score);
    }
    matches
}

/// `find_matches` with the default configuration.
pub fn find_matches(requirement: &RequirementSpec, candidates: &[Candidate]) -> Vec<Match> {
    MatchEngine::default().find_matches(requirement, candidates)
}

/// `search_candidates` with the default configuration.
pub fn search_candidates(query: &SearchQuery, candidates: &[Candidate]) -> Vec<Match> {
    MatchEngine::default().search_candidates(query, candidates)
}
