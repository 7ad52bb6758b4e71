use crate::config::{ScoringWeights, SkillDefaults};
use crate::types::Candidate;
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkillStats {
    pub proficiency: f64,
    pub years: f64,
}

/// Candidate skill name -> the per-skill values used for scoring.
pub struct SkillLookup<'a> {
    skills: HashMap<&'a str, SkillStats>,
}

impl<'a> SkillLookup<'a> {
    pub fn build(candidate: &'a Candidate, defaults: &SkillDefaults) -> Self {
        let mut skills = HashMap::with_capacity(candidate.skills.len());
        for skill in &candidate.skills {
            let stats = if defaults.use_candidate_skill_values {
                SkillStats {
                    proficiency: skill.proficiency_level as f64,
                    years: skill.years_experience,
                }
            } else {
                SkillStats {
                    proficiency: defaults.default_proficiency_level as f64,
                    years: defaults.default_years_experience,
                }
            };
            // First occurrence wins on duplicate names
            skills.entry(skill.name.as_str()).or_insert(stats);
        }
        Self { skills }
    }

    pub fn get(&self, name: &str) -> Option<SkillStats> {
        self.skills.get(name).copied()
    }
}

/// Ordered, duplicate-free list of skills that contributed to a score.
#[derive(Debug, Default)]
pub struct MatchedSkills {
    names: Vec<String>,
    seen: HashSet<String>,
}

impl MatchedSkills {
    pub fn push(&mut self, name: &str) {
        if !self.seen.contains(name) {
            self.seen.insert(name.to_string());
            self.names.push(name.to_string());
        }
    }

    pub fn into_vec(self) -> Vec<String> {
        self.names
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SkillListScore {
    pub score: f64,
    pub coverage: f64,
}

/// Scores one skill list (required or preferred) against the lookup.
///
/// Each listed skill the candidate holds contributes
/// `weight * base + proficiency * pf + years * ef`; the sum is then scaled by
/// the coverage multiplier `floor + (1 - floor) * coverage`, which reaches
/// 1.0x only when every listed skill is held.
pub fn score_skill_list(
    names: &[String],
    lookup: &SkillLookup,
    weight: f64,
    w: &ScoringWeights,
    out: &mut MatchedSkills,
) -> SkillListScore {
    if names.is_empty() {
        return SkillListScore::default();
    }

    let mut running = 0.0;
    let mut matched = 0usize;

    for name in names {
        if let Some(stats) = lookup.get(name) {
            let skill_score = weight * w.skill_base_multiplier;
            let proficiency_bonus = stats.proficiency * w.proficiency_factor;
            let experience_bonus = stats.years * w.experience_factor;
            running += skill_score + proficiency_bonus + experience_bonus;
            out.push(name);
            matched += 1;
        }
    }

    let coverage = matched as f64 / names.len() as f64;
    let multiplier = w.coverage_floor + (1.0 - w.coverage_floor) * coverage;

    SkillListScore {
        score: running * multiplier,
        coverage,
    }
}
