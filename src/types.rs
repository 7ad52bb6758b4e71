use serde::{Deserialize, Serialize};

fn default_proficiency() -> u8 {
    3
}

fn default_years() -> f64 {
    2.0
}

/// What a candidate is scored against: a formal job request or a search
/// query converted into the same shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RequirementSpec {
    pub id: i64,
    pub required_skills: Vec<String>,
    pub preferred_skills: Vec<String>,
    pub department: Option<String>,
    pub experience_level: Option<String>,
    pub location: Option<String>,
}

/// Caller-facing shape of an ad-hoc search.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchQuery {
    pub required_skills: Vec<String>,
    pub preferred_skills: Vec<String>,
    pub department: Option<String>,
    pub experience_level: Option<String>,
    pub location: Option<String>,
    pub min_match_score: Option<f64>,
}

impl SearchQuery {
    pub fn to_requirement(&self) -> RequirementSpec {
        RequirementSpec {
            id: 0,
            required_skills: self.required_skills.clone(),
            preferred_skills: self.preferred_skills.clone(),
            department: self.department.clone(),
            experience_level: self.experience_level.clone(),
            location: self.location.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateSkill {
    pub name: String,
    #[serde(default = "default_proficiency")]
    pub proficiency_level: u8,
    #[serde(default = "default_years")]
    pub years_experience: f64,
}

impl CandidateSkill {
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            proficiency_level: default_proficiency(),
            years_experience: default_years(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub id: i64,
    #[serde(default)]
    pub skills: Vec<CandidateSkill>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub level: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub requirement_id: i64,
    pub candidate_id: i64,
    pub score: f64,
    pub matching_skills: Vec<String>,
    pub candidate: Candidate,
}

/// Every term that feeds a candidate's score.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub required: f64,
    pub preferred: f64,
    pub department: f64,
    pub experience: f64,
    pub location: f64,

    pub required_coverage: f64,
    pub preferred_coverage: f64,

    pub total: f64,
}
