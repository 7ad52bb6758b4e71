#![allow(dead_code)] // Not every test binary uses every helper

use matchforge::types::{Candidate, CandidateSkill, RequirementSpec};

/// Builder for Candidate to clean up tests
pub struct CandidateBuilder {
    cand: Candidate,
}

impl CandidateBuilder {
    pub fn new(id: i64) -> Self {
        Self {
            cand: Candidate {
                id,
                ..Default::default()
            },
        }
    }

    pub fn skills(mut self, names: &[&str]) -> Self {
        self.cand
            .skills
            .extend(names.iter().map(|n| CandidateSkill::named(n)));
        self
    }

    pub fn skill(mut self, name: &str, proficiency: u8, years: f64) -> Self {
        self.cand.skills.push(CandidateSkill {
            name: name.to_string(),
            proficiency_level: proficiency,
            years_experience: years,
        });
        self
    }

    pub fn department(mut self, dept: &str) -> Self {
        self.cand.department = Some(dept.to_string());
        self
    }

    pub fn level(mut self, level: &str) -> Self {
        self.cand.level = Some(level.to_string());
        self
    }

    pub fn location(mut self, loc: &str) -> Self {
        self.cand.location = Some(loc.to_string());
        self
    }

    pub fn build(self) -> Candidate {
        self.cand
    }
}

/// Builder for RequirementSpec
#[derive(Default)]
pub struct RequirementBuilder {
    req: RequirementSpec,
}

impl RequirementBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: i64) -> Self {
        self.req.id = id;
        self
    }

    pub fn required(mut self, names: &[&str]) -> Self {
        self.req.required_skills = names.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn preferred(mut self, names: &[&str]) -> Self {
        self.req.preferred_skills = names.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn department(mut self, dept: &str) -> Self {
        self.req.department = Some(dept.to_string());
        self
    }

    pub fn level(mut self, level: &str) -> Self {
        self.req.experience_level = Some(level.to_string());
        self
    }

    pub fn location(mut self, loc: &str) -> Self {
        self.req.location = Some(loc.to_string());
        self
    }

    pub fn build(self) -> RequirementSpec {
        self.req
    }
}

/// python / Engineering / senior / NY
pub fn python_request() -> RequirementSpec {
    RequirementBuilder::new()
        .required(&["python"])
        .department("Engineering")
        .level("senior")
        .location("NY")
        .build()
}

pub fn python_engineer(id: i64, level: &str) -> Candidate {
    CandidateBuilder::new(id)
        .skills(&["python"])
        .department("Engineering")
        .level(level)
        .location("NY")
        .build()
}

pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
