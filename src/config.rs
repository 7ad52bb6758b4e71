use crate::error::{MatchForgeError, MfResult};
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    #[command(flatten)]
    pub weights: ScoringWeights,
    #[command(flatten)]
    pub skills: SkillDefaults,
    #[command(flatten)]
    pub engine: EngineParams,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ScoringWeights {
    // === SKILL LISTS ===
    #[arg(long, default_value_t = 3.0)]
    pub required_weight: f64,
    #[arg(long, default_value_t = 1.0)]
    pub preferred_weight: f64,
    #[arg(long, default_value_t = 2.0)]
    pub skill_base_multiplier: f64,
    #[arg(long, default_value_t = 0.5)]
    pub proficiency_factor: f64,
    #[arg(long, default_value_t = 0.1)]
    pub experience_factor: f64,

    // Multiplier at zero coverage; full coverage is always 1.0x
    #[arg(long, default_value_t = 0.5)]
    pub coverage_floor: f64,

    // === SOFT ATTRIBUTES ===
    #[arg(long, default_value_t = 2.0)]
    pub department_bonus: f64,
    #[arg(long, default_value_t = 1.5)]
    pub level_met_bonus: f64,
    #[arg(long, default_value_t = 1.0)]
    pub level_partial_scale: f64,
    #[arg(long, default_value_t = 1.0)]
    pub location_bonus: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            required_weight: 3.0,
            preferred_weight: 1.0,
            skill_base_multiplier: 2.0,
            proficiency_factor: 0.5,
            experience_factor: 0.1,
            coverage_floor: 0.5,
            department_bonus: 2.0,
            level_met_bonus: 1.5,
            level_partial_scale: 1.0,
            location_bonus: 1.0,
        }
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SkillDefaults {
    #[arg(long, default_value_t = 3)]
    pub default_proficiency_level: u8,
    #[arg(long, default_value_t = 2.0)]
    pub default_years_experience: f64,

    // Off: every skill gets the defaults above regardless of candidate data
    #[arg(long, default_value_t = false)]
    pub use_candidate_skill_values: bool,
}

impl Default for SkillDefaults {
    fn default() -> Self {
        Self {
            default_proficiency_level: 3,
            default_years_experience: 2.0,
            use_candidate_skill_values: false,
        }
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EngineParams {
    /// Pool size at which scoring fans out across the rayon pool.
    #[arg(long, default_value_t = 512)]
    pub parallel_threshold: usize,
}

impl Default for EngineParams {
    fn default() -> Self {
        Self {
            parallel_threshold: 512,
        }
    }
}

impl ScoringWeights {
    pub fn validate(&self) -> MfResult<()> {
        let fields = [
            ("required_weight", self.required_weight),
            ("preferred_weight", self.preferred_weight),
            ("skill_base_multiplier", self.skill_base_multiplier),
            ("proficiency_factor", self.proficiency_factor),
            ("experience_factor", self.experience_factor),
            ("coverage_floor", self.coverage_floor),
            ("department_bonus", self.department_bonus),
            ("level_met_bonus", self.level_met_bonus),
            ("level_partial_scale", self.level_partial_scale),
            ("location_bonus", self.location_bonus),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(MatchForgeError::Config(format!(
                    "{} must be a finite, non-negative number (got {})",
                    name, value
                )));
            }
        }
        if self.coverage_floor > 1.0 {
            return Err(MatchForgeError::Config(format!(
                "coverage_floor must lie in [0, 1] (got {})",
                self.coverage_floor
            )));
        }
        Ok(())
    }
}

impl SkillDefaults {
    pub fn validate(&self) -> MfResult<()> {
        if !(1..=5).contains(&self.default_proficiency_level) {
            return Err(MatchForgeError::Config(format!(
                "default_proficiency_level must be 1-5 (got {})",
                self.default_proficiency_level
            )));
        }
        if !self.default_years_experience.is_finite() || self.default_years_experience < 0.0 {
            return Err(MatchForgeError::Config(format!(
                "default_years_experience must be >= 0 (got {})",
                self.default_years_experience
            )));
        }
        Ok(())
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> MfResult<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> MfResult<()> {
        self.weights.validate()?;
        self.skills.validate()
    }

    /// Copies every value the user typed on the command line over `self`,
    /// leaving file-provided values in place for flags left at their default.
    pub fn merge_from_cli(&mut self, cli: &Config, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($section:ident . $field:ident) => {
                if matches.value_source(stringify!($field)) == Some(ValueSource::CommandLine) {
                    self.$section.$field = cli.$section.$field.clone();
                }
            };
        }

        update_if_present!(weights.required_weight);
        update_if_present!(weights.preferred_weight);
        update_if_present!(weights.skill_base_multiplier);
        update_if_present!(weights.proficiency_factor);
        update_if_present!(weights.experience_factor);
        update_if_present!(weights.coverage_floor);
        update_if_present!(weights.department_bonus);
        update_if_present!(weights.level_met_bonus);
        update_if_present!(weights.level_partial_scale);
        update_if_present!(weights.location_bonus);

        update_if_present!(skills.default_proficiency_level);
        update_if_present!(skills.default_years_experience);
        update_if_present!(skills.use_candidate_skill_values);

        update_if_present!(engine.parallel_threshold);
    }
}
