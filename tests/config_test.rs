use clap::{CommandFactory, FromArgMatches, Parser};
use matchforge::config::{Config, EngineParams, ScoringWeights, SkillDefaults};
use matchforge::error::MatchForgeError;
use std::fs;

// Minimal parser so tests exercise the same flattened flags as the binary
#[derive(Parser, Debug)]
struct TestCli {
    #[command(flatten)]
    config: Config,
}

fn parse(args: &[&str]) -> (Config, clap::ArgMatches) {
    let mut full = vec!["test"];
    full.extend_from_slice(args);
    let matches = TestCli::command().get_matches_from(full);
    let cli = TestCli::from_arg_matches(&matches).expect("parse failed");
    (cli.config, matches)
}

#[test]
fn test_clap_defaults_match_default_impl() {
    let (config, _) = parse(&[]);
    assert_eq!(config, Config::default());
    assert_eq!(config.weights.required_weight, 3.0);
    assert_eq!(config.weights.preferred_weight, 1.0);
    assert_eq!(config.skills.default_proficiency_level, 3);
    assert_eq!(config.skills.default_years_experience, 2.0);
    assert!(!config.skills.use_candidate_skill_values);
}

#[test]
fn test_partial_json_fills_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    fs::write(
        &path,
        r#"{"weights": {"department_bonus": 4.0}, "engine": {"parallel_threshold": 8}}"#,
    )
    .unwrap();

    let config = Config::load_from_file(&path).unwrap();
    assert_eq!(config.weights.department_bonus, 4.0);
    assert_eq!(config.weights.location_bonus, 1.0);
    assert_eq!(config.engine.parallel_threshold, 8);
    assert_eq!(config.skills, SkillDefaults::default());
}

#[test]
fn test_invalid_file_values_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.json");
    fs::write(&path, r#"{"weights": {"coverage_floor": 1.5}}"#).unwrap();

    assert!(matches!(
        Config::load_from_file(&path),
        Err(MatchForgeError::Config(_))
    ));
}

#[test]
fn test_weight_validation() {
    assert!(ScoringWeights::default().validate().is_ok());

    let negative = ScoringWeights {
        required_weight: -1.0,
        ..Default::default()
    };
    assert!(negative.validate().is_err());

    let nan = ScoringWeights {
        location_bonus: f64::NAN,
        ..Default::default()
    };
    assert!(nan.validate().is_err());

    let bad_prof = SkillDefaults {
        default_proficiency_level: 0,
        ..Default::default()
    };
    assert!(bad_prof.validate().is_err());
}

#[test]
fn test_cli_overrides_file_only_when_typed() {
    let (cli_config, matches) = parse(&["--required-weight", "5.0", "--use-candidate-skill-values"]);

    let mut file_config = Config {
        weights: ScoringWeights {
            required_weight: 4.0,
            preferred_weight: 2.0,
            ..Default::default()
        },
        engine: EngineParams {
            parallel_threshold: 16,
        },
        ..Default::default()
    };
    file_config.merge_from_cli(&cli_config, &matches);

    assert_eq!(file_config.weights.required_weight, 5.0);
    // Not typed: file value survives
    assert_eq!(file_config.weights.preferred_weight, 2.0);
    assert_eq!(file_config.engine.parallel_threshold, 16);
    assert!(file_config.skills.use_candidate_skill_values);
}

#[test]
fn test_round_trip_through_json() {
    let config = Config {
        weights: ScoringWeights {
            level_met_bonus: 3.0,
            ..Default::default()
        },
        ..Default::default()
    };
    let text = serde_json::to_string(&config).unwrap();
    let back: Config = serde_json::from_str(&text).unwrap();
    assert_eq!(back, config);
}
