use crate::error::{MatchForgeError, MfResult};
use crate::types::{Candidate, CandidateSkill, RequirementSpec, SearchQuery};
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{debug, info};

fn optional(cell: &str) -> Option<String> {
    let cell = cell.trim();
    if cell.is_empty() {
        None
    } else {
        Some(cell.to_string())
    }
}

fn field(record: &csv::StringRecord, i: usize) -> &str {
    record.get(i).unwrap_or("")
}

/// Parses one skill token: `name` or `name:proficiency:years`.
fn parse_skill(token: &str, row: usize) -> MfResult<Option<CandidateSkill>> {
    let mut parts = token.split(':').map(str::trim);
    let name = match parts.next() {
        Some(n) if !n.is_empty() => n,
        _ => return Ok(None),
    };
    let mut skill = CandidateSkill::named(name);

    if let Some(p) = parts.next() {
        skill.proficiency_level = p.parse().map_err(|_| {
            MatchForgeError::Validation(format!(
                "row {}: invalid proficiency '{}' for skill '{}'",
                row, p, name
            ))
        })?;
    }
    if let Some(y) = parts.next() {
        skill.years_experience = y.parse().map_err(|_| {
            MatchForgeError::Validation(format!(
                "row {}: invalid years '{}' for skill '{}'",
                row, y, name
            ))
        })?;
    }
    check_skill_values(&skill, &format!("row {}", row))?;
    Ok(Some(skill))
}

/// Range checks shared by every pool format: proficiency 1-5, years finite
/// and non-negative. `origin` prefixes the error message.
fn check_skill_values(skill: &CandidateSkill, origin: &str) -> MfResult<()> {
    if !(1..=5).contains(&skill.proficiency_level) {
        return Err(MatchForgeError::Validation(format!(
            "{}: proficiency for '{}' must be 1-5 (got {})",
            origin, skill.name, skill.proficiency_level
        )));
    }
    if !skill.years_experience.is_finite() || skill.years_experience < 0.0 {
        return Err(MatchForgeError::Validation(format!(
            "{}: years for '{}' must be >= 0 (got {})",
            origin, skill.name, skill.years_experience
        )));
    }
    Ok(())
}

/// Drops empty skill names and trims the rest. Names are not canonicalized.
fn tidy_skills(candidate: &mut Candidate) {
    for skill in candidate.skills.iter_mut() {
        skill.name = skill.name.trim().to_string();
    }
    candidate.skills.retain(|s| !s.name.is_empty());
}

/// CSV pool with header `id,department,level,location,skills`.
pub fn load_candidates_csv<R: Read>(reader: R) -> MfResult<Vec<Candidate>> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(true)
        .from_reader(reader);

    let mut candidates = Vec::new();

    for (idx, result) in rdr.records().enumerate() {
        let record = result?;
        // Header is line 1
        let row = idx + 2;

        let raw_id = field(&record, 0).trim();
        let id: i64 = raw_id.parse().map_err(|_| {
            MatchForgeError::Validation(format!("row {}: invalid candidate id '{}'", row, raw_id))
        })?;

        let mut skills = Vec::new();
        for token in field(&record, 4).split(';') {
            if let Some(skill) = parse_skill(token, row)? {
                skills.push(skill);
            }
        }

        candidates.push(Candidate {
            id,
            skills,
            department: optional(field(&record, 1)),
            level: optional(field(&record, 2)),
            location: optional(field(&record, 3)),
        });
    }

    debug!("Parsed {} candidates from CSV", candidates.len());
    Ok(candidates)
}

/// JSON array of candidate objects.
pub fn load_candidates_json<R: Read>(reader: R) -> MfResult<Vec<Candidate>> {
    let mut candidates: Vec<Candidate> = serde_json::from_reader(reader)?;
    for candidate in candidates.iter_mut() {
        tidy_skills(candidate);
        let origin = format!("candidate {}", candidate.id);
        for skill in &candidate.skills {
            check_skill_values(skill, &origin)?;
        }
    }
    debug!("Parsed {} candidates from JSON", candidates.len());
    Ok(candidates)
}

/// Loads a pool from disk, picking the format from the extension.
pub fn load_candidates<P: AsRef<Path>>(path: P) -> MfResult<Vec<Candidate>> {
    let path = path.as_ref();
    let file = BufReader::new(File::open(path)?);

    let is_csv = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("csv"));

    let candidates = if is_csv {
        load_candidates_csv(file)?
    } else {
        load_candidates_json(file)?
    };

    info!("Loaded {} candidates from {}", candidates.len(), path.display());
    Ok(candidates)
}

fn load_json<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> MfResult<T> {
    let file = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(file)?)
}

pub fn load_requirement<P: AsRef<Path>>(path: P) -> MfResult<RequirementSpec> {
    load_json(path)
}

pub fn load_search_query<P: AsRef<Path>>(path: P) -> MfResult<SearchQuery> {
    load_json(path)
}
