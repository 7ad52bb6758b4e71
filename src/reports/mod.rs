mod tables;

use matchforge::error::MfResult;
use matchforge::types::Match;

pub use self::tables::{breakdown as print_breakdown, ranking as print_ranking};

/// Writes a result set either as a ranked table or as pretty JSON.
pub fn emit_matches(matches: &[Match], top: Option<usize>, json: bool) -> MfResult<()> {
    let shown = &matches[..top.unwrap_or(matches.len()).min(matches.len())];

    if json {
        println!("{}", serde_json::to_string_pretty(shown)?);
        return Ok(());
    }

    if shown.is_empty() {
        println!("No candidates matched.");
        return Ok(());
    }

    print_ranking(shown);
    if shown.len() < matches.len() {
        println!("({} more not shown)", matches.len() - shown.len());
    }
    Ok(())
}
