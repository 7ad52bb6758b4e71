use crate::config::ScoringWeights;
use crate::levels::level_ordinal;

fn present(field: Option<&str>) -> Option<&str> {
    field.filter(|v| !v.is_empty())
}

/// Both sides set and identical.
fn same_attribute(a: Option<&str>, b: Option<&str>) -> bool {
    matches!((present(a), present(b)), (Some(x), Some(y)) if x == y)
}

pub fn department_bonus(required: Option<&str>, actual: Option<&str>, w: &ScoringWeights) -> f64 {
    if same_attribute(required, actual) {
        w.department_bonus
    } else {
        0.0
    }
}

pub fn location_bonus(required: Option<&str>, actual: Option<&str>, w: &ScoringWeights) -> f64 {
    if same_attribute(required, actual) {
        w.location_bonus
    } else {
        0.0
    }
}

/// Full bonus when the candidate meets the bar, otherwise partial credit
/// proportional to `candidate / required` ordinal.
///
/// A requirement level outside the vocabulary counts as no requirement.
pub fn experience_bonus(required: Option<&str>, actual: Option<&str>, w: &ScoringWeights) -> f64 {
    let (Some(req), Some(cand)) = (present(required), present(actual)) else {
        return 0.0;
    };

    let req_ord = level_ordinal(Some(req));
    if req_ord == 0 {
        return 0.0;
    }
    let cand_ord = level_ordinal(Some(cand));

    if cand_ord >= req_ord {
        w.level_met_bonus
    } else {
        cand_ord as f64 / req_ord as f64 * w.level_partial_scale
    }
}
