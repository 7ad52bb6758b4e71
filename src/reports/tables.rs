use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use matchforge::config::ScoringWeights;
use matchforge::types::{Candidate, Match, ScoreBreakdown};

fn or_dash(field: &Option<String>) -> String {
    field.clone().unwrap_or_else(|| "-".to_string())
}

pub fn ranking(matches: &[Match]) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Rank").add_attribute(Attribute::Bold),
        Cell::new("Candidate").add_attribute(Attribute::Bold),
        Cell::new("Score").fg(Color::Cyan),
        Cell::new("Dept"),
        Cell::new("Level"),
        Cell::new("Location"),
        Cell::new("Matching Skills").fg(Color::Green),
    ]);

    for i in 0..=2 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for (rank, m) in matches.iter().enumerate() {
        let c = &m.candidate;
        table.add_row(vec![
            Cell::new(rank + 1),
            Cell::new(m.candidate_id).add_attribute(Attribute::Bold),
            Cell::new(format!("{:.2}", m.score)).fg(Color::Cyan),
            Cell::new(or_dash(&c.department)),
            Cell::new(or_dash(&c.level)),
            Cell::new(or_dash(&c.location)),
            Cell::new(m.matching_skills.join(", ")).fg(Color::Green),
        ]);
    }
    println!("\n{}", table);
}

pub fn breakdown(candidate: &Candidate, d: &ScoreBreakdown, matching: &[String], w: &ScoringWeights) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new(format!("Candidate {}", candidate.id)).add_attribute(Attribute::Bold),
        Cell::new("Points"),
        Cell::new("Detail"),
    ]);

    if let Some(col) = table.column_mut(1) {
        col.set_cell_alignment(CellAlignment::Right);
    }

    table.add_row(vec![
        Cell::new("Required"),
        Cell::new(format!("{:.2}", d.required)),
        Cell::new(format!(
            "w={:.1}, coverage {:.0}%",
            w.required_weight,
            d.required_coverage * 100.0
        )),
    ]);
    table.add_row(vec![
        Cell::new("Preferred"),
        Cell::new(format!("{:.2}", d.preferred)),
        Cell::new(format!(
            "w={:.1}, coverage {:.0}%",
            w.preferred_weight,
            d.preferred_coverage * 100.0
        )),
    ]);
    table.add_row(vec![
        Cell::new("Department"),
        Cell::new(format!("{:.2}", d.department)),
        Cell::new(or_dash(&candidate.department)),
    ]);
    table.add_row(vec![
        Cell::new("Experience"),
        Cell::new(format!("{:.2}", d.experience)),
        Cell::new(or_dash(&candidate.level)),
    ]);
    table.add_row(vec![
        Cell::new("Location"),
        Cell::new(format!("{:.2}", d.location)),
        Cell::new(or_dash(&candidate.location)),
    ]);
    table.add_row(vec![
        Cell::new("Total").add_attribute(Attribute::Bold),
        Cell::new(format!("{:.2}", d.total)).fg(Color::Cyan),
        Cell::new(matching.join(", ")).fg(Color::Green),
    ]);

    println!("\n{}", table);
}
