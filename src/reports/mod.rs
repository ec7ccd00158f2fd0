use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use pitchforge::api::AnalysisReport;
use pitchforge::error::PitchResult;
use pitchforge::scorer::venues::{HIGH_SCORING_GROUNDS, LOW_SCORING_GROUNDS, PITCH_VENUES};
use pitchforge::scorer::{Adjustment, ScoreBreakdown};

fn rating_bar(rating: u8) -> String {
    let filled = rating.min(10) as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(10 - filled))
}

fn signed(v: f32) -> String {
    if v == 0.0 {
        "·".to_string()
    } else {
        format!("{:+.1}", v)
    }
}

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

pub fn print_analysis_report(report: &AnalysisReport) {
    let c = &report.conditions;
    let a = &report.analysis;

    println!(
        "\n🏏 === PITCH REPORT: {} === 🏏",
        c.venue_name.as_deref().unwrap_or("Unnamed venue")
    );
    println!(
        "Weather: {} | Grass: {}% | Moisture: {} | Cracking: {} | Recent matches: {} | Ruleset: {}",
        c.weather,
        c.grass_coverage_percent,
        c.moisture,
        c.cracking,
        c.recent_matches_played,
        report.ruleset
    );

    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Metric").add_attribute(Attribute::Bold),
        Cell::new("Score"),
        Cell::new("Rating"),
    ]);
    if let Some(col) = table.column_mut(1) {
        col.set_cell_alignment(CellAlignment::Right);
    }

    let r = &report.ratings;
    let rows = [
        ("Favors Batsmen", a.scores.batting_score, r.favors_batsmen, Color::Green),
        ("Favors Bowlers", a.scores.bowling_score, r.favors_bowlers, Color::Red),
        ("Spin Friendliness", a.scores.spin_score, r.spin_friendliness, Color::Yellow),
        ("Pace Friendliness", a.scores.pace_score, r.pace_friendliness, Color::Cyan),
    ];
    for (label, score, rating, color) in rows {
        table.add_row(vec![
            Cell::new(label).add_attribute(Attribute::Bold),
            Cell::new(score),
            Cell::new(format!("{} {}/10", rating_bar(rating), rating)).fg(color),
        ]);
    }
    println!("{}", table);

    println!("Pitch Type: {}", a.pitch_archetype);
    println!(
        "Expected First Innings Score: {}",
        a.expected_first_innings_run_range
    );
    println!("\nBatting Strategy:\n  {}", a.batting_strategy_text);
    println!("\nBowling Strategy:\n  {}", a.bowling_strategy_text);
}

pub fn print_breakdown(d: &ScoreBreakdown) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Factor").add_attribute(Attribute::Bold),
        Cell::new("Bat"),
        Cell::new("Bowl"),
        Cell::new("Spin"),
        Cell::new("Pace"),
    ]);
    for i in 1..=4 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    let venue_label = match d.matched_venue {
        Some(name) => format!("Venue ({})", name),
        None => "Venue".to_string(),
    };

    let factors: [(String, &Adjustment); 6] = [
        ("Weather".to_string(), &d.weather),
        (format!("Grass ({}%)", d.effective_grass), &d.grass),
        ("Moisture".to_string(), &d.moisture),
        ("Cracking".to_string(), &d.cracking),
        (format!("Wear ({} matches)", d.effective_matches), &d.wear),
        (venue_label, &d.venue),
    ];

    for (label, adj) in factors {
        let label = if adj.is_zero() {
            Cell::new(label).fg(Color::DarkGrey)
        } else {
            Cell::new(label)
        };
        table.add_row(vec![
            label,
            Cell::new(signed(adj.batting)),
            Cell::new(signed(adj.bowling)),
            Cell::new(signed(adj.spin)),
            Cell::new(signed(adj.pace)),
        ]);
    }

    table.add_row(vec![
        Cell::new("Raw").add_attribute(Attribute::Bold),
        Cell::new(format!("{:.1}", d.raw.batting)),
        Cell::new(format!("{:.1}", d.raw.bowling)),
        Cell::new(format!("{:.1}", d.raw.spin)),
        Cell::new(format!("{:.1}", d.raw.pace)),
    ]);
    table.add_row(vec![
        Cell::new("Clamped").add_attribute(Attribute::Bold),
        Cell::new(format!("{:.1}", d.totals.batting)),
        Cell::new(format!("{:.1}", d.totals.bowling)),
        Cell::new(format!("{:.1}", d.totals.spin)),
        Cell::new(format!("{:.1}", d.totals.pace)),
    ]);
    table.add_row(vec![
        Cell::new("Score").add_attribute(Attribute::Bold),
        Cell::new(d.scores.batting_score).fg(Color::Cyan),
        Cell::new(d.scores.bowling_score).fg(Color::Cyan),
        Cell::new(d.scores.spin_score).fg(Color::Cyan),
        Cell::new(d.scores.pace_score).fg(Color::Cyan),
    ]);

    println!("\n🔎 Score Breakdown");
    println!("{}", table);
}

pub fn print_batch_report(results: &[PitchResult<AnalysisReport>]) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("#").add_attribute(Attribute::Bold),
        Cell::new("Venue"),
        Cell::new("Bat"),
        Cell::new("Bowl"),
        Cell::new("Spin"),
        Cell::new("Pace"),
        Cell::new("Pitch Type").fg(Color::Cyan),
        Cell::new("Expected"),
    ]);
    for i in 2..=5 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for (i, result) in results.iter().enumerate() {
        match result {
            Ok(report) => {
                let s = &report.analysis.scores;
                table.add_row(vec![
                    Cell::new(i + 1),
                    Cell::new(report.conditions.venue_name.as_deref().unwrap_or("-")),
                    Cell::new(s.batting_score),
                    Cell::new(s.bowling_score),
                    Cell::new(s.spin_score),
                    Cell::new(s.pace_score),
                    Cell::new(report.analysis.pitch_archetype).fg(Color::Cyan),
                    Cell::new(report.analysis.expected_first_innings_run_range),
                ]);
            }
            Err(e) => {
                table.add_row(vec![
                    Cell::new(i + 1),
                    Cell::new(format!("❌ {}", e)).fg(Color::Red),
                    Cell::new(""),
                    Cell::new(""),
                    Cell::new(""),
                    Cell::new(""),
                    Cell::new(""),
                    Cell::new(""),
                ]);
            }
        }
    }
    println!("\n{}", table);
}

pub fn print_venue_tables() {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Venue").add_attribute(Attribute::Bold),
        Cell::new("Matches On"),
        Cell::new("Bat"),
        Cell::new("Bowl"),
        Cell::new("Spin"),
        Cell::new("Pace"),
    ]);
    for v in PITCH_VENUES {
        table.add_row(vec![
            Cell::new(v.name).add_attribute(Attribute::Bold),
            Cell::new(v.aliases.join(", ")),
            Cell::new(signed(v.shift.batting)),
            Cell::new(signed(v.shift.bowling)),
            Cell::new(signed(v.shift.spin)),
            Cell::new(signed(v.shift.pace)),
        ]);
    }
    println!("\n🏟️  Pitch profiles (first match wins)");
    println!("{}", table);

    let mut grounds = new_table();
    grounds.add_row(vec![
        Cell::new("Tendency").add_attribute(Attribute::Bold),
        Cell::new("Matches On"),
    ]);
    grounds.add_row(vec![
        Cell::new("High-scoring").fg(Color::Green),
        Cell::new(HIGH_SCORING_GROUNDS.join(", ")),
    ]);
    grounds.add_row(vec![
        Cell::new("Low-scoring").fg(Color::Red),
        Cell::new(LOW_SCORING_GROUNDS.join(", ")),
    ]);
    println!("\n📈 Scoring grounds");
    println!("{}", grounds);
}
