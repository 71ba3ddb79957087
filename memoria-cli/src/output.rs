use colored::*;
use memoria::core::ResolvedRelative;
use memoria::prelude::*;
use memoria::relationships::RelationTypeDef;
use serde::Serialize;
use serde_json::json;

pub struct CliColors;

impl CliColors {
    pub fn success() -> Color {
        Color::TrueColor {
            r: 34,
            g: 197,
            b: 94,
        }
    }

    pub fn error() -> Color {
        Color::TrueColor {
            r: 239,
            g: 68,
            b: 68,
        }
    }

    pub fn warning() -> Color {
        Color::TrueColor {
            r: 245,
            g: 158,
            b: 11,
        }
    }

    pub fn info() -> Color {
        Color::TrueColor {
            r: 59,
            g: 130,
            b: 246,
        }
    }

    pub fn ancestor() -> Color {
        Color::TrueColor {
            r: 59,
            g: 130,
            b: 246,
        }
    }

    pub fn descendant() -> Color {
        Color::TrueColor {
            r: 34,
            g: 197,
            b: 94,
        }
    }

    pub fn collateral() -> Color {
        Color::TrueColor {
            r: 168,
            g: 85,
            b: 247,
        }
    }

    pub fn muted() -> Color {
        Color::TrueColor {
            r: 148,
            g: 163,
            b: 184,
        }
    }

    pub fn accent() -> Color {
        Color::TrueColor {
            r: 59,
            g: 130,
            b: 246,
        }
    }
}

pub fn output_error(error_msg: &str, output_format: &str) {
    if output_format == "json" {
        let error_response = json!({
            "error": true,
            "message": error_msg,
            "timestamp": chrono::Utc::now().to_rfc3339()
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&error_response).unwrap_or_else(|_| "{}".to_string())
        );
    } else {
        eprintln!("{}", format_error(error_msg));
    }
}

/// Pretty-print any serializable value as JSON
pub fn print_json<T: Serialize + ?Sized>(value: &T) {
    println!(
        "{}",
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    );
}

pub fn format_success(msg: &str) -> String {
    format!(
        "{} {}",
        "✓".color(CliColors::success()).bold(),
        msg.color(CliColors::success())
    )
}

pub fn format_error(msg: &str) -> String {
    format!(
        "{} {}",
        "✗".color(CliColors::error()).bold(),
        msg.color(CliColors::error())
    )
}

pub fn format_warning(msg: &str) -> String {
    format!(
        "{} {}",
        "⚠".color(CliColors::warning()).bold(),
        msg.color(CliColors::warning())
    )
}

pub fn format_info(msg: &str) -> String {
    format!(
        "{} {}",
        "ℹ".color(CliColors::info()).bold(),
        msg.color(CliColors::info())
    )
}

pub fn format_relation(relation: RelationType) -> ColoredString {
    use RelationType::*;
    let label = relation.label();
    match relation {
        Father | Mother | Parent | Grandparent => label.color(CliColors::ancestor()),
        Child | Son | Daughter | Grandchild => label.color(CliColors::descendant()),
        Spouse => label.color(CliColors::warning()),
        Sibling | Brother | Sister | Uncle | Aunt | NephewNiece | Cousin => {
            label.color(CliColors::collateral())
        }
    }
}

pub fn print_record(record: &MemorialRecord) {
    println!(
        "{}",
        "━━━ Memorial Details ━━━".color(CliColors::accent()).bold()
    );
    println!("{}: {}", "ID".bold(), record.id.color(CliColors::accent()));
    println!("{}: {}", "Name".bold(), record.display_name());
    println!("{}: {}", "City".bold(), record.city);
    if let Some(region) = &record.region {
        println!("{}: {}", "Region".bold(), region);
    }
    if let Some(birth) = record.birth_date {
        println!("{}: {}", "Born".bold(), birth);
    }
    if let Some(death) = record.death_date {
        match record.age_at_death() {
            Some(age) => println!("{}: {} (aged {})", "Died".bold(), death, age),
            None => println!("{}: {}", "Died".bold(), death),
        }
    }
    if let Some(gender) = record.gender {
        println!("{}: {}", "Gender".bold(), gender);
    }
    let details = [
        ("Birthplace", &record.birth_place),
        ("Profession", &record.profession),
        ("Education", &record.education),
        ("Cemetery", &record.cemetery),
        ("Message", &record.message),
        ("Genealogy", &record.genealogy),
    ];
    for (label, value) in details {
        if let Some(value) = value {
            println!("{}: {}", label.bold(), value);
        }
    }
    println!(
        "{}: {}",
        "Candles".bold(),
        record.candles.to_string().color(CliColors::warning())
    );
    println!(
        "{}: {}",
        "Created".bold(),
        record
            .created_at
            .format("%Y-%m-%d %H:%M:%S UTC")
            .to_string()
            .color(CliColors::muted())
    );
}

pub fn print_candidate_list(candidates: &[Candidate]) {
    if candidates.is_empty() {
        println!("{}", format_info("No matching memorials found."));
        return;
    }

    println!(
        "{}",
        format_info(&format!("Found {} memorials:", candidates.len()))
    );
    println!();

    for (i, candidate) in candidates.iter().enumerate() {
        println!(
            "{}. {} {} {}",
            (i + 1).to_string().color(CliColors::muted()),
            candidate.id.color(CliColors::accent()),
            candidate.display_name().bold(),
            format!("({})", candidate.city).color(CliColors::muted())
        );
    }
}

pub fn print_relatives(id: &str, relatives: &[ResolvedRelative]) {
    if relatives.is_empty() {
        println!(
            "{}",
            format_info(&format!("No relatives recorded for '{}'.", id))
        );
        return;
    }

    println!(
        "{}",
        format_info(&format!("{} relatives of '{}':", relatives.len(), id))
    );
    println!();

    for relative in relatives {
        println!(
            "  {:<14} {} {}",
            format_relation(relative.relation_type),
            relative.relative.display_name().bold(),
            format!("[{}]", relative.relative.id).color(CliColors::muted())
        );
    }
}

pub fn print_edge(edge: &RelationshipEdge) {
    println!(
        "  {} {} {} ({})",
        edge.source_id.color(CliColors::accent()),
        "→".color(CliColors::muted()),
        edge.target_id.color(CliColors::accent()),
        format_relation(edge.relation_type)
    );
}

pub fn print_save_outcome(outcome: &SaveOutcome) {
    let verb = if outcome.created { "created" } else { "updated" };
    println!(
        "{}",
        format_success(&format!("Memorial '{}' {}.", outcome.id, verb))
    );

    let diff = &outcome.diff;
    if diff.is_empty() {
        return;
    }
    for edge in &diff.added {
        print!("{} ", "+".color(CliColors::success()).bold());
        print_edge(edge);
    }
    for edge in &diff.retyped {
        print!("{} ", "~".color(CliColors::warning()).bold());
        print_edge(edge);
    }
    for edge in &diff.removed {
        print!("{} ", "-".color(CliColors::error()).bold());
        print_edge(edge);
    }
}

pub fn print_relation_types(defs: &[RelationTypeDef]) {
    println!(
        "{}",
        "━━━ Relation Types ━━━".color(CliColors::accent()).bold()
    );
    for def in defs {
        let reciprocal = match def.inverse {
            Some(_) if def.symmetric => "(symmetric)".color(CliColors::muted()).to_string(),
            Some(inverse) => format!("↔ {}", format_relation(inverse)),
            None => "no reciprocal".color(CliColors::muted()).to_string(),
        };
        println!("  {} {}", format_relation(def.relation), reciprocal);
    }
}
