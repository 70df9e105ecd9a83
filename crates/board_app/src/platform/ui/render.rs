use std::fmt::Write;

use board_core::{AppViewModel, FilterField, FilterOptions, JobCardView, JobDetailView};

const INDENT: &str = "    ";

/// Renders the visible job list with a one-line summary on top.
pub fn render(view: &AppViewModel) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", status_line(view));
    if view.cards.is_empty() {
        out.push_str("No jobs to show.\n");
        return out;
    }
    for card in &view.cards {
        out.push('\n');
        render_card(&mut out, card);
    }
    out
}

pub fn render_options(options: &FilterOptions) -> String {
    let mut out = String::new();
    for field in FilterField::ALL {
        let values = options.for_field(field);
        let listed = if values.is_empty() {
            "(none)".to_string()
        } else {
            values
                .iter()
                .map(|value| display_value(value))
                .collect::<Vec<_>>()
                .join(", ")
        };
        let _ = writeln!(out, "{field}: All, {listed}");
    }
    out
}

fn status_line(view: &AppViewModel) -> String {
    let mut line = format!("Showing {} of {} jobs", view.cards.len(), view.job_count);
    let active: Vec<String> = FilterField::ALL
        .into_iter()
        .filter_map(|field| view.criteria.get(field).map(|value| format!("{field}={value}")))
        .collect();
    if !active.is_empty() {
        let _ = write!(line, " | filters: {}", active.join(", "));
    }
    if let Some(sort) = view.sort {
        let _ = write!(line, " | sort: {sort}");
    }
    line
}

fn render_card(out: &mut String, card: &JobCardView) {
    let _ = writeln!(out, "[#{}] {}", card.job_no, card.title);
    let _ = writeln!(
        out,
        "{INDENT}Posted: {} | Type: {} | Level: {}",
        card.posted, card.job_type, card.level
    );
    if card.expanded {
        render_detail(out, &card.detail);
    }
}

fn render_detail(out: &mut String, detail: &JobDetailView) {
    let rows = [
        ("Title", &detail.title),
        ("Posted", &detail.posted),
        ("Type", &detail.job_type),
        ("Level", &detail.level),
        ("Estimated Time", &detail.estimated_time),
        ("Skill", &detail.skill),
        ("Detail", &detail.detail),
        ("Link", &detail.link),
    ];
    for (label, value) in rows {
        let _ = writeln!(out, "{INDENT}{INDENT}{label}: {value}");
    }
}

fn display_value(value: &str) -> &str {
    if value.is_empty() {
        "(blank)"
    } else {
        value
    }
}
