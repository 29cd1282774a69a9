//! Plain-text presentation of missions, crews and astronauts.
//!
//! # Responsibility
//! - Render already-resolved records; no lookups, no business rules.
//!
//! # Invariants
//! - Crew is printed in the order it was resolved (mission roster order).
//! - Launch dates are printed exactly as the model formats them, so an
//!   absent date always shows the `N/A` sentinel.

use crate::model::astronaut::Astronaut;
use crate::model::mission::Mission;
use crate::service::mission_service::MissionDetail;

const MIN_CARD_WIDTH: usize = 12;
const CARD_GAP: &str = " ";

/// One row per mission: name, short launch date and badge key.
pub fn render_mission_list(missions: &[Mission]) -> String {
    let name_width = missions
        .iter()
        .map(|mission| mission.display_name().chars().count())
        .max()
        .unwrap_or(0);
    let date_width = missions
        .iter()
        .map(|mission| mission.formatted_launch_date().chars().count())
        .max()
        .unwrap_or(0);

    missions
        .iter()
        .map(|mission| {
            format!(
                "{}  {}  [{}]",
                pad(&mission.display_name(), name_width),
                pad(&mission.formatted_launch_date(), date_width),
                mission.image_key()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Bordered mission cards, `columns` per row (at least one).
pub fn render_mission_grid(missions: &[Mission], columns: usize) -> String {
    let columns = columns.max(1);
    let cards = missions
        .iter()
        .map(|mission| [mission.display_name(), mission.formatted_launch_date()])
        .collect::<Vec<_>>();
    let width = cards
        .iter()
        .flat_map(|lines| lines.iter().map(|line| line.chars().count()))
        .max()
        .unwrap_or(0)
        .max(MIN_CARD_WIDTH);
    let border = format!("+{}+", "-".repeat(width + 2));

    let mut rows = Vec::new();
    for chunk in cards.chunks(columns) {
        let edge = vec![border.as_str(); chunk.len()].join(CARD_GAP);
        rows.push(edge.clone());
        for line in 0..2 {
            rows.push(
                chunk
                    .iter()
                    .map(|card| format!("| {} |", pad(&card[line], width)))
                    .collect::<Vec<_>>()
                    .join(CARD_GAP),
            );
        }
        rows.push(edge);
    }
    rows.join("\n")
}

/// Mission badge, long launch date, highlights and crew roster.
pub fn render_mission_detail(detail: &MissionDetail<'_>) -> String {
    let mission = detail.mission;
    let mut lines = vec![
        mission.display_name(),
        format!("[badge: {}]", mission.image_key()),
        mission.detailed_launch_date(),
        String::new(),
    ];
    push_section(&mut lines, "Mission Highlights");
    lines.push(mission.description.clone());
    lines.push(String::new());
    push_section(&mut lines, "Crew");
    if detail.crew.is_empty() {
        lines.push("(no crew)".to_string());
    }
    for member in &detail.crew {
        lines.push(format!(
            "- {} ({}) [{}]",
            member.astronaut.name,
            member.role,
            member.astronaut.image_key()
        ));
    }
    lines.join("\n")
}

/// Astronaut name, portrait key and biography.
pub fn render_astronaut(astronaut: &Astronaut) -> String {
    [
        astronaut.name.clone(),
        format!("[portrait: {}]", astronaut.image_key()),
        String::new(),
        astronaut.description.clone(),
    ]
    .join("\n")
}

fn push_section(lines: &mut Vec<String>, title: &str) {
    lines.push(title.to_string());
    lines.push("-".repeat(title.chars().count()));
}

fn pad(value: &str, width: usize) -> String {
    format!("{value:<width$}")
}
