//! Human-readable output

use crate::details::CharacterDetails;
use crate::engine::{PageButton, RenderModel};
use std::fmt::Write;

/// Format a list view
pub fn list(model: &RenderModel) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "Characters: page {} of {} ({} matching, {} loaded)",
        model.page, model.total_pages, model.filtered_count, model.total_count
    );
    if let Some(error) = &model.error {
        let _ = writeln!(out, "warning: roster incomplete: {error}");
    }

    if let Some(message) = &model.message {
        let _ = writeln!(out, "\n{message}");
        return out;
    }

    for card in &model.cards {
        let _ = writeln!(out, "\n#{} {} [{}]", card.id, card.name, card.status);
        let _ = writeln!(out, "   Type: {}", or_dash(&card.kind));
        let _ = writeln!(out, "   Total Episodes: {}", card.episode_count);
        let _ = writeln!(out, "   Last Location: {}", or_dash(&card.last_location));
    }

    if !model.buttons.is_empty() {
        let _ = writeln!(out, "\n{}", pager(model));
    }
    out
}

/// `Prev 1 … 4 [5] 6 … 10 Next`, disabled controls in parentheses
fn pager(model: &RenderModel) -> String {
    let mut parts = Vec::with_capacity(model.buttons.len() + 2);
    parts.push(if model.prev_enabled { "Prev" } else { "(Prev)" }.to_string());
    parts.extend(model.buttons.iter().map(button));
    parts.push(if model.next_enabled { "Next" } else { "(Next)" }.to_string());
    parts.join(" ")
}

/// One page button, the current page in brackets
pub fn button(button: &PageButton) -> String {
    if button.is_current() {
        format!("[{button}]")
    } else {
        button.to_string()
    }
}

/// Format a details view
pub fn details(details: &CharacterDetails) -> String {
    let c = &details.character;
    let mut out = String::new();

    let _ = writeln!(out, "{}", c.name);
    let _ = writeln!(out, "Status: {}", c.status);
    let _ = writeln!(out, "Species: {}", or_dash(&c.species));
    let _ = writeln!(out, "Gender: {}", or_dash(&c.gender));
    let _ = writeln!(out, "Origin: {}", or_dash(c.origin_name()));
    let _ = writeln!(out, "Location: {}", or_dash(c.location_name()));

    let _ = writeln!(out, "\nEpisodes");
    for episode in &details.episodes {
        let _ = writeln!(
            out,
            "  {}  {}  (Air Date: {})",
            episode.code, episode.name, episode.air_date
        );
    }
    if let Some(error) = &details.episode_error {
        let _ = writeln!(
            out,
            "  {} episode(s) unavailable: {error}",
            details.missing_episodes.len()
        );
    }
    out
}

fn or_dash(text: &str) -> &str {
    if text.is_empty() {
        "-"
    } else {
        text
    }
}
