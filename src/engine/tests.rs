//! Tests for the filter/paginate engine

use super::*;
use crate::types::Character;
use pretty_assertions::assert_eq;
use test_case::test_case;

fn roster() -> Vec<Character> {
    vec![
        Character::new(1, "Rick Sanchez")
            .with_location("Citadel of Ricks")
            .with_status("Alive"),
        Character::new(2, "Morty Smith").with_location("Citadel of Ricks"),
        Character::new(3, "Summer Smith").with_location("Earth (Replacement Dimension)"),
        Character::new(4, "Abradolf Lincler")
            .with_location("Testicle Monster Dimension")
            .with_kind("Genetic experiment"),
        Character::new(5, "Alien Rick")
            .with_location("Citadel of Ricks")
            .with_kind("Parasite"),
        // No location at all
        Character::new(6, "Adjudicator Rick"),
    ]
}

fn ids(records: &[&Character]) -> Vec<u64> {
    records.iter().map(|c| c.id).collect()
}

/// Render buttons as the compact strings used in the tables below
fn labels(buttons: &[PageButton]) -> Vec<String> {
    buttons.iter().map(ToString::to_string).collect()
}

// ============================================================================
// Filtering
// ============================================================================

#[test]
fn test_empty_criteria_matches_everything() {
    let roster = roster();
    let result = visible(&roster, &FilterCriteria::new());
    assert_eq!(ids(&result), vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn test_name_filter_is_case_insensitive_substring() {
    let roster = roster();
    let result = visible(&roster, &FilterCriteria::new().name("RICK"));
    assert_eq!(ids(&result), vec![1, 5, 6]);
}

#[test]
fn test_filters_combine_with_and() {
    let roster = roster();
    let criteria = FilterCriteria::new().name("rick").location("citadel");
    assert_eq!(ids(&visible(&roster, &criteria)), vec![1, 5]);

    let criteria = criteria.kind("parasite");
    assert_eq!(ids(&visible(&roster, &criteria)), vec![5]);
}

#[test]
fn test_missing_location_reads_as_empty() {
    let roster = roster();
    let result = visible(&roster, &FilterCriteria::new().location("c"));
    assert!(!ids(&result).contains(&6));

    // An empty location filter still admits the record without a location
    let result = visible(&roster, &FilterCriteria::new().name("adjudicator"));
    assert_eq!(ids(&result), vec![6]);
}

#[test]
fn test_visible_is_ordered_subsequence() {
    let roster = roster();
    let criteria = FilterCriteria::new().name("s");
    let result = visible(&roster, &criteria);

    let positions: Vec<usize> = result
        .iter()
        .map(|c| roster.iter().position(|r| r.id == c.id).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
    assert!(result.iter().all(|c| criteria.matches(c)));
}

// ============================================================================
// Page slicing
// ============================================================================

#[test_case(1, &[1, 2, 3] ; "first page")]
#[test_case(2, &[4, 5, 6] ; "middle page")]
#[test_case(4, &[10] ; "short last page")]
#[test_case(5, &[] ; "past the end")]
#[test_case(0, &[] ; "page zero")]
#[test_case(-3, &[] ; "negative page")]
#[test_case(i64::MAX, &[] ; "huge page")]
#[test_case(i64::MIN, &[] ; "most negative page")]
fn test_page_window(page_number: i64, expected: &[u32]) {
    let items: Vec<u32> = (1..=10).collect();
    assert_eq!(page(&items, page_number, 3), expected);
}

#[test]
fn test_page_never_exceeds_size() {
    let items: Vec<u32> = (1..=23).collect();
    for p in -2..=10 {
        assert!(page(&items, p, 4).len() <= 4);
    }
}

#[test]
fn test_page_with_zero_size_is_empty() {
    let items = [1, 2, 3];
    assert!(page(&items, 1, 0).is_empty());
}

#[test_case(0, 20, 0 ; "nothing filtered")]
#[test_case(20, 20, 1 ; "exactly one page")]
#[test_case(21, 20, 2 ; "one extra record")]
#[test_case(826, 20, 42 ; "full catalog")]
#[test_case(50, 0, 0 ; "unknown page size")]
fn test_page_count(filtered: usize, size: usize, expected: usize) {
    assert_eq!(page_count(filtered, size), expected);
}

// ============================================================================
// Page buttons
// ============================================================================

#[test_case(4, 2, &["1", "2", "3", "4"] ; "few pages")]
#[test_case(5, 5, &["1", "2", "3", "4", "5"] ; "exactly five")]
#[test_case(10, 1, &["1", "2", "3", "4", "5", "…", "10"] ; "at start")]
#[test_case(10, 3, &["1", "2", "3", "4", "5", "…", "10"] ; "near start")]
#[test_case(10, 10, &["1", "…", "6", "7", "8", "9", "10"] ; "at end")]
#[test_case(10, 8, &["1", "…", "6", "7", "8", "9", "10"] ; "near end")]
#[test_case(10, 5, &["1", "…", "4", "5", "6", "…", "10"] ; "middle")]
#[test_case(6, 4, &["1", "…", "2", "3", "4", "5", "6"] ; "six pages current four")]
#[test_case(0, 1, &[] ; "no pages")]
fn test_page_buttons(total: usize, current: usize, expected: &[&str]) {
    assert_eq!(labels(&page_buttons(total, current)), expected);
}

#[test]
fn test_page_buttons_mark_current_only() {
    let buttons = page_buttons(10, 5);
    let current: Vec<usize> = buttons
        .iter()
        .filter(|b| b.is_current())
        .filter_map(PageButton::number)
        .collect();
    assert_eq!(current, vec![5]);
    assert_eq!(buttons[1], PageButton::Ellipsis);
    assert_eq!(buttons[1].number(), None);
}

// ============================================================================
// View state
// ============================================================================

#[test]
fn test_filter_change_resets_page() {
    let mut view = ViewState::new();
    view.go_to(3);
    view.set_name_filter("x");
    assert_eq!(view.page, 1);

    view.go_to(3);
    view.set_location_filter("earth");
    assert_eq!(view.page, 1);

    view.go_to(3);
    view.set_type_filter("robot");
    assert_eq!(view.page, 1);

    view.go_to(2);
    view.set_criteria(FilterCriteria::new());
    assert_eq!(view.page, 1);
}

#[test]
fn test_go_to_is_unchecked() {
    let mut view = ViewState::new();
    view.go_to(99);
    assert_eq!(view.page, 99);
    assert!(!ViewState::can_go_to(99, 4));
    assert!(!ViewState::can_go_to(0, 4));
    assert!(ViewState::can_go_to(4, 4));
}

#[test]
fn test_clamp() {
    let mut view = ViewState::new();
    view.go_to(7);
    view.clamp(3);
    assert_eq!(view.page, 3);

    view.clamp(0);
    assert_eq!(view.page, 1);

    view.go_to(0);
    view.clamp(5);
    assert_eq!(view.page, 1);
}

#[test]
fn test_view_state_serde() {
    let view: ViewState =
        serde_json::from_str(r#"{"criteria": {"name": "rick", "type": "parasite"}, "page": 2}"#)
            .unwrap();
    assert_eq!(view.criteria.kind, "parasite");
    assert_eq!(view.criteria.location, "");
    assert_eq!(view.page, 2);

    let defaulted: ViewState = serde_json::from_str("{}").unwrap();
    assert_eq!(defaulted, ViewState::default());
}

// ============================================================================
// Render
// ============================================================================

#[test]
fn test_render_first_page() {
    let roster = roster();
    let model = render(&roster, 2, &ViewState::new(), false);

    assert_eq!(model.total_pages, 3);
    assert_eq!(model.filtered_count, 6);
    assert_eq!(model.total_count, 6);
    assert_eq!(
        model.cards.iter().map(|c| c.id).collect::<Vec<_>>(),
        vec![1, 2]
    );
    assert!(!model.prev_enabled);
    assert!(model.next_enabled);
    assert_eq!(labels(&model.buttons), vec!["1", "2", "3"]);
    assert!(model.message.is_none());
}

#[test]
fn test_render_last_page_disables_next() {
    let roster = roster();
    let mut view = ViewState::new();
    view.go_to(3);
    let model = render(&roster, 2, &view, false);

    assert!(model.prev_enabled);
    assert!(!model.next_enabled);
    assert_eq!(model.cards[0].id, 5);
}

#[test]
fn test_render_card_fields() {
    let roster = roster();
    let model = render(&roster, 1, &ViewState::new(), false);
    let card = &model.cards[0];

    assert_eq!(card.name, "Rick Sanchez");
    assert_eq!(card.status_kind, crate::types::Status::Alive);
    assert_eq!(card.badge_color, "green");
    assert_eq!(card.last_location, "Citadel of Ricks");
    assert_eq!(card.episode_count, 0);
}

#[test]
fn test_render_badge_color_follows_status() {
    let roster = vec![
        Character::new(1, "Rick Sanchez").with_status("Alive"),
        Character::new(2, "Birdperson").with_status("Dead"),
        Character::new(3, "Mr. Poopybutthole").with_status("unknown"),
    ];
    let model = render(&roster, 3, &ViewState::new(), false);

    let colors: Vec<&str> = model.cards.iter().map(|c| c.badge_color.as_str()).collect();
    assert_eq!(colors, vec!["green", "red", "gray"]);
}

#[test]
fn test_render_empty_state() {
    let roster = roster();
    let mut view = ViewState::new();
    view.set_name_filter("nobody");
    let model = render(&roster, 2, &view, false);

    assert!(model.empty);
    assert!(model.cards.is_empty());
    assert!(model.buttons.is_empty());
    assert_eq!(model.total_pages, 0);
    assert_eq!(model.message.as_deref(), Some(NO_RESULTS_MESSAGE));
}

#[test]
fn test_render_while_loading_has_no_message() {
    let model = render(&[], 0, &ViewState::new(), true);
    assert!(model.empty);
    assert!(model.loading);
    assert!(model.message.is_none());
}

#[test]
fn test_render_zero_page_size_does_not_panic() {
    let roster = roster();
    let model = render(&roster, 0, &ViewState::new(), false);
    assert_eq!(model.total_pages, 0);
    assert!(model.cards.is_empty());
}
