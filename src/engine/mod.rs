//! Filter/paginate engine
//!
//! Pure functions from a roster and a [`ViewState`] to what should be shown:
//! the visible subset, the current page slice, the page count and the
//! truncated page-button strip.
//!
//! # Page buttons
//!
//! ```text
//! total <= 5          1 2 3 4 5
//! current <= 3        1 2 3 4 5 … T
//! current >= T - 2    1 … T-4 T-3 T-2 T-1 T
//! otherwise           1 … c-1 c c+1 … T
//! ```

mod types;

pub use types::{Card, FilterCriteria, PageButton, RenderModel, ViewState, NO_RESULTS_MESSAGE};

use crate::types::Character;

/// Largest button strip shown without ellipses
const MAX_PLAIN_BUTTONS: usize = 5;

/// Records passing every filter, in roster order
pub fn visible<'a>(roster: &'a [Character], criteria: &FilterCriteria) -> Vec<&'a Character> {
    roster.iter().filter(|c| criteria.matches(c)).collect()
}

/// The window `[(page-1)*size, page*size)` of `items`, clipped to bounds.
///
/// Any out-of-range page, including zero and negatives, gives an empty slice.
pub fn page<T>(items: &[T], page_number: i64, page_size: usize) -> &[T] {
    if page_number < 1 || page_size == 0 {
        return &[];
    }
    let Ok(index) = usize::try_from(page_number - 1) else {
        return &[];
    };
    let Some(start) = index.checked_mul(page_size) else {
        return &[];
    };
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// `ceil(filtered / page_size)`, zero when the page size is unknown
pub fn page_count(filtered: usize, page_size: usize) -> usize {
    if page_size == 0 {
        0
    } else {
        filtered.div_ceil(page_size)
    }
}

/// The page-button strip for `total_pages` with `current_page` highlighted
pub fn page_buttons(total_pages: usize, current_page: usize) -> Vec<PageButton> {
    let button = |number: usize| PageButton::Page {
        number,
        current: number == current_page,
    };

    if total_pages <= MAX_PLAIN_BUTTONS {
        return (1..=total_pages).map(button).collect();
    }

    let mut buttons = Vec::with_capacity(MAX_PLAIN_BUTTONS + 2);
    if current_page <= 3 {
        buttons.extend((1..=5).map(button));
        buttons.push(PageButton::Ellipsis);
        buttons.push(button(total_pages));
    } else if current_page >= total_pages - 2 {
        buttons.push(button(1));
        buttons.push(PageButton::Ellipsis);
        buttons.extend((total_pages - 4..=total_pages).map(button));
    } else {
        buttons.push(button(1));
        buttons.push(PageButton::Ellipsis);
        buttons.extend((current_page - 1..=current_page + 1).map(button));
        buttons.push(PageButton::Ellipsis);
        buttons.push(button(total_pages));
    }
    buttons
}

/// Project a roster and view into a render model
pub fn render(
    roster: &[Character],
    page_size: usize,
    view: &ViewState,
    loading: bool,
) -> RenderModel {
    let filtered = visible(roster, &view.criteria);
    let total_pages = page_count(filtered.len(), page_size);
    let current = view.page;
    let slice = page(
        &filtered,
        i64::try_from(current).unwrap_or(i64::MAX),
        page_size,
    );
    let empty = filtered.is_empty();

    RenderModel {
        cards: slice.iter().map(|c| Card::from(*c)).collect(),
        buttons: page_buttons(total_pages, current),
        page: current,
        total_pages,
        filtered_count: filtered.len(),
        total_count: roster.len(),
        prev_enabled: current > 1,
        next_enabled: current < total_pages,
        loading,
        empty,
        message: (empty && !loading).then(|| NO_RESULTS_MESSAGE.to_string()),
        error: None,
    }
}

#[cfg(test)]
mod tests;
