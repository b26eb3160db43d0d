//! The filtering predicate and the batch pass over a card collection.

use serde::Serialize;

use super::card::Card;
use super::state::FilterState;

/// Result of one full filter pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterOutcome {
    /// Per-card visibility, in collection order.
    pub visibility: Vec<bool>,
    /// How many cards stayed visible.
    pub visible_count: usize,
}

impl FilterOutcome {
    pub fn is_empty(&self) -> bool {
        self.visibility.is_empty()
    }

    pub fn hidden_count(&self) -> usize {
        self.visibility.len() - self.visible_count
    }

    /// Indices of the cards that stayed visible, in order.
    pub fn visible_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.visibility
            .iter()
            .enumerate()
            .filter_map(|(index, visible)| visible.then_some(index))
    }
}

/// Decide whether a single card stays visible under the given state.
///
/// Three checks, all of which must pass:
/// - keyword: the trimmed, lower-cased query is empty or occurs as a bare
///   substring of the card corpus (no tokenization, no anchoring);
/// - status: the status filter is empty or equals the card status exactly,
///   case-sensitively;
/// - category: same rule against the card category.
///
/// Pure and infallible; malformed input can only fail to match.
pub fn evaluate(card: &Card, state: &FilterState) -> bool {
    let keyword = state.query.trim().to_lowercase();
    let keyword_match = keyword.is_empty() || card.corpus().contains(&keyword);
    let status_match = state.status.is_empty() || card.status == state.status;
    let category_match = state.category.is_empty() || card.category == state.category;
    keyword_match && status_match && category_match
}

/// Evaluate every card in order and tally the survivors.
///
/// Each invocation is an independent full pass: nothing is carried over
/// from previous calls, so applying the same state twice yields the same
/// outcome. An empty collection yields an empty outcome with count zero.
pub fn apply_all(cards: &[Card], state: &FilterState) -> FilterOutcome {
    let mut outcome = FilterOutcome {
        visibility: Vec::with_capacity(cards.len()),
        visible_count: 0,
    };
    for card in cards {
        let visible = evaluate(card, state);
        if visible {
            outcome.visible_count += 1;
        }
        outcome.visibility.push(visible);
    }
    outcome
}
