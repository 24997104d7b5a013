//! Section ordering: move-before reordering for the six resume sections.
//!
//! The drag layer reports a completed gesture as `(moved, target)`. `reorder` removes
//! `moved` and reinserts it at the index `target` occupied before the move. This is a
//! single-element move, not a swap.

use crate::models::resume::{SectionType, DEFAULT_SECTION_ORDER};

/// Returns the order with `moved` relocated to `target`'s original index.
///
/// Unchanged when either id is absent or `moved == target`.
pub fn reorder(order: &[SectionType], moved: SectionType, target: SectionType) -> Vec<SectionType> {
    if moved == target {
        return order.to_vec();
    }

    let from = order.iter().position(|s| *s == moved);
    let to = order.iter().position(|s| *s == target);

    match (from, to) {
        (Some(from), Some(to)) => {
            let mut next = order.to_vec();
            let section = next.remove(from);
            next.insert(to, section);
            next
        }
        _ => order.to_vec(),
    }
}

/// True when `order` holds each of the six sections exactly once.
pub fn is_valid_order(order: &[SectionType]) -> bool {
    order.len() == DEFAULT_SECTION_ORDER.len()
        && DEFAULT_SECTION_ORDER
            .iter()
            .all(|section| order.iter().filter(|s| *s == section).count() == 1)
}

/// Returns `order` if it is a valid permutation, the canonical order otherwise.
pub fn normalize_section_order(order: Vec<SectionType>) -> Vec<SectionType> {
    if is_valid_order(&order) {
        order
    } else {
        DEFAULT_SECTION_ORDER.to_vec()
    }
}
