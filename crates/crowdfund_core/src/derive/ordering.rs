//! Ordered copies of the collection.
//!
//! # Invariants
//! - Sorting always happens on a copy built by [`sorted_copy`].
//! - All orderings are stable: equal keys keep their source order.

use crate::derive::criteria::SortCriterion;
use crate::model::project::Project;
use feruca::Collator;
use std::cmp::Ordering;

/// Result of sorting with an untyped criterion label.
#[derive(Debug, Clone, PartialEq)]
pub struct SortOutcome {
    /// Sorted copy, or the source order when the label was unknown.
    pub items: Vec<Project>,
    /// Applied criterion; `None` signals an unknown label.
    pub criterion: Option<SortCriterion>,
}

impl SortOutcome {
    pub fn is_unknown_criterion(&self) -> bool {
        self.criterion.is_none()
    }
}

/// Returns a stably sorted copy of `collection`; the source is left untouched.
pub fn sorted_copy<F>(collection: &[Project], compare: F) -> Vec<Project>
where
    F: FnMut(&Project, &Project) -> Ordering,
{
    let mut copy = collection.to_vec();
    copy.sort_by(compare);
    copy
}

/// Returns a copy ordered by `criterion`.
///
/// - `Name`: ascending by the Unicode root-locale collation, so accented
///   letters sort next to their base letter; names differing only by case put
///   lowercase first.
/// - `Pledged`, `Backers`: descending.
pub fn sort_by(collection: &[Project], criterion: SortCriterion) -> Vec<Project> {
    match criterion {
        SortCriterion::Name => {
            let mut collator = Collator::default();
            sorted_copy(collection, |a, b| {
                compare_names(&mut collator, a.name(), b.name())
            })
        }
        SortCriterion::Pledged => sorted_copy(collection, by_pledged_desc),
        SortCriterion::Backers => {
            sorted_copy(collection, |a, b| b.backers().cmp(&a.backers()))
        }
    }
}

/// Sorts by a criterion label such as `"pledged"`.
///
/// Unknown labels produce the identity order with `criterion: None` instead
/// of an error.
pub fn sort_by_label(collection: &[Project], label: &str) -> SortOutcome {
    match label.parse::<SortCriterion>() {
        Ok(criterion) => SortOutcome {
            items: sort_by(collection, criterion),
            criterion: Some(criterion),
        },
        Err(_) => SortOutcome {
            items: collection.to_vec(),
            criterion: None,
        },
    }
}

/// Returns the `n` projects with the highest pledged amount, highest first.
///
/// Ties keep collection order. Returns fewer than `n` items for small
/// collections and nothing for `n == 0`.
pub fn top_n(collection: &[Project], n: usize) -> Vec<Project> {
    if n == 0 {
        return Vec::new();
    }
    let mut ranked = sorted_copy(collection, by_pledged_desc);
    ranked.truncate(n);
    ranked
}

fn by_pledged_desc(a: &Project, b: &Project) -> Ordering {
    b.pledged().total_cmp(&a.pledged())
}

fn compare_names(collator: &mut Collator, a: &str, b: &str) -> Ordering {
    // Uppercase ASCII bytes sort before lowercase, so the reversed raw
    // comparison puts lowercase first when the collator sees a tie.
    collator.collate(a, b).then_with(|| b.cmp(a))
}
