//! Pure derivations over the project collection.
//!
//! # Responsibility
//! - Compute filtered subsets, sorted copies and aggregates for the views.
//! - Stay free of I/O and rendering concerns.
//!
//! # Invariants
//! - Every function reads its input slice and returns a new value.
//! - No function reorders or mutates the source collection.
//! - Empty input yields an empty sequence or a zero aggregate, never an error.

pub mod aggregate;
pub mod criteria;
pub mod ordering;
pub mod search;

pub use aggregate::{
    count, filter_by, filter_funded, filter_unfunded, funded_count, funding_percentage,
    is_funded, progress_width, summarize, total_backers, total_pledged, unfunded_count,
    CatalogSummary,
};
pub use criteria::{FilterMode, SortCriterion, UnknownLabel};
pub use ordering::{sort_by, sort_by_label, sorted_copy, top_n, SortOutcome};
pub use search::{search, SearchTerm};
