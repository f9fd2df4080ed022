//! Funding filters, per-record funding metrics and collection totals.

use crate::derive::criteria::FilterMode;
use crate::model::project::Project;
use serde::Serialize;

/// Funding progress in percent, rounded; may exceed 100.
pub fn funding_percentage(project: &Project) -> u64 {
    // goal > 0 and pledged >= 0 are guaranteed by construction.
    (project.pledged() / project.goal() * 100.0).round() as u64
}

/// Funding percentage clamped to `0..=100` for progress-bar width.
pub fn progress_width(project: &Project) -> u8 {
    funding_percentage(project).min(100) as u8
}

/// Whether the project has met or exceeded its goal.
pub fn is_funded(project: &Project) -> bool {
    project.pledged() >= project.goal()
}

pub fn filter_funded(collection: &[Project]) -> Vec<Project> {
    collection.iter().filter(|p| is_funded(p)).cloned().collect()
}

pub fn filter_unfunded(collection: &[Project]) -> Vec<Project> {
    collection.iter().filter(|p| !is_funded(p)).cloned().collect()
}

/// Applies a [`FilterMode`]; `All` returns a copy of the whole collection.
pub fn filter_by(collection: &[Project], mode: FilterMode) -> Vec<Project> {
    match mode {
        FilterMode::All => collection.to_vec(),
        FilterMode::Funded => filter_funded(collection),
        FilterMode::Unfunded => filter_unfunded(collection),
    }
}

/// Sum of backers, saturating at `u64::MAX`.
pub fn total_backers(collection: &[Project]) -> u64 {
    collection
        .iter()
        .map(Project::backers)
        .fold(0, u64::saturating_add)
}

pub fn total_pledged(collection: &[Project]) -> f64 {
    collection
        .iter()
        .map(Project::pledged)
        .fold(0.0, |total, pledged| total + pledged)
}

pub fn count(collection: &[Project]) -> usize {
    collection.len()
}

pub fn funded_count(collection: &[Project]) -> usize {
    collection.iter().filter(|p| is_funded(p)).count()
}

pub fn unfunded_count(collection: &[Project]) -> usize {
    collection.iter().filter(|p| !is_funded(p)).count()
}

/// Headline aggregates for the summary cards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CatalogSummary {
    pub total_backers: u64,
    pub total_pledged: f64,
    pub count: usize,
    pub funded_count: usize,
    pub unfunded_count: usize,
}

/// Computes all headline aggregates in one call.
pub fn summarize(collection: &[Project]) -> CatalogSummary {
    CatalogSummary {
        total_backers: total_backers(collection),
        total_pledged: total_pledged(collection),
        count: count(collection),
        funded_count: funded_count(collection),
        unfunded_count: unfunded_count(collection),
    }
}
