//! View models handed to display surfaces.
//!
//! # Responsibility
//! - Map projects and aggregates to display-ready labels.
//! - Keep number/currency formatting out of surfaces.
//!
//! # Invariants
//! - Rendering is a pure mapping; output order equals input order.
//! - `progress_width` is always within `0..=100`.

pub mod format;

use crate::derive::{funding_percentage, is_funded, progress_width, CatalogSummary};
use crate::model::project::Project;
use format::{format_count, format_currency};
use serde::Serialize;

/// Everything a surface needs to draw one project card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardViewModel {
    pub name: String,
    pub description: String,
    /// Image URI.
    pub image: String,
    /// Backer count with grouping, e.g. `1,234`.
    pub backers_label: String,
    /// Pledged amount as currency, e.g. `$12,345`.
    pub pledged_label: String,
    pub goal_label: String,
    /// Rounded funding percentage; may exceed 100.
    pub funding_percentage: u64,
    /// Progress bar width in percent.
    pub progress_width: u8,
    /// Caption such as `125% Funded`.
    pub funded_label: String,
    pub is_funded: bool,
}

impl CardViewModel {
    pub fn from_project(project: &Project) -> Self {
        let percentage = funding_percentage(project);
        Self {
            name: project.name().to_string(),
            description: project.description().to_string(),
            image: project.img().to_string(),
            backers_label: format_count(project.backers()),
            pledged_label: format_currency(project.pledged()),
            goal_label: format_currency(project.goal()),
            funding_percentage: percentage,
            progress_width: progress_width(project),
            funded_label: format!("{percentage}% Funded"),
            is_funded: is_funded(project),
        }
    }
}

/// Maps projects to card view models, preserving order.
pub fn render(records: &[Project]) -> Vec<CardViewModel> {
    records.iter().map(CardViewModel::from_project).collect()
}

/// Labels for the three headline statistic cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryView {
    /// Total individual contributions.
    pub backers_label: String,
    /// Total amount raised, currency-formatted.
    pub pledged_label: String,
    pub games_label: String,
}

pub fn render_summary(summary: &CatalogSummary) -> SummaryView {
    SummaryView {
        backers_label: format_count(summary.total_backers),
        pledged_label: format_currency(summary.total_pledged),
        games_label: summary.count.to_string(),
    }
}

/// Names of the highest-funded projects, best first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TopPerformersView {
    pub names: Vec<String>,
}

impl TopPerformersView {
    pub fn first(&self) -> Option<&str> {
        self.names.first().map(String::as_str)
    }

    pub fn second(&self) -> Option<&str> {
        self.names.get(1).map(String::as_str)
    }
}

/// Builds the top-performer view from an already ranked sequence.
pub fn render_top_performers(ranked: &[Project]) -> TopPerformersView {
    TopPerformersView {
        names: ranked.iter().map(|p| p.name().to_string()).collect(),
    }
}

/// Company blurb stating how many games still need funding.
pub fn render_description(unfunded: usize, years_in_operation: u32) -> String {
    let noun_phrase = if unfunded == 1 {
        "game is"
    } else {
        "games are"
    };
    format!(
        "The purpose of our company is to fund independent games. \
         We've been in operation for {years_in_operation} years. \
         Currently, {unfunded} {noun_phrase} still unfunded."
    )
}
