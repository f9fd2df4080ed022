//! Project domain model.
//!
//! # Responsibility
//! - Define the canonical record for one crowd-funded game project.
//! - Reject invalid funding data at construction and deserialization time.
//!
//! # Invariants
//! - `name` is non-empty after trimming.
//! - `pledged` is finite and `>= 0`.
//! - `goal` is finite and `> 0`, so funding ratios are always defined.
//! - Records are immutable once constructed.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Validation failures for [`Project`] construction.
#[derive(Debug, Clone, PartialEq)]
pub enum ProjectValidationError {
    /// `name` is empty or whitespace only.
    EmptyName,
    /// `pledged` is below zero.
    NegativePledged(f64),
    /// `pledged` is NaN or infinite.
    NonFinitePledged,
    /// `goal` is zero or below.
    NonPositiveGoal(f64),
    /// `goal` is NaN or infinite.
    NonFiniteGoal,
}

impl Display for ProjectValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "project name cannot be empty"),
            Self::NegativePledged(value) => {
                write!(f, "pledged amount ({value}) must be >= 0")
            }
            Self::NonFinitePledged => write!(f, "pledged amount must be a finite number"),
            Self::NonPositiveGoal(value) => write!(f, "goal ({value}) must be > 0"),
            Self::NonFiniteGoal => write!(f, "goal must be a finite number"),
        }
    }
}

impl Error for ProjectValidationError {}

/// One crowd-funded game project.
///
/// Fields are private so every instance has passed [`Project::new`]
/// validation. Deserialization goes through the same checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawProject")]
pub struct Project {
    name: String,
    description: String,
    /// Image URI, serialized as `img` to match the catalog payload.
    img: String,
    backers: u64,
    pledged: f64,
    goal: f64,
}

/// Unvalidated wire shape of one catalog entry.
///
/// Convert with `Project::try_from` to apply validation.
#[derive(Debug, Deserialize)]
pub struct RawProject {
    pub name: String,
    pub description: String,
    pub img: String,
    pub backers: u64,
    pub pledged: f64,
    pub goal: f64,
}

impl TryFrom<RawProject> for Project {
    type Error = ProjectValidationError;

    fn try_from(raw: RawProject) -> Result<Self, Self::Error> {
        Project::new(
            raw.name,
            raw.description,
            raw.img,
            raw.backers,
            raw.pledged,
            raw.goal,
        )
    }
}

impl Project {
    /// Creates a validated project record.
    ///
    /// # Errors
    /// - [`ProjectValidationError::EmptyName`] for blank names.
    /// - Pledged/goal errors for negative, non-finite or non-positive amounts.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        img: impl Into<String>,
        backers: u64,
        pledged: f64,
        goal: f64,
    ) -> Result<Self, ProjectValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ProjectValidationError::EmptyName);
        }
        if !pledged.is_finite() {
            return Err(ProjectValidationError::NonFinitePledged);
        }
        if pledged < 0.0 {
            return Err(ProjectValidationError::NegativePledged(pledged));
        }
        if !goal.is_finite() {
            return Err(ProjectValidationError::NonFiniteGoal);
        }
        if goal <= 0.0 {
            return Err(ProjectValidationError::NonPositiveGoal(goal));
        }

        Ok(Self {
            name,
            description: description.into(),
            img: img.into(),
            backers,
            pledged,
            goal,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Image URI of the project cover.
    pub fn img(&self) -> &str {
        &self.img
    }

    pub fn backers(&self) -> u64 {
        self.backers
    }

    /// Amount pledged so far, in currency units.
    pub fn pledged(&self) -> f64 {
        self.pledged
    }

    /// Funding goal, in currency units. Always `> 0`.
    pub fn goal(&self) -> f64 {
        self.goal
    }
}

#[cfg(test)]
mod tests {
    use super::{Project, ProjectValidationError};

    #[test]
    fn new_keeps_fields() {
        let project = Project::new("Dragon Quest", "rpg", "img/dq.png", 10, 50.0, 200.0)
            .expect("valid project");
        assert_eq!(project.name(), "Dragon Quest");
        assert_eq!(project.description(), "rpg");
        assert_eq!(project.img(), "img/dq.png");
        assert_eq!(project.backers(), 10);
        assert_eq!(project.pledged(), 50.0);
        assert_eq!(project.goal(), 200.0);
    }

    #[test]
    fn new_rejects_blank_name() {
        let err = Project::new("  ", "", "", 0, 0.0, 1.0).unwrap_err();
        assert_eq!(err, ProjectValidationError::EmptyName);
    }

    #[test]
    fn new_rejects_non_positive_goal() {
        let err = Project::new("a", "", "", 0, 0.0, 0.0).unwrap_err();
        assert_eq!(err, ProjectValidationError::NonPositiveGoal(0.0));

        let err = Project::new("a", "", "", 0, 0.0, -5.0).unwrap_err();
        assert_eq!(err, ProjectValidationError::NonPositiveGoal(-5.0));
    }

    #[test]
    fn new_rejects_bad_pledged() {
        let err = Project::new("a", "", "", 0, -1.0, 1.0).unwrap_err();
        assert_eq!(err, ProjectValidationError::NegativePledged(-1.0));

        let err = Project::new("a", "", "", 0, f64::NAN, 1.0).unwrap_err();
        assert_eq!(err, ProjectValidationError::NonFinitePledged);

        let err = Project::new("a", "", "", 0, 1.0, f64::INFINITY).unwrap_err();
        assert_eq!(err, ProjectValidationError::NonFiniteGoal);
    }
}
