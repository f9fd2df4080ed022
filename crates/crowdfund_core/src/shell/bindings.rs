//! Control-to-action registration.
//!
//! # Invariants
//! - Control ids are unique, non-empty and limited to `[a-z0-9_-]`.
//! - Resolution never guesses: unknown ids are reported, not ignored.

use crate::derive::{FilterMode, SortCriterion};
use crate::shell::UserEvent;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub const SEARCH_INPUT: &str = "search-input";
pub const SORT_NAME: &str = "sort-name";
pub const SORT_PLEDGED: &str = "sort-pledged";
pub const SORT_BACKERS: &str = "sort-backers";
pub const ALL_BUTTON: &str = "all-btn";
pub const FUNDED_BUTTON: &str = "funded-btn";
pub const UNFUNDED_BUTTON: &str = "unfunded-btn";

/// Action a control triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlAction {
    /// Text input; the control supplies the search text.
    Search,
    Sort(SortCriterion),
    Filter(FilterMode),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindingError {
    InvalidControlId(String),
    DuplicateControlId(String),
    UnknownControl(String),
    /// A search control fired without text.
    MissingInput(String),
}

impl Display for BindingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidControlId(id) => write!(f, "control id is invalid: `{id}`"),
            Self::DuplicateControlId(id) => write!(f, "control id already bound: `{id}`"),
            Self::UnknownControl(id) => write!(f, "no action bound to control `{id}`"),
            Self::MissingInput(id) => write!(f, "control `{id}` requires input text"),
        }
    }
}

impl Error for BindingError {}

/// Registry of control ids and their actions.
#[derive(Debug, Clone, Default)]
pub struct ControlBindings {
    actions: BTreeMap<String, ControlAction>,
}

impl ControlBindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bindings for the standard catalog page controls.
    pub fn standard() -> Self {
        let mut bindings = Self::new();
        let standard = [
            (SEARCH_INPUT, ControlAction::Search),
            (SORT_NAME, ControlAction::Sort(SortCriterion::Name)),
            (SORT_PLEDGED, ControlAction::Sort(SortCriterion::Pledged)),
            (SORT_BACKERS, ControlAction::Sort(SortCriterion::Backers)),
            (ALL_BUTTON, ControlAction::Filter(FilterMode::All)),
            (FUNDED_BUTTON, ControlAction::Filter(FilterMode::Funded)),
            (UNFUNDED_BUTTON, ControlAction::Filter(FilterMode::Unfunded)),
        ];
        for (id, action) in standard {
            bindings.actions.insert(id.to_string(), action);
        }
        bindings
    }

    /// Registers `action` under control `id`.
    pub fn bind(&mut self, id: &str, action: ControlAction) -> Result<(), BindingError> {
        let id = id.trim();
        if !is_valid_control_id(id) {
            return Err(BindingError::InvalidControlId(id.to_string()));
        }
        if self.actions.contains_key(id) {
            return Err(BindingError::DuplicateControlId(id.to_string()));
        }
        self.actions.insert(id.to_string(), action);
        Ok(())
    }

    pub fn action(&self, id: &str) -> Option<ControlAction> {
        self.actions.get(id.trim()).copied()
    }

    /// Bound control ids in sorted order.
    pub fn control_ids(&self) -> impl Iterator<Item = &str> {
        self.actions.keys().map(String::as_str)
    }

    /// Turns a control activation into a [`UserEvent`].
    ///
    /// `input` is the text of a search control and is ignored otherwise.
    pub fn resolve(&self, id: &str, input: Option<&str>) -> Result<UserEvent, BindingError> {
        let action = self
            .action(id)
            .ok_or_else(|| BindingError::UnknownControl(id.to_string()))?;
        match action {
            ControlAction::Search => input
                .map(|text| UserEvent::SearchTextChanged(text.to_string()))
                .ok_or_else(|| BindingError::MissingInput(id.to_string())),
            ControlAction::Sort(criterion) => Ok(UserEvent::SortRequested(criterion)),
            ControlAction::Filter(mode) => Ok(UserEvent::FilterRequested(mode)),
        }
    }
}

fn is_valid_control_id(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-' || ch == '_')
}

#[cfg(test)]
mod tests {
    use super::{BindingError, ControlAction, ControlBindings, FUNDED_BUTTON, SEARCH_INPUT};
    use crate::derive::{FilterMode, SortCriterion};
    use crate::shell::UserEvent;

    #[test]
    fn standard_bindings_cover_page_controls() {
        let bindings = ControlBindings::standard();
        assert_eq!(bindings.control_ids().count(), 7);
        assert_eq!(
            bindings.action(FUNDED_BUTTON),
            Some(ControlAction::Filter(FilterMode::Funded))
        );
    }

    #[test]
    fn bind_rejects_invalid_and_duplicate_ids() {
        let mut bindings = ControlBindings::standard();
        assert_eq!(
            bindings.bind("Sort Name", ControlAction::Sort(SortCriterion::Name)),
            Err(BindingError::InvalidControlId("Sort Name".to_string()))
        );
        assert_eq!(
            bindings.bind("all-btn", ControlAction::Filter(FilterMode::All)),
            Err(BindingError::DuplicateControlId("all-btn".to_string()))
        );
        bindings
            .bind("sort-backers-2", ControlAction::Sort(SortCriterion::Backers))
            .expect("new id binds");
    }

    #[test]
    fn resolve_builds_events() {
        let bindings = ControlBindings::standard();
        assert_eq!(
            bindings.resolve(SEARCH_INPUT, Some("quest")),
            Ok(UserEvent::SearchTextChanged("quest".to_string()))
        );
        assert_eq!(
            bindings.resolve("sort-pledged", Some("ignored")),
            Ok(UserEvent::SortRequested(SortCriterion::Pledged))
        );
        assert_eq!(
            bindings.resolve(SEARCH_INPUT, None),
            Err(BindingError::MissingInput(SEARCH_INPUT.to_string()))
        );
        assert_eq!(
            bindings.resolve("rating-btn", None),
            Err(BindingError::UnknownControl("rating-btn".to_string()))
        );
    }
}
