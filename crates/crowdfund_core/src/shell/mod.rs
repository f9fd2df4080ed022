//! Presentation shell: owns the catalog and drives the display surfaces.
//!
//! # Responsibility
//! - Hold the one catalog loaded at startup.
//! - Route user events to derivations and push rendered views to surfaces.
//!
//! # Invariants
//! - Every action derives from the original catalog, never from what is
//!   currently displayed (last action wins, actions do not compose).
//! - Cards are always replaced wholesale.
//! - The catalog is never mutated or reloaded.

pub mod bindings;
pub mod surfaces;

use crate::config::ShellSettings;
use crate::derive::{
    filter_by, search, sort_by, sort_by_label, summarize, top_n, FilterMode, SortCriterion,
    SortOutcome,
};
use crate::model::catalog::Catalog;
use crate::model::project::Project;
use crate::render::{render, render_description, render_summary, render_top_performers};
use bindings::{BindingError, ControlBindings};
use log::{debug, info, warn};
use surfaces::DisplaySurfaces;

/// Discrete user actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserEvent {
    SearchTextChanged(String),
    SortRequested(SortCriterion),
    FilterRequested(FilterMode),
}

/// What the card region currently shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewState {
    /// Whole catalog in source order.
    #[default]
    All,
    Search(String),
    Sorted(SortCriterion),
    Filtered(FilterMode),
    /// A sort with an unrecognized label was requested.
    UnknownSort(String),
}

pub struct PresentationShell {
    catalog: Catalog,
    surfaces: DisplaySurfaces,
    bindings: ControlBindings,
    settings: ShellSettings,
    state: ViewState,
}

impl PresentationShell {
    pub fn new(
        catalog: Catalog,
        surfaces: DisplaySurfaces,
        bindings: ControlBindings,
        settings: ShellSettings,
    ) -> Self {
        Self {
            catalog,
            surfaces,
            bindings,
            settings,
            state: ViewState::All,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn view_state(&self) -> &ViewState {
        &self.state
    }

    pub fn bindings(&self) -> &ControlBindings {
        &self.bindings
    }

    /// Fills every region: summary, description, top performers, all cards.
    pub fn start(&mut self) {
        let projects = self.catalog.as_slice();
        let summary = summarize(projects);
        self.surfaces.summary.show_summary(&render_summary(&summary));
        self.surfaces.description.show_description(&render_description(
            summary.unfunded_count,
            self.settings.years_in_operation,
        ));

        let top = top_n(projects, self.settings.top_count);
        self.surfaces
            .highlights
            .show_top_performers(&render_top_performers(&top));

        info!(
            "event=shell_started module=shell status=ok games={} unfunded={} top={}",
            summary.count,
            summary.unfunded_count,
            top.len()
        );

        let all = projects.to_vec();
        self.show_cards(ViewState::All, all);
    }

    /// Applies one user event and returns the number of cards shown.
    pub fn dispatch(&mut self, event: UserEvent) -> usize {
        let projects = self.catalog.as_slice();
        let (state, items) = match event {
            UserEvent::SearchTextChanged(text) => {
                debug!("event=search module=shell term_len={}", text.chars().count());
                let items = search(projects, &text);
                (ViewState::Search(text), items)
            }
            UserEvent::SortRequested(criterion) => {
                (ViewState::Sorted(criterion), sort_by(projects, criterion))
            }
            UserEvent::FilterRequested(mode) => {
                (ViewState::Filtered(mode), filter_by(projects, mode))
            }
        };
        self.show_cards(state, items)
    }

    /// Resolves a control activation through the bindings, then dispatches it.
    pub fn handle_control(
        &mut self,
        id: &str,
        input: Option<&str>,
    ) -> Result<usize, BindingError> {
        let event = self.bindings.resolve(id, input).inspect_err(|err| {
            warn!("event=control_rejected module=shell status=error error={err}");
        })?;
        Ok(self.dispatch(event))
    }

    /// Sorts by an untyped label.
    ///
    /// Unknown labels show the catalog in source order and return an outcome
    /// with `criterion: None`.
    pub fn sort_requested_label(&mut self, label: &str) -> SortOutcome {
        let outcome = sort_by_label(self.catalog.as_slice(), label);
        let state = match outcome.criterion {
            Some(criterion) => ViewState::Sorted(criterion),
            None => {
                warn!(
                    "event=sort_requested module=shell status=unknown_criterion label_len={}",
                    label.chars().count()
                );
                ViewState::UnknownSort(label.to_string())
            }
        };
        self.show_cards(state, outcome.items.clone());
        outcome
    }

    fn show_cards(&mut self, state: ViewState, items: Vec<Project>) -> usize {
        let cards = render(&items);
        self.surfaces.cards.replace_cards(&cards);
        debug!(
            "event=cards_replaced module=shell view={} cards={}",
            view_label(&state),
            cards.len()
        );
        self.state = state;
        cards.len()
    }
}

fn view_label(state: &ViewState) -> &'static str {
    match state {
        ViewState::All => "all",
        ViewState::Search(_) => "search",
        ViewState::Sorted(_) => "sorted",
        ViewState::Filtered(_) => "filtered",
        ViewState::UnknownSort(_) => "unknown_sort",
    }
}
