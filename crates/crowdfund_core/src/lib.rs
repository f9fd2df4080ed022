//! Core catalog logic for crowd-funded game projects.
//! Derivations, view models and the presentation shell live here; display
//! surfaces and input sources plug in through traits.

pub mod config;
pub mod derive;
pub mod logging;
pub mod model;
pub mod render;
pub mod shell;
pub mod source;

pub use config::{CatalogConfig, ConfigError, ShellSettings};
pub use derive::{
    count, filter_by, filter_funded, filter_unfunded, funded_count, funding_percentage, is_funded,
    progress_width, search, sort_by, sort_by_label, sorted_copy, summarize, top_n, total_backers,
    total_pledged, unfunded_count, CatalogSummary, FilterMode, SortCriterion, SortOutcome,
    UnknownLabel,
};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::catalog::Catalog;
pub use model::project::{Project, ProjectValidationError};
pub use render::{
    render, render_description, render_summary, render_top_performers, CardViewModel,
    SummaryView, TopPerformersView,
};
pub use shell::bindings::{BindingError, ControlAction, ControlBindings};
pub use shell::surfaces::{
    CardSurface, DescriptionSurface, DisplaySurfaces, HighlightSurface, SummarySurface,
};
pub use shell::{PresentationShell, UserEvent, ViewState};
pub use source::{
    bundled_catalog, parse_catalog, CatalogError, CatalogResult, CatalogSource, JsonFileSource,
    JsonStrSource,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
