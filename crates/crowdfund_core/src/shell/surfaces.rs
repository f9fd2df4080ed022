//! Display collaborators injected into the shell.

use crate::render::{CardViewModel, SummaryView, TopPerformersView};

/// Region that shows the project cards.
pub trait CardSurface {
    /// Removes every previously shown card, then shows `cards` in order.
    fn replace_cards(&mut self, cards: &[CardViewModel]);
}

/// Region that shows the headline statistics.
pub trait SummarySurface {
    fn show_summary(&mut self, summary: &SummaryView);
}

/// Region that shows the best-funded project names.
pub trait HighlightSurface {
    fn show_top_performers(&mut self, top: &TopPerformersView);
}

/// Region that shows the company description.
pub trait DescriptionSurface {
    fn show_description(&mut self, text: &str);
}

/// The display regions one shell draws into.
pub struct DisplaySurfaces {
    pub cards: Box<dyn CardSurface>,
    pub summary: Box<dyn SummarySurface>,
    pub highlights: Box<dyn HighlightSurface>,
    pub description: Box<dyn DescriptionSurface>,
}
