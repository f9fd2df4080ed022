//! Terminal rendering surfaces.
//!
//! # Responsibility
//! - Print shell output as plain text or JSON lines on stdout.
//!
//! # Invariants
//! - Each `replace_cards` call prints one complete card block; nothing is
//!   patched in place.

use crowdfund_core::{
    CardSurface, CardViewModel, DescriptionSurface, DisplaySurfaces, HighlightSurface,
    SummarySurface, SummaryView, TopPerformersView,
};
use serde_json::json;

const BAR_WIDTH: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Writes every region to stdout.
#[derive(Debug, Clone, Copy)]
pub struct TerminalSurface {
    format: OutputFormat,
}

impl TerminalSurface {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn surfaces(self) -> DisplaySurfaces {
        DisplaySurfaces {
            cards: Box::new(self),
            summary: Box::new(self),
            highlights: Box::new(self),
            description: Box::new(self),
        }
    }
}

impl CardSurface for TerminalSurface {
    fn replace_cards(&mut self, cards: &[CardViewModel]) {
        match self.format {
            OutputFormat::Json => println!("{}", json!({ "cards": cards })),
            OutputFormat::Text => {
                println!("--- {} game(s) ---", cards.len());
                for card in cards {
                    println!("{}", card_block(card));
                }
            }
        }
    }
}

impl SummarySurface for TerminalSurface {
    fn show_summary(&mut self, summary: &SummaryView) {
        match self.format {
            OutputFormat::Json => println!("{}", json!({ "summary": summary })),
            OutputFormat::Text => {
                println!("Individual contributions: {}", summary.backers_label);
                println!("Total raised: {}", summary.pledged_label);
                println!("Games: {}", summary.games_label);
            }
        }
    }
}

impl HighlightSurface for TerminalSurface {
    fn show_top_performers(&mut self, top: &TopPerformersView) {
        match self.format {
            OutputFormat::Json => println!("{}", json!({ "top_performers": top })),
            OutputFormat::Text => {
                for (rank, name) in top.names.iter().enumerate() {
                    println!("#{} funded: {name}", rank + 1);
                }
            }
        }
    }
}

impl DescriptionSurface for TerminalSurface {
    fn show_description(&mut self, text: &str) {
        match self.format {
            OutputFormat::Json => println!("{}", json!({ "description": text })),
            OutputFormat::Text => println!("{text}"),
        }
    }
}

fn card_block(card: &CardViewModel) -> String {
    format!(
        "== {} ==\n{}\nimage: {}\nBackers: {} | Pledged: {} | Goal: {}\n[{}] {}\n",
        card.name,
        card.description,
        card.image,
        card.backers_label,
        card.pledged_label,
        card.goal_label,
        progress_bar(card.progress_width),
        card.funded_label
    )
}

fn progress_bar(width_percent: u8) -> String {
    let filled = usize::from(width_percent.min(100)) * BAR_WIDTH / 100;
    format!("{}{}", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}
