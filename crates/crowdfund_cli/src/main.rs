//! Terminal front end for the crowd-funding catalog.
//!
//! # Responsibility
//! - Parse command-line options into a validated [`CatalogConfig`].
//! - Load the catalog once and drive the presentation shell.
//! - Act as the user-input collaborator for line-driven sessions.

mod terminal;

use clap::{Parser, Subcommand};
use crowdfund_core::{
    bundled_catalog, init_logging, render_top_performers, top_n, CatalogConfig, CatalogSource,
    ControlBindings, FilterMode, HighlightSurface, JsonFileSource, PresentationShell, UserEvent,
};
use log::info;
use std::error::Error;
use std::io::BufRead;
use std::path::PathBuf;
use std::process::ExitCode;
use terminal::{OutputFormat, TerminalSurface};

#[derive(Parser)]
#[command(name = "crowdfund")]
#[command(about = "Browse a catalog of crowd-funded game projects")]
#[command(version)]
struct Cli {
    /// JSON catalog payload; the bundled demo catalog is used when omitted.
    #[arg(long, global = true, env = "CROWDFUND_DATA")]
    data: Option<PathBuf>,
    #[arg(long, global = true, env = "CROWDFUND_LOG_LEVEL")]
    log_level: Option<String>,
    /// Absolute directory for rolling log files; logging is off when omitted.
    #[arg(long, global = true, env = "CROWDFUND_LOG_DIR")]
    log_dir: Option<PathBuf>,
    /// Number of top-funded games to highlight.
    #[arg(long, global = true, default_value_t = 2)]
    top: usize,
    #[arg(long, global = true, default_value_t = false)]
    json: bool,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Summary, description, top performers and every card.
    Show,
    /// Cards whose name or description contains the term.
    Search { term: String },
    /// Cards sorted by `name`, `pledged` or `backers`.
    Sort { criterion: String },
    /// Cards filtered by `all`, `funded` or `unfunded`.
    Filter { mode: FilterMode },
    /// Only the top performers.
    Top,
    /// Read `<control-id> [input]` lines from stdin and apply each one.
    Session,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("crowdfund: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let defaults = CatalogConfig::default();
    let config = CatalogConfig {
        data_path: cli.data,
        log_level: cli.log_level.unwrap_or(defaults.log_level),
        log_dir: cli.log_dir,
        top_count: cli.top,
        years_in_operation: defaults.years_in_operation,
    }
    .validate()?;

    if let Some(log_dir) = &config.log_dir {
        init_logging(&config.log_level, log_dir)?;
    }

    let catalog = match &config.data_path {
        Some(path) => JsonFileSource::new(path).load()?,
        None => bundled_catalog()?,
    };

    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };
    let mut shell = PresentationShell::new(
        catalog,
        TerminalSurface::new(format).surfaces(),
        ControlBindings::standard(),
        config.shell_settings(),
    );

    match cli.command.unwrap_or(Command::Show) {
        Command::Show => shell.start(),
        Command::Search { term } => {
            shell.dispatch(UserEvent::SearchTextChanged(term));
        }
        Command::Sort { criterion } => {
            let outcome = shell.sort_requested_label(&criterion);
            if outcome.is_unknown_criterion() {
                eprintln!(
                    "crowdfund: unknown sort criterion `{criterion}`; showing catalog order"
                );
            }
        }
        Command::Filter { mode } => {
            shell.dispatch(UserEvent::FilterRequested(mode));
        }
        Command::Top => {
            let top = top_n(shell.catalog().as_slice(), config.top_count);
            TerminalSurface::new(format).show_top_performers(&render_top_performers(&top));
        }
        Command::Session => run_session(&mut shell)?,
    }

    Ok(())
}

/// One stdin line of a `session` run.
#[derive(Debug, PartialEq, Eq)]
enum SessionLine<'a> {
    /// Blank line or `#` comment.
    Skip,
    Quit,
    /// `<control-id> [input]`; everything after the first space is the input.
    Control { id: &'a str, input: Option<&'a str> },
}

fn parse_session_line(line: &str) -> SessionLine<'_> {
    let line = line.trim_start();
    if line.is_empty() || line.starts_with('#') {
        return SessionLine::Skip;
    }
    if line == "quit" {
        return SessionLine::Quit;
    }
    match line.split_once(' ') {
        Some((id, input)) => SessionLine::Control {
            id,
            input: Some(input),
        },
        None => SessionLine::Control {
            id: line,
            input: None,
        },
    }
}

fn run_session(shell: &mut PresentationShell) -> Result<(), Box<dyn Error>> {
    shell.start();
    let stdin = std::io::stdin();
    let mut handled = 0_usize;

    for line in stdin.lock().lines() {
        let line = line?;
        let (id, input) = match parse_session_line(&line) {
            SessionLine::Skip => continue,
            SessionLine::Quit => break,
            SessionLine::Control { id, input } => (id, input),
        };
        match shell.handle_control(id, input) {
            Ok(_) => handled += 1,
            Err(err) => eprintln!("crowdfund: {err}"),
        }
    }

    info!("event=session_closed module=cli status=ok actions={handled}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{parse_session_line, SessionLine};

    #[test]
    fn blank_and_comment_lines_are_skipped() {
        assert_eq!(parse_session_line(""), SessionLine::Skip);
        assert_eq!(parse_session_line("   "), SessionLine::Skip);
        assert_eq!(parse_session_line("  # sort-pledged"), SessionLine::Skip);
    }

    #[test]
    fn quit_ends_the_session() {
        assert_eq!(parse_session_line("quit"), SessionLine::Quit);
        assert_eq!(parse_session_line("  quit"), SessionLine::Quit);
        assert_eq!(
            parse_session_line("quit now"),
            SessionLine::Control {
                id: "quit",
                input: Some("now"),
            }
        );
    }

    #[test]
    fn bare_control_has_no_input() {
        assert_eq!(
            parse_session_line("search-input"),
            SessionLine::Control {
                id: "search-input",
                input: None,
            }
        );
    }

    #[test]
    fn input_keeps_everything_after_first_space() {
        assert_eq!(
            parse_session_line("search-input "),
            SessionLine::Control {
                id: "search-input",
                input: Some(""),
            }
        );
        assert_eq!(
            parse_session_line("search-input  dragon quest "),
            SessionLine::Control {
                id: "search-input",
                input: Some(" dragon quest "),
            }
        );
    }
}
