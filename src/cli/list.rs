use std::path::Path;

use bookkeeper::storage::directory;
use clap::{Parser, ValueEnum};
use tracing::instrument;

use super::terminal::Colorize;

/// Command arguments for `bk books` and `bk people`.
#[derive(Debug, Parser)]
pub struct Listing {
    /// Output format (default: pretty).
    #[arg(long, value_enum, default_value_t)]
    output: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum OutputFormat {
    /// Numbered, human readable lines.
    #[default]
    Pretty,
    /// A JSON array, in the same shape as the data files.
    Json,
}

impl Listing {
    #[instrument(level = "debug", skip(self))]
    pub fn run_books(self, root: &Path) -> anyhow::Result<()> {
        let library = directory::open(root)?;

        match self.output {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(library.books())?),
            OutputFormat::Pretty if library.books().is_empty() => {
                println!("{}", "No books yet. Add one with 'bk add-book'.".dim());
            }
            OutputFormat::Pretty => print_lines(&library.list_all_books()),
        }

        Ok(())
    }

    #[instrument(level = "debug", skip(self))]
    pub fn run_people(self, root: &Path) -> anyhow::Result<()> {
        let library = directory::open(root)?;

        match self.output {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(library.people())?),
            OutputFormat::Pretty if library.people().is_empty() => {
                println!("{}", "No people yet. Add one with 'bk add-person'.".dim());
            }
            OutputFormat::Pretty => print_lines(&library.list_all_people()),
        }

        Ok(())
    }
}

pub fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{line}");
    }
}
