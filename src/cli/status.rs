use std::path::Path;

use bookkeeper::storage::directory;
use clap::Parser;
use tracing::instrument;

use super::terminal::{is_narrow, Colorize};

#[derive(Debug, Parser, Default)]
#[command(about = "Show counts of people, books and rentals")]
pub struct Status {
    /// Output format (table, json)
    #[arg(long, value_name = "FORMAT", default_value = "table")]
    output: OutputFormat,

    /// Suppress headers and format for scripting
    #[arg(long)]
    quiet: bool,
}

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Record totals for a library.
#[derive(Debug, Default, PartialEq, Eq, serde::Serialize)]
struct Counts {
    students: usize,
    teachers: usize,
    books: usize,
    rentals: usize,
}

impl Counts {
    fn of(library: &directory::JsonRepository) -> Self {
        let teachers = library
            .people()
            .iter()
            .filter(|person| person.role.is_teacher())
            .count();

        Self {
            students: library.people().len() - teachers,
            teachers,
            books: library.books().len(),
            rentals: library.rentals().len(),
        }
    }

    const fn people(&self) -> usize {
        self.students + self.teachers
    }

    const fn is_empty(&self) -> bool {
        self.people() == 0 && self.books == 0 && self.rentals == 0
    }
}

impl Status {
    #[instrument(level = "debug", skip(self))]
    pub fn run(self, root: &Path) -> anyhow::Result<()> {
        let library = directory::open(root)?;
        let counts = Counts::of(&library);

        if counts.is_empty() && !matches!(self.output, OutputFormat::Json) {
            println!("No records found yet. Add a book with 'bk add-book'.");
            return Ok(());
        }

        match self.output {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&counts)?);
            }
            OutputFormat::Table if self.quiet => {
                println!(
                    "people={} books={} rentals={}",
                    counts.people(),
                    counts.books,
                    counts.rentals
                );
            }
            OutputFormat::Table => Self::output_table(&counts),
        }

        Ok(())
    }

    fn output_table(counts: &Counts) {
        println!("Library records");
        println!("{}", "───────────────".dim());

        if is_narrow() {
            println!("People: {} ({} teachers)", counts.people(), counts.teachers);
            println!("Books: {}", counts.books);
            println!("Rentals: {}", counts.rentals);
        } else {
            println!("{:<10} {:<6}", "Record", "Count");
            println!("{:<10} {:<6}", "Students", counts.students);
            println!("{:<10} {:<6}", "Teachers", counts.teachers);
            println!("{:<10} {:<6}", "Books", counts.books);
            println!("{:<10} {:<6}", "Rentals", counts.rentals);
        }
    }
}
