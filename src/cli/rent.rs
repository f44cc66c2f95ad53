use std::{path::Path, process};

use bookkeeper::{storage::directory, Id, Repository};
use clap::Parser;
use dialoguer::{theme::ColorfulTheme, Input};
use tracing::instrument;

use super::{list::print_lines, terminal::Colorize};

#[derive(Debug, Parser)]
#[command(about = "Record that a person rented a book")]
pub struct Rent {
    /// Identifier of the person renting the book
    #[arg(long, requires = "book")]
    person: Option<Id>,

    /// Identifier of the rented book
    #[arg(long, requires = "person")]
    book: Option<Id>,

    /// Date of the rental (free text, defaults to today)
    #[arg(long, short)]
    date: Option<String>,
}

impl Rent {
    #[instrument(level = "debug", skip(self))]
    pub fn run(self, root: &Path) -> anyhow::Result<()> {
        let mut library = directory::open(root)?;

        let (person_id, book_id) = match (self.person, self.book) {
            (Some(person), Some(book)) => (person, book),
            _ => prompt_selection(&library)?,
        };

        let date = match self.date {
            Some(date) => date,
            None if self.person.is_some() => today(),
            None => prompt_date()?,
        };

        library
            .create_rental(person_id, book_id, date)
            .map_err(super::exit_if_not_found)?;

        println!("Rental created successfully.");
        println!("{}", "Rental saved successfully!".success());
        Ok(())
    }
}

/// Asks for a person and a book by their position in the numbered listings
/// and returns their identifiers.
fn prompt_selection<B, P, R>(library: &Repository<B, P, R>) -> anyhow::Result<(Id, Id)> {
    if library.people().is_empty() || library.books().is_empty() {
        eprintln!(
            "{}",
            "A rental needs at least one person and one book.".warning()
        );
        process::exit(1);
    }

    let theme = ColorfulTheme::default();

    print_lines(&library.list_all_people());
    let person_number: i64 = Input::with_theme(&theme)
        .with_prompt("Enter the number of the person")
        .interact_text()?;

    print_lines(&library.list_all_books());
    let book_number: i64 = Input::with_theme(&theme)
        .with_prompt("Enter the number of the book")
        .interact_text()?;

    let Some(selection) = resolve_selection(library, person_number, book_number) else {
        eprintln!("{}", "Invalid person or book number.".warning());
        process::exit(1);
    };

    Ok(selection)
}

/// Maps a pair of 1-based selectors to the identifiers of the selected
/// person and book.
fn resolve_selection<B, P, R>(
    library: &Repository<B, P, R>,
    person_number: i64,
    book_number: i64,
) -> Option<(Id, Id)> {
    if !library.valid_numbers(person_number, book_number) {
        return None;
    }

    let person = library.person_at(usize::try_from(person_number).ok()?)?;
    let book = library.book_at(usize::try_from(book_number).ok()?)?;
    Some((person.id, book.id))
}

fn prompt_date() -> anyhow::Result<String> {
    let date = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Date")
        .default(today())
        .interact_text()?;

    Ok(date)
}

fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}
