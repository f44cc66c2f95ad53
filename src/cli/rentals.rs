use std::path::Path;

use bookkeeper::{storage::directory, Id};
use clap::Parser;
use serde_json::json;
use tracing::instrument;

#[derive(Debug, Parser)]
#[command(about = "List the rentals of a person")]
pub struct Rentals {
    /// Identifier of the person
    person: Id,

    /// Print the rentals as JSON
    #[arg(long)]
    json: bool,
}

impl Rentals {
    #[instrument(level = "debug", skip(self))]
    pub fn run(self, root: &Path) -> anyhow::Result<()> {
        let library = directory::open(root)?;

        let rentals = library
            .list_rentals_for_person(self.person)
            .map_err(super::exit_if_not_found)?;

        if self.json {
            let entries: Vec<_> = rentals
                .rentals()
                .iter()
                .map(|rental| {
                    json!({
                        "date": rental.date,
                        "book_id": rental.book,
                        "book": rentals.book_of(rental),
                    })
                })
                .collect();

            let output = json!({
                "person": rentals.person(),
                "rentals": entries,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        } else {
            println!("{rentals}");
        }

        Ok(())
    }
}
