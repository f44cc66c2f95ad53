use std::{
    path::{Path, PathBuf},
    process,
};

mod list;
mod rent;
mod rentals;
mod status;
mod terminal;

use bookkeeper::{storage::directory, Error, Id};
use clap::ArgAction;
use list::Listing;
use rent::Rent;
use rentals::Rentals;
use status::Status;
use terminal::Colorize;
use tracing::instrument;

#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// The path to the library data directory
    #[arg(short, long, default_value = ".", global = true)]
    root: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        self.command
            .unwrap_or_else(|| Command::Status(Status::default()))
            .run(&self.root)
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

#[derive(Debug, clap::Parser)]
pub enum Command {
    /// Show record counts (default)
    Status(Status),

    /// Initialize a new library data directory
    Init,

    /// Add a student or a teacher
    AddPerson(AddPerson),

    /// Add a book to the catalogue
    AddBook(AddBook),

    /// Record a rental
    ///
    /// Without --person and --book, the person and book are chosen
    /// interactively from numbered lists.
    Rent(Rent),

    /// List all books
    Books(Listing),

    /// List all people
    People(Listing),

    /// List the rentals of a person
    Rentals(Rentals),
}

impl Command {
    fn run(self, root: &Path) -> anyhow::Result<()> {
        match self {
            Self::Status(command) => command.run(root)?,
            Self::Init => init(root)?,
            Self::AddPerson(command) => command.run(root)?,
            Self::AddBook(command) => command.run(root)?,
            Self::Rent(command) => command.run(root)?,
            Self::Books(command) => command.run_books(root)?,
            Self::People(command) => command.run_people(root)?,
            Self::Rentals(command) => command.run(root)?,
        }
        Ok(())
    }
}

/// Writes the default configuration file into `root`.
#[instrument]
fn init(root: &Path) -> anyhow::Result<()> {
    let config_path = directory::config_path(root);
    if config_path.exists() {
        anyhow::bail!(
            "Library already initialized (found existing {})",
            config_path.display()
        );
    }

    std::fs::create_dir_all(root)
        .map_err(|e| anyhow::anyhow!("Failed to create {}: {e}", root.display()))?;

    let config = bookkeeper::Config::default();
    config
        .save(&config_path)
        .map_err(|e| anyhow::anyhow!("Failed to create config file: {e}"))?;

    println!("Initialized library in {}", root.display());
    println!("  Created: {}", bookkeeper::domain::config::CONFIG_FILE);
    println!();
    println!("Next steps:");
    println!("  bk add-book --id 1 --title \"Dune\" --author \"Frank Herbert\"");
    println!("  bk add-person --id 1 --age 20 --name \"Alice\"");

    Ok(())
}

#[derive(Debug, clap::Parser)]
pub struct AddPerson {
    /// Add a teacher instead of a student
    #[arg(long)]
    teacher: bool,

    /// Identifier of the person
    #[arg(long)]
    id: Id,

    /// Age in years
    #[arg(long)]
    age: u32,

    /// Name of the person
    #[arg(long, short)]
    name: String,

    /// Subject a teacher specializes in (ignored for students)
    #[arg(long, short)]
    specialization: Option<String>,
}

impl AddPerson {
    #[instrument]
    fn run(self, root: &Path) -> anyhow::Result<()> {
        let mut library = directory::open(root)?;

        library.create_person(
            self.teacher,
            self.id,
            self.age,
            self.name,
            self.specialization,
        )?;

        println!("Person created successfully...");
        println!("{}", "person saved successfully!".success());
        Ok(())
    }
}

#[derive(Debug, clap::Parser)]
pub struct AddBook {
    /// Identifier of the book
    #[arg(long)]
    id: Id,

    /// Title of the book
    #[arg(long, short)]
    title: String,

    /// Author of the book
    #[arg(long, short)]
    author: String,
}

impl AddBook {
    #[instrument]
    fn run(self, root: &Path) -> anyhow::Result<()> {
        let mut library = directory::open(root)?;

        library.create_book(self.id, self.title, self.author)?;

        println!("Book created successfully...");
        println!("{}", "Book saved successfully!".success());
        Ok(())
    }
}

/// Prints a failed lookup as a warning and exits with status 1.
///
/// Any other error is returned unchanged.
fn exit_if_not_found(error: Error) -> anyhow::Error {
    if error.is_not_found() {
        eprintln!("{}", error.to_string().warning());
        process::exit(1);
    }
    error.into()
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn init_subcommand_is_parsed() {
        let cli = Cli::try_parse_from(["bk", "--root", "library", "init"]).unwrap();

        assert!(matches!(cli.command, Some(Command::Init)));
        assert_eq!(cli.root, PathBuf::from("library"));
    }

    #[test]
    fn init_run_writes_default_config_once() {
        let tmp = tempdir().unwrap();
        let root = tmp.path().join("library");

        Command::Init.run(&root).expect("init should succeed");

        let config = bookkeeper::Config::load(&directory::config_path(&root)).unwrap();
        assert_eq!(config, bookkeeper::Config::default());

        let error = init(&root).unwrap_err();
        assert!(error.to_string().starts_with("Library already initialized"));
    }
}
