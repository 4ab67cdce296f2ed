// Rust guideline compliant 2026-10-19

//! Libris CLI Application
//!
//! Command-line interface for the Libris book tracker.

use clap::Parser;
use libris_cli::commands::{self, search::Query};
use libris_cli::{create_formatter, logging, should_use_color, OutputFormatter};
use libris_core::{Config, Inventory, OutputFormat, Status};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "lbr",
    version,
    about = "Libris: a small book inventory tracker",
    long_about = "Libris keeps a list of books in a JSON file and tracks which ones are lent out.",
    after_help = "Examples:\n  lbr init\n  lbr add \"Test Driven Development\" \"Kent Beck\" ISBN-TDD-001\n  lbr search --title driven\n  lbr issue ISBN-TDD-001\n  lbr return ISBN-TDD-001\n  lbr list --issued\n"
)]
struct Cli {
    /// Enable JSON output
    #[arg(long, global = true)]
    json: bool,

    /// Output format
    #[arg(long, value_enum, global = true)]
    format: Option<FormatArg>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Directory containing libris.toml
    #[arg(long, global = true, default_value = ".")]
    config: PathBuf,

    /// Data file path (overrides configuration)
    #[arg(long, global = true)]
    data_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Clone, clap::ValueEnum)]
enum FormatArg {
    Json,
    Table,
    Plain,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Write a default configuration and create the data file
    Init,

    /// Add a new book
    Add {
        /// Book title
        title: String,

        /// Book author
        author: String,

        /// Book ISBN
        isbn: String,
    },

    /// Search books by title or ISBN
    #[command(group(clap::ArgGroup::new("query").required(true).args(["title", "isbn"])))]
    Search {
        /// Case-insensitive title substring
        #[arg(long)]
        title: Option<String>,

        /// Exact ISBN
        #[arg(long)]
        isbn: Option<String>,
    },

    /// List all books
    List {
        /// Only show available books
        #[arg(long, conflicts_with = "issued")]
        available: bool,

        /// Only show issued books
        #[arg(long)]
        issued: bool,
    },

    /// Issue a book
    Issue {
        /// Book ISBN
        isbn: String,
    },

    /// Return an issued book
    Return {
        /// Book ISBN
        isbn: String,
    },

    /// Remove a book
    Remove {
        /// Book ISBN
        isbn: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load(&cli.config)?;
    if let Some(data_file) = &cli.data_file {
        config.data_file = data_file.clone();
    }

    let guard = match logging::init(&config.log_file, &config.log_level) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Warning: logging disabled: {}", e);
            None
        }
    };

    let format = match cli.format {
        Some(FormatArg::Json) => OutputFormat::Json,
        Some(FormatArg::Table) => OutputFormat::Table,
        Some(FormatArg::Plain) => OutputFormat::Plain,
        None if cli.json => OutputFormat::Json,
        None => config.output_format,
    };
    let use_color = !cli.no_color && should_use_color();
    let formatter = create_formatter(format, use_color);

    let Some(command) = cli.command else {
        println!("Use --help for usage information");
        return Ok(());
    };

    match run(command, &cli.config, &config, formatter.as_ref()) {
        Ok(output) => {
            println!("{}", output.trim_end());
            Ok(())
        }
        Err(e) => {
            tracing::error!("{:#}", e);
            eprintln!("{}", formatter.format_error(&format!("{:#}", e)));
            drop(guard);
            std::process::exit(1);
        }
    }
}

fn run(
    command: Commands,
    config_dir: &std::path::Path,
    config: &Config,
    formatter: &dyn OutputFormatter,
) -> anyhow::Result<String> {
    let open = || Inventory::with_tracing(&config.data_file);

    match command {
        Commands::Init => commands::init::execute(config_dir, config, formatter),
        Commands::Add {
            title,
            author,
            isbn,
        } => commands::add::execute(&mut open(), &title, &author, &isbn, formatter),
        Commands::Search { title, isbn } => {
            let query = match (title, isbn) {
                (Some(title), _) => Query::Title(title),
                (None, Some(isbn)) => Query::Isbn(isbn),
                (None, None) => anyhow::bail!("Provide --title or --isbn"),
            };
            commands::search::execute(&open(), &query, formatter)
        }
        Commands::List { available, issued } => {
            let status = if available {
                Some(Status::Available)
            } else if issued {
                Some(Status::Issued)
            } else {
                None
            };
            commands::list::execute(&open(), status, formatter)
        }
        Commands::Issue { isbn } => commands::issue::execute(&mut open(), &isbn, formatter),
        Commands::Return { isbn } => {
            commands::return_book::execute(&mut open(), &isbn, formatter)
        }
        Commands::Remove { isbn } => commands::remove::execute(&mut open(), &isbn, formatter),
    }
}
