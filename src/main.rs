//! Hale KV - Main entrypoint.
//!
//! This is the demo driver for the Hale Probe Table. It constructs a
//! table, seeds it with a sample video inventory, dumps the slot layout,
//! and answers lookups either interactively or from a subcommand argument.
//! The table itself carries no global state; everything is wired up here.

use std::io::{self, BufRead, Write};
use std::process;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::info;

use hale_kv_lib::data_structures::hale_probe_table::{
    HaleProbeTable, HaleProbeTableConfig, ProbeMode,
};
use hale_kv_lib::error::{set_error_reporter, HaleKvError, HaleKvResult, TracingErrorReporter};

/// Sample video inventory: title and copies available.
const SAMPLE_INVENTORY: [(&str, i64); 15] = [
    ("Deadpool", 0),
    ("Zootopia", 4),
    ("Captain America: Civil War", 2),
    ("Batman v Superman: Dawn of Justice", 20),
    ("The Nice Guys", 9),
    ("The Jungle Book", 8),
    ("Star Wars: The Force Awakens", 1),
    ("Ex Machina", 5),
    ("Inside Out", 6),
    ("The Martian", 3),
    ("Mad Max: Fury Road", 7),
    ("The Revenant", 2),
    ("Finding Dory", 4),
    ("Ghostbusters", 10),
    ("X-Mean: Apocalypse", 5),
];

/// Command line arguments for the Hale KV demo driver.
#[derive(Parser, Debug)]
#[clap(name = "Hale KV", version, author, about)]
struct Args {
    /// Number of slots in the table
    #[clap(short, long, value_parser, default_value_t = 31)]
    capacity: usize,

    /// Wrap the probe walk around the end of the table instead of
    /// stopping at the last slot
    #[clap(short, long)]
    wrapping: bool,

    /// Command to execute
    #[clap(subcommand)]
    command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Seed the sample inventory, dump the table, and prompt for a lookup
    Demo,

    /// Seed the sample inventory and look up a single title
    Query {
        /// Title to look up
        title: String,
    },
}

/// Initialize the logging system.
fn init_logging() -> HaleKvResult<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_line_number(true)
        .with_file(true)
        .with_thread_names(true)
        .pretty()
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| HaleKvError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Construct a table per the command-line options and seed the sample
/// inventory into it.
fn build_inventory_table(capacity: usize, wrapping: bool) -> HaleKvResult<HaleProbeTable> {
    let probe_mode = if wrapping {
        ProbeMode::Wrapping
    } else {
        ProbeMode::Bounded
    };
    let config = HaleProbeTableConfig::new()
        .with_capacity(capacity)
        .with_probe_mode(probe_mode);

    let mut table = HaleProbeTable::with_config(config)?;
    for (title, copies) in SAMPLE_INVENTORY {
        table.put(title.to_string(), copies)?;
    }

    info!(
        capacity = table.capacity(),
        entries = table.len(),
        load_factor = table.load_factor(),
        "Seeded sample inventory"
    );
    Ok(table)
}

/// Print the result of a single lookup.
fn print_lookup(table: &HaleProbeTable, title: &str) -> HaleKvResult<()> {
    match table.get(title)? {
        Some(copies) => println!("Amount available: {copies}"),
        None => println!("Title not found: {title}"),
    }
    Ok(())
}

/// Main entry point for the application.
fn main() -> HaleKvResult<()> {
    // Initialize logging early to capture any startup errors
    init_logging()?;

    // Set up error reporter
    set_error_reporter(Arc::new(TracingErrorReporter));

    // Parse command-line arguments
    let args = <Args as clap::Parser>::parse();

    let table = match build_inventory_table(args.capacity, args.wrapping) {
        Ok(table) => table,
        Err(e) => {
            tracing::error!("Failed to seed inventory: {}", e);
            process::exit(1);
        }
    };

    match args.command.unwrap_or(Command::Demo) {
        Command::Demo => {
            info!("Starting Hale KV demo");

            for line in table.display_info() {
                println!("{line}");
            }

            print!("Please enter a movie title: ");
            io::stdout().flush().map_err(HaleKvError::Io)?;

            let mut title = String::new();
            let read = io::stdin()
                .lock()
                .read_line(&mut title)
                .map_err(HaleKvError::Io)?;
            if read == 0 {
                info!("No title entered, exiting");
                return Ok(());
            }

            print_lookup(&table, title.trim())
        }
        Command::Query { title } => {
            info!(title = %title, "Running single lookup");
            print_lookup(&table, &title)
        }
    }
}
