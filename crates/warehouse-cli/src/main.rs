//! `warehouse` — stands up the upsell data warehouse schema.
//!
//! # Usage
//!
//! ```text
//! warehouse init --db /srv/dwh/magenta_datawarehouse.duckdb
//! warehouse init --in-memory --json
//! warehouse tables --json
//! warehouse describe processed_features
//! warehouse ddl --group predictions
//! ```
//!
//! Settings are read from `warehouse.toml` (or `--config`) and `WAREHOUSE_*`
//! environment variables; flags take precedence.

mod settings;

use std::{io, path::PathBuf};

use anyhow::{Context as _, bail};
use clap::{Args, Parser, Subcommand};
use settings::Settings;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use warehouse_core::{TableGroup, schema_script};
use warehouse_store_duckdb::{ColumnInfo, Location, Warehouse, initialize_with};

#[derive(Parser)]
#[command(author, version, about = "Upsell data warehouse schema initializer")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, global = true, default_value = "warehouse.toml")]
  config: PathBuf,

  #[command(subcommand)]
  command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
  /// Create every missing warehouse table (the default).
  Init {
    #[command(flatten)]
    store: StoreArgs,
    /// Print the report as JSON instead of progress lines.
    #[arg(long)]
    json:  bool,
  },

  /// List the tables of an existing warehouse.
  Tables {
    #[command(flatten)]
    store: ExistingStore,
    #[arg(long)]
    json:  bool,
  },

  /// Show the columns of one table.
  Describe {
    table: String,
    #[command(flatten)]
    store: ExistingStore,
    #[arg(long)]
    json:  bool,
  },

  /// Print the DDL without opening a database.
  Ddl {
    /// Limit output to one group, e.g. `raw_data` or `feature_importance`.
    #[arg(long)]
    group: Option<String>,
  },
}

#[derive(Args, Default)]
struct StoreArgs {
  /// Database file (default: magenta_datawarehouse.duckdb).
  #[arg(long, value_name = "FILE")]
  db:        Option<PathBuf>,
  /// Use an in-memory store.
  #[arg(long, conflicts_with = "db")]
  in_memory: bool,
}

/// Store selection for commands that read an existing warehouse file.
#[derive(Args, Default)]
struct ExistingStore {
  /// Database file (default: magenta_datawarehouse.duckdb).
  #[arg(long, value_name = "FILE")]
  db: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
  // Logs go to stderr; stdout carries the report.
  tracing_subscriber::fmt()
    .with_writer(io::stderr)
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();
  let settings = Settings::load(&cli.config)?;
  let command = cli.command.unwrap_or(Command::Init {
    store: StoreArgs::default(),
    json:  false,
  });

  match command {
    Command::Init { store, json } => {
      let location = settings.location(store.db.as_deref(), store.in_memory);
      init(&location, json, &mut io::stdout().lock())?;
    }
    Command::Tables { store, json } => {
      let warehouse = open_existing(&settings, &store)?;
      let tables = warehouse.tables()?;
      if json {
        println!("{}", serde_json::to_string_pretty(&tables)?);
      } else {
        for table in &tables {
          println!("{table}");
        }
      }
    }
    Command::Describe { table, store, json } => {
      let warehouse = open_existing(&settings, &store)?;
      let columns = warehouse.describe(&table)?;
      if json {
        println!("{}", serde_json::to_string_pretty(&columns)?);
      } else {
        print_columns(&mut io::stdout().lock(), &columns)?;
      }
    }
    Command::Ddl { group } => {
      let script = match group {
        Some(name) => TableGroup::parse(&name)?.create_script(),
        None => schema_script(),
      };
      println!("{script}");
    }
  }

  Ok(())
}

/// Run the initializer; with `json`, progress is suppressed and the report is
/// printed instead.
fn init(
  location: &Location,
  json: bool,
  out: &mut impl io::Write,
) -> anyhow::Result<()> {
  if json {
    let report = initialize_with(location, &mut io::sink())
      .context("data warehouse initialization failed")?;
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)?;
  } else {
    initialize_with(location, out)
      .context("data warehouse initialization failed")?;
  }
  Ok(())
}

/// Open a warehouse for reading without creating a new file.
fn open_existing(
  settings: &Settings,
  store: &ExistingStore,
) -> anyhow::Result<Warehouse> {
  let location = match settings.location(store.db.as_deref(), false) {
    Location::InMemory => {
      bail!("an in-memory warehouse has no tables to read; pass --db")
    }
    Location::File(path) if !path.exists() => {
      bail!("no warehouse at {}; run `warehouse init` first", path.display())
    }
    location => location,
  };
  Warehouse::open(&location)
    .with_context(|| format!("failed to open warehouse at {location}"))
}

fn print_columns(
  out: &mut impl io::Write,
  columns: &[ColumnInfo],
) -> io::Result<()> {
  let width = columns.iter().map(|c| c.name.len()).max().unwrap_or(0);
  for column in columns {
    let nullability = if column.nullable { "NULL" } else { "NOT NULL" };
    write!(
      out,
      "{:width$}  {:<9}  {:<8}",
      column.name, column.data_type, nullability
    )?;
    if let Some(default) = &column.default {
      write!(out, "  DEFAULT {default}")?;
    }
    writeln!(out)?;
  }
  Ok(())
}
