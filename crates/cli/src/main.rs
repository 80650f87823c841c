use crate::{
    checkpoint::CheckpointTracker,
    emit::Emitter,
    error::{CliError, ExitCode},
    format::OutputFormat,
};
use chrono::Utc;
use clap::Parser;
use commands::Commands;
use connectors::adapter::Adapter;
use std::{process, str::FromStr};
use tracing::{error, info, warn};

mod checkpoint;
mod commands;
mod emit;
mod error;
mod format;
mod trace;

/// Preview size for `head-table`.
const HEAD_PREVIEW_ROWS: usize = 5;

#[derive(Parser)]
#[command(
    name = "sqltail",
    version,
    about = "Ad-hoc SQL queries, table previews and incremental tailing for MySQL and Postgres"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() {
    // Initialize logger
    trace::init();

    let cli = Cli::parse();
    let code = match run(cli.command).await {
        Ok(()) => ExitCode::Success,
        Err(err) => {
            error!("{err}");
            ExitCode::GeneralError
        }
    };
    process::exit(code.as_i32());
}

async fn run(command: Commands) -> Result<(), CliError> {
    match command {
        Commands::Query {
            connection_string,
            sql_query,
            index,
            offset,
            output_format,
        } => run_query(&connection_string, &sql_query, index, offset, &output_format).await,
        Commands::ListTables { connection_string } => run_list_tables(&connection_string).await,
        Commands::HeadTable {
            connection_string,
            table,
            output_format,
        } => run_head_table(&connection_string, &table, &output_format).await,
        Commands::Env => run_env(),
    }
}

fn parse_format(name: &str) -> Result<OutputFormat, CliError> {
    OutputFormat::from_str(name).map_err(|_| CliError::InvalidOutputFormat(name.to_string()))
}

async fn open_adapter(conn_str: &str) -> Result<Adapter, CliError> {
    let adapter = Adapter::connect(conn_str).await?;
    let sql = adapter.get_sql();
    let version = sql.server_version().await?;
    info!("Connected to {} server {version}", sql.kind());
    Ok(adapter)
}

async fn run_query(
    conn_str: &str,
    sql_query: &str,
    index: Option<String>,
    offset: Option<f64>,
    output_format: &str,
) -> Result<(), CliError> {
    // format is validated before any connection is opened
    let format = parse_format(output_format)?;

    let adapter = open_adapter(conn_str).await?;
    let rows = adapter.get_sql().query_rows(sql_query).await?;
    info!("Query returned {} rows", rows.len());

    let mut tracker = index.map(|column| CheckpointTracker::new(column, offset));
    let mut emitter = Emitter::stdout();

    for row in &rows {
        let timestamp = match tracker.as_mut() {
            Some(tracker) => match tracker.observe(row)? {
                Some(value) => value.to_string(),
                // at or below the offset
                None => continue,
            },
            None => Utc::now().timestamp().to_string(),
        };
        emitter.row(&timestamp, &format.format_row(row))?;
    }

    if let Some(tracker) = &tracker
        && let Some(checkpoint) = tracker.checkpoint()
    {
        emitter.checkpoint(&checkpoint.to_string())?;
    }

    Ok(())
}

async fn run_list_tables(conn_str: &str) -> Result<(), CliError> {
    let adapter = open_adapter(conn_str).await?;
    let tables = adapter.get_sql().list_tables().await?;

    if tables.is_empty() {
        warn!("No tables found");
    } else {
        info!("Found {} tables", tables.len());
    }

    let mut emitter = Emitter::stdout();
    for table in &tables {
        emitter.table(table)?;
    }

    Ok(())
}

async fn run_head_table(conn_str: &str, table: &str, output_format: &str) -> Result<(), CliError> {
    let format = parse_format(output_format)?;

    let adapter = open_adapter(conn_str).await?;
    let rows = adapter.get_sql().head_rows(table, HEAD_PREVIEW_ROWS).await?;
    info!("Previewing first {} rows of '{table}'", rows.len());

    let mut emitter = Emitter::stdout();
    for row in &rows {
        let timestamp = Utc::now().timestamp().to_string();
        emitter.row(&timestamp, &format.format_row(row))?;
    }

    Ok(())
}

fn run_env() -> Result<(), CliError> {
    let mut versions = serde_json::Map::new();
    for probe in connectors::drivers::registry() {
        if let Some(info) = probe.detect() {
            versions.insert(
                info.name.to_string(),
                serde_json::Value::String(info.version.to_string()),
            );
        }
    }
    println!("{}", serde_json::Value::Object(versions));
    Ok(())
}
