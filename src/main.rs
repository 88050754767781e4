// Entry point and high-level CLI flow.
//
// One-shot batch run: parse flags, resolve the database connection, load and
// pivot the yield rows, render the document, save it, print a summary. Every
// failure is fatal; there is no retry or partial-success mode.
use clap::Parser;
use log::{info, warn};
use std::path::PathBuf;

use crop_report::loader::{self, DbConfig};
use crop_report::output;
use crop_report::report::{self, Logo};
use crop_report::types::Orientation;

#[derive(Debug, Parser)]
#[command(
    name = "crop-report",
    version,
    about = "Generate the crop wise yield forecast report (DOCX)"
)]
struct Cli {
    /// Output .docx file path.
    #[arg(short, long)]
    output: PathBuf,

    /// Page orientation.
    #[arg(
        short = 'f',
        long = "format",
        value_enum,
        ignore_case = true,
        default_value_t = Orientation::Portrait
    )]
    format: Orientation,

    /// Logo image embedded at the top of the report.
    #[arg(short, long)]
    logo: PathBuf,

    /// Postgres connection URL; takes precedence over --db-config.
    #[arg(long, env = "DATABASE_URL")]
    database_url: Option<String>,

    /// JSON file with connection parameters (host, port, dbname, user,
    /// password). Missing fields fall back to localhost defaults.
    #[arg(long)]
    db_config: Option<PathBuf>,
}

fn database_url(cli: &Cli) -> anyhow::Result<String> {
    if let Some(url) = &cli.database_url {
        info!("using connection URL from flag/environment");
        return Ok(url.clone());
    }
    if let Some(path) = &cli.db_config {
        info!("using connection config from {}", path.display());
        return Ok(DbConfig::from_file(path)?.url());
    }
    info!("using default localhost connection config");
    Ok(DbConfig::default().url())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let url = database_url(&cli)?;
    // Validate the logo before any database or output work so a missing or
    // unreadable image aborts with no file created at the target path.
    let logo = Logo::load(&cli.logo)?;

    let table = loader::fetch_data(&url).await?;
    info!(
        "pivoted {} records into {} crop sections",
        table.len(),
        table.crops().len()
    );
    if table.is_empty() {
        warn!("yield query returned no rows; the report will only contain the header block");
    }

    info!(
        "rendering {:?} report to {}",
        cli.format,
        cli.output.display()
    );
    let doc = report::build_document(&table, cli.format, &logo);
    output::save(doc, &cli.output)?;
    output::print_summary(&table, &cli.output);
    Ok(())
}
