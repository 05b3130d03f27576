use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

mod commands;
mod input;
mod output;

/// School proximity CLI tool
#[derive(Parser)]
#[command(name = "nearschool")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// MySQL connection URL (falls back to DB_HOST, DB_NAME, ...)
    #[arg(long, env = "DATABASE_URL", global = true, hide_env_values = true)]
    database_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// Output format for ranked schools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Geojson,
    Csv,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank the schools in a CSV file by distance, without a database
    Rank {
        /// Input CSV with name, address and coordinate columns
        input: PathBuf,

        /// Reference latitude in decimal degrees
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,

        /// Reference longitude in decimal degrees
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,

        /// Column name for latitude
        #[arg(long, default_value = "latitude")]
        lat_col: String,

        /// Column name for longitude
        #[arg(long, default_value = "longitude")]
        lon_col: String,

        /// Output format
        #[arg(short, long, value_enum, default_value = "table")]
        format: OutputFormat,

        /// Output file (stdout if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Store one school
    Add {
        #[arg(long)]
        name: String,

        #[arg(long)]
        address: String,

        /// Latitude in decimal degrees
        #[arg(long, allow_hyphen_values = true)]
        lat: String,

        /// Longitude in decimal degrees
        #[arg(long, allow_hyphen_values = true)]
        lon: String,
    },

    /// List stored schools by distance from a reference point
    List {
        /// Reference latitude in decimal degrees
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,

        /// Reference longitude in decimal degrees
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,

        /// Output format
        #[arg(short, long, value_enum, default_value = "table")]
        format: OutputFormat,
    },

    /// Validate a CSV file and insert every row, one school per insert
    Import {
        /// Input CSV with name, address and coordinate columns
        input: PathBuf,

        /// Column name for latitude
        #[arg(long, default_value = "latitude")]
        lat_col: String,

        /// Column name for longitude
        #[arg(long, default_value = "longitude")]
        lon_col: String,
    },

    /// Create the schools table if it does not exist
    InitDb,
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Rank {
            input,
            lat,
            lon,
            lat_col,
            lon_col,
            format,
            output,
        } => commands::rank::run(input, lat, lon, &lat_col, &lon_col, format, output),
        Commands::Add {
            name,
            address,
            lat,
            lon,
        } => commands::add::run(cli.database_url, name, address, lat, lon).await,
        Commands::List { lat, lon, format } => {
            commands::list::run(cli.database_url, lat, lon, format).await
        }
        Commands::Import {
            input,
            lat_col,
            lon_col,
        } => commands::import::run(cli.database_url, input, &lat_col, &lon_col).await,
        Commands::InitDb => commands::init_db::run(cli.database_url).await,
    }
}
