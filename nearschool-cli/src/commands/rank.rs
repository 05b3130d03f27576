use anyhow::{Context, Result};
use nearschool::validate::require_finite;
use nearschool::{rank_by_distance, Coordinate};
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

use crate::input::{into_schools, read_schools_file};
use crate::output::write_ranked;
use crate::OutputFormat;

pub fn run(
    input: PathBuf,
    lat: f64,
    lon: f64,
    lat_col: &str,
    lon_col: &str,
    format: OutputFormat,
    output: Option<PathBuf>,
) -> Result<()> {
    let reference = Coordinate::new(require_finite("lat", lat)?, require_finite("lon", lon)?);

    let rows = read_schools_file(&input, lat_col, lon_col)?;
    let ranked = rank_by_distance(reference, into_schools(rows));

    match output {
        Some(path) => {
            let file = File::create(&path).context("Failed to create output file")?;
            write_ranked(BufWriter::new(file), &ranked, format)?;
            eprintln!("Output written to: {}", path.display());
        }
        None => write_ranked(io::stdout().lock(), &ranked, format)?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_rank_csv_to_json_file() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("schools.csv");
        fs::write(
            &input,
            "name,address,latitude,longitude\nParis,p,48.8566,2.3522\nLondon,l,51.5074,-0.1278\n",
        )
        .unwrap();
        let output = dir.path().join("ranked.json");

        run(
            input,
            48.85,
            2.35,
            "latitude",
            "longitude",
            OutputFormat::Json,
            Some(output.clone()),
        )
        .unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(output).unwrap()).unwrap();
        assert_eq!(value[0]["name"], "Paris");
        assert_eq!(value[0]["id"], 1);
        assert_eq!(value[1]["name"], "London");
        assert!(value[1]["distance"].as_f64().unwrap() > 340.0);
    }

    #[test]
    fn test_rank_missing_file() {
        let dir = TempDir::new().unwrap();
        let result = run(
            dir.path().join("absent.csv"),
            0.0,
            0.0,
            "latitude",
            "longitude",
            OutputFormat::Table,
            None,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_rank_rejects_nan_reference() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("schools.csv");
        fs::write(&input, "name,address,latitude,longitude\nA,a,1,1\n").unwrap();

        let result = run(
            input,
            f64::NAN,
            0.0,
            "latitude",
            "longitude",
            OutputFormat::Table,
            None,
        );
        assert!(result.is_err());
    }
}
