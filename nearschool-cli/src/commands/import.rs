use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use nearschool::SchoolStore;
use std::path::PathBuf;

use crate::input::read_schools_file;

pub async fn run(
    database_url: Option<String>,
    input: PathBuf,
    lat_col: &str,
    lon_col: &str,
) -> Result<()> {
    // Validate the whole file first so a bad row inserts nothing
    let rows = read_schools_file(&input, lat_col, lon_col)?;
    if rows.is_empty() {
        println!("No schools found in: {}", input.display());
        return Ok(());
    }

    let store = super::connect(database_url).await?;

    let pb = ProgressBar::new(rows.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")?
            .progress_chars("#>-"),
    );

    for row in &rows {
        store
            .insert(&row.school)
            .await
            .with_context(|| format!("Failed to insert school from line {}", row.line))?;
        pb.inc(1);
    }

    pb.finish_with_message("done");
    println!("Imported {} schools from {}", rows.len(), input.display());
    Ok(())
}
