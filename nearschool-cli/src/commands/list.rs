use anyhow::{Context, Result};
use nearschool::validate::require_finite;
use nearschool::{rank_by_distance, Coordinate, SchoolStore};
use std::io;

use crate::output::write_ranked;
use crate::OutputFormat;

pub async fn run(
    database_url: Option<String>,
    lat: f64,
    lon: f64,
    format: OutputFormat,
) -> Result<()> {
    let reference = Coordinate::new(require_finite("lat", lat)?, require_finite("lon", lon)?);

    let store = super::connect(database_url).await?;
    let schools = store.list_all().await.context("Failed to fetch schools")?;
    let ranked = rank_by_distance(reference, schools);

    write_ranked(io::stdout().lock(), &ranked, format)
}
