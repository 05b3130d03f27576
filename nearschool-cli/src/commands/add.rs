use anyhow::{Context, Result};
use nearschool::{NewSchool, SchoolStore};

pub async fn run(
    database_url: Option<String>,
    name: String,
    address: String,
    lat: String,
    lon: String,
) -> Result<()> {
    // Validate before touching the database
    let school = NewSchool::parse(
        Some(name.as_str()),
        Some(address.as_str()),
        Some(lat.as_str()),
        Some(lon.as_str()),
    )?;

    let store = super::connect(database_url).await?;
    let id = store
        .insert(&school)
        .await
        .context("Database insertion error")?;

    println!("School added successfully! (id {})", id);
    Ok(())
}
