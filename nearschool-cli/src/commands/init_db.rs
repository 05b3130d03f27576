use anyhow::{Context, Result};

pub async fn run(database_url: Option<String>) -> Result<()> {
    let store = super::connect(database_url).await?;
    store
        .ensure_schema()
        .await
        .context("Failed to create schools table")?;

    println!("schools table ready");
    Ok(())
}
