//! Basic example demonstrating nearschool library usage.
//!
//! Run with: cargo run --example basic -- 48.8566 2.3522

use nearschool::{
    rank_by_distance, validate, Coordinate, MemorySchoolStore, NewSchool, SchoolError, SchoolStore,
};
use std::env;

#[tokio::main]
async fn main() -> Result<(), SchoolError> {
    // Reference point from the command line, London by default
    let mut args = env::args().skip(1);
    let lat_arg = args.next();
    let lon_arg = args.next();
    let lat = validate::require_number("latitude", lat_arg.as_deref().or(Some("51.5074")))?;
    let lon = validate::require_number("longitude", lon_arg.as_deref().or(Some("-0.1278")))?;

    let store = MemorySchoolStore::new();

    let schools = [
        ("Eton College", "Windsor SL4 6DW", 51.4925, -0.6105),
        ("Lycée Henri-IV", "23 Rue Clovis, Paris", 48.8462, 2.3479),
        ("Phillips Academy", "180 Main St, Andover", 42.6468, -71.1314),
        ("Gymnasium Carolinum", "Osnabrück", 52.2779, 8.0434),
    ];

    for (name, address, lat, lon) in schools {
        store
            .insert(&NewSchool::new(name, address, lat, lon))
            .await?;
    }

    let ranked = rank_by_distance(Coordinate::new(lat, lon), store.list_all().await?);

    println!("Schools nearest to ({}, {}):", lat, lon);
    println!("{:-<50}", "");

    for r in &ranked {
        println!("{:>10.1} km  {}", r.distance, r.school.name);
    }

    Ok(())
}
