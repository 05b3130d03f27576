//! Rendering of ranked schools.

use anyhow::Result;
use nearschool::geojson::ranked_to_feature_collection;
use nearschool::RankedSchool;
use serde::Serialize;
use std::io::Write;

use crate::OutputFormat;

/// Write a ranking in the requested format.
pub fn write_ranked<W: Write>(
    mut writer: W,
    ranked: &[RankedSchool],
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Table => write_table(&mut writer, ranked)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut writer, ranked)?;
            writeln!(writer)?;
        }
        OutputFormat::Geojson => {
            serde_json::to_writer_pretty(&mut writer, &ranked_to_feature_collection(ranked))?;
            writeln!(writer)?;
        }
        OutputFormat::Csv => write_csv(&mut writer, ranked)?,
    }

    writer.flush()?;
    Ok(())
}

fn write_table<W: Write>(writer: &mut W, ranked: &[RankedSchool]) -> Result<()> {
    if ranked.is_empty() {
        writeln!(writer, "No schools found")?;
        return Ok(());
    }

    writeln!(
        writer,
        "{:>4} {:>12} {:>6}  {:<30} {}",
        "RANK", "DISTANCE_KM", "ID", "NAME", "ADDRESS"
    )?;
    writeln!(writer, "{}", "-".repeat(80))?;

    for (i, r) in ranked.iter().enumerate() {
        writeln!(
            writer,
            "{:>4} {:>12.3} {:>6}  {:<30} {}",
            i + 1,
            r.distance,
            r.school.id,
            r.school.name,
            r.school.address
        )?;
    }

    Ok(())
}

/// One CSV output row.
#[derive(Serialize)]
struct CsvRow<'a> {
    id: i64,
    name: &'a str,
    address: &'a str,
    latitude: f64,
    longitude: f64,
    distance: String,
}

fn write_csv<W: Write>(writer: &mut W, ranked: &[RankedSchool]) -> Result<()> {
    // Header written by hand so an empty ranking still gets one
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    csv_writer.write_record(["id", "name", "address", "latitude", "longitude", "distance"])?;

    for r in ranked {
        csv_writer.serialize(CsvRow {
            id: r.school.id,
            name: &r.school.name,
            address: &r.school.address,
            latitude: r.school.latitude,
            longitude: r.school.longitude,
            distance: format!("{:.6}", r.distance),
        })?;
    }

    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use nearschool::{rank_by_distance, Coordinate, NewSchool};

    fn ranked() -> Vec<RankedSchool> {
        rank_by_distance(
            Coordinate::new(0.0, 0.0),
            vec![
                NewSchool::new("Quarter", "East, far", 0.0, 90.0).into_school(1),
                NewSchool::new("Origin", "Null Island", 0.0, 0.0).into_school(2),
            ],
        )
    }

    fn render(format: OutputFormat) -> String {
        let mut buf = Vec::new();
        write_ranked(&mut buf, &ranked(), format).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_table() {
        let out = render(OutputFormat::Table);
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[0].contains("DISTANCE_KM"));
        assert!(lines[2].contains("Origin"));
        assert!(lines[3].contains("10007.543"));
    }

    #[test]
    fn test_empty_table() {
        let mut buf = Vec::new();
        write_ranked(&mut buf, &[], OutputFormat::Table).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "No schools found\n");
    }

    #[test]
    fn test_json() {
        let value: serde_json::Value = serde_json::from_str(&render(OutputFormat::Json)).unwrap();
        assert_eq!(value[0]["name"], "Origin");
        assert_eq!(value[1]["id"], 1);
    }

    #[test]
    fn test_geojson() {
        let value: serde_json::Value =
            serde_json::from_str(&render(OutputFormat::Geojson)).unwrap();
        assert_eq!(value["type"], "FeatureCollection");
        assert_eq!(value["features"][0]["properties"]["name"], "Origin");
    }

    #[test]
    fn test_csv_quotes_fields() {
        let out = render(OutputFormat::Csv);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "id,name,address,latitude,longitude,distance");
        assert_eq!(lines[1], "2,Origin,Null Island,0.0,0.0,0.000000");
        assert!(lines[2].starts_with("1,Quarter,\"East, far\",0.0,90.0,10007.5"));
    }

    #[test]
    fn test_csv_empty_has_header() {
        let mut buf = Vec::new();
        write_ranked(&mut buf, &[], OutputFormat::Csv).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "id,name,address,latitude,longitude,distance\n"
        );
    }
}
