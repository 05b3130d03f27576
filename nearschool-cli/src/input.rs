//! CSV input of school records.

use anyhow::{bail, Context, Result};
use nearschool::{NewSchool, School};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// A validated CSV row.
#[derive(Debug, Clone)]
pub struct CsvSchool {
    /// Value of the optional `id` column.
    pub id: Option<i64>,
    /// Line number in the file, for error messages.
    pub line: u64,
    pub school: NewSchool,
}

/// Read and validate every row of a CSV file.
pub fn read_schools_file(path: &Path, lat_col: &str, lon_col: &str) -> Result<Vec<CsvSchool>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open input file: {}", path.display()))?;
    read_schools(BufReader::new(file), lat_col, lon_col)
}

/// Read and validate every row of CSV data.
///
/// Requires `name`, `address` and the two coordinate columns; an `id` column
/// is optional. The first invalid row aborts the read.
pub fn read_schools<R: Read>(reader: R, lat_col: &str, lon_col: &str) -> Result<Vec<CsvSchool>> {
    let mut reader = csv::Reader::from_reader(reader);

    let headers = reader.headers()?.clone();
    let column = |name: &str| headers.iter().position(|h| h.trim() == name);

    let name_idx = column("name").context("Column 'name' not found in CSV")?;
    let address_idx = column("address").context("Column 'address' not found in CSV")?;
    let lat_idx = column(lat_col).with_context(|| format!("Column '{}' not found in CSV", lat_col))?;
    let lon_idx = column(lon_col).with_context(|| format!("Column '{}' not found in CSV", lon_col))?;
    let id_idx = column("id");

    let mut schools = Vec::new();
    for record in reader.records() {
        let record = record.context("Failed to read CSV record")?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        let school = NewSchool::parse(
            record.get(name_idx),
            record.get(address_idx),
            record.get(lat_idx),
            record.get(lon_idx),
        )
        .with_context(|| format!("Invalid school on line {}", line))?;

        let id = match id_idx.and_then(|i| record.get(i)).map(str::trim) {
            None | Some("") => None,
            Some(raw) => match raw.parse::<i64>() {
                Ok(id) => Some(id),
                Err(_) => bail!("Invalid id {:?} on line {}", raw, line),
            },
        };

        schools.push(CsvSchool { id, line, school });
    }

    Ok(schools)
}

/// Turn rows into schools, numbering rows without an id from 1.
pub fn into_schools(rows: Vec<CsvSchool>) -> Vec<School> {
    rows.into_iter()
        .enumerate()
        .map(|(i, row)| {
            let id = row.id.unwrap_or(i as i64 + 1);
            row.school.into_school(id)
        })
        .collect()
}
