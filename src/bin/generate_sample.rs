use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;

const LAST_HISTORICAL_YEAR: i32 = 2024;

#[derive(Serialize)]
struct GdpRow {
    #[serde(rename = "Year")]
    year: i32,
    #[serde(rename = "GDP_Growth_Percent")]
    value: f64,
    #[serde(rename = "Type")]
    kind: &'static str,
}

#[derive(Serialize)]
struct InflationRow {
    #[serde(rename = "Year")]
    year: i32,
    #[serde(rename = "Inflation_HICP_Percent")]
    value: f64,
    #[serde(rename = "Type")]
    kind: &'static str,
}

#[derive(Serialize)]
struct UnemploymentRow {
    #[serde(rename = "Year")]
    year: i32,
    #[serde(rename = "Unemployment_Rate_Percent")]
    value: f64,
    #[serde(rename = "Type")]
    kind: &'static str,
}

#[derive(Serialize)]
struct LpiRow {
    #[serde(rename = "Year")]
    year: i32,
    #[serde(rename = "LPI_Score")]
    value: f64,
}

#[derive(Serialize)]
struct FtthRow {
    #[serde(rename = "Year")]
    year: i32,
    #[serde(rename = "FTTH_Penetration_Percent")]
    value: f64,
}

// 2015–2024 observed, 2025–2030 projected.
const GDP: [f64; 16] = [
    1.1, 1.0, 2.4, 1.8, 2.0, -7.6, 6.8, 2.6, 1.1, 1.1, 0.7, 1.0, 1.2, 1.3, 1.3, 1.3,
];
const INFLATION: [f64; 16] = [
    0.1, 0.3, 1.2, 2.1, 1.3, 0.5, 2.1, 5.9, 5.7, 2.3, 1.0, 1.4, 1.8, 1.9, 1.9, 2.0,
];
const UNEMPLOYMENT: [f64; 16] = [
    10.4, 10.1, 9.4, 9.0, 8.4, 8.0, 7.9, 7.3, 7.3, 7.4, 7.5, 7.6, 7.4, 7.3, 7.2, 7.1,
];
const LPI: [(i32, f64); 7] = [
    (2007, 3.76),
    (2010, 3.84),
    (2012, 3.85),
    (2014, 3.85),
    (2016, 3.90),
    (2018, 3.84),
    (2023, 3.90),
];
const FTTH: [(i32, f64); 7] = [
    (2018, 17.0),
    (2019, 24.0),
    (2020, 33.0),
    (2021, 44.0),
    (2022, 54.0),
    (2023, 62.0),
    (2024, 70.0),
];

/// Years and Historical/Forecast labels for a 2015–2030 macro series.
fn macro_years(values: &[f64]) -> impl Iterator<Item = (i32, f64, &'static str)> + '_ {
    values.iter().enumerate().map(|(i, &v)| {
        let year = 2015 + i as i32;
        let kind = if year <= LAST_HISTORICAL_YEAR {
            "Historical"
        } else {
            "Forecast"
        };
        (year, v, kind)
    })
}

fn write_rows<T: Serialize>(dir: &Path, file: &str, rows: impl IntoIterator<Item = T>) -> Result<usize> {
    let path = dir.join(file);
    let mut writer = csv::Writer::from_path(&path)
        .with_context(|| format!("creating {}", path.display()))?;
    let mut n = 0;
    for row in rows {
        writer
            .serialize(row)
            .with_context(|| format!("writing row {n} of {file}"))?;
        n += 1;
    }
    writer.flush().with_context(|| format!("flushing {file}"))?;
    Ok(n)
}

fn main() -> Result<()> {
    let out_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("data"));
    fs::create_dir_all(&out_dir)
        .with_context(|| format!("creating {}", out_dir.display()))?;

    let written = [
        (
            "france_gdp.csv",
            write_rows(
                &out_dir,
                "france_gdp.csv",
                macro_years(&GDP).map(|(year, value, kind)| GdpRow { year, value, kind }),
            )?,
        ),
        (
            "france_inflation.csv",
            write_rows(
                &out_dir,
                "france_inflation.csv",
                macro_years(&INFLATION).map(|(year, value, kind)| InflationRow { year, value, kind }),
            )?,
        ),
        (
            "france_unemployment.csv",
            write_rows(
                &out_dir,
                "france_unemployment.csv",
                macro_years(&UNEMPLOYMENT)
                    .map(|(year, value, kind)| UnemploymentRow { year, value, kind }),
            )?,
        ),
        (
            "france_lpi.csv",
            write_rows(
                &out_dir,
                "france_lpi.csv",
                LPI.iter().map(|&(year, value)| LpiRow { year, value }),
            )?,
        ),
        (
            "france_ftth.csv",
            write_rows(
                &out_dir,
                "france_ftth.csv",
                FTTH.iter().map(|&(year, value)| FtthRow { year, value }),
            )?,
        ),
    ];

    for (file, rows) in written {
        println!("Wrote {rows} rows to {}", out_dir.join(file).display());
    }
    Ok(())
}
