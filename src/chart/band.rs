use crate::data::clean::{clean, CleanedSeries, SeriesKind};
use crate::data::table::Table;

use super::x_extent;

pub const LEGEND_BAND: &str = "Expected Range";
pub const LEGEND_HISTORICAL: &str = "Historical";
pub const LEGEND_FORECAST: &str = "Forecast (to 2030)";

// ---------------------------------------------------------------------------
// BandParams
// ---------------------------------------------------------------------------

/// An investor-expected range, `[center - width/2, center + width/2]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandParams {
    pub center: f64,
    pub width: f64,
}

impl BandParams {
    pub fn new(center: f64, width: f64) -> Self {
        Self { center, width }
    }

    pub fn lower(&self) -> f64 {
        self.center - self.width / 2.0
    }

    pub fn upper(&self) -> f64 {
        self.center + self.width / 2.0
    }
}

// ---------------------------------------------------------------------------
// BandChart
// ---------------------------------------------------------------------------

/// Line chart of a historical/forecast series over a shaded expected band.
#[derive(Debug, Clone, PartialEq)]
pub struct BandChart {
    pub title: String,
    pub y_label: String,
    pub band: BandParams,
    /// Solid line with markers.
    pub historical: Vec<[f64; 2]>,
    /// Dashed line with markers.
    pub forecast: Vec<[f64; 2]>,
    /// Dashed bridge from the last historical point to the first forecast point.
    pub connector: Option<[[f64; 2]; 2]>,
    /// Every distinct year in the cleaned series, ascending.
    pub x_ticks: Vec<i64>,
}

impl BandChart {
    /// Clean `table` and split it into historical and forecast lines.
    ///
    /// Without a `Type` column the whole series is historical. Rows whose
    /// type is neither label still set x-ticks but belong to no line.
    pub fn build(
        table: &Table,
        year_column: &str,
        value_column: &str,
        title: &str,
        y_label: &str,
        band: BandParams,
    ) -> Self {
        let series = clean(table, year_column, value_column);
        Self::from_series(&series, title, y_label, band)
    }

    pub fn from_series(
        series: &CleanedSeries,
        title: &str,
        y_label: &str,
        band: BandParams,
    ) -> Self {
        if series.is_empty() {
            log::debug!("{title}: no rows after cleaning, drawing band only");
        }
        let (historical, forecast) = if series.has_type {
            let points = |kind| {
                series
                    .of_kind(kind)
                    .map(|r| [r.year as f64, r.value])
                    .collect::<Vec<_>>()
            };
            (points(SeriesKind::Historical), points(SeriesKind::Forecast))
        } else {
            (series.points(), Vec::new())
        };

        let connector = match (historical.last(), forecast.first()) {
            (Some(&last), Some(&first)) => Some([last, first]),
            _ => None,
        };

        Self {
            title: title.to_string(),
            y_label: y_label.to_string(),
            band,
            historical,
            forecast,
            connector,
            x_ticks: series.years(),
        }
    }

    /// Legend labels for the layers actually drawn.
    pub fn legend_entries(&self) -> Vec<&'static str> {
        let mut entries = vec![LEGEND_BAND];
        if !self.historical.is_empty() {
            entries.push(LEGEND_HISTORICAL);
        }
        if !self.forecast.is_empty() {
            entries.push(LEGEND_FORECAST);
        }
        entries
    }

    /// Corners of the shaded band across the full x range.
    pub fn band_polygon(&self) -> Vec<[f64; 2]> {
        let (x0, x1) = x_extent(&self.x_ticks);
        let (lo, hi) = (self.band.lower(), self.band.upper());
        vec![[x0, lo], [x1, lo], [x1, hi], [x0, hi]]
    }

    pub fn is_empty(&self) -> bool {
        self.historical.is_empty() && self.forecast.is_empty()
    }
}
