use std::path::PathBuf;
use std::time::Duration;

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "DASHBOARD_DATA_DIR";

/// Data directory used when [`DATA_DIR_ENV`] is unset, relative to the
/// working directory.
pub const DEFAULT_DATA_DIR: &str = "data";

/// Resolve the directory holding the input CSV files.
pub fn data_dir_from_env() -> PathBuf {
    let dir = std::env::var_os(DATA_DIR_ENV)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR));
    std::path::absolute(&dir).unwrap_or(dir)
}

/// How often an idle window re-checks the input files for changes.
pub const FILE_POLL_INTERVAL: Duration = Duration::from_secs(1);

// ---------------------------------------------------------------------------
// Dataset descriptors
// ---------------------------------------------------------------------------

/// Where a chart's series comes from and how it is labelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatasetSpec {
    pub file: &'static str,
    pub year_column: &'static str,
    pub value_column: &'static str,
    pub title: &'static str,
    pub y_label: &'static str,
}

pub const GDP: DatasetSpec = DatasetSpec {
    file: "france_gdp.csv",
    year_column: "Year",
    value_column: "GDP_Growth_Percent",
    title: "GDP Growth (Historical vs Forecast to 2030)",
    y_label: "%",
};

pub const INFLATION: DatasetSpec = DatasetSpec {
    file: "france_inflation.csv",
    year_column: "Year",
    value_column: "Inflation_HICP_Percent",
    title: "Inflation (HICP) (Historical vs Forecast to 2030)",
    y_label: "%",
};

pub const UNEMPLOYMENT: DatasetSpec = DatasetSpec {
    file: "france_unemployment.csv",
    year_column: "Year",
    value_column: "Unemployment_Rate_Percent",
    title: "Unemployment Rate (Historical vs Forecast to 2030)",
    y_label: "%",
};

pub const LPI: DatasetSpec = DatasetSpec {
    file: "france_lpi.csv",
    year_column: "Year",
    value_column: "LPI_Score",
    title: "France – LPI Trend",
    y_label: "LPI Score",
};

pub const FTTH: DatasetSpec = DatasetSpec {
    file: "france_ftth.csv",
    year_column: "Year",
    value_column: "FTTH_Penetration_Percent",
    title: "France – FTTH Trend",
    y_label: "%",
};

/// Every input file, in load order.
pub const DATASETS: [DatasetSpec; 5] = [GDP, INFLATION, UNEMPLOYMENT, LPI, FTTH];

// ---------------------------------------------------------------------------
// Band slider descriptors
// ---------------------------------------------------------------------------

/// Range, default and step of one sidebar slider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderSpec {
    pub label: &'static str,
    pub min: f64,
    pub max: f64,
    pub default: f64,
    pub step: f64,
}

impl SliderSpec {
    /// Clamp into range and snap to the nearest step above `min`.
    pub fn sanitize(&self, value: f64) -> f64 {
        if !value.is_finite() {
            return self.default;
        }
        let clamped = value.clamp(self.min, self.max);
        let steps = ((clamped - self.min) / self.step).round();
        // Round to 1e-9 so 0.1 steps don't accumulate float noise.
        let snapped = ((self.min + steps * self.step) * 1e9).round() / 1e9;
        snapped.clamp(self.min, self.max)
    }
}

/// Center and width sliders for one band chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandSliders {
    pub center: SliderSpec,
    pub width: SliderSpec,
}

pub const GDP_BAND: BandSliders = BandSliders {
    center: SliderSpec { label: "GDP band center (%)", min: -2.0, max: 4.0, default: 0.5, step: 0.1 },
    width: SliderSpec { label: "GDP band width (%)", min: 0.2, max: 6.0, default: 1.2, step: 0.1 },
};

pub const INFLATION_BAND: BandSliders = BandSliders {
    center: SliderSpec { label: "Inflation band center (%)", min: 0.0, max: 10.0, default: 2.0, step: 0.1 },
    width: SliderSpec { label: "Inflation band width (%)", min: 0.2, max: 10.0, default: 2.0, step: 0.1 },
};

pub const UNEMPLOYMENT_BAND: BandSliders = BandSliders {
    center: SliderSpec { label: "Unemployment band center (%)", min: 3.0, max: 12.0, default: 7.2, step: 0.1 },
    width: SliderSpec { label: "Unemployment band width (%)", min: 0.2, max: 8.0, default: 1.5, step: 0.1 },
};
