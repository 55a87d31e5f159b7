use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::chart::{BandChart, BandParams, TrendChart, TrendStyle};
use crate::config::{self, BandSliders, DatasetSpec};
use crate::data::loader::{load_csv, LoadError};
use crate::data::table::Table;

// ---------------------------------------------------------------------------
// Loaded tables
// ---------------------------------------------------------------------------

/// The five input tables, raw.
#[derive(Debug, Clone)]
pub struct Datasets {
    pub gdp: Table,
    pub inflation: Table,
    pub unemployment: Table,
    pub lpi: Table,
    pub ftth: Table,
}

impl Datasets {
    /// Load every file from `base_dir`, stopping at the first failure.
    pub fn load(base_dir: &Path) -> Result<Self, LoadError> {
        let load = |spec: DatasetSpec| load_csv(base_dir, spec.file);
        Ok(Self {
            gdp: load(config::GDP)?,
            inflation: load(config::INFLATION)?,
            unemployment: load(config::UNEMPLOYMENT)?,
            lpi: load(config::LPI)?,
            ftth: load(config::FTTH)?,
        })
    }
}

/// Modification time of each input file under `base_dir`; `None` when the
/// file is absent or unreadable.
fn file_stamps(base_dir: &Path) -> Vec<Option<SystemTime>> {
    config::DATASETS
        .iter()
        .map(|spec| {
            std::fs::metadata(base_dir.join(spec.file))
                .and_then(|meta| meta.modified())
                .ok()
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Band controls
// ---------------------------------------------------------------------------

/// Raw slider values for one band chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandControl {
    pub sliders: BandSliders,
    pub center: f64,
    pub width: f64,
}

impl BandControl {
    pub fn new(sliders: BandSliders) -> Self {
        Self {
            sliders,
            center: sliders.center.default,
            width: sliders.width.default,
        }
    }

    /// Current band, clamped and snapped to the slider grid.
    pub fn params(&self) -> BandParams {
        BandParams::new(
            self.sliders.center.sanitize(self.center),
            self.sliders.width.sanitize(self.width),
        )
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.sliders);
    }
}

/// The six sidebar sliders.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandControls {
    pub gdp: BandControl,
    pub inflation: BandControl,
    pub unemployment: BandControl,
}

impl Default for BandControls {
    fn default() -> Self {
        Self {
            gdp: BandControl::new(config::GDP_BAND),
            inflation: BandControl::new(config::INFLATION_BAND),
            unemployment: BandControl::new(config::UNEMPLOYMENT_BAND),
        }
    }
}

impl BandControls {
    pub fn controls_mut(&mut self) -> [&mut BandControl; 3] {
        [&mut self.gdp, &mut self.inflation, &mut self.unemployment]
    }

    pub fn reset(&mut self) {
        for control in self.controls_mut() {
            control.reset();
        }
    }
}

// ---------------------------------------------------------------------------
// Per-pass chart building
// ---------------------------------------------------------------------------

fn band_chart(table: &Table, spec: DatasetSpec, band: BandParams) -> BandChart {
    BandChart::build(
        table,
        spec.year_column,
        spec.value_column,
        spec.title,
        spec.y_label,
        band,
    )
}

fn trend_chart(table: &Table, spec: DatasetSpec, style: TrendStyle) -> TrendChart {
    TrendChart::build(
        table,
        spec.year_column,
        spec.value_column,
        spec.title,
        spec.y_label,
        style,
    )
}

/// GDP, inflation and unemployment charts for this pass's band settings.
pub fn macro_charts(data: &Datasets, bands: &BandControls) -> [BandChart; 3] {
    [
        band_chart(&data.gdp, config::GDP, bands.gdp.params()),
        band_chart(&data.inflation, config::INFLATION, bands.inflation.params()),
        band_chart(&data.unemployment, config::UNEMPLOYMENT, bands.unemployment.params()),
    ]
}

/// LPI bars and FTTH line.
pub fn competitiveness_charts(data: &Datasets) -> [TrendChart; 2] {
    [
        trend_chart(&data.lpi, config::LPI, TrendStyle::Bar),
        trend_chart(&data.ftth, config::FTTH, TrendStyle::Line),
    ]
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    MacroStability,
    Competitiveness,
    SectorBets,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::MacroStability, Tab::Competitiveness, Tab::SectorBets];

    pub fn title(self) -> &'static str {
        match self {
            Tab::MacroStability => "Macro Stability",
            Tab::Competitiveness => "Competitiveness",
            Tab::SectorBets => "Sector Bets (Investor Pitch)",
        }
    }
}

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Directory the CSV files are read from.
    pub data_dir: PathBuf,

    /// Result of the last load. An error blocks all tab content.
    pub data: Result<Datasets, LoadError>,

    pub bands: BandControls,

    pub tab: Tab,

    /// File stamps taken just before the last load.
    stamps: Vec<Option<SystemTime>>,
}

impl AppState {
    pub fn new(data_dir: PathBuf) -> Self {
        let stamps = file_stamps(&data_dir);
        let data = Datasets::load(&data_dir);
        Self {
            data_dir,
            data,
            bands: BandControls::default(),
            tab: Tab::default(),
            stamps,
        }
    }

    /// Re-read every file from the current data directory.
    pub fn reload(&mut self) {
        log::info!("Reloading data from {}", self.data_dir.display());
        self.stamps = file_stamps(&self.data_dir);
        self.data = Datasets::load(&self.data_dir);
    }

    /// Reload when any input file appeared, vanished or was modified since
    /// the last load. Called once per frame; returns whether it reloaded.
    pub fn refresh_if_changed(&mut self) -> bool {
        if file_stamps(&self.data_dir) == self.stamps {
            return false;
        }
        log::info!("Input files changed on disk");
        self.reload();
        true
    }

    /// Point at a different data directory and reload.
    pub fn set_data_dir(&mut self, dir: PathBuf) {
        log::info!("Data directory changed to {}", dir.display());
        self.data_dir = dir;
        self.reload();
    }

    pub fn reset_bands(&mut self) {
        self.bands.reset();
    }
}
