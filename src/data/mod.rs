/// Data layer: raw tables, loading, cleaning, and the static sector content.
///
/// Architecture:
/// ```text
///   data/*.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  base dir + file name → Table (strings only)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  clean    │  coerce year/value, trim Type, drop, sort → CleanedSeries
///   └──────────┘
///        │
///        ▼
///     chart::band / chart::trend
///
///   sectors: fixed scorecard + pitch cards (no I/O)
/// ```

pub mod clean;
pub mod loader;
pub mod sectors;
pub mod table;
