/// Chart models: everything a chart draws, computed without a UI context.
///
/// `ui::plot` turns these into `egui_plot` items; tests inspect them directly.

pub mod band;
pub mod trend;

pub use band::{BandChart, BandParams};
pub use trend::{TrendChart, TrendStyle};

/// Horizontal padding around the outermost year, in years.
pub const X_PADDING: f64 = 0.5;

/// X range spanned by full-width overlays for the given ascending years.
/// An empty set still yields a unit-wide span so overlays have somewhere to go.
pub fn x_extent(years: &[i64]) -> (f64, f64) {
    match (years.first(), years.last()) {
        (Some(&first), Some(&last)) => (first as f64 - X_PADDING, last as f64 + X_PADDING),
        _ => (0.0, 1.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_x_extent_pads_years() {
        assert_eq!(x_extent(&[2015, 2030]), (2014.5, 2030.5));
        assert_eq!(x_extent(&[2024]), (2023.5, 2024.5));
        assert_eq!(x_extent(&[]), (0.0, 1.0));
    }
}
