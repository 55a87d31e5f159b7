use crate::data::clean::clean;
use crate::data::table::Table;

/// How a single-metric trend is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendStyle {
    /// One vertical bar per year.
    Bar,
    /// Connected line with point markers.
    Line,
}

/// Single-series chart with no band and no historical/forecast split.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendChart {
    pub title: String,
    pub y_label: String,
    pub style: TrendStyle,
    pub points: Vec<[f64; 2]>,
    pub x_ticks: Vec<i64>,
}

impl TrendChart {
    pub fn build(
        table: &Table,
        year_column: &str,
        value_column: &str,
        title: &str,
        y_label: &str,
        style: TrendStyle,
    ) -> Self {
        let series = clean(table, year_column, value_column);
        Self {
            title: title.to_string(),
            y_label: y_label.to_string(),
            style,
            points: series.points(),
            x_ticks: series.years(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trend_ignores_type_split() {
        let t = Table::new(
            vec!["Year".into(), "LPI_Score".into(), "Type".into()],
            vec![
                vec!["2023".into(), "4.0".into(), "Forecast".into()],
                vec!["2018".into(), "3.84".into(), "Historical".into()],
                vec!["2016".into(), "-".into(), "Historical".into()],
            ],
        );
        let chart = TrendChart::build(&t, "Year", "LPI_Score", "LPI", "LPI Score", TrendStyle::Bar);
        assert_eq!(chart.points, vec![[2018.0, 3.84], [2023.0, 4.0]]);
        assert_eq!(chart.x_ticks, vec![2018, 2023]);
        assert_eq!(chart.style, TrendStyle::Bar);
    }

    #[test]
    fn test_empty_trend_builds() {
        let t = Table::new(vec!["Year".into(), "FTTH_Penetration_Percent".into()], Vec::new());
        let chart = TrendChart::build(&t, "Year", "FTTH_Penetration_Percent", "FTTH", "%", TrendStyle::Line);
        assert!(chart.is_empty());
        assert!(chart.x_ticks.is_empty());
    }
}
