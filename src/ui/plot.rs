use eframe::egui::{Stroke, Ui, Vec2};
use egui_plot::{
    Bar, BarChart, Corner, GridMark, HLine, Legend, Line, LineStyle, MarkerShape, Plot, Points,
    Polygon,
};

use crate::chart::band::{LEGEND_BAND, LEGEND_FORECAST, LEGEND_HISTORICAL};
use crate::chart::{x_extent, BandChart, TrendChart, TrendStyle};
use crate::color::ChartColors;

const CHART_HEIGHT: f32 = 260.0;
const LINE_WIDTH: f32 = 2.0;
const MARKER_RADIUS: f32 = 3.5;
const BAR_WIDTH: f64 = 0.6;

/// egui_plot hides an x label unless its mark's step spans more than 60pt
/// and fades it in up to 80pt.
const LABEL_SPACING: f32 = 80.0;
/// Room the y axis takes out of the plot width.
const Y_AXIS_ALLOWANCE: f32 = 60.0;
const LABEL_STRIDES: [i64; 7] = [1, 2, 5, 10, 20, 50, 100];

// ---------------------------------------------------------------------------
// Year ticks
// ---------------------------------------------------------------------------

/// Smallest "nice" year stride whose labels get [`LABEL_SPACING`] at
/// `plot_width`.
fn label_stride(years: &[i64], plot_width: f32) -> i64 {
    let (x0, x1) = x_extent(years);
    let px_per_year = (plot_width - Y_AXIS_ALLOWANCE).max(1.0) / (x1 - x0) as f32;
    LABEL_STRIDES
        .into_iter()
        .find(|&stride| stride as f32 * px_per_year >= LABEL_SPACING)
        .unwrap_or(LABEL_STRIDES[LABEL_STRIDES.len() - 1])
}

/// One mark per year. Labelled years are at least `stride` apart, starting
/// from the first, and carry `stride` as their step so egui_plot draws them.
fn year_marks(years: &[i64], stride: i64) -> Vec<GridMark> {
    let mut last_labelled: Option<i64> = None;
    years
        .iter()
        .map(|&year| {
            let labelled = last_labelled.map_or(true, |prev| year - prev >= stride);
            if labelled {
                last_labelled = Some(year);
            }
            GridMark {
                value: year as f64,
                step_size: if labelled { stride as f64 } else { 1.0 },
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Shared plot setup
// ---------------------------------------------------------------------------

/// Static plot with year ticks on x and horizontal gridlines only. The x
/// range is exactly the padded year extent so the band reaches both edges.
fn base_plot<'a>(id: &str, y_label: &str, years: &[i64], width: f32) -> Plot<'a> {
    let (x0, x1) = x_extent(years);
    let marks = year_marks(years, label_stride(years, width));
    Plot::new(id)
        .height(CHART_HEIGHT)
        .x_axis_label("Year")
        .y_axis_label(y_label)
        .show_grid([false, true])
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .include_x(x0)
        .include_x(x1)
        .set_margin_fraction(Vec2::new(0.0, 0.05))
        .x_axis_formatter(|mark, _range| format!("{:.0}", mark.value))
        .x_grid_spacer(move |_input| marks.clone())
}

// ---------------------------------------------------------------------------
// Band-overlay chart
// ---------------------------------------------------------------------------

/// Draw a [`BandChart`]: band and reference line first, then the series.
pub fn band_chart(ui: &mut Ui, chart: &BandChart, colors: &ChartColors) {
    ui.strong(&chart.title);
    if chart.is_empty() {
        ui.weak("No usable rows in this dataset.");
    }

    let width = ui.available_width();
    base_plot(&chart.title, &chart.y_label, &chart.x_ticks, width)
        .legend(Legend::default().position(Corner::RightTop))
        .show(ui, |plot_ui| {
            for entry in chart.legend_entries() {
                match entry {
                    LEGEND_BAND => {
                        plot_ui.polygon(
                            Polygon::new(chart.band_polygon())
                                .name(LEGEND_BAND)
                                .fill_color(colors.band_fill)
                                .stroke(Stroke::new(0.5, colors.band_edge)),
                        );
                        plot_ui.hline(
                            HLine::new(chart.band.center)
                                .color(colors.reference)
                                .width(1.0)
                                .style(LineStyle::dashed_loose()),
                        );
                    }
                    LEGEND_HISTORICAL => {
                        plot_ui.line(
                            Line::new(chart.historical.clone())
                                .name(LEGEND_HISTORICAL)
                                .color(colors.historical)
                                .width(LINE_WIDTH),
                        );
                        plot_ui.points(
                            Points::new(chart.historical.clone())
                                .name(LEGEND_HISTORICAL)
                                .color(colors.historical)
                                .radius(MARKER_RADIUS)
                                .shape(MarkerShape::Circle)
                                .filled(true),
                        );
                    }
                    LEGEND_FORECAST => {
                        plot_ui.line(
                            Line::new(chart.forecast.clone())
                                .name(LEGEND_FORECAST)
                                .color(colors.forecast)
                                .width(LINE_WIDTH)
                                .style(LineStyle::dashed_dense()),
                        );
                        plot_ui.points(
                            Points::new(chart.forecast.clone())
                                .name(LEGEND_FORECAST)
                                .color(colors.forecast)
                                .radius(MARKER_RADIUS)
                                .shape(MarkerShape::Circle)
                                .filled(true),
                        );
                    }
                    _ => {}
                }
            }

            if let Some(bridge) = chart.connector {
                plot_ui.line(
                    Line::new(bridge.to_vec())
                        .color(colors.connector)
                        .width(1.0)
                        .style(LineStyle::dashed_dense()),
                );
            }
        });
}

// ---------------------------------------------------------------------------
// Simple trend chart
// ---------------------------------------------------------------------------

/// Draw a [`TrendChart`] as bars or as a line with markers.
pub fn trend_chart(ui: &mut Ui, chart: &TrendChart, colors: &ChartColors) {
    ui.strong(&chart.title);
    if chart.is_empty() {
        ui.weak("No usable rows in this dataset.");
    }

    let width = ui.available_width();
    base_plot(&chart.title, &chart.y_label, &chart.x_ticks, width).show(ui, |plot_ui| {
        match chart.style {
            TrendStyle::Bar => {
                let bars = chart
                    .points
                    .iter()
                    .map(|&[year, value]| Bar::new(year, value).width(BAR_WIDTH))
                    .collect();
                plot_ui.bar_chart(BarChart::new(bars).color(colors.trend));
            }
            TrendStyle::Line => {
                plot_ui.line(
                    Line::new(chart.points.clone())
                        .color(colors.trend)
                        .width(LINE_WIDTH),
                );
                plot_ui.points(
                    Points::new(chart.points.clone())
                        .color(colors.trend)
                        .radius(MARKER_RADIUS)
                        .shape(MarkerShape::Circle)
                        .filled(true),
                );
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::BandParams;
    use crate::data::table::Table;
    use eframe::egui::{self, Pos2, RawInput, Rect, Shape};

    fn table(headers: &[&str], rows: &[Vec<String>]) -> Table {
        Table::new(headers.iter().map(|h| h.to_string()).collect(), rows.to_vec())
    }

    fn macro_chart() -> BandChart {
        let rows: Vec<Vec<String>> = (2015..=2030)
            .map(|year| {
                let kind = if year <= 2024 { "Historical" } else { "Forecast" };
                vec![year.to_string(), "1.2".to_string(), kind.to_string()]
            })
            .collect();
        let t = table(&["Year", "GDP_Growth_Percent", "Type"], &rows);
        BandChart::build(&t, "Year", "GDP_Growth_Percent", "GDP", "%", BandParams::new(0.5, 1.2))
    }

    fn empty_chart() -> BandChart {
        let t = table(&["Year", "V", "Type"], &[]);
        BandChart::build(&t, "Year", "V", "Empty", "%", BandParams::new(7.2, 1.5))
    }

    /// Run two frames of `draw` in a headless context `width` points wide and
    /// return the painted shapes, flattened, with their clip rects.
    fn render(width: f32, draw: impl Fn(&mut Ui)) -> Vec<(Rect, Shape)> {
        let ctx = egui::Context::default();
        let input = || RawInput {
            screen_rect: Some(Rect::from_min_size(Pos2::ZERO, Vec2::new(width, 600.0))),
            ..Default::default()
        };
        let frame = |ctx: &egui::Context| {
            egui::CentralPanel::default().show(ctx, |ui| draw(ui));
        };
        ctx.run(input(), &frame);
        let output = ctx.run(input(), &frame);

        fn flatten(clip: Rect, shape: Shape, out: &mut Vec<(Rect, Shape)>) {
            match shape {
                Shape::Vec(shapes) => shapes.into_iter().for_each(|s| flatten(clip, s, out)),
                other => out.push((clip, other)),
            }
        }
        let mut out = Vec::new();
        for clipped in output.shapes {
            flatten(clipped.clip_rect, clipped.shape, &mut out);
        }
        out
    }

    fn texts(shapes: &[(Rect, Shape)]) -> Vec<String> {
        shapes
            .iter()
            .filter_map(|(_, shape)| match shape {
                Shape::Text(text) => Some(text.galley.text().to_string()),
                _ => None,
            })
            .collect()
    }

    fn year_labels(shapes: &[(Rect, Shape)]) -> Vec<i64> {
        texts(shapes)
            .iter()
            .filter_map(|t| t.parse::<i64>().ok())
            .filter(|y| (1900..=2100).contains(y))
            .collect()
    }

    #[test]
    fn test_label_stride_follows_width() {
        let years: Vec<i64> = (2015..=2030).collect();
        assert_eq!(label_stride(&years, 380.0), 5);
        assert_eq!(label_stride(&years, 600.0), 5);
        assert_eq!(label_stride(&years, 1200.0), 2);
        assert_eq!(label_stride(&years, 2000.0), 1);
        assert_eq!(label_stride(&[2024], 380.0), 1);
    }

    #[test]
    fn test_year_marks_space_labels() {
        let lpi = [2007, 2010, 2012, 2014, 2016, 2018, 2023];
        let labelled: Vec<f64> = year_marks(&lpi, 5)
            .iter()
            .filter(|m| m.step_size == 5.0)
            .map(|m| m.value)
            .collect();
        assert_eq!(labelled, vec![2007.0, 2012.0, 2018.0, 2023.0]);
        assert_eq!(year_marks(&lpi, 5).len(), lpi.len());

        assert!(year_marks(&lpi, 1).iter().all(|m| m.step_size == 1.0));
        assert!(year_marks(&[], 5).is_empty());
    }

    #[test]
    fn test_band_chart_labels_years_at_column_widths() {
        let chart = macro_chart();
        let colors = ChartColors::default();
        for width in [380.0, 600.0, 1200.0] {
            let shapes = render(width, |ui| band_chart(ui, &chart, &colors));
            let labels = year_labels(&shapes);
            assert!(labels.len() >= 2, "width {width}: {labels:?}");
            assert!(labels.iter().all(|y| chart.x_ticks.contains(y)), "{labels:?}");

            let texts = texts(&shapes);
            for entry in chart.legend_entries() {
                assert!(texts.iter().any(|t| t == entry), "missing legend {entry}");
            }
        }
    }

    #[test]
    fn test_trend_chart_labels_years() {
        let rows: Vec<Vec<String>> = [2007, 2010, 2012, 2014, 2016, 2018, 2023]
            .iter()
            .map(|y| vec![y.to_string(), "3.8".to_string()])
            .collect();
        let t = table(&["Year", "LPI_Score"], &rows);
        let chart = TrendChart::build(&t, "Year", "LPI_Score", "LPI", "LPI Score", TrendStyle::Bar);

        let shapes = render(570.0, |ui| trend_chart(ui, &chart, &ChartColors::default()));
        let labels = year_labels(&shapes);
        assert!(labels.len() >= 2, "{labels:?}");
        assert!(labels.iter().all(|y| chart.x_ticks.contains(y)), "{labels:?}");
    }

    #[test]
    fn test_empty_band_chart_draws_band_and_reference() {
        let chart = empty_chart();
        let shapes = render(600.0, |ui| band_chart(ui, &chart, &ChartColors::default()));

        let texts = texts(&shapes);
        assert!(texts.iter().any(|t| t == LEGEND_BAND));
        assert!(!texts.iter().any(|t| t == LEGEND_HISTORICAL || t == LEGEND_FORECAST));
        assert!(!texts.iter().any(|t| t == "0" || t == "1"), "{texts:?}");

        let band = shapes.iter().any(|(_, shape)| {
            matches!(shape, Shape::Path(path) if path.points.len() == 4 && path.fill.a() > 0)
        });
        assert!(band, "band polygon not drawn");

        // A dashed line is many horizontal segments at the same height.
        let mut rows: Vec<f32> = shapes
            .iter()
            .filter_map(|(_, shape)| match shape {
                Shape::LineSegment { points, .. } if points[0].y == points[1].y => {
                    Some(points[0].y)
                }
                _ => None,
            })
            .collect();
        rows.sort_by(f32::total_cmp);
        let dashed = rows.chunk_by(|a, b| a == b).any(|run| run.len() >= 4);
        assert!(dashed, "reference line not drawn");
    }

    #[test]
    fn test_band_fills_plot_width() {
        let chart = macro_chart();
        let shapes = render(600.0, |ui| band_chart(ui, &chart, &ChartColors::default()));

        let (clip, xs) = shapes
            .iter()
            .find_map(|(clip, shape)| match shape {
                Shape::Path(path) if path.points.len() == 4 && path.fill.a() > 0 => {
                    Some((*clip, path.points.iter().map(|p| p.x).collect::<Vec<_>>()))
                }
                _ => None,
            })
            .expect("band polygon");
        let left = xs.iter().copied().fold(f32::INFINITY, f32::min);
        let right = xs.iter().copied().fold(f32::NEG_INFINITY, f32::max);
        assert!((left - clip.left()).abs() < 1.5, "{left} vs {}", clip.left());
        assert!((right - clip.right()).abs() < 1.5, "{right} vs {}", clip.right());
    }
}
