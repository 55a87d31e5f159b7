use super::table::Table;

/// Name of the optional categorical column that splits a series.
pub const TYPE_COLUMN: &str = "Type";

// ---------------------------------------------------------------------------
// SeriesKind – recognised values of the Type column
// ---------------------------------------------------------------------------

/// The two partitions of a macro series. Parsing ignores case and
/// surrounding whitespace; anything else is not a kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeriesKind {
    Historical,
    Forecast,
}

impl SeriesKind {
    pub fn parse(label: &str) -> Option<Self> {
        let label = label.trim();
        if label.eq_ignore_ascii_case("historical") {
            Some(SeriesKind::Historical)
        } else if label.eq_ignore_ascii_case("forecast") {
            Some(SeriesKind::Forecast)
        } else {
            None
        }
    }
}

// ---------------------------------------------------------------------------
// Cell coercion
// ---------------------------------------------------------------------------

/// Parse a year cell. Accepts `2021` and `2021.0`; fractional, non-finite
/// or non-numeric text is missing.
pub fn coerce_year(cell: &str) -> Option<i64> {
    let cell = cell.trim();
    if let Ok(year) = cell.parse::<i64>() {
        return Some(year);
    }
    let value = coerce_value(cell)?;
    if value.fract() != 0.0 || value.abs() > i64::MAX as f64 {
        return None;
    }
    Some(value as i64)
}

/// Parse a value cell. Non-finite results (`nan`, `inf`) are missing.
pub fn coerce_value(cell: &str) -> Option<f64> {
    cell.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

// ---------------------------------------------------------------------------
// CleanedSeries
// ---------------------------------------------------------------------------

/// One surviving row of a cleaned series.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesRecord {
    pub year: i64,
    pub value: f64,
    /// Trimmed `Type` text, `None` when the table has no `Type` column.
    /// Case is preserved; use [`SeriesRecord::kind`] to classify.
    pub label: Option<String>,
}

impl SeriesRecord {
    pub fn kind(&self) -> Option<SeriesKind> {
        self.label.as_deref().and_then(SeriesKind::parse)
    }
}

/// A series after coercion, row exclusion and ascending year sort.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CleanedSeries {
    pub year_column: String,
    pub value_column: String,
    pub records: Vec<SeriesRecord>,
    /// Whether the source table carried a `Type` column.
    pub has_type: bool,
}

impl CleanedSeries {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct years in ascending order.
    pub fn years(&self) -> Vec<i64> {
        let mut years: Vec<i64> = self.records.iter().map(|r| r.year).collect();
        years.dedup();
        years
    }

    /// `[year, value]` pairs for plotting.
    pub fn points(&self) -> Vec<[f64; 2]> {
        self.records
            .iter()
            .map(|r| [r.year as f64, r.value])
            .collect()
    }

    /// Records whose label parses as `kind`, in series order.
    pub fn of_kind(&self, kind: SeriesKind) -> impl Iterator<Item = &SeriesRecord> + '_ {
        self.records.iter().filter(move |r| r.kind() == Some(kind))
    }

    /// Back to a raw table with the same column names.
    pub fn to_table(&self) -> Table {
        let mut headers = vec![self.year_column.clone(), self.value_column.clone()];
        if self.has_type {
            headers.push(TYPE_COLUMN.to_string());
        }
        let rows = self
            .records
            .iter()
            .map(|r| {
                let mut row = vec![r.year.to_string(), r.value.to_string()];
                if self.has_type {
                    row.push(r.label.clone().unwrap_or_default());
                }
                row
            })
            .collect();
        Table::new(headers, rows)
    }
}

// ---------------------------------------------------------------------------
// Cleaning
// ---------------------------------------------------------------------------

/// Coerce `year_column` and `value_column`, trim `Type`, drop rows missing
/// either number, and sort by year. The sort is stable, so rows sharing a
/// year keep file order.
///
/// A column absent from the table makes every row missing, giving an
/// empty series.
pub fn clean(table: &Table, year_column: &str, value_column: &str) -> CleanedSeries {
    let year_idx = table.column_index(year_column);
    let value_idx = table.column_index(value_column);
    let type_idx = table.column_index(TYPE_COLUMN);

    for (name, idx) in [(year_column, year_idx), (value_column, value_idx)] {
        if idx.is_none() {
            log::warn!("Column '{name}' not found in {:?}", table.headers);
        }
    }

    let mut records: Vec<SeriesRecord> = (0..table.len())
        .filter_map(|row| {
            let year = year_idx.and_then(|c| coerce_year(table.cell(row, c)));
            let value = value_idx.and_then(|c| coerce_value(table.cell(row, c)));
            let label = type_idx.map(|c| table.cell(row, c).trim().to_string());
            Some(SeriesRecord {
                year: year?,
                value: value?,
                label,
            })
        })
        .collect();

    let dropped = table.len() - records.len();
    if dropped > 0 {
        log::debug!("Dropped {dropped} row(s) without numeric {year_column}/{value_column}");
    }

    records.sort_by_key(|r| r.year);

    CleanedSeries {
        year_column: year_column.to_string(),
        value_column: value_column.to_string(),
        records,
        has_type: type_idx.is_some(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(headers: &[&str], rows: &[&[&str]]) -> Table {
        Table::new(
            headers.iter().map(|h| h.to_string()).collect(),
            rows.iter()
                .map(|r| r.iter().map(|c| c.to_string()).collect())
                .collect(),
        )
    }

    #[test]
    fn test_scenario_drops_bad_value() {
        let t = table(
            &["Year", "GDP_Growth_Percent", "Type"],
            &[
                &["2021", "2.3", "Historical"],
                &["2022", "bad", "Historical"],
                &["2023", "1.1", "Forecast"],
            ],
        );
        let series = clean(&t, "Year", "GDP_Growth_Percent");

        assert_eq!(series.len(), 2);
        assert_eq!(series.records[0].year, 2021);
        assert_eq!(series.records[0].value, 2.3);
        assert_eq!(series.records[0].kind(), Some(SeriesKind::Historical));
        assert_eq!(series.records[1].year, 2023);
        assert_eq!(series.records[1].value, 1.1);
        assert_eq!(series.records[1].kind(), Some(SeriesKind::Forecast));
    }

    #[test]
    fn test_sorted_and_no_missing() {
        let t = table(
            &["Year", "V"],
            &[
                &["2025", "1"],
                &["", "2"],
                &["2019", "3"],
                &["abc", "4"],
                &["2020", ""],
                &["2021.0", "5"],
                &["2022.5", "6"],
                &["2023", "nan"],
                &[" 2018 ", " 7 "],
            ],
        );
        let series = clean(&t, "Year", "V");
        let years: Vec<i64> = series.records.iter().map(|r| r.year).collect();
        assert_eq!(years, vec![2018, 2019, 2021, 2025]);
        assert!(series.records.iter().all(|r| r.value.is_finite()));
        assert!(!series.has_type);
        assert!(series.records.iter().all(|r| r.label.is_none()));
    }

    #[test]
    fn test_duplicate_years_keep_file_order() {
        let t = table(
            &["Year", "V", "Type"],
            &[
                &["2024", "1.0", "Forecast"],
                &["2023", "0.5", "Historical"],
                &["2024", "1.2", "Historical"],
            ],
        );
        let series = clean(&t, "Year", "V");
        let values: Vec<f64> = series.records.iter().map(|r| r.value).collect();
        assert_eq!(values, vec![0.5, 1.0, 1.2]);
        assert_eq!(series.years(), vec![2023, 2024]);
    }

    #[test]
    fn test_clean_is_idempotent() {
        let t = table(
            &["Year", "Inflation_HICP_Percent", "Type"],
            &[
                &["2024", "2.3", " historical "],
                &["2022", "5.9", "Historical"],
                &["x", "1.0", "Forecast"],
                &["2026", "1.8", "FORECAST"],
                &["2023", "5.7", "Historical"],
                &["2025", "0.1", "estimate"],
            ],
        );
        let once = clean(&t, "Year", "Inflation_HICP_Percent");
        let twice = clean(&once.to_table(), "Year", "Inflation_HICP_Percent");
        assert_eq!(once, twice);
    }

    #[test]
    fn test_type_is_trimmed_not_lowercased() {
        let t = table(
            &["Year", "V", "Type"],
            &[&["2021", "1", "Historical"], &["2022", "2", " Forecast "]],
        );
        let series = clean(&t, "Year", "V");
        assert_eq!(series.records[1].label.as_deref(), Some("Forecast"));
        assert_eq!(series.records[1].kind(), Some(SeriesKind::Forecast));
    }

    #[test]
    fn test_unknown_label_survives_cleaning() {
        let t = table(&["Year", "V", "Type"], &[&["2021", "1", "Estimate"]]);
        let series = clean(&t, "Year", "V");
        assert_eq!(series.len(), 1);
        assert_eq!(series.records[0].kind(), None);
        assert_eq!(series.of_kind(SeriesKind::Historical).count(), 0);
        assert_eq!(series.of_kind(SeriesKind::Forecast).count(), 0);
    }

    #[test]
    fn test_missing_column_gives_empty_series() {
        let t = table(&["Year", "LPI_Score"], &[&["2018", "3.84"]]);
        let series = clean(&t, "Year", "FTTH_Penetration_Percent");
        assert!(series.is_empty());
    }

    #[test]
    fn test_series_kind_parse() {
        assert_eq!(SeriesKind::parse("Historical"), Some(SeriesKind::Historical));
        assert_eq!(SeriesKind::parse(" forecast "), Some(SeriesKind::Forecast));
        assert_eq!(SeriesKind::parse(" Forecast "), Some(SeriesKind::Forecast));
        assert_eq!(SeriesKind::parse("HISTORICAL\t"), Some(SeriesKind::Historical));
        assert_eq!(SeriesKind::parse("projection"), None);
        assert_eq!(SeriesKind::parse(""), None);
    }

    #[test]
    fn test_coerce_cells() {
        assert_eq!(coerce_year("2030"), Some(2030));
        assert_eq!(coerce_year("2030.0"), Some(2030));
        assert_eq!(coerce_year("2030.4"), None);
        assert_eq!(coerce_year("inf"), None);
        assert_eq!(coerce_value("-0.5"), Some(-0.5));
        assert_eq!(coerce_value("1e2"), Some(100.0));
        assert_eq!(coerce_value("NaN"), None);
        assert_eq!(coerce_value("3,4"), None);
    }
}
