// ---------------------------------------------------------------------------
// Table – header-named rows of raw cells
// ---------------------------------------------------------------------------

/// A flat file as read from disk: column names from the header row and the
/// raw text of every cell. No typing happens here; see [`super::clean`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// Position of a column by exact header name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Cell text at (row, column). Short rows read as empty cells.
    pub fn cell(&self, row: usize, column: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|r| r.get(column))
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Number of data rows (header excluded).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Table {
        Table::new(
            vec!["Year".into(), "LPI_Score".into()],
            vec![
                vec!["2018".into(), "3.84".into()],
                vec!["2023".into()],
            ],
        )
    }

    #[test]
    fn test_column_lookup_is_exact() {
        let table = sample();
        assert_eq!(table.column_index("LPI_Score"), Some(1));
        assert_eq!(table.column_index("Year"), Some(0));
        assert_eq!(table.column_index("year"), None);
    }

    #[test]
    fn test_short_row_reads_empty() {
        let table = sample();
        assert_eq!(table.cell(0, 1), "3.84");
        assert_eq!(table.cell(1, 1), "");
        assert_eq!(table.cell(7, 0), "");
        assert_eq!(table.len(), 2);
        assert!(!table.is_empty());
    }

    #[test]
    fn test_header_only_table_is_empty() {
        let table = Table::new(vec!["Year".into()], Vec::new());
        assert!(table.is_empty());
        assert_eq!(table.len(), 0);
        assert_eq!(table.cell(0, 0), "");
    }
}
