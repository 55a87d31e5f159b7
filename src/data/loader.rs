use std::path::{Path, PathBuf};

use thiserror::Error;

use super::table::Table;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Failure to read one of the dashboard's input files. Either variant halts
/// the current render pass.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The expected file is not in the base directory. Carries what was
    /// actually found there so the user can spot a misnamed file.
    #[error(
        "Missing file: {}\nRunning from: {}\nFiles available: {}",
        path.display(),
        base_dir.display(),
        format_listing(available)
    )]
    MissingFile {
        path: PathBuf,
        base_dir: PathBuf,
        available: Vec<String>,
    },

    /// The file exists but could not be read as CSV.
    #[error("Failed to read {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

impl LoadError {
    /// Path of the file that failed.
    pub fn path(&self) -> &Path {
        match self {
            LoadError::MissingFile { path, .. } | LoadError::Parse { path, .. } => path,
        }
    }
}

fn format_listing(files: &[String]) -> String {
    if files.is_empty() {
        "<none>".to_string()
    } else {
        files.join(", ")
    }
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load `filename` from `base_dir` as a header-named [`Table`].
///
/// Cells are kept as raw text. Rows shorter or longer than the header are
/// accepted; missing trailing cells read as empty.
pub fn load_csv(base_dir: &Path, filename: &str) -> Result<Table, LoadError> {
    let base_dir = std::path::absolute(base_dir).unwrap_or_else(|_| base_dir.to_path_buf());
    let path = base_dir.join(filename);

    if !path.is_file() {
        let available = list_files(&base_dir);
        log::error!(
            "Missing file {} (found {} entries in {})",
            path.display(),
            available.len(),
            base_dir.display()
        );
        return Err(LoadError::MissingFile {
            path,
            base_dir,
            available,
        });
    }

    let parse_err = |source| LoadError::Parse {
        path: path.clone(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(&path)
        .map_err(parse_err)?;

    let headers: Vec<String> = reader
        .headers()
        .map_err(parse_err)?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result.map_err(parse_err)?;
        rows.push(record.iter().map(|c| c.to_string()).collect());
    }

    let table = Table::new(headers, rows);
    log::info!(
        "Loaded {} ({} rows, columns {:?})",
        filename,
        table.len(),
        table.headers
    );
    Ok(table)
}

/// Sorted names of the entries in `dir`. An unreadable directory lists as empty.
pub fn list_files(dir: &Path) -> Vec<String> {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return Vec::new();
    };
    let mut names: Vec<String> = entries
        .filter_map(|e| e.ok())
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
