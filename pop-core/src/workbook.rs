//! Reading the county estimates sheet into a [`PopulationTable`].
//!
//! A load opens the workbook once, copies the sheet into memory and closes
//! the file before returning. Callers keep the table and reuse it; nothing
//! here re-reads the file behind their back.

use std::path::{Path, PathBuf};

use calamine::{Data, Reader, open_workbook_auto};
use tracing::info;

use crate::{
    config::SourceConfig,
    error::{Error, Result},
    extract::{self, SkipTally},
    record::StatePopulationRecord,
};

/// Records retained from one load, plus where they came from.
#[derive(Clone, Debug, PartialEq)]
pub struct PopulationTable {
    pub source: PathBuf,
    pub sheet: String,
    pub records: Vec<StatePopulationRecord>,
    pub skipped: SkipTally,
}

/// Reads every row of `sheet` as display strings.
///
/// Cells keep their absolute column index even when the sheet's used range
/// does not start at column A. Trailing empty cells are dropped, so a blank
/// row comes back with no cells.
///
/// ### Errors
/// - [`Error::FileNotFound`] if `path` is not a file.
/// - [`Error::SheetNotFound`] if the workbook has no sheet named `sheet`.
/// - [`Error::Workbook`] for any other failure reported by `calamine`.
pub fn read_sheet_rows(path: &Path, sheet: &str) -> Result<Vec<Vec<String>>> {
    if !path.is_file() {
        return Err(Error::FileNotFound(path.to_path_buf()));
    }

    let wrap = |source| Error::Workbook {
        path: path.to_path_buf(),
        source,
    };

    let mut workbook = open_workbook_auto(path).map_err(wrap)?;

    let available = workbook.sheet_names();
    if !available.iter().any(|name| name == sheet) {
        return Err(Error::SheetNotFound {
            path: path.to_path_buf(),
            sheet: sheet.to_owned(),
            available,
        });
    }

    let range = workbook.worksheet_range(sheet).map_err(wrap)?;
    let col_offset = range.start().map_or(0, |(_, col)| col as usize);

    Ok(range.rows().map(|row| row_cells(row, col_offset)).collect())
}

fn row_cells(row: &[Data], col_offset: usize) -> Vec<String> {
    let used = row
        .iter()
        .rposition(|cell| !matches!(cell, Data::Empty))
        .map_or(0, |last| col_offset + last + 1);

    let mut cells = Vec::with_capacity(used);
    cells.resize(col_offset.min(used), String::new());
    cells.extend(
        row.iter()
            .take(used.saturating_sub(col_offset))
            .map(ToString::to_string),
    );
    cells
}

/// Loads and extracts the configured sheet.
pub fn load_table(cfg: &SourceConfig) -> Result<PopulationTable> {
    let rows = read_sheet_rows(&cfg.workbook, &cfg.sheet)?;
    let extract::Extraction { records, skipped } = extract::extract(&rows);

    info!(
        path = %cfg.workbook.display(),
        sheet = %cfg.sheet,
        rows = rows.len(),
        records = records.len(),
        blank = skipped.blank,
        paired_name = skipped.paired_name,
        malformed = skipped.malformed,
        "loaded population table"
    );

    Ok(PopulationTable {
        source: cfg.workbook.clone(),
        sheet: cfg.sheet.clone(),
        records,
        skipped,
    })
}
