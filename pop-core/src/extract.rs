//! Row filtering and projection.
//!
//! A sheet is a list of rows of string cells. Each row is classified as:
//! 1. [`RowSkip::Blank`] — one or fewer cells (blank rows, stray headers).
//! 2. [`RowSkip::PairedName`] — cell 5 equals cell 6. In the census layout
//!    these are the state and county names, so this drops the per-state
//!    summary rows.
//! 3. [`RowSkip::Malformed`] — the row could not be projected by
//!    [`StatePopulationRecord::from_row`].
//! 4. Otherwise the row becomes a record, in sheet order.

use std::fmt;

use tracing::{info, trace};

use crate::record::{StatePopulationRecord, columns};

/// Why a row was not retained.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RowSkip {
    Blank,
    PairedName,
    Malformed(String),
}

/// Number of skipped rows per reason.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SkipTally {
    pub blank: usize,
    pub paired_name: usize,
    pub malformed: usize,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Extraction {
    pub records: Vec<StatePopulationRecord>,
    pub skipped: SkipTally,
}

impl SkipTally {
    pub fn record(&mut self, skip: &RowSkip) {
        match skip {
            RowSkip::Blank => self.blank += 1,
            RowSkip::PairedName => self.paired_name += 1,
            RowSkip::Malformed(_) => self.malformed += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.blank + self.paired_name + self.malformed
    }
}

impl fmt::Display for RowSkip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowSkip::Blank => f.write_str("blank row"),
            RowSkip::PairedName => f.write_str("name matches paired name column"),
            RowSkip::Malformed(reason) => write!(f, "malformed: {reason}"),
        }
    }
}

/// Decides whether `row` is retained and projects it if so.
pub fn classify_row<S: AsRef<str>>(row: &[S]) -> Result<StatePopulationRecord, RowSkip> {
    if row.len() <= 1 {
        return Err(RowSkip::Blank);
    }

    if let (Some(a), Some(b)) = (row.get(columns::NAME), row.get(columns::PAIRED_NAME)) {
        if a.as_ref() == b.as_ref() {
            return Err(RowSkip::PairedName);
        }
    }

    StatePopulationRecord::from_row(row).map_err(|e| RowSkip::Malformed(e.reason))
}

/// Runs [`classify_row`] over every row, keeping retained records in order.
pub fn extract<S: AsRef<str>>(rows: &[Vec<S>]) -> Extraction {
    let mut out = Extraction::default();

    for (idx, row) in rows.iter().enumerate() {
        match classify_row(row) {
            Ok(rec) => {
                info!("{}", rec.diagnostic_line());
                out.records.push(rec);
            }
            Err(skip) => {
                trace!(row = idx, %skip, "skipping row");
                out.skipped.record(&skip);
            }
        }
    }

    out
}

pub fn extract_records<S: AsRef<str>>(rows: &[Vec<S>]) -> Vec<StatePopulationRecord> {
    extract(rows).records
}
