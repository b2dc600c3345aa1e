use crate::error::MalformedRow;

/// Zero-based column indices of the county estimates sheet.
///
/// These are fixed by the data file format and must not be derived from
/// the header row.
pub mod columns {
    pub const NAME: usize = 5;
    pub const PAIRED_NAME: usize = 6;
    pub const POP_2020: usize = 10;
    pub const POP_2021: usize = 11;
    pub const CHANGE_RAW: usize = 12;

    /// Minimum number of cells a row needs to be projected into a record.
    ///
    /// Column 12 is optional: a blank trailing cell is dropped when the
    /// sheet is read, so a row may end at column 11.
    pub const MIN_CELLS: usize = POP_2021 + 1;
}

/// Population figures for one state or county row.
///
/// `paired_name` is column 6. It is only used to tell apart entries that
/// share a `name`, such as the counties of one state.
#[derive(Clone, Debug, PartialEq)]
pub struct StatePopulationRecord {
    pub name: String,
    pub paired_name: String,
    pub population_2020: i64,
    pub population_2021: i64,
    pub population_change_raw: Option<f64>,
}

impl StatePopulationRecord {
    /// Projects columns 5, 6, 10, 11 and 12 of `row` into a record.
    ///
    /// ### Errors
    /// [`MalformedRow`] if the row has fewer than [`columns::MIN_CELLS`]
    /// cells, an empty name, or a population cell that is not a whole
    /// number. A missing or non-numeric column 12 is not an error.
    pub fn from_row<S: AsRef<str>>(row: &[S]) -> Result<Self, MalformedRow> {
        if row.len() < columns::MIN_CELLS {
            return Err(malformed(format!(
                "expected at least {} cells, found {}",
                columns::MIN_CELLS,
                row.len()
            )));
        }

        let name = row[columns::NAME].as_ref().trim();
        if name.is_empty() {
            return Err(malformed("empty name".to_owned()));
        }

        Ok(Self {
            name: name.to_owned(),
            paired_name: row[columns::PAIRED_NAME].as_ref().trim().to_owned(),
            population_2020: parse_count(row[columns::POP_2020].as_ref(), columns::POP_2020)?,
            population_2021: parse_count(row[columns::POP_2021].as_ref(), columns::POP_2021)?,
            population_change_raw: row
                .get(columns::CHANGE_RAW)
                .and_then(|cell| cell.as_ref().trim().parse().ok()),
        })
    }

    /// Display label, e.g. `Autauga County, Alabama`. Falls back to `name`
    /// when column 6 is empty or repeats it.
    pub fn label(&self) -> String {
        if self.paired_name.is_empty() || self.paired_name == self.name {
            self.name.clone()
        } else {
            format!("{}, {}", self.paired_name, self.name)
        }
    }

    /// Load-time console line: `<name>\t: <value10>\t:<value11>`.
    pub fn diagnostic_line(&self) -> String {
        format!(
            "{}\t: {}\t:{}",
            self.name, self.population_2020, self.population_2021
        )
    }
}

fn malformed(reason: String) -> MalformedRow {
    MalformedRow { reason }
}

/// Parses a whole-number cell. Numeric spreadsheet cells may come through
/// as floats, so `"39500000.0"` is accepted but `"12.5"` is not.
fn parse_count(cell: &str, column: usize) -> Result<i64, MalformedRow> {
    let cell = cell.trim();
    if let Ok(n) = cell.parse::<i64>() {
        return Ok(n);
    }
    match cell.parse::<f64>() {
        Ok(f) if f.is_finite() && f.fract() == 0.0 && f.abs() < i64::MAX as f64 => Ok(f as i64),
        _ => Err(malformed(format!(
            "column {column}: `{cell}` is not a whole number"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    fn ca_row() -> Vec<String> {
        row(&[
            "_", "_", "_", "_", "_", "CA", "X", "_", "_", "_", "39500000", "39200000", "-0.76",
        ])
    }

    #[test]
    fn projects_fixed_columns() {
        let rec = StatePopulationRecord::from_row(&ca_row()).unwrap();
        assert_eq!(rec.name, "CA");
        assert_eq!(rec.population_2020, 39_500_000);
        assert_eq!(rec.population_2021, 39_200_000);
        assert_eq!(rec.population_change_raw, Some(-0.76));
    }

    #[test]
    fn short_row_is_malformed() {
        let err = StatePopulationRecord::from_row(&row(&["a", "b", "c"])).unwrap_err();
        assert_eq!(err.reason, "expected at least 12 cells, found 3");
    }

    #[test]
    fn empty_name_is_malformed() {
        let mut r = ca_row();
        r[columns::NAME] = "  ".to_owned();
        let err = StatePopulationRecord::from_row(&r).unwrap_err();
        assert_eq!(err.reason, "empty name");
    }

    #[test]
    fn non_numeric_population_is_malformed() {
        // Header rows carry column labels where the counts would be.
        let mut r = ca_row();
        r[columns::POP_2020] = "POPESTIMATE2020".to_owned();
        let err = StatePopulationRecord::from_row(&r).unwrap_err();
        assert!(err.to_string().contains("column 10"), "{err}");

        let mut r = ca_row();
        r[columns::POP_2021] = "12.5".to_owned();
        assert!(StatePopulationRecord::from_row(&r).is_err());
    }

    #[test]
    fn float_formatted_counts_are_accepted() {
        let mut r = ca_row();
        r[columns::POP_2020] = "39500000.0".to_owned();
        let rec = StatePopulationRecord::from_row(&r).unwrap();
        assert_eq!(rec.population_2020, 39_500_000);
    }

    #[test]
    fn blank_change_column_is_none() {
        let mut r = ca_row();
        r[columns::CHANGE_RAW] = String::new();
        let rec = StatePopulationRecord::from_row(&r).unwrap();
        assert_eq!(rec.population_change_raw, None);
    }

    #[test]
    fn row_ending_at_column_11_is_kept() {
        let mut r = ca_row();
        r.truncate(columns::CHANGE_RAW);
        let rec = StatePopulationRecord::from_row(&r).unwrap();
        assert_eq!(rec.population_2021, 39_200_000);
        assert_eq!(rec.population_change_raw, None);
    }

    #[test]
    fn label_adds_paired_name_when_distinct() {
        let mut rec = StatePopulationRecord::from_row(&ca_row()).unwrap();
        assert_eq!(rec.paired_name, "X");
        assert_eq!(rec.label(), "X, CA");

        rec.paired_name = "CA".to_owned();
        assert_eq!(rec.label(), "CA");
        rec.paired_name.clear();
        assert_eq!(rec.label(), "CA");
    }

    #[test]
    fn diagnostic_line_format() {
        let rec = StatePopulationRecord::from_row(&ca_row()).unwrap();
        assert_eq!(rec.diagnostic_line(), "CA\t: 39500000\t:39200000");
    }
}
