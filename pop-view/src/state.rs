//! Application state shared between the UI callbacks.
//!
//! [`AppState`] holds the cached table, the current selection and the
//! message label. It has no egui dependency; [`crate::viewer::Viewer`]
//! reads it to draw and calls into it from button and list callbacks.

use pop_core::{
    error::Result as LoadResult, record::StatePopulationRecord, workbook::PopulationTable,
};
use tracing::{error, warn};

pub const PROMPT: &str = "Select an entry, then press \"Compute change\".";

/// Outcome of the most recent load.
#[derive(Debug)]
pub enum LoadStatus {
    Loaded(PopulationTable),
    Failed(String),
}

/// ### Fields
/// - `status` - Cached table from the last load, or its error message.
/// - `selected` - Index into the table's records, if any entry is selected.
/// - `message` - Text shown in the message label.
#[derive(Debug)]
pub struct AppState {
    status: LoadStatus,
    selected: Option<usize>,
    message: String,
}

impl AppState {
    pub fn new(load: LoadResult<PopulationTable>) -> Self {
        let mut state = Self {
            status: LoadStatus::Failed(String::new()),
            selected: None,
            message: String::new(),
        };
        state.apply_load(load);
        state
    }

    /// Replaces the cached table with the result of a fresh load.
    ///
    /// The selection is always cleared, since record indices from the old
    /// table do not carry over.
    pub fn apply_load(&mut self, load: LoadResult<PopulationTable>) {
        self.selected = None;
        match load {
            Ok(table) => {
                self.message = format!(
                    "Loaded {} entries from {}. {PROMPT}",
                    table.records.len(),
                    table.source.display()
                );
                self.status = LoadStatus::Loaded(table);
            }
            Err(e) => {
                error!(error = %e, "failed to load population table");
                self.message = format!("Could not load data: {e}");
                self.status = LoadStatus::Failed(e.to_string());
            }
        }
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    pub fn table(&self) -> Option<&PopulationTable> {
        match &self.status {
            LoadStatus::Loaded(table) => Some(table),
            LoadStatus::Failed(_) => None,
        }
    }

    pub fn records(&self) -> &[StatePopulationRecord] {
        self.table()
            .map(|t| t.records.as_slice())
            .unwrap_or_default()
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_record(&self) -> Option<&StatePopulationRecord> {
        self.selected.and_then(|i| self.records().get(i))
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Marks entry `index` as selected. Out-of-range indices are ignored.
    ///
    /// Selecting never triggers a computation.
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.records().len() {
            self.selected = Some(index);
            true
        } else {
            false
        }
    }

    /// Computes the 2020→2021 change for the selected record and stores
    /// the outcome in `message`.
    pub fn compute_selected(&mut self) {
        let Some(record) = self.selected_record() else {
            self.message = PROMPT.to_owned();
            return;
        };

        self.message = match record.change() {
            Ok(change) => change.to_string(),
            Err(e) => {
                warn!(name = %record.name, error = %e, "cannot compute change");
                format!("{}: cannot compute change ({e})", record.name)
            }
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pop_core::{error::Error, extract::SkipTally};
    use std::path::PathBuf;

    fn rec(name: &str, p20: i64, p21: i64) -> StatePopulationRecord {
        StatePopulationRecord {
            name: name.to_owned(),
            paired_name: String::new(),
            population_2020: p20,
            population_2021: p21,
            population_change_raw: None,
        }
    }

    fn table(records: Vec<StatePopulationRecord>) -> PopulationTable {
        PopulationTable {
            source: PathBuf::from("counties.xlsx"),
            sheet: "co-est2021-alldata".to_owned(),
            records,
            skipped: SkipTally::default(),
        }
    }

    fn loaded() -> AppState {
        AppState::new(Ok(table(vec![
            rec("Autauga County", 100, 150),
            rec("Loving County", 0, 57),
            rec("Baldwin County", 200, 100),
        ])))
    }

    #[test]
    fn load_sets_message_and_clears_selection() {
        let state = loaded();
        assert_eq!(state.records().len(), 3);
        assert_eq!(state.selected(), None);
        assert!(state.message().starts_with("Loaded 3 entries"));
    }

    #[test]
    fn selecting_does_not_compute() {
        let mut state = loaded();
        let before = state.message().to_owned();

        assert!(state.select(2));
        assert_eq!(state.selected_record().unwrap().name, "Baldwin County");
        assert_eq!(state.message(), before);
    }

    #[test]
    fn out_of_range_selection_is_ignored() {
        let mut state = loaded();
        state.select(0);
        assert!(!state.select(3));
        assert_eq!(state.selected(), Some(0));
    }

    #[test]
    fn compute_uses_the_selected_record() {
        let mut state = loaded();
        state.select(0);
        state.compute_selected();
        assert_eq!(state.message(), "Autauga County: +50.00% (100 → 150)");

        state.select(2);
        state.compute_selected();
        assert_eq!(state.message(), "Baldwin County: -50.00% (200 → 100)");
    }

    #[test]
    fn zero_baseline_reports_an_error_message() {
        let mut state = loaded();
        state.select(1);
        state.compute_selected();

        let msg = state.message();
        assert!(msg.contains("zero baseline"), "{msg}");
        assert!(!msg.contains("inf") && !msg.contains("NaN"), "{msg}");
    }

    #[test]
    fn counties_of_one_state_are_told_apart() {
        let county = |paired: &str, p20, p21| StatePopulationRecord {
            paired_name: paired.to_owned(),
            ..rec("Alabama", p20, p21)
        };
        let mut state = AppState::new(Ok(table(vec![
            county("Autauga County", 100, 110),
            county("Baldwin County", 100, 90),
        ])));

        state.select(1);
        state.compute_selected();
        assert_eq!(state.message(), "Baldwin County, Alabama: -10.00% (100 → 90)");
    }

    #[test]
    fn compute_without_selection_prompts() {
        let mut state = loaded();
        state.compute_selected();
        assert_eq!(state.message(), PROMPT);
    }

    #[test]
    fn failed_load_is_an_error_state() {
        let mut state = loaded();
        state.select(1);

        state.apply_load(Err(Error::FileNotFound(PathBuf::from("missing.xlsx"))));

        assert!(matches!(state.status(), LoadStatus::Failed(msg) if msg.contains("missing.xlsx")));
        assert!(state.records().is_empty());
        assert_eq!(state.selected(), None);
        assert!(state.message().starts_with("Could not load data"));

        state.compute_selected();
        assert_eq!(state.message(), PROMPT);
    }

    #[test]
    fn reload_replaces_the_table() {
        let mut state = loaded();
        state.select(2);
        state.apply_load(Ok(table(vec![rec("Travis County", 10, 11)])));

        assert_eq!(state.records().len(), 1);
        assert_eq!(state.selected(), None);
    }
}
