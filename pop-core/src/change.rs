//! Percentage population change between two years.

use std::fmt;

use crate::{error::InvalidInput, record::StatePopulationRecord};

/// Computes `((new - old) / old) * 100`.
///
/// The difference and ratio are taken in `f64`, so fractional percentages
/// survive. The result is negative for a decline.
///
/// ### Errors
/// - [`InvalidInput::ZeroBaseline`] if `old == 0`.
/// - [`InvalidInput::NegativePopulation`] if either count is negative
///   (the baseline is reported first).
pub fn percent_change(old: i64, new: i64) -> Result<f64, InvalidInput> {
    if old < 0 {
        return Err(InvalidInput::NegativePopulation(old));
    }
    if new < 0 {
        return Err(InvalidInput::NegativePopulation(new));
    }
    if old == 0 {
        return Err(InvalidInput::ZeroBaseline);
    }

    let diff = new as f64 - old as f64;
    Ok(diff / old as f64 * 100.0)
}

/// A computed change for one record.
#[derive(Clone, Debug, PartialEq)]
pub struct PopulationChange {
    pub name: String,
    pub from: i64,
    pub to: i64,
    pub percent: f64,
}

impl StatePopulationRecord {
    /// Percentage change from the 2020 to the 2021 population, named by
    /// [`StatePopulationRecord::label`].
    pub fn change(&self) -> Result<PopulationChange, InvalidInput> {
        let percent = percent_change(self.population_2020, self.population_2021)?;
        Ok(PopulationChange {
            name: self.label(),
            from: self.population_2020,
            to: self.population_2021,
            percent,
        })
    }
}

impl fmt::Display for PopulationChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {:+.2}% ({} → {})",
            self.name, self.percent, self.from, self.to
        )
    }
}
