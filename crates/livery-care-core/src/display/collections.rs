//! Collection wrapper types for displaying groups of domain objects.

use std::{fmt, ops::Index};

use crate::models::CarePlanSummary;

/// Newtype wrapper for displaying a list of plan summaries.
///
/// # Examples
///
/// ```rust
/// use livery_care_core::display::CarePlanSummaries;
///
/// let summaries = CarePlanSummaries(vec![]);
/// assert_eq!(summaries.to_string(), "No care plans found.\n");
/// ```
pub struct CarePlanSummaries(pub Vec<CarePlanSummary>);

impl CarePlanSummaries {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CarePlanSummary> {
        self.0.iter()
    }
}

impl Index<usize> for CarePlanSummaries {
    type Output = CarePlanSummary;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<'a> IntoIterator for &'a CarePlanSummaries {
    type Item = &'a CarePlanSummary;
    type IntoIter = std::slice::Iter<'a, CarePlanSummary>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for CarePlanSummaries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No care plans found.")
        } else {
            for summary in &self.0 {
                write!(f, "{summary}")?;
            }
            Ok(())
        }
    }
}
