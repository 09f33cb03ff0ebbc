//! # Domain records shared between client and server
//!
//! [`WeightRecord`] is the row shape served by the `weights_with_bmi` database
//! view: the raw entry plus the metrics the view derives from it. It is
//! `Serialize + Deserialize` so it can cross the server/client boundary via
//! Dioxus server functions, and it is the input type for everything in
//! [`crate::metrics`].
//!
//! The derived fields are owned by the database. The client never recomputes
//! them; it only reads, filters, and folds them into display values.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One weight entry as served by the `weights_with_bmi` view.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WeightRecord {
    pub id: i64,
    /// Recorded weight in kilograms.
    pub weight: f64,
    /// Calendar day the entry belongs to.
    pub created_on: NaiveDate,
    /// Body mass index from the profile height, one decimal. Absent until
    /// the user has set a height.
    pub bmi: Option<f64>,
    /// Name of the matching BMI band ("Normal", "Overweight", ...).
    pub bmi_category: Option<String>,
    pub category_description: Option<String>,
    /// Change against the previous entry. Absent for the first entry.
    pub difference: Option<f64>,
    /// Mean weight over the trailing seven days, this entry included.
    pub one_week_average: Option<f64>,
}

impl WeightRecord {
    /// Signed one-decimal difference the way the cards show it: "+0.4" / "-1.2".
    pub fn signed_difference(&self) -> Option<String> {
        self.difference.map(|d| {
            if d > 0.0 {
                format!("+{d:.1}")
            } else {
                format!("{d:.1}")
            }
        })
    }
}
