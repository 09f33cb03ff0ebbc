//! BMI bands from the `bmi_categories` table.

use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use sqlx::FromRow;

/// Full row from the `bmi_categories` table.
#[cfg(feature = "server")]
#[derive(Debug, Clone, FromRow)]
pub struct BmiCategoryRow {
    pub id: i32,
    pub name: String,
    pub min_value: f64,
    pub max_value: Option<f64>,
    pub description: Option<String>,
    pub recommendations: Option<String>,
}

#[cfg(feature = "server")]
impl BmiCategoryRow {
    pub fn to_info(&self) -> BmiCategoryInfo {
        BmiCategoryInfo {
            name: self.name.clone(),
            min_value: self.min_value,
            max_value: self.max_value,
            description: self.description.clone(),
            recommendations: self.recommendations.clone(),
        }
    }
}

/// A BMI band as shown in the category legend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BmiCategoryInfo {
    pub name: String,
    pub min_value: f64,
    /// None marks the open-ended top band.
    pub max_value: Option<f64>,
    pub description: Option<String>,
    pub recommendations: Option<String>,
}
