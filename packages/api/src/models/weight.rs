//! Server-side row shape of the `weights_with_bmi` view and its projection
//! into the shared [`WeightRecord`].

#[cfg(feature = "server")]
use chrono::NaiveDate;
#[cfg(feature = "server")]
use sqlx::FromRow;
#[cfg(feature = "server")]
use store::WeightRecord;
#[cfg(feature = "server")]
use uuid::Uuid;

/// Full row from the `weights_with_bmi` view.
#[cfg(feature = "server")]
#[derive(Debug, Clone, FromRow)]
pub struct WeightWithBmiRow {
    pub id: i64,
    pub user_id: Uuid,
    pub weight: f64,
    pub created_on: NaiveDate,
    pub bmi: Option<f64>,
    pub bmi_category: Option<String>,
    pub category_description: Option<String>,
    pub difference: Option<f64>,
    pub one_week_average: Option<f64>,
}

#[cfg(feature = "server")]
impl WeightWithBmiRow {
    /// Convert to the client-safe record, dropping the owner id.
    pub fn to_record(&self) -> WeightRecord {
        WeightRecord {
            id: self.id,
            weight: self.weight,
            created_on: self.created_on,
            bmi: self.bmi,
            bmi_category: self.bmi_category.clone(),
            category_description: self.category_description.clone(),
            difference: self.difference,
            one_week_average: self.one_week_average,
        }
    }
}

#[cfg(all(test, feature = "server"))]
mod tests {
    use super::*;

    #[test]
    fn record_projection_drops_the_owner() {
        let row = WeightWithBmiRow {
            id: 7,
            user_id: Uuid::new_v4(),
            weight: 81.4,
            created_on: "2026-08-06".parse().unwrap(),
            bmi: Some(25.1),
            bmi_category: Some("Overweight".into()),
            category_description: Some("Above the healthy range".into()),
            difference: Some(-0.4),
            one_week_average: Some(81.9),
        };

        let record = row.to_record();
        assert_eq!(record.id, 7);
        assert_eq!(record.weight, 81.4);
        assert_eq!(record.bmi, Some(25.1));
        assert_eq!(record.signed_difference().as_deref(), Some("-0.4"));
    }
}
