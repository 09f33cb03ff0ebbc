//! Profile rows from `user_details` and their client-safe projection.
//!
//! The profile exists purely to parameterise the derived metrics: height
//! feeds the BMI view, the target weight feeds the goal-progress card.

use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use chrono::{DateTime, Utc};
#[cfg(feature = "server")]
use sqlx::FromRow;
#[cfg(feature = "server")]
use uuid::Uuid;

/// Full row from the `user_details` table.
#[cfg(feature = "server")]
#[derive(Debug, Clone, FromRow)]
pub struct UserDetailsRow {
    pub user_id: Uuid,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub height_cm: i32,
    pub target_weight: Option<f64>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[cfg(feature = "server")]
impl UserDetailsRow {
    /// Convert to the client-safe projection.
    pub fn to_info(&self) -> UserDetailsInfo {
        UserDetailsInfo {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            height_cm: self.height_cm,
            target_weight: self.target_weight,
        }
    }
}

/// Profile fields safe to send to the client.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UserDetailsInfo {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub height_cm: i32,
    pub target_weight: Option<f64>,
}

impl UserDetailsInfo {
    /// "First Last" when either part is present.
    pub fn full_name(&self) -> Option<String> {
        match (self.first_name.as_deref(), self.last_name.as_deref()) {
            (None, None) => None,
            (first, last) => Some(
                [first, last]
                    .into_iter()
                    .flatten()
                    .collect::<Vec<_>>()
                    .join(" "),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_name_joins_the_present_parts() {
        let mut info = UserDetailsInfo::default();
        assert_eq!(info.full_name(), None);

        info.first_name = Some("Sam".into());
        assert_eq!(info.full_name().as_deref(), Some("Sam"));

        info.last_name = Some("Riley".into());
        assert_eq!(info.full_name().as_deref(), Some("Sam Riley"));
    }
}
