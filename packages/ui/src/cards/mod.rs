//! Dashboard cards.

mod current_weight;
pub use current_weight::CurrentWeightCard;

mod stats;
pub use stats::StatsCard;

mod weekly_progress;
pub use weekly_progress::WeeklyProgressCard;
