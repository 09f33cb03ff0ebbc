pub mod date_range;
pub mod metrics;
pub mod models;
pub mod prefs;

mod memory;
pub use memory::MemoryStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStore;

pub use date_range::DateRange;
pub use metrics::{BmiZone, ChartPoint, BMI_ZONES};
pub use models::WeightRecord;
pub use prefs::PreferenceStore;
