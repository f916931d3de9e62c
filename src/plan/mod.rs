pub mod loader;
pub mod types;

pub use loader::PlanLoader;
pub use types::{RunPlan, SuitePlan, TestPlan};
