pub mod events;
pub mod executor;
pub mod reporter;
pub mod types;

pub use events::{Event, RunListener};
pub use executor::Runner;
pub use reporter::TrackReporter;
pub use types::{Outcome, RunStats, Suite, Test, TestError};
