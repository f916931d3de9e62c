pub mod error;
pub mod logger;
pub mod plan;
pub mod runner;

// Re-export commonly used types
pub use error::{ReporterError, Result};
pub use runner::{RunListener, RunStats, Runner, TrackReporter};
