pub mod enums;
pub mod error;
pub mod structs;

// Re-export the core types to provide a clean public API.
pub use enums::Verdict;
pub use error::CoreError;
pub use structs::{AnalyzerResponse, CommandStat, Dataset, TOTAL_LABEL, YearBucket};
